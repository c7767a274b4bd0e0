//! Renderer drawing on the process terminal with crossterm

use crate::{
    confirm::ConfirmPrompt,
    error::Result,
    renderer::{Question, Renderer, ValidateHook},
    text::TextPrompt,
    Prompt,
};
use async_trait::async_trait;

/// Draws prompts on stdout and reads keys from the terminal
///
/// Every call puts the terminal in raw mode for as long as the prompt runs.
#[derive(Debug, Default, Clone, Copy)]
pub struct Terminal;

#[async_trait]
impl Renderer for Terminal {
    async fn confirm(&mut self, message: &str, default: bool) -> Result<Option<bool>> {
        let mut prompt = ConfirmPrompt::new(message).set_initial(default);
        prompt.run().await
    }

    async fn input(&mut self, question: &Question, hook: &ValidateHook) -> Result<Option<String>> {
        let mut prompt = TextPrompt::new(question.message.as_str())
            .with_kind(question.kind)
            .with_hook(hook.clone());
        if let Some(default) = &question.default {
            prompt = prompt.with_default(default.as_str());
        }
        prompt.run().await
    }
}
