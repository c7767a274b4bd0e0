//! The seam between prompters and whatever draws the prompt
//!
//! A [`Renderer`] owns the terminal: it shows the question, reads keys, and
//! keeps asking until the [`ValidateHook`] accepts an answer or the user
//! aborts. [`crate::terminal::Terminal`] is the crossterm backed one.

use crate::{
    error::{Result, ValidatorFault},
    validate::{Validation, ValidatorChain},
};
use async_trait::async_trait;
use futures::future::{self, BoxFuture, FutureExt};
use log::trace;

/// How typed text is echoed back
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    /// Shown as typed
    Text,
    /// Every typed character shown as `*`
    Password,
    /// Nothing shown at all
    Invisible,
}
impl InputKind {
    /// What to echo for `input`
    pub fn transform(&self, input: &str) -> String {
        match self {
            InputKind::Text => String::from(input),
            InputKind::Password => input.chars().map(|_| '*').collect(),
            InputKind::Invisible => String::default(),
        }
    }
    /// Width of one echoed character
    pub fn cursor_mult(&self) -> usize {
        match self {
            InputKind::Text | InputKind::Password => 1,
            InputKind::Invisible => 0,
        }
    }
}
impl Default for InputKind {
    fn default() -> InputKind {
        InputKind::Text
    }
}

/// What the renderer needs to show a text prompt
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Question {
    pub message: String,
    pub default: Option<String>,
    pub kind: InputKind,
}

/// The renderer's view of a validation outcome
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Accept,
    /// Show the message and let the user try again
    Reject(String),
}
impl From<Validation> for Verdict {
    fn from(validation: Validation) -> Verdict {
        match validation {
            Validation::Valid => Verdict::Accept,
            Validation::Invalid(msg) => Verdict::Reject(msg),
        }
    }
}

/// Validation callback handed to a renderer
///
/// The renderer calls [`ValidateHook::call`] with the candidate text and gets
/// back the pending completion. Each call evaluates on its own copy of the
/// candidate, so a renderer may drop a stale completion and start a new one.
#[derive(Debug, Clone, Default)]
pub struct ValidateHook {
    chain: ValidatorChain,
}
impl ValidateHook {
    pub fn new(chain: ValidatorChain) -> ValidateHook {
        ValidateHook { chain }
    }

    pub fn call(&self, candidate: &str) -> BoxFuture<'static, std::result::Result<Verdict, ValidatorFault>> {
        if self.chain.is_empty() {
            return future::ready(Ok(Verdict::Accept)).boxed();
        }
        trace!("Validating answer against {} validators", self.chain.len());
        self.chain
            .evaluate(candidate)
            .map(|result| result.map(Verdict::from))
            .boxed()
    }
}

/// Draws prompts and collects answers
///
/// `Ok(None)` means the user aborted the prompt.
#[async_trait]
pub trait Renderer: Send {
    async fn confirm(&mut self, message: &str, default: bool) -> Result<Option<bool>>;

    /// Asks until `hook` accepts an answer
    ///
    /// A fault from `hook` ends the prompt and is returned as is.
    async fn input(&mut self, question: &Question, hook: &ValidateHook) -> Result<Option<String>>;
}
