//! Interactive prompts for the command line with ordered, asynchronous validation
//!
//! ```rust,ignore
//! use chained_prompts::{validate, ValidatorChain};
//!
//! let validators = ValidatorChain::new()
//!     .with(validate::required("You must type something!"))
//!     .with(validate::min_len(8, "Use at least 8 characters"));
//! let secret = chained_prompts::password("Choose a password", validators).await?;
//! ```

pub mod confirm;
pub mod error;
pub mod prompter;
pub mod renderer;
pub mod terminal;
pub mod text;
pub mod utils;
pub mod validate;

pub use error::{PromptError, Result, ValidatorFault};
pub use prompter::{Input, Prompter};
pub use renderer::{InputKind, Question, Renderer, ValidateHook, Verdict};
pub use terminal::Terminal;
pub use validate::{Validation, Validator, ValidatorChain};

use async_trait::async_trait;
use crossterm::event::KeyEvent;

/// Base prompt trait for the terminal widgets
///
/// You must `use` this when running [`confirm::ConfirmPrompt`] or
/// [`text::TextPrompt`] directly
#[async_trait]
pub trait Prompt<T> {
    async fn run(&mut self) -> Result<Option<T>>;
    fn display(&mut self) -> crossterm::Result<()>;
    fn handle_key_event(&mut self, event: KeyEvent);
}

/// Asks a yes/no question on the terminal
///
/// `default` is `false` unless given.
pub async fn confirm<S, D>(message: S, default: D) -> Result<bool>
where
    S: Into<String>,
    D: Into<Option<bool>>,
{
    Prompter::new(Terminal).confirm(message, default).await
}

/// Asks for text on the terminal until an answer passes every validator
pub async fn input(request: Input) -> Result<String> {
    Prompter::new(Terminal).input(request).await
}

/// Asks for a masked password on the terminal
pub async fn password<S>(message: S, validators: ValidatorChain) -> Result<String>
where
    S: Into<String>,
{
    Prompter::new(Terminal).password(message, validators).await
}
