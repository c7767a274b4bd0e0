//! Confirm, input and password prompts over any [`Renderer`]

use crate::{
    error::{PromptError, Result},
    renderer::{InputKind, Question, Renderer, ValidateHook},
    validate::{Validator, ValidatorChain},
};
use log::debug;

/// A text prompt to ask
///
/// Validators run in the order they were added, see [`ValidatorChain`].
///
/// # Examples
///
/// ```rust,ignore
/// use chained_prompts::{validate, Input};
///
/// let request = Input::new("What is your name?")
///     .with_default("Bob")
///     .with_validator(validate::required("You must type something!"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Input {
    message: String,
    kind: InputKind,
    default: Option<String>,
    validators: ValidatorChain,
}
impl Input {
    pub fn new<S>(message: S) -> Input
    where
        S: Into<String>,
    {
        Input {
            message: message.into(),
            ..Default::default()
        }
    }

    pub fn with_kind(mut self, kind: InputKind) -> Input {
        self.kind = kind;
        self
    }

    /// Suggested answer, submitted when the user enters nothing
    pub fn with_default<S>(mut self, default: S) -> Input
    where
        S: Into<String>,
    {
        self.default = Some(default.into());
        self
    }

    /// Adds one validator after the ones already present
    pub fn with_validator<V>(mut self, validator: V) -> Input
    where
        V: Validator + 'static,
    {
        self.validators.push(validator);
        self
    }

    /// Adds a whole chain after the validators already present
    pub fn with_validators(mut self, validators: ValidatorChain) -> Input {
        if self.validators.is_empty() {
            self.validators = validators;
        } else {
            self.validators.push(validators);
        }
        self
    }

    fn into_parts(self) -> (Question, ValidatorChain) {
        (
            Question {
                message: self.message,
                default: self.default,
                kind: self.kind,
            },
            self.validators,
        )
    }
}

fn answered<T>(answer: Option<T>) -> Result<T> {
    match answer {
        Some(answer) => {
            debug!("Prompt answered");
            Ok(answer)
        }
        None => {
            debug!("Prompt aborted by the user");
            Err(PromptError::Aborted)
        }
    }
}

/// Asks questions through a [`Renderer`]
///
/// Holds no state between prompts. The renderer decides when to ask again,
/// this never retries on its own.
#[derive(Debug, Default)]
pub struct Prompter<R> {
    renderer: R,
}
impl<R: Renderer> Prompter<R> {
    pub fn new(renderer: R) -> Prompter<R> {
        Prompter { renderer }
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn into_renderer(self) -> R {
        self.renderer
    }

    /// Asks a yes/no question, `default` is `false` unless given
    pub async fn confirm<S, D>(&mut self, message: S, default: D) -> Result<bool>
    where
        S: Into<String>,
        D: Into<Option<bool>>,
    {
        let message = message.into();
        let default = default.into().unwrap_or(false);
        debug!("Asking for confirmation (default {})", default);
        let answer = self.renderer.confirm(&message, default).await?;
        answered(answer)
    }

    /// Asks for text until an answer passes every validator
    pub async fn input(&mut self, request: Input) -> Result<String> {
        let (question, validators) = request.into_parts();
        debug!(
            "Asking for {:?} input with {} validators",
            question.kind,
            validators.len()
        );
        let hook = ValidateHook::new(validators);
        let answer = self.renderer.input(&question, &hook).await?;
        answered(answer)
    }

    /// Asks for a password, there is never a default
    pub async fn password<S>(&mut self, message: S, validators: ValidatorChain) -> Result<String>
    where
        S: Into<String>,
    {
        self.input(
            Input::new(message)
                .with_kind(InputKind::Password)
                .with_validators(validators),
        )
        .await
    }
}
