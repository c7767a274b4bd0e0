//! Errors surfaced by prompts and validators

use std::error::Error as StdError;
use thiserror::Error;

/// A validator broke while checking an answer
///
/// This is not a rejected answer (see `validate::Validation::Invalid`),
/// but the validator itself failing, e.g. a lookup it depends on erroring out.
/// It ends the prompt instead of asking the user again.
#[derive(Error, Debug)]
#[error(transparent)]
pub struct ValidatorFault(#[from] Box<dyn StdError + Send + Sync>);

impl ValidatorFault {
    /// Wrap any error as a validator fault
    pub fn new<E>(error: E) -> ValidatorFault
    where
        E: StdError + Send + Sync + 'static,
    {
        ValidatorFault(Box::new(error))
    }

    /// Validator fault carrying only a message
    pub fn msg<S: Into<String>>(message: S) -> ValidatorFault {
        let message: String = message.into();
        ValidatorFault(message.into())
    }
}

#[derive(Error, Debug)]
pub enum PromptError {
    /// The renderer failed, e.g. the terminal is gone or the input stream closed.
    ///
    /// Displays exactly as the underlying failure.
    #[error(transparent)]
    Renderer(#[from] std::io::Error),

    #[error("Validator failed: {0}")]
    Validator(#[from] ValidatorFault),

    #[error("Prompt was aborted")]
    Aborted,
}

pub type Result<T> = std::result::Result<T, PromptError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn renderer_error_keeps_message() {
        for message in ["stream closed", "not a tty", ""] {
            let err: PromptError = io::Error::new(io::ErrorKind::Other, message).into();
            assert_eq!(err.to_string(), message);
        }
    }

    #[test]
    fn validator_fault_message() {
        let err: PromptError = ValidatorFault::msg("lookup failed").into();
        assert_eq!(err.to_string(), "Validator failed: lookup failed");
    }

    #[test]
    fn validator_fault_source() {
        let fault = ValidatorFault::new(io::Error::new(io::ErrorKind::TimedOut, "slow"));
        assert_eq!(fault.to_string(), "slow");
    }
}
