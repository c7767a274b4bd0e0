//! Answer validators and ordered, short-circuiting validator chains
//!
//! A [`Validator`] checks one candidate answer and either accepts it,
//! rejects it with a message for the user, or faults. A [`ValidatorChain`]
//! runs its validators one after another, stopping at the first one that
//! does not accept.

use crate::error::ValidatorFault;
use async_trait::async_trait;
use futures::future::{BoxFuture, FutureExt};
use log::{debug, warn};
use std::fmt;
use std::future::Future;
use std::iter::FromIterator;
use std::sync::Arc;

/// Outcome of checking an answer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Validation {
    /// The answer is acceptable
    Valid,
    /// The answer is not acceptable, the message is shown to the user
    Invalid(String),
}
impl Validation {
    pub fn is_valid(&self) -> bool {
        *self == Validation::Valid
    }
}

pub type ValidationResult = std::result::Result<Validation, ValidatorFault>;

/// Checks a candidate answer
///
/// Closures taking the answer as an owned `String` and returning a future
/// of [`ValidationResult`] are validators, so simple async checks can be
/// written inline:
///
/// ```rust,ignore
/// use chained_prompts::validate::{Validation, ValidationResult, ValidatorChain};
///
/// let chain = ValidatorChain::new().with(|input: String| async move {
///     if input.contains('@') {
///         ValidationResult::Ok(Validation::Valid)
///     } else {
///         Ok(Validation::Invalid("That is not an email address".to_string()))
///     }
/// });
/// ```
#[async_trait]
pub trait Validator: Send + Sync {
    async fn validate(&self, input: &str) -> ValidationResult;
}

#[async_trait]
impl<F, Fut> Validator for F
where
    F: Fn(String) -> Fut + Send + Sync,
    Fut: Future<Output = ValidationResult> + Send + 'static,
{
    async fn validate(&self, input: &str) -> ValidationResult {
        (self)(input.to_string()).await
    }
}

/// Synchronous validator, see [`from_fn`]
pub struct FnValidator<F> {
    check: F,
}
impl<F> fmt::Debug for FnValidator<F> {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        fmt.debug_struct("FnValidator").finish()
    }
}

#[async_trait]
impl<F> Validator for FnValidator<F>
where
    F: Fn(&str) -> Result<(), String> + Send + Sync,
{
    async fn validate(&self, input: &str) -> ValidationResult {
        Ok(match (self.check)(input) {
            Ok(()) => Validation::Valid,
            Err(msg) => Validation::Invalid(msg),
        })
    }
}

/// Turns a plain validation closure into a [`Validator`]
///
/// # Arguments
///
/// * `check` - Validation closure that accepts a string, and returns
///     Ok if valid, or a string error to show if invalid.
pub fn from_fn<F>(check: F) -> FnValidator<F>
where
    F: Fn(&str) -> Result<(), String> + Send + Sync,
{
    FnValidator { check }
}

/// Rejects answers that are empty or only whitespace
pub fn required<S>(message: S) -> FnValidator<impl Fn(&str) -> Result<(), String> + Send + Sync>
where
    S: Into<String>,
{
    let message = message.into();
    from_fn(move |input: &str| {
        if input.trim().is_empty() {
            Err(message.clone())
        } else {
            Ok(())
        }
    })
}

/// Rejects answers shorter than `min` characters
pub fn min_len<S>(
    min: usize,
    message: S,
) -> FnValidator<impl Fn(&str) -> Result<(), String> + Send + Sync>
where
    S: Into<String>,
{
    let message = message.into();
    from_fn(move |input: &str| {
        if input.chars().count() < min {
            Err(message.clone())
        } else {
            Ok(())
        }
    })
}

/// Rejects answers longer than `max` characters
pub fn max_len<S>(
    max: usize,
    message: S,
) -> FnValidator<impl Fn(&str) -> Result<(), String> + Send + Sync>
where
    S: Into<String>,
{
    let message = message.into();
    from_fn(move |input: &str| {
        if input.chars().count() > max {
            Err(message.clone())
        } else {
            Ok(())
        }
    })
}

/// Ordered list of validators applied with first-failure short-circuit
///
/// Validators run strictly left to right, never two at once, and every one of
/// them sees the original answer. The first rejection or fault ends the
/// evaluation and later validators are not called. An empty chain accepts
/// everything.
#[derive(Clone, Default)]
pub struct ValidatorChain {
    validators: Vec<Arc<dyn Validator>>,
}
impl fmt::Debug for ValidatorChain {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        fmt.debug_struct("ValidatorChain")
            .field("validators", &self.validators.len())
            .finish()
    }
}
impl ValidatorChain {
    /// Returns an empty chain
    pub fn new() -> ValidatorChain {
        ValidatorChain::default()
    }

    /// Returns a chain holding just `validator`
    pub fn single<V>(validator: V) -> ValidatorChain
    where
        V: Validator + 'static,
    {
        ValidatorChain::new().with(validator)
    }

    /// Appends a validator, it runs after all the ones already in the chain
    pub fn with<V>(mut self, validator: V) -> ValidatorChain
    where
        V: Validator + 'static,
    {
        self.push(validator);
        self
    }

    pub fn push<V>(&mut self, validator: V)
    where
        V: Validator + 'static,
    {
        self.validators.push(Arc::new(validator));
    }

    pub fn push_shared(&mut self, validator: Arc<dyn Validator>) {
        self.validators.push(validator);
    }

    pub fn len(&self) -> usize {
        self.validators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.validators.is_empty()
    }

    /// Runs the chain against `answer`
    ///
    /// The returned future owns everything it needs, so several evaluations
    /// may be in flight at once without affecting each other.
    pub fn evaluate(&self, answer: &str) -> BoxFuture<'static, ValidationResult> {
        let validators = self.validators.clone();
        let answer = answer.to_string();
        async move {
            let total = validators.len();
            for (position, validator) in validators.iter().enumerate() {
                match validator.validate(&answer).await {
                    Ok(Validation::Valid) => {}
                    Ok(invalid) => {
                        debug!("Validator {}/{} rejected the answer", position + 1, total);
                        return Ok(invalid);
                    }
                    Err(fault) => {
                        warn!("Validator {}/{} faulted: {}", position + 1, total, fault);
                        return Err(fault);
                    }
                }
            }
            Ok(Validation::Valid)
        }
        .boxed()
    }
}
impl FromIterator<Arc<dyn Validator>> for ValidatorChain {
    fn from_iter<I: IntoIterator<Item = Arc<dyn Validator>>>(iter: I) -> ValidatorChain {
        ValidatorChain {
            validators: iter.into_iter().collect(),
        }
    }
}
impl Extend<Arc<dyn Validator>> for ValidatorChain {
    fn extend<I: IntoIterator<Item = Arc<dyn Validator>>>(&mut self, iter: I) {
        self.validators.extend(iter);
    }
}

#[async_trait]
impl Validator for ValidatorChain {
    async fn validate(&self, input: &str) -> ValidationResult {
        self.evaluate(input).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures_timer::Delay;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;
    use std::time::Duration;

    fn counted(calls: Arc<AtomicUsize>, result: Validation) -> impl Validator {
        move |_input: String| {
            let calls = calls.clone();
            let result = result.clone();
            async move {
                calls.fetch_add(1, Ordering::SeqCst);
                ValidationResult::Ok(result)
            }
        }
    }

    fn recorded(id: usize, order: Arc<Mutex<Vec<usize>>>, delay_ms: u64) -> impl Validator {
        move |_input: String| {
            let order = order.clone();
            async move {
                Delay::new(Duration::from_millis(delay_ms)).await;
                order.lock().unwrap().push(id);
                ValidationResult::Ok(Validation::Valid)
            }
        }
    }

    fn invalid(msg: &str) -> Validation {
        Validation::Invalid(msg.to_string())
    }

    #[tokio::test]
    async fn empty_chain_accepts_everything() {
        let chain = ValidatorChain::new();
        for answer in &["", " ", "anything", "ünïcödé"] {
            assert_eq!(chain.evaluate(answer).await.unwrap(), Validation::Valid);
        }
    }

    #[tokio::test]
    async fn first_failure_short_circuits() {
        let second = Arc::new(AtomicUsize::new(0));
        let chain = ValidatorChain::new()
            .with(from_fn(|_| Err("first says no".to_string())))
            .with(counted(second.clone(), Validation::Valid));

        assert_eq!(chain.evaluate("x").await.unwrap(), invalid("first says no"));
        assert_eq!(second.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn later_failure_is_returned() {
        let first = Arc::new(AtomicUsize::new(0));
        let chain = ValidatorChain::new()
            .with(counted(first.clone(), Validation::Valid))
            .with(from_fn(|_| Err("second says no".to_string())));

        assert_eq!(chain.evaluate("x").await.unwrap(), invalid("second says no"));
        assert_eq!(first.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn all_run_once_in_order() {
        let order = Arc::new(Mutex::new(Vec::new()));
        // Later validators finish faster, so any overlap would reorder them
        let chain = ValidatorChain::new()
            .with(recorded(1, order.clone(), 30))
            .with(recorded(2, order.clone(), 15))
            .with(recorded(3, order.clone(), 0));

        assert_eq!(chain.evaluate("x").await.unwrap(), Validation::Valid);
        assert_eq!(*order.lock().unwrap(), vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn every_validator_sees_the_original_answer() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let mut chain = ValidatorChain::new();
        for _ in 0..3 {
            let seen = seen.clone();
            chain.push(move |input: String| {
                let seen = seen.clone();
                async move {
                    seen.lock().unwrap().push(input);
                    ValidationResult::Ok(Validation::Valid)
                }
            });
        }

        chain.evaluate("hunter2").await.unwrap();
        assert_eq!(*seen.lock().unwrap(), vec!["hunter2"; 3]);
    }

    #[tokio::test]
    async fn fault_propagates_and_stops_the_chain() {
        let after = Arc::new(AtomicUsize::new(0));
        let chain = ValidatorChain::new()
            .with(|_input: String| async { Err::<Validation, _>(ValidatorFault::msg("backend down")) })
            .with(counted(after.clone(), Validation::Valid));

        let fault = chain.evaluate("x").await.unwrap_err();
        assert_eq!(fault.to_string(), "backend down");
        assert_eq!(after.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn chains_nest() {
        let inner = ValidatorChain::single(required("Required"));
        let chain = ValidatorChain::new()
            .with(inner)
            .with(max_len(3, "Too long"));

        assert_eq!(chain.evaluate("  ").await.unwrap(), invalid("Required"));
        assert_eq!(chain.evaluate("abcd").await.unwrap(), invalid("Too long"));
        assert_eq!(chain.evaluate("abc").await.unwrap(), Validation::Valid);
    }

    #[tokio::test]
    async fn collects_shared_validators() {
        let shared: Vec<Arc<dyn Validator>> = vec![
            Arc::new(min_len(2, "Too short")),
            Arc::new(max_len(4, "Too long")),
        ];
        let chain: ValidatorChain = shared.into_iter().collect();

        assert_eq!(chain.len(), 2);
        assert_eq!(chain.evaluate("a").await.unwrap(), invalid("Too short"));
        assert_eq!(chain.evaluate("abcde").await.unwrap(), invalid("Too long"));
        assert!(chain.evaluate("abc").await.unwrap().is_valid());
    }

    #[test]
    fn length_counts_characters() {
        let chain = ValidatorChain::single(min_len(3, "Too short"));
        let result = futures::executor::block_on(chain.evaluate("äöü"));
        assert_eq!(result.unwrap(), Validation::Valid);
    }

    #[tokio::test]
    async fn overlapping_evaluations_are_independent() {
        let chain = ValidatorChain::single(|input: String| async move {
            Delay::new(Duration::from_millis(if input == "slow" { 20 } else { 0 })).await;
            if input.len() > 3 {
                ValidationResult::Ok(Validation::Valid)
            } else {
                Ok(Validation::Invalid(format!("{} is too short", input)))
            }
        });

        let (slow, fast) = futures::join!(chain.evaluate("slow"), chain.evaluate("abc"));
        assert_eq!(slow.unwrap(), Validation::Valid);
        assert_eq!(fast.unwrap(), invalid("abc is too short"));
    }
}
