use crate::errors::{capture, Panic};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::sync::atomic::{AtomicU64, Ordering};
pub mod chain;
pub mod render;
pub use chain::SideEffect;
static NEXT_ID: AtomicU64 = AtomicU64::new(1);
/// Identity token of a single [`Attempt`] container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AttemptId(u64);
impl AttemptId {
    fn next() -> Self {
        AttemptId(NEXT_ID.fetch_add(1, Ordering::Relaxed))
    }
    pub fn get(self) -> u64 {
        self.0
    }
}
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome<V, E> {
    Success(V),
    Failure(E),
}
/// Either the value an operation produced or the error it failed with.
///
/// Built by [`Attempt::evaluate`] or [`Attempt::from_error`] and read-only
/// afterwards. Combinators consume the receiver and hand back a new
/// `Attempt`, except where they pass the receiver through untouched.
pub struct Attempt<V, E> {
    id: AttemptId,
    outcome: Outcome<V, E>,
}
/// Anything an operation may return to feed an [`Attempt`] chain.
pub trait IntoAttempt<V, E> {
    fn into_attempt(self) -> Attempt<V, E>;
}
impl<V, E> IntoAttempt<V, E> for Attempt<V, E> {
    fn into_attempt(self) -> Attempt<V, E> {
        self
    }
}
impl<V, E> IntoAttempt<V, E> for Result<V, E> {
    fn into_attempt(self) -> Attempt<V, E> {
        Attempt::from_outcome(
            match self {
                Ok(value) => Outcome::Success(value),
                Err(error) => Outcome::Failure(error),
            },
        )
    }
}
impl<V, E> Attempt<V, E> {
    fn from_outcome(outcome: Outcome<V, E>) -> Self {
        Self { id: AttemptId::next(), outcome }
    }
    /// Runs `operation` now. An `Err` it returns or a panic it raises
    /// becomes the failure payload.
    pub fn evaluate<F, R>(operation: F) -> Self
    where
        F: FnOnce() -> R,
        R: IntoAttempt<V, E>,
        E: From<Panic> + 'static,
    {
        capture(|| operation().into_attempt().into_result()).into_attempt()
    }
    pub fn from_error(error: E) -> Self {
        Self::from_outcome(Outcome::Failure(error))
    }
    pub fn from_value(value: V) -> Self {
        Self::from_outcome(Outcome::Success(value))
    }
    pub fn id(&self) -> AttemptId {
        self.id
    }
    pub fn is_success(&self) -> bool {
        matches!(self.outcome, Outcome::Success(_))
    }
    pub fn is_failure(&self) -> bool {
        !self.is_success()
    }
    pub fn value(&self) -> Option<&V> {
        match &self.outcome {
            Outcome::Success(value) => Some(value),
            Outcome::Failure(_) => None,
        }
    }
    pub fn error(&self) -> Option<&E> {
        match &self.outcome {
            Outcome::Success(_) => None,
            Outcome::Failure(error) => Some(error),
        }
    }
    pub fn outcome(&self) -> &Outcome<V, E> {
        &self.outcome
    }
    pub fn into_outcome(self) -> Outcome<V, E> {
        self.outcome
    }
    /// Returns the value, or whatever `handler` makes of the error.
    pub fn unwrap_or<F>(self, handler: F) -> V
    where
        F: FnOnce(E) -> V,
    {
        match self.outcome {
            Outcome::Success(value) => value,
            Outcome::Failure(error) => handler(error),
        }
    }
    /// Returns the value, or re-raises the original error payload as a panic.
    ///
    /// The payload is raised as-is with [`std::panic::panic_any`], so an
    /// enclosing [`Attempt::evaluate`] over the same `E` gets it back unchanged.
    pub fn unwrap(self) -> V
    where
        E: Send + 'static,
    {
        match self.outcome {
            Outcome::Success(value) => value,
            Outcome::Failure(error) => std::panic::panic_any(error),
        }
    }
    pub fn into_result(self) -> Result<V, E> {
        match self.outcome {
            Outcome::Success(value) => Ok(value),
            Outcome::Failure(error) => Err(error),
        }
    }
}
impl<V: Clone, E: Clone> Clone for Attempt<V, E> {
    fn clone(&self) -> Self {
        Self::from_outcome(self.outcome.clone())
    }
}
impl<V: PartialEq, E: PartialEq> PartialEq for Attempt<V, E> {
    fn eq(&self, other: &Self) -> bool {
        self.outcome == other.outcome
    }
}
impl<V: Eq, E: Eq> Eq for Attempt<V, E> {}
impl<V, E> From<Result<V, E>> for Attempt<V, E> {
    fn from(result: Result<V, E>) -> Self {
        result.into_attempt()
    }
}
impl<V, E> From<Outcome<V, E>> for Attempt<V, E> {
    fn from(outcome: Outcome<V, E>) -> Self {
        Self::from_outcome(outcome)
    }
}
impl<V, E> From<Attempt<V, E>> for Result<V, E> {
    fn from(attempt: Attempt<V, E>) -> Self {
        attempt.into_result()
    }
}
impl<V: Serialize, E: Serialize> Serialize for Attempt<V, E> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.outcome.serialize(serializer)
    }
}
impl<'de, V: Deserialize<'de>, E: Deserialize<'de>> Deserialize<'de> for Attempt<V, E> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Outcome::deserialize(deserializer).map(Self::from_outcome)
    }
}
#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::install_quiet_hook;
    use std::cell::Cell;
    #[test]
    fn test_evaluate_success() {
        let attempt: Attempt<&str, String> = Attempt::evaluate(|| Ok("success"));
        assert!(attempt.is_success());
        assert_eq!(attempt.value(), Some(&"success"));
        assert_eq!(attempt.error(), None);
        assert_eq!(attempt.unwrap(), "success");
    }
    #[test]
    fn test_evaluate_err_is_failure() {
        let attempt: Attempt<u32, String> = Attempt::evaluate(|| Err("failed".to_string()));
        assert!(! attempt.is_success());
        assert!(attempt.is_failure());
        assert_eq!(attempt.error().map(String::as_str), Some("failed"));
    }
    #[test]
    fn test_evaluate_captures_panic() {
        install_quiet_hook();
        let attempt: Attempt<u32, String> = Attempt::evaluate(|| -> Result<u32, String> {
            panic!("omg")
        });
        assert!(attempt.is_failure());
        assert_eq!(attempt.into_result(), Err("omg".to_string()));
    }
    #[test]
    fn test_evaluate_invokes_operation_once() {
        let calls = Cell::new(0);
        let attempt: Attempt<u32, String> = Attempt::evaluate(|| {
            calls.set(calls.get() + 1);
            Ok(5)
        });
        assert_eq!(calls.get(), 1);
        assert_eq!(attempt.unwrap(), 5);
    }
    #[test]
    fn test_from_error_invokes_nothing() {
        let attempt: Attempt<u32, &str> = Attempt::from_error("known");
        assert!(attempt.is_failure());
        assert_eq!(attempt.error(), Some(&"known"));
    }
    #[test]
    fn test_ids_are_distinct() {
        let a: Attempt<u32, String> = Attempt::from_value(1);
        let b: Attempt<u32, String> = Attempt::from_value(1);
        assert_ne!(a.id(), b.id());
        assert!(a == b);
        let c = a.clone();
        assert_ne!(c.id(), a.id());
    }
    #[test]
    fn test_unwrap_or_ignores_handler_on_success() {
        let calls = Cell::new(0);
        let value = Attempt::<&str, String>::from_value("success")
            .unwrap_or(|_| {
                calls.set(calls.get() + 1);
                "handled"
            });
        assert_eq!(value, "success");
        assert_eq!(calls.get(), 0);
    }
    #[test]
    fn test_unwrap_or_calls_handler_once_on_failure() {
        let calls = Cell::new(0);
        let value = Attempt::<String, String>::from_error("fail".to_string())
            .unwrap_or(|error| {
                calls.set(calls.get() + 1);
                format!("action failed with error {error}")
            });
        assert_eq!(value, "action failed with error fail");
        assert_eq!(calls.get(), 1);
    }
    #[test]
    fn test_unwrap_reraises_original_payload() {
        install_quiet_hook();
        let payload = std::panic::catch_unwind(|| {
                Attempt::<u32, String>::from_error("fail".to_string()).unwrap()
            })
            .unwrap_err();
        assert_eq!(payload.downcast_ref::<String>().map(String::as_str), Some("fail"));
    }
    #[test]
    fn test_result_conversions() {
        let attempt: Attempt<u32, String> = Ok(4).into();
        assert!(attempt.is_success());
        let result: Result<u32, String> = Attempt::from_error("x".to_string()).into();
        assert_eq!(result, Err("x".to_string()));
        let from_outcome: Attempt<u32, String> = Outcome::Success(2).into();
        assert_eq!(from_outcome.into_outcome(), Outcome::Success(2));
    }
    #[test]
    fn test_serde_uses_outcome_shape() {
        let ok: Attempt<u32, String> = Attempt::from_value(7);
        assert_eq!(serde_json::to_string(&ok).unwrap(), r#"{"success":7}"#);
        let failed: Attempt<u32, String> = serde_json::from_str(r#"{"failure":"boom"}"#)
            .unwrap();
        assert_eq!(failed.error().map(String::as_str), Some("boom"));
    }
}
