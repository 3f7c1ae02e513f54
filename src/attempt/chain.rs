use super::{Attempt, IntoAttempt, Outcome};
use crate::errors::Panic;
use log::{debug, trace};
/// Return values a [`Attempt::tap`] side effect may produce. The value is
/// discarded; only an `Err` matters.
pub trait SideEffect<E> {
    fn into_side_effect(self) -> Result<(), E>;
}
impl<E> SideEffect<E> for () {
    fn into_side_effect(self) -> Result<(), E> {
        Ok(())
    }
}
impl<T, E> SideEffect<E> for Result<T, E> {
    fn into_side_effect(self) -> Result<(), E> {
        self.map(|_| ())
    }
}
impl<V, E> Attempt<V, E> {
    /// Feeds the value to `operation`. A failure is passed along as-is and
    /// `operation` is never called.
    pub fn and_then<V2, F, R>(self, operation: F) -> Attempt<V2, E>
    where
        F: FnOnce(V) -> R,
        R: IntoAttempt<V2, E>,
        E: From<Panic> + 'static,
    {
        match self.outcome {
            Outcome::Success(value) => {
                Attempt::evaluate(move || operation(value))
            }
            Outcome::Failure(error) => {
                trace!("and_then skipped: {} already failed", self.id);
                Attempt {
                    id: self.id,
                    outcome: Outcome::Failure(error),
                }
            }
        }
    }
    pub fn map<V2, F>(self, operation: F) -> Attempt<V2, E>
    where
        F: FnOnce(V) -> V2,
        E: From<Panic> + 'static,
    {
        self.and_then(|value| Ok::<V2, E>(operation(value)))
    }
    /// Runs `operation` for its side effect and keeps the current value.
    pub fn tap<F, R>(self, operation: F) -> Self
    where
        F: FnOnce(&V) -> R,
        R: SideEffect<E>,
        E: From<Panic> + 'static,
    {
        self.and_then(|value| operation(&value).into_side_effect().map(|()| value))
    }
    /// Hands the error to `handler` and continues with whatever it returns.
    ///
    /// A success is passed along as-is. When the handler answers with a
    /// failure whose payload equals the one it was given, the original
    /// `Attempt` comes back rather than the handler's copy, so its identity
    /// and rendering are unchanged.
    pub fn recover<F, R>(self, handler: F) -> Self
    where
        F: FnOnce(&E) -> R,
        R: IntoAttempt<V, E>,
        E: From<Panic> + PartialEq + 'static,
    {
        let recovered = match &self.outcome {
            Outcome::Success(_) => {
                trace!("recover skipped: {} succeeded", self.id);
                return self;
            }
            Outcome::Failure(error) => Attempt::evaluate(|| handler(error)),
        };
        let unchanged = matches!(
            (&recovered.outcome, &self.outcome),
            (Outcome::Failure(new), Outcome::Failure(old)) if new == old
        );
        if unchanged {
            debug!("recover kept original failure {}", self.id);
            self
        } else {
            recovered
        }
    }
    pub fn recover_value<F>(self, handler: F) -> Self
    where
        F: FnOnce(&E) -> V,
        E: From<Panic> + PartialEq + 'static,
    {
        self.recover(|error| Ok::<V, E>(handler(error)))
    }
}
