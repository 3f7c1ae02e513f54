use super::{Attempt, AttemptId, Outcome};
use std::fmt;
impl fmt::Display for AttemptId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#x}", self.0)
    }
}
// Display and Debug render the same text: the identity token, then the
// variant and its payload.
impl<V: fmt::Debug, E: fmt::Debug> fmt::Display for Attempt<V, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.outcome {
            Outcome::Success(value) => write!(f, "Attempt[{}] success: {:?}", self.id, value),
            Outcome::Failure(error) => write!(f, "Attempt[{}] failure: {:?}", self.id, error),
        }
    }
}
impl<V: fmt::Debug, E: fmt::Debug> fmt::Debug for Attempt<V, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
