pub mod attempt;
pub mod config;
pub mod errors;
pub use attempt::{Attempt, AttemptId, IntoAttempt, Outcome, SideEffect};
pub use config::CaptureConfig;
pub use errors::{install_quiet_hook, Panic};
