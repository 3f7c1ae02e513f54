use crate::config::{self, CaptureConfig};
use crate::errors::types::{payload_message, Panic};
use log::debug;
use std::any::Any;
use std::cell::Cell;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Once;
thread_local! {
    static CAPTURE_DEPTH: Cell<usize> = const { Cell::new(0) };
}
static QUIET_HOOK: Once = Once::new();
struct DepthGuard;
impl DepthGuard {
    fn enter() -> Self {
        CAPTURE_DEPTH.with(|depth| depth.set(depth.get() + 1));
        DepthGuard
    }
}
impl Drop for DepthGuard {
    fn drop(&mut self) {
        CAPTURE_DEPTH.with(|depth| depth.set(depth.get().saturating_sub(1)));
    }
}
/// True while the current thread is running inside [`capture`].
pub fn in_capture() -> bool {
    CAPTURE_DEPTH.with(|depth| depth.get() > 0)
}
/// Runs `operation`, turning a panic into an `Err`.
///
/// A panic whose payload already is an `E` (for example one raised by
/// `Attempt::unwrap`) yields that very payload; any other panic goes
/// through `E: From<Panic>`.
pub fn capture<T, E, F>(operation: F) -> Result<T, E>
where
    F: FnOnce() -> Result<T, E>,
    E: From<Panic> + 'static,
{
    let outcome = {
        let _guard = DepthGuard::enter();
        panic::catch_unwind(AssertUnwindSafe(operation))
    };
    match outcome {
        Ok(result) => result,
        Err(payload) => Err(error_from_payload(payload)),
    }
}
fn error_from_payload<E>(payload: Box<dyn Any + Send>) -> E
where
    E: From<Panic> + 'static,
{
    if config::current().log_captured_panics {
        debug!("captured panic: {}", payload_message(payload.as_ref()));
    }
    match payload.downcast::<E>() {
        Ok(error) => *error,
        Err(other) => E::from(Panic::from_payload(other)),
    }
}
fn should_forward(config: &CaptureConfig) -> bool {
    !in_capture() || config.report_captured_panics
}
/// Installs a panic hook that stays silent for panics raised inside a
/// capture region. Other panics reach the previously installed hook.
/// Calling this more than once has no further effect.
pub fn install_quiet_hook() {
    QUIET_HOOK
        .call_once(|| {
            let previous = panic::take_hook();
            panic::set_hook(
                Box::new(move |info| {
                    if should_forward(&config::current()) {
                        previous(info);
                    }
                }),
            );
            debug!("installed quiet panic hook");
        });
}
