pub mod types;
pub mod capture;
pub use types::Panic;
pub use capture::{capture, in_capture, install_quiet_hook};
