pub mod settings;
pub use settings::{current, install, CaptureConfig, LOG_PANICS_ENV, REPORT_PANICS_ENV};
