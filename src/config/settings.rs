use anyhow::{Context, Result};
use log::warn;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::sync::RwLock;
pub const REPORT_PANICS_ENV: &str = "ATTEMPT_REPORT_PANICS";
pub const LOG_PANICS_ENV: &str = "ATTEMPT_LOG_PANICS";
static CURRENT: RwLock<CaptureConfig> = RwLock::new(CaptureConfig::DEFAULT);
/// Controls how panics caught inside capture regions are surfaced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CaptureConfig {
    pub report_captured_panics: bool,
    pub log_captured_panics: bool,
}
impl CaptureConfig {
    const DEFAULT: CaptureConfig = CaptureConfig {
        report_captured_panics: false,
        log_captured_panics: true,
    };
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("invalid capture configuration")
    }
    pub fn load(path: &Path) -> Result<Self> {
        let data = fs::read_to_string(path)
            .with_context(|| format!("cannot read capture configuration {:?}", path))?;
        serde_json::from_str(&data)
            .with_context(|| format!("invalid capture configuration in {:?}", path))
    }
    /// Defaults overlaid with `ATTEMPT_REPORT_PANICS` and `ATTEMPT_LOG_PANICS`.
    pub fn from_env() -> Self {
        Self::default()
            .with_overrides(|key| std::env::var(key).ok())
    }
    pub fn with_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(flag) = lookup(REPORT_PANICS_ENV).and_then(|v| parse_flag(REPORT_PANICS_ENV, &v)) {
            self.report_captured_panics = flag;
        }
        if let Some(flag) = lookup(LOG_PANICS_ENV).and_then(|v| parse_flag(LOG_PANICS_ENV, &v)) {
            self.log_captured_panics = flag;
        }
        self
    }
}
impl Default for CaptureConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
fn parse_flag(key: &str, value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        other => {
            warn!("ignoring {}={:?}: expected a boolean flag", key, other);
            None
        }
    }
}
/// Replaces the process-wide capture configuration.
pub fn install(config: CaptureConfig) {
    let mut current = CURRENT.write().unwrap_or_else(|poisoned| poisoned.into_inner());
    *current = config;
}
pub fn current() -> CaptureConfig {
    CURRENT.read().unwrap_or_else(|poisoned| poisoned.into_inner()).clone()
}
