//! Logger configuration - passed from higher layers or read from the environment

use crate::core::level::LogLevel;
use crate::core::logger::LOG_PREFIX;
use serde::{Deserialize, Serialize};

pub const LEVEL_ENV: &str = "RTC_SUPPORT_LOG_LEVEL";
pub const PREFIX_ENV: &str = "RTC_SUPPORT_LOG_PREFIX";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    pub level: LogLevel,
    pub prefix: String,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self { level: LogLevel::None, prefix: LOG_PREFIX.to_string() }
    }
}

impl LoggerConfig {
    pub fn new() -> Self { Self::default() }
    pub fn with_level(mut self, level: LogLevel) -> Self { self.level = level; self }
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self { self.prefix = prefix.into(); self }

    /// Read `RTC_SUPPORT_LOG_LEVEL` and `RTC_SUPPORT_LOG_PREFIX`.
    /// An unset or unrecognised level leaves the threshold at `None`.
    pub fn from_env() -> Self {
        let level = std::env::var(LEVEL_ENV)
            .ok()
            .and_then(|value| value.parse::<LogLevel>().ok())
            .unwrap_or_default();
        let prefix = std::env::var(PREFIX_ENV).unwrap_or_else(|_| LOG_PREFIX.to_string());
        Self { level, prefix }
    }
}
