//! Logging configuration.

use serde::{Deserialize, Serialize};

/// Log level.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
#[derive(Default)]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warning,
    Error,
}

impl LogLevel {
    /// `tracing` filter directive for this level.
    pub fn directive(&self) -> &'static str {
        match self {
            LogLevel::Trace => "prism=trace",
            LogLevel::Debug => "prism=debug",
            LogLevel::Info => "prism=info",
            LogLevel::Warning => "prism=warn",
            LogLevel::Error => "prism=error",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct LoggingConfig {
    pub level: LogLevel,
    /// Log a frame-rate summary every this many frames; 0 disables it.
    pub fps_report_interval: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_level_parses_uppercase() {
        let config: LoggingConfig = toml::from_str(r#"level = "DEBUG""#).unwrap();
        assert_eq!(config.level, LogLevel::Debug);
        assert_eq!(config.level.directive(), "prism=debug");
    }

    #[test]
    fn default_level_is_info() {
        assert_eq!(LoggingConfig::default().level.directive(), "prism=info");
    }
}
