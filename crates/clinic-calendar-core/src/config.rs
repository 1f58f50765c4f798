//! Session configuration.
//!
//! Loaded from TOML; every key is optional.
//!
//! ```toml
//! [calendar]
//! start_month = "2024-02"
//!
//! [display]
//! dark_mode = false
//! sidebar_open = true
//!
//! [logging]
//! filter = "clinic_calendar_core=info"
//! ```

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::calendar::YearMonth;

/// Configuration errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct BookingConfig {
    #[serde(default)]
    pub calendar: CalendarConfig,

    #[serde(default)]
    pub display: DisplayConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Calendar view configuration
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct CalendarConfig {
    /// Month shown first; the current month when absent
    #[serde(default)]
    pub start_month: Option<YearMonth>,
}

/// Initial UI flags
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct DisplayConfig {
    #[serde(default)]
    pub dark_mode: bool,

    #[serde(default = "default_sidebar_open")]
    pub sidebar_open: bool,
}

fn default_sidebar_open() -> bool {
    true
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            dark_mode: false,
            sidebar_open: default_sidebar_open(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct LoggingConfig {
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

fn default_log_filter() -> String {
    "clinic_calendar_core=info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
        }
    }
}

impl BookingConfig {
    /// Parse configuration from TOML text.
    pub fn from_toml_str(content: &str) -> ConfigResult<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!(path = %path.as_ref().display(), "configuration loaded");
        Ok(config)
    }

    /// Starting month, falling back to the current one.
    pub fn start_month(&self) -> YearMonth {
        self.calendar.start_month.unwrap_or_else(YearMonth::current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = BookingConfig::from_toml_str("").unwrap();
        assert_eq!(config, BookingConfig::default());
        assert!(config.calendar.start_month.is_none());
        assert!(!config.display.dark_mode);
        assert!(config.display.sidebar_open);
        assert_eq!(config.logging.filter, "clinic_calendar_core=info");
    }

    #[test]
    fn test_full_config() {
        let config = BookingConfig::from_toml_str(
            r#"
            [calendar]
            start_month = "2024-02"

            [display]
            dark_mode = true
            sidebar_open = false

            [logging]
            filter = "clinic_calendar_core=debug"
            "#,
        )
        .unwrap();

        assert_eq!(config.start_month(), YearMonth::new(2024, 2).unwrap());
        assert!(config.display.dark_mode);
        assert!(!config.display.sidebar_open);
        assert_eq!(config.logging.filter, "clinic_calendar_core=debug");
    }

    #[test]
    fn test_partial_section_keeps_other_defaults() {
        let config = BookingConfig::from_toml_str("[display]\ndark_mode = true\n").unwrap();
        assert!(config.display.dark_mode);
        assert!(config.display.sidebar_open);
    }

    #[test]
    fn test_bad_month_is_rejected() {
        let err = BookingConfig::from_toml_str("[calendar]\nstart_month = \"2024-13\"\n");
        assert!(matches!(err, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[calendar]\nstart_month = \"2025-07\"").unwrap();

        let config = BookingConfig::load(file.path()).unwrap();
        assert_eq!(config.start_month(), YearMonth::new(2025, 7).unwrap());
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = BookingConfig::load(dir.path().join("missing.toml"));
        assert!(matches!(err, Err(ConfigError::Io(_))));
    }
}
