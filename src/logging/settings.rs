//! Logging settings schema
//!
//! The `logging` sub-section of the configuration. Missing fields fall
//! back to their defaults; unrecognized fields are ignored.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub(crate) const DEFAULT_DATEFMT: &str = "%Y-%m-%d %H:%M:%S";

/// Logging settings read from the configuration's `logging` key
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogSettings {
    /// Severity threshold name (DEBUG, INFO, WARNING, ERROR, CRITICAL)
    #[serde(default = "default_level")]
    pub level: String,

    /// Record template; `{timestamp}`, `{level}` and `{message}` are
    /// substituted per record
    #[serde(default = "default_format")]
    pub format: String,

    /// strftime date format for `{timestamp}`
    #[serde(default = "default_datefmt")]
    pub datefmt: String,

    /// Log file path; the parent directory is created on setup
    #[serde(default = "default_file")]
    pub file: PathBuf,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            level: default_level(),
            format: default_format(),
            datefmt: default_datefmt(),
            file: default_file(),
        }
    }
}

fn default_level() -> String {
    "INFO".to_string()
}

fn default_format() -> String {
    "{timestamp} - {level} - {message}".to_string()
}

fn default_datefmt() -> String {
    DEFAULT_DATEFMT.to_string()
}

fn default_file() -> PathBuf {
    PathBuf::from("logging/train.log")
}
