//! Severity levels and the run logger handle
//!
//! The logger is an explicit handle rather than process-global state: it is
//! created once by [`setup_logging`] and passed to every component that
//! logs, so independent loggers can coexist in tests.

use super::settings::{LogSettings, DEFAULT_DATEFMT};
use crate::error::{Error, Result};
use chrono::Local;
use serde_yaml::Mapping;
use std::fmt::Write as FmtWrite;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::Path;
use std::str::FromStr;
use std::sync::Mutex;

/// Record severity, ordered from least to most severe
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Level {
    Debug,
    Info,
    Warning,
    Error,
    Critical,
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Level::Debug => write!(f, "DEBUG"),
            Level::Info => write!(f, "INFO"),
            Level::Warning => write!(f, "WARNING"),
            Level::Error => write!(f, "ERROR"),
            Level::Critical => write!(f, "CRITICAL"),
        }
    }
}

impl FromStr for Level {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "DEBUG" => Ok(Self::Debug),
            "INFO" => Ok(Self::Info),
            "WARNING" | "WARN" => Ok(Self::Warning),
            "ERROR" => Ok(Self::Error),
            "CRITICAL" => Ok(Self::Critical),
            _ => Err(format!(
                "Unknown log level '{s}'. Valid options: DEBUG, INFO, WARNING, ERROR, CRITICAL"
            )),
        }
    }
}

/// A run logger writing each record to every attached sink
///
/// Records below the severity threshold are dropped. Each record is
/// rendered through the configured template (`{timestamp}`, `{level}`,
/// `{message}`) and written, newline-terminated, to all sinks.
pub struct Logger {
    level: Level,
    format: String,
    datefmt: String,
    sinks: Mutex<Vec<Box<dyn Write + Send>>>,
}

impl std::fmt::Debug for Logger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Logger")
            .field("level", &self.level)
            .field("format", &self.format)
            .field("datefmt", &self.datefmt)
            .finish()
    }
}

impl Logger {
    /// Create a logger with an explicit sink set
    pub fn new(
        level: Level,
        format: impl Into<String>,
        datefmt: impl Into<String>,
        sinks: Vec<Box<dyn Write + Send>>,
    ) -> Self {
        Self {
            level,
            format: format.into(),
            datefmt: datefmt.into(),
            sinks: Mutex::new(sinks),
        }
    }

    /// The severity threshold this logger was configured with
    pub fn level(&self) -> Level {
        self.level
    }

    /// Emit a record at the given severity
    ///
    /// Sink write failures are ignored: a dead sink must not kill the run.
    pub fn log(&self, level: Level, message: &str) {
        if level < self.level {
            return;
        }
        let line = self.render(level, message);
        let Ok(mut sinks) = self.sinks.lock() else {
            return;
        };
        for sink in sinks.iter_mut() {
            let _ = writeln!(sink, "{line}");
            let _ = sink.flush();
        }
    }

    pub fn debug(&self, message: &str) {
        self.log(Level::Debug, message);
    }

    pub fn info(&self, message: &str) {
        self.log(Level::Info, message);
    }

    pub fn warning(&self, message: &str) {
        self.log(Level::Warning, message);
    }

    pub fn error(&self, message: &str) {
        self.log(Level::Error, message);
    }

    pub fn critical(&self, message: &str) {
        self.log(Level::Critical, message);
    }

    fn render(&self, level: Level, message: &str) -> String {
        self.format
            .replace("{timestamp}", &self.timestamp())
            .replace("{level}", &level.to_string())
            .replace("{message}", message)
    }

    fn timestamp(&self) -> String {
        let now = Local::now();
        let mut out = String::new();
        // chrono reports bad strftime specifiers through fmt::Error
        match write!(out, "{}", now.format(&self.datefmt)) {
            Ok(()) => out,
            Err(_) => now.format(DEFAULT_DATEFMT).to_string(),
        }
    }
}

/// Build the run logger from the configuration's `logging` section
///
/// Missing section or fields fall back to defaults (level INFO, file
/// `logging/train.log`). The log file's parent directory is created if
/// absent, and the returned logger writes to stdout and the file.
pub fn setup_logging(config: &Mapping) -> Result<Logger> {
    let settings = match config.get("logging") {
        Some(section) => serde_yaml::from_value(section.clone())
            .map_err(|e| Error::Config(format!("Invalid logging settings: {e}")))?,
        None => LogSettings::default(),
    };
    logger_from_settings(&settings)
}

/// Build a console + file logger from resolved settings
pub fn logger_from_settings(settings: &LogSettings) -> Result<Logger> {
    let level: Level = settings.level.parse().map_err(Error::Config)?;

    if let Some(dir) = parent_dir(&settings.file) {
        fs::create_dir_all(dir).map_err(|e| {
            Error::Logging(format!(
                "Failed to create log directory {}: {e}",
                dir.display()
            ))
        })?;
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&settings.file)
        .map_err(|e| {
            Error::Logging(format!(
                "Failed to open log file {}: {e}",
                settings.file.display()
            ))
        })?;

    let sinks: Vec<Box<dyn Write + Send>> = vec![Box::new(io::stdout()), Box::new(file)];
    Ok(Logger::new(
        level,
        settings.format.clone(),
        settings.datefmt.clone(),
        sinks,
    ))
}

fn parent_dir(path: &Path) -> Option<&Path> {
    path.parent().filter(|p| !p.as_os_str().is_empty())
}
