//! Run logging
//!
//! Builds the dual-destination (console + file) run logger from the
//! `logging` section of the configuration and renders the configuration
//! report through it.
//!
//! The logger is an explicit handle created once by [`setup_logging`] and
//! threaded into every component that logs; there is no process-global
//! state, so independent loggers can coexist in tests.
//!
//! # Example
//!
//! ```yaml
//! logging:
//!   level: DEBUG
//!   format: "{timestamp} - {level} - {message}"
//!   datefmt: "%Y-%m-%d %H:%M:%S"
//!   file: logging/train.log
//! ```

mod logger;
mod report;
mod settings;

#[cfg(test)]
mod tests;

pub use logger::{logger_from_settings, setup_logging, Level, Logger};
pub use report::{log_config, log_section, log_section_width, BANNER_WIDTH};
pub use settings::LogSettings;
