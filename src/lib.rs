//! # Preparar: Training Job Setup & Configuration Reporting
//!
//! Preparar loads a declarative YAML configuration, initializes a
//! dual-destination (console + file) run logger from the configuration's
//! `logging` section, and reports the full configuration to the log in a
//! flattened, grouped format. It is the setup/diagnostic step run at the
//! start of a training or batch job.
//!
//! ## Architecture
//!
//! - **config**: YAML loading and nested-mapping flattening
//! - **logging**: logger settings, the `Logger` handle, banners and the
//!   grouped configuration report
//! - **error**: crate-wide error type
//!
//! ## Example
//!
//! ```no_run
//! use preparar::config::load_config;
//! use preparar::logging::{log_config, setup_logging};
//!
//! let config = load_config("config.yaml")?;
//! let logger = setup_logging(&config)?;
//! log_config(&config, &logger);
//! logger.info("Setup complete");
//! # Ok::<(), preparar::Error>(())
//! ```

pub mod config;
pub mod logging;

pub mod error;

// Re-export commonly used types
pub use config::{flatten_config, load_config};
pub use error::{Error, Result};
pub use logging::{log_config, log_section, setup_logging, Level, LogSettings, Logger};
