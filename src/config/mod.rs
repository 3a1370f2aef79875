//! Declarative YAML configuration
//!
//! The configuration is an arbitrarily nested YAML mapping. Only the
//! `logging` key is structurally significant (see [`crate::logging`]);
//! everything else is opaque payload echoed into the run log by the
//! configuration report.
//!
//! # Example
//!
//! ```yaml
//! logging:
//!   level: DEBUG
//!   file: logging/train.log
//!
//! model:
//!   name: resnet50
//!   layers: [64, 128, 256]
//!
//! training:
//!   epochs: 10
//!   lr: 1e-4
//! ```

mod flatten;
mod load;


pub use flatten::{flatten_config, flatten_config_with, render_value};
pub use load::load_config;
