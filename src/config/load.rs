//! Configuration file loading

use crate::error::{Error, Result};
use serde_yaml::Mapping;
use std::fs;
use std::path::Path;

/// Load a configuration from a YAML file
///
/// The document must be a mapping at the top level; anything else is
/// rejected as a parse failure.
pub fn load_config<P: AsRef<Path>>(config_path: P) -> Result<Mapping> {
    let yaml_content = fs::read_to_string(config_path.as_ref()).map_err(|e| {
        Error::Config(format!(
            "Failed to read config file {}: {}",
            config_path.as_ref().display(),
            e
        ))
    })?;

    let config: Mapping = serde_yaml::from_str(&yaml_content)
        .map_err(|e| Error::Config(format!("Failed to parse YAML config: {e}")))?;

    Ok(config)
}
