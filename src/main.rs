//! Preparar CLI
//!
//! Loads a YAML training configuration, initializes the console + file run
//! logger from its `logging` section, and reports the configuration.
//!
//! # Usage
//!
//! ```bash
//! preparar config.yaml
//! ```

use clap::Parser;
use preparar::config::load_config;
use preparar::logging::{log_config, log_section, setup_logging};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

/// Training job setup and configuration reporting
#[derive(Parser, Debug)]
#[command(name = "preparar")]
#[command(version)]
#[command(about = "Load a YAML training configuration and report it to a console + file log")]
struct Cli {
    /// Path to the configuration YAML file
    #[arg(value_name = "CONFIG")]
    config: PathBuf,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli.config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(config_path: &Path) -> preparar::Result<()> {
    let config = load_config(config_path)?;
    let logger = setup_logging(&config)?;

    log_config(&config, &logger);

    // Template section demonstrating each severity
    log_section(&logger, "Section Header");
    logger.info("Informational message");
    logger.warning("Warning message");
    logger.error("Error message");
    logger.critical("Critical message");

    Ok(())
}
