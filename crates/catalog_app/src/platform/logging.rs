//! Platform logging initialization for catalog_app.
//!
//! The terminal belongs to the UI, so logs go to `./catalog_app.log` or nowhere.

use std::fs::File;
use std::path::Path;

use serde::Deserialize;
use simplelog::{Config, ConfigBuilder, LevelFilter, WriteLogger};

pub(crate) const LOG_FILENAME: &str = "catalog_app.log";

/// Destination for log output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub(crate) enum LogDestination {
    /// Write to `./catalog_app.log` in the current directory.
    File,
    /// Drop all log output.
    Off,
}

/// Initialize the logger for `destination`. Returns whether a logger was
/// installed.
pub(crate) fn initialize(destination: LogDestination, log_path: &Path) -> bool {
    match destination {
        LogDestination::Off => false,
        LogDestination::File => match File::create(log_path) {
            Ok(file) => {
                WriteLogger::init(catalog_logging::default_level(), build_config(), file).is_ok()
            }
            Err(err) => {
                eprintln!("Warning: Could not create log file at {:?}: {}", log_path, err);
                false
            }
        },
    }
}

fn build_config() -> Config {
    ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_target_level(LevelFilter::Error)
        .build()
}
