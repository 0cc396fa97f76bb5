#![deny(missing_docs)]
//! Shared logging utilities for the catalog workspace.
//!
//! This crate provides the `catalog_*` logging macros used across the codebase
//! and a minimal test initializer for the global logger.

use std::sync::Once;

use log::LevelFilter;

/// Logs a trace-level message using the global logging facade.
#[macro_export]
macro_rules! catalog_trace {
    ($($arg:tt)*) => {{
        log::trace!($($arg)*);
    }};
}

/// Logs a debug-level message using the global logging facade.
#[macro_export]
macro_rules! catalog_debug {
    ($($arg:tt)*) => {{
        log::debug!($($arg)*);
    }};
}

/// Logs an info-level message using the global logging facade.
#[macro_export]
macro_rules! catalog_info {
    ($($arg:tt)*) => {{
        log::info!($($arg)*);
    }};
}

/// Logs a warn-level message using the global logging facade.
#[macro_export]
macro_rules! catalog_warn {
    ($($arg:tt)*) => {{
        log::warn!($($arg)*);
    }};
}

/// Logs an error-level message using the global logging facade.
#[macro_export]
macro_rules! catalog_error {
    ($($arg:tt)*) => {{
        log::error!($($arg)*);
    }};
}

/// Default level for the current build profile: debug builds log at
/// `Debug`, release builds at `Info`.
pub fn default_level() -> LevelFilter {
    if cfg!(debug_assertions) {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}

/// Initializes a simple terminal logger for use in tests.
///
/// Safe to call from every test; only the first call installs a logger and
/// later calls (or a logger installed elsewhere) are ignored.
pub fn initialize_for_tests() {
    use simplelog::{ColorChoice, CombinedLogger, Config, TermLogger, TerminalMode};

    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let _ = CombinedLogger::init(vec![TermLogger::new(
            default_level(),
            Config::default(),
            TerminalMode::Mixed,
            ColorChoice::Auto,
        )]);
    });
}
