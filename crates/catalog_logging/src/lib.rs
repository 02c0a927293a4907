#![deny(missing_docs)]
//! Shared logging utilities for the catalog workspace.
//!
//! This crate provides the `catalog_*` logging macros used across the codebase,
//! the logger initialization used by embedding applications, and a minimal
//! test initializer for the global logger.

use std::fs::File;
use std::path::PathBuf;

use simplelog::{
    ColorChoice, CombinedLogger, Config, ConfigBuilder, SharedLogger, TermLogger, TerminalMode,
    WriteLogger,
};

/// Re-exported so the macros resolve without callers depending on `log`.
pub use log;
pub use log::LevelFilter;

/// Logs a trace-level message using the global logging facade.
#[macro_export]
macro_rules! catalog_trace {
    ($($arg:tt)*) => {{
        $crate::log::trace!($($arg)*);
    }};
}

/// Logs a debug-level message using the global logging facade.
#[macro_export]
macro_rules! catalog_debug {
    ($($arg:tt)*) => {{
        $crate::log::debug!($($arg)*);
    }};
}

/// Logs an info-level message using the global logging facade.
#[macro_export]
macro_rules! catalog_info {
    ($($arg:tt)*) => {{
        $crate::log::info!($($arg)*);
    }};
}

/// Logs a warn-level message using the global logging facade.
#[macro_export]
macro_rules! catalog_warn {
    ($($arg:tt)*) => {{
        $crate::log::warn!($($arg)*);
    }};
}

/// Logs an error-level message using the global logging facade.
#[macro_export]
macro_rules! catalog_error {
    ($($arg:tt)*) => {{
        $crate::log::error!($($arg)*);
    }};
}

/// Destination for log output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogDestination {
    /// Write to the configured log file.
    File,
    /// Write to terminal (stdout).
    #[default]
    Terminal,
    /// Write to both file and terminal.
    Both,
}

/// Logger configuration for an embedding application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogSettings {
    /// Maximum level that is emitted.
    pub level: LevelFilter,
    /// Where records are written.
    pub destination: LogDestination,
    /// Log file used by [`LogDestination::File`] and [`LogDestination::Both`].
    pub file_path: PathBuf,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            level: LevelFilter::Info,
            destination: LogDestination::Terminal,
            file_path: PathBuf::from("./catalog.log"),
        }
    }
}

/// Initialize the global logger from `settings`.
///
/// Returns `false` when no logger could be installed, either because another
/// logger is already active or because the log file could not be created
/// with `LogDestination::File`.
pub fn initialize(settings: &LogSettings) -> bool {
    let config = build_config();
    let level = settings.level;

    let loggers: Vec<Box<dyn SharedLogger>> = match settings.destination {
        LogDestination::File => match create_file_logger(level, config, settings) {
            Some(file_logger) => vec![file_logger],
            None => return false,
        },
        LogDestination::Terminal => {
            vec![TermLogger::new(
                level,
                config,
                TerminalMode::Mixed,
                ColorChoice::Auto,
            )]
        }
        LogDestination::Both => {
            let mut loggers: Vec<Box<dyn SharedLogger>> = vec![TermLogger::new(
                level,
                config.clone(),
                TerminalMode::Mixed,
                ColorChoice::Auto,
            )];
            if let Some(file_logger) = create_file_logger(level, config, settings) {
                loggers.push(file_logger);
            }
            loggers
        }
    };

    CombinedLogger::init(loggers).is_ok()
}

/// Initializes a simple terminal logger for use in unit tests.
///
/// This safely no-ops if another logger has already been initialized.
pub fn initialize_for_tests() {
    // Use debug level in debug builds, info in release builds.
    let level = if cfg!(debug_assertions) {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    // Ignore the error if a logger was already set by another test.
    let _ = CombinedLogger::init(vec![TermLogger::new(
        level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )]);
}

fn build_config() -> Config {
    ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_target_level(LevelFilter::Error)
        .build()
}

fn create_file_logger(
    level: LevelFilter,
    config: Config,
    settings: &LogSettings,
) -> Option<Box<WriteLogger<File>>> {
    match File::create(&settings.file_path) {
        Ok(file) => Some(WriteLogger::new(level, config, file)),
        Err(err) => {
            eprintln!(
                "Warning: Could not create log file at {:?}: {}",
                settings.file_path, err
            );
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_settings_log_info_to_terminal() {
        let settings = LogSettings::default();
        assert_eq!(settings.level, LevelFilter::Info);
        assert_eq!(settings.destination, LogDestination::Terminal);
    }

    #[test]
    fn file_destination_fails_for_unwritable_path() {
        let temp = tempfile::TempDir::new().unwrap();
        let settings = LogSettings {
            destination: LogDestination::File,
            file_path: temp.path().join("missing").join("catalog.log"),
            ..LogSettings::default()
        };
        assert!(!initialize(&settings));
    }

    #[test]
    fn macros_expand_without_logger() {
        catalog_trace!("trace {}", 1);
        catalog_debug!("debug {}", 2);
        catalog_info!("info {}", 3);
        catalog_warn!("warn {}", 4);
        catalog_error!("error {}", 5);
    }
}
