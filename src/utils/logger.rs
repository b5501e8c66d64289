//! Logger utility for application-wide logging
//!
//! This module provides a custom logger implementation that works alongside
//! the standard log crate, but adds file output capabilities. Without a log
//! file, console logging goes through env_logger instead.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;
use std::sync::Mutex;
use log::{Log, Record, Level, Metadata, LevelFilter};

/// Custom logger implementation
///
/// Shared by reference between parallel jobs; writes are serialized by
/// the inner mutex.
pub struct Logger {
    /// File handle for log output, None when logging to the console only
    file: Mutex<Option<File>>,
    /// Most verbose level written by the `Log` implementation
    level: Level,
}

impl Logger {
    /// Creates a new logger instance
    ///
    /// # Arguments
    ///
    /// * `log_file` - Path to the log file
    ///
    /// # Returns
    ///
    /// A new Logger instance or an error if the file cannot be created
    pub fn new(log_file: &str) -> io::Result<Self> {
        let file = File::create(Path::new(log_file))?;
        Ok(Logger {
            file: Mutex::new(Some(file)),
            level: Level::Debug,
        })
    }

    /// Creates a logger that discards job messages
    pub fn disabled() -> Self {
        Logger {
            file: Mutex::new(None),
            level: Level::Info,
        }
    }

    /// Logs a message to the log file
    ///
    /// # Arguments
    ///
    /// * `message` - The message to log
    pub fn log(&self, message: &str) -> io::Result<()> {
        let mut guard = self.file.lock()
            .map_err(|_| io::Error::new(io::ErrorKind::Other, "log file lock poisoned"))?;
        if let Some(file) = guard.as_mut() {
            writeln!(file, "{}", message)?;
            file.flush()?;
        }
        Ok(())
    }

    /// Static method to initialize the global logger writing to a file
    pub fn init_global_logger(log_file: &str, verbose: bool) -> io::Result<()> {
        // Create a dedicated logger for the log crate
        let mut global_logger = Logger::new(log_file)?;
        global_logger.level = if verbose { Level::Debug } else { Level::Info };
        let max_level = global_logger.level.to_level_filter();

        // Set up the global logger - we'll ignore the SetLoggerError
        // since we only call this once at startup
        if log::set_boxed_logger(Box::new(global_logger)).is_err() {
            // Logger was already set - this should not happen in normal usage
            eprintln!("Warning: Global logger was already initialized");
        }

        log::set_max_level(max_level);
        Ok(())
    }

    /// Initialize console logging through env_logger
    ///
    /// `RUST_LOG` takes precedence over the verbosity flag.
    pub fn init_console_logger(verbose: bool) {
        let default_level = if verbose { LevelFilter::Debug } else { LevelFilter::Info };
        let mut builder = env_logger::Builder::new();
        builder.filter_level(default_level).parse_default_env();
        if builder.try_init().is_err() {
            eprintln!("Warning: Global logger was already initialized");
        }
    }
}

// Implement the Log trait to make our Logger work with the log crate
impl Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let message = format!("[{}] {}", record.level(), record.args());
            let _ = Logger::log(self, &message);

            // Also print to console
            println!("{}", message);
        }
    }

    fn flush(&self) {
        // Already flushing in the log method
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_console_logger_init_is_repeatable() {
        Logger::init_console_logger(true);
        Logger::init_console_logger(false);
        assert!(log::max_level() >= LevelFilter::Error);
    }

    #[test]
    fn test_disabled_logger_accepts_messages() {
        assert!(Logger::disabled().log("ignored").is_ok());
    }
}
