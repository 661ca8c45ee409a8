//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.
//!
//! Parsing itself never fails: unrecognized or malformed lines are skipped.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading a log file
#[derive(Error, Debug)]
pub enum InputError {
    #[error("Log file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Failed to read log file {}: {source}", .path.display())]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors raised by invalid rendering or CLI configuration
#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("Bucket width must be a positive number of seconds, got {0}")]
    InvalidBucket(f64),

    #[error("{name} must be greater than 0")]
    Zero { name: &'static str },

    #[error("{name} is too large (max {max})")]
    TooLarge { name: &'static str, max: usize },
}
