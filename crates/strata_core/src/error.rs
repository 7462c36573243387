//! # Configuration Error Types
//!
//! Storage operations never return errors: their preconditions are debug
//! assertions. Loading a pool configuration is the only fallible step.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading a pool configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read pool config {}: {source}", .path.display())]
    Io {
        /// Path of the file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The configuration is not valid TOML or has wrong field types.
    #[error("invalid pool config: {0}")]
    Parse(#[from] toml::de::Error),

    /// The capacity hint is zero.
    #[error("capacity hint must be greater than zero")]
    InvalidCapacity,
}

/// Result type for configuration loading.
pub type ConfigResult<T> = Result<T, ConfigError>;
