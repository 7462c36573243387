//! # Pool Configuration
//!
//! The capacity hint used to pre-reserve dense storage, loaded once at
//! startup from TOML:
//!
//! ```toml
//! capacity_hint = 16384
//! ```
//!
//! Missing fields fall back to their defaults; unknown keys are rejected.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};
use crate::pool::DEFAULT_CAPACITY;

/// Settings shared by every set of a pool.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PoolConfig {
    /// Number of components each set reserves room for up front.
    ///
    /// Exceeding it is allowed and reallocates.
    pub capacity_hint: usize,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            capacity_hint: DEFAULT_CAPACITY,
        }
    }
}

impl PoolConfig {
    /// Creates a configuration with the given capacity hint.
    #[must_use]
    pub const fn new(capacity_hint: usize) -> Self {
        Self { capacity_hint }
    }

    /// Parses and validates a configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed TOML and
    /// [`ConfigError::InvalidCapacity`] for a zero hint.
    pub fn from_toml_str(text: &str) -> ConfigResult<Self> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, otherwise the
    /// errors of [`PoolConfig::from_toml_str`].
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let config = Self::from_toml_str(&text)?;
        tracing::debug!(
            path = %path.display(),
            capacity_hint = config.capacity_hint,
            "pool config loaded"
        );
        Ok(config)
    }

    /// Checks that the configuration is usable.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidCapacity`] if the hint is zero.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.capacity_hint == 0 {
            return Err(ConfigError::InvalidCapacity);
        }
        Ok(())
    }
}
