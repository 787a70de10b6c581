//! Wire configuration
//!
//! Limits applied while decoding, checked against length prefixes before
//! any allocation. Loadable from TOML:
//!
//! ```toml
//! max_string_units = 65536
//! max_bytes_len = 10485760
//! ```
//!
//! Missing keys take their defaults; unknown keys are rejected.

use serde::Deserialize;
use thiserror::Error;

/// Default cap on string length, in UTF-16 code units (1 Mi)
pub const DEFAULT_MAX_STRING_UNITS: usize = 1 << 20;

/// Default cap on opaque byte blocks (100 MiB)
pub const DEFAULT_MAX_BYTES_LEN: usize = 100 * 1024 * 1024;

/// Error loading a [`WireConfig`]
#[derive(Debug, Error)]
pub enum ConfigError {
    /// TOML didn't parse or had unknown keys
    #[error("invalid wire config: {0}")]
    Parse(#[from] toml::de::Error),
    /// A limit was set to zero
    #[error("wire config limit `{0}` must be greater than zero")]
    ZeroLimit(&'static str),
}

/// Decode-side limits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WireConfig {
    /// Longest string accepted, in UTF-16 code units
    pub max_string_units: usize,
    /// Largest opaque byte block accepted
    pub max_bytes_len: usize,
}

impl WireConfig {
    /// Default limits
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse from a TOML document and check the limits
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: WireConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Set the string limit
    pub fn with_max_string_units(mut self, units: usize) -> Self {
        self.max_string_units = units;
        self
    }

    /// Set the byte block limit
    pub fn with_max_bytes_len(mut self, len: usize) -> Self {
        self.max_bytes_len = len;
        self
    }

    /// Reject zero limits
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_string_units == 0 {
            return Err(ConfigError::ZeroLimit("max_string_units"));
        }
        if self.max_bytes_len == 0 {
            return Err(ConfigError::ZeroLimit("max_bytes_len"));
        }
        Ok(())
    }
}

impl Default for WireConfig {
    fn default() -> Self {
        Self {
            max_string_units: DEFAULT_MAX_STRING_UNITS,
            max_bytes_len: DEFAULT_MAX_BYTES_LEN,
        }
    }
}
