//! Session configuration
//!
//! Configuration is optional: every field has a default, and a partial JSON
//! document only overrides the fields it names.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read
    #[error("Failed to read config {}: {source}", path.display())]
    Read {
        /// Path that was read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The configuration is not valid JSON for [`SessionConfig`]
    #[error("Invalid config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Result type for configuration loading
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Session behaviour settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SessionConfig {
    /// Emit a debug log line for every handled event
    pub log_transitions: bool,
    /// Publish a snapshot even when an event leaves the state unchanged
    pub publish_noops: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            log_transitions: true,
            publish_noops: false,
        }
    }
}

impl SessionConfig {
    /// Create a configuration with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable per-event logging
    pub fn log_transitions(mut self, enabled: bool) -> Self {
        self.log_transitions = enabled;
        self
    }

    /// Enable or disable publishing of unchanged states
    pub fn publish_noops(mut self, enabled: bool) -> Self {
        self.publish_noops = enabled;
        self
    }

    /// Parse a configuration from JSON
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a configuration from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json(&contents)?;
        tracing::debug!(path = %path.display(), ?config, "Loaded session config");
        Ok(config)
    }
}
