//! Configuration service implementation.
//!
//! Loads the root configuration from `config.toml` (by default
//! `~/.config/ruya/config.toml`). A missing file means defaults.

use std::fs;
use std::path::{Path, PathBuf};

use ruya_core::config::RuyaConfig;
use ruya_core::error::Result;
use ruya_core::RuyaError;
use tracing::debug;

use crate::paths::RuyaPaths;

/// Loads `RuyaConfig` from a TOML file.
#[derive(Debug, Clone)]
pub struct ConfigService {
    path: PathBuf,
}

impl ConfigService {
    /// Creates a ConfigService for the platform default config file.
    pub fn new() -> Result<Self> {
        let path = RuyaPaths::config_file().map_err(|e| RuyaError::config(e.to_string()))?;
        Ok(Self { path })
    }

    /// Creates a ConfigService reading from a custom path (for `--config` and tests).
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads and parses the config file.
    ///
    /// Returns defaults when the file does not exist, and a `Config` error when
    /// it exists but cannot be parsed.
    pub fn load(&self) -> Result<RuyaConfig> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "No config file, using defaults");
            return Ok(RuyaConfig::default());
        }

        let content = fs::read_to_string(&self.path)
            .map_err(|e| RuyaError::io(format!("Failed to read {}: {}", self.path.display(), e)))?;

        let config: RuyaConfig = toml::from_str(&content).map_err(|e| {
            RuyaError::config(format!("Failed to parse {}: {}", self.path.display(), e))
        })?;

        debug!(path = %self.path.display(), "Loaded config");
        Ok(config)
    }

    /// Serializes `config` as it would appear on disk.
    pub fn render(config: &RuyaConfig) -> Result<String> {
        Ok(toml::to_string_pretty(config)?)
    }
}
