//! Path management for ruya configuration files.
//!
//! # Directory Structure
//!
//! ```text
//! ~/.config/ruya/              # Config directory (platform config dir)
//! └── config.toml              # Application configuration
//! ```

use std::path::PathBuf;

/// Errors that can occur during path resolution.
#[derive(Debug)]
pub enum PathError {
    /// Platform config directory could not be determined.
    ConfigDirNotFound,
}

impl std::fmt::Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathError::ConfigDirNotFound => write!(f, "Cannot find configuration directory"),
        }
    }
}

impl std::error::Error for PathError {}

/// Resolves where ruya keeps its files.
pub struct RuyaPaths;

impl RuyaPaths {
    const APP_DIR: &'static str = "ruya";
    const CONFIG_FILE: &'static str = "config.toml";

    /// Returns the ruya configuration directory (e.g. `~/.config/ruya/`).
    pub fn config_dir() -> Result<PathBuf, PathError> {
        dirs::config_dir()
            .map(|dir| dir.join(Self::APP_DIR))
            .ok_or(PathError::ConfigDirNotFound)
    }

    /// Returns the path to the main configuration file.
    pub fn config_file() -> Result<PathBuf, PathError> {
        Ok(Self::config_dir()?.join(Self::CONFIG_FILE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_file_lives_in_app_dir() {
        // Only meaningful where the platform has a config dir
        if let (Ok(dir), Ok(file)) = (RuyaPaths::config_dir(), RuyaPaths::config_file()) {
            assert!(dir.ends_with("ruya"));
            assert_eq!(file, dir.join("config.toml"));
        }
    }
}
