//! Application configuration model.
//!
//! Loading from disk lives in `ruya-infrastructure`; this module only defines
//! the shape and its defaults.

use serde::{Deserialize, Serialize};

/// What the browse view selects when it is entered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DefaultSelection {
    /// Nothing is selected; the preview pane asks the user to pick a document.
    #[default]
    #[serde(rename = "none")]
    Unselected,
    /// The first document of the unfiltered index is preselected.
    #[serde(rename = "first")]
    FirstDocument,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrowserSettings {
    #[serde(default)]
    pub default_selection: DefaultSelection,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// `tracing` filter directive used when `RUST_LOG` is unset
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

/// Root of `config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuyaConfig {
    #[serde(default)]
    pub browser: BrowserSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_yields_defaults() {
        let config: RuyaConfig = toml::from_str("").unwrap();
        assert_eq!(config, RuyaConfig::default());
        assert_eq!(config.browser.default_selection, DefaultSelection::Unselected);
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn test_parse_first_selection() {
        let config: RuyaConfig = toml::from_str(
            r#"
            [browser]
            default_selection = "first"

            [logging]
            level = "debug"
            "#,
        )
        .unwrap();
        assert_eq!(config.browser.default_selection, DefaultSelection::FirstDocument);
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn test_rejects_unknown_selection_policy() {
        let result: Result<RuyaConfig, _> = toml::from_str(
            r#"
            [browser]
            default_selection = "last"
            "#,
        );
        assert!(result.is_err());
    }
}
