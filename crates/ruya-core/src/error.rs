//! Error types for the Ruya document browser.

use thiserror::Error;

/// A shared error type for the whole Ruya workspace.
///
/// Browse-time conditions such as an unresolved document are reported to the
/// presentation layer as values (see `browser::Outcome`); this type is what
/// lookups and parsing return underneath.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RuyaError {
    /// Entity not found error with type information
    #[error("Entity not found: {entity_type} '{id}'")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },

    /// A role name outside admin/manager/employee
    #[error("Unknown role: '{0}'")]
    UnknownRole(String),

    /// A document status outside pending/approved/revision
    #[error("Unknown document status: '{0}'")]
    UnknownStatus(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error (file system operations)
    #[error("IO error: {message}")]
    Io { message: String },

    /// Serialization/deserialization error
    #[error("Serialization error: {format} - {message}")]
    Serialization {
        format: String, // "TOML", "JSON"
        message: String,
    },
}

impl RuyaError {
    // ============================================================================
    // Constructor helpers
    // ============================================================================

    /// Creates a NotFound error
    pub fn not_found(entity_type: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type,
            id: id.into(),
        }
    }

    /// Creates a Config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Creates an IO error
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }

    // ============================================================================
    // Type checking methods
    // ============================================================================

    /// Check if this is a NotFound error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is an UnknownRole error
    pub fn is_unknown_role(&self) -> bool {
        matches!(self, Self::UnknownRole(_))
    }

    /// Check if this is a config error
    pub fn is_config(&self) -> bool {
        matches!(self, Self::Config(_))
    }
}

// ============================================================================
// From implementations for automatic conversion
// ============================================================================

impl From<std::io::Error> for RuyaError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: format!("{} (kind: {:?})", err, err.kind()),
        }
    }
}

impl From<serde_json::Error> for RuyaError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for RuyaError {
    fn from(err: toml::de::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::ser::Error> for RuyaError {
    fn from(err: toml::ser::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

/// A type alias for `Result<T, RuyaError>`.
pub type Result<T> = std::result::Result<T, RuyaError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_display() {
        let err = RuyaError::not_found("document", "42");
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "Entity not found: document '42'");
    }

    #[test]
    fn test_unknown_role_is_distinct_from_not_found() {
        let err = RuyaError::UnknownRole("guest".to_string());
        assert!(err.is_unknown_role());
        assert!(!err.is_not_found());
        assert_eq!(err.to_string(), "Unknown role: 'guest'");
    }

    #[test]
    fn test_from_io_error() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: RuyaError = io.into();
        match err {
            RuyaError::Io { message } => assert!(message.contains("PermissionDenied")),
            other => panic!("expected Io, got {:?}", other),
        }
    }
}
