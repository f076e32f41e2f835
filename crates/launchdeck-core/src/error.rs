//! Error types for LaunchDeck.

use thiserror::Error;

/// A shared error type for the whole LaunchDeck workspace.
///
/// Collaborator failures are classified into these variants so the list
/// controller can map each one to a user-facing state instead of bubbling
/// raw transport or I/O errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LaunchDeckError {
    /// The remote launch service failed (transport, HTTP status, GraphQL errors).
    #[error("Fetch error: {0}")]
    Fetch(String),

    /// Entity not found error with type information
    #[error("Entity not found: {entity_type} '{id}'")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },

    /// Persistence backend failure (read or write)
    #[error("Storage error: {0}")]
    Storage(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {format} - {message}")]
    Serialization {
        format: String, // "TOML", "JSON", etc.
        message: String,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl LaunchDeckError {
    /// Creates a Fetch error
    pub fn fetch(message: impl Into<String>) -> Self {
        Self::Fetch(message.into())
    }

    /// Creates a NotFound error
    pub fn not_found(entity_type: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type,
            id: id.into(),
        }
    }

    /// Creates a Storage error
    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage(message.into())
    }

    /// Creates a Config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Check if this is a NotFound error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a Fetch error
    pub fn is_fetch(&self) -> bool {
        matches!(self, Self::Fetch(_))
    }

    /// Check if this is a serialization error
    pub fn is_serialization(&self) -> bool {
        matches!(self, Self::Serialization { .. })
    }
}

// ============================================================================
// From implementations for automatic conversion
// ============================================================================

impl From<std::io::Error> for LaunchDeckError {
    fn from(err: std::io::Error) -> Self {
        Self::Storage(format!("{} (kind: {:?})", err, err.kind()))
    }
}

impl From<serde_json::Error> for LaunchDeckError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            message: err.to_string(),
        }
    }
}

/// A type alias for `Result<T, LaunchDeckError>`.
pub type Result<T> = std::result::Result<T, LaunchDeckError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_display() {
        let err = LaunchDeckError::not_found("launch", "42");
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "Entity not found: launch '42'");
    }

    #[test]
    fn test_json_error_is_serialization() {
        let err: LaunchDeckError = serde_json::from_str::<Vec<String>>("{not json")
            .unwrap_err()
            .into();
        assert!(err.is_serialization());
        assert!(!err.is_fetch());
    }
}
