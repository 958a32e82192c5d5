//! Error types for the SmartRx state core.

use thiserror::Error;

/// A shared error type for the SmartRx crates.
///
/// Operations on state values are total. Errors come only from listeners,
/// configuration loading, and profile data sources.
#[derive(Error, Debug, Clone)]
pub enum SmartRxError {
    /// A change listener reported a failure during notification
    #[error("Listener error: {0}")]
    Listener(String),

    /// Entity not found error with type information
    #[error("Entity not found: {entity_type} '{id}'")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },

    /// IO error (file system operations)
    #[error("IO error: {message}")]
    Io { message: String },

    /// Serialization/deserialization error
    #[error("Serialization error: {format} - {message}")]
    Serialization {
        format: String, // "TOML", "JSON"
        message: String,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Internal error (should not happen in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),

    /// Multiple errors
    #[error("Multiple errors occurred ({} total)", .0.len())]
    Multiple(Vec<SmartRxError>),
}

impl SmartRxError {
    // ============================================================================
    // Constructor helpers
    // ============================================================================

    /// Creates a Listener error
    pub fn listener(message: impl Into<String>) -> Self {
        Self::Listener(message.into())
    }

    /// Creates a NotFound error
    pub fn not_found(entity_type: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type,
            id: id.into(),
        }
    }

    /// Creates an IO error
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }

    /// Creates a Config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Folds a list of collected errors into a single error.
    ///
    /// Returns `None` for an empty list, the error itself when there is exactly
    /// one, and `Multiple` otherwise.
    pub fn collect(mut errors: Vec<SmartRxError>) -> Option<Self> {
        match errors.len() {
            0 => None,
            1 => errors.pop(),
            _ => Some(Self::Multiple(errors)),
        }
    }

    // ============================================================================
    // Type checking methods
    // ============================================================================

    /// Check if this is a listener error
    pub fn is_listener(&self) -> bool {
        matches!(self, Self::Listener(_))
    }

    /// Check if this is a NotFound error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is an IO error
    pub fn is_io(&self) -> bool {
        matches!(self, Self::Io { .. })
    }

    /// Check if this is a serialization error
    pub fn is_serialization(&self) -> bool {
        matches!(self, Self::Serialization { .. })
    }
}

// ============================================================================
// From implementations for automatic conversion
// ============================================================================

impl From<std::io::Error> for SmartRxError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: format!("{} (kind: {:?})", err, err.kind()),
        }
    }
}

impl From<serde_json::Error> for SmartRxError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for SmartRxError {
    fn from(err: toml::de::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::ser::Error> for SmartRxError {
    fn from(err: toml::ser::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<anyhow::Error> for SmartRxError {
    fn from(err: anyhow::Error) -> Self {
        Self::Internal(err.to_string())
    }
}

impl From<String> for SmartRxError {
    fn from(err: String) -> Self {
        Self::Internal(err)
    }
}

/// A type alias for `Result<T, SmartRxError>`.
pub type Result<T> = std::result::Result<T, SmartRxError>;
