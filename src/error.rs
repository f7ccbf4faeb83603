//! Error types for the adapter.

use thiserror::Error;

/// Main error type for adapter operations.
#[derive(Debug, Error)]
pub enum AdapterError {
    #[error("identifier path is required and must not be empty")]
    EmptyIdentifierPath,

    #[error("entity has no value at identifier path '{0}'")]
    MissingIdentifier(String),

    #[error("identifier at '{0}' must be a string or number")]
    UnsupportedIdentifier(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for AdapterError {
    fn from(e: serde_json::Error) -> Self {
        AdapterError::Serialization(e.to_string())
    }
}

/// Result type for adapter operations.
pub type Result<T> = std::result::Result<T, AdapterError>;
