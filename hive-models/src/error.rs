//! Error types for model access.

use thiserror::Error;

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during model operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Provider API error (non-success status, blocked prompt, empty reply).
    #[error("provider API error: {0}")]
    ProviderApi(String),

    /// Request failed at the transport level.
    #[error("request failed: {0}")]
    Request(String),

    /// Serialization/deserialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<Error> for hive_core::GenerateError {
    fn from(e: Error) -> Self {
        match e {
            Error::Request(msg) => hive_core::GenerateError::Request(msg),
            other => hive_core::GenerateError::Api(other.to_string()),
        }
    }
}
