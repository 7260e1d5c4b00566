//! Error types for the Subsocial API

use thiserror::Error;

/// Result type for API operations
pub type Result<T> = std::result::Result<T, ApiError>;

/// API error types
///
/// Absence is never an error here: missing structs are omitted from results
/// and missing documents leave `content` unset. These variants only describe
/// a collaborator call that failed as a whole.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Struct source (chain client) failed
    #[error("Struct source error: {0}")]
    StructSource(String),

    /// Content store failed
    #[error("Content store error: {0}")]
    ContentStore(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

#[cfg(feature = "client")]
impl From<subsocial_content_client::ContentError> for ApiError {
    fn from(err: subsocial_content_client::ContentError) -> Self {
        match err {
            subsocial_content_client::ContentError::Config(msg) => ApiError::Config(msg),
            other => ApiError::ContentStore(other.to_string()),
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Serialization(err.to_string())
    }
}
