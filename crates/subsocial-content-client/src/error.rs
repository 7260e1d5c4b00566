//! Error types for the content client

use thiserror::Error;

/// Content client error
#[derive(Debug, Error)]
pub enum ContentError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Server returned an error
    #[error("Server error {status}: {message}")]
    Server { status: u16, message: String },

    /// Content id is not a valid CID
    #[error("Invalid CID: {0}")]
    InvalidCid(String),

    /// Client could not be configured
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type for content operations
pub type Result<T> = std::result::Result<T, ContentError>;
