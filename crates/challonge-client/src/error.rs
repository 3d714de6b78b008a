//! Error types for the API client

use challonge_core::CoreError;
use thiserror::Error;

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, ClientError>;

/// Client error types
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Authentication rejected - check username and API key")]
    AuthenticationRejected,

    #[error("Access forbidden: {0}")]
    Forbidden(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation failed: {}", .0.join("; "))]
    Validation(Vec<String>),

    #[error("API error (HTTP {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Invalid tournament reference: {0}")]
    InvalidReference(String),

    #[error("HTTP request failed: {0}")]
    Http(String),

    #[error("Unexpected response body: {0}")]
    Decode(String),

    #[error(transparent)]
    Core(#[from] CoreError),
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        // The URL may carry the API key when the query scheme is used
        ClientError::Http(err.without_url().to_string())
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        ClientError::Decode(err.to_string())
    }
}
