//! Error types for challonge-core

use thiserror::Error;

/// Result type alias for core operations
pub type Result<T> = std::result::Result<T, CoreError>;

/// Core error types
#[derive(Error, Debug)]
pub enum CoreError {
    /// Credential construction was rejected. The reason never contains secret material.
    #[error("Invalid credential: {0}")]
    InvalidCredential(String),

    #[error("Invalid settings: {0}")]
    InvalidSettings(String),

    #[error("Could not determine configuration directory")]
    NoConfigDir,

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}
