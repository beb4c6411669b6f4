//! Unified error types for Hello

use thiserror::Error;

/// Error type for config loading and rendering.
///
/// Building or reading a [`crate::Greeting`] never fails.
#[derive(Error, Debug)]
pub enum HelloError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias using HelloError
pub type Result<T> = std::result::Result<T, HelloError>;
