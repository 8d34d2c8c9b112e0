//! Error types used throughout the workspace

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main error type for Cowork
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum CoworkError {
    /// Installation request failed key or checksum validation.
    #[error("Authentication error: {0}")]
    Auth(String),

    /// Failure reported by the vendor, normalized to its message.
    #[error("API error: {0}")]
    Api(String),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias for Cowork operations
pub type Result<T> = std::result::Result<T, CoworkError>;
