//! Errors raised by the HTTP clients
//!
//! The vendor reports failures two ways: as HTTP error statuses, and as
//! HTTP 200 responses whose body says `WasSuccessful: false`. Both collapse
//! into [`ApiError::Vendor`] whenever the payload carries a `Message`.
//! Network failures pass through untouched as [`ApiError::Transport`].

mod conversions;

use reqwest::StatusCode;
use thiserror::Error;

/// Admin and member-portal API errors
#[derive(Debug, Error)]
pub enum ApiError {
    /// Failure described by the vendor's `Message` field.
    #[error("{message}")]
    Vendor { message: String },

    /// Non-success status without a vendor message.
    #[error("{url} returned status {status}")]
    Status { status: StatusCode, url: String, body: String },

    /// Underlying network or protocol failure.
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Failed to decode response from {url}: {reason}")]
    Decode { url: String, reason: String },

    #[error("Configuration error: {0}")]
    Config(String),
}

impl ApiError {
    /// Normalized, caller-facing message.
    pub fn message(&self) -> String {
        match self {
            Self::Vendor { message } => message.clone(),
            other => other.to_string(),
        }
    }

    /// HTTP status, when the failure came from a response.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Transport(err) => err.status(),
            _ => None,
        }
    }
}
