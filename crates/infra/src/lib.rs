//! # Cowork Infrastructure
//!
//! HTTP implementations of the core ports.
//!
//! This crate contains:
//! - The shared HTTP transport ([`http::HttpClient`])
//! - The admin API client (records, pagination, error normalization)
//! - The member portal client (Basic auth plus cookie session)
//! - Configuration loading from environment or file
//!
//! ## Architecture
//! - Implements traits defined in `cowork-core`
//! - Depends on `cowork-domain` and `cowork-core`
//! - Contains all "impure" code (network, filesystem, environment)

pub mod admin;
pub mod config;
pub mod errors;
pub mod http;
pub mod public;

// Re-export commonly used items
pub use admin::AdminApiClient;
pub use errors::ApiError;
pub use http::{HttpClient, HttpClientBuilder};
pub use public::PublicApiClient;
