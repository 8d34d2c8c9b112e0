//! Admin API client
//!
//! Key-authenticated access to business, coworker, check-in and webhook
//! records.
//!
//! # Architecture
//!
//! - Uses [`HttpClient`](crate::http::HttpClient) (no direct reqwest calls)
//! - Lists are fetched page by page, strictly in sequence
//! - Failures are normalized in [`crate::http::response`]
//! - No retries: every failure reaches the caller immediately

pub mod client;
pub mod query;

pub use client::AdminApiClient;
pub use query::ResolvedQuery;
