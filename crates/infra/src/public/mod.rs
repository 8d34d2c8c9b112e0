//! Member portal client
//!
//! Signs in as an end user of one tenant (Basic auth plus the session cookie
//! the portal sets) and reads that user's profile and invoices.

pub mod client;

pub use client::PublicApiClient;
