//! # Cowork Domain
//!
//! Data types shared by every Cowork crate.
//!
//! This crate contains:
//! - Record types mirroring the vendor JSON (Business, Coworker, CheckIn,
//!   WebHook) and the member portal payloads
//! - Wire envelopes for single-value and paginated responses
//! - Domain error types and Result definitions
//! - Configuration structures
//! - The vendor date codec
//!
//! ## Architecture
//! - No dependencies on other Cowork crates
//! - Only external dependencies allowed
//! - Pure data structures and utilities

pub mod config;
pub mod constants;
pub mod errors;
pub mod macros;
pub mod types;
pub mod utils;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
pub use utils::date::{format_date, parse_date};
