//! # Cowork Core
//!
//! Pure logic layer - no HTTP or platform code.
//!
//! This crate contains:
//! - Installation callback validation and session token derivation
//! - Port interfaces (traits) implemented by the HTTP clients in
//!   `cowork-infra`
//!
//! ## Architecture Principles
//! - Only depends on `cowork-domain`
//! - All I/O behind traits
//! - Pure, testable logic

pub mod installation;
pub mod ports;

pub use installation::{Application, InstallationRequest};
pub use ports::{MemberPortal, RecordStore};
