//! Macro for wiring record types to their admin endpoints
//!
//! Every admin record is addressed the same way: a module name used in
//! filter parameters (`from_{Module}_UpdatedOn`) and an endpoint path below
//! the admin base URL. This macro removes the per-type boilerplate of the
//! [`Resource`](crate::types::Resource) implementation.
//!
//! # Example
//!
//! ```rust
//! use cowork_domain::{impl_resource, RecordId};
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Debug, Clone, Serialize, Deserialize)]
//! #[serde(rename_all = "PascalCase")]
//! pub struct Room {
//!     pub id: Option<RecordId>,
//!     pub name: String,
//! }
//!
//! impl_resource!(Room {
//!     module: "Room",
//!     path: "spaces/resources",
//! });
//! ```

/// Implements the `Resource` trait for a record type with an `id` field.
///
/// # Arguments
///
/// * `$record` - The record type; must have `id: Option<RecordId>`
/// * `module` - Module name as it appears in vendor filter parameters
/// * `path` - Endpoint path relative to the admin base URL
#[macro_export]
macro_rules! impl_resource {
    ($record:ident { module: $module:expr, path: $path:expr $(,)? }) => {
        impl $crate::types::Resource for $record {
            const MODULE: &'static str = $module;
            const PATH: &'static str = $path;

            fn id(&self) -> Option<$crate::types::RecordId> {
                self.id
            }
        }
    };
}
