//! Domain types and models
//!
//! Admin records, member portal payloads and the wire envelopes that wrap
//! them.

pub mod admin;
pub mod envelope;
pub mod member;

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::Serialize;

pub use admin::{Business, CheckIn, Coworker, WebHook, WebHookAction};
pub use envelope::{ApiResponse, ErrorDetail, ListEnvelope};
pub use member::{InvoiceData, MemberCoworker, Profile, User};

use crate::errors::Result;
use crate::utils::date::from_unix;

/// Numeric identifier assigned by the vendor once a record is persisted.
pub type RecordId = i64;

/// A record type managed through the admin API.
///
/// Implementations tie the record to its endpoint; see
/// [`impl_resource!`](crate::impl_resource) for the usual way to implement it.
pub trait Resource: Serialize + DeserializeOwned + Send + Sync + 'static {
    /// Module name used in filter parameter names (e.g. `Coworker`).
    const MODULE: &'static str;

    /// Endpoint path relative to the admin base URL (e.g. `spaces/coworkers`).
    const PATH: &'static str;

    /// Identifier of a persisted record, `None` before the first save.
    fn id(&self) -> Option<RecordId>;

    /// Query parameter that filters list results by modification time.
    fn updated_filter_param() -> String {
        format!("from_{}_UpdatedOn", Self::MODULE)
    }
}

/// Filters applied to admin list queries.
///
/// The default value applies no filter at all.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QueryOptions {
    /// Only return records updated at or after this instant.
    pub updated_after: Option<DateTime<Utc>>,
}

impl QueryOptions {
    /// Records updated at or after `timestamp`.
    pub fn since(timestamp: DateTime<Utc>) -> Self {
        Self { updated_after: Some(timestamp) }
    }

    /// Records updated at or after the given Unix timestamp (seconds).
    ///
    /// # Errors
    /// Returns `CoworkError::InvalidInput` if the timestamp is out of range.
    pub fn since_unix(secs: i64) -> Result<Self> {
        from_unix(secs).map(Self::since)
    }

    /// Records updated from the current instant onwards.
    pub fn updated_since_now() -> Self {
        Self::since(Utc::now())
    }
}
