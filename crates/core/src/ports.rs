//! Port interfaces for the vendor APIs
//!
//! `cowork-infra` implements these over HTTP. Consumers depend on the traits
//! so they can substitute in-memory fakes.

use async_trait::async_trait;
use cowork_domain::{
    InvoiceData, MemberCoworker, Profile, QueryOptions, RecordId, Resource, Result, User,
};

/// CRUD access to one admin record type.
#[async_trait]
pub trait RecordStore<T: Resource>: Send + Sync {
    /// Fetch a single record.
    async fn get_one(&self, id: RecordId) -> Result<T>;

    /// Fetch every record matching `options`, across all pages.
    async fn get_list(&self, options: QueryOptions) -> Result<Vec<T>>;

    /// Create the record if it has no id, update it otherwise. Returns the id.
    async fn save(&self, record: &T) -> Result<RecordId>;

    /// Delete a record.
    async fn remove(&self, id: RecordId) -> Result<()>;
}

/// Read access to the signed-in member's portal data.
#[async_trait]
pub trait MemberPortal: Send + Sync {
    /// User and coworker halves of the profile.
    async fn profile(&self) -> Result<Profile>;

    /// Coworker half of the profile.
    async fn coworker(&self) -> Result<MemberCoworker>;

    /// Login account of the member.
    async fn user(&self) -> Result<User>;

    /// Invoices of the member, as returned by the portal.
    async fn invoices(&self) -> Result<InvoiceData>;
}
