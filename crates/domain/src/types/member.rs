//! Member portal payloads
//!
//! Returned by the public (end-user) API. Fields not listed here are kept in
//! `extra`.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::RecordId;

/// Both halves of the signed-in member's profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Profile {
    pub user: User,
    pub coworker: MemberCoworker,
}

/// Login account of the signed-in member.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct User {
    pub id: Option<RecordId>,
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub is_authenticated: Option<bool>,
    pub receive_community_digest: Option<bool>,
    pub receive_every_message: Option<bool>,
    pub unique_id: Option<String>,
    pub updated_on: Option<String>,
    pub created_on: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Customer record of the signed-in member as the portal exposes it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MemberCoworker {
    pub id: Option<RecordId>,
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub active: Option<bool>,
    pub checked_in: Option<bool>,
    pub is_member: Option<bool>,
    pub is_contact: Option<bool>,
    pub tariff_id: Option<RecordId>,
    pub next_tariff_id: Option<RecordId>,
    pub company_name: Option<String>,
    pub billing_name: Option<String>,
    pub billing_email: Option<String>,
    pub access_pincode: Option<String>,
    pub avatar_url: Option<String>,
    pub profile_url: Option<String>,
    pub utc_next_invoice: Option<String>,
    pub utc_registration_date: Option<String>,
    pub unique_id: Option<String>,
    pub updated_on: Option<String>,
    pub created_on: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Invoice listing for the signed-in member.
///
/// The portal does not document this payload, so it is kept as raw JSON.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InvoiceData(pub Value);

impl InvoiceData {
    /// Invoice entries, wherever the payload keeps them.
    pub fn invoices(&self) -> &[Value] {
        match &self.0 {
            Value::Array(items) => items.as_slice(),
            Value::Object(fields) => ["Invoices", "Records"]
                .iter()
                .find_map(|key| fields.get(*key).and_then(Value::as_array))
                .map(Vec::as_slice)
                .unwrap_or_default(),
            _ => &[],
        }
    }
}
