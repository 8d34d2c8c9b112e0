//! Admin API records
//!
//! Each record keeps the vendor fields this workspace reads as typed
//! optionals. Any other field the vendor sends is preserved in `extra` so a
//! fetched record can be saved back without losing data.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::RecordId;
use crate::impl_resource;
use crate::utils::date::parse_lenient;

macro_rules! impl_timestamps {
    ($record:ident) => {
        impl $record {
            /// Last modification time reported by the vendor.
            pub fn updated_at(&self) -> Option<DateTime<Utc>> {
                self.updated_on.as_deref().and_then(parse_lenient)
            }

            /// Creation time reported by the vendor.
            pub fn created_at(&self) -> Option<DateTime<Utc>> {
                self.created_on.as_deref().and_then(parse_lenient)
            }
        }
    };
}

/// A business (location) registered with the platform.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Business {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unique_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub web_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_on: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_on: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A customer (member or contact) of a business.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Coworker {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unique_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mobile_phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoicing_business_id: Option<RecordId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_pincode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_on: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_on: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Coworker {
    /// New, unsaved coworker.
    pub fn new(full_name: impl Into<String>, email: impl Into<String>) -> Self {
        Self { full_name: Some(full_name.into()), email: Some(email.into()), ..Self::default() }
    }
}

/// A coworker's visit to a business.
///
/// An open check-in has no `to_time`. The vendor rejects check-ins that
/// violate membership limits with `WasSuccessful: false`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CheckIn {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unique_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coworker_id: Option<RecordId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub business_id: Option<RecordId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_on: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_on: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl CheckIn {
    /// New check-in starting at `from_time`.
    pub fn new(coworker_id: RecordId, business_id: RecordId, from_time: DateTime<Utc>) -> Self {
        Self {
            coworker_id: Some(coworker_id),
            business_id: Some(business_id),
            from_time: Some(crate::utils::date::format_date(Some(from_time))),
            ..Self::default()
        }
    }

    /// Whether the coworker is still checked in.
    pub fn is_open(&self) -> bool {
        self.to_time.is_none()
    }
}

/// Event selector of a webhook.
///
/// The vendor has reported actions both by name and by numeric code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum WebHookAction {
    Code(i64),
    Name(String),
}

/// Subscription that makes the vendor POST change notifications to `url`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct WebHook {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unique_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub business_id: Option<RecordId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<WebHookAction>,
    #[serde(rename = "URL", skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_on: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_on: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl WebHook {
    /// New, active webhook.
    pub fn new(name: impl Into<String>, action: WebHookAction, url: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            action: Some(action),
            url: Some(url.into()),
            active: Some(true),
            ..Self::default()
        }
    }
}

impl_resource!(Business {
    module: "Business",
    path: "sys/businesses",
});

impl_resource!(Coworker {
    module: "Coworker",
    path: "spaces/coworkers",
});

impl_resource!(CheckIn {
    module: "Checkin",
    path: "spaces/checkins",
});

impl_resource!(WebHook {
    module: "WebHook",
    path: "sys/webhooks",
});

impl_timestamps!(Business);
impl_timestamps!(Coworker);
impl_timestamps!(CheckIn);
impl_timestamps!(WebHook);
