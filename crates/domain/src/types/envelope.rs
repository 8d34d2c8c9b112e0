//! Wire envelopes
//!
//! The admin API wraps write results in [`ApiResponse`] and list results in
//! [`ListEnvelope`]. Neither is returned to callers; clients unwrap them.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Envelope returned by write endpoints and the member portal.
///
/// An HTTP 200 response can still report failure through
/// `was_successful = false`, with the reason in `message`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ApiResponse<V> {
    pub status: Option<u16>,
    pub message: Option<String>,
    pub value: Option<V>,
    pub errors: Option<Vec<ErrorDetail>>,
    #[serde(default)]
    pub was_successful: bool,
    #[serde(rename = "RedirectURL")]
    pub redirect_url: Option<Value>,
    pub java_script: Option<Value>,
    pub open_in_dialog: Option<bool>,
    pub open_in_window: Option<bool>,
}

impl<V> ApiResponse<V> {
    /// Best available failure description.
    ///
    /// Falls back to the first validation error when `Message` is empty.
    pub fn failure_message(&self) -> Option<String> {
        let message = self.message.as_deref().filter(|m| !m.trim().is_empty());
        if let Some(message) = message {
            return Some(message.to_string());
        }

        self.errors.as_ref().and_then(|errors| errors.iter().find_map(ErrorDetail::describe))
    }
}

/// Field-level validation failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ErrorDetail {
    pub attempted_value: Option<Value>,
    pub message: Option<String>,
    pub property_name: Option<String>,
}

impl ErrorDetail {
    /// `"{PropertyName}: {Message}"`, or just the message when no property is
    /// named. `None` without a message.
    pub fn describe(&self) -> Option<String> {
        self.message.as_ref().map(|message| match &self.property_name {
            Some(property) if !property.is_empty() => format!("{property}: {message}"),
            _ => message.clone(),
        })
    }
}

/// One page of a list query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListEnvelope<T> {
    pub records: Vec<T>,
    pub current_page: Option<u32>,
    pub current_page_size: Option<u32>,
    pub current_order_field: Option<String>,
    pub current_sort_direction: Option<i32>,
    pub first_item: Option<u64>,
    pub last_item: Option<u64>,
    #[serde(default)]
    pub has_next_page: bool,
    #[serde(default)]
    pub has_previous_page: bool,
    pub page_number: Option<u32>,
    pub page_size: Option<u32>,
    pub total_items: Option<u64>,
    pub total_pages: Option<u32>,
}
