//! Response decoding and error normalization
//!
//! Every client funnels responses through here so that both failure styles
//! of the vendor (error status, or HTTP 200 with `WasSuccessful: false`)
//! produce the same [`ApiError`].

use cowork_domain::ErrorDetail;
use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use crate::errors::ApiError;

const UNSUCCESSFUL: &str = "request was not successful";

/// Decode a response body as `R` after normalizing failures.
///
/// An empty success body decodes as JSON `null`.
pub async fn read_json<R: DeserializeOwned>(response: Response) -> Result<R, ApiError> {
    let url = response.url().to_string();
    let value = read_value(response).await?.unwrap_or(Value::Null);

    serde_json::from_value(value).map_err(|e| ApiError::Decode { url, reason: e.to_string() })
}

/// Check a response for failure and discard its body.
pub async fn read_unit(response: Response) -> Result<(), ApiError> {
    read_value(response).await.map(|_| ())
}

/// Strip the vendor envelope from a successful body, if there is one.
pub fn unwrap_value(value: Value) -> Value {
    match value {
        Value::Object(mut fields) if fields.contains_key("WasSuccessful") => {
            fields.remove("Value").unwrap_or(Value::Null)
        }
        other => other,
    }
}

async fn read_value(response: Response) -> Result<Option<Value>, ApiError> {
    let url = response.url().to_string();
    let status = response.status();
    let body = response.text().await?;

    if !status.is_success() {
        return Err(status_failure(status, url, body));
    }

    if body.trim().is_empty() {
        return Ok(None);
    }

    let value: Value = serde_json::from_str(&body)
        .map_err(|e| ApiError::Decode { url: url.clone(), reason: e.to_string() })?;

    if value.get("WasSuccessful").and_then(Value::as_bool) == Some(false) {
        let message = vendor_message(&value).unwrap_or_else(|| UNSUCCESSFUL.to_string());
        debug!(%url, %message, "vendor reported failure in successful response");
        return Err(ApiError::Vendor { message });
    }

    Ok(Some(value))
}

fn status_failure(status: StatusCode, url: String, body: String) -> ApiError {
    let message = serde_json::from_str::<Value>(&body).ok().and_then(|value| vendor_message(&value));

    match message {
        Some(message) => ApiError::Vendor { message },
        None => ApiError::Status { status, url, body },
    }
}

/// `Message` of a failure payload, or the first described validation error.
///
/// Other fields of the body may have any shape.
fn vendor_message(value: &Value) -> Option<String> {
    let message = value
        .get("Message")
        .and_then(Value::as_str)
        .filter(|message| !message.trim().is_empty());
    if let Some(message) = message {
        return Some(message.to_string());
    }

    let errors = value.get("Errors")?;
    serde_json::from_value::<Vec<ErrorDetail>>(errors.clone())
        .ok()?
        .iter()
        .find_map(ErrorDetail::describe)
}
