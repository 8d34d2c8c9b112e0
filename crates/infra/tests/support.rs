use std::sync::OnceLock;

use cowork_domain::{AdminApiConfig, PublicApiConfig};
use serde_json::{json, Value};

/// Install a test-friendly subscriber once per test binary.
///
/// Output goes through the libtest writer so it only shows for failing tests.
pub fn init_tracing() {
    static INIT: OnceLock<()> = OnceLock::new();
    INIT.get_or_init(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("cowork_infra=debug")),
            )
            .with_test_writer()
            .try_init();
    });
}

/// Admin configuration pointing at a mock server.
pub fn admin_config(base_url: &str, api_key: &str) -> AdminApiConfig {
    let mut config = AdminApiConfig::new(api_key);
    config.base_url = base_url.to_string();
    config
}

/// Member portal configuration for the default test member.
pub fn member_config() -> PublicApiConfig {
    PublicApiConfig::new("downtown", "ada@example.com", "s3cret")
}

/// One coworker record as the admin API serializes it.
pub fn coworker_record(id: i64) -> Value {
    json!({
        "Id": id,
        "FullName": format!("Coworker {id}"),
        "Email": format!("coworker{id}@example.com"),
        "UpdatedOn": "2024-01-02T03:04:05Z"
    })
}

/// A list page holding coworkers `first..first + count`.
pub fn coworker_page(page: u32, first: i64, count: i64, has_next_page: bool) -> Value {
    let records: Vec<Value> = (first..first + count).map(coworker_record).collect();
    json!({
        "Records": records,
        "CurrentPage": page,
        "CurrentPageSize": records.len(),
        "PageSize": 1000,
        "HasNextPage": has_next_page,
        "HasPreviousPage": page > 1
    })
}

/// Envelope the portal wraps around successful payloads.
pub fn success_envelope(value: Value) -> Value {
    json!({
        "Status": 200,
        "Message": null,
        "Value": value,
        "WasSuccessful": true,
        "Errors": null
    })
}

/// Envelope describing a rejected request.
pub fn failure_envelope(message: &str) -> Value {
    json!({
        "Status": 200,
        "Message": message,
        "Value": null,
        "WasSuccessful": false,
        "Errors": null
    })
}
