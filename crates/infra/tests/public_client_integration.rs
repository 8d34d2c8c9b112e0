//! Integration tests for the member portal client
//!
//! **Coverage:**
//! - Basic credentials on every request
//! - Session cookies set by the portal are replayed by the same client
//! - The response envelope is stripped before decoding
//! - Vendor and status failures surface as errors

#![allow(dead_code)]

#[path = "support.rs"]
mod support;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use cowork_core::MemberPortal;
use cowork_domain::CoworkError;
use cowork_infra::{ApiError, PublicApiClient};
use serde_json::json;
use support::{failure_envelope, init_tracing, member_config, success_envelope};
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn portal(server: &MockServer) -> PublicApiClient {
    PublicApiClient::with_space_url(&member_config(), format!("{}/en", server.uri())).unwrap()
}

fn profile_body() -> serde_json::Value {
    json!({
        "User": { "Id": 1, "FullName": "Ada Lovelace", "Email": "ada@example.com", "IsAuthenticated": true },
        "Coworker": { "Id": 2, "FullName": "Ada Lovelace", "CheckedIn": false, "TariffId": 12 }
    })
}

#[tokio::test]
async fn test_profile_sends_basic_credentials() {
    init_tracing();
    let server = MockServer::start().await;
    let expected = format!("Basic {}", STANDARD.encode("ada@example.com:s3cret"));

    Mock::given(method("GET"))
        .and(path("/en/profile"))
        .and(header("authorization", expected.as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(profile_body()))
        .expect(1)
        .mount(&server)
        .await;

    let profile = portal(&server).get_profile().await.unwrap();

    assert_eq!(profile.user.email.as_deref(), Some("ada@example.com"));
    assert_eq!(profile.coworker.tariff_id, Some(12));
}

#[tokio::test]
async fn test_session_cookie_is_replayed() {
    init_tracing();
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/en/invoices"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("set-cookie", "portal_session=abc123; Path=/")
                .set_body_json(json!([])),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/en/profile"))
        .and(header("cookie", "portal_session=abc123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(profile_body()))
        .expect(1)
        .mount(&server)
        .await;

    let client = portal(&server);
    client.get_invoices().await.unwrap();
    client.get_profile().await.unwrap();
}

#[tokio::test]
async fn test_separate_clients_do_not_share_cookies() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/en/invoices"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("set-cookie", "portal_session=abc123; Path=/")
                .set_body_json(json!([])),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/en/profile"))
        .respond_with(ResponseTemplate::new(200).set_body_json(profile_body()))
        .mount(&server)
        .await;

    portal(&server).get_invoices().await.unwrap();
    portal(&server).get_profile().await.unwrap();

    let requests = server.received_requests().await.unwrap();
    let profile_request =
        requests.iter().find(|r| r.url.path() == "/en/profile").expect("profile request");
    assert!(!profile_request.headers.contains_key("cookie"));
}

#[tokio::test]
async fn test_coworker_resource_is_unwrapped() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/en/profile"))
        .and(query_param("_resource", "Coworker"))
        .respond_with(ResponseTemplate::new(200).set_body_json(success_envelope(json!({
            "Id": 2,
            "FullName": "Ada Lovelace",
            "IsMember": true,
            "FavouriteDesk": "window"
        }))))
        .expect(1)
        .mount(&server)
        .await;

    let coworker = portal(&server).get_coworker().await.unwrap();

    assert_eq!(coworker.id, Some(2));
    assert_eq!(coworker.is_member, Some(true));
    assert_eq!(coworker.extra.get("FavouriteDesk"), Some(&json!("window")));
}

#[tokio::test]
async fn test_user_resource() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/en/profile"))
        .and(query_param("_resource", "User"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "Id": 1, "Email": "ada@example.com" })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let user = portal(&server).get_user().await.unwrap();
    assert_eq!(user.id, Some(1));
}

#[tokio::test]
async fn test_invoices_are_returned_raw() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/en/invoices"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "Records": [{ "InvoiceNumber": "INV-1" }, { "InvoiceNumber": "INV-2" }],
            "HasNextPage": false
        })))
        .mount(&server)
        .await;

    let invoices = portal(&server).get_invoices().await.unwrap();

    assert_eq!(invoices.invoices().len(), 2);
    assert_eq!(invoices.0["HasNextPage"], json!(false));
}

#[tokio::test]
async fn test_unsuccessful_envelope_is_vendor_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/en/profile"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(failure_envelope("Session expired")),
        )
        .mount(&server)
        .await;

    let err = portal(&server).get_profile().await.unwrap_err();
    assert!(matches!(err, ApiError::Vendor { ref message } if message == "Session expired"));
}

#[tokio::test]
async fn test_unauthorized_through_member_portal_port() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/en/profile"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let client = portal(&server);
    let portal: &dyn MemberPortal = &client;

    let err = portal.profile().await.unwrap_err();
    assert!(matches!(err, CoworkError::Api(ref msg) if msg.contains("401")), "got {err:?}");
}
