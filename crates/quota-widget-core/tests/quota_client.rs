#![allow(unused_crate_dependencies)]
#![allow(clippy::tests_outside_test_module, reason = "integration tests live in tests/ dir")]
#![allow(clippy::expect_used, reason = "integration test, panics are the assertion mechanism")]

use chrono::Utc;
use quota_widget_core::engine::parse_quota;
use quota_widget_core::modules::quota::{QuotaClient, QuotaSource};
use quota_widget_core::types::{RawModelQuota, Remaining};
use quota_widget_core::AppError;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const ENDPOINT: &str = "/v1internal:fetchAvailableModels";

fn models_body() -> serde_json::Value {
    serde_json::json!({
        "models": {
            "gemini-3-flash": {
                "quotaInfo": { "remainingFraction": 0.64, "resetTime": "2025-11-20T10:00:00Z" }
            },
            "claude-sonnet-4-5": {
                "quotaInfo": { "resetTime": "2025-11-20T12:00:00Z" }
            },
            "tab-completion": {}
        }
    })
}

async fn client_for(server: &MockServer) -> QuotaClient {
    QuotaClient::new(format!("{}{}", server.uri(), ENDPOINT), 5).expect("client builds")
}

#[tokio::test]
async fn test_fetch_success() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(ENDPOINT))
        .and(header("authorization", "Bearer ya29.token"))
        .and(header("user-agent", "antigravity"))
        .and(header("content-type", "application/json"))
        .and(body_json(serde_json::json!({})))
        .respond_with(ResponseTemplate::new(200).set_body_json(models_body()))
        .expect(1)
        .mount(&server)
        .await;

    let payload = client_for(&server).await.fetch_models("ya29.token").await.expect("payload");

    assert_eq!(payload.len(), 3);
    assert_eq!(payload["gemini-3-flash"].remaining_fraction, Some(0.64));
    assert_eq!(payload["claude-sonnet-4-5"].remaining_fraction, None);
    assert_eq!(payload["claude-sonnet-4-5"].reset_time.as_deref(), Some("2025-11-20T12:00:00Z"));
    assert_eq!(payload["tab-completion"], RawModelQuota::default());
}

#[tokio::test]
async fn test_non_200_statuses_map_to_http_error() {
    let server = MockServer::start().await;
    let client = client_for(&server).await;

    for status in [401_u16, 403, 429, 500] {
        let _guard = Mock::given(method("POST"))
            .and(path(ENDPOINT))
            .respond_with(ResponseTemplate::new(status).set_body_string("denied"))
            .mount_as_scoped(&server)
            .await;

        let err = client.fetch_models("ya29.token").await.expect_err("non-200 must fail");
        match &err {
            AppError::Http { status: got, body } => {
                assert_eq!(*got, status);
                assert_eq!(body, "denied");
            },
            other => panic!("status {}: expected Http, got {:?}", status, other),
        }
        assert_eq!(err.display_message(), format!("Error {}", status));
    }
}

#[tokio::test]
async fn test_other_success_codes_are_not_accepted() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let err = client_for(&server).await.fetch_models("ya29.token").await.expect_err("204");
    assert!(matches!(err, AppError::Http { status: 204, .. }));
}

#[tokio::test]
async fn test_unreachable_host_is_network_error() {
    let server = MockServer::start().await;
    let url = format!("{}{}", server.uri(), ENDPOINT);
    drop(server);

    let client = QuotaClient::new(url, 2).expect("client builds");
    let err = client.fetch_models("ya29.token").await.expect_err("nothing listening");

    assert!(matches!(err, AppError::Network(_)), "got {:?}", err);
    assert_eq!(err.display_message(), "Network error");
}

#[tokio::test]
async fn test_malformed_body_is_network_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&server)
        .await;

    let err = client_for(&server).await.fetch_models("ya29.token").await.expect_err("bad body");
    assert!(matches!(err, AppError::Network(_)), "got {:?}", err);
}

#[tokio::test]
async fn test_missing_models_field_is_empty_payload() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .mount(&server)
        .await;

    let payload = client_for(&server).await.fetch_models("ya29.token").await.expect("payload");
    assert!(payload.is_empty());
}

#[tokio::test]
async fn test_malformed_entry_degrades_alone() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "models": {
                "gemini-3-flash": { "quotaInfo": { "remainingFraction": 0.4 } },
                "weird-model": { "quotaInfo": { "resetTime": 12345 } }
            }
        })))
        .mount(&server)
        .await;

    let payload = client_for(&server).await.fetch_models("ya29.token").await.expect("payload");
    assert_eq!(payload["gemini-3-flash"].remaining_fraction, Some(0.4));

    let parsed = parse_quota(&payload["weird-model"], Utc::now());
    assert_eq!(parsed.remaining, Remaining::Exceeded);
    assert_eq!(parsed.reset_countdown, "");
}
