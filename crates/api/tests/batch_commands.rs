//! Integration tests for batch commands
//!
//! Batches are read from disk, credentials from a JSON file, and every call
//! goes through the real HTTP client to a mock server.

mod support;

use ficbridge_app::{credential_source, load_batch, run_batch};
use ficbridge_core::DispatchError;
use ficbridge_domain::{BridgeError, FailurePolicy};
use serde_json::json;
use support::{context_for, write_json};
use tokio_util::sync::CancellationToken;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn runs_batch_file_with_file_credentials() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/c/3/company/plan_usage"))
        .and(query_param("category", "documents"))
        .and(header("authorization", "Bearer from-file"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": { "usage": 12 } })))
        .expect(1)
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().expect("temp dir");
    let batch = write_json(
        &dir,
        "batch.json",
        &json!({
            "resource": "company",
            "operation": "getPlanUsage",
            "items": [{ "index": 0, "fieldValues": { "companyId": 3, "category": "documents" } }]
        }),
    );
    let credentials =
        write_json(&dir, "credentials.json", &json!({ "oauthTokenData": { "access_token": "from-file" } }));

    let ctx = context_for(&server, FailurePolicy::FailFast);
    let request = load_batch(&batch).await.expect("batch");
    let report = run_batch(&ctx, request, credential_source(Some(&credentials)), &CancellationToken::new())
        .await
        .expect("report");

    assert_eq!(report.succeeded(), 1);
    assert_eq!(report.envelopes[0].payload, Some(json!({ "data": { "usage": 12 } })));
}

#[tokio::test]
async fn configured_policy_applies_when_batch_has_none() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/c/1/entities/clients/1"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/c/1/entities/clients/2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": { "id": 2 } })))
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().expect("temp dir");
    let batch = write_json(
        &dir,
        "batch.json",
        &json!({
            "resource": "client",
            "operation": "get",
            "items": [
                { "index": 0, "fieldValues": { "companyId": 1, "clientId": 1 } },
                { "index": 1, "fieldValues": { "companyId": 1, "clientId": 2 } }
            ]
        }),
    );
    let credentials = write_json(&dir, "credentials.json", &json!({ "access_token": "t" }));

    let ctx = context_for(&server, FailurePolicy::Continue);
    let request = load_batch(&batch).await.expect("batch");
    let report = run_batch(&ctx, request, credential_source(Some(&credentials)), &CancellationToken::new())
        .await
        .expect("report");

    assert_eq!(report.failed(), 1);
    assert_eq!(report.succeeded(), 1);
    let error = report.envelopes[0].error.as_ref().expect("error detail");
    assert_eq!(error.message, "Request failed with status code 404");
    assert_eq!(error.data, None);
}

#[tokio::test]
async fn credentials_without_token_reject_the_batch() {
    let server = MockServer::start().await;
    let dir = tempfile::tempdir().expect("temp dir");
    let batch = write_json(
        &dir,
        "batch.json",
        &json!({
            "resource": "user",
            "operation": "getInfo",
            "failurePolicy": "continue",
            "items": [{ "index": 0, "fieldValues": {} }]
        }),
    );
    let credentials = write_json(&dir, "credentials.json", &json!({ "refresh_token": "r" }));

    let ctx = context_for(&server, FailurePolicy::FailFast);
    let request = load_batch(&batch).await.expect("batch");
    let result =
        run_batch(&ctx, request, credential_source(Some(&credentials)), &CancellationToken::new()).await;

    assert!(matches!(result, Err(DispatchError::Rejected(BridgeError::MissingToken(_)))));
    assert!(server.received_requests().await.unwrap_or_default().is_empty());
}
