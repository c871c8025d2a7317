//! Integration tests for the Twilio Verify client against a mock provider

use httpmock::prelude::*;
use std::time::Duration;
use vp_core::errors::ProviderError;
use vp_core::services::VerificationProvider;
use vp_infra::verify::{TwilioVerifyClient, TwilioVerifyConfig};
use vp_shared::config::Credentials;

// base64("ACtest:test_token")
const BASIC_AUTH: &str = "Basic QUN0ZXN0OnRlc3RfdG9rZW4=";

const PENDING: &str = r#"{"sid":"VEtest","service_sid":"VAtest","account_sid":"ACtest","to":"+15551234567","channel":"sms","status":"pending","valid":false,"date_created":"2023-05-01T12:00:00Z","date_updated":"2023-05-01T12:00:00Z"}"#;
const APPROVED: &str = r#"{"sid":"VEtest","service_sid":"VAtest","account_sid":"ACtest","to":"+15551234567","channel":"sms","status":"approved","valid":true,"date_created":"2023-05-01T12:00:00Z","date_updated":"2023-05-01T12:01:00Z"}"#;

fn build_client(server: &MockServer) -> TwilioVerifyClient {
    let config = TwilioVerifyConfig::new(Credentials::new("VAtest", "ACtest", "test_token"))
        .with_base_url(server.url("/v2"));

    TwilioVerifyClient::new(config).expect("Client should build against the mock server.")
}

#[tokio::test]
async fn start_verification_posts_form_with_basic_auth() {
    let server = MockServer::start_async().await;
    let client = build_client(&server);
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/v2/Services/VAtest/Verifications")
                .query_param("To", "+15551234567")
                .query_param("Channel", "sms")
                .header("authorization", BASIC_AUTH)
                .header("accept", "application/json")
                .header("content-type", "application/x-www-form-urlencoded")
                .body("Channel=sms&To=%2B15551234567");
            then.status(201).header("content-type", "application/json").body(PENDING);
        })
        .await;

    let body = client
        .start_verification("+15551234567", "sms")
        .await
        .expect("Provider call should succeed on 201.");

    assert_eq!(body, PENDING.as_bytes());
    mock.assert_calls_async(1).await;
}

#[tokio::test]
async fn check_verification_posts_code() {
    let server = MockServer::start_async().await;
    let client = build_client(&server);
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/v2/Services/VAtest/VerificationCheck")
                .query_param("To", "+15551234567")
                .query_param("Code", "123456")
                .header("authorization", BASIC_AUTH)
                .body("Code=123456&To=%2B15551234567");
            then.status(200).header("content-type", "application/json").body(APPROVED);
        })
        .await;

    let body = client
        .check_verification("+15551234567", "123456")
        .await
        .expect("Provider call should succeed on 200.");

    assert_eq!(body, APPROVED.as_bytes());
    mock.assert_calls_async(1).await;
}

#[tokio::test]
async fn non_success_status_is_reported_without_retry() {
    let server = MockServer::start_async().await;
    let client = build_client(&server);
    let mock = server
        .mock_async(|when, then| {
            when.method(POST).path("/v2/Services/VAtest/VerificationCheck");
            then.status(404)
                .header("content-type", "application/json")
                .body(r#"{"code":20404,"message":"The requested resource was not found","status":404}"#);
        })
        .await;

    let err = client
        .check_verification("+15551234567", "123456")
        .await
        .expect_err("A 404 from the provider should be an error.");

    assert_eq!(err, ProviderError::Status(404));
    mock.assert_calls_async(1).await;
}

#[tokio::test]
async fn server_error_is_not_retried() {
    let server = MockServer::start_async().await;
    let client = build_client(&server);
    let mock = server
        .mock_async(|when, then| {
            when.method(POST).path("/v2/Services/VAtest/Verifications");
            then.status(503);
        })
        .await;

    let err = client
        .start_verification("+15551234567", "sms")
        .await
        .expect_err("A 503 from the provider should be an error.");

    assert_eq!(err, ProviderError::Status(503));
    mock.assert_calls_async(1).await;
}

#[tokio::test]
async fn empty_success_body_is_returned_as_is() {
    let server = MockServer::start_async().await;
    let client = build_client(&server);
    server
        .mock_async(|when, then| {
            when.method(POST).path("/v2/Services/VAtest/Verifications");
            then.status(204);
        })
        .await;

    let body = client
        .start_verification("+15551234567", "sms")
        .await
        .expect("Any 2xx status should be accepted by the transport.");

    assert!(body.is_empty());
}

#[tokio::test]
async fn slow_provider_hits_client_timeout() {
    let server = MockServer::start_async().await;
    let config = TwilioVerifyConfig::new(Credentials::new("VAtest", "ACtest", "test_token"))
        .with_base_url(server.url("/v2"))
        .with_request_timeout(Duration::from_millis(200));
    let client = TwilioVerifyClient::new(config).expect("Client should build.");
    server
        .mock_async(|when, then| {
            when.method(POST).path("/v2/Services/VAtest/Verifications");
            then.status(201).body(PENDING).delay(Duration::from_secs(2));
        })
        .await;

    let err = client
        .start_verification("+15551234567", "sms")
        .await
        .expect_err("A response slower than the timeout should fail.");

    assert!(matches!(err, ProviderError::Transport(_)), "unexpected error: {err:?}");
    assert_no_request_secrets(&err, "+15551234567", "sms");
}

#[tokio::test]
async fn unreachable_provider_is_transport_error() {
    // Nothing listens on port 1
    let config = TwilioVerifyConfig::new(Credentials::new("VAtest", "ACtest", "test_token"))
        .with_base_url("http://127.0.0.1:1/v2");
    let client = TwilioVerifyClient::new(config).expect("Client should build.");

    let err = client
        .check_verification("+15551234567", "123456")
        .await
        .expect_err("Connecting to a closed port should fail.");

    assert!(matches!(err, ProviderError::Transport(_)), "unexpected error: {err:?}");
    assert_no_request_secrets(&err, "+15551234567", "123456");
}

#[tokio::test]
async fn transport_error_text_omits_destination_and_code() {
    let config = TwilioVerifyConfig::new(Credentials::new("VAtest", "ACtest", "test_token"))
        .with_base_url("http://127.0.0.1:1/v2");
    let client = TwilioVerifyClient::new(config).expect("Client should build.");

    let err = client
        .check_verification("+15551234567", "987654")
        .await
        .expect_err("Connecting to a closed port should fail.");

    // Same shape the API layer writes to its error log
    let logged = format!("Provider call failed (transport): {err}");
    assert!(!logged.contains("5551234567"), "destination leaked: {logged}");
    assert!(!logged.contains("987654"), "code leaked: {logged}");
    assert!(!logged.contains("To="), "query leaked: {logged}");
    assert!(!logged.contains("VerificationCheck"), "url leaked: {logged}");
}

// Neither the Display nor the Debug form may carry the request's form values.
fn assert_no_request_secrets(err: &ProviderError, to: &str, value: &str) {
    let digits = to.trim_start_matches('+');
    for text in [err.to_string(), format!("{err:?}")] {
        assert!(!text.contains(digits), "destination leaked: {text}");
        assert!(!text.contains(&format!("={value}")), "form value leaked: {text}");
    }
}
