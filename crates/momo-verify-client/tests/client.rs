//! Client SDK integration tests against a mock server.

use momo_verify_client::{
    ClientError, ClientOptions, IngestOutcome, MomoVerifyClient, VerificationOutcome,
};
use serde_json::json;
use wiremock::matchers::{body_json, header_exists, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn submit_sms_returns_saved_outcome() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/webhooks/sms"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "saved",
            "data": {
                "raw_text": "TxId:998877 received 5,000 RWF from Jane Smith (07****321)",
                "txid": "998877",
                "amount_rwf": 5000,
                "payer_name": "Jane Smith",
                "phone_last_digits": "321",
                "received_at": "2024-01-01T10:00:00Z",
            },
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = MomoVerifyClient::new(server.uri());
    let outcome = client
        .submit_sms("TxId:998877 received 5,000 RWF from Jane Smith (07****321)")
        .await
        .unwrap();

    match outcome {
        IngestOutcome::Saved { data } => {
            assert_eq!(data.txid, "998877");
            assert_eq!(data.amount_rwf, 5000);
        }
        IngestOutcome::Ignored { reason } => panic!("unexpected ignore: {reason}"),
    }
}

#[tokio::test]
async fn submit_sms_returns_ignored_outcome() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/webhooks/sms"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "ignored",
            "reason": "TxId not found in message.",
        })))
        .mount(&server)
        .await;

    let client = MomoVerifyClient::new(server.uri());
    let outcome = client.submit_sms("just an airtime reminder").await.unwrap();

    assert!(matches!(outcome, IngestOutcome::Ignored { .. }));
}

#[tokio::test]
async fn submit_sms_signs_body_when_secret_configured() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/webhooks/sms"))
        .and(header_exists("x-sms-signature"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "ignored",
            "reason": "TxId not found in message.",
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = MomoVerifyClient::with_options(
        server.uri(),
        ClientOptions {
            webhook_secret: Some("gateway-secret".into()),
            ..ClientOptions::default()
        },
    );

    client.submit_sms("hello").await.unwrap();
}

#[tokio::test]
async fn verify_payment_returns_approved_outcome() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/verify-payment"))
        .and(body_json(json!({
            "name": "Jane",
            "phone_number": "0788888321",
            "txid": "998877",
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "approved",
            "message": "Payment verified.",
            "amount_rwf": 5000,
            "txid": "998877",
        })))
        .mount(&server)
        .await;

    let client = MomoVerifyClient::new(server.uri());
    let outcome = client
        .verify_payment("Jane", "0788888321", "998877")
        .await
        .unwrap();

    match outcome {
        VerificationOutcome::Approved {
            amount_rwf, txid, ..
        } => {
            assert_eq!(amount_rwf, 5000);
            assert_eq!(txid, "998877");
        }
        VerificationOutcome::NotApproved { message } => panic!("unexpected rejection: {message}"),
    }
}

#[tokio::test]
async fn verify_payment_surfaces_missing_field_rejection() {
    let server = MockServer::start().await;

    // The service answers missing-field claims with 400 but keeps the
    // status-tagged outcome shape.
    Mock::given(method("POST"))
        .and(path("/v1/verify-payment"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "status": "not_approved",
            "message": "name, phone_number, and txid are required.",
        })))
        .mount(&server)
        .await;

    let client = MomoVerifyClient::new(server.uri());
    let outcome = client.verify_payment("Jane", "", "998877").await.unwrap();

    match outcome {
        VerificationOutcome::NotApproved { message } => {
            assert_eq!(message, "name, phone_number, and txid are required.");
        }
        VerificationOutcome::Approved { .. } => panic!("unexpected approval"),
    }
}

#[tokio::test]
async fn server_errors_map_to_api_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/webhooks/sms"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({
            "error": {
                "code": "internal_error",
                "message": "An internal error occurred",
            },
        })))
        .mount(&server)
        .await;

    let client = MomoVerifyClient::new(server.uri());
    let err = client.submit_sms("TxId:1").await.unwrap_err();

    match err {
        ClientError::Api { code, status, .. } => {
            assert_eq!(code, "internal_error");
            assert_eq!(status, 500);
        }
        other => panic!("unexpected error: {other}"),
    }
}
