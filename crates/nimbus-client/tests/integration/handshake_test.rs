//! Expect tests for the token handshake on its own.

use nimbus_client::ClientError;
use nimbus_core::transport::TransportError;
use nimbus_replay::{CannedResponse, FixtureRegistry};

use crate::helpers::{auth_response, expected_auth_request, replay_client};

#[tokio::test]
async fn should_issue_token_from_canned_handshake() {
    let mut registry = FixtureRegistry::new();
    registry.register(expected_auth_request(), auth_response("tok-1"));
    let client = replay_client(registry);

    let token = client.authenticate().await.unwrap();

    assert_eq!(token.id, "tok-1");
    assert!(!token.is_expired());
}

#[tokio::test]
async fn should_map_rejected_credentials_to_auth_error() {
    let mut registry = FixtureRegistry::new();
    registry.register(expected_auth_request(), CannedResponse::new(401));
    let client = replay_client(registry);

    let err = client.authenticate().await.unwrap_err();

    assert_eq!(err.kind(), "AUTH");
}

#[tokio::test]
async fn should_map_malformed_token_body_to_decode_error() {
    let mut registry = FixtureRegistry::new();
    registry.register(
        expected_auth_request(),
        CannedResponse::new(200).with_body("{}"),
    );
    let client = replay_client(registry);

    let err = client.authenticate().await.unwrap_err();

    assert_eq!(err.kind(), "DECODE");
}

#[tokio::test]
async fn should_report_mismatch_when_credentials_differ_from_fixture() {
    // Fixture pins a different secret: the client's request body won't
    // match, and the diagnostic carries the nearest candidate.
    let mut registry = FixtureRegistry::new();
    registry.register(
        nimbus_replay::ExpectedRequest::new(
            http::Method::POST,
            "https://auth.example.com/v2/tokens",
        )
        .json_body(serde_json::json!({
            "auth": {
                "accessKey": "OTHER",
                "secretKey": "OTHER",
                "tenantName": "OTHER",
            }
        })),
        auth_response("tok-1"),
    );
    let client = replay_client(registry);

    let err = client.authenticate().await.unwrap_err();

    let ClientError::Transport(TransportError::Unmatched(report)) = err else {
        panic!("expected unmatched transport error, got {err:?}");
    };
    assert!(report.nearest.is_some());
    assert_eq!(report.actual.url.as_str(), "https://auth.example.com/v2/tokens");
}
