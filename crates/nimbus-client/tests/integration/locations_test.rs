//! Expect tests for `list_assignable_locations`: canned wire-level
//! exchanges drive the full client stack through the replay transport.

use nimbus_client::ClientError;
use nimbus_core::transport::TransportError;
use nimbus_domain::location::{Location, LocationScope};
use nimbus_replay::{CannedResponse, FixtureRegistry};

use crate::helpers::{
    auth_response, expected_auth_request, expected_locations_request, replay_client,
};

fn locations_body(ids: &[&str], next: Option<&str>) -> serde_json::Value {
    serde_json::json!({
        "locations": ids
            .iter()
            .map(|id| serde_json::json!({ "id": id, "scope": "region" }))
            .collect::<Vec<_>>(),
        "next": next,
    })
}

#[tokio::test]
async fn should_list_single_location_after_token_handshake() {
    let mut registry = FixtureRegistry::new();
    registry.register(expected_auth_request(), auth_response("tok-1"));
    registry.register(
        expected_locations_request("tok-1"),
        CannedResponse::json(200, locations_body(&["region-a.geo-1"], None)),
    );
    let client = replay_client(registry);

    let locations = client.list_assignable_locations().await.unwrap();

    assert_eq!(locations.len(), 1);
    assert_eq!(locations[0].id, "region-a.geo-1");
}

#[tokio::test]
async fn should_decode_location_equal_to_literal() {
    let mut registry = FixtureRegistry::new();
    registry.register(expected_auth_request(), auth_response("tok-1"));
    registry.register(
        expected_locations_request("tok-1"),
        CannedResponse::json(
            200,
            serde_json::json!({
                "locations": [{
                    "id": "region-a.geo-1",
                    "scope": "region",
                    "description": "US West",
                }],
                "next": null,
            }),
        ),
    );
    let client = replay_client(registry);

    let locations = client.list_assignable_locations().await.unwrap();

    assert_eq!(
        locations,
        vec![Location {
            id: "region-a.geo-1".to_owned(),
            scope: LocationScope::Region,
            description: Some("US West".to_owned()),
            parent: None,
        }]
    );
}

#[tokio::test]
async fn should_fail_hard_when_only_auth_fixture_is_registered() {
    let mut registry = FixtureRegistry::new();
    registry.register(expected_auth_request(), auth_response("tok-1"));
    let client = replay_client(registry);

    let err = client.list_assignable_locations().await.unwrap_err();

    // Never an empty collection: the missing follow-up fixture is a hard
    // transport failure.
    assert!(matches!(
        err,
        ClientError::Transport(TransportError::Exhausted)
    ));
}

#[tokio::test]
async fn should_follow_next_markers_across_pages() {
    let mut registry = FixtureRegistry::new();
    registry.register(expected_auth_request(), auth_response("tok-1"));
    registry.register(
        expected_locations_request("tok-1"),
        CannedResponse::json(
            200,
            locations_body(&["region-a.geo-1"], Some("region-a.geo-1")),
        ),
    );
    registry.register(
        nimbus_replay::ExpectedRequest::new(
            http::Method::GET,
            "https://api.example.com/v2/locations?limit=100&marker=region-a.geo-1",
        )
        .header("x-auth-token", "tok-1"),
        CannedResponse::json(200, locations_body(&["region-b.geo-1"], None)),
    );
    let client = replay_client(registry);

    let locations = client.list_assignable_locations().await.unwrap();

    assert_eq!(locations.len(), 2);
    assert_eq!(locations[0].id, "region-a.geo-1");
    assert_eq!(locations[1].id, "region-b.geo-1");
}

#[tokio::test]
async fn should_reauthenticate_once_after_401() {
    let mut registry = FixtureRegistry::new();
    registry.register(expected_auth_request(), auth_response("tok-stale"));
    registry.register(
        expected_locations_request("tok-stale"),
        CannedResponse::new(401),
    );
    registry.register(expected_auth_request(), auth_response("tok-fresh"));
    registry.register(
        expected_locations_request("tok-fresh"),
        CannedResponse::json(200, locations_body(&["region-a.geo-1"], None)),
    );
    let client = replay_client(registry);

    let locations = client.list_assignable_locations().await.unwrap();

    assert_eq!(locations.len(), 1);
}

#[tokio::test]
async fn should_surface_second_401_as_unexpected_status() {
    let mut registry = FixtureRegistry::new();
    registry.register(expected_auth_request(), auth_response("tok-1"));
    registry.register(expected_locations_request("tok-1"), CannedResponse::new(401));
    registry.register(expected_auth_request(), auth_response("tok-2"));
    registry.register(expected_locations_request("tok-2"), CannedResponse::new(401));
    let client = replay_client(registry);

    let err = client.list_assignable_locations().await.unwrap_err();

    assert_eq!(err.kind(), "UNEXPECTED_STATUS");
}

#[tokio::test]
async fn should_reuse_cached_token_across_operations() {
    let mut registry = FixtureRegistry::new();
    registry.register(expected_auth_request(), auth_response("tok-1"));
    registry.register(
        expected_locations_request("tok-1"),
        CannedResponse::json(200, locations_body(&["region-a.geo-1"], None)),
    );
    registry.register(
        expected_locations_request("tok-1"),
        CannedResponse::json(200, locations_body(&["region-a.geo-1"], None)),
    );
    let client = replay_client(registry);

    // One handshake fixture serves both calls: the token is session state.
    client.list_assignable_locations().await.unwrap();
    client.list_assignable_locations().await.unwrap();
}

#[tokio::test]
async fn should_surface_malformed_body_as_decode_failure_not_mismatch() {
    let mut registry = FixtureRegistry::new();
    registry.register(expected_auth_request(), auth_response("tok-1"));
    registry.register(
        expected_locations_request("tok-1"),
        CannedResponse::new(200).with_body("<html>not json</html>"),
    );
    let client = replay_client(registry);

    let err = client.list_assignable_locations().await.unwrap_err();

    // The right request was sent; the failure class points at decoding.
    assert_eq!(err.kind(), "DECODE");
    assert!(!matches!(err, ClientError::Transport(_)));
}
