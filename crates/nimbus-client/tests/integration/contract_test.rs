//! Drives the client from the golden fixture files under `contracts/http/`,
//! proving the on-disk exchange descriptions stay in sync with what the
//! client actually sends.

use std::path::PathBuf;

use nimbus_replay::{FixtureRegistry, ReplayTransport};

use crate::helpers::replay_client_with_transport;

fn workspace_root() -> PathBuf {
    let start = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    start
        .ancestors()
        .find(|p| p.join("Cargo.lock").exists())
        .unwrap_or(&start)
        .to_path_buf()
}

#[tokio::test]
async fn should_replay_golden_contract_files_end_to_end() {
    // Files sort by service then id: identity/issue_token precedes
    // storage/list_locations, matching the order the client calls them.
    let files = nimbus_replay::load_all(&workspace_root(), None).unwrap();
    let mut registry = FixtureRegistry::new();
    for file in &files {
        let fixture = file.to_fixture().unwrap();
        registry.register(fixture.expected, fixture.response);
    }

    let transport = ReplayTransport::new(registry);
    let client = replay_client_with_transport(transport);

    let locations = client.list_assignable_locations().await.unwrap();

    assert_eq!(locations.len(), 1);
    assert_eq!(locations[0].id, "region-a.geo-1");
    client.transport().registry().assert_fully_consumed();
}
