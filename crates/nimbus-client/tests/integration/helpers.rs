use nimbus_client::{ClientConfig, CloudClient};
use nimbus_domain::credentials::Credentials;
use nimbus_replay::{CannedResponse, ExpectedRequest, FixtureRegistry, ReplayTransport};
use url::Url;

pub const ACCESS_KEY: &str = "AKIDEXAMPLE";
pub const SECRET_KEY: &str = "sk-secret-example";
pub const TENANT: &str = "demo-tenant";

pub fn test_config() -> ClientConfig {
    ClientConfig::new(
        Url::parse("https://auth.example.com").unwrap(),
        Url::parse("https://api.example.com").unwrap(),
        Credentials::new(ACCESS_KEY, SECRET_KEY, TENANT),
    )
}

/// Client wired to a replay transport over `registry`.
pub fn replay_client(registry: FixtureRegistry) -> CloudClient<ReplayTransport> {
    replay_client_with_transport(ReplayTransport::new(registry))
}

pub fn replay_client_with_transport(transport: ReplayTransport) -> CloudClient<ReplayTransport> {
    CloudClient::new(test_config(), transport).unwrap()
}

/// The exact handshake request the client issues for [`test_config`].
pub fn expected_auth_request() -> ExpectedRequest {
    ExpectedRequest::new(http::Method::POST, "https://auth.example.com/v2/tokens").json_body(
        serde_json::json!({
            "auth": {
                "accessKey": ACCESS_KEY,
                "secretKey": SECRET_KEY,
                "tenantName": TENANT,
            }
        }),
    )
}

/// A 200 handshake response issuing `token_id`, valid until 2030.
pub fn auth_response(token_id: &str) -> CannedResponse {
    CannedResponse::json(
        200,
        serde_json::json!({
            "token": { "id": token_id, "expires": "2030-01-01T00:00:00Z" }
        }),
    )
}

/// The first-page list-locations request bearing `token_id` (default page
/// size, no marker).
pub fn expected_locations_request(token_id: &str) -> ExpectedRequest {
    ExpectedRequest::new(
        http::Method::GET,
        "https://api.example.com/v2/locations?limit=100",
    )
    .header("x-auth-token", token_id)
}
