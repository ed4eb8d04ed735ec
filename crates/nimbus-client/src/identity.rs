//! Token handshake with the identity service.
//!
//! One POST to `{auth_url}/v2/tokens` carrying the credential pair; the
//! response body holds the issued token and its expiry.

use bytes::Bytes;
use http::header::{ACCEPT, CONTENT_TYPE, HeaderValue};
use http::Method;
use nimbus_core::wire::{RequestSnapshot, ResponseSnapshot};
use nimbus_domain::token::AuthToken;
use serde::{Deserialize, Serialize};

use crate::config::ClientConfig;
use crate::error::ClientError;

#[derive(Serialize)]
struct TokenRequestBody<'a> {
    auth: AuthPayload<'a>,
}

#[derive(Serialize)]
struct AuthPayload<'a> {
    #[serde(rename = "accessKey")]
    access_key: &'a str,
    #[serde(rename = "secretKey")]
    secret_key: &'a str,
    #[serde(rename = "tenantName")]
    tenant: &'a str,
}

#[derive(Deserialize)]
struct TokenEnvelope {
    token: AuthToken,
}

/// Build the handshake request for the configured credentials.
pub(crate) fn token_request(config: &ClientConfig) -> Result<RequestSnapshot, ClientError> {
    let url = config
        .auth_url
        .join("v2/tokens")
        .map_err(|e| ClientError::Config(format!("cannot derive token URL: {e}")))?;
    let body = TokenRequestBody {
        auth: AuthPayload {
            access_key: &config.credentials.access_key,
            secret_key: &config.credentials.secret_key,
            tenant: &config.credentials.tenant,
        },
    };
    let body = serde_json::to_vec(&body).map_err(|source| ClientError::Encode {
        what: "token",
        source,
    })?;

    let mut request = RequestSnapshot::new(Method::POST, url);
    request
        .headers
        .insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    request
        .headers
        .insert(ACCEPT, HeaderValue::from_static("application/json"));
    request.body = Some(Bytes::from(body));
    Ok(request)
}

/// Decode the handshake response into an [`AuthToken`].
///
/// A 401/403 maps to [`ClientError::Auth`]; any other non-2xx to
/// [`ClientError::UnexpectedStatus`]; a body the decoder cannot parse to
/// [`ClientError::Decode`].
pub(crate) fn decode_token(response: &ResponseSnapshot) -> Result<AuthToken, ClientError> {
    if response.status == http::StatusCode::UNAUTHORIZED
        || response.status == http::StatusCode::FORBIDDEN
    {
        return Err(ClientError::Auth(format!(
            "identity service rejected credentials (status {})",
            response.status
        )));
    }
    if !response.status.is_success() {
        return Err(ClientError::UnexpectedStatus {
            operation: "issue-token",
            status: response.status,
        });
    }
    let envelope: TokenEnvelope =
        serde_json::from_slice(&response.body).map_err(|source| ClientError::Decode {
            what: "token",
            source,
        })?;
    Ok(envelope.token)
}
