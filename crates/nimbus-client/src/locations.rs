//! List-locations operation: request shape and page decoding.

use http::header::{ACCEPT, HeaderName, HeaderValue};
use http::Method;
use nimbus_core::wire::{RequestSnapshot, ResponseSnapshot};
use nimbus_domain::location::Location;
use serde::Deserialize;

use crate::config::ClientConfig;
use crate::error::ClientError;

pub(crate) const AUTH_TOKEN_HEADER: HeaderName = HeaderName::from_static("x-auth-token");

/// One page of the location listing. `next` carries the marker for the
/// following page, absent on the last one.
#[derive(Debug, Deserialize)]
pub(crate) struct LocationPage {
    pub locations: Vec<Location>,
    #[serde(default)]
    pub next: Option<String>,
}

/// Build the request for one page of `GET {api_url}/v2/locations`.
pub(crate) fn page_request(
    config: &ClientConfig,
    token_id: &str,
    marker: Option<&str>,
) -> Result<RequestSnapshot, ClientError> {
    let mut url = config
        .api_url
        .join("v2/locations")
        .map_err(|e| ClientError::Config(format!("cannot derive locations URL: {e}")))?;
    {
        let mut pairs = url.query_pairs_mut();
        pairs.append_pair("limit", &config.page_size.to_string());
        if let Some(marker) = marker {
            pairs.append_pair("marker", marker);
        }
    }

    let token = HeaderValue::try_from(token_id)
        .map_err(|_| ClientError::Auth("issued token is not a valid header value".into()))?;
    let mut request = RequestSnapshot::new(Method::GET, url);
    request.headers.insert(AUTH_TOKEN_HEADER, token);
    request
        .headers
        .insert(ACCEPT, HeaderValue::from_static("application/json"));
    Ok(request)
}

/// Decode one successful page. Call sites handle 401 (re-auth) before this.
pub(crate) fn decode_page(response: &ResponseSnapshot) -> Result<LocationPage, ClientError> {
    if !response.status.is_success() {
        return Err(ClientError::UnexpectedStatus {
            operation: "list-locations",
            status: response.status,
        });
    }
    serde_json::from_slice(&response.body).map_err(|source| ClientError::Decode {
        what: "locations",
        source,
    })
}
