//! Client configuration.
//!
//! All knobs are enumerated fields with explicit defaults; [`validate`]
//! runs once when the client is constructed. No string-keyed lookups.
//!
//! [`validate`]: ClientConfig::validate

use nimbus_domain::credentials::Credentials;
use url::Url;

use crate::error::ClientError;

const DEFAULT_PAGE_SIZE: u32 = 100;
const MAX_PAGE_SIZE: u32 = 1000;

/// Configuration for one client session.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Identity service base URL; the token handshake POSTs to
    /// `{auth_url}/v2/tokens`.
    pub auth_url: Url,
    /// API base URL; list operations GET `{api_url}/v2/...`.
    pub api_url: Url,
    pub credentials: Credentials,
    /// Page size for list operations (1–1000, default 100).
    pub page_size: u32,
}

impl ClientConfig {
    pub fn new(auth_url: Url, api_url: Url, credentials: Credentials) -> Self {
        Self {
            auth_url,
            api_url,
            credentials,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    /// Load from environment variables: `NIMBUS_AUTH_URL`, `NIMBUS_API_URL`,
    /// `NIMBUS_ACCESS_KEY`, `NIMBUS_SECRET_KEY`, `NIMBUS_TENANT`, and
    /// optional `NIMBUS_PAGE_SIZE` (default 100).
    ///
    /// # Panics
    ///
    /// Panics if a required variable is missing or a URL does not parse.
    pub fn from_env() -> Self {
        let parse_url = |var: &str| {
            let raw = std::env::var(var).unwrap_or_else(|_| panic!("{var} is not set"));
            Url::parse(&raw).unwrap_or_else(|e| panic!("{var} is not a valid URL: {e}"))
        };
        Self {
            auth_url: parse_url("NIMBUS_AUTH_URL"),
            api_url: parse_url("NIMBUS_API_URL"),
            credentials: Credentials::new(
                std::env::var("NIMBUS_ACCESS_KEY").expect("NIMBUS_ACCESS_KEY"),
                std::env::var("NIMBUS_SECRET_KEY").expect("NIMBUS_SECRET_KEY"),
                std::env::var("NIMBUS_TENANT").expect("NIMBUS_TENANT"),
            ),
            page_size: std::env::var("NIMBUS_PAGE_SIZE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_PAGE_SIZE),
        }
    }

    /// Single validation pass, run at client construction.
    pub fn validate(&self) -> Result<(), ClientError> {
        for (name, url) in [("auth_url", &self.auth_url), ("api_url", &self.api_url)] {
            if !matches!(url.scheme(), "http" | "https") {
                return Err(ClientError::Config(format!(
                    "{name} must use http or https, got {:?}",
                    url.scheme()
                )));
            }
            if url.host_str().is_none() {
                return Err(ClientError::Config(format!("{name} has no host")));
            }
        }
        if self.credentials.access_key.is_empty() {
            return Err(ClientError::Config("access_key is empty".into()));
        }
        if self.credentials.secret_key.is_empty() {
            return Err(ClientError::Config("secret_key is empty".into()));
        }
        if self.credentials.tenant.is_empty() {
            return Err(ClientError::Config("tenant is empty".into()));
        }
        if self.page_size == 0 || self.page_size > MAX_PAGE_SIZE {
            return Err(ClientError::Config(format!(
                "page_size must be 1-{MAX_PAGE_SIZE}, got {}",
                self.page_size
            )));
        }
        Ok(())
    }
}
