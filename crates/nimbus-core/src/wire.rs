//! Wire-level request and response snapshots.
//!
//! A snapshot is the transport's view of one HTTP exchange: everything that
//! would go on the wire, nothing that wouldn't. The client builds
//! [`RequestSnapshot`]s, a [`crate::transport::Transport`] turns each one into
//! a [`ResponseSnapshot`].

use std::fmt;
use std::hash::{DefaultHasher, Hash, Hasher};

use bytes::Bytes;
use http::header::{AUTHORIZATION, COOKIE, HeaderName, HeaderValue, PROXY_AUTHORIZATION};
use http::{HeaderMap, Method, StatusCode};
use url::Url;

/// One outbound HTTP request, fully resolved.
///
/// Header names are case-insensitive ([`HeaderMap`] semantics). The URL is
/// absolute; relative URLs cannot reach a transport.
#[derive(Debug, Clone)]
pub struct RequestSnapshot {
    pub method: Method,
    pub url: Url,
    pub headers: HeaderMap,
    pub body: Option<Bytes>,
}

impl RequestSnapshot {
    pub fn new(method: Method, url: Url) -> Self {
        Self {
            method,
            url,
            headers: HeaderMap::new(),
            body: None,
        }
    }

    /// Look up a header value as a string. Returns `None` for absent or
    /// non-UTF-8 values.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    /// One-line summary used in mismatch diagnostics: method, URL, headers
    /// with their values (credential-bearing values reduced to a
    /// fingerprint), and body length.
    pub fn describe(&self) -> String {
        let mut headers: Vec<String> = self
            .headers
            .iter()
            .map(|(name, value)| format!("{name}: {}", render_header_value(name, value)))
            .collect();
        headers.sort_unstable();
        let body = match &self.body {
            Some(b) => format!("{} bytes", b.len()),
            None => "none".to_owned(),
        };
        format!(
            "{} {} headers=[{}] body={}",
            self.method,
            self.url,
            headers.join(", "),
            body
        )
    }
}

fn is_credential_header(name: &HeaderName) -> bool {
    *name == AUTHORIZATION
        || *name == PROXY_AUTHORIZATION
        || *name == COOKIE
        || name.as_str() == "x-auth-token"
}

fn render_header_value(name: &HeaderName, value: &HeaderValue) -> String {
    match value.to_str() {
        Ok(v) if is_credential_header(name) => fingerprint(v),
        Ok(v) => v.to_owned(),
        Err(_) => "<non-utf8>".to_owned(),
    }
}

/// Length + digest stand-in for a credential value: two differing tokens
/// render differently in a mismatch report, but the secret itself is never
/// written out.
fn fingerprint(value: &str) -> String {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    format!(
        "<{} chars, digest {:08x}>",
        value.chars().count(),
        hasher.finish() as u32
    )
}

impl fmt::Display for RequestSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.describe())
    }
}

/// One inbound HTTP response as the transport delivered it.
#[derive(Debug, Clone)]
pub struct ResponseSnapshot {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl ResponseSnapshot {
    pub fn new(status: StatusCode) -> Self {
        Self {
            status,
            headers: HeaderMap::new(),
            body: Bytes::new(),
        }
    }

    pub fn with_body(mut self, body: impl Into<Bytes>) -> Self {
        self.body = body.into();
        self
    }
}
