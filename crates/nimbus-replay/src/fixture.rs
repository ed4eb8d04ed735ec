//! Fixture declaration types.
//!
//! A [`Fixture`] pairs the request a test expects the client to send with the
//! response the harness returns for it. Constructors here are a
//! test-authoring surface: they panic on malformed URLs, header names, or
//! status codes, with messages naming the bad input.

use bytes::Bytes;
use http::header::{CONTENT_TYPE, HeaderName, HeaderValue};
use http::{HeaderMap, Method, StatusCode};
use nimbus_core::wire::{RequestSnapshot, ResponseSnapshot};
use url::Url;

/// The request shape a fixture expects the client to send.
///
/// Matching is structural: method exact, URL equal after parser
/// normalization, declared headers present with equal values (extra actual
/// headers tolerated unless [`exact_headers`](Self::exact_headers)), and body
/// equal byte-for-byte when one is declared.
#[derive(Debug, Clone)]
pub struct ExpectedRequest {
    pub(crate) method: Method,
    pub(crate) url: Url,
    pub(crate) headers: HeaderMap,
    pub(crate) body: Option<Bytes>,
    pub(crate) exact_headers: bool,
}

impl ExpectedRequest {
    /// # Panics
    ///
    /// Panics if `url` is not an absolute URL.
    pub fn new(method: Method, url: &str) -> Self {
        let url = Url::parse(url).unwrap_or_else(|e| panic!("invalid fixture URL {url:?}: {e}"));
        Self {
            method,
            url,
            headers: HeaderMap::new(),
            body: None,
            exact_headers: false,
        }
    }

    /// Require a header to be present with this exact value.
    ///
    /// # Panics
    ///
    /// Panics if `name` or `value` is not a valid header name/value.
    pub fn header(mut self, name: &str, value: &str) -> Self {
        let name = HeaderName::try_from(name)
            .unwrap_or_else(|e| panic!("invalid fixture header name {name:?}: {e}"));
        let value = HeaderValue::try_from(value)
            .unwrap_or_else(|e| panic!("invalid fixture header value for {name}: {e}"));
        self.headers.insert(name, value);
        self
    }

    /// Constrain the actual request to carry exactly the declared headers —
    /// extra headers become a mismatch. Off by default (subset match).
    pub fn exact_headers(mut self) -> Self {
        self.exact_headers = true;
        self
    }

    /// Require the request body to equal these bytes, tagged with a content
    /// type.
    pub fn body(mut self, body: impl Into<Bytes>, content_type: &str) -> Self {
        self = self.header(CONTENT_TYPE.as_str(), content_type);
        self.body = Some(body.into());
        self
    }

    /// Require the request body to equal this JSON value, serialized
    /// compactly (the form serde_json emits).
    pub fn json_body(self, value: serde_json::Value) -> Self {
        self.body(value.to_string(), "application/json")
    }

    /// Render as a request snapshot for mismatch diagnostics.
    pub(crate) fn to_snapshot(&self) -> RequestSnapshot {
        RequestSnapshot {
            method: self.method.clone(),
            url: self.url.clone(),
            headers: self.headers.clone(),
            body: self.body.clone(),
        }
    }
}

/// The response a fixture plays back, never touched by real I/O.
#[derive(Debug, Clone)]
pub struct CannedResponse {
    pub(crate) status: StatusCode,
    pub(crate) headers: HeaderMap,
    pub(crate) body: Bytes,
}

impl CannedResponse {
    /// # Panics
    ///
    /// Panics if `status` is not a valid HTTP status code.
    pub fn new(status: u16) -> Self {
        let status = StatusCode::from_u16(status)
            .unwrap_or_else(|e| panic!("invalid fixture status {status}: {e}"));
        Self {
            status,
            headers: HeaderMap::new(),
            body: Bytes::new(),
        }
    }

    /// A response with a JSON body and `content-type: application/json`.
    pub fn json(status: u16, body: serde_json::Value) -> Self {
        Self::new(status)
            .header(CONTENT_TYPE.as_str(), "application/json")
            .with_body(body.to_string())
    }

    /// # Panics
    ///
    /// Panics if `name` or `value` is not a valid header name/value.
    pub fn header(mut self, name: &str, value: &str) -> Self {
        let name = HeaderName::try_from(name)
            .unwrap_or_else(|e| panic!("invalid fixture header name {name:?}: {e}"));
        let value = HeaderValue::try_from(value)
            .unwrap_or_else(|e| panic!("invalid fixture header value for {name}: {e}"));
        self.headers.insert(name, value);
        self
    }

    pub fn with_body(mut self, body: impl Into<Bytes>) -> Self {
        self.body = body.into();
        self
    }

    pub(crate) fn to_snapshot(&self) -> ResponseSnapshot {
        ResponseSnapshot {
            status: self.status,
            headers: self.headers.clone(),
            body: self.body.clone(),
        }
    }
}

/// One declared exchange: expected request in, canned response out.
#[derive(Debug, Clone)]
pub struct Fixture {
    pub expected: ExpectedRequest,
    pub response: CannedResponse,
}
