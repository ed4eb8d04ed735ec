//! Live network transport backed by reqwest.

use anyhow::Context;
use nimbus_core::transport::{Transport, TransportError};
use nimbus_core::wire::{RequestSnapshot, ResponseSnapshot};

/// [`Transport`] that performs real HTTP I/O.
pub struct NetTransport {
    client: reqwest::Client,
}

impl NetTransport {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }
}

impl Default for NetTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for NetTransport {
    async fn send(&self, request: RequestSnapshot) -> Result<ResponseSnapshot, TransportError> {
        let mut builder = self
            .client
            .request(request.method.clone(), request.url.clone())
            .headers(request.headers.clone());
        if let Some(body) = request.body.clone() {
            builder = builder.body(body);
        }

        let response = builder
            .send()
            .await
            .with_context(|| format!("sending {} {}", request.method, request.url))
            .map_err(TransportError::Network)?;

        let status = response.status();
        let headers = response.headers().clone();
        let body = response
            .bytes()
            .await
            .context("reading response body")
            .map_err(TransportError::Network)?;

        Ok(ResponseSnapshot {
            status,
            headers,
            body,
        })
    }
}
