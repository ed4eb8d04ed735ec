//! The client stack: session state, token handshake, and list operations.

use std::sync::Mutex;

use http::StatusCode;
use nimbus_core::transport::Transport;
use nimbus_domain::location::Location;
use nimbus_domain::token::AuthToken;

use crate::config::ClientConfig;
use crate::error::ClientError;
use crate::{identity, locations};

/// A cloud API client generic over its transport.
///
/// All session state (the cached token) lives in the instance — construct
/// one per logical session and pass it where needed; there is no process-wide
/// client. Tests hand in a replay transport, production a
/// [`NetTransport`](crate::net::NetTransport); the code path is the same.
pub struct CloudClient<T: Transport> {
    config: ClientConfig,
    transport: T,
    token: Mutex<Option<AuthToken>>,
}

impl<T: Transport> CloudClient<T> {
    /// Validate the configuration (single pass) and build a client with no
    /// cached token.
    pub fn new(config: ClientConfig, transport: T) -> Result<Self, ClientError> {
        config.validate()?;
        Ok(Self {
            config,
            transport,
            token: Mutex::new(None),
        })
    }

    /// The transport the client was built with. Replay tests use this to
    /// reach the registry for end-of-run assertions.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Run the token handshake and cache the issued token for the session.
    pub async fn authenticate(&self) -> Result<AuthToken, ClientError> {
        let request = identity::token_request(&self.config)?;
        tracing::debug!(url = %request.url, "issuing token");
        let response = self.transport.send(request).await?;
        let token = identity::decode_token(&response)?;
        *self.token.lock().expect("token cache poisoned") = Some(token.clone());
        Ok(token)
    }

    /// Drop the cached token; the next operation re-authenticates.
    pub fn invalidate_token(&self) {
        self.token.lock().expect("token cache poisoned").take();
    }

    /// Cached token if still usable, otherwise a fresh handshake.
    async fn current_token(&self) -> Result<AuthToken, ClientError> {
        let cached = self.token.lock().expect("token cache poisoned").clone();
        match cached {
            Some(token) if !token.is_expired() => Ok(token),
            _ => self.authenticate().await,
        }
    }

    /// List every location resources can be assigned to.
    ///
    /// Authenticates first when no usable token is cached, then follows
    /// `next` markers until the listing is exhausted. A single 401 drops the
    /// cached token and retries once with a fresh one; a second 401 surfaces
    /// as [`ClientError::UnexpectedStatus`].
    pub async fn list_assignable_locations(&self) -> Result<Vec<Location>, ClientError> {
        let mut token = self.current_token().await?;
        let mut collected = Vec::new();
        let mut marker: Option<String> = None;
        let mut reauthenticated = false;

        loop {
            let request = locations::page_request(&self.config, &token.id, marker.as_deref())?;
            let response = self.transport.send(request).await?;

            if response.status == StatusCode::UNAUTHORIZED && !reauthenticated {
                // Token may have been revoked server-side; one fresh handshake.
                reauthenticated = true;
                self.invalidate_token();
                token = self.current_token().await?;
                continue;
            }

            let page = locations::decode_page(&response)?;
            collected.extend(page.locations);
            match page.next {
                Some(next) => marker = Some(next),
                None => break,
            }
        }

        tracing::debug!(count = collected.len(), "listed assignable locations");
        Ok(collected)
    }
}
