#![allow(async_fn_in_trait)]

//! The transport seam between the client stack and the network.
//!
//! The client never touches sockets directly; it hands a
//! [`RequestSnapshot`] to a [`Transport`] and gets a [`ResponseSnapshot`]
//! back. Production wires in a reqwest-backed transport, tests wire in the
//! replay transport — the client code path is identical either way.

use std::fmt;

use crate::wire::{RequestSnapshot, ResponseSnapshot};

/// Port for sending one HTTP request and receiving its response.
pub trait Transport: Send + Sync {
    async fn send(&self, request: RequestSnapshot) -> Result<ResponseSnapshot, TransportError>;
}

/// Errors a transport can surface.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// A replay transport had unconsumed fixtures but none matched the
    /// outgoing request. Carries full expected-vs-actual diagnostics.
    #[error("no fixture matched the outgoing request\n{0}")]
    Unmatched(MismatchReport),
    /// A replay transport had no unconsumed fixtures left at all.
    #[error("fixture registry has no unconsumed fixtures remaining")]
    Exhausted,
    /// The real network transport failed (connect, TLS, read, ...).
    #[error("network transport failed")]
    Network(#[source] anyhow::Error),
}

impl TransportError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Unmatched(_) => "UNMATCHED",
            Self::Exhausted => "EXHAUSTED",
            Self::Network(_) => "NETWORK",
        }
    }
}

/// Diagnostic payload for an unmatched request: the request the client
/// actually sent and the nearest unconsumed candidate, so subtle differences
/// (a trailing slash, a dropped auth header) are visible in the failure.
#[derive(Debug)]
pub struct MismatchReport {
    pub actual: RequestSnapshot,
    pub nearest: Option<RequestSnapshot>,
}

impl fmt::Display for MismatchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  actual:   {}", self.actual)?;
        match &self.nearest {
            Some(expected) => write!(f, "  nearest:  {expected}"),
            None => write!(f, "  nearest:  (no candidates remain)"),
        }
    }
}
