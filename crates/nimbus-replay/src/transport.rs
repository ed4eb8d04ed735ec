//! Transport implementation backed by the fixture registry.

use nimbus_core::transport::{Transport, TransportError};
use nimbus_core::wire::{RequestSnapshot, ResponseSnapshot};

use crate::registry::FixtureRegistry;

/// A [`Transport`] that answers every request from registered fixtures.
///
/// Resolution is an in-memory lookup — no DNS, no sockets, no disk, no
/// delay — so a run either returns immediately or fails immediately. The
/// client under test cannot tell it apart from a live transport.
pub struct ReplayTransport {
    registry: FixtureRegistry,
}

impl ReplayTransport {
    pub fn new(registry: FixtureRegistry) -> Self {
        Self { registry }
    }

    /// Access the registry, e.g. to assert full consumption after a run.
    pub fn registry(&self) -> &FixtureRegistry {
        &self.registry
    }
}

impl Transport for ReplayTransport {
    async fn send(&self, request: RequestSnapshot) -> Result<ResponseSnapshot, TransportError> {
        tracing::debug!(request = %request, "replaying request");
        self.registry.resolve(&request)
    }
}
