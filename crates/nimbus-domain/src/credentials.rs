//! API credential pair used in the token handshake.

use std::fmt;

/// Access-key credentials for the identity service.
///
/// `Debug` redacts the secret so snapshots of requests and configs can be
/// logged without leaking it.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub access_key: String,
    pub secret_key: String,
    /// Tenant (project) the keys belong to.
    pub tenant: String,
}

impl Credentials {
    pub fn new(
        access_key: impl Into<String>,
        secret_key: impl Into<String>,
        tenant: impl Into<String>,
    ) -> Self {
        Self {
            access_key: access_key.into(),
            secret_key: secret_key.into(),
            tenant: tenant.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("access_key", &self.access_key)
            .field("secret_key", &"<redacted>")
            .field("tenant", &self.tenant)
            .finish()
    }
}
