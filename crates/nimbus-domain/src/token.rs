//! Issued auth token.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Leeway subtracted from the expiry when deciding whether to re-authenticate,
/// so a token never expires mid-request.
const EXPIRY_LEEWAY_SECS: i64 = 30;

/// Token issued by the identity service; sent on subsequent requests as the
/// `x-auth-token` header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthToken {
    pub id: String,
    pub expires: DateTime<Utc>,
}

impl AuthToken {
    /// Whether the token is unusable at `now` (expired or within leeway).
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires <= now + Duration::seconds(EXPIRY_LEEWAY_SECS)
    }

    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now())
    }
}
