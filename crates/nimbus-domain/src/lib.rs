//! Domain types decoded from cloud API responses.
//!
//! These are the values assertions run against: locations, credentials, and
//! issued auth tokens. Pure data — no I/O, no transport knowledge.

pub mod credentials;
pub mod location;
pub mod token;
