//! Record/replay harness for HTTP client tests.
//!
//! A test declares the exact wire-level exchanges it expects — request
//! shapes paired with canned responses — and the harness plays them back
//! through the client's transport seam, so the full client stack (token
//! handshake, request construction, pagination, decoding) runs without a
//! live endpoint.
//!
//! ```no_run
//! use http::Method;
//! use nimbus_replay::{CannedResponse, ExpectedRequest, FixtureRegistry, ReplayTransport};
//!
//! let mut registry = FixtureRegistry::new();
//! registry.register(
//!     ExpectedRequest::new(Method::GET, "https://api.example.com/v2/locations?limit=100")
//!         .header("x-auth-token", "tok-1"),
//!     CannedResponse::json(
//!         200,
//!         serde_json::json!({ "locations": [], "next": null }),
//!     ),
//! );
//! let transport = ReplayTransport::new(registry);
//! // hand `transport` to the client under test
//! ```
//!
//! Intended for `#[cfg(test)]` and dev-dependency use; fixture declaration
//! panics on malformed inputs rather than returning errors.

pub mod file;
pub mod fixture;
pub mod registry;
pub mod transport;

pub use file::{FixtureFile, FixtureFileError, load_all};
pub use fixture::{CannedResponse, ExpectedRequest, Fixture};
pub use registry::FixtureRegistry;
pub use transport::ReplayTransport;
