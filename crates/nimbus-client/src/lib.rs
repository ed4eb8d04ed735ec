//! Cloud API client: credential handshake, location listing, pagination.
//!
//! The client's only I/O boundary is the [`Transport`] seam from
//! `nimbus-core`, so the identical stack runs against the live network
//! (via [`net::NetTransport`]) or against recorded fixtures (via
//! `nimbus-replay`) in tests.
//!
//! [`Transport`]: nimbus_core::transport::Transport

pub mod client;
pub mod config;
pub mod error;
mod identity;
mod locations;
pub mod net;

pub use client::CloudClient;
pub use config::ClientConfig;
pub use error::ClientError;
