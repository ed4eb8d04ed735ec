//! Shared wire-level types and the transport seam.
//!
//! Everything the replay harness and the real client need to agree on lives
//! here: request/response snapshots, the [`transport::Transport`] trait, and
//! tracing setup.

pub mod tracing;
pub mod transport;
pub mod wire;
