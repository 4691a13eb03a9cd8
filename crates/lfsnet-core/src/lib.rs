//! Endpoint and TLS trust resolution for a Git LFS client.
//!
//! Both resolvers are pure functions of their inputs: [`endpoint`] maps a
//! remote string to an [`Endpoint`], and [`trust`] maps a host plus a
//! [`config::ConfigLookup`] to a [`TrustDecision`]. Neither performs network
//! I/O; the only blocking work is reading configured CA files.

pub mod config;
pub mod endpoint;
pub mod logging;
pub mod trust;

pub use endpoint::{endpoint_from_remote, endpoint_operation, Endpoint, SshMetadata};
pub use trust::{resolve_trust, resolve_trust_for_url, TrustDecision};
