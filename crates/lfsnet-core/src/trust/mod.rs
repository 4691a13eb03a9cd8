//! TLS trust policy per host.
//!
//! [`resolve_trust`] reads the CA and verification settings that apply to one
//! host and returns a [`TrustDecision`]. Nothing is cached: different hosts
//! can carry different per-host settings, so callers resolve once per
//! outbound connection.
//!
//! CA pool precedence (first source that yields certificates wins):
//! `http.<url>.sslcainfo`, `http.<url>.sslcapath`, `http.sslcainfo`,
//! `http.sslcapath`, then `GIT_SSL_CAINFO` / `GIT_SSL_CAPATH` unless the
//! schannel backend is active without `http.schannelusesslcainfo`.
//!
//! Verification precedence: `http.<url>.sslverify`, `http.sslverify`,
//! `GIT_SSL_NO_VERIFY`, then verification on.

mod backend;
mod ca;
mod host;
mod pool;
mod transport;
mod verify;

pub use backend::SslBackend;
pub use ca::CaSource;
pub use pool::{CertError, CertPool};
pub use verify::VerifySource;

use url::Url;

use crate::config::ConfigLookup;

/// Trust settings for one TLS connection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrustDecision {
    /// Explicit CA pool replacing the platform store; `None` uses the platform store.
    pub pool: Option<CertPool>,
    /// Disable certificate verification entirely.
    pub skip_verify: bool,
    pub ca_source: Option<CaSource>,
    pub verify_source: VerifySource,
}

/// Trust decision for an `https` request to `host` (`host[:port]`).
pub fn resolve_trust<C: ConfigLookup + ?Sized>(host: &str, config: &C) -> TrustDecision {
    resolve_for_origin(&host::https_origin(host), config)
}

/// Trust decision for a request to `url`, keyed on its `scheme://host[:port]`.
pub fn resolve_trust_for_url<C: ConfigLookup + ?Sized>(url: &Url, config: &C) -> TrustDecision {
    let origin = match (url.host_str(), url.port()) {
        (Some(host), Some(port)) => format!("{}://{}:{}", url.scheme(), host, port),
        (Some(host), None) => format!("{}://{}", url.scheme(), host),
        (None, _) => format!("{}://", url.scheme()),
    };
    resolve_for_origin(&origin, config)
}

fn resolve_for_origin<C: ConfigLookup + ?Sized>(origin: &str, config: &C) -> TrustDecision {
    let (pool, ca_source) = match ca::resolve_ca_pool(origin, config) {
        Some((pool, source)) => (Some(pool), Some(source)),
        None => (None, None),
    };
    let (skip_verify, verify_source) = verify::resolve_skip_verify(origin, config);

    tracing::debug!(
        origin,
        ca_source = ?ca_source,
        certs = pool.as_ref().map_or(0, CertPool::len),
        skip_verify,
        verify_source = ?verify_source,
        "resolved TLS trust"
    );

    TrustDecision {
        pool,
        skip_verify,
        ca_source,
        verify_source,
    }
}
