//! Key names shared with git's config store and environment.

/// CA bundle file for any host.
pub const HTTP_SSLCAINFO: &str = "http.sslcainfo";
/// CA certificate directory for any host.
pub const HTTP_SSLCAPATH: &str = "http.sslcapath";
/// `false` disables certificate verification for any host.
pub const HTTP_SSLVERIFY: &str = "http.sslverify";
/// Active secure-transport backend (`openssl`, `schannel`, ...).
pub const HTTP_SSLBACKEND: &str = "http.sslbackend";
/// Lets the schannel backend honor `GIT_SSL_CAINFO` / `GIT_SSL_CAPATH`.
pub const HTTP_SCHANNELUSESSLCAINFO: &str = "http.schannelusesslcainfo";

/// Variable names used inside `http.<url>.<name>` per-host keys.
pub const SSLCAINFO: &str = "sslcainfo";
pub const SSLCAPATH: &str = "sslcapath";
pub const SSLVERIFY: &str = "sslverify";

pub const GIT_SSL_CAINFO: &str = "GIT_SSL_CAINFO";
pub const GIT_SSL_CAPATH: &str = "GIT_SSL_CAPATH";
pub const GIT_SSL_NO_VERIFY: &str = "GIT_SSL_NO_VERIFY";

/// Environment variables captured by [`super::MapConfig::from_process_env`].
pub const ENV_KEYS: &[&str] = &[GIT_SSL_CAINFO, GIT_SSL_CAPATH, GIT_SSL_NO_VERIFY];
