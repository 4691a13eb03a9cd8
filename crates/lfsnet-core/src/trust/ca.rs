//! CA pool precedence.

use std::cell::OnceCell;
use std::fmt;
use std::path::Path;

use serde::Serialize;

use super::backend::env_ca_allowed;
use super::host::host_setting;
use super::pool::CertPool;
use crate::config::{keys, ConfigLookup};

/// Configuration source that supplied a CA pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum CaSource {
    /// `http.<url>.sslcainfo`
    HostFile,
    /// `http.<url>.sslcapath`
    HostDir,
    /// `http.sslcainfo`
    GlobalFile,
    /// `http.sslcapath`
    GlobalDir,
    /// `GIT_SSL_CAINFO`
    EnvFile,
    /// `GIT_SSL_CAPATH`
    EnvDir,
}

impl CaSource {
    fn is_dir(self) -> bool {
        matches!(self, Self::HostDir | Self::GlobalDir | Self::EnvDir)
    }

    fn is_env(self) -> bool {
        matches!(self, Self::EnvFile | Self::EnvDir)
    }

    fn load(self, location: &str) -> Option<CertPool> {
        let path = Path::new(location);
        let loaded = if self.is_dir() {
            CertPool::from_pem_dir(path)
        } else {
            CertPool::from_pem_file(path)
        };
        match loaded {
            Ok(pool) => Some(pool),
            Err(err) => {
                tracing::warn!(source = ?self, %err, "configured CA source unusable, trying next");
                None
            }
        }
    }
}

impl fmt::Display for CaSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::HostFile => "http.<url>.sslcainfo",
            Self::HostDir => "http.<url>.sslcapath",
            Self::GlobalFile => keys::HTTP_SSLCAINFO,
            Self::GlobalDir => keys::HTTP_SSLCAPATH,
            Self::EnvFile => keys::GIT_SSL_CAINFO,
            Self::EnvDir => keys::GIT_SSL_CAPATH,
        };
        f.write_str(name)
    }
}

/// First CA source, in precedence order, that yields a non-empty pool.
/// `None` means the platform default trust store applies.
pub(crate) fn resolve_ca_pool<C: ConfigLookup + ?Sized>(
    origin: &str,
    config: &C,
) -> Option<(CertPool, CaSource)> {
    // Backend gate for the env steps, consulted at most once and only when an
    // env location is actually reached.
    let env_allowed = OnceCell::new();
    let steps: [(CaSource, Option<&str>); 6] = [
        (CaSource::HostFile, host_setting(config, origin, keys::SSLCAINFO)),
        (CaSource::HostDir, host_setting(config, origin, keys::SSLCAPATH)),
        (CaSource::GlobalFile, config.git(keys::HTTP_SSLCAINFO)),
        (CaSource::GlobalDir, config.git(keys::HTTP_SSLCAPATH)),
        (CaSource::EnvFile, config.env(keys::GIT_SSL_CAINFO)),
        (CaSource::EnvDir, config.env(keys::GIT_SSL_CAPATH)),
    ];

    steps
        .into_iter()
        .filter_map(|(source, location)| {
            location
                .filter(|l| !l.is_empty())
                .map(|l| (source, l))
        })
        .filter(|(source, _)| {
            !source.is_env() || *env_allowed.get_or_init(|| env_ca_allowed(config))
        })
        .find_map(|(source, location)| source.load(location).map(|pool| (pool, source)))
}
