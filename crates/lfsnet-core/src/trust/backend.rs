//! Secure-transport backend selection (`http.sslbackend`).

use std::fmt;

use crate::config::{keys, ConfigLookup};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SslBackend {
    #[default]
    OpenSsl,
    GnuTls,
    /// Windows native backend; trusts the OS certificate store.
    Schannel,
    SecureTransport,
    Other(String),
}

impl SslBackend {
    pub fn from_config_value(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "openssl" => Self::OpenSsl,
            "gnutls" => Self::GnuTls,
            "schannel" => Self::Schannel,
            "secure-transport" | "securetransport" => Self::SecureTransport,
            other => Self::Other(other.to_string()),
        }
    }

    /// Backend named by `http.sslbackend`, or the default when unset.
    pub fn from_config<C: ConfigLookup + ?Sized>(config: &C) -> Self {
        config
            .git(keys::HTTP_SSLBACKEND)
            .map(Self::from_config_value)
            .unwrap_or_default()
    }

    /// Platform-native backends source CAs from the OS store.
    pub fn is_native(&self) -> bool {
        matches!(self, Self::Schannel)
    }
}

impl fmt::Display for SslBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OpenSsl => write!(f, "openssl"),
            Self::GnuTls => write!(f, "gnutls"),
            Self::Schannel => write!(f, "schannel"),
            Self::SecureTransport => write!(f, "secure-transport"),
            Self::Other(name) => write!(f, "{name}"),
        }
    }
}

/// Whether `GIT_SSL_CAINFO` / `GIT_SSL_CAPATH` apply under this config.
///
/// The native backend ignores them unless `http.schannelusesslcainfo` is
/// explicitly true.
pub(crate) fn env_ca_allowed<C: ConfigLookup + ?Sized>(config: &C) -> bool {
    let backend = SslBackend::from_config(config);
    if !backend.is_native() {
        return true;
    }
    let opted_in = config.git_bool(keys::HTTP_SCHANNELUSESSLCAINFO) == Some(true);
    if !opted_in {
        tracing::debug!(%backend, "ignoring GIT_SSL_CAINFO/GIT_SSL_CAPATH for native backend");
    }
    opted_in
}
