//! Verification-skip precedence.

use std::fmt;

use serde::Serialize;

use super::host::host_setting;
use crate::config::{keys, parse_git_bool, ConfigLookup};

/// Configuration source that decided the verification flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum VerifySource {
    /// `http.<url>.sslverify`
    HostConfig,
    /// `http.sslverify`
    GlobalConfig,
    /// `GIT_SSL_NO_VERIFY`
    Environment,
    /// Nothing configured; verification stays on.
    #[default]
    Default,
}

impl fmt::Display for VerifySource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::HostConfig => "http.<url>.sslverify",
            Self::GlobalConfig => keys::HTTP_SSLVERIFY,
            Self::Environment => keys::GIT_SSL_NO_VERIFY,
            Self::Default => "default",
        };
        f.write_str(name)
    }
}

/// Most specific configured source wins; unparseable values fall through.
pub(crate) fn resolve_skip_verify<C: ConfigLookup + ?Sized>(
    origin: &str,
    config: &C,
) -> (bool, VerifySource) {
    let steps = [
        (
            VerifySource::HostConfig,
            host_setting(config, origin, keys::SSLVERIFY)
                .and_then(parse_git_bool)
                .map(|verify| !verify),
        ),
        (
            VerifySource::GlobalConfig,
            config.git_bool(keys::HTTP_SSLVERIFY).map(|verify| !verify),
        ),
        (
            VerifySource::Environment,
            config.env_bool(keys::GIT_SSL_NO_VERIFY),
        ),
    ];

    steps
        .into_iter()
        .find_map(|(source, skip)| skip.map(|skip| (skip, source)))
        .unwrap_or((false, VerifySource::Default))
}
