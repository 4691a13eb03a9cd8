//! Per-host `http.<url>.<name>` key lookup.

use crate::config::ConfigLookup;

/// `https://host[:port]` for a bare request host; one trailing `/` is dropped.
pub(crate) fn https_origin(host: &str) -> String {
    let host = host.strip_suffix('/').unwrap_or(host);
    format!("https://{host}")
}

/// Keys naming `name` for `origin`, with and without a trailing slash.
///
/// Only these exact keys match: a setting for `host` does not apply to
/// `host:8443`, and there is no prefix matching.
pub(crate) fn host_keys(origin: &str, name: &str) -> [String; 2] {
    let origin = origin.strip_suffix('/').unwrap_or(origin);
    [
        format!("http.{origin}/.{name}"),
        format!("http.{origin}.{name}"),
    ]
}

pub(crate) fn host_setting<'a, C: ConfigLookup + ?Sized>(
    config: &'a C,
    origin: &str,
    name: &str,
) -> Option<&'a str> {
    host_keys(origin, name)
        .iter()
        .find_map(|key| config.git(key))
}
