//! `host[:port]` splitting shared by the ssh forms.

use std::net::Ipv6Addr;

/// Splits `host[:port]`: a non-empty host with no colons, optionally
/// followed by `:` and one or more ASCII digits. Anything else is `None`.
pub(crate) fn split_host_port(authority: &str) -> Option<(&str, Option<&str>)> {
    let (host, port) = match authority.split_once(':') {
        Some((host, port)) => (host, Some(port)),
        None => (authority, None),
    };
    if host.is_empty() {
        return None;
    }
    if let Some(port) = port {
        if port.is_empty() || !port.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
    }
    Some((host, port))
}

/// Drops a leading `user@`, splitting at the first `@`.
pub(crate) fn strip_user(user_and_host: &str) -> &str {
    match user_and_host.split_once('@') {
        Some((_, host)) => host,
        None => user_and_host,
    }
}

/// True for an IPv6 literal, optionally carrying a `%zone` suffix.
pub(crate) fn is_ipv6_literal(host: &str) -> bool {
    let addr = host.split_once('%').map_or(host, |(addr, _)| addr);
    addr.parse::<Ipv6Addr>().is_ok()
}
