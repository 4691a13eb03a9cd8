//! SSH remotes: `ssh://` URLs and scp-like `user@host:path` aliases.

use std::borrow::Cow;

use url::Url;

use super::authority::{is_ipv6_literal, split_host_port, strip_user};
use super::{Endpoint, SshMetadata};

const SSH_SCHEME: &str = "ssh";

fn decode(s: &str) -> Cow<'_, str> {
    urlencoding::decode(s).unwrap_or(Cow::Borrowed(s))
}

/// Endpoint for an `ssh://` (or legacy `git+ssh://` / `ssh+git://`) URL.
///
/// The HTTPS fallback uses the host without the ssh port, since that port
/// belongs to the ssh service and not to the LFS HTTP server.
pub fn endpoint_from_ssh_url(u: &Url) -> Endpoint {
    let authority = match (u.host_str(), u.port()) {
        (Some(host), Some(port)) => format!("{host}:{port}"),
        (Some(host), None) => host.to_string(),
        (None, _) => return Endpoint::unknown(),
    };
    ssh_endpoint(u, &authority)
}

/// Same as [`endpoint_from_ssh_url`], but host and port come from `remote`
/// as written, so a port like `0022` reaches ssh unchanged.
pub(crate) fn endpoint_from_ssh_remote(u: &Url, remote: &str) -> Endpoint {
    match raw_authority(remote) {
        Some(authority) => ssh_endpoint(u, authority),
        None => endpoint_from_ssh_url(u),
    }
}

pub(crate) fn is_ssh_scheme(scheme: &str) -> bool {
    matches!(scheme, "ssh" | "git+ssh" | "ssh+git")
}

/// `host[:port]` text between `://` and the path, without userinfo.
fn raw_authority(remote: &str) -> Option<&str> {
    let rest = &remote[remote.find("://")? + 3..];
    let end = rest
        .find(|c: char| matches!(c, '/' | '?' | '#'))
        .unwrap_or(rest.len());
    let authority = &rest[..end];
    Some(authority.rsplit_once('@').map_or(authority, |(_, host_port)| host_port))
}

fn ssh_endpoint(u: &Url, authority: &str) -> Endpoint {
    let Some((host, port)) = split_host_port(authority) else {
        tracing::debug!(url = %u, "ssh url authority is not host[:port]");
        return Endpoint::unknown();
    };

    let user_and_host = match u.username() {
        "" => host.to_string(),
        user => format!("{}@{}", decode(user), host),
    };
    let path = decode(u.path()).into_owned();
    let url = format!("https://{host}{path}");

    Endpoint::with_ssh(
        url,
        SshMetadata {
            user_and_host,
            port: port.unwrap_or_default().to_string(),
            path,
            scheme: SSH_SCHEME.to_string(),
        },
    )
}

/// Endpoint for a bare scp-like alias such as `user@host.com:path/to/repo.git`
/// or `[user@host.com:port]:path/to/repo.git`.
///
/// Splitting follows git's `parse_connect_url()` / `host_end()`: an `@[`
/// starts a bracketed host, a leading `[` ... `]` groups host and port, and
/// otherwise the first `:` separates `host[:port]` from the path. A string
/// with no such `:` is not an alias and is returned unchanged as the URL.
pub fn endpoint_from_bare_ssh(s: &str) -> Endpoint {
    if s.is_empty() {
        return Endpoint::unknown();
    }

    let mut user_host_and_port = String::new();
    let mut rest = s;
    if let Some(i) = s.find("@[") {
        user_host_and_port.push_str(&s[..=i]);
        rest = &s[i + 1..];
    }

    let mut bracketed = false;
    if rest.starts_with('[') {
        if let Some(end) = rest.find(']') {
            user_host_and_port.push_str(&rest[1..end]);
            rest = &rest[end + 1..];
            bracketed = true;
        }
    }

    let Some(colon) = rest.find(':') else {
        return Endpoint::from_url(s);
    };
    let path = &rest[colon + 1..];
    if !bracketed {
        user_host_and_port.push_str(&rest[..colon]);
    }

    let (user_and_host, port) = match split_host_port(&user_host_and_port) {
        Some((user_and_host, port)) => (user_and_host, port.unwrap_or_default()),
        None if bracketed && is_ipv6_literal(strip_user(&user_host_and_port)) => {
            (user_host_and_port.as_str(), "")
        }
        None => {
            tracing::debug!(remote = s, "ssh alias host is not host[:port]");
            return Endpoint::unknown();
        }
    };

    let host = strip_user(user_and_host);
    let url = if host.contains(':') {
        format!("https://[{}]/{}", host, path.trim_start_matches('/'))
    } else {
        format!("https://{}/{}", host, path.trim_start_matches('/'))
    };

    Endpoint::with_ssh(
        url,
        SshMetadata {
            user_and_host: user_and_host.to_string(),
            port: port.to_string(),
            path: path.to_string(),
            scheme: SSH_SCHEME.to_string(),
        },
    )
}
