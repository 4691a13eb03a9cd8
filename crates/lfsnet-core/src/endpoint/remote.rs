//! Remote string dispatch and the pass-through URL forms.

use std::path::Path;

use url::Url;

use super::ssh::{
    endpoint_from_bare_ssh, endpoint_from_ssh_remote, endpoint_from_ssh_url, is_ssh_scheme,
};
use super::Endpoint;

/// Resolves any remote string git would accept.
///
/// Strings containing `://` are URLs and are dispatched on their scheme.
/// Otherwise git's rule applies: local paths become `file://` URLs and
/// everything else is an scp-like ssh alias.
pub fn endpoint_from_remote(remote: &str) -> Endpoint {
    if remote.is_empty() {
        return Endpoint::unknown();
    }
    if remote.contains("://") {
        return match Url::parse(remote) {
            Ok(u) if is_ssh_scheme(u.scheme()) => endpoint_from_ssh_remote(&u, remote),
            Ok(u) => endpoint_from_url(&u),
            Err(err) => {
                tracing::debug!(remote, %err, "remote is not a valid URL");
                Endpoint::unknown()
            }
        };
    }
    if is_local_path(remote) {
        endpoint_from_local_path(remote)
    } else {
        endpoint_from_bare_ssh(remote)
    }
}

/// Dispatches an already-parsed URL on its scheme.
pub fn endpoint_from_url(u: &Url) -> Endpoint {
    match u.scheme() {
        scheme if is_ssh_scheme(scheme) => endpoint_from_ssh_url(u),
        "http" | "https" => endpoint_from_http_url(u),
        "git" => endpoint_from_git_url(u),
        "file" => endpoint_from_file_url(u),
        scheme => {
            tracing::debug!(scheme, "unsupported remote scheme");
            Endpoint::unknown()
        }
    }
}

pub fn endpoint_from_http_url(u: &Url) -> Endpoint {
    Endpoint::from_url(u.as_str())
}

pub fn endpoint_from_file_url(u: &Url) -> Endpoint {
    Endpoint::from_url(u.as_str())
}

/// `git://host[:port]/path` is served over HTTPS at the same location.
pub fn endpoint_from_git_url(u: &Url) -> Endpoint {
    let Some(host) = u.host_str() else {
        return Endpoint::unknown();
    };
    let url = match u.port() {
        Some(port) => format!("https://{host}:{port}{}", u.path()),
        None => format!("https://{host}{}", u.path()),
    };
    Endpoint::from_url(url)
}

pub fn endpoint_from_local_path(path: &str) -> Endpoint {
    Endpoint::from_url(rewrite_local_path_as_url(path))
}

/// Rewrites a filesystem path as an absolute `file://` URL.
///
/// Relative paths are resolved against the current directory. If the path
/// cannot be expressed as a file URL it is appended to `file://` verbatim.
pub fn rewrite_local_path_as_url(path: &str) -> String {
    let p = Path::new(path);
    let absolute = if p.is_absolute() {
        p.to_path_buf()
    } else {
        match std::env::current_dir() {
            Ok(cwd) => cwd.join(p),
            Err(_) => p.to_path_buf(),
        }
    };
    match Url::from_file_path(&absolute) {
        Ok(u) => u.to_string(),
        Err(()) => format!("file://{path}"),
    }
}

/// Git's `url_is_local_not_ssh()`: no colon at all, a slash before the
/// first colon, or (on Windows) a drive prefix such as `C:`.
pub fn is_local_path(remote: &str) -> bool {
    let colon = remote.find(':');
    let slash = remote.find('/');
    match (colon, slash) {
        (None, _) => true,
        (Some(c), Some(s)) if s < c => true,
        _ => cfg!(windows) && has_dos_drive_prefix(remote),
    }
}

fn has_dos_drive_prefix(s: &str) -> bool {
    let b = s.as_bytes();
    b.len() >= 2 && b[0].is_ascii_alphabetic() && b[1] == b':'
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_passthrough() {
        let e = endpoint_from_remote("https://git-server.com/foo/bar.git/info/lfs");
        assert_eq!(e.url(), "https://git-server.com/foo/bar.git/info/lfs");
        assert!(e.ssh_metadata().is_none());

        let e = endpoint_from_remote("http://localhost:8080/repo");
        assert_eq!(e.url(), "http://localhost:8080/repo");
    }

    #[test]
    fn file_passthrough() {
        let e = endpoint_from_remote("file:///srv/repos/bar.git");
        assert_eq!(e.url(), "file:///srv/repos/bar.git");
        assert!(e.ssh_metadata().is_none());
    }

    #[test]
    fn ssh_schemes_dispatch_to_ssh() {
        for raw in [
            "ssh://git@git-server.com:22/foo.git",
            "git+ssh://git@git-server.com:22/foo.git",
            "ssh+git://git@git-server.com:22/foo.git",
        ] {
            let e = endpoint_from_remote(raw);
            let m = e.ssh_metadata().expect(raw);
            assert_eq!(m.scheme, "ssh");
            assert_eq!(m.port, "22");
            assert_eq!(e.url(), "https://git-server.com/foo.git");
        }
    }

    #[test]
    fn ssh_remote_keeps_port_as_written() {
        let e = endpoint_from_remote("ssh://git@git-server.com:0022/foo.git");
        assert_eq!(e.ssh_metadata().unwrap().port, "0022");
        assert_eq!(e.url(), "https://git-server.com/foo.git");

        let parsed = Url::parse("ssh://git@git-server.com:0022/foo.git").unwrap();
        assert_eq!(endpoint_from_url(&parsed).ssh_metadata().unwrap().port, "22");
    }

    #[test]
    fn git_protocol_becomes_https() {
        let e = endpoint_from_remote("git://git-server.com/foo/bar.git");
        assert_eq!(e.url(), "https://git-server.com/foo/bar.git");
        let e = endpoint_from_remote("git://git-server.com:9418/foo/bar.git");
        assert_eq!(e.url(), "https://git-server.com:9418/foo/bar.git");
        assert!(e.ssh_metadata().is_none());
    }

    #[test]
    fn scp_alias_dispatches_to_bare_ssh() {
        let e = endpoint_from_remote("git@git-server.com:foo/bar.git");
        assert_eq!(e.url(), "https://git-server.com/foo/bar.git");
        assert_eq!(e.ssh_metadata().unwrap().user_and_host, "git@git-server.com");
    }

    #[test]
    fn unknown_scheme_and_garbage() {
        assert!(endpoint_from_remote("gopher://example.com/x").is_unknown());
        assert!(endpoint_from_remote("http://[::1/broken").is_unknown());
        assert!(endpoint_from_remote("").is_unknown());
    }

    #[cfg(unix)]
    #[test]
    fn local_paths_become_file_urls() {
        let e = endpoint_from_remote("/srv/repos/bar.git");
        assert_eq!(e.url(), "file:///srv/repos/bar.git");

        let e = endpoint_from_remote("repos/bar.git");
        assert!(e.url().starts_with("file:///"));
        assert!(e.url().ends_with("/repos/bar.git"));
    }

    #[test]
    fn local_path_rules() {
        assert!(is_local_path("bar.git"));
        assert!(is_local_path("./a:b"));
        assert!(is_local_path("/srv/a:b"));
        assert!(!is_local_path("host:repo.git"));
        assert!(!is_local_path("git@host:foo/bar.git"));
    }

    #[test]
    fn drive_prefix() {
        assert!(has_dos_drive_prefix("C:\\repos"));
        assert!(has_dos_drive_prefix("c:/repos"));
        assert!(!has_dos_drive_prefix("host:repos"));
        assert!(!has_dos_drive_prefix("C"));
    }
}
