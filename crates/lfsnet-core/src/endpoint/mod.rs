//! Remote locators.
//!
//! Turns the remote strings git accepts (`ssh://` URLs, scp-like
//! `user@host:path` aliases, http(s), `git://`, `file://` and local paths)
//! into an [`Endpoint`]: the URL of the LFS server plus, for SSH remotes, the
//! connection details needed to talk to it over ssh.
//!
//! Every constructor is total. Input that cannot be understood produces an
//! endpoint whose URL is [`URL_UNKNOWN`]; callers check [`Endpoint::is_unknown`]
//! before connecting.

mod authority;
mod remote;
mod ssh;

pub use remote::{
    endpoint_from_file_url, endpoint_from_git_url, endpoint_from_http_url,
    endpoint_from_local_path, endpoint_from_remote, endpoint_from_url, is_local_path,
    rewrite_local_path_as_url,
};
pub use ssh::{endpoint_from_bare_ssh, endpoint_from_ssh_url};

use serde::Serialize;

/// URL of an endpoint that could not be resolved.
pub const URL_UNKNOWN: &str = "<unknown>";

pub const OPERATION_DOWNLOAD: &str = "download";
pub const OPERATION_UPLOAD: &str = "upload";

/// SSH connection details for a remote reached over ssh.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SshMetadata {
    /// `user@host` or bare `host`.
    pub user_and_host: String,
    /// Empty when the default ssh port applies.
    pub port: String,
    /// Remote-side repository path, not URL-escaped.
    pub path: String,
    /// Always `ssh`; `git+ssh` and `ssh+git` are folded into it.
    pub scheme: String,
}

impl SshMetadata {
    /// Arguments identifying the remote to an ssh client: `[-p PORT] USER@HOST`.
    pub fn ssh_args(&self) -> Vec<String> {
        let mut args = Vec::with_capacity(3);
        if !self.port.is_empty() {
            args.push("-p".to_string());
            args.push(self.port.clone());
        }
        args.push(self.user_and_host.clone());
        args
    }
}

/// How to reach a Git LFS server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Endpoint {
    url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    ssh_metadata: Option<SshMetadata>,
    #[serde(skip_serializing_if = "Option::is_none")]
    operation: Option<String>,
}

impl Endpoint {
    /// Endpoint for a locator that could not be parsed.
    pub fn unknown() -> Self {
        Self::from_url(URL_UNKNOWN)
    }

    /// Plain URL endpoint with no SSH details.
    pub fn from_url(url: impl Into<String>) -> Self {
        let url = url.into();
        if url.is_empty() {
            return Self::unknown();
        }
        Self {
            url,
            ssh_metadata: None,
            operation: None,
        }
    }

    pub(crate) fn with_ssh(url: String, ssh: SshMetadata) -> Self {
        Self {
            url,
            ssh_metadata: Some(ssh),
            operation: None,
        }
    }

    /// Returns a copy pinned to an explicit operation (`download`, `upload`,
    /// or a custom tag). An empty tag clears it.
    pub fn with_operation(self, operation: impl Into<String>) -> Self {
        let operation = operation.into();
        Self {
            operation: (!operation.is_empty()).then_some(operation),
            ..self
        }
    }

    /// Absolute URL; the HTTPS fallback for SSH remotes.
    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn ssh_metadata(&self) -> Option<&SshMetadata> {
        self.ssh_metadata.as_ref()
    }

    /// Explicit operation, if one was set.
    pub fn operation(&self) -> Option<&str> {
        self.operation.as_deref()
    }

    pub fn is_unknown(&self) -> bool {
        self.url == URL_UNKNOWN
    }
}

/// Operation used to pick the authorization scope for a request.
///
/// An explicit operation on the endpoint wins. Otherwise `GET` and `HEAD`
/// are downloads and every other method is an upload.
pub fn endpoint_operation<'a>(endpoint: &'a Endpoint, method: &str) -> &'a str {
    if let Some(op) = endpoint.operation() {
        return op;
    }
    match method {
        "GET" | "HEAD" => OPERATION_DOWNLOAD,
        _ => OPERATION_UPLOAD,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn operation_inferred_from_method() {
        let e = Endpoint::from_url("https://example.com/repo.git/info/lfs");
        assert_eq!(endpoint_operation(&e, "GET"), "download");
        assert_eq!(endpoint_operation(&e, "HEAD"), "download");
        assert_eq!(endpoint_operation(&e, "POST"), "upload");
        assert_eq!(endpoint_operation(&e, "PUT"), "upload");
        assert_eq!(endpoint_operation(&e, "get"), "upload");
    }

    #[test]
    fn explicit_operation_wins() {
        let e = Endpoint::from_url("https://example.com/repo").with_operation("upload");
        assert_eq!(endpoint_operation(&e, "GET"), "upload");

        let e = e.with_operation("verify");
        assert_eq!(endpoint_operation(&e, "POST"), "verify");
        assert_eq!(e.operation(), Some("verify"));
    }

    #[test]
    fn empty_operation_means_infer() {
        let e = Endpoint::from_url("https://example.com/repo")
            .with_operation("download")
            .with_operation("");
        assert_eq!(e.operation(), None);
        assert_eq!(endpoint_operation(&e, "POST"), "upload");
    }

    #[test]
    fn url_is_never_empty() {
        let e = Endpoint::from_url("");
        assert!(e.is_unknown());
        assert_eq!(e.url(), URL_UNKNOWN);
        assert!(e.ssh_metadata().is_none());
    }

    #[test]
    fn ssh_args_include_port_only_when_set() {
        let mut meta = SshMetadata {
            user_and_host: "git@example.com".to_string(),
            port: String::new(),
            path: "/repo.git".to_string(),
            scheme: "ssh".to_string(),
        };
        assert_eq!(meta.ssh_args(), vec!["git@example.com"]);
        meta.port = "2222".to_string();
        assert_eq!(meta.ssh_args(), vec!["-p", "2222", "git@example.com"]);
    }

    #[test]
    fn endpoint_serializes_without_empty_fields() {
        let e = Endpoint::from_url("https://example.com/repo");
        let json = serde_json::to_value(&e).unwrap();
        assert_eq!(json, serde_json::json!({ "url": "https://example.com/repo" }));
    }
}
