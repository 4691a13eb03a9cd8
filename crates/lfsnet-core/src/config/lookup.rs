//! Read-only key/value lookup across the environment and git config namespaces.

use std::collections::HashMap;

use super::keys;

/// Read access to the configuration a resolver is allowed to see.
///
/// Per-host settings live in the git namespace under `http.<url>.<name>`, so
/// two namespaces are enough to cover environment, global and per-host keys.
pub trait ConfigLookup {
    /// Process environment variable.
    fn env(&self, key: &str) -> Option<&str>;

    /// Git config value (global or per-host key).
    fn git(&self, key: &str) -> Option<&str>;

    /// Git config value parsed as a boolean. Unparseable values are `None`.
    fn git_bool(&self, key: &str) -> Option<bool> {
        self.git(key).and_then(parse_git_bool)
    }

    /// Environment variable parsed as a boolean. Unparseable values are `None`.
    fn env_bool(&self, key: &str) -> Option<bool> {
        self.env(key).and_then(parse_git_bool)
    }
}

/// Parses a boolean the way git does.
///
/// `true`/`yes`/`on` and non-zero integers are true; `false`/`no`/`off`, `0`
/// and the empty string are false. Anything else is `None`.
pub fn parse_git_bool(value: &str) -> Option<bool> {
    let value = value.trim().to_ascii_lowercase();
    match value.as_str() {
        "true" | "yes" | "on" => Some(true),
        "false" | "no" | "off" | "" => Some(false),
        other => other.parse::<i64>().ok().map(|n| n != 0),
    }
}

/// Normalizes a git config key: section and variable names are
/// case-insensitive, the subsection (e.g. a URL) is kept as written.
///
/// `HTTP.https://Example.com/.SSLVerify` -> `http.https://Example.com/.sslverify`
pub fn canonical_git_key(key: &str) -> String {
    let (first, last) = match (key.find('.'), key.rfind('.')) {
        (Some(first), Some(last)) => (first, last),
        _ => return key.to_ascii_lowercase(),
    };
    if first == last {
        return key.to_ascii_lowercase();
    }
    format!(
        "{}{}{}",
        key[..first].to_ascii_lowercase(),
        &key[first..last],
        key[last..].to_ascii_lowercase()
    )
}

/// HashMap-backed [`ConfigLookup`].
///
/// Built once with the consuming `with_*` methods and then only read.
#[derive(Debug, Clone, Default)]
pub struct MapConfig {
    env: HashMap<String, String>,
    git: HashMap<String, String>,
}

impl MapConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a lookup from environment and git key/value pairs.
    pub fn from_maps<E, G, K1, V1, K2, V2>(env: E, git: G) -> Self
    where
        E: IntoIterator<Item = (K1, V1)>,
        G: IntoIterator<Item = (K2, V2)>,
        K1: Into<String>,
        V1: Into<String>,
        K2: AsRef<str>,
        V2: Into<String>,
    {
        let env = env
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        let git = git
            .into_iter()
            .map(|(k, v)| (canonical_git_key(k.as_ref()), v.into()))
            .collect();
        Self { env, git }
    }

    /// Snapshot of the TLS-related environment variables of this process.
    pub fn from_process_env() -> Self {
        let env = keys::ENV_KEYS
            .iter()
            .filter_map(|k| std::env::var(k).ok().map(|v| (k.to_string(), v)));
        Self::from_maps(env, std::iter::empty::<(String, String)>())
    }

    pub fn with_env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env.insert(key.into(), value.into());
        self
    }

    pub fn with_git(mut self, key: &str, value: impl Into<String>) -> Self {
        self.git.insert(canonical_git_key(key), value.into());
        self
    }

    /// Layers `other` on top of `self`; keys present in `other` win.
    pub fn merged_with(mut self, other: MapConfig) -> Self {
        self.env.extend(other.env);
        self.git.extend(other.git);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.env.is_empty() && self.git.is_empty()
    }
}

impl ConfigLookup for MapConfig {
    fn env(&self, key: &str) -> Option<&str> {
        self.env.get(key).map(String::as_str)
    }

    fn git(&self, key: &str) -> Option<&str> {
        self.git.get(&canonical_git_key(key)).map(String::as_str)
    }
}
