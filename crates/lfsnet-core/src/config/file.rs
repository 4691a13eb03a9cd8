//! Settings file under the XDG config dir.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use super::MapConfig;

/// Settings loaded from `~/.config/lfsnet/config.toml`.
///
/// ```toml
/// [git]
/// "http.sslcainfo" = "/etc/ssl/certs/corp.pem"
/// "http.https://git-lfs.local/.sslverify" = "false"
///
/// [env]
/// GIT_SSL_NO_VERIFY = "0"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettingsFile {
    /// Git config keys (`http.*`), global and per-host.
    #[serde(default)]
    pub git: BTreeMap<String, String>,
    /// Environment defaults; the real process environment wins over these.
    #[serde(default)]
    pub env: BTreeMap<String, String>,
}

impl SettingsFile {
    pub fn into_lookup(self) -> MapConfig {
        MapConfig::from_maps(self.env, self.git)
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("lfsnet")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load settings from disk, creating an empty file if none exists.
pub fn load_or_init() -> Result<SettingsFile> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = SettingsFile::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }
    load_from(&path)
}

pub fn load_from(path: &Path) -> Result<SettingsFile> {
    let data =
        fs::read_to_string(path).with_context(|| format!("read config {}", path.display()))?;
    let cfg: SettingsFile =
        toml::from_str(&data).with_context(|| format!("parse config {}", path.display()))?;
    Ok(cfg)
}
