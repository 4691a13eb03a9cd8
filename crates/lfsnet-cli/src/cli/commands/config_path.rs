//! `lfsnet config-path` – print the settings file location.

use anyhow::Result;
use lfsnet_core::config;

pub fn run_config_path() -> Result<()> {
    println!("{}", config::config_path()?.display());
    Ok(())
}
