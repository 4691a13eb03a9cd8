//! CLI for lfsnet.

mod commands;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use lfsnet_core::config::{self, MapConfig};
use std::path::PathBuf;

use commands::{run_config_path, run_endpoint, run_trust};

/// Top-level CLI for lfsnet.
#[derive(Debug, Parser)]
#[command(name = "lfsnet")]
#[command(about = "lfsnet: resolve Git LFS endpoints and TLS trust settings", long_about = None)]
pub struct Cli {
    /// Git config override as KEY=VALUE, e.g. `-c http.sslverify=false` (repeatable).
    #[arg(short = 'c', long = "config", value_name = "KEY=VALUE", global = true, value_parser = parse_key_value)]
    pub overrides: Vec<(String, String)>,

    /// Settings file to read instead of ~/.config/lfsnet/config.toml.
    #[arg(long, value_name = "PATH", global = true)]
    pub settings: Option<PathBuf>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Resolve a git remote (URL, scp-like alias, or local path) to an LFS endpoint.
    Endpoint {
        /// Remote as passed to git, e.g. `git@example.com:org/repo.git`.
        remote: String,

        /// Pin the endpoint to an explicit operation (download, upload, ...).
        #[arg(long)]
        operation: Option<String>,

        /// HTTP method used to infer the operation when none is pinned.
        #[arg(long, default_value = "GET")]
        method: String,

        /// Print JSON instead of text.
        #[arg(long)]
        json: bool,
    },

    /// Show the TLS trust decision for a host (`host[:port]`) or URL.
    Trust {
        /// Host such as `git-lfs.local:8443`, or a full `https://` URL.
        target: String,

        /// Print JSON instead of text.
        #[arg(long)]
        json: bool,
    },

    /// Print the settings file path.
    ConfigPath,
}

fn parse_key_value(s: &str) -> Result<(String, String), String> {
    match s.split_once('=') {
        Some((k, v)) if !k.trim().is_empty() => Ok((k.trim().to_string(), v.to_string())),
        _ => Err(format!("expected KEY=VALUE, got `{s}`")),
    }
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        match cli.command {
            CliCommand::ConfigPath => run_config_path()?,
            CliCommand::Endpoint {
                remote,
                operation,
                method,
                json,
            } => run_endpoint(&remote, operation.as_deref(), &method, json)?,
            CliCommand::Trust { target, json } => {
                let lookup = build_lookup(cli.settings.as_deref(), &cli.overrides)?;
                run_trust(&target, &lookup, json)?;
            }
        }

        Ok(())
    }
}

/// Settings file, then `-c` overrides, then the process environment.
fn build_lookup(
    settings: Option<&std::path::Path>,
    overrides: &[(String, String)],
) -> Result<MapConfig> {
    let file = match settings {
        Some(path) => config::load_from(path)?,
        None => config::load_or_init().context("load settings")?,
    };
    tracing::debug!("loaded settings: {:?}", file);

    let cli_overrides = overrides
        .iter()
        .fold(MapConfig::new(), |cfg, (k, v)| cfg.with_git(k, v.as_str()));

    Ok(file
        .into_lookup()
        .merged_with(cli_overrides)
        .merged_with(MapConfig::from_process_env()))
}

#[cfg(test)]
mod tests;
