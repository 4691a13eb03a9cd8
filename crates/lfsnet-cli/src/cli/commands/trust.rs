//! `lfsnet trust` – show the TLS trust decision for a host.

use anyhow::{Context, Result};
use lfsnet_core::config::MapConfig;
use lfsnet_core::trust::{resolve_trust, resolve_trust_for_url, SslBackend, TrustDecision};
use url::Url;

pub fn run_trust(target: &str, config: &MapConfig, json: bool) -> Result<()> {
    let decision = if target.contains("://") {
        let url = Url::parse(target).with_context(|| format!("invalid URL: {target}"))?;
        resolve_trust_for_url(&url, config)
    } else {
        resolve_trust(target, config)
    };
    let backend = SslBackend::from_config(config);
    decision
        .curl_handle()
        .context("apply trust decision to libcurl handle")?;

    if json {
        println!("{}", serde_json::to_string_pretty(&to_json(target, &backend, &decision))?);
        return Ok(());
    }

    println!("{:<12} {}", "TARGET", target);
    println!("{:<12} {}", "BACKEND", backend);
    println!(
        "{:<12} {} ({})",
        "SKIP_VERIFY", decision.skip_verify, decision.verify_source
    );
    match (&decision.pool, decision.ca_source) {
        (Some(pool), Some(source)) => {
            println!("{:<12} {} certificate(s) from {}", "CA_POOL", pool.len(), source);
            for (fingerprint, subject) in pool.fingerprints().iter().zip(pool.subjects()) {
                println!("  {}  {}", fingerprint, subject);
            }
        }
        _ => println!("{:<12} platform default", "CA_POOL"),
    }
    Ok(())
}

fn to_json(target: &str, backend: &SslBackend, decision: &TrustDecision) -> serde_json::Value {
    let certificates: Vec<serde_json::Value> = decision
        .pool
        .as_ref()
        .map(|pool| {
            pool.fingerprints()
                .into_iter()
                .zip(pool.subjects())
                .map(|(sha256, subject)| serde_json::json!({ "sha256": sha256, "subject": subject }))
                .collect()
        })
        .unwrap_or_default();

    serde_json::json!({
        "target": target,
        "backend": backend.to_string(),
        "skip_verify": decision.skip_verify,
        "verify_source": decision.verify_source,
        "ca_source": decision.ca_source,
        "certificates": certificates,
    })
}
