//! `lfsnet endpoint` – resolve a remote to an LFS endpoint.

use anyhow::Result;
use lfsnet_core::{endpoint_from_remote, endpoint_operation};

pub fn run_endpoint(remote: &str, operation: Option<&str>, method: &str, json: bool) -> Result<()> {
    let mut endpoint = endpoint_from_remote(remote);
    if let Some(op) = operation {
        endpoint = endpoint.with_operation(op);
    }
    let op = endpoint_operation(&endpoint, method);

    if json {
        let out = serde_json::json!({
            "endpoint": &endpoint,
            "operation": op,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        println!("{:<10} {}", "URL", endpoint.url());
        println!("{:<10} {} ({})", "OPERATION", op, method);
        if let Some(ssh) = endpoint.ssh_metadata() {
            println!("{:<10} {}", "SSH", ssh.ssh_args().join(" "));
            println!("{:<10} {}", "PATH", ssh.path);
        }
    }

    if endpoint.is_unknown() {
        anyhow::bail!("could not resolve remote `{}`", remote);
    }
    Ok(())
}
