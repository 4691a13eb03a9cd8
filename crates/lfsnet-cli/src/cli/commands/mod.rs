//! CLI command handlers, one per file.

mod config_path;
mod endpoint;
mod trust;

pub use config_path::run_config_path;
pub use endpoint::run_endpoint;
pub use trust::run_trust;
