//! Configuration lookup.
//!
//! Resolvers never read the process environment or git config files directly.
//! They take a [`ConfigLookup`] built once at startup (from a settings file,
//! command-line overrides and an environment snapshot) and only read from it.

mod file;
pub mod keys;
mod lookup;

pub use file::{config_path, load_from, load_or_init, SettingsFile};
pub use lookup::{canonical_git_key, parse_git_bool, ConfigLookup, MapConfig};
