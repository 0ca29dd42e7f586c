//! Launcher configuration: schema, discovery, and loading.
//!
//! Config files may be TOML, YAML, or JSON and support `${ENV_VAR}`
//! substitution (with `${ENV_VAR:-fallback}` defaults).

pub mod env_subst;
pub mod loader;
pub mod schema;

pub use {
    loader::{config_dir, discover_and_load, find_config_file, load_config, load_or_discover},
    schema::{LauncherConfig, LibraryConfig, SymbolsConfig},
};
