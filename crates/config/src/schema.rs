//! Launcher config schema (library location, entry point names).
//!
//! This is the launcher's own configuration. The gateway configuration file
//! passed on the command line is never parsed here.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

pub const DEFAULT_LIBRARY_NAME: &str = "gateway";
pub const DEFAULT_CREATE_SYMBOL: &str = "Gateway_CreateFromJson";
pub const DEFAULT_DESTROY_SYMBOL: &str = "Gateway_Destroy";

/// Root configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LauncherConfig {
    pub library: LibraryConfig,
    pub symbols: SymbolsConfig,
}

/// Where the gateway shared library lives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LibraryConfig {
    /// Base name, expanded to the platform file name (`libgateway.so`,
    /// `libgateway.dylib`, `gateway.dll`).
    pub name: String,

    /// Explicit library file. Takes precedence over `name` and `search_dirs`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,

    /// Directories probed for the platform file name, in order, before
    /// falling back to the loader's own search path.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub search_dirs: Vec<PathBuf>,
}

impl Default for LibraryConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_LIBRARY_NAME.into(),
            path: None,
            search_dirs: Vec::new(),
        }
    }
}

/// Exported entry point names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SymbolsConfig {
    pub create: String,
    pub destroy: String,
}

impl Default for SymbolsConfig {
    fn default() -> Self {
        Self {
            create: DEFAULT_CREATE_SYMBOL.into(),
            destroy: DEFAULT_DESTROY_SYMBOL.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_yields_defaults() {
        let cfg: LauncherConfig = toml::from_str("").unwrap();
        assert_eq!(cfg, LauncherConfig::default());
        assert_eq!(cfg.library.name, "gateway");
        assert_eq!(cfg.symbols.create, "Gateway_CreateFromJson");
        assert_eq!(cfg.symbols.destroy, "Gateway_Destroy");
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let cfg: LauncherConfig = toml::from_str(
            r#"
            [symbols]
            destroy = "Gw_Free"
            "#,
        )
        .unwrap();
        assert_eq!(cfg.symbols.create, DEFAULT_CREATE_SYMBOL);
        assert_eq!(cfg.symbols.destroy, "Gw_Free");
        assert_eq!(cfg.library, LibraryConfig::default());
    }

    #[test]
    fn default_serializes_without_optional_fields() {
        let out = toml::to_string_pretty(&LauncherConfig::default()).unwrap();
        assert!(out.contains("name = \"gateway\""));
        assert!(!out.contains("path"));
        assert!(!out.contains("search_dirs"));
    }
}
