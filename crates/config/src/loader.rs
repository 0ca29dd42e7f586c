use std::path::{Path, PathBuf};

use {
    anyhow::Context,
    tracing::{debug, warn},
};

use crate::{env_subst::substitute_env, schema::LauncherConfig};

/// Standard config file names, checked in order.
const CONFIG_FILENAMES: &[&str] = &[
    "gateway-launcher.toml",
    "gateway-launcher.yaml",
    "gateway-launcher.yml",
    "gateway-launcher.json",
];

/// Load config from the given path (any supported format).
pub fn load_config(path: &Path) -> anyhow::Result<LauncherConfig> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let raw = substitute_env(&raw);
    parse_config(&raw, path).with_context(|| format!("failed to parse {}", path.display()))
}

/// Load the launcher config.
///
/// An explicit path must load; any error is returned. Without one, standard
/// locations are searched (see [`search_dirs`]) and a broken discovered file
/// falls back to defaults with a warning.
pub fn load_or_discover(explicit: Option<&Path>) -> anyhow::Result<LauncherConfig> {
    if let Some(path) = explicit {
        debug!(path = %path.display(), "loading launcher config");
        return load_config(path);
    }
    Ok(discover_and_load())
}

/// Discover and load config from standard locations.
///
/// Returns `LauncherConfig::default()` if no config file is found or the one
/// found cannot be loaded.
pub fn discover_and_load() -> LauncherConfig {
    let Some(path) = find_config_file(&search_dirs()) else {
        debug!("no launcher config found, using defaults");
        return LauncherConfig::default();
    };

    debug!(path = %path.display(), "loading launcher config");
    match load_config(&path) {
        Ok(cfg) => cfg,
        Err(e) => {
            warn!(path = %path.display(), error = %format!("{e:#}"), "failed to load launcher config, using defaults");
            LauncherConfig::default()
        },
    }
}

/// Directories searched for a config file, in priority order:
/// 1. the current directory (project-local)
/// 2. `~/.config/gateway-launcher/` (user-global)
pub fn search_dirs() -> Vec<PathBuf> {
    let mut dirs = vec![PathBuf::from(".")];
    if let Some(dir) = config_dir() {
        dirs.push(dir);
    }
    dirs
}

/// Returns `~/.config/gateway-launcher/` on all platforms.
pub fn config_dir() -> Option<PathBuf> {
    directories::BaseDirs::new().map(|d| d.home_dir().join(".config").join("gateway-launcher"))
}

/// First existing config file across `dirs`, honoring [`CONFIG_FILENAMES`]
/// order within each directory.
pub fn find_config_file(dirs: &[PathBuf]) -> Option<PathBuf> {
    dirs.iter()
        .flat_map(|dir| CONFIG_FILENAMES.iter().map(move |name| dir.join(name)))
        .find(|p| p.is_file())
}

fn parse_config(raw: &str, path: &Path) -> anyhow::Result<LauncherConfig> {
    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("toml");

    match ext {
        "toml" => Ok(toml::from_str(raw)?),
        "yaml" | "yml" => Ok(serde_yaml::from_str(raw)?),
        "json" => Ok(serde_json::from_str(raw)?),
        _ => anyhow::bail!("unsupported config format: .{ext}"),
    }
}
