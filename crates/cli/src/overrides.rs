use std::path::PathBuf;

use {clap::Args, gateway_launcher_config::LauncherConfig};

/// Command-line and environment overrides for the launcher config file.
#[derive(Debug, Default, Args)]
pub struct LibraryOverrides {
    /// Gateway library file to load, bypassing name lookup.
    #[arg(long, env = "GATEWAY_LAUNCHER_LIBRARY")]
    pub library: Option<PathBuf>,

    /// Library base name, expanded to the platform file name.
    #[arg(long, env = "GATEWAY_LAUNCHER_LIBRARY_NAME")]
    pub library_name: Option<String>,

    /// Directory searched for the library before the loader path (repeatable).
    #[arg(long = "search-dir", value_name = "DIR")]
    pub search_dirs: Vec<PathBuf>,

    /// Name of the exported create entry point.
    #[arg(long, env = "GATEWAY_LAUNCHER_CREATE_SYMBOL")]
    pub create_symbol: Option<String>,

    /// Name of the exported destroy entry point.
    #[arg(long, env = "GATEWAY_LAUNCHER_DESTROY_SYMBOL")]
    pub destroy_symbol: Option<String>,
}

impl LibraryOverrides {
    /// Apply on top of a loaded config.
    ///
    /// A library name given here drops any `path` from the file, so the name
    /// is actually used. Search dirs given here are probed first.
    pub fn apply(self, config: &mut LauncherConfig) {
        let library = &mut config.library;
        if let Some(name) = self.library_name {
            library.name = name;
            library.path = None;
        }
        if let Some(path) = self.library {
            library.path = Some(path);
        }
        if !self.search_dirs.is_empty() {
            let from_file = std::mem::take(&mut library.search_dirs);
            library.search_dirs = self.search_dirs;
            library.search_dirs.extend(from_file);
        }

        if let Some(create) = self.create_symbol {
            config.symbols.create = create;
        }
        if let Some(destroy) = self.destroy_symbol {
            config.symbols.destroy = destroy;
        }
    }
}

#[cfg(test)]
mod tests {
    use {super::*, gateway_launcher_config::LibraryConfig};

    fn file_config() -> LauncherConfig {
        LauncherConfig {
            library: LibraryConfig {
                name: "edge".into(),
                path: Some("/opt/edge/libedge.so".into()),
                search_dirs: vec!["/opt/edge".into()],
            },
            ..LauncherConfig::default()
        }
    }

    #[test]
    fn no_overrides_keeps_file_values() {
        let mut config = file_config();
        LibraryOverrides::default().apply(&mut config);
        assert_eq!(config, file_config());
    }

    #[test]
    fn library_name_clears_file_path() {
        let mut config = file_config();
        LibraryOverrides {
            library_name: Some("gateway".into()),
            ..Default::default()
        }
        .apply(&mut config);

        assert_eq!(config.library.name, "gateway");
        assert_eq!(config.library.path, None);
    }

    #[test]
    fn explicit_library_beats_name() {
        let mut config = LauncherConfig::default();
        LibraryOverrides {
            library: Some("./libgw.so".into()),
            library_name: Some("ignored".into()),
            ..Default::default()
        }
        .apply(&mut config);

        assert_eq!(config.library.path, Some(PathBuf::from("./libgw.so")));
    }

    #[test]
    fn cli_search_dirs_come_first() {
        let mut config = file_config();
        LibraryOverrides {
            search_dirs: vec!["/usr/local/lib".into()],
            ..Default::default()
        }
        .apply(&mut config);

        assert_eq!(config.library.search_dirs, vec![
            PathBuf::from("/usr/local/lib"),
            PathBuf::from("/opt/edge"),
        ]);
    }

    #[test]
    fn symbols_override() {
        let mut config = LauncherConfig::default();
        LibraryOverrides {
            create_symbol: Some("Gw_Create".into()),
            destroy_symbol: Some("Gw_Free".into()),
            ..Default::default()
        }
        .apply(&mut config);

        assert_eq!(config.symbols.create, "Gw_Create");
        assert_eq!(config.symbols.destroy, "Gw_Free");
    }
}
