use std::path::PathBuf;

/// Fatal launcher failures.
///
/// Loader errors keep the platform message as their `source`; print with
/// `{:#}` (or walk the chain) to show it.
#[derive(Debug, thiserror::Error)]
pub enum HostError {
    #[error("failed to load gateway library {}", library.display())]
    Load {
        library: PathBuf,
        source: libloading::Error,
    },

    #[error("failed to resolve symbol {symbol} in {}", library.display())]
    MissingSymbol {
        symbol: String,
        library: PathBuf,
        source: libloading::Error,
    },

    #[error("gateway config path contains a NUL byte: {}", path.display())]
    InvalidConfigPath { path: PathBuf },

    #[error("failed to create gateway from {}", config.display())]
    CreateFailed { config: PathBuf },

    #[error("failed to unload gateway library {}", library.display())]
    Unload {
        library: PathBuf,
        source: libloading::Error,
    },
}
