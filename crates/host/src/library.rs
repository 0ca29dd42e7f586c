//! Native gateway library: file name resolution and entry point calls.

#![allow(unsafe_code)]

use std::{
    ffi::{CStr, c_char, c_void},
    path::{Path, PathBuf},
};

use {
    gateway_launcher_config::{LibraryConfig, SymbolsConfig},
    libloading::Library,
    tracing::{debug, info},
};

use crate::{error::HostError, handle::GatewayHandle, module::GatewayModule};

type CreateFn = unsafe extern "C" fn(*const c_char) -> *mut c_void;
type DestroyFn = unsafe extern "C" fn(*mut c_void);

/// Pick the file handed to the platform loader.
///
/// An explicit `path` wins. Otherwise the platform file name for `name` is
/// probed in each search dir; if none has it, the bare file name is returned
/// and the loader's own search path applies.
pub fn resolve_library_path(cfg: &LibraryConfig) -> PathBuf {
    if let Some(path) = &cfg.path {
        return path.clone();
    }

    let file_name = libloading::library_filename(&cfg.name);
    let found = cfg
        .search_dirs
        .iter()
        .map(|dir| dir.join(&file_name))
        .find(|candidate| candidate.is_file());

    match found {
        Some(path) => path,
        None => PathBuf::from(file_name),
    }
}

/// A loaded gateway library.
///
/// Entry points are looked up when called, so a missing destroy symbol only
/// matters at shutdown.
pub struct NativeGateway {
    library: Library,
    path: PathBuf,
    symbols: SymbolsConfig,
}

impl NativeGateway {
    pub fn open(library: &LibraryConfig, symbols: &SymbolsConfig) -> Result<Self, HostError> {
        Self::open_path(resolve_library_path(library), symbols.clone())
    }

    pub fn open_path(path: PathBuf, symbols: SymbolsConfig) -> Result<Self, HostError> {
        debug!(library = %path.display(), "loading gateway library");
        // SAFETY: loading runs the library's initializers; the operator chose it.
        let library = unsafe { Library::new(&path) }.map_err(|source| HostError::Load {
            library: path.clone(),
            source,
        })?;
        info!(library = %path.display(), "gateway library loaded");

        Ok(Self {
            library,
            path,
            symbols,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Unload the library. Any handle created from it must be destroyed first.
    pub fn close(self) -> Result<(), HostError> {
        self.library.close().map_err(|source| HostError::Unload {
            library: self.path,
            source,
        })
    }
}

impl GatewayModule for NativeGateway {
    fn create(&self, config_path: &CStr) -> Result<Option<GatewayHandle>, HostError> {
        let symbol = &self.symbols.create;
        // SAFETY: the create entry point is declared as `fn(const char *) -> void *`.
        let create = unsafe { self.library.get::<CreateFn>(symbol.as_bytes()) }.map_err(
            |source| HostError::MissingSymbol {
                symbol: symbol.clone(),
                library: self.path.clone(),
                source,
            },
        )?;

        debug!(symbol = %symbol, "calling create entry point");
        // SAFETY: `config_path` is NUL-terminated and outlives the call.
        let raw = unsafe { create(config_path.as_ptr()) };
        Ok(GatewayHandle::from_raw(raw))
    }

    fn destroy(&self, handle: GatewayHandle) -> bool {
        let symbol = &self.symbols.destroy;
        // SAFETY: the destroy entry point is declared as `fn(void *)`.
        let destroy = match unsafe { self.library.get::<DestroyFn>(symbol.as_bytes()) } {
            Ok(destroy) => destroy,
            Err(e) => {
                debug!(symbol = %symbol, error = %e, "no destroy entry point, skipping");
                return false;
            },
        };

        debug!(symbol = %symbol, ?handle, "calling destroy entry point");
        // SAFETY: the handle came from this library's create entry point and
        // is consumed here.
        unsafe { destroy(handle.into_raw()) };
        true
    }
}
