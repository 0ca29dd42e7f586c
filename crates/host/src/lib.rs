//! Gateway host: loads a native gateway library and drives its lifecycle.
//!
//! Lifecycle:
//! 1. Resolve the library file (explicit path, search dirs, loader path)
//! 2. Load it and call the create entry point with the gateway config path
//! 3. Block until the operator enters a line
//! 4. Call the destroy entry point, if exported
//! 5. Unload the library
//!
//! What the gateway does once created is entirely up to the library.

pub mod error;
pub mod handle;
pub mod launch;
pub mod library;
pub mod module;
pub mod session;

pub use {
    error::HostError,
    handle::GatewayHandle,
    launch::launch,
    library::{NativeGateway, resolve_library_path},
    module::GatewayModule,
    session::run_session,
};
