use std::ffi::CStr;

use crate::{error::HostError, handle::GatewayHandle};

/// The two entry points a gateway library exposes.
///
/// [`crate::NativeGateway`] resolves them from a loaded shared library; the
/// lifecycle in [`crate::session`] only depends on this trait.
pub trait GatewayModule {
    /// Call the create entry point with a NUL-terminated config path.
    ///
    /// `Ok(None)` means the entry point ran and returned null. An error means
    /// it could not be resolved.
    fn create(&self, config_path: &CStr) -> Result<Option<GatewayHandle>, HostError>;

    /// Call the destroy entry point, if exported. Returns whether it ran.
    fn destroy(&self, handle: GatewayHandle) -> bool;
}
