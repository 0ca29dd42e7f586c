use std::{ffi::c_void, fmt, ptr::NonNull};

/// Opaque gateway instance returned by the library's create entry point.
///
/// Never dereferenced. It is only handed back to the destroy entry point,
/// which consumes it, so a handle cannot be destroyed twice.
pub struct GatewayHandle(NonNull<c_void>);

impl GatewayHandle {
    /// Wrap a pointer returned by the create entry point. `None` for null.
    pub fn from_raw(ptr: *mut c_void) -> Option<Self> {
        NonNull::new(ptr).map(Self)
    }

    pub fn into_raw(self) -> *mut c_void {
        self.0.as_ptr()
    }
}

impl fmt::Debug for GatewayHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GatewayHandle({:p})", self.0)
    }
}
