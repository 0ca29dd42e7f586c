//! Gateway lifecycle: create, wait for the operator, destroy.

use std::{
    ffi::CString,
    fmt,
    io::{self, BufRead, Write},
    path::Path,
};

use tracing::{debug, info, warn};

use crate::{error::HostError, module::GatewayModule};

/// Run one gateway from creation to destruction.
///
/// Status lines go to `out`. After a successful create this blocks on
/// `input` until one line (or end of input) arrives, then destroys the
/// gateway. A null create result returns [`HostError::CreateFailed`]
/// without touching `input`.
pub fn run_session<M, R, W>(
    module: &M,
    config_path: &Path,
    input: &mut R,
    out: &mut W,
) -> Result<(), HostError>
where
    M: GatewayModule,
    R: BufRead,
    W: Write,
{
    let c_path = CString::new(config_path.as_os_str().as_encoded_bytes()).map_err(|_| {
        HostError::InvalidConfigPath {
            path: config_path.to_path_buf(),
        }
    })?;

    let Some(handle) = module.create(&c_path)? else {
        return Err(HostError::CreateFailed {
            config: config_path.to_path_buf(),
        });
    };
    info!(config = %config_path.display(), "gateway created");
    report(out, format_args!("gateway created from {}", config_path.display()));
    report(out, format_args!("gateway is running, press return to stop"));

    match wait_for_stop(input) {
        Ok(0) => debug!("end of input, stopping gateway"),
        Ok(_) => debug!("stop requested"),
        Err(e) => warn!(error = %e, "failed to read operator input, stopping gateway"),
    }

    if module.destroy(handle) {
        info!("gateway destroyed");
    }
    report(out, format_args!("gateway stopped"));
    Ok(())
}

/// Block until a single line can be read. Returns the bytes consumed; zero
/// means end of input.
pub fn wait_for_stop<R: BufRead>(input: &mut R) -> io::Result<usize> {
    let mut line = String::new();
    input.read_line(&mut line)
}

fn report<W: Write>(out: &mut W, line: fmt::Arguments<'_>) {
    if let Err(e) = writeln!(out, "{line}").and_then(|()| out.flush()) {
        warn!(error = %e, "failed to write status line");
    }
}
