use std::{
    io::{BufRead, Write},
    path::Path,
};

use {gateway_launcher_config::LauncherConfig, tracing::warn};

use crate::{error::HostError, library::NativeGateway, session::run_session};

/// Load the configured library, run one gateway session, and unload.
///
/// A failed unload is logged and otherwise ignored: the gateway has already
/// been destroyed by then.
pub fn launch<R: BufRead, W: Write>(
    config: &LauncherConfig,
    gateway_config: &Path,
    input: &mut R,
    out: &mut W,
) -> Result<(), HostError> {
    let gateway = NativeGateway::open(&config.library, &config.symbols)?;
    run_session(&gateway, gateway_config, input, out)?;

    let library = gateway.path().to_path_buf();
    if let Err(e) = gateway.close() {
        warn!(library = %library.display(), error = ?e, "gateway library did not unload cleanly");
    }
    Ok(())
}
