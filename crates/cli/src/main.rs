mod overrides;

use std::{io, path::PathBuf, process::ExitCode};

use {
    clap::{CommandFactory, Parser, error::ErrorKind},
    tracing::info,
    tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt},
};

use crate::overrides::LibraryOverrides;

#[derive(Parser)]
#[command(
    name = "gateway-launcher",
    version,
    about = "Load a native gateway library and run it until return is pressed"
)]
struct Cli {
    /// Gateway configuration file, passed to the library's create entry point as-is.
    gateway_config: PathBuf,

    /// Launcher config file (TOML, YAML or JSON). Searched for when omitted.
    #[arg(long, env = "GATEWAY_LAUNCHER_CONFIG", value_name = "FILE")]
    launcher_config: Option<PathBuf>,

    #[command(flatten)]
    overrides: LibraryOverrides,

    /// Log level (trace, debug, info, warn, error).
    #[arg(long, default_value = "warn")]
    log_level: String,

    /// Output logs as JSON instead of human-readable.
    #[arg(long, default_value_t = false)]
    json_logs: bool,
}

fn print_usage() {
    println!("{}", Cli::command().render_usage());
    println!("where <GATEWAY_CONFIG> is the file that contains the gateway configuration");
}

// Logs go to stderr; stdout is reserved for operator status lines.
fn init_telemetry(cli: &Cli) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level));

    if cli.json_logs {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .json()
                    .with_target(true)
                    .with_writer(io::stderr),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_thread_ids(false)
                    .with_writer(io::stderr),
            )
            .init();
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config = gateway_launcher_config::load_or_discover(cli.launcher_config.as_deref())?;
    cli.overrides.apply(&mut config);

    gateway_launcher_host::launch(
        &config,
        &cli.gateway_config,
        &mut io::stdin().lock(),
        &mut io::stdout().lock(),
    )?;
    Ok(())
}

fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = e.print();
            return ExitCode::SUCCESS;
        },
        Err(e) => {
            eprintln!("error: {}", e.kind().as_str().unwrap_or("invalid arguments"));
            print_usage();
            return ExitCode::FAILURE;
        },
    };
    init_telemetry(&cli);

    info!(version = env!("CARGO_PKG_VERSION"), "gateway-launcher starting");

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            println!("{e:#}");
            ExitCode::FAILURE
        },
    }
}
