//! pgprobe CLI entry point.

use std::io::Write;
use std::process::ExitCode;

use clap::Parser;
use pgprobe::cli::{run, Cli, EXIT_MISSING_TOOL};
use pgprobe::probe::{SystemInvoker, SystemResolver};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Logs go to stderr; stdout carries only the report. Log level is
/// controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is WARN
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("pgprobe=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("pgprobe=warn"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("pgprobe starting with args: {:?}", cli);

    let resolver = SystemResolver::from_env();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    let code = match run(&cli, &resolver, &SystemInvoker, &mut out) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            EXIT_MISSING_TOOL
        }
    };

    let _ = out.flush();
    ExitCode::from(code)
}
