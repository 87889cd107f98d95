//! Command execution: probe, render, pick an exit code.

use std::io::Write;

use crate::error::Result;
use crate::probe::{report, CommandInvoker, Prober, ToolResolver};

use super::args::Cli;

/// Exit code when every check passed.
pub const EXIT_SUCCESS: u8 = 0;

/// Exit code when the required tool is missing or not executable.
pub const EXIT_MISSING_TOOL: u8 = 1;

/// Run the probe described by `cli` and write its output to `out`.
///
/// A missing or non-executable required tool is not an error here: it is
/// rendered as the diagnostic and mapped to [`EXIT_MISSING_TOOL`]. Only
/// failures to write output are returned as errors.
pub fn run(
    cli: &Cli,
    resolver: &dyn ToolResolver,
    invoker: &dyn CommandInvoker,
    out: &mut dyn Write,
) -> Result<u8> {
    let prober = Prober::new(resolver, invoker, cli.probe_config());

    match prober.run() {
        Ok(probe_report) => {
            if cli.json {
                report::write_json(out, &probe_report)?;
            } else {
                report::write_success(out, &probe_report)?;
            }
            Ok(EXIT_SUCCESS)
        }
        Err(e) if e.is_missing_tool() => {
            tracing::debug!("Preflight failed: {}", e);
            report::write_diagnostic(out, &prober.config().required_tool)?;
            Ok(EXIT_MISSING_TOOL)
        }
        Err(e) => Err(e),
    }
}
