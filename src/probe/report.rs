//! Rendering of probe results to standard output.

use std::io::Write;

use crate::config::RequiredTool;
use crate::error::Result;

use super::prober::ProbeReport;

/// Write the success line, e.g. `Using python 3.1.`
pub fn write_success(out: &mut dyn Write, report: &ProbeReport) -> Result<()> {
    writeln!(out, "Using python {}.", report.python_version)?;
    Ok(())
}

/// Write the two-line diagnostic shown when the required tool is unusable.
pub fn write_diagnostic(out: &mut dyn Write, tool: &RequiredTool) -> Result<()> {
    writeln!(out, "{}", tool.missing_message())?;
    writeln!(out, "{}", tool.package_hint)?;
    Ok(())
}

/// Write the report as pretty-printed JSON.
pub fn write_json(out: &mut dyn Write, report: &ProbeReport) -> Result<()> {
    let json = serde_json::to_string_pretty(report).map_err(anyhow::Error::from)?;
    writeln!(out, "{}", json)?;
    Ok(())
}
