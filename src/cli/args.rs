//! CLI argument definitions.
//!
//! Running with no arguments performs the standard check. Every option has
//! a default matching that behaviour and an environment variable override.

use clap::Parser;

use crate::config::{
    ProbeConfig, RequiredTool, DEFAULT_INTERPRETER, DEFAULT_LEGACY_INTERPRETER,
    DEFAULT_REQUIRED_TOOL,
};

/// pgprobe - Check for PostgreSQL development tools and report the Python version.
#[derive(Debug, Parser)]
#[command(name = "pgprobe")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Required build tool looked up on PATH
    #[arg(long, env = "PGPROBE_PG_CONFIG", default_value = DEFAULT_REQUIRED_TOOL)]
    pub pg_config: String,

    /// Primary Python interpreter
    #[arg(long, env = "PGPROBE_PYTHON", default_value = DEFAULT_INTERPRETER)]
    pub python: String,

    /// Legacy Python interpreter, probed best-effort
    #[arg(long, env = "PGPROBE_LEGACY_PYTHON", default_value = DEFAULT_LEGACY_INTERPRETER)]
    pub legacy_python: String,

    /// Skip the legacy interpreter probe
    #[arg(long)]
    pub no_legacy: bool,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

impl Cli {
    /// Build the probe configuration from parsed arguments.
    pub fn probe_config(&self) -> ProbeConfig {
        ProbeConfig {
            required_tool: RequiredTool::new(&self.pg_config),
            interpreter: self.python.clone(),
            legacy_interpreter: (!self.no_legacy).then(|| self.legacy_python.clone()),
            ..ProbeConfig::default()
        }
    }
}
