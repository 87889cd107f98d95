//! Command-line interface for pgprobe.
//!
//! # Architecture
//!
//! - [`args`] - Argument definitions using clap's derive macros
//! - [`run`] - Probe execution and exit code mapping

pub mod args;
pub mod run;

pub use args::Cli;
pub use run::{run, EXIT_MISSING_TOOL, EXIT_SUCCESS};
