//! pgprobe - Preflight check for PostgreSQL development tools.
//!
//! pgprobe verifies that `pg_config` is reachable on the search path and
//! reports which Python interpreter version will be used. It exits 1 with a
//! short diagnostic when `pg_config` is missing or not executable.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Names of the tools and interpreters to probe
//! - [`error`] - Error types and result aliases
//! - [`probe`] - Search-path lookup, interpreter queries and reporting
//!
//! # Example
//!
//! ```
//! use pgprobe::probe::VersionString;
//!
//! let version = VersionString::parse("Python 3.11.4");
//! assert_eq!(version.as_str(), "3.1");
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod probe;

pub use error::{ProbeError, Result};
