//! Environment probing.
//!
//! This module checks that the required build tool is on the search path
//! and asks the Python interpreters which version they are.
//!
//! # Modules
//!
//! - [`resolver`] - Search-path lookup of executables
//! - [`invoker`] - Child process invocation with captured output
//! - [`version`] - Version token extraction and truncation
//! - [`prober`] - The preflight checks themselves
//! - [`report`] - Rendering results to standard output
//! - [`fake`] - In-memory resolver and invoker for tests

pub mod fake;
pub mod invoker;
pub mod prober;
pub mod report;
pub mod resolver;
pub mod version;

pub use invoker::{CapturedOutput, CommandInvoker, SystemInvoker};
pub use prober::{ProbeReport, Prober};
pub use resolver::{ResolvedTool, SystemResolver, ToolResolver};
pub use version::VersionString;
