//! In-memory resolver and invoker for testing.
//!
//! `FakeResolver` and `FakeInvoker` stand in for the search path and for
//! child processes, so the prober can be exercised without touching the
//! real environment. `FakeInvoker` records every call for later assertion.
//!
//! # Example
//!
//! ```
//! use pgprobe::config::ProbeConfig;
//! use pgprobe::probe::fake::{FakeInvoker, FakeResolver};
//! use pgprobe::probe::Prober;
//!
//! let resolver = FakeResolver::new().with_executable("pg_config", "/usr/bin/pg_config");
//! let invoker = FakeInvoker::new().with_output("python", "Python 3.11.4\n", "");
//!
//! let prober = Prober::new(&resolver, &invoker, ProbeConfig::default());
//! let report = prober.run().unwrap();
//! assert_eq!(report.python_version.as_str(), "3.1");
//! assert!(report.legacy_version.is_none());
//! ```

use std::cell::RefCell;
use std::collections::HashMap;
use std::io;
use std::path::PathBuf;

use super::invoker::{CapturedOutput, CommandInvoker};
use super::resolver::{ResolvedTool, ToolResolver};

/// Resolver answering from a fixed table.
#[derive(Debug, Clone, Default)]
pub struct FakeResolver {
    tools: HashMap<String, ResolvedTool>,
}

impl FakeResolver {
    /// Create a resolver that finds nothing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an executable tool.
    pub fn with_executable(mut self, name: &str, path: &str) -> Self {
        self.tools.insert(
            name.to_string(),
            ResolvedTool {
                path: PathBuf::from(path),
                executable: true,
            },
        );
        self
    }

    /// Register a tool that exists but cannot be executed.
    pub fn with_non_executable(mut self, name: &str, path: &str) -> Self {
        self.tools.insert(
            name.to_string(),
            ResolvedTool {
                path: PathBuf::from(path),
                executable: false,
            },
        );
        self
    }
}

impl ToolResolver for FakeResolver {
    fn resolve(&self, name: &str) -> Option<ResolvedTool> {
        self.tools.get(name).cloned()
    }
}

/// Invoker answering from a fixed table; unknown programs fail to spawn.
#[derive(Debug, Default)]
pub struct FakeInvoker {
    outputs: HashMap<String, CapturedOutput>,
    calls: RefCell<Vec<(String, Vec<String>)>>,
}

impl FakeInvoker {
    /// Create an invoker where every program is missing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a program that exits 0 with the given output.
    pub fn with_output(self, program: &str, stdout: &str, stderr: &str) -> Self {
        self.with_exit(program, Some(0), stdout, stderr)
    }

    /// Register a program with an explicit exit code.
    pub fn with_exit(
        mut self,
        program: &str,
        exit_code: Option<i32>,
        stdout: &str,
        stderr: &str,
    ) -> Self {
        self.outputs.insert(
            program.to_string(),
            CapturedOutput {
                exit_code,
                stdout: stdout.to_string(),
                stderr: stderr.to_string(),
            },
        );
        self
    }

    /// Every invocation so far, as (program, args).
    pub fn calls(&self) -> Vec<(String, Vec<String>)> {
        self.calls.borrow().clone()
    }

    /// Whether `program` was invoked at least once.
    pub fn was_called(&self, program: &str) -> bool {
        self.calls.borrow().iter().any(|(p, _)| p == program)
    }
}

impl CommandInvoker for FakeInvoker {
    fn invoke(&self, program: &str, args: &[&str]) -> io::Result<CapturedOutput> {
        self.calls.borrow_mut().push((
            program.to_string(),
            args.iter().map(|a| a.to_string()).collect(),
        ));
        self.outputs.get(program).cloned().ok_or_else(|| {
            io::Error::new(io::ErrorKind::NotFound, format!("{}: not found", program))
        })
    }
}
