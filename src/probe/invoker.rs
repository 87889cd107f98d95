//! Child process invocation.

use std::process::{Command, Stdio};

/// Captured output of a finished child process.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CapturedOutput {
    /// Exit code (None if killed by signal).
    pub exit_code: Option<i32>,

    /// Standard output.
    pub stdout: String,

    /// Standard error.
    pub stderr: String,
}

impl CapturedOutput {
    /// Stdout followed by stderr, the way `2>&1` would interleave a program
    /// that writes to only one of them.
    pub fn combined(&self) -> String {
        let mut text = self.stdout.clone();
        text.push_str(&self.stderr);
        text
    }

    /// Whether the process exited with status 0.
    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }
}

/// Runs an executable with arguments and captures what it prints.
pub trait CommandInvoker {
    /// Run `program` with `args`, waiting for it to exit.
    ///
    /// Returns an error only if the process could not be started.
    fn invoke(&self, program: &str, args: &[&str]) -> std::io::Result<CapturedOutput>;
}

/// Invoker that spawns real processes.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemInvoker;

impl CommandInvoker for SystemInvoker {
    fn invoke(&self, program: &str, args: &[&str]) -> std::io::Result<CapturedOutput> {
        let output = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .output()?;

        Ok(CapturedOutput {
            exit_code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }
}
