//! The environment prober.
//!
//! `Prober` gates on the required build tool, then asks each interpreter
//! for its version. Only the required tool can fail the run; interpreter
//! probes are best-effort and their failures are logged, not returned.

use serde::Serialize;
use std::path::PathBuf;

use crate::config::ProbeConfig;
use crate::error::{ProbeError, Result};

use super::invoker::CommandInvoker;
use super::resolver::ToolResolver;
use super::version::VersionString;

/// Outcome of a successful probe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProbeReport {
    /// Where the required tool was found.
    pub tool_path: PathBuf,
    /// Primary interpreter version; empty if it could not be queried.
    pub python_version: VersionString,
    /// Legacy interpreter version; `None` if it could not be executed or
    /// was not probed.
    pub legacy_version: Option<VersionString>,
}

/// Runs the preflight checks against an injected environment.
pub struct Prober<'a> {
    resolver: &'a dyn ToolResolver,
    invoker: &'a dyn CommandInvoker,
    config: ProbeConfig,
}

impl<'a> Prober<'a> {
    /// Create a new prober.
    pub fn new(
        resolver: &'a dyn ToolResolver,
        invoker: &'a dyn CommandInvoker,
        config: ProbeConfig,
    ) -> Self {
        Self {
            resolver,
            invoker,
            config,
        }
    }

    pub fn config(&self) -> &ProbeConfig {
        &self.config
    }

    /// Locate the required tool and make sure it can be executed.
    pub fn resolve_required_tool(&self) -> Result<PathBuf> {
        let tool = &self.config.required_tool.name;

        let Some(resolved) = self.resolver.resolve(tool) else {
            tracing::debug!("{} not found on search path", tool);
            return Err(ProbeError::RequiredToolNotFound { tool: tool.clone() });
        };

        if !resolved.executable {
            tracing::debug!("{} found at {} but not executable", tool, resolved.path.display());
            return Err(ProbeError::RequiredToolNotExecutable {
                tool: tool.clone(),
                path: resolved.path,
            });
        }

        tracing::debug!("Using {} at {}", tool, resolved.path.display());
        Ok(resolved.path)
    }

    /// Ask an interpreter for its version.
    ///
    /// Returns `None` if the interpreter could not be started. A non-zero
    /// exit status still has its output parsed.
    pub fn query_version(&self, interpreter: &str) -> Option<VersionString> {
        let flag = self.config.version_flag.as_str();
        match self.invoker.invoke(interpreter, &[flag]) {
            Ok(output) => {
                if !output.success() {
                    tracing::debug!(
                        "{} {} exited with {:?}",
                        interpreter,
                        flag,
                        output.exit_code
                    );
                }
                let version = VersionString::parse(&output.combined());
                tracing::debug!("{} reports version '{}'", interpreter, version);
                Some(version)
            }
            Err(e) => {
                tracing::debug!("Could not run {} {}: {}", interpreter, flag, e);
                None
            }
        }
    }

    /// Run every check in order.
    ///
    /// Interpreters are only queried once the required tool has passed.
    pub fn run(&self) -> Result<ProbeReport> {
        let tool_path = self.resolve_required_tool()?;

        let python_version = self
            .query_version(&self.config.interpreter)
            .unwrap_or_default();

        let legacy_version = self
            .config
            .legacy_interpreter
            .as_deref()
            .and_then(|legacy| self.query_version(legacy));

        Ok(ProbeReport {
            tool_path,
            python_version,
            legacy_version,
        })
    }
}
