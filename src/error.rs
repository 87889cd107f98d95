//! Error types for pgprobe.
//!
//! This module defines [`ProbeError`], the error type returned by the
//! prober, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - A missing and a non-executable required tool are separate variants but
//!   render the same diagnostic (see [`ProbeError::is_missing_tool`])
//! - Interpreter probe failures are not errors; they never reach this type
//! - Use `anyhow::Error` (via `ProbeError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for probe operations.
#[derive(Debug, Error)]
pub enum ProbeError {
    /// The required tool is not on the search path.
    #[error("Required tool '{tool}' not found on PATH")]
    RequiredToolNotFound { tool: String },

    /// The required tool is on the search path but lacks execute permission.
    #[error("Required tool '{tool}' at {path} is not executable")]
    RequiredToolNotExecutable { tool: String, path: PathBuf },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ProbeError {
    /// Whether this error means the required tool is unusable.
    ///
    /// Both variants produce the same user-facing diagnostic and exit code.
    pub fn is_missing_tool(&self) -> bool {
        matches!(
            self,
            ProbeError::RequiredToolNotFound { .. } | ProbeError::RequiredToolNotExecutable { .. }
        )
    }
}

/// Result type alias for probe operations.
pub type Result<T> = std::result::Result<T, ProbeError>;
