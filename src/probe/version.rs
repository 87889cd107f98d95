//! Version token extraction.
//!
//! Interpreters answer a version query with a line such as
//! `Python 3.11.4`. The displayed version is the token after the program
//! name, cut to its first three characters (`3.1`). Short tokens are kept
//! as they are; nothing is padded or rounded.

use regex::Regex;
use serde::Serialize;
use std::fmt;
use std::sync::LazyLock;

/// Number of characters kept from the version token.
pub const VERSION_WIDTH: usize = 3;

// First field and optional second field of a line.
static FIELDS_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*(\S+)(?:\s+(\S+))?").unwrap());

/// A version token truncated for display.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct VersionString(String);

impl VersionString {
    /// Truncate `token` to [`VERSION_WIDTH`] characters.
    pub fn from_token(token: &str) -> Self {
        Self(token.chars().take(VERSION_WIDTH).collect())
    }

    /// Extract and truncate the version token from interpreter output.
    pub fn parse(output: &str) -> Self {
        Self::from_token(version_token(output).unwrap_or(""))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for VersionString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Find the version token on the first line of `output`.
///
/// The token is the second field. A line with a single field yields that
/// field, the way field-splitting tools pass through undelimited lines.
pub fn version_token(output: &str) -> Option<&str> {
    let first_line = output.lines().next()?;
    let caps = FIELDS_REGEX.captures(first_line)?;
    caps.get(2).or_else(|| caps.get(1)).map(|m| m.as_str())
}
