//! Probe configuration.
//!
//! The names probed are fixed identifiers. [`ProbeConfig::default`] carries
//! them; the CLI lets packagers and tests override each one.

/// Default name of the required build tool.
pub const DEFAULT_REQUIRED_TOOL: &str = "pg_config";

/// Default hint printed after the "not found" line.
pub const DEFAULT_PACKAGE_HINT: &str =
    "Please check if you installed the PostgreSQL development packages.";

/// Default primary interpreter.
pub const DEFAULT_INTERPRETER: &str = "python";

/// Default legacy interpreter.
pub const DEFAULT_LEGACY_INTERPRETER: &str = "python2.7";

/// Flag passed to interpreters to make them print their version.
pub const DEFAULT_VERSION_FLAG: &str = "-V";

/// A tool whose presence gates the rest of the run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequiredTool {
    /// Executable name looked up on the search path.
    pub name: String,
    /// Second diagnostic line, telling the user what to install.
    pub package_hint: String,
}

impl RequiredTool {
    /// Create a required tool with the default package hint.
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            package_hint: DEFAULT_PACKAGE_HINT.to_string(),
        }
    }

    /// First diagnostic line.
    pub fn missing_message(&self) -> String {
        format!("No {} found in your path.", self.name)
    }
}

impl Default for RequiredTool {
    fn default() -> Self {
        Self::new(DEFAULT_REQUIRED_TOOL)
    }
}

/// Everything the prober needs to know about what to look for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeConfig {
    pub required_tool: RequiredTool,
    pub interpreter: String,
    /// `None` skips the legacy probe entirely.
    pub legacy_interpreter: Option<String>,
    pub version_flag: String,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            required_tool: RequiredTool::default(),
            interpreter: DEFAULT_INTERPRETER.to_string(),
            legacy_interpreter: Some(DEFAULT_LEGACY_INTERPRETER.to_string()),
            version_flag: DEFAULT_VERSION_FLAG.to_string(),
        }
    }
}
