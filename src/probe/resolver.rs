//! Search-path lookup for executables.
//!
//! [`ToolResolver`] is the seam between the prober and the process's `PATH`.
//! [`SystemResolver`] walks the real directories; tests substitute
//! [`FakeResolver`](super::fake::FakeResolver).

use std::path::{Path, PathBuf};

/// An executable located on the search path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedTool {
    /// Full path of the file that matched.
    pub path: PathBuf,
    /// Whether the file may be executed by the current user.
    pub executable: bool,
}

/// Resolves a bare executable name to a file.
pub trait ToolResolver {
    /// Look up `name`, returning `None` when no matching file exists.
    fn resolve(&self, name: &str) -> Option<ResolvedTool>;
}

/// Check whether a file has executable permission bits set.
#[cfg(unix)]
pub fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.metadata()
        .map(|m| m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

/// On Windows, executability is determined by file extension, not permission bits.
#[cfg(not(unix))]
pub fn is_executable(_path: &Path) -> bool {
    true
}

/// Parse the system PATH environment variable into a list of directories.
pub fn parse_system_path() -> Vec<PathBuf> {
    std::env::var_os("PATH")
        .map(|path| std::env::split_paths(&path).collect())
        .unwrap_or_default()
}

/// Resolver backed by a list of real directories.
#[derive(Debug, Clone, Default)]
pub struct SystemResolver {
    path_entries: Vec<PathBuf>,
}

impl SystemResolver {
    /// Create a resolver over explicit directories, searched in order.
    pub fn new(path_entries: Vec<PathBuf>) -> Self {
        Self { path_entries }
    }

    /// Create a resolver over the current process's `PATH`.
    pub fn from_env() -> Self {
        Self::new(parse_system_path())
    }

    /// Directories searched, in order.
    pub fn path_entries(&self) -> &[PathBuf] {
        &self.path_entries
    }
}

impl ToolResolver for SystemResolver {
    /// An executable match anywhere on the path wins. Otherwise the first
    /// non-executable regular file is reported so the caller can tell
    /// "not executable" apart from "not found".
    fn resolve(&self, name: &str) -> Option<ResolvedTool> {
        if name.is_empty() {
            return None;
        }

        // Names with a separator are paths, not search-path lookups.
        if name.contains(std::path::MAIN_SEPARATOR) || name.contains('/') {
            let path = PathBuf::from(name);
            return path.is_file().then(|| ResolvedTool {
                executable: is_executable(&path),
                path,
            });
        }

        let mut first_plain_file: Option<PathBuf> = None;
        for dir in &self.path_entries {
            let candidate = dir.join(name);
            if !candidate.is_file() {
                continue;
            }
            if is_executable(&candidate) {
                tracing::debug!("Resolved {} to {}", name, candidate.display());
                return Some(ResolvedTool {
                    path: candidate,
                    executable: true,
                });
            }
            tracing::debug!("Skipping non-executable {}", candidate.display());
            first_plain_file.get_or_insert(candidate);
        }

        first_plain_file.map(|path| ResolvedTool {
            path,
            executable: false,
        })
    }
}
