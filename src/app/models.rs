use std::fmt;
use std::path::PathBuf;

/// Suffixes eligible for a permission change, in display order.
pub const TARGET_FILE_TYPES: [&str; 5] = [".h", ".hpp", ".c", ".cpp", ".cs"];

/// The two permission states the tool can apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PermissionMode {
    ReadOnly,
    ReadWrite,
}

impl PermissionMode {
    /// Unix mode bits written onto each matched file.
    pub fn bits(self) -> u32 {
        match self {
            PermissionMode::ReadOnly => 0o444,
            PermissionMode::ReadWrite => 0o644,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PermissionMode::ReadOnly => "Read-Only",
            PermissionMode::ReadWrite => "Read-Write",
        }
    }
}

impl fmt::Display for PermissionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single walk to perform: where to start and which mode to apply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraversalRequest {
    pub root: PathBuf,
    pub mode: PermissionMode,
}

/// Settings loaded from `config.toml`, with defaults for anything absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeConfig {
    pub log_level: String,
    pub follow_links: bool,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            follow_links: false,
        }
    }
}

/// The answer obtained from the confirmation prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    Proceed,
    Cancel,
}

/// Result of walking a root path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalkOutcome {
    Completed { processed: usize },
    MissingRoot,
}

/// Returns the suffix of `name` starting at its last `.`, if any.
pub fn file_suffix(name: &str) -> Option<&str> {
    name.rfind('.').map(|idx| &name[idx..])
}

/// Exact, case-sensitive suffix membership test against [`TARGET_FILE_TYPES`].
pub fn is_target_file(name: &str) -> bool {
    file_suffix(name).is_some_and(|suffix| TARGET_FILE_TYPES.contains(&suffix))
}
