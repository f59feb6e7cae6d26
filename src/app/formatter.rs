use crate::app::models::{PermissionMode, TARGET_FILE_TYPES};
use std::path::Path;

pub const NO_ARGS_HINT: &str =
    "Please provide an argument: -R for Read-Only, -RW for Read-Write, or specify a path.";
pub const INVALID_ARGUMENT: &str =
    "Invalid argument. Use -R for Read-Only, -RW for Read-Write, or -help for help.";
pub const CONFIRM_QUESTION: &str =
    "Are you sure you want to proceed with changing permissions? (Y/N): ";
pub const INVALID_INPUT: &str = "Invalid input. Please enter Y or N.";
pub const CANCELED: &str = "Operation canceled.";
pub const COMPLETED: &str = "---> Operation completed!";

pub struct OutputGenerator;

impl OutputGenerator {
    pub fn help_text() -> String {
        let bin = env!("CARGO_PKG_NAME");
        format!(
            "Usage: {bin} [options] [path] => {bin} -R [path]\n\
             Options:\n  \
             -R          Set files to Read-Only.\n  \
             -RW         Set files to Read-Write.\n  \
             path        Specify the target path to apply permissions. If no path is specified, the current working directory will be used.\n  \
             -help       Show this help message."
        )
    }

    /// `.h, .hpp, .c, .cpp, .cs`
    pub fn file_types() -> String {
        TARGET_FILE_TYPES.join(", ")
    }

    pub fn confirm_header(root: &Path) -> String {
        format!(
            "Target Path: {}\nTarget File Types: [{}]",
            root.display(),
            Self::file_types()
        )
    }

    pub fn processed_line(path: &Path, mode: PermissionMode) -> String {
        format!("---> Processed file: {} to {}", path.display(), mode)
    }

    pub fn missing_root_line(root: &Path) -> String {
        format!("---> Target path does not exist: {}", root.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_help_lists_every_option() {
        let help = OutputGenerator::help_text();
        assert!(help.starts_with("Usage: src_chmod [options] [path]"));
        for option in ["-R ", "-RW ", "path ", "-help "] {
            assert!(help.contains(option), "missing {option:?}");
        }
    }

    #[test]
    fn test_confirm_header() {
        assert_eq!(
            OutputGenerator::confirm_header(Path::new("/src")),
            "Target Path: /src\nTarget File Types: [.h, .hpp, .c, .cpp, .cs]"
        );
    }

    #[test]
    fn test_processed_line() {
        assert_eq!(
            OutputGenerator::processed_line(Path::new("a/b.cpp"), PermissionMode::ReadOnly),
            "---> Processed file: a/b.cpp to Read-Only"
        );
        assert_eq!(
            OutputGenerator::missing_root_line(Path::new("gone/dir")),
            "---> Target path does not exist: gone/dir"
        );
    }
}
