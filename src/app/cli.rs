use crate::app::models::{PermissionMode, TraversalRequest};
use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;

// `-RW` and `-help` are single-dash words that clap would split into short
// flags, so every token is collected raw and classified by `into_command`.
#[derive(Parser, Debug)]
#[command(
    author,
    about = "Toggle read-only / read-write permissions on C-family source files",
    disable_help_flag = true,
    disable_version_flag = true
)]
pub struct Cli {
    /// -R for Read-Only, -RW for Read-Write, -help for usage, then an optional target path
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, value_name = "ARGS")]
    pub args: Vec<String>,
}

/// What the invocation asks the program to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Print help. `hint` is set when no arguments were given at all.
    Help { hint: bool },
    /// The first argument was not recognized.
    Invalid(String),
    Proceed(TraversalRequest),
}

impl Cli {
    /// Parses a full argument vector (program name first) and classifies it.
    ///
    /// clap swallows a leading `--` as its end-of-options marker, so that
    /// token is checked on the raw vector before parsing.
    pub fn classify<I, T>(argv: I, cwd: PathBuf) -> Result<Command, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let argv: Vec<OsString> = argv.into_iter().map(Into::into).collect();
        if let Some(first) = argv.get(1).filter(|arg| arg.as_os_str() == "--") {
            return Ok(Command::Invalid(first.to_string_lossy().into_owned()));
        }
        Ok(Self::try_parse_from(argv)?.into_command(cwd))
    }

    /// Classifies the parsed arguments. `cwd` is the root used when no path was given.
    pub fn into_command(self, cwd: PathBuf) -> Command {
        let mut args = self.args.into_iter();
        let Some(mode) = args.next() else {
            return Command::Help { hint: true };
        };

        let mode = match mode.as_str() {
            "-R" => PermissionMode::ReadOnly,
            "-RW" => PermissionMode::ReadWrite,
            "-help" => return Command::Help { hint: false },
            _ => return Command::Invalid(mode),
        };

        let root = match args.next() {
            Some(path) if !path.is_empty() => PathBuf::from(path),
            _ => cwd,
        };

        Command::Proceed(TraversalRequest { root, mode })
    }
}
