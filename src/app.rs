// Declare modules
pub mod cli;
pub mod config;
pub mod formatter;
pub mod models;
pub mod prompt;
pub mod walker;

#[cfg(all(test, unix))]
mod testutil;

use anyhow::{Context, Result};
use std::env;
use std::io::{self, BufRead, Write};

use self::cli::{Cli, Command};
use self::formatter::{OutputGenerator, COMPLETED, INVALID_ARGUMENT, NO_ARGS_HINT};
use self::models::{Confirmation, RuntimeConfig, WalkOutcome};
use self::walker::Walker;

/// Parses the process arguments and runs against the real stdin/stdout.
///
/// `loaded` is the result of reading `config.toml`; it only matters once a
/// walk is requested.
pub fn run(loaded: Result<RuntimeConfig>) -> Result<()> {
    // 1. Parse Args
    let cwd = env::current_dir().context("Failed to get current directory")?;
    let command = Cli::classify(env::args_os(), cwd).unwrap_or_else(|err| err.exit());

    // 2. Resolve Configuration
    let config = config_for(&command, loaded)?;

    // 3. Confirm, Walk and Report
    let stdin = io::stdin();
    let stdout = io::stdout();
    execute(command, &config, &mut stdin.lock(), &mut stdout.lock())
}

/// Help and invalid-argument runs never touch the filesystem, so a broken
/// config only fails a run that would walk.
fn config_for(command: &Command, loaded: Result<RuntimeConfig>) -> Result<RuntimeConfig> {
    match (command, loaded) {
        (_, Ok(config)) => Ok(config),
        (Command::Proceed(_), Err(err)) => Err(err),
        (_, Err(err)) => {
            log::debug!("ignoring config error: {:#}", err);
            Ok(RuntimeConfig::default())
        }
    }
}

/// Carries out a classified command. Cancellation and usage problems are
/// normal returns; only filesystem and I/O failures are errors.
pub fn execute<R: BufRead, W: Write>(
    command: Command,
    config: &RuntimeConfig,
    input: &mut R,
    out: &mut W,
) -> Result<()> {
    let request = match command {
        Command::Help { hint } => {
            if hint {
                writeln!(out, "{}", NO_ARGS_HINT)?;
            }
            writeln!(out, "{}", OutputGenerator::help_text())?;
            return Ok(());
        }
        Command::Invalid(arg) => {
            log::debug!("unrecognized first argument {:?}", arg);
            writeln!(out, "{}", INVALID_ARGUMENT)?;
            return Ok(());
        }
        Command::Proceed(request) => request,
    };

    if prompt::confirm(&request.root, input, out)? == Confirmation::Cancel {
        return Ok(());
    }

    let outcome = Walker::new(config).walk(&request, out)?;
    if let WalkOutcome::Completed { processed } = outcome {
        log::debug!("processed {} file(s)", processed);
    }
    writeln!(out, "{}", COMPLETED)?;
    out.flush()?;

    Ok(())
}
