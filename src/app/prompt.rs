use crate::app::formatter::{OutputGenerator, CANCELED, CONFIRM_QUESTION, INVALID_INPUT};
use crate::app::models::Confirmation;
use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use std::path::Path;

/// Asks whether to change permissions under `root`, re-asking until the
/// answer is `Y` or `N` (case-insensitive, surrounding whitespace ignored).
///
/// End of input resolves to [`Confirmation::Cancel`].
pub fn confirm<R: BufRead, W: Write>(root: &Path, input: &mut R, out: &mut W) -> Result<Confirmation> {
    let mut line = String::new();

    loop {
        writeln!(out, "{}", OutputGenerator::confirm_header(root))?;
        write!(out, "{}", CONFIRM_QUESTION)?;
        out.flush()?;

        line.clear();
        let read = input
            .read_line(&mut line)
            .context("Failed to read confirmation from stdin")?;
        if read == 0 {
            log::debug!("stdin closed before an answer was given");
            writeln!(out)?;
            writeln!(out, "{}", CANCELED)?;
            return Ok(Confirmation::Cancel);
        }

        match line.trim().to_uppercase().as_str() {
            "Y" => return Ok(Confirmation::Proceed),
            "N" => {
                writeln!(out, "{}", CANCELED)?;
                return Ok(Confirmation::Cancel);
            }
            other => {
                log::trace!("rejected confirmation input {:?}", other);
                writeln!(out, "{}", INVALID_INPUT)?;
            }
        }
    }
}
