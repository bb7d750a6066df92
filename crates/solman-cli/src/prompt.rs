//! Interactive root directory prompt

use anyhow::{bail, Result};
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

/// Ask for a directory until an existing one is entered
///
/// Fails only when input ends before a valid directory is given.
pub fn prompt_for_directory<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> Result<PathBuf> {
    loop {
        writeln!(output, "Please type the app root directory")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            bail!("No project directory entered");
        }

        let entered = line.trim_end_matches(&['\r', '\n'][..]);
        if !entered.is_empty() && Path::new(entered).is_dir() {
            return Ok(PathBuf::from(entered));
        }
        writeln!(output, "{entered} does not exists")?;
    }
}
