//! Interactive overwrite confirmation.

use std::io::{BufRead, Write};
use std::path::Path;

use anyhow::{Context, Result};

use crate::core::confirm::is_confirmed;

/// Ask whether `path` may be overwritten and read one line of `input`.
///
/// Returns `true` only for the exact answer `y`; end of input declines.
pub fn confirm_overwrite<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    path: &Path,
) -> Result<bool> {
    write!(output, "{} already exists. Overwrite? [y/N] ", path.display())
        .context("write prompt")?;
    output.flush().context("flush prompt")?;

    let mut line = String::new();
    let read = input.read_line(&mut line).context("read confirmation")?;
    if read == 0 {
        // Keep the next status line off the prompt line.
        writeln!(output).context("write prompt")?;
        return Ok(is_confirmed(None));
    }
    Ok(is_confirmed(Some(&line)))
}
