//! Interactive prompting for file names

use anyhow::{Context, Result};
use std::io::{BufRead, Write};

/// Write `message` to `output` and read one answer line from `input`.
///
/// Surrounding whitespace is trimmed. Returns `None` at end of input.
pub fn prompt_line<R, W>(input: &mut R, output: &mut W, message: &str) -> Result<Option<String>>
where
    R: BufRead,
    W: Write,
{
    writeln!(output, "{message}").context("Failed to write prompt")?;
    output.flush().context("Failed to write prompt")?;

    let mut answer = String::new();
    let read = input
        .read_line(&mut answer)
        .context("Failed to read answer")?;
    if read == 0 {
        return Ok(None);
    }

    Ok(Some(answer.trim().to_string()))
}
