//! Plain text output formatter

use std::io::{self, Write};

use super::ReportFormatter;
use crate::error::{Error, Result};

/// Plain text formatter - one `word<TAB>count` line per word
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Give back the underlying writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl TextFormatter<io::Stdout> {
    /// Create a formatter that writes to stdout
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> ReportFormatter for TextFormatter<W> {
    fn write_header(&mut self, label: &str) -> Result<()> {
        writeln!(self.writer, "# {label}").map_err(Error::SinkUnwritable)
    }

    fn write_row(&mut self, word: &str, count: u64) -> Result<()> {
        writeln!(self.writer, "{word}\t{count}").map_err(Error::SinkUnwritable)
    }

    fn write_footer(&mut self) -> Result<()> {
        self.writer.flush().map_err(Error::SinkUnwritable)
    }
}
