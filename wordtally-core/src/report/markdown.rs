//! Markdown output formatter

use std::io::Write;

use super::ReportFormatter;
use crate::error::{Error, Result};

/// Markdown formatter - a heading followed by a pipe table
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    rows: usize,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W) -> Self {
        Self { writer, rows: 0 }
    }

    /// Give back the underlying writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> ReportFormatter for MarkdownFormatter<W> {
    fn write_header(&mut self, label: &str) -> Result<()> {
        write!(
            self.writer,
            "## Words Counted in {label}\n\n| Words | Counts |\n| --- | ---: |\n"
        )
        .map_err(Error::SinkUnwritable)
    }

    fn write_row(&mut self, word: &str, count: u64) -> Result<()> {
        self.rows += 1;
        // a literal pipe would end the cell early
        let word = word.replace('|', "\\|");
        writeln!(self.writer, "| {word} | {count} |").map_err(Error::SinkUnwritable)
    }

    fn write_footer(&mut self) -> Result<()> {
        writeln!(self.writer)
            .and_then(|()| writeln!(self.writer, "*Distinct words: {}*", self.rows))
            .and_then(|()| self.writer.flush())
            .map_err(Error::SinkUnwritable)
    }
}
