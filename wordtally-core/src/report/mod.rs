//! Sorted rendering of a finished word count table
//!
//! Rendering is a separate stage from counting: the table is borrowed
//! immutably, its keys are sorted by code point, and each `(word, count)` pair
//! is handed to a [`ReportFormatter`] between one header and one footer.

use std::fmt;
use std::io::Write;
use std::str::FromStr;

use crate::counter::WordCounts;
use crate::error::{Error, Result};

pub mod html;
#[cfg(feature = "serde")]
pub mod json;
pub mod markdown;
pub mod text;

pub use html::HtmlFormatter;
#[cfg(feature = "serde")]
pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;

/// Sink for the three parts of a report
pub trait ReportFormatter {
    /// Opening block; receives the document label
    fn write_header(&mut self, label: &str) -> Result<()>;

    /// One table row
    fn write_row(&mut self, word: &str, count: u64) -> Result<()>;

    /// Closing block; flushes the underlying writer
    fn write_footer(&mut self) -> Result<()>;
}

impl<F: ReportFormatter + ?Sized> ReportFormatter for Box<F> {
    fn write_header(&mut self, label: &str) -> Result<()> {
        (**self).write_header(label)
    }

    fn write_row(&mut self, word: &str, count: u64) -> Result<()> {
        (**self).write_row(word, count)
    }

    fn write_footer(&mut self) -> Result<()> {
        (**self).write_footer()
    }
}

/// What a render pass wrote
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderSummary {
    /// Rows emitted, one per distinct word
    pub rows: usize,
    /// Sum of the counts emitted
    pub total: u64,
}

/// Entries of `table` in ascending code-point order of the word
pub fn sorted_entries(table: &WordCounts) -> Vec<(&str, u64)> {
    let mut entries: Vec<(&str, u64)> = table.iter().collect();
    // keys are unique, so an unstable sort is deterministic
    entries.sort_unstable_by(|a, b| a.0.cmp(b.0));
    entries
}

/// Render `table` through `formatter`: one header, one row per word in
/// sorted order, one footer.
pub fn render<F>(table: &WordCounts, label: &str, formatter: &mut F) -> Result<RenderSummary>
where
    F: ReportFormatter + ?Sized,
{
    let entries = sorted_entries(table);
    log::debug!("rendering {} rows for {}", entries.len(), label);

    formatter.write_header(label)?;
    let mut total = 0u64;
    for (word, count) in &entries {
        formatter.write_row(word, *count)?;
        total += count;
    }
    formatter.write_footer()?;

    Ok(RenderSummary {
        rows: entries.len(),
        total,
    })
}

/// Supported report formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ReportFormat {
    /// HTML page with a two-column table
    #[default]
    Html,
    /// Tab separated plain text
    Text,
    /// Markdown table
    Markdown,
    /// JSON document
    #[cfg(feature = "serde")]
    Json,
}

impl ReportFormat {
    /// Every format compiled into this build
    pub const ALL: &'static [ReportFormat] = &[
        ReportFormat::Html,
        ReportFormat::Text,
        ReportFormat::Markdown,
        #[cfg(feature = "serde")]
        ReportFormat::Json,
    ];

    /// Lowercase name used in configuration files and on the command line
    pub fn name(self) -> &'static str {
        match self {
            ReportFormat::Html => "html",
            ReportFormat::Text => "text",
            ReportFormat::Markdown => "markdown",
            #[cfg(feature = "serde")]
            ReportFormat::Json => "json",
        }
    }

    /// File extension for reports in this format
    pub fn extension(self) -> &'static str {
        match self {
            ReportFormat::Html => "html",
            ReportFormat::Text => "txt",
            ReportFormat::Markdown => "md",
            #[cfg(feature = "serde")]
            ReportFormat::Json => "json",
        }
    }

    /// Build a formatter of this format writing to `writer`.
    ///
    /// `title` is used by formats that have a document title (HTML).
    pub fn formatter<'w, W>(self, writer: W, title: &str) -> Box<dyn ReportFormatter + 'w>
    where
        W: Write + 'w,
    {
        match self {
            ReportFormat::Html => Box::new(HtmlFormatter::new(writer).with_title(title)),
            ReportFormat::Text => Box::new(TextFormatter::new(writer)),
            ReportFormat::Markdown => Box::new(MarkdownFormatter::new(writer)),
            #[cfg(feature = "serde")]
            ReportFormat::Json => Box::new(JsonFormatter::new(writer)),
        }
    }
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ReportFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "html" | "htm" => Ok(ReportFormat::Html),
            "text" | "txt" => Ok(ReportFormat::Text),
            "markdown" | "md" => Ok(ReportFormat::Markdown),
            #[cfg(feature = "serde")]
            "json" => Ok(ReportFormat::Json),
            other => Err(Error::Configuration(format!(
                "unknown report format '{other}'"
            ))),
        }
    }
}
