//! End-to-end pipeline: count a document, then render its report

use std::io::{BufRead, Write};

use crate::config::Config;
use crate::counter::{Counter, WordCounts};
use crate::error::Result;
use crate::report::render;

/// Totals from one processed document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessingSummary {
    /// Lines read from the source
    pub lines_read: usize,
    /// Word occurrences counted
    pub total_words: u64,
    /// Distinct normalized words
    pub distinct_words: usize,
}

/// Runs the count-sort-render pipeline under one configuration.
///
/// Every call works on a fresh table, so one processor can be reused for any
/// number of documents.
#[derive(Debug, Clone, Default)]
pub struct WordCountProcessor {
    config: Config,
}

impl WordCountProcessor {
    /// Create a processor with the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a processor with an explicit configuration
    pub fn with_config(config: Config) -> Self {
        Self { config }
    }

    /// Configuration in use
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Count the words of a line-oriented source
    pub fn count<R: BufRead>(&self, reader: R) -> Result<WordCounts> {
        let mut counter = Counter::new(&self.config.separators);
        counter.feed_reader(reader)?;
        Ok(counter.finish())
    }

    /// Count `reader` and write its report to `writer`.
    ///
    /// Nothing is written when reading fails.
    pub fn process<R, W>(&self, reader: R, writer: W, label: &str) -> Result<ProcessingSummary>
    where
        R: BufRead,
        W: Write,
    {
        log::info!("processing {label}");

        let mut counter = Counter::new(&self.config.separators);
        counter.feed_reader(reader)?;
        let lines_read = counter.lines_read();
        let table = counter.finish();

        let mut formatter = self.config.format.formatter(writer, &self.config.title);
        let rendered = render(&table, label, &mut formatter)?;

        Ok(ProcessingSummary {
            lines_read,
            total_words: rendered.total,
            distinct_words: rendered.rows,
        })
    }
}
