//! JSON output formatter

use std::io::Write;

use serde::{Deserialize, Serialize};

use super::ReportFormatter;
use crate::error::{Error, Result};

/// JSON formatter - collects rows and writes one document on finish
pub struct JsonFormatter<W: Write> {
    writer: W,
    report: JsonReport,
}

/// Shape of the JSON document
#[derive(Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct JsonReport {
    /// Document label
    pub label: String,
    /// Words in ascending order
    pub words: Vec<WordEntry>,
    /// Number of distinct words
    pub distinct: usize,
    /// Sum of all counts
    pub total: u64,
}

/// One row of the JSON report
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct WordEntry {
    /// Normalized word
    pub word: String,
    /// Occurrences
    pub count: u64,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            report: JsonReport::default(),
        }
    }

    /// Give back the underlying writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> ReportFormatter for JsonFormatter<W> {
    fn write_header(&mut self, label: &str) -> Result<()> {
        self.report = JsonReport {
            label: label.to_string(),
            ..JsonReport::default()
        };
        Ok(())
    }

    fn write_row(&mut self, word: &str, count: u64) -> Result<()> {
        self.report.words.push(WordEntry {
            word: word.to_string(),
            count,
        });
        self.report.distinct += 1;
        self.report.total += count;
        Ok(())
    }

    fn write_footer(&mut self) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.writer, &self.report).map_err(|e| {
            if e.is_io() {
                Error::SinkUnwritable(e.into())
            } else {
                Error::Serialization(e)
            }
        })?;
        writeln!(self.writer)
            .and_then(|()| self.writer.flush())
            .map_err(Error::SinkUnwritable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::counter::accumulate;
    use crate::report::render;
    use crate::separators::SeparatorSet;

    struct ClosedSink;

    impl Write for ClosedSink {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_write_failure_is_sink_error() {
        let table = accumulate(["a b"], &SeparatorSet::standard());
        let mut formatter = JsonFormatter::new(ClosedSink);

        let err = render(&table, "doc", &mut formatter).unwrap_err();
        match err {
            Error::SinkUnwritable(io_err) => {
                assert_eq!(io_err.kind(), std::io::ErrorKind::BrokenPipe)
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_json_document() {
        let table = accumulate(["Hello, world!", "hello WORLD."], &SeparatorSet::standard());
        let mut formatter = JsonFormatter::new(Vec::new());
        render(&table, "greeting.txt", &mut formatter).unwrap();

        let report: JsonReport = serde_json::from_slice(&formatter.into_inner()).unwrap();
        assert_eq!(report.label, "greeting.txt");
        assert_eq!(report.distinct, 2);
        assert_eq!(report.total, 4);
        assert_eq!(
            report.words,
            vec![
                WordEntry {
                    word: "hello".into(),
                    count: 2
                },
                WordEntry {
                    word: "world".into(),
                    count: 2
                },
            ]
        );
    }
}
