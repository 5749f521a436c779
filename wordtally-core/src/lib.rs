//! Word tokenizing, counting and sorted reporting
//!
//! A document is read line by line. Each line is split into maximal runs of
//! word characters and separator characters; word runs are lowercased and
//! tallied. The finished table is then sorted by code point and rendered as
//! a report.
//!
//! # Architecture
//!
//! The pipeline is three independent stages joined by explicit handoffs:
//! - **Tokenizer**: pure maximal-run classification of a line
//! - **Counter**: builds an unordered [`WordCounts`] table
//! - **Reporter**: sorts the finished table and drives a [`ReportFormatter`]
//!
//! # Example
//!
//! ```rust
//! use wordtally_core::{accumulate, render, SeparatorSet, TextFormatter};
//!
//! let separators = SeparatorSet::standard();
//! let table = accumulate(["Hello, world!", "hello WORLD."], &separators);
//! assert_eq!(table.get("hello"), Some(2));
//!
//! let mut formatter = TextFormatter::new(Vec::new());
//! render(&table, "greeting.txt", &mut formatter).unwrap();
//! let report = String::from_utf8(formatter.into_inner()).unwrap();
//! assert_eq!(report, "# greeting.txt\nhello\t2\nworld\t2\n");
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod counter;
pub mod error;
pub mod processor;
pub mod report;
pub mod separators;
pub mod tokenizer;

pub use config::{Config, ConfigBuilder};
pub use counter::{accumulate, accumulate_reader, Counter, WordCounts};
pub use error::{Error, Result};
pub use processor::{ProcessingSummary, WordCountProcessor};
pub use report::{
    render, sorted_entries, HtmlFormatter, MarkdownFormatter, RenderSummary, ReportFormat,
    ReportFormatter, TextFormatter,
};
#[cfg(feature = "serde")]
pub use report::JsonFormatter;
pub use separators::{SeparatorSet, DEFAULT_SEPARATORS};
pub use tokenizer::{next_token, tokenize, Token, TokenClass, Tokens};
