//! Error types for tokenizing, counting and reporting

use thiserror::Error;

/// Errors raised by the word counting pipeline
#[derive(Debug, Error)]
pub enum Error {
    /// Tokenizer called with a start offset outside the text
    #[error("position {position} out of range for text of length {len}")]
    InvalidPosition {
        /// Requested start offset in bytes
        position: usize,
        /// Length of the text in bytes
        len: usize,
    },

    /// Tokenizer called with a start offset inside a multi-byte character
    #[error("position {position} is not on a character boundary")]
    NotCharBoundary {
        /// Requested start offset in bytes
        position: usize,
    },

    /// Invalid configuration
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The line source failed while reading
    #[error("source unreadable: {0}")]
    SourceUnreadable(#[source] std::io::Error),

    /// The report sink rejected a write
    #[error("failed to write report: {0}")]
    SinkUnwritable(#[source] std::io::Error),

    /// JSON encoding of a report failed
    #[cfg(feature = "serde")]
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, Error>;
