//! Case-insensitive word counting over a line-oriented document

use std::collections::hash_map::{self, HashMap};
use std::io::BufRead;

use crate::error::{Error, Result};
use crate::separators::SeparatorSet;
use crate::tokenizer::tokenize;

/// Table of normalized words and their occurrence counts.
///
/// Keys are lowercase and never contain separator characters; every count is
/// at least one. The table carries no ordering; sorting happens at report
/// time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordCounts {
    counts: HashMap<String, u64>,
}

impl WordCounts {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one occurrence of an already normalized word
    pub fn record(&mut self, word: &str) {
        match self.counts.get_mut(word) {
            Some(count) => *count += 1,
            None => {
                self.counts.insert(word.to_owned(), 1);
            }
        }
    }

    /// Count for `word`, if it occurred
    pub fn get(&self, word: &str) -> Option<u64> {
        self.counts.get(word).copied()
    }

    /// Number of distinct words
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// True when no word has been recorded
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    /// Unordered iteration over `(word, count)` pairs
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.counts.iter(),
        }
    }
}

/// Iterator over the entries of a [`WordCounts`] table
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    inner: hash_map::Iter<'a, String, u64>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, u64);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(word, count)| (word.as_str(), *count))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a> IntoIterator for &'a WordCounts {
    type Item = (&'a str, u64);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Accumulates word counts line by line
#[derive(Debug)]
pub struct Counter<'s> {
    separators: &'s SeparatorSet,
    counts: WordCounts,
    lines_read: usize,
}

impl<'s> Counter<'s> {
    /// Start an empty count for one document
    pub fn new(separators: &'s SeparatorSet) -> Self {
        Self {
            separators,
            counts: WordCounts::new(),
            lines_read: 0,
        }
    }

    /// Count every word of one line. Lines are independent; a word never
    /// continues onto the next line.
    pub fn feed_line(&mut self, line: &str) {
        let mut words = 0usize;
        for token in tokenize(line, self.separators) {
            // classify after folding: a lowercase separator must never start a key
            let folded = token.text.to_lowercase();
            match folded.chars().next() {
                Some(first) if !self.separators.contains(first) => {
                    self.counts.record(&folded);
                    words += 1;
                }
                _ => {}
            }
        }
        self.lines_read += 1;
        log::trace!("line {}: {} words", self.lines_read, words);
    }

    /// Feed every line of a reader.
    ///
    /// A failed read aborts the document: the error is returned and the
    /// counts gathered so far must not be reported.
    pub fn feed_reader<R: BufRead>(&mut self, reader: R) -> Result<()> {
        for line in reader.lines() {
            let line = line.map_err(Error::SourceUnreadable)?;
            self.feed_line(&line);
        }
        Ok(())
    }

    /// Lines consumed so far
    pub fn lines_read(&self) -> usize {
        self.lines_read
    }

    /// Counts gathered so far
    pub fn counts(&self) -> &WordCounts {
        &self.counts
    }

    /// Hand over the finished table
    pub fn finish(self) -> WordCounts {
        log::debug!(
            "counted {} distinct words over {} lines",
            self.counts.len(),
            self.lines_read
        );
        self.counts
    }
}

/// Count the words of an in-memory document
pub fn accumulate<I, S>(lines: I, separators: &SeparatorSet) -> WordCounts
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut counter = Counter::new(separators);
    for line in lines {
        counter.feed_line(line.as_ref());
    }
    counter.finish()
}

/// Count the words of a line-oriented source
pub fn accumulate_reader<R: BufRead>(
    reader: R,
    separators: &SeparatorSet,
) -> Result<WordCounts> {
    let mut counter = Counter::new(separators);
    counter.feed_reader(reader)?;
    Ok(counter.finish())
}
