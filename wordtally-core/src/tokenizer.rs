//! Maximal-run tokenizer
//!
//! A line is split into alternating runs of word characters and separator
//! characters. Every run is maximal: it stops exactly where separator
//! membership flips or where the line ends. Concatenating the runs of a line
//! gives the line back unchanged.

use crate::error::{Error, Result};
use crate::separators::SeparatorSet;

/// Classification of a token
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenClass {
    /// Run of non-separator characters
    Word,
    /// Run of separator characters
    Separator,
}

impl TokenClass {
    fn of(ch: char, separators: &SeparatorSet) -> Self {
        if separators.contains(ch) {
            TokenClass::Separator
        } else {
            TokenClass::Word
        }
    }
}

/// A maximal same-class run borrowed from a line
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Token<'a> {
    /// The run itself; never empty
    pub text: &'a str,
    /// Word or separator
    pub class: TokenClass,
    /// Byte offset of the run within its line
    pub offset: usize,
}

impl Token<'_> {
    /// Length of the run in bytes
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Always false; tokens hold at least one character
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Byte offset just past the end of the run
    pub fn end(&self) -> usize {
        self.offset + self.text.len()
    }

    /// True for word runs
    pub fn is_word(&self) -> bool {
        self.class == TokenClass::Word
    }
}

/// Return the maximal run starting at byte offset `position` of `text`.
///
/// `position` must be less than `text.len()` and fall on a character
/// boundary; otherwise the call is rejected without inspecting the text.
pub fn next_token<'a>(
    text: &'a str,
    position: usize,
    separators: &SeparatorSet,
) -> Result<Token<'a>> {
    if position >= text.len() {
        return Err(Error::InvalidPosition {
            position,
            len: text.len(),
        });
    }
    if !text.is_char_boundary(position) {
        return Err(Error::NotCharBoundary { position });
    }

    Ok(scan_run(text, position, separators))
}

/// Caller guarantees `position` is a valid, in-range char boundary.
fn scan_run<'a>(text: &'a str, position: usize, separators: &SeparatorSet) -> Token<'a> {
    let rest = &text[position..];
    let mut chars = rest.char_indices();
    // rest is non-empty by precondition
    let class = match chars.next() {
        Some((_, first)) => TokenClass::of(first, separators),
        None => TokenClass::Word,
    };

    let run_len = chars
        .find(|&(_, ch)| TokenClass::of(ch, separators) != class)
        .map_or(rest.len(), |(idx, _)| idx);

    Token {
        text: &rest[..run_len],
        class,
        offset: position,
    }
}

/// Iterator over all tokens of a single line, starting at offset 0
#[derive(Debug, Clone)]
pub struct Tokens<'a, 's> {
    line: &'a str,
    position: usize,
    separators: &'s SeparatorSet,
}

impl<'a, 's> Iterator for Tokens<'a, 's> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.position >= self.line.len() {
            return None;
        }
        let token = scan_run(self.line, self.position, self.separators);
        self.position = token.end();
        Some(token)
    }
}

impl std::iter::FusedIterator for Tokens<'_, '_> {}

/// Tokenize a whole line
pub fn tokenize<'a, 's>(line: &'a str, separators: &'s SeparatorSet) -> Tokens<'a, 's> {
    Tokens {
        line,
        position: 0,
        separators,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seps() -> SeparatorSet {
        SeparatorSet::standard()
    }

    #[test]
    fn test_word_run_stops_at_separator() {
        let token = next_token("Hello, world!", 0, &seps()).unwrap();
        assert_eq!(token.text, "Hello");
        assert_eq!(token.class, TokenClass::Word);
        assert_eq!(token.offset, 0);
    }

    #[test]
    fn test_separator_run_is_maximal() {
        let token = next_token("Hello, world!", 5, &seps()).unwrap();
        assert_eq!(token.text, ", ");
        assert_eq!(token.class, TokenClass::Separator);
        assert_eq!(token.end(), 7);
    }

    #[test]
    fn test_run_reaches_end_of_text() {
        let token = next_token("Hello, world!", 12, &seps()).unwrap();
        assert_eq!(token.text, "!");
        let token = next_token("Hello, world", 7, &seps()).unwrap();
        assert_eq!(token.text, "world");
    }

    #[test]
    fn test_single_character_text() {
        assert_eq!(next_token("a", 0, &seps()).unwrap().text, "a");
        assert_eq!(next_token(".", 0, &seps()).unwrap().text, ".");
    }

    #[test]
    fn test_homogeneous_text_is_one_token() {
        let token = next_token("... !!! ,,,", 0, &seps()).unwrap();
        assert_eq!(token.text, "... !!! ,,,");
        assert_eq!(token.class, TokenClass::Separator);

        let token = next_token("antidisestablishment", 0, &seps()).unwrap();
        assert_eq!(token.text, "antidisestablishment");
        assert!(token.is_word());
    }

    #[test]
    fn test_start_mid_word() {
        let token = next_token("tokenizer", 5, &seps()).unwrap();
        assert_eq!(token.text, "izer");
    }

    #[test]
    fn test_position_out_of_range() {
        let err = next_token("abc", 3, &seps()).unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidPosition {
                position: 3,
                len: 3
            }
        ));
        assert!(next_token("", 0, &seps()).is_err());
    }

    #[test]
    fn test_position_inside_multibyte_char() {
        let err = next_token("café au lait", 4, &seps()).unwrap_err();
        assert!(matches!(err, Error::NotCharBoundary { position: 4 }));
    }

    #[test]
    fn test_multibyte_words() {
        let tokens: Vec<_> = tokenize("naïve café", &seps()).map(|t| t.text).collect();
        assert_eq!(tokens, vec!["naïve", " ", "café"]);
    }

    #[test]
    fn test_tokenize_alternates_classes() {
        let tokens: Vec<_> = tokenize("(a-b) c", &seps()).collect();
        let classes: Vec<_> = tokens.iter().map(|t| t.class).collect();
        assert_eq!(
            classes,
            vec![
                TokenClass::Separator,
                TokenClass::Word,
                TokenClass::Separator,
                TokenClass::Word,
                TokenClass::Separator,
                TokenClass::Word,
            ]
        );
        let texts: Vec<_> = tokens.iter().map(|t| t.text).collect();
        assert_eq!(texts, vec!["(", "a", "-", "b", ") ", "c"]);
    }

    #[test]
    fn test_tokenize_empty_line() {
        assert_eq!(tokenize("", &seps()).count(), 0);
    }

    #[test]
    fn test_tabs_and_apostrophes_are_word_characters() {
        let tokens: Vec<_> = tokenize("don't\tstop", &seps()).map(|t| t.text).collect();
        assert_eq!(tokens, vec!["don't\tstop"]);
    }

    #[test]
    fn test_custom_separator_set() {
        let set = SeparatorSet::from_chars(['|']);
        let tokens: Vec<_> = tokenize("a b|c", &set).map(|t| t.text).collect();
        assert_eq!(tokens, vec!["a b", "|", "c"]);
    }
}
