//! The set of characters that delimit words

use std::collections::BTreeSet;

/// Characters treated as word boundaries when no other set is configured
pub const DEFAULT_SEPARATORS: [char; 11] =
    [' ', '.', ',', ':', ';', '?', '!', '"', '(', ')', '-'];

/// Immutable set of separator characters.
///
/// Built once and shared by reference for the lifetime of a run. Membership
/// is the only question the tokenizer asks of it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeparatorSet {
    chars: BTreeSet<char>,
}

impl SeparatorSet {
    /// The standard separator set: space and common punctuation
    pub fn standard() -> Self {
        Self::from_chars(DEFAULT_SEPARATORS)
    }

    /// Build a set from arbitrary characters; duplicates collapse
    pub fn from_chars(chars: impl IntoIterator<Item = char>) -> Self {
        Self {
            chars: chars.into_iter().collect(),
        }
    }

    /// Check whether `ch` is a separator
    #[inline]
    pub fn contains(&self, ch: char) -> bool {
        self.chars.contains(&ch)
    }

    /// Number of distinct separator characters
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// True when no character is a separator
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Separator characters in ascending code-point order
    pub fn iter(&self) -> impl Iterator<Item = char> + '_ {
        self.chars.iter().copied()
    }
}

impl Default for SeparatorSet {
    fn default() -> Self {
        Self::standard()
    }
}

impl FromIterator<char> for SeparatorSet {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        Self::from_chars(iter)
    }
}
