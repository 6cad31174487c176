//! Ladder value type

use crate::core::Word;
use std::fmt;

/// An ordered sequence of words from a start word to a goal word
///
/// An empty ladder means no ladder was found.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ladder {
    words: Vec<Word>,
}

impl Ladder {
    #[must_use]
    pub fn new(words: Vec<Word>) -> Self {
        Self { words }
    }

    /// The "no ladder found" value
    #[must_use]
    pub const fn empty() -> Self {
        Self { words: Vec::new() }
    }

    /// Number of words, including start and goal
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Number of edits between start and goal
    #[inline]
    #[must_use]
    pub fn steps(&self) -> usize {
        self.words.len().saturating_sub(1)
    }

    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    #[must_use]
    pub fn start(&self) -> Option<&Word> {
        self.words.first()
    }

    #[must_use]
    pub fn goal(&self) -> Option<&Word> {
        self.words.last()
    }

    /// Word texts, for comparisons and display
    #[must_use]
    pub fn texts(&self) -> Vec<&str> {
        self.words.iter().map(Word::text).collect()
    }

    #[must_use]
    pub fn into_words(self) -> Vec<Word> {
        self.words
    }
}

impl From<Vec<Word>> for Ladder {
    fn from(words: Vec<Word>) -> Self {
        Self::new(words)
    }
}

impl AsRef<[Word]> for Ladder {
    fn as_ref(&self) -> &[Word] {
        &self.words
    }
}

impl fmt::Display for Ladder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, word) in self.words.iter().enumerate() {
            if i > 0 {
                write!(f, " -> ")?;
            }
            write!(f, "{word}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ladder(words: &[&str]) -> Ladder {
        words.iter().map(|s| Word::new(s).unwrap()).collect::<Vec<_>>().into()
    }

    #[test]
    fn empty_ladder() {
        let l = Ladder::empty();
        assert!(l.is_empty());
        assert_eq!(l.steps(), 0);
        assert!(l.start().is_none());
        assert_eq!(l.to_string(), "");
    }

    #[test]
    fn endpoints_and_steps() {
        let l = ladder(&["cat", "cot", "cog", "dog"]);
        assert_eq!(l.len(), 4);
        assert_eq!(l.steps(), 3);
        assert_eq!(l.start().map(Word::text), Some("cat"));
        assert_eq!(l.goal().map(Word::text), Some("dog"));
    }

    #[test]
    fn display_joins_with_arrows() {
        let l = ladder(&["cat", "cot", "dot"]);
        assert_eq!(l.to_string(), "cat -> cot -> dot");
    }
}
