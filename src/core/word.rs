//! Dictionary word representation
//!
//! A Word stores a lowercase string along with its character sequence for
//! constant-time positional access during pattern generation.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use thiserror::Error;

/// A lowercase dictionary word
///
/// Equality, ordering and hashing use the text only, so the lexicographic order
/// of `Word`s is the canonical dictionary order.
#[derive(Debug, Clone)]
pub struct Word {
    text: String,
    chars: Box<[char]>,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("Word must not be empty")]
    Empty,
    #[error("Word must not contain whitespace: {0:?}")]
    Whitespace(String),
}

impl Word {
    /// Create a new Word from a string
    ///
    /// The text is lowercased. Surrounding whitespace is not trimmed.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - The text is empty
    /// - The text contains whitespace
    ///
    /// # Examples
    /// ```
    /// use word_ladder::core::Word;
    ///
    /// let word = Word::new("Ladder").unwrap();
    /// assert_eq!(word.text(), "ladder");
    /// assert_eq!(word.len(), 6);
    ///
    /// assert!(Word::new("").is_err());
    /// assert!(Word::new("two words").is_err());
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self, WordError> {
        let text = text.as_ref().to_lowercase();

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        if text.chars().any(char::is_whitespace) {
            return Err(WordError::Whitespace(text));
        }

        let chars = text.chars().collect();
        Ok(Self { text, chars })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the character sequence
    #[inline]
    #[must_use]
    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// Number of characters (not bytes)
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Always false; empty words are rejected at construction
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Get the character at a specific position
    ///
    /// # Panics
    /// Panics if `position >= self.len()`
    #[inline]
    #[must_use]
    pub fn char_at(&self, position: usize) -> char {
        self.chars[position]
    }

    /// Check whether `other` is exactly one edit away from this word
    #[inline]
    #[must_use]
    pub fn is_adjacent_to(&self, other: &Self) -> bool {
        super::adjacency::is_adjacent_chars(&self.chars, &other.chars)
    }
}

impl PartialEq for Word {
    fn eq(&self, other: &Self) -> bool {
        self.text == other.text
    }
}

impl Eq for Word {}

impl PartialOrd for Word {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Word {
    fn cmp(&self, other: &Self) -> Ordering {
        self.text.cmp(&other.text)
    }
}

impl Hash for Word {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.text.hash(state);
    }
}

impl AsRef<str> for Word {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

impl std::str::FromStr for Word {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("cat").unwrap();
        assert_eq!(word.text(), "cat");
        assert_eq!(word.chars(), &['c', 'a', 't']);
        assert_eq!(word.len(), 3);
    }

    #[test]
    fn word_creation_uppercase_normalized() {
        let word = Word::new("CAT").unwrap();
        assert_eq!(word.text(), "cat");

        let word2 = Word::new("CaT").unwrap();
        assert_eq!(word2.text(), "cat");
    }

    #[test]
    fn word_creation_rejects_empty() {
        assert_eq!(Word::new(""), Err(WordError::Empty));
    }

    #[test]
    fn word_creation_rejects_whitespace() {
        assert!(matches!(Word::new("ca t"), Err(WordError::Whitespace(_))));
        assert!(matches!(Word::new("cat\n"), Err(WordError::Whitespace(_))));
        assert!(matches!(Word::new(" "), Err(WordError::Whitespace(_))));
    }

    #[test]
    fn word_length_counts_chars_not_bytes() {
        let word = Word::new("café").unwrap();
        assert_eq!(word.len(), 4);
        assert_eq!(word.char_at(3), 'é');
    }

    #[test]
    fn word_char_at() {
        let word = Word::new("dog").unwrap();
        assert_eq!(word.char_at(0), 'd');
        assert_eq!(word.char_at(1), 'o');
        assert_eq!(word.char_at(2), 'g');
    }

    #[test]
    fn word_ordering_is_lexicographic() {
        let mut words: Vec<Word> = ["dog", "cat", "cats", "ca"]
            .iter()
            .map(|s| Word::new(s).unwrap())
            .collect();
        words.sort();
        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, ["ca", "cat", "cats", "dog"]);
    }

    #[test]
    fn word_adjacency() {
        let cat = Word::new("cat").unwrap();
        assert!(cat.is_adjacent_to(&Word::new("cot").unwrap()));
        assert!(cat.is_adjacent_to(&Word::new("cats").unwrap()));
        assert!(!cat.is_adjacent_to(&Word::new("dog").unwrap()));
        assert!(!cat.is_adjacent_to(&cat));
    }

    #[test]
    fn word_display() {
        let word = Word::new("ladder").unwrap();
        assert_eq!(format!("{word}"), "ladder");
    }

    #[test]
    fn word_equality() {
        let word1 = Word::new("cat").unwrap();
        let word2 = Word::new("cat").unwrap();
        let word3 = Word::new("CAT").unwrap();
        let word4 = Word::new("cot").unwrap();

        assert_eq!(word1, word2);
        assert_eq!(word1, word3); // Case insensitive
        assert_ne!(word1, word4);
    }
}
