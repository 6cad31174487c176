//! Wildcard bucket keys
//!
//! A pattern is a word with one position masked or removed. Two words that are
//! one edit apart always produce at least one identical pattern:
//!
//! - equal length, differing at `i`: both produce the substitution pattern at `i`
//! - `short` equals `long` with char `i` removed: the insertion pattern of
//!   `short` at `i` equals the substitution pattern of `long` at `i`
//!
//! The mask is stored as a position rather than a sentinel character, so a word
//! containing the display mask symbol cannot collide with a pattern.

use crate::core::Word;
use std::fmt;

/// Symbol used when rendering the masked position
pub const MASK: char = '*';

/// A word with one position masked (`mask = Some(i)`) or one char removed (`mask = None`)
///
/// `mask` indexes into `base` measured in chars: the rendered pattern is `base`
/// with [`MASK`] inserted before char `i`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WildcardPattern {
    base: Box<str>,
    mask: Option<usize>,
}

/// The three pattern families generated per word
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternFamily {
    /// Replace char `i` with the mask (length unchanged)
    Substitution,
    /// Remove char `i` (length - 1)
    Deletion,
    /// Insert the mask before char `i` (length + 1)
    Insertion,
}

impl WildcardPattern {
    /// Build the pattern of `family` for `chars` at `position`
    ///
    /// Valid positions are `0..len` for substitution and deletion and `0..=len`
    /// for insertion.
    #[must_use]
    pub fn new(family: PatternFamily, chars: &[char], position: usize) -> Self {
        match family {
            PatternFamily::Substitution => Self {
                base: without(chars, position),
                mask: Some(position),
            },
            PatternFamily::Deletion => Self {
                base: without(chars, position),
                mask: None,
            },
            PatternFamily::Insertion => Self {
                base: chars.iter().collect::<String>().into_boxed_str(),
                mask: Some(position),
            },
        }
    }

    /// The unmasked characters
    #[must_use]
    pub fn base(&self) -> &str {
        &self.base
    }

    /// Char position of the mask within `base`, if any
    #[must_use]
    pub const fn mask(&self) -> Option<usize> {
        self.mask
    }
}

fn without(chars: &[char], position: usize) -> Box<str> {
    chars
        .iter()
        .enumerate()
        .filter(|&(i, _)| i != position)
        .map(|(_, &c)| c)
        .collect::<String>()
        .into_boxed_str()
}

/// Every substitution, deletion and insertion pattern of `word`
///
/// # Examples
/// ```
/// use word_ladder::core::Word;
/// use word_ladder::ladder::patterns_for;
///
/// let word = Word::new("ab").unwrap();
/// let rendered: Vec<String> = patterns_for(&word).map(|p| p.to_string()).collect();
/// assert_eq!(rendered, ["*b", "a*", "b", "a", "*ab", "a*b", "ab*"]);
/// ```
pub fn patterns_for(word: &Word) -> impl Iterator<Item = WildcardPattern> + '_ {
    let chars = word.chars();
    let len = chars.len();

    let substitutions =
        (0..len).map(move |i| WildcardPattern::new(PatternFamily::Substitution, chars, i));
    let deletions = (0..len).map(move |i| WildcardPattern::new(PatternFamily::Deletion, chars, i));
    let insertions =
        (0..=len).map(move |i| WildcardPattern::new(PatternFamily::Insertion, chars, i));

    substitutions.chain(deletions).chain(insertions)
}

impl fmt::Display for WildcardPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.mask {
            None => write!(f, "{}", self.base),
            Some(position) => {
                for (i, c) in self.base.chars().enumerate() {
                    if i == position {
                        write!(f, "{MASK}")?;
                    }
                    write!(f, "{c}")?;
                }
                if position == self.base.chars().count() {
                    write!(f, "{MASK}")?;
                }
                Ok(())
            }
        }
    }
}
