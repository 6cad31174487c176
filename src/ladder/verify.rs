//! Ladder verification
//!
//! Checks a candidate ladder without searching: every consecutive pair must be
//! one edit apart and every word after the start must be in the dictionary.

use crate::core::{Dictionary, is_adjacent};
use thiserror::Error;

/// Why a ladder was rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VerifyError {
    /// Informational: nothing to check
    #[error("ladder is empty")]
    Empty,
    #[error("words {from:?} and {to:?} at position {position} are not adjacent")]
    NotAdjacent {
        /// Index of `to` in the ladder
        position: usize,
        from: String,
        to: String,
    },
    #[error("word {word:?} at position {position} is not in the dictionary")]
    NotInDictionary { position: usize, word: String },
}

/// Verify `ladder` against `dictionary`
///
/// Pairs are checked in order and the first failure is reported; at each step
/// adjacency is checked before membership. Words are lowercased before
/// comparison.
///
/// # Errors
/// Returns the first [`VerifyError`] found, or [`VerifyError::Empty`] for an
/// empty ladder.
///
/// # Examples
/// ```
/// use word_ladder::core::Dictionary;
/// use word_ladder::ladder::{VerifyError, verify};
///
/// let dict = Dictionary::from_strs(["cat", "cot", "cog", "dog"]);
/// assert!(verify(&dict, &["cat", "cot", "cog", "dog"]).is_ok());
/// assert!(matches!(
///     verify(&dict, &["cat", "cot", "dog"]),
///     Err(VerifyError::NotAdjacent { position: 2, .. })
/// ));
/// ```
pub fn verify<S: AsRef<str>>(dictionary: &Dictionary, ladder: &[S]) -> Result<(), VerifyError> {
    if ladder.is_empty() {
        return Err(VerifyError::Empty);
    }

    let words: Vec<String> = ladder.iter().map(|w| w.as_ref().to_lowercase()).collect();

    for (position, pair) in words.windows(2).enumerate() {
        let (from, to) = (&pair[0], &pair[1]);
        let position = position + 1;

        if !is_adjacent(from, to) {
            return Err(VerifyError::NotAdjacent {
                position,
                from: from.clone(),
                to: to.clone(),
            });
        }

        if !dictionary.contains(to) {
            return Err(VerifyError::NotInDictionary {
                position,
                word: to.clone(),
            });
        }
    }

    Ok(())
}
