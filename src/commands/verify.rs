//! Ladder verification command

use crate::core::Dictionary;
use crate::ladder::{VerifyError, verify};

/// Outcome of checking a user-supplied ladder
pub struct VerifyOutcome {
    pub words: Vec<String>,
    pub result: Result<(), VerifyError>,
}

impl VerifyOutcome {
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.result.is_ok()
    }
}

/// Check `words` as a ladder against `dictionary`
#[must_use]
pub fn verify_ladder(words: &[String], dictionary: &Dictionary) -> VerifyOutcome {
    VerifyOutcome {
        words: words.iter().map(|w| w.to_lowercase()).collect(),
        result: verify(dictionary, words),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::words_from_slice;

    fn owned(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| (*w).to_string()).collect()
    }

    #[test]
    fn valid_ladder() {
        let dict = words_from_slice(&["cat", "cot", "cog", "dog"]);
        let outcome = verify_ladder(&owned(&["cat", "cot", "cog", "dog"]), &dict);
        assert!(outcome.is_valid());
    }

    #[test]
    fn invalid_ladder_keeps_reason() {
        let dict = words_from_slice(&["cat", "cot", "cog", "dog"]);
        let outcome = verify_ladder(&owned(&["cat", "cot", "dog"]), &dict);
        assert!(!outcome.is_valid());
        assert!(matches!(
            outcome.result,
            Err(VerifyError::NotAdjacent { position: 2, .. })
        ));
    }

    #[test]
    fn empty_ladder() {
        let dict = words_from_slice(&["cat"]);
        let outcome = verify_ladder(&[], &dict);
        assert_eq!(outcome.result, Err(VerifyError::Empty));
    }
}
