//! Neighbor listing command

use super::CommandError;
use crate::core::Word;
use crate::ladder::{WildcardIndex, neighbors};

/// Result of listing a word's neighbors
pub struct NeighborResult {
    pub word: String,
    pub in_dictionary: bool,
    pub neighbors: Vec<String>,
}

/// List dictionary words one edit away from `word`
///
/// # Errors
///
/// Returns an error if `word` is not a valid word.
pub fn list_neighbors(word: &str, index: &WildcardIndex<'_>) -> Result<NeighborResult, CommandError> {
    let parsed = Word::new(word).map_err(|e| CommandError::invalid_word(word, e))?;

    Ok(NeighborResult {
        in_dictionary: index.dictionary().contains(parsed.text()),
        neighbors: neighbors(&parsed, index)
            .into_iter()
            .map(|w| w.text().to_string())
            .collect(),
        word: parsed.text().to_string(),
    })
}
