//! Neighbor enumeration through the wildcard index

use super::index::WildcardIndex;
use crate::core::Word;

/// Ids of dictionary words exactly one edit away from `word`, ascending
///
/// The bucket lookup narrows the candidates; [`Word::is_adjacent_to`] is the
/// final filter, which also drops `word` itself.
#[must_use]
pub fn neighbor_ids(word: &Word, index: &WildcardIndex<'_>) -> Vec<usize> {
    let words = index.dictionary().words();
    let mut ids = index.candidate_ids(word);
    ids.retain(|&id| word.is_adjacent_to(&words[id]));
    ids
}

/// Dictionary words exactly one edit away from `word`, in lexicographic order
///
/// `word` does not have to be in the dictionary.
///
/// # Examples
/// ```
/// use word_ladder::core::{Dictionary, Word};
/// use word_ladder::ladder::{WildcardIndex, neighbors};
///
/// let dict = Dictionary::from_strs(["cat", "cot", "cats", "dog", "at"]);
/// let index = WildcardIndex::build(&dict);
///
/// let cat = Word::new("cat").unwrap();
/// let found: Vec<&str> = neighbors(&cat, &index).iter().map(|w| w.text()).collect();
/// assert_eq!(found, ["at", "cats", "cot"]);
/// ```
#[must_use]
pub fn neighbors<'d>(word: &Word, index: &WildcardIndex<'d>) -> Vec<&'d Word> {
    let words = index.dictionary().words();
    neighbor_ids(word, index)
        .into_iter()
        .map(|id| &words[id])
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Dictionary;

    fn texts<'a>(words: &[&'a Word]) -> Vec<&'a str> {
        words.iter().map(|w| w.text()).collect()
    }

    #[test]
    fn finds_substitution_neighbors() {
        let dict = Dictionary::from_strs(["cat", "cot", "cog", "dog"]);
        let index = WildcardIndex::build(&dict);

        let cot = Word::new("cot").unwrap();
        assert_eq!(texts(&neighbors(&cot, &index)), ["cat", "cog"]);
    }

    #[test]
    fn excludes_the_word_itself() {
        let dict = Dictionary::from_strs(["cat", "cot"]);
        let index = WildcardIndex::build(&dict);

        let cat = Word::new("cat").unwrap();
        let found = neighbors(&cat, &index);
        assert!(found.iter().all(|w| w.text() != "cat"));
    }

    #[test]
    fn finds_longer_and_shorter_neighbors() {
        let dict = Dictionary::from_strs(["at", "cat", "cast", "chat", "cats", "scat"]);
        let index = WildcardIndex::build(&dict);

        let cat = Word::new("cat").unwrap();
        assert_eq!(
            texts(&neighbors(&cat, &index)),
            ["at", "cast", "cats", "chat", "scat"]
        );

        let cast = Word::new("cast").unwrap();
        assert_eq!(texts(&neighbors(&cast, &index)), ["cat"]);
    }

    #[test]
    fn filters_transposition_false_positives() {
        // "ab" and "ba" share the deletion pattern "a" but are two edits apart
        let dict = Dictionary::from_strs(["ab", "ba"]);
        let index = WildcardIndex::build(&dict);

        let ab = Word::new("ab").unwrap();
        assert!(neighbors(&ab, &index).is_empty());
    }

    #[test]
    fn word_outside_dictionary() {
        let dict = Dictionary::from_strs(["hot", "dot"]);
        let index = WildcardIndex::build(&dict);

        let hit = Word::new("hit").unwrap();
        assert_eq!(texts(&neighbors(&hit, &index)), ["hot"]);
    }

    #[test]
    fn isolated_word_has_no_neighbors() {
        let dict = Dictionary::from_strs(["zebra", "cat"]);
        let index = WildcardIndex::build(&dict);

        let zebra = Word::new("zebra").unwrap();
        assert!(neighbor_ids(&zebra, &index).is_empty());
    }
}
