//! Word dictionary
//!
//! An immutable, sorted and deduplicated set of words. Word ids are positions
//! in the sorted order, so id order is lexicographic order.

use super::Word;
use log::debug;

/// A sorted set of unique lowercase words
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary {
    words: Vec<Word>,
}

impl Dictionary {
    /// Build a dictionary from already-validated words
    #[must_use]
    pub fn new(mut words: Vec<Word>) -> Self {
        words.sort_unstable();
        words.dedup();
        Self { words }
    }

    /// Build a dictionary from raw strings, skipping entries that are not valid words
    ///
    /// # Examples
    /// ```
    /// use word_ladder::core::Dictionary;
    ///
    /// let dict = Dictionary::from_strs(["dog", "Cat", "cat", ""]);
    /// assert_eq!(dict.len(), 2);
    /// assert!(dict.contains("cat"));
    /// ```
    pub fn from_strs<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut skipped = 0usize;
        let words = items
            .into_iter()
            .filter_map(|item| match Word::new(item.as_ref()) {
                Ok(word) => Some(word),
                Err(e) => {
                    skipped += 1;
                    debug!("skipping dictionary entry {:?}: {e}", item.as_ref());
                    None
                }
            })
            .collect();

        let dict = Self::new(words);
        if skipped > 0 {
            debug!("dictionary built with {} words ({skipped} skipped)", dict.len());
        }
        dict
    }

    /// Number of words
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

    /// Check membership; the query is lowercased first
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.position(word).is_some()
    }

    /// Id of a word, if present
    #[must_use]
    pub fn position(&self, word: &str) -> Option<usize> {
        let needle = word.to_lowercase();
        self.words
            .binary_search_by(|w| w.text().cmp(needle.as_str()))
            .ok()
    }

    /// Word with the given id
    #[inline]
    #[must_use]
    pub fn get(&self, id: usize) -> Option<&Word> {
        self.words.get(id)
    }

    /// Words in canonical (lexicographic) order
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Iterate words in canonical order
    pub fn iter(&self) -> std::slice::Iter<'_, Word> {
        self.words.iter()
    }
}

impl FromIterator<Word> for Dictionary {
    fn from_iter<T: IntoIterator<Item = Word>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Dictionary {
    type Item = &'a Word;
    type IntoIter = std::slice::Iter<'a, Word>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dedups_and_sorts() {
        let dict = Dictionary::from_strs(["dog", "cat", "DOG", "cot", "cat"]);
        let texts: Vec<&str> = dict.iter().map(Word::text).collect();
        assert_eq!(texts, ["cat", "cot", "dog"]);
    }

    #[test]
    fn skips_invalid_entries() {
        let dict = Dictionary::from_strs(["cat", "", "two words", "dog"]);
        assert_eq!(dict.len(), 2);
    }

    #[test]
    fn membership_is_case_insensitive() {
        let dict = Dictionary::from_strs(["cat"]);
        assert!(dict.contains("cat"));
        assert!(dict.contains("CAT"));
        assert!(!dict.contains("cot"));
    }

    #[test]
    fn positions_follow_sorted_order() {
        let dict = Dictionary::from_strs(["dog", "cat", "cot"]);
        assert_eq!(dict.position("cat"), Some(0));
        assert_eq!(dict.position("cot"), Some(1));
        assert_eq!(dict.position("dog"), Some(2));
        assert_eq!(dict.position("cog"), None);
        assert_eq!(dict.get(2).map(Word::text), Some("dog"));
        assert!(dict.get(3).is_none());
    }

    #[test]
    fn empty_dictionary() {
        let dict = Dictionary::default();
        assert!(dict.is_empty());
        assert!(!dict.contains("cat"));
    }

    #[test]
    fn collect_from_words() {
        let dict: Dictionary = ["b", "a", "b"]
            .iter()
            .map(|s| Word::new(s).unwrap())
            .collect();
        assert_eq!(dict.len(), 2);
        assert_eq!(dict.words()[0].text(), "a");
    }
}
