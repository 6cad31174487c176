//! Wildcard bucket index
//!
//! Maps every pattern produced by a dictionary word to the ids of the words
//! that produce it. Built once per dictionary and read-only afterwards, so a
//! single index can serve any number of searches, including concurrent ones.

use super::pattern::{WildcardPattern, patterns_for};
use crate::core::{Dictionary, Word};
use log::debug;
use rustc_hash::FxHashMap;
use std::time::Instant;

/// Pattern → word-id buckets for one dictionary snapshot
#[derive(Debug)]
pub struct WildcardIndex<'d> {
    dictionary: &'d Dictionary,
    buckets: FxHashMap<WildcardPattern, Vec<usize>>,
    pattern_count: usize,
}

impl<'d> WildcardIndex<'d> {
    /// Build the index for `dictionary`
    ///
    /// Words are registered in dictionary order, so every bucket lists its ids
    /// in ascending (lexicographic) order.
    ///
    /// # Examples
    /// ```
    /// use word_ladder::core::Dictionary;
    /// use word_ladder::ladder::WildcardIndex;
    ///
    /// let dict = Dictionary::from_strs(["cat", "cot", "dog"]);
    /// let index = WildcardIndex::build(&dict);
    /// assert_eq!(index.dictionary().len(), 3);
    /// assert!(index.bucket_count() > 0);
    /// ```
    #[must_use]
    pub fn build(dictionary: &'d Dictionary) -> Self {
        let start = Instant::now();
        let mut buckets: FxHashMap<WildcardPattern, Vec<usize>> = FxHashMap::default();
        let mut pattern_count = 0;

        for (id, word) in dictionary.iter().enumerate() {
            for pattern in patterns_for(word) {
                pattern_count += 1;
                let bucket = buckets.entry(pattern).or_default();
                // Distinct deletions can coincide ("aa" → "a" twice)
                if bucket.last() != Some(&id) {
                    bucket.push(id);
                }
            }
        }

        let index = Self {
            dictionary,
            buckets,
            pattern_count,
        };

        debug!(
            "wildcard index: {} words, {} patterns, {} buckets, largest bucket {} ({:.1?})",
            dictionary.len(),
            index.pattern_count,
            index.bucket_count(),
            index.largest_bucket(),
            start.elapsed()
        );

        index
    }

    /// The dictionary this index was built from
    #[inline]
    #[must_use]
    pub const fn dictionary(&self) -> &'d Dictionary {
        self.dictionary
    }

    /// Ids of words registered under `pattern`
    #[must_use]
    pub fn bucket(&self, pattern: &WildcardPattern) -> &[usize] {
        self.buckets.get(pattern).map_or(&[], Vec::as_slice)
    }

    /// Number of distinct patterns
    #[must_use]
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Total patterns generated, counting repeats across words
    #[must_use]
    pub const fn pattern_count(&self) -> usize {
        self.pattern_count
    }

    /// Size of the largest bucket
    #[must_use]
    pub fn largest_bucket(&self) -> usize {
        self.buckets.values().map(Vec::len).max().unwrap_or(0)
    }

    /// Candidate ids sharing at least one pattern with `word`, unfiltered
    ///
    /// Sorted and deduplicated. May contain `word` itself and words that are
    /// more than one edit away.
    pub(crate) fn candidate_ids(&self, word: &Word) -> Vec<usize> {
        let mut ids: Vec<usize> = patterns_for(word)
            .flat_map(|pattern| self.bucket(&pattern).iter().copied())
            .collect();
        ids.sort_unstable();
        ids.dedup();
        ids
    }
}
