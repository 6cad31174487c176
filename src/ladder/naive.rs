//! Unindexed reference implementations
//!
//! Scan the whole dictionary for every neighbor query. Far slower than the
//! wildcard index, kept as an oracle for cross-checking it in tests and
//! benchmarks.

use super::sequence::Ladder;
use crate::core::{Dictionary, Word};
use rustc_hash::FxHashSet;
use std::collections::VecDeque;

/// Dictionary words one edit away from `word`, by linear scan
#[must_use]
pub fn naive_neighbors<'d>(word: &Word, dictionary: &'d Dictionary) -> Vec<&'d Word> {
    dictionary
        .iter()
        .filter(|candidate| word.is_adjacent_to(candidate))
        .collect()
}

/// Shortest ladder by BFS over a queue of partial ladders, scanning the
/// dictionary at every step
///
/// Follows the same conventions as [`super::shortest_ladder`]: identical
/// endpoints give `[start]` and unreachable goals give an empty ladder.
#[must_use]
pub fn naive_shortest_ladder(start: &str, goal: &str, dictionary: &Dictionary) -> Ladder {
    let (Ok(start), Ok(goal)) = (Word::new(start), Word::new(goal)) else {
        return Ladder::empty();
    };

    if start == goal {
        return Ladder::new(vec![start]);
    }

    let mut visited: FxHashSet<&str> = FxHashSet::default();
    visited.insert(start.text());

    let mut queue: VecDeque<Vec<&Word>> = VecDeque::from([vec![&start]]);

    while let Some(partial) = queue.pop_front() {
        let Some(&last) = partial.last() else {
            continue;
        };

        for candidate in naive_neighbors(last, dictionary) {
            if !visited.insert(candidate.text()) {
                continue;
            }

            let mut extended = partial.clone();
            extended.push(candidate);

            if *candidate == goal {
                return Ladder::new(extended.into_iter().cloned().collect());
            }
            queue.push_back(extended);
        }
    }

    Ladder::empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn naive_neighbors_scan() {
        let dict = Dictionary::from_strs(["cat", "cot", "cats", "dog"]);
        let cat = Word::new("cat").unwrap();
        let found: Vec<&str> = naive_neighbors(&cat, &dict)
            .iter()
            .map(|w| w.text())
            .collect();
        assert_eq!(found, ["cats", "cot"]);
    }

    #[test]
    fn naive_ladder_cat_to_dog() {
        let dict = Dictionary::from_strs(["cat", "cot", "cog", "dog"]);
        let ladder = naive_shortest_ladder("cat", "dog", &dict);
        assert_eq!(ladder.texts(), ["cat", "cot", "cog", "dog"]);
    }

    #[test]
    fn naive_ladder_unreachable() {
        let dict = Dictionary::from_strs(["cat", "dog"]);
        assert!(naive_shortest_ladder("cat", "dog", &dict).is_empty());
    }

    #[test]
    fn naive_ladder_identity() {
        let dict = Dictionary::from_strs(["cat"]);
        assert_eq!(naive_shortest_ladder("cat", "cat", &dict).texts(), ["cat"]);
    }
}
