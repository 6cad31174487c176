//! Breadth-first ladder search
//!
//! Explores the implicit graph whose vertices are the dictionary words plus the
//! start word and whose edges join words one edit apart. Because BFS visits
//! vertices in non-decreasing distance, the first time the goal is discovered
//! the ladder to it is a shortest one.

use super::index::WildcardIndex;
use super::neighbors::neighbor_ids;
use super::sequence::Ladder;
use crate::core::{Dictionary, Word};
use log::debug;
use std::collections::VecDeque;

/// Search configuration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchConfig {
    /// Stop after expanding this many vertices (`None` = unbounded)
    ///
    /// Checked at each dequeue. A bounded search that stops early returns
    /// an empty ladder with [`SearchReport::limit_reached`] set.
    pub max_expansions: Option<usize>,
}

impl SearchConfig {
    #[must_use]
    pub const fn with_max_expansions(max_expansions: usize) -> Self {
        Self {
            max_expansions: Some(max_expansions),
        }
    }
}

/// Outcome of one search
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchReport {
    /// Shortest ladder, or empty if none was found
    pub ladder: Ladder,
    /// Vertices whose neighbors were enumerated
    pub expanded: usize,
    /// The expansion cap stopped the search before it finished
    pub limit_reached: bool,
}

/// A BFS vertex: the start word (possibly outside the dictionary) or a dictionary id
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Vertex {
    Start,
    Entry(usize),
}

/// Shortest-ladder searcher over a prebuilt index
///
/// The index is shared read-only; each call allocates its own visited state.
pub struct LadderSearch<'i, 'd> {
    index: &'i WildcardIndex<'d>,
    config: SearchConfig,
}

impl<'i, 'd> LadderSearch<'i, 'd> {
    #[must_use]
    pub const fn new(index: &'i WildcardIndex<'d>) -> Self {
        Self {
            index,
            config: SearchConfig {
                max_expansions: None,
            },
        }
    }

    #[must_use]
    pub const fn with_config(index: &'i WildcardIndex<'d>, config: SearchConfig) -> Self {
        Self { index, config }
    }

    #[must_use]
    pub const fn config(&self) -> SearchConfig {
        self.config
    }

    /// Shortest ladder from `start` to `goal`, or an empty ladder
    ///
    /// # Examples
    /// ```
    /// use word_ladder::core::Dictionary;
    /// use word_ladder::ladder::{LadderSearch, WildcardIndex};
    ///
    /// let dict = Dictionary::from_strs(["cat", "cot", "cog", "dog"]);
    /// let index = WildcardIndex::build(&dict);
    /// let search = LadderSearch::new(&index);
    ///
    /// let ladder = search.shortest_ladder("cat", "dog");
    /// assert_eq!(ladder.texts(), ["cat", "cot", "cog", "dog"]);
    /// ```
    #[must_use]
    pub fn shortest_ladder(&self, start: &str, goal: &str) -> Ladder {
        self.search(start, goal).ladder
    }

    /// Run the search and report how much work it did
    ///
    /// - `start == goal` yields the one-word ladder `[start]`, in or out of the dictionary.
    /// - Inputs that are not valid words, or a goal outside the dictionary, yield an
    ///   empty ladder without expanding anything.
    #[must_use]
    pub fn search(&self, start: &str, goal: &str) -> SearchReport {
        let (Ok(start), Ok(goal)) = (Word::new(start), Word::new(goal)) else {
            debug!("search skipped: invalid start {start:?} or goal {goal:?}");
            return SearchReport::default();
        };

        if start == goal {
            return SearchReport {
                ladder: Ladder::new(vec![start]),
                ..SearchReport::default()
            };
        }

        let dictionary = self.index.dictionary();
        let Some(goal_id) = dictionary.position(goal.text()) else {
            debug!("search skipped: goal {goal} not in dictionary");
            return SearchReport::default();
        };

        let report = self.bfs(&start, goal_id);
        debug!(
            "search {start} -> {goal}: {} steps, {} expanded{}",
            report.ladder.steps(),
            report.expanded,
            if report.limit_reached {
                " (limit reached)"
            } else {
                ""
            }
        );
        report
    }

    fn bfs(&self, start: &Word, goal_id: usize) -> SearchReport {
        let dictionary = self.index.dictionary();
        let words = dictionary.words();

        // parents[id] is set when id is first enqueued; Some(_) doubles as the visited mark
        let mut parents: Vec<Option<Vertex>> = vec![None; dictionary.len()];
        if let Some(start_id) = dictionary.position(start.text()) {
            parents[start_id] = Some(Vertex::Start);
        }

        let mut queue = VecDeque::from([Vertex::Start]);
        let mut expanded = 0;

        while let Some(vertex) = queue.pop_front() {
            if let Some(limit) = self.config.max_expansions
                && expanded >= limit
            {
                return SearchReport {
                    ladder: Ladder::empty(),
                    expanded,
                    limit_reached: true,
                };
            }
            expanded += 1;

            let current = match vertex {
                Vertex::Start => start,
                Vertex::Entry(id) => &words[id],
            };

            for id in neighbor_ids(current, self.index) {
                if parents[id].is_some() {
                    continue;
                }
                parents[id] = Some(vertex);

                if id == goal_id {
                    return SearchReport {
                        ladder: reconstruct(start, goal_id, &parents, dictionary),
                        expanded,
                        limit_reached: false,
                    };
                }
                queue.push_back(Vertex::Entry(id));
            }
        }

        SearchReport {
            ladder: Ladder::empty(),
            expanded,
            limit_reached: false,
        }
    }
}

/// Walk parent links back from the goal
fn reconstruct(
    start: &Word,
    goal_id: usize,
    parents: &[Option<Vertex>],
    dictionary: &Dictionary,
) -> Ladder {
    let words = dictionary.words();
    let mut path = vec![words[goal_id].clone()];
    let mut cursor = parents[goal_id];

    while let Some(Vertex::Entry(id)) = cursor {
        path.push(words[id].clone());
        cursor = parents[id];
    }

    path.push(start.clone());
    path.reverse();
    Ladder::new(path)
}

/// Build an index for `dictionary` and find one shortest ladder
///
/// Convenience for one-off searches; reuse a [`WildcardIndex`] with
/// [`LadderSearch`] when running many.
///
/// # Examples
/// ```
/// use word_ladder::core::Dictionary;
/// use word_ladder::ladder::shortest_ladder;
///
/// let dict = Dictionary::from_strs(["hit", "hot", "dot", "dog", "cog", "lot", "log"]);
/// let ladder = shortest_ladder("hit", "cog", &dict);
/// assert_eq!(ladder.len(), 5);
/// ```
#[must_use]
pub fn shortest_ladder(start: &str, goal: &str, dictionary: &Dictionary) -> Ladder {
    let index = WildcardIndex::build(dictionary);
    LadderSearch::new(&index).shortest_ladder(start, goal)
}
