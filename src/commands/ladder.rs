//! Ladder command
//!
//! Finds a shortest ladder between two words and verifies the result.

use super::CommandError;
use crate::core::Word;
use crate::ladder::{Ladder, LadderSearch, SearchConfig, WildcardIndex, verify};
use std::time::{Duration, Instant};

/// Configuration for a ladder search
pub struct LadderConfig {
    pub start: String,
    pub goal: String,
    pub search: SearchConfig,
}

impl LadderConfig {
    #[must_use]
    pub fn new(start: impl Into<String>, goal: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            goal: goal.into(),
            search: SearchConfig::default(),
        }
    }

    #[must_use]
    pub fn with_search(mut self, search: SearchConfig) -> Self {
        self.search = search;
        self
    }
}

/// Result of a ladder search
pub struct LadderResult {
    pub start: String,
    pub goal: String,
    pub ladder: Ladder,
    pub start_in_dictionary: bool,
    pub goal_in_dictionary: bool,
    pub expanded: usize,
    pub limit_reached: bool,
    /// The found ladder passed verification (vacuously true when none was found)
    pub verified: bool,
    pub duration: Duration,
}

impl LadderResult {
    #[must_use]
    pub fn found(&self) -> bool {
        !self.ladder.is_empty()
    }
}

/// Find a shortest ladder using a prebuilt index
///
/// # Errors
///
/// Returns an error if the start or goal is not a valid word (empty or
/// containing whitespace). An unreachable goal is not an error; the result
/// holds an empty ladder.
pub fn find_ladder(
    config: LadderConfig,
    index: &WildcardIndex<'_>,
) -> Result<LadderResult, CommandError> {
    let start = Word::new(&config.start).map_err(|e| CommandError::invalid_word(&config.start, e))?;
    let goal = Word::new(&config.goal).map_err(|e| CommandError::invalid_word(&config.goal, e))?;

    let dictionary = index.dictionary();
    let search = LadderSearch::with_config(index, config.search);

    let timer = Instant::now();
    let report = search.search(start.text(), goal.text());
    let duration = timer.elapsed();

    let verified = report.ladder.is_empty() || verify(dictionary, report.ladder.words()).is_ok();

    Ok(LadderResult {
        start_in_dictionary: dictionary.contains(start.text()),
        goal_in_dictionary: dictionary.contains(goal.text()),
        start: start.text().to_string(),
        goal: goal.text().to_string(),
        ladder: report.ladder,
        expanded: report.expanded,
        limit_reached: report.limit_reached,
        verified,
        duration,
    })
}
