//! Benchmark command
//!
//! Runs ladder searches between random word pairs over one shared index.

use crate::core::Word;
use crate::ladder::{Ladder, LadderSearch, SearchConfig, SearchReport, WildcardIndex};
use indicatif::{ProgressBar, ProgressStyle};
use log::info;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Benchmark configuration
pub struct BenchmarkConfig {
    /// Number of random start/goal pairs
    pub pairs: usize,
    /// RNG seed; the same seed and dictionary give the same pairs
    pub seed: u64,
    pub search: SearchConfig,
    pub show_progress: bool,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            pairs: 100,
            seed: 42,
            search: SearchConfig::default(),
            show_progress: false,
        }
    }
}

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_pairs: usize,
    pub found: usize,
    pub unreachable: usize,
    /// Searches stopped by the expansion cap
    pub limited: usize,
    pub total_expanded: usize,
    /// Average word count of found ladders
    pub average_length: f64,
    /// Ladder length (words) → count, found ladders only
    pub distribution: BTreeMap<usize, usize>,
    pub longest: Option<Ladder>,
    pub duration: Duration,
    pub searches_per_second: f64,
    /// Expansion cap the searches ran under
    pub max_expansions: Option<usize>,
}

/// Draw `count` start/goal pairs from the index's dictionary
#[must_use]
pub fn random_pairs<'d>(index: &WildcardIndex<'d>, count: usize, seed: u64) -> Vec<(&'d Word, &'d Word)> {
    let words = index.dictionary().words();
    let mut rng = StdRng::seed_from_u64(seed);

    (0..count)
        .map_while(|_| Some((words.choose(&mut rng)?, words.choose(&mut rng)?)))
        .collect()
}

/// Run the benchmark
///
/// Searches run in parallel; each owns its visited state and only reads the index.
pub fn run_benchmark(index: &WildcardIndex<'_>, config: &BenchmarkConfig) -> BenchmarkResult {
    let pairs = random_pairs(index, config.pairs, config.seed);
    let search = LadderSearch::with_config(index, config.search);

    let pb = if config.show_progress {
        ProgressBar::new(pairs.len() as u64)
    } else {
        ProgressBar::hidden()
    };
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }

    let start = Instant::now();
    let reports: Vec<SearchReport> = pairs
        .par_iter()
        .map(|(from, to)| {
            let report = search.search(from.text(), to.text());
            pb.inc(1);
            report
        })
        .collect();
    let duration = start.elapsed();
    pb.finish_with_message("Complete!");

    let result = summarize(reports, duration, search.config());
    info!(
        "benchmark: {}/{} ladders found in {:.2}s",
        result.found,
        result.total_pairs,
        result.duration.as_secs_f64()
    );
    result
}

fn summarize(reports: Vec<SearchReport>, duration: Duration, search: SearchConfig) -> BenchmarkResult {
    let total_pairs = reports.len();
    let mut found = 0;
    let mut limited = 0;
    let mut total_expanded = 0;
    let mut total_length = 0;
    let mut distribution: BTreeMap<usize, usize> = BTreeMap::new();
    let mut longest: Option<Ladder> = None;

    for report in reports {
        total_expanded += report.expanded;
        if report.limit_reached {
            limited += 1;
        }
        if report.ladder.is_empty() {
            continue;
        }

        found += 1;
        total_length += report.ladder.len();
        *distribution.entry(report.ladder.len()).or_insert(0) += 1;

        if longest.as_ref().is_none_or(|l| report.ladder.len() > l.len()) {
            longest = Some(report.ladder);
        }
    }

    let secs = duration.as_secs_f64();

    BenchmarkResult {
        total_pairs,
        found,
        unreachable: total_pairs - found - limited,
        limited,
        total_expanded,
        average_length: if found > 0 {
            total_length as f64 / found as f64
        } else {
            0.0
        },
        distribution,
        longest,
        duration,
        searches_per_second: if secs > 0.0 {
            total_pairs as f64 / secs
        } else {
            0.0
        },
        max_expansions: search.max_expansions,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Dictionary;
    use crate::wordlists::words_from_slice;

    fn sample() -> Dictionary {
        words_from_slice(&[
            "hit", "hot", "dot", "dog", "cog", "lot", "log", "cat", "cot", "zebra",
        ])
    }

    #[test]
    fn benchmark_runs() {
        let dict = sample();
        let index = WildcardIndex::build(&dict);
        let config = BenchmarkConfig {
            pairs: 20,
            ..BenchmarkConfig::default()
        };

        let result = run_benchmark(&index, &config);

        assert_eq!(result.total_pairs, 20);
        assert_eq!(result.found + result.unreachable + result.limited, 20);
        assert_eq!(result.limited, 0);
        assert_eq!(result.max_expansions, None);
    }

    #[test]
    fn distribution_sums_to_found() {
        let dict = sample();
        let index = WildcardIndex::build(&dict);
        let result = run_benchmark(&index, &BenchmarkConfig::default());

        let sum: usize = result.distribution.values().sum();
        assert_eq!(sum, result.found);
        if let Some(longest) = &result.longest {
            assert_eq!(Some(&longest.len()), result.distribution.keys().max());
        }
    }

    #[test]
    fn same_seed_same_pairs() {
        let dict = sample();
        let index = WildcardIndex::build(&dict);
        assert_eq!(random_pairs(&index, 10, 7), random_pairs(&index, 10, 7));
    }

    #[test]
    fn empty_dictionary_has_no_pairs() {
        let dict = Dictionary::default();
        let index = WildcardIndex::build(&dict);
        let result = run_benchmark(&index, &BenchmarkConfig::default());

        assert_eq!(result.total_pairs, 0);
        assert_eq!(result.found, 0);
        assert!(result.longest.is_none());
        assert!(result.average_length.abs() < f64::EPSILON);
    }

    #[test]
    fn expansion_cap_counts_limited() {
        let dict = sample();
        let index = WildcardIndex::build(&dict);
        let config = BenchmarkConfig {
            pairs: 30,
            search: SearchConfig::with_max_expansions(0),
            ..BenchmarkConfig::default()
        };

        let result = run_benchmark(&index, &config);
        // Only identical pairs finish without expanding
        assert_eq!(result.unreachable, 0);
        assert_eq!(result.found + result.limited, 30);
        assert_eq!(result.total_expanded, 0);
        assert_eq!(result.max_expansions, Some(0));
    }
}
