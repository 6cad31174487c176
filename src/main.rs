//! Word Ladder - CLI
//!
//! Finds shortest word ladders, lists neighbors, verifies ladders and runs
//! weighted shortest-path queries.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use env_logger::Builder;
use log::LevelFilter;
use std::io::Write;
use std::path::{Path, PathBuf};
use word_ladder::{
    commands::{
        BenchmarkConfig, LadderConfig, find_ladder, find_path, list_neighbors, run_benchmark,
        verify_ladder,
    },
    core::Dictionary,
    ladder::{SearchConfig, WildcardIndex},
    output::{
        print_benchmark_result, print_ladder_result, print_neighbors, print_path_result,
        print_verify_outcome,
    },
    wordlists::load_from_file,
};

#[derive(Parser)]
#[command(
    name = "word_ladder",
    about = "Shortest word ladders using a wildcard-bucket index",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Dictionary file (whitespace-separated words)
    #[arg(short = 'w', long, global = true, default_value = "words.txt")]
    wordlist: PathBuf,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Find a shortest ladder between two words
    Ladder {
        /// Start word (need not be in the dictionary)
        start: String,

        /// Goal word
        goal: String,

        /// Give up after expanding this many words
        #[arg(short, long)]
        max_expansions: Option<usize>,

        /// Show each edit and search statistics
        #[arg(short, long)]
        details: bool,
    },

    /// List dictionary words one edit away from a word
    Neighbors {
        /// Word to look up
        word: String,
    },

    /// Check that a sequence of words is a valid ladder
    Verify {
        /// Ladder words, start first
        words: Vec<String>,
    },

    /// Search ladders between random word pairs
    Benchmark {
        /// Number of random pairs
        #[arg(short = 'n', long, default_value = "100")]
        count: usize,

        /// RNG seed for pair selection
        #[arg(long, default_value = "42")]
        seed: u64,

        /// Give up on a pair after expanding this many words
        #[arg(short, long)]
        max_expansions: Option<usize>,
    },

    /// Cheapest path in a weighted directed graph file
    Path {
        /// Graph file: vertex count, then `src dst weight` triples
        graph: PathBuf,

        /// Source vertex
        source: usize,

        /// Destination vertex
        destination: usize,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Ladder {
            start,
            goal,
            max_expansions,
            details,
        } => {
            let dictionary = load_dictionary(&cli.wordlist)?;
            run_ladder_command(&dictionary, start, goal, max_expansions, details)
        }
        Commands::Neighbors { word } => {
            let dictionary = load_dictionary(&cli.wordlist)?;
            let index = WildcardIndex::build(&dictionary);
            let result = list_neighbors(&word, &index)?;
            print_neighbors(&result);
            Ok(())
        }
        Commands::Verify { words } => {
            let dictionary = load_dictionary(&cli.wordlist)?;
            let outcome = verify_ladder(&words, &dictionary);
            print_verify_outcome(&outcome);
            Ok(())
        }
        Commands::Benchmark {
            count,
            seed,
            max_expansions,
        } => {
            let dictionary = load_dictionary(&cli.wordlist)?;
            run_benchmark_command(&dictionary, count, seed, max_expansions);
            Ok(())
        }
        Commands::Path {
            graph,
            source,
            destination,
        } => {
            let result = find_path(&graph, source, destination)?;
            print_path_result(&result);
            Ok(())
        }
    }
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    Builder::new()
        .filter_level(level)
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .init();
}

fn load_dictionary(path: &Path) -> Result<Dictionary> {
    load_from_file(path).with_context(|| format!("failed to load word list {}", path.display()))
}

fn search_config(max_expansions: Option<usize>) -> SearchConfig {
    SearchConfig { max_expansions }
}

fn run_ladder_command(
    dictionary: &Dictionary,
    start: String,
    goal: String,
    max_expansions: Option<usize>,
    details: bool,
) -> Result<()> {
    let index = WildcardIndex::build(dictionary);
    let config = LadderConfig::new(start, goal).with_search(search_config(max_expansions));
    let result = find_ladder(config, &index)?;
    print_ladder_result(&result, details);
    Ok(())
}

fn run_benchmark_command(
    dictionary: &Dictionary,
    count: usize,
    seed: u64,
    max_expansions: Option<usize>,
) {
    println!(
        "Running benchmark on {count} random pairs from {} words...",
        dictionary.len()
    );

    let index = WildcardIndex::build(dictionary);
    let config = BenchmarkConfig {
        pairs: count,
        seed,
        search: search_config(max_expansions),
        show_progress: true,
    };

    let result = run_benchmark(&index, &config);
    print_benchmark_result(&result);
}
