//! Word Ladder
//!
//! Shortest word ladders over a dictionary: every step changes one character
//! (substitution, insertion or deletion) and every intermediate word is a
//! dictionary word. Neighbor lookup goes through a wildcard-bucket index
//! instead of scanning the dictionary.
//!
//! # Quick Start
//!
//! ```rust
//! use word_ladder::core::Dictionary;
//! use word_ladder::ladder::{LadderSearch, WildcardIndex, verify};
//!
//! let dict = Dictionary::from_strs(["cat", "cot", "cog", "dog"]);
//! let index = WildcardIndex::build(&dict);
//!
//! let ladder = LadderSearch::new(&index).shortest_ladder("cat", "dog");
//! assert_eq!(ladder.to_string(), "cat -> cot -> cog -> dog");
//! assert!(verify(&dict, ladder.words()).is_ok());
//! ```

// Core domain types
pub mod core;

// Index, neighbor enumeration, search and verification
pub mod ladder;

// Weighted shortest paths
pub mod graph;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
