//! Core domain types for word ladders
//!
//! This module contains the fundamental domain types: words, dictionaries and
//! the one-edit adjacency test. Everything here is pure and deterministic.

mod adjacency;
mod dictionary;
mod word;

pub use adjacency::{is_adjacent, is_adjacent_chars};
pub use dictionary::Dictionary;
pub use word::{Word, WordError};
