//! Word lists for ladder searches
//!
//! Dictionaries come from external files; see [`loader`].

pub mod loader;

pub use loader::{load_from_file, load_from_reader, words_from_slice};
