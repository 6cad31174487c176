//! Word list loading utilities
//!
//! Word lists are whitespace-separated tokens; one word per line is the common
//! case. Tokens are lowercased and duplicates collapse into one entry.

use crate::core::Dictionary;
use log::info;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Load a dictionary from a file
///
/// # Errors
///
/// Returns an I/O error if the file cannot be opened or read.
///
/// # Examples
/// ```no_run
/// use word_ladder::wordlists::loader::load_from_file;
///
/// let dict = load_from_file("words.txt").unwrap();
/// println!("Loaded {} words", dict.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Dictionary> {
    let path = path.as_ref();
    let dict = load_from_reader(BufReader::new(File::open(path)?))?;
    info!("loaded {} words from {}", dict.len(), path.display());
    Ok(dict)
}

/// Load a dictionary from any buffered reader
///
/// # Errors
///
/// Returns an I/O error if reading fails or the input is not valid UTF-8.
pub fn load_from_reader<R: BufRead>(reader: R) -> io::Result<Dictionary> {
    let mut tokens = Vec::new();
    for line in reader.lines() {
        let line = line?;
        tokens.extend(line.split_whitespace().map(str::to_string));
    }
    Ok(Dictionary::from_strs(tokens))
}

/// Convert a string slice to a dictionary
///
/// # Examples
/// ```
/// use word_ladder::wordlists::loader::words_from_slice;
///
/// let dict = words_from_slice(&["cat", "Cot", "cat"]);
/// assert_eq!(dict.len(), 2);
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Dictionary {
    Dictionary::from_strs(slice)
}
