//! One-edit adjacency test
//!
//! Two words are adjacent when a single substitution, insertion or deletion
//! turns one into the other. The check walks both character sequences once
//! instead of filling an edit-distance table.

/// Check whether two strings are exactly one edit apart
///
/// A string is never adjacent to itself. Comparison is by `char`, so callers
/// should lowercase first if case must be ignored.
///
/// # Examples
/// ```
/// use word_ladder::core::is_adjacent;
///
/// assert!(is_adjacent("cat", "cot")); // substitution
/// assert!(is_adjacent("cat", "cats")); // insertion
/// assert!(is_adjacent("cats", "cat")); // deletion
/// assert!(!is_adjacent("cat", "dog"));
/// assert!(!is_adjacent("cat", "cat"));
/// ```
#[must_use]
pub fn is_adjacent(a: &str, b: &str) -> bool {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    is_adjacent_chars(&a, &b)
}

/// Adjacency over pre-split character sequences
#[must_use]
pub fn is_adjacent_chars(a: &[char], b: &[char]) -> bool {
    let (shorter, longer) = if a.len() <= b.len() { (a, b) } else { (b, a) };

    match longer.len() - shorter.len() {
        0 => differs_in_one_position(shorter, longer),
        1 => is_single_deletion(shorter, longer),
        _ => false,
    }
}

fn differs_in_one_position(a: &[char], b: &[char]) -> bool {
    let mut mismatches = 0;
    for (x, y) in a.iter().zip(b) {
        if x != y {
            mismatches += 1;
            if mismatches > 1 {
                return false;
            }
        }
    }
    mismatches == 1
}

/// `longer` has exactly one more char than `shorter`
fn is_single_deletion(shorter: &[char], longer: &[char]) -> bool {
    let prefix = shorter
        .iter()
        .zip(longer)
        .take_while(|(x, y)| x == y)
        .count();

    // Skip one char of the longer word at the first mismatch; the rest must realign.
    shorter[prefix..] == longer[prefix + 1..]
}
