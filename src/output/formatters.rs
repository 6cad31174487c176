//! Formatting utilities for terminal output

use crate::ladder::Ladder;

/// Format a ladder as uppercase words joined by arrows
#[must_use]
pub fn ladder_to_arrows(ladder: &Ladder) -> String {
    ladder
        .words()
        .iter()
        .map(|w| w.text().to_uppercase())
        .collect::<Vec<_>>()
        .join(" → ")
}

/// Describe the edit between two adjacent words, e.g. `"a→o at 2"`
#[must_use]
pub fn describe_edit(from: &str, to: &str) -> String {
    let from: Vec<char> = from.chars().collect();
    let to: Vec<char> = to.chars().collect();
    let prefix = from.iter().zip(&to).take_while(|(a, b)| a == b).count();
    let position = prefix + 1;

    match from.len().cmp(&to.len()) {
        std::cmp::Ordering::Equal => match (from.get(prefix), to.get(prefix)) {
            (Some(a), Some(b)) => format!("{a}→{b} at {position}"),
            _ => "no change".to_string(),
        },
        std::cmp::Ordering::Less => match to.get(prefix) {
            Some(c) => format!("+{c} at {position}"),
            None => "no change".to_string(),
        },
        std::cmp::Ordering::Greater => match from.get(prefix) {
            Some(c) => format!("-{c} at {position}"),
            None => "no change".to_string(),
        },
    }
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;

    #[test]
    fn arrows_between_words() {
        let ladder = Ladder::new(vec![Word::new("cat").unwrap(), Word::new("cot").unwrap()]);
        assert_eq!(ladder_to_arrows(&ladder), "CAT → COT");
    }

    #[test]
    fn arrows_for_empty_ladder() {
        assert_eq!(ladder_to_arrows(&Ladder::empty()), "");
    }

    #[test]
    fn describes_substitution() {
        assert_eq!(describe_edit("cat", "cot"), "a→o at 2");
    }

    #[test]
    fn describes_insertion_and_deletion() {
        assert_eq!(describe_edit("cat", "cats"), "+s at 4");
        assert_eq!(describe_edit("cast", "cat"), "-s at 3");
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(5.0, 0.0, 4), "░░░░");
    }
}
