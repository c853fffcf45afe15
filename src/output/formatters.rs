//! Formatting utilities for terminal output

use crate::core::{FeedbackPattern, Mark};
use colored::{ColoredString, Colorize};

/// Format a pattern as emoji string
#[must_use]
pub fn pattern_to_emoji(pattern: FeedbackPattern) -> String {
    pattern.to_emoji()
}

/// Render a guess with each letter colored by its mark
#[must_use]
pub fn colored_guess(word: &str, pattern: FeedbackPattern) -> String {
    word.to_uppercase()
        .chars()
        .zip(pattern.marks())
        .map(|(letter, mark)| paint(letter, mark).to_string())
        .collect()
}

fn paint(letter: char, mark: Mark) -> ColoredString {
    let cell = format!(" {letter} ");
    match mark {
        Mark::Hit => cell.black().on_green().bold(),
        Mark::Present => cell.black().on_yellow().bold(),
        Mark::Miss => cell.white().on_bright_black(),
    }
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    let filled = if max > 0.0 {
        // Cast is safe: values are clamped to [0, width]
        ((value / max) * width as f64).clamp(0.0, width as f64) as usize
    } else {
        0
    };

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Entropy bar scaled to the best possible score for `candidates` words
#[must_use]
pub fn entropy_bar(entropy: f64, candidates: usize, width: usize) -> String {
    let max_entropy = (candidates.max(2) as f64).log2();
    create_progress_bar(entropy, max_entropy, width)
}
