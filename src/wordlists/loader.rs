//! Word list loading utilities
//!
//! Turns a one-word-per-line list into a [`Dictionary`]. Blank lines and lines starting
//! with `#` are ignored; entries that are not valid words are skipped and counted.

use super::{ALLOWED, ANSWERS};
use crate::core::{Dictionary, Word};
use rustc_hash::FxHashSet;
use std::fs;
use std::io;
use std::path::Path;

/// Load a dictionary from a file
///
/// Returns the dictionary and the number of skipped entries.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use wordle_suggest::wordlists::loader::load_from_file;
///
/// let (dictionary, skipped) = load_from_file("data/answers.txt").unwrap();
/// println!("Loaded {} words ({skipped} skipped)", dictionary.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<(Dictionary, usize)> {
    let content = fs::read_to_string(path)?;
    Ok(parse_word_list(&content))
}

/// Parse word list text, one word per line
#[must_use]
pub fn parse_word_list(content: &str) -> (Dictionary, usize) {
    Dictionary::from_entries(
        content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#')),
    )
}

/// The dictionary compiled into the binary
///
/// Answer words come first, followed by the guess-only words.
///
/// # Examples
/// ```
/// use wordle_suggest::wordlists::{ALLOWED, ANSWERS, loader::embedded_dictionary};
///
/// let dictionary = embedded_dictionary();
/// assert_eq!(dictionary.len(), ANSWERS.len() + ALLOWED.len());
/// assert!(dictionary.get("soare").is_some());
/// ```
#[must_use]
pub fn embedded_dictionary() -> Dictionary {
    Dictionary::from_entries(ANSWERS.iter().chain(ALLOWED).copied()).0
}

/// The words of `dictionary` that are embedded answer words, in dictionary order
#[must_use]
pub fn embedded_answers(dictionary: &Dictionary) -> Vec<&Word> {
    let answers: FxHashSet<&str> = ANSWERS.iter().copied().collect();
    dictionary
        .iter()
        .filter(|word| answers.contains(word.text()))
        .collect()
}
