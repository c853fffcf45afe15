//! The read-only word list every session starts from

use super::word::Word;
use rustc_hash::FxHashSet;

/// An ordered list of unique words
///
/// Built once at startup and then only read. Duplicates are dropped on construction,
/// keeping the first occurrence, so the order of everything else is preserved.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary {
    words: Vec<Word>,
}

impl Dictionary {
    /// Build a dictionary from already-validated words, dropping duplicates
    ///
    /// # Examples
    /// ```
    /// use wordle_suggest::core::{Dictionary, Word};
    ///
    /// let words = ["crane", "SLATE", "Crane"].map(|w| Word::new(w).unwrap());
    /// let dictionary = Dictionary::new(words);
    /// assert_eq!(dictionary.len(), 2);
    /// ```
    #[must_use]
    pub fn new(words: impl IntoIterator<Item = Word>) -> Self {
        let mut seen = FxHashSet::default();
        let words = words
            .into_iter()
            .filter(|word| seen.insert(word.text().to_owned()))
            .collect();
        Self { words }
    }

    /// Build a dictionary from raw text entries, skipping anything that is not a valid word
    ///
    /// Returns the dictionary and the number of skipped entries.
    #[must_use]
    pub fn from_entries<'a>(entries: impl IntoIterator<Item = &'a str>) -> (Self, usize) {
        let mut skipped = 0;
        let words: Vec<Word> = entries
            .into_iter()
            .filter_map(|entry| {
                let word = Word::new(entry).ok();
                if word.is_none() {
                    skipped += 1;
                }
                word
            })
            .collect();
        (Self::new(words), skipped)
    }

    /// All words, in load order
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Number of words
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the dictionary has no words
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Find a word by its text (case-insensitive)
    #[must_use]
    pub fn get(&self, text: &str) -> Option<&Word> {
        let text = text.trim();
        self.words
            .iter()
            .find(|w| w.text().eq_ignore_ascii_case(text))
    }

    /// Whether the dictionary contains a word
    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.words.iter().any(|w| w == word)
    }

    /// Iterate over the words
    pub fn iter(&self) -> std::slice::Iter<'_, Word> {
        self.words.iter()
    }
}

impl<'a> IntoIterator for &'a Dictionary {
    type Item = &'a Word;
    type IntoIter = std::slice::Iter<'a, Word>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.iter()
    }
}
