//! Candidate pools and feedback filtering

use crate::core::{Dictionary, FeedbackPattern, Word, matches};

/// Words still consistent with every piece of feedback seen so far
///
/// Borrows its words from the [`Dictionary`]. A pool is never edited in place:
/// filtering builds a new pool, which the caller swaps in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidatePool<'d> {
    words: Vec<&'d Word>,
}

impl<'d> CandidatePool<'d> {
    /// A pool holding every word of the dictionary
    #[must_use]
    pub fn full(dictionary: &'d Dictionary) -> Self {
        Self {
            words: dictionary.iter().collect(),
        }
    }

    /// A pool over an explicit list of words, in the given order
    #[must_use]
    pub const fn from_words(words: Vec<&'d Word>) -> Self {
        Self { words }
    }

    /// The words in pool order
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[&'d Word] {
        &self.words
    }

    /// Number of candidates
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether no candidates remain
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Whether a word is still a candidate
    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.words.iter().any(|&w| w == word)
    }

    /// Iterate over the candidates in pool order
    pub fn iter(&self) -> impl Iterator<Item = &'d Word> + '_ {
        self.words.iter().copied()
    }

    /// The pool left after `guess` was answered with `pattern`
    ///
    /// Keeps the relative order of the surviving words.
    #[must_use]
    pub fn filter(&self, guess: &Word, pattern: FeedbackPattern) -> Self {
        filter_pool(self, guess, pattern)
    }
}

/// Keep the candidates of `pool` for which `guess` would have produced `pattern`
///
/// # Examples
/// ```
/// use wordle_suggest::core::{Dictionary, FeedbackPattern, Word};
/// use wordle_suggest::solver::{CandidatePool, filter_pool};
///
/// let (dictionary, _) = Dictionary::from_entries(["abuse", "alarm", "alloy", "arose", "alive"]);
/// let pool = CandidatePool::full(&dictionary);
///
/// let guess = Word::new("alarm").unwrap();
/// let pattern = FeedbackPattern::parse("GG---").unwrap();
/// let next = filter_pool(&pool, &guess, pattern);
///
/// let left: Vec<&str> = next.iter().map(Word::text).collect();
/// assert_eq!(left, ["alloy", "alive"]);
/// ```
#[must_use]
pub fn filter_pool<'d>(
    pool: &CandidatePool<'d>,
    guess: &Word,
    pattern: FeedbackPattern,
) -> CandidatePool<'d> {
    CandidatePool {
        words: pool
            .words
            .iter()
            .copied()
            .filter(|&candidate| matches(guess, pattern, candidate))
            .collect(),
    }
}
