//! Turn-by-turn suggestion session

use super::entropy::{EntropyRanker, RankedSuggestion, RankerConfig};
use super::pool::CandidatePool;
use crate::core::{Dictionary, Error, FeedbackPattern, Result, Word};

/// One played guess and what it did to the pool
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    pub guess: Word,
    pub pattern: FeedbackPattern,
    pub candidates_before: usize,
    pub candidates_after: usize,
}

/// The state of one game: the dictionary, the current pool and the turns so far
///
/// The pool is only ever replaced by a fully built successor, so a failed call leaves
/// the session exactly as it was.
pub struct Session<'d> {
    ranker: EntropyRanker<'d>,
    pool: CandidatePool<'d>,
    history: Vec<Turn>,
    previous_pools: Vec<CandidatePool<'d>>,
    strict: bool,
}

impl<'d> Session<'d> {
    /// Start a game over the whole dictionary
    ///
    /// # Parameters
    /// - `dictionary`: every word that may be guessed or be the answer
    /// - `config`: sampling and display settings for the ranker
    #[must_use]
    pub fn new(dictionary: &'d Dictionary, config: RankerConfig) -> Self {
        Self {
            ranker: EntropyRanker::new(dictionary, config),
            pool: CandidatePool::full(dictionary),
            history: Vec::new(),
            previous_pools: Vec::new(),
            strict: false,
        }
    }

    /// Reject guesses that are not in the dictionary
    #[must_use]
    pub const fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    #[must_use]
    pub const fn dictionary(&self) -> &'d Dictionary {
        self.ranker.dictionary()
    }

    #[must_use]
    pub const fn ranker(&self) -> &EntropyRanker<'d> {
        &self.ranker
    }

    /// The words still consistent with every turn
    #[must_use]
    pub const fn pool(&self) -> &CandidatePool<'d> {
        &self.pool
    }

    #[must_use]
    pub fn history(&self) -> &[Turn] {
        &self.history
    }

    /// The pool each turn in [`Session::history`] was played against
    #[must_use]
    pub fn earlier_pools(&self) -> &[CandidatePool<'d>] {
        &self.previous_pools
    }

    /// Whether the last turn was all hits
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.history
            .last()
            .is_some_and(|turn| turn.pattern.is_solved())
    }

    /// Record a played guess and its feedback, shrinking the pool
    ///
    /// Returns the new pool size. An empty result is not an error here; the next call to
    /// [`Session::suggest`] reports it.
    ///
    /// # Errors
    /// `Error::UnknownWord` in strict mode when the guess is not in the dictionary.
    pub fn apply(&mut self, guess: Word, pattern: FeedbackPattern) -> Result<usize> {
        if self.strict && !self.dictionary().contains(&guess) {
            return Err(Error::UnknownWord(guess.text().to_owned()));
        }

        let next = self.pool.filter(&guess, pattern);
        let turn = Turn {
            guess,
            pattern,
            candidates_before: self.pool.len(),
            candidates_after: next.len(),
        };

        self.previous_pools
            .push(std::mem::replace(&mut self.pool, next));
        self.history.push(turn);
        Ok(self.pool.len())
    }

    /// Parse and record a turn given as raw text
    ///
    /// # Errors
    /// Validation errors from [`Word::new`] and [`FeedbackPattern::parse`], or those of
    /// [`Session::apply`].
    pub fn apply_text(&mut self, guess: &str, pattern: &str) -> Result<usize> {
        let guess = Word::new(guess)?;
        let pattern = FeedbackPattern::parse(pattern)?;
        self.apply(guess, pattern)
    }

    /// Take back the last turn, restoring the pool it replaced
    pub fn undo(&mut self) -> Option<Turn> {
        let turn = self.history.pop()?;
        if let Some(pool) = self.previous_pools.pop() {
            self.pool = pool;
        }
        Some(turn)
    }

    /// Start over with the full dictionary
    pub fn reset(&mut self) {
        self.pool = CandidatePool::full(self.dictionary());
        self.history.clear();
        self.previous_pools.clear();
    }

    /// The best next guesses for the current pool
    ///
    /// # Errors
    /// `Error::EmptyPool` when the feedback so far is contradictory, or
    /// `Error::InvalidSampleSize` for a zero sample size.
    pub fn suggest(&self) -> Result<Vec<RankedSuggestion<'d>>> {
        self.ranker.suggest(&self.pool)
    }

    /// Every sampled word ranked for the current pool
    ///
    /// # Errors
    /// Same as [`Session::suggest`].
    pub fn rank(&self) -> Result<Vec<RankedSuggestion<'d>>> {
        self.ranker.rank(&self.pool)
    }
}
