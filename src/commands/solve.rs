//! Word solving command
//!
//! Plays a game against a known secret, always taking the top suggestion.

use crate::core::{Dictionary, Error, FeedbackPattern, Word};
use crate::solver::entropy::calculate_metrics;
use crate::solver::{RankerConfig, Session};
use anyhow::{Context, Result};

/// Configuration for solving a word
pub struct SolveConfig {
    pub target: String,
    pub max_guesses: usize,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(target: String) -> Self {
        Self {
            target,
            max_guesses: 6,
        }
    }
}

/// Result of solving a word
pub struct SolveResult {
    pub success: bool,
    pub guesses: Vec<GuessStep>,
    pub target: String,
}

/// A single guess step in the solution
pub struct GuessStep {
    pub word: String,
    pub pattern: FeedbackPattern,
    pub candidates_before: usize,
    pub candidates_after: usize,
    /// `None` when only one candidate was left
    pub entropy: Option<f64>,
    pub expected_remaining: Option<f64>,
}

/// Solve a specific word with the entropy ranker
///
/// # Errors
///
/// Returns an error if:
/// - The target word is invalid (not 5 letters or contains non-letters)
/// - The target is not in the dictionary
/// - The ranker fails (zero sample size)
pub fn solve_word(
    config: &SolveConfig,
    dictionary: &Dictionary,
    ranker: RankerConfig,
) -> Result<SolveResult> {
    let target = Word::new(&config.target)
        .with_context(|| format!("invalid target word '{}'", config.target))?;
    if !dictionary.contains(&target) {
        return Err(Error::UnknownWord(target.text().to_owned()).into());
    }

    let mut session = Session::new(dictionary, ranker);
    let mut guesses = Vec::new();

    for _ in 0..config.max_guesses {
        let candidates_before = session.pool().len();
        let guess = session
            .suggest()?
            .first()
            .map(|suggestion| suggestion.word)
            .ok_or(Error::EmptyPool)?;

        let (entropy, expected_remaining) = if candidates_before > 1 {
            let metrics = calculate_metrics(guess, session.pool().words());
            (Some(metrics.entropy), Some(metrics.expected_remaining))
        } else {
            (None, None)
        };

        let pattern = FeedbackPattern::compute(guess, &target);
        let candidates_after = session.apply(guess.clone(), pattern)?;

        guesses.push(GuessStep {
            word: guess.text().to_owned(),
            pattern,
            candidates_before,
            candidates_after,
            entropy,
            expected_remaining,
        });

        if pattern.is_solved() {
            return Ok(SolveResult {
                success: true,
                guesses,
                target: target.text().to_owned(),
            });
        }
    }

    Ok(SolveResult {
        success: false,
        guesses,
        target: target.text().to_owned(),
    })
}
