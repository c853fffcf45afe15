//! One-shot suggestion command
//!
//! Replays the turns given on the command line and ranks the remaining pool.

use crate::core::{FeedbackPattern, Word};
use crate::solver::{RankedSuggestion, Session};
use anyhow::{Context, Result, bail};

/// A played guess and its feedback, as given on the command line
pub type TurnArg = (Word, FeedbackPattern);

/// Suggestions for the position reached after some turns
pub struct SuggestReport<'d> {
    /// Pool size after every turn was applied
    pub candidates: usize,
    /// Up to `limit` remaining words, in dictionary order
    pub remaining: Vec<&'d Word>,
    pub suggestions: Vec<RankedSuggestion<'d>>,
}

/// Parse `WORD=PATTERN` (or `WORD:PATTERN`)
///
/// # Errors
/// Returns an error if the separator is missing or either half does not validate.
///
/// # Examples
/// ```
/// use wordle_suggest::commands::parse_turn;
///
/// let (guess, pattern) = parse_turn("crane=GY---").unwrap();
/// assert_eq!(guess.text(), "crane");
/// assert_eq!(pattern.to_string(), "GY---");
/// ```
pub fn parse_turn(arg: &str) -> Result<TurnArg> {
    let Some((word, pattern)) = arg.split_once(['=', ':']) else {
        bail!("expected WORD=PATTERN, got '{arg}'");
    };

    let word = Word::new(word).with_context(|| format!("invalid guess in '{arg}'"))?;
    let pattern =
        FeedbackPattern::parse(pattern).with_context(|| format!("invalid pattern in '{arg}'"))?;
    Ok((word, pattern))
}

/// Apply each turn to the session in order
///
/// # Errors
/// Fails on the first turn the session rejects; earlier turns stay applied.
pub fn replay_turns(session: &mut Session<'_>, turns: &[TurnArg]) -> Result<()> {
    for (i, (guess, pattern)) in turns.iter().enumerate() {
        session
            .apply(guess.clone(), *pattern)
            .with_context(|| format!("turn {} ({guess}={pattern})", i + 1))?;
    }
    Ok(())
}

/// Rank the session's current pool
///
/// # Errors
/// Returns an error if the pool is empty (contradictory feedback) or the sample size is 0.
pub fn suggest_next<'d>(session: &Session<'d>, limit: usize) -> Result<SuggestReport<'d>> {
    let pool = session.pool();
    let suggestions = session
        .suggest()
        .context("no word is consistent with the feedback given")?;

    Ok(SuggestReport {
        candidates: pool.len(),
        remaining: pool.iter().take(limit).collect(),
        suggestions,
    })
}
