//! Benchmark command
//!
//! Simulates games against many targets in parallel and summarizes the guess counts.

use crate::core::{Dictionary, FeedbackPattern, Word};
use crate::solver::{RankerConfig, Session};
use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_words: usize,
    pub solved: usize,
    pub failed: usize,
    pub total_guesses: usize,
    pub average_guesses: f64,
    pub min_guesses: usize,
    pub max_guesses: usize,
    /// Guess count to number of solved games
    pub distribution: BTreeMap<usize, usize>,
    /// Targets not found within the guess limit
    pub failures: Vec<String>,
    pub duration: Duration,
    pub words_per_second: f64,
}

/// Outcome of one simulated game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOutcome {
    pub target: String,
    pub guesses: usize,
    pub solved: bool,
}

/// Progress bar in the style used for long runs
///
/// # Errors
/// Returns an error if the progress template is rejected.
pub fn progress_bar(len: usize) -> Result<ProgressBar> {
    let pb = ProgressBar::new(len as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")?
            .progress_chars("█▓▒░"),
    );
    Ok(pb)
}

/// Play one game against `target`, taking the top suggestion every turn
///
/// # Errors
/// Returns an error if ranking fails.
pub fn play_game(
    dictionary: &Dictionary,
    config: RankerConfig,
    target: &Word,
    max_guesses: usize,
) -> Result<GameOutcome> {
    let mut session = Session::new(dictionary, config);
    let mut guesses = 0;

    while guesses < max_guesses {
        guesses += 1;
        let Some(top) = session.suggest()?.first().map(|s| s.word) else {
            break;
        };

        let pattern = FeedbackPattern::compute(top, target);
        session.apply(top.clone(), pattern)?;
        if pattern.is_solved() {
            return Ok(GameOutcome {
                target: target.text().to_owned(),
                guesses,
                solved: true,
            });
        }
    }

    Ok(GameOutcome {
        target: target.text().to_owned(),
        guesses,
        solved: false,
    })
}

/// Run games for every target in parallel
///
/// Game `i` uses the base seed plus `i`, so a seeded run is reproducible regardless of
/// thread scheduling. Unseeded runs draw each game's seed from the OS.
///
/// # Errors
/// Returns the first ranking error any game hits.
pub fn run_benchmark(
    dictionary: &Dictionary,
    config: RankerConfig,
    targets: &[&Word],
    max_guesses: usize,
    progress: &ProgressBar,
) -> Result<BenchmarkResult> {
    let start = Instant::now();

    let outcomes = targets
        .par_iter()
        .enumerate()
        .map(|(i, &target)| {
            let seed = config.seed.map(|base| base.wrapping_add(i as u64));
            let outcome = play_game(dictionary, config.with_seed(seed), target, max_guesses);
            progress.inc(1);
            outcome
        })
        .collect::<Result<Vec<_>>>()?;

    progress.finish_with_message("Complete!");
    Ok(summarize(&outcomes, start.elapsed()))
}

/// Aggregate game outcomes
#[must_use]
pub fn summarize(outcomes: &[GameOutcome], duration: Duration) -> BenchmarkResult {
    let mut distribution = BTreeMap::new();
    let mut failures = Vec::new();

    for outcome in outcomes {
        if outcome.solved {
            *distribution.entry(outcome.guesses).or_insert(0) += 1;
        } else {
            failures.push(outcome.target.clone());
        }
    }

    let total_words = outcomes.len();
    let total_guesses = outcomes.iter().map(|o| o.guesses).sum();
    let average_guesses = if total_words == 0 {
        0.0
    } else {
        total_guesses as f64 / total_words as f64
    };
    let secs = duration.as_secs_f64();

    BenchmarkResult {
        total_words,
        solved: total_words - failures.len(),
        failed: failures.len(),
        total_guesses,
        average_guesses,
        min_guesses: outcomes.iter().map(|o| o.guesses).min().unwrap_or(0),
        max_guesses: outcomes.iter().map(|o| o.guesses).max().unwrap_or(0),
        distribution,
        failures,
        duration,
        words_per_second: if secs > 0.0 {
            total_words as f64 / secs
        } else {
            0.0
        },
    }
}
