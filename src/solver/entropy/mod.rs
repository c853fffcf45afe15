//! Entropy-based ranking
//!
//! Implements Shannon entropy calculation for Wordle pattern distributions and the
//! sampled ranking built on it.

mod calculator;
mod ranker;

pub use calculator::{
    GuessMetrics, calculate_entropy, calculate_metrics, partition_sizes, shannon_entropy,
};
pub use ranker::{
    DEFAULT_SAMPLE_SIZE, DEFAULT_TOP, EntropyRanker, RankedSuggestion, RankerConfig, rank,
    rank_with_rng, seeded_rng,
};
