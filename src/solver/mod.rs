//! Filtering and ranking
//!
//! The candidate pool shrinks with every turn; the entropy ranker then picks the
//! guesses that split what is left most evenly.

pub mod entropy;
mod pool;
mod session;

pub use entropy::{
    EntropyRanker, GuessMetrics, RankedSuggestion, RankerConfig, rank, rank_with_rng,
};
pub use pool::{CandidatePool, filter_pool};
pub use session::{Session, Turn};
