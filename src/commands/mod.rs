//! Command implementations

pub mod analyze;
pub mod benchmark;
pub mod simple;
pub mod solve;
pub mod suggest;

pub use analyze::{AnalysisResult, analyze_word};
pub use benchmark::{BenchmarkResult, GameOutcome, play_game, progress_bar, run_benchmark};
pub use simple::{run_simple, run_simple_with};
pub use solve::{GuessStep, SolveConfig, SolveResult, solve_word};
pub use suggest::{SuggestReport, TurnArg, parse_turn, replay_turns, suggest_next};
