//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod diagnostics;
pub mod display;
pub mod formatters;

pub use diagnostics::{detail, status, warn};
pub use display::{
    print_analysis_result, print_benchmark_result, print_solve_result, print_suggest_report,
};
