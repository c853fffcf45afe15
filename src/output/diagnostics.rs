//! Colored status lines on stderr
//!
//! Results go to stdout; anything about the run itself (what was loaded, what was skipped,
//! how long it took) goes through these helpers so it never mixes with piped output.

use colored::Colorize;

/// Print a status line
pub fn status(message: &str) {
    eprintln!("{} {message}", "::".bright_cyan().bold());
}

/// Print a status line only in verbose mode
pub fn detail(verbose: bool, message: &str) {
    if verbose {
        eprintln!("{} {}", "  ·".bright_black(), message.bright_black());
    }
}

/// Print a warning
pub fn warn(message: &str) {
    eprintln!("{} {message}", "warning:".yellow().bold());
}
