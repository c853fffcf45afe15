//! Core domain types for Wordle
//!
//! Words, the dictionary, feedback patterns and the consistency check between them.
//! Everything here is pure and free of I/O.

mod dictionary;
mod error;
mod feedback;
mod word;

pub use dictionary::Dictionary;
pub use error::{Error, Result};
pub use feedback::{FeedbackPattern, Mark, matches, matches_text};
pub use word::{WORD_LENGTH, Word};
