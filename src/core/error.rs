//! Error type shared by the matcher, the ranker and the session
//!
//! Every variant is a distinct, inspectable condition. `EmptyPool` is the only one a
//! player can cause during normal use (contradictory feedback); the others mean malformed
//! input slipped past validation at the boundary.

use thiserror::Error;

/// Errors produced by the suggestion core
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A word or pattern does not have the fixed word length
    #[error("expected {expected} letters or marks, got {found}")]
    LengthMismatch { expected: usize, found: usize },

    /// A word contains something other than an ASCII letter
    #[error("invalid character {0:?} in word")]
    InvalidCharacter(char),

    /// A pattern symbol is not one of Hit, Present or Miss
    #[error("invalid pattern mark {0:?} (use G/Y/- or 2/1/0)")]
    InvalidPattern(char),

    /// A raw pattern code is outside 0..=2
    #[error("invalid pattern code {0} (expected 0, 1 or 2)")]
    InvalidCode(u8),

    /// The ranker was asked to sample zero words
    #[error("sample size must be at least 1")]
    InvalidSampleSize,

    /// No candidates remain; some earlier feedback contradicts the rest
    #[error("no candidate words remain, check the feedback entered so far")]
    EmptyPool,

    /// A guess that is not part of the dictionary
    #[error("'{0}' is not in the dictionary")]
    UnknownWord(String),
}

impl Error {
    /// Whether this error reports a malformed pattern
    #[must_use]
    pub const fn is_invalid_pattern(&self) -> bool {
        matches!(self, Self::InvalidPattern(_) | Self::InvalidCode(_))
    }
}

/// Result alias for the suggestion core
pub type Result<T> = std::result::Result<T, Error>;
