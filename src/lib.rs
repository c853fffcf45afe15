//! Wordle Suggest
//!
//! Suggests high-information Wordle guesses. After every turn the pool of words still
//! consistent with the feedback is filtered, and a random sample of it is ranked by the
//! Shannon entropy of the feedback patterns each word would produce.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_suggest::core::{Dictionary, FeedbackPattern, Word};
//! use wordle_suggest::solver::{RankerConfig, Session};
//!
//! let (dictionary, _) = Dictionary::from_entries(["abuse", "alarm", "alloy", "arose", "alive"]);
//! let mut session = Session::new(&dictionary, RankerConfig::default().with_seed(Some(1)));
//!
//! let guess = Word::new("alarm").unwrap();
//! let pattern = FeedbackPattern::parse("GG---").unwrap();
//! session.apply(guess, pattern).unwrap();
//!
//! let suggestions = session.suggest().unwrap();
//! assert_eq!(session.pool().len(), 2);
//! assert!((suggestions[0].entropy - 1.0).abs() < 1e-12);
//! ```

// Core domain types
pub mod core;

// Filtering and ranking
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
