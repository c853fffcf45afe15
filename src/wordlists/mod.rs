//! Word lists
//!
//! Provides the default answer and guess lists compiled into the binary, and loading from
//! files.

mod embedded;
pub mod loader;

pub use embedded::{ALLOWED, ALLOWED_COUNT, ANSWERS, ANSWERS_COUNT};
