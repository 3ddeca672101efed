//! Core domain types for the word game
//!
//! The fundamental types with no I/O concerns: validated five-letter words
//! and feedback patterns. Everything here is pure and has clear mathematical
//! properties.

mod pattern;
mod word;

pub use pattern::Pattern;
pub use word::{Word, WordError};

/// Fixed word length for the game
pub const WORD_LEN: usize = 5;

/// Number of distinct feedback patterns (3^5)
pub const PATTERN_COUNT: usize = 243;
