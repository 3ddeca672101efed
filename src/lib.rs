//! Word Trainer
//!
//! An information-theoretic solver and trainer for five-letter word games.
//! The engine scores guesses by the Shannon entropy of their feedback
//! distribution and narrows the candidate set after every observation.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use wordle_trainer::core::{Pattern, Word};
//! use wordle_trainer::engine::Engine;
//!
//! let words = vec![
//!     Word::new("crane").unwrap(),
//!     Word::new("slate").unwrap(),
//!     Word::new("trace").unwrap(),
//! ];
//! let engine = Engine::new(words).unwrap();
//!
//! let mut game = engine.new_game(Some("trace")).unwrap();
//! while let Ok(outcome) = game.play_turn() {
//!     println!("{} -> {}", outcome.guess.text(), outcome.pattern.value());
//! }
//! ```

// Core domain types
pub mod core;

// Solving engine
pub mod engine;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
