//! Lying Wordle
//!
//! A five-letter word game where, after every missed guess, exactly one of the colored
//! hints is false. The lies are revealed once the game ends.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use lying_wordle::core::{Hints, Word};
//!
//! let guess = Word::new("crane").unwrap();
//! let answer = Word::new("mango").unwrap();
//!
//! // Honest hints, before any lie is planted
//! let hints = Hints::calculate(&guess, &answer);
//! println!("{}", hints.to_emoji());
//! ```

// Core domain types
pub mod core;

// Obfuscation, round state and key handling
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
