//! Core domain types for the game
//!
//! This module contains the fundamental domain types with zero external dependencies.
//! All types here are pure, testable, and have clear mathematical properties.

mod hints;
mod verdict;
mod word;

pub use hints::Hints;
pub use verdict::Verdict;
pub use word::{Word, WordError};

/// Number of letters in every guess and answer
pub const LENGTH: usize = 5;

/// Default number of rounds the player gets before the game is lost
pub const ROUNDS: usize = 8;
