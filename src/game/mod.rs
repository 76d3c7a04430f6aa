//! The lying game itself
//!
//! Scoring lives in `core`; this module adds the parts that make the game adversarial:
//! the obfuscator that plants one false verdict per round, the log of those lies, key
//! handling, and the round state machine tying them together.

mod config;
mod controller;
mod error;
mod input;
mod lies;
mod obfuscator;
mod random;

pub use config::{GameConfig, MAX_ROUNDS};
pub use controller::{
    Board, INVALID_WORD, KeySource, RoundController, RoundRecord, RoundState, WIN_MESSAGE,
    collect_guess, loss_message,
};
pub use error::GameError;
pub use input::{InputCollector, KEYS, Key, KeyOutcome};
pub use lies::{Lie, LieLog};
pub use obfuscator::obfuscate;
pub use random::{RandomSource, RngSource};
