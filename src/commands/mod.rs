//! Command implementations

pub mod score;
pub mod simple;
pub mod simulate;

pub use score::{ScoreResult, score_words};
pub use simple::run_simple;
pub use simulate::{SimulationConfig, SimulationOutcome, SimulationResult, simulate_game};
