//! Error taxonomy for a game session

use thiserror::Error;

/// Errors raised while running a game
#[derive(Debug, Error)]
pub enum GameError {
    /// A guess was submitted before the buffer held a full word
    #[error("Guess must be exactly {expected} letters, got {0}", expected = crate::core::LENGTH)]
    InvalidGuessLength(usize),

    /// A full-length guess is not in the dictionary
    #[error("Invalid Word: {0}")]
    UnknownWord(String),

    /// Obfuscation was asked to corrupt an already-winning sequence
    #[error("Refusing to obfuscate an all-correct hint sequence")]
    UnreachableAllCorrectObfuscation,

    /// A guess arrived after the game reached a terminal state
    #[error("The game is already over")]
    GameOver,

    /// The key source stopped producing keys mid-round
    #[error("Input closed before the game finished")]
    InputClosed,

    /// No answer could be drawn
    #[error("Answer pool is empty")]
    EmptyAnswerPool,

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
