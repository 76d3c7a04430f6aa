//! Per-session game settings

use super::error::GameError;
use crate::core::ROUNDS;

/// Longest game the board can be sized for
pub const MAX_ROUNDS: usize = 64;

/// Settings fixed for the whole session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Rounds before the game is lost
    pub rounds: usize,
    /// Seed for answer choice and obfuscation; `None` draws from the OS
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rounds: ROUNDS,
            seed: None,
        }
    }
}

impl GameConfig {
    #[must_use]
    pub const fn new(rounds: usize, seed: Option<u64>) -> Self {
        Self { rounds, seed }
    }

    /// # Errors
    /// Returns `GameError::InvalidConfig` when `rounds` is zero or above [`MAX_ROUNDS`].
    pub fn validate(&self) -> Result<(), GameError> {
        if self.rounds == 0 {
            return Err(GameError::InvalidConfig(
                "a game needs at least one round".to_string(),
            ));
        }
        if self.rounds > MAX_ROUNDS {
            return Err(GameError::InvalidConfig(format!(
                "at most {MAX_ROUNDS} rounds are supported, got {}",
                self.rounds
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_uses_eight_rounds() {
        let config = GameConfig::default();
        assert_eq!(config.rounds, 8);
        assert_eq!(config.seed, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn zero_rounds_rejected() {
        assert!(matches!(
            GameConfig::new(0, Some(1)).validate(),
            Err(GameError::InvalidConfig(_))
        ));
    }

    #[test]
    fn round_limit_is_enforced() {
        assert!(GameConfig::new(MAX_ROUNDS, None).validate().is_ok());
        assert!(matches!(
            GameConfig::new(MAX_ROUNDS + 1, None).validate(),
            Err(GameError::InvalidConfig(_))
        ));
        assert!(matches!(
            GameConfig::new(usize::MAX, Some(1)).validate(),
            Err(GameError::InvalidConfig(_))
        ));
    }
}
