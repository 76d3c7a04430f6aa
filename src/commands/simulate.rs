//! Scripted game command
//!
//! Plays a full game against a fixed answer using a list of guesses, exactly as if
//! the guesses had been typed, and returns every round with its lie.

use super::score::parse_word;
use crate::core::{Hints, LENGTH, Word};
use crate::game::{
    Board, GameConfig, GameError, Key, KeySource, RngSource, RoundController, RoundRecord,
    RoundState,
};
use crate::wordlists::Dictionary;
use std::borrow::Cow;
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

/// Configuration for a scripted game
pub struct SimulationConfig {
    pub answer: String,
    pub guesses: Vec<String>,
    pub game: GameConfig,
}

impl SimulationConfig {
    #[must_use]
    pub fn new(answer: String, guesses: Vec<String>) -> Self {
        Self {
            answer,
            guesses,
            game: GameConfig::default(),
        }
    }
}

/// How a scripted game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimulationOutcome {
    Won { round: usize },
    Lost,
    /// Guesses ran out before the game ended
    Unfinished,
}

/// Result of a scripted game
pub struct SimulationResult {
    pub answer: Word,
    pub rounds: Vec<RoundRecord>,
    /// Guesses refused as malformed or not in the dictionary, in script order
    pub rejected: Vec<String>,
    pub lies: usize,
    pub outcome: SimulationOutcome,
}

/// Play the scripted guesses against `config.answer`
///
/// Each well-formed guess is typed letter by letter, submitted with Enter and then
/// erased, so a rejected word never leaks into the next attempt. The answer is
/// always accepted as a guess, even when the word lists lack it.
///
/// # Errors
///
/// Returns an error if the answer is not a valid word or the configuration is invalid.
pub fn simulate_game(
    config: SimulationConfig,
    dictionary: &Dictionary,
) -> Result<SimulationResult, GameError> {
    let answer = parse_word(&config.answer)?;
    let dictionary = if dictionary.contains(&answer) {
        Cow::Borrowed(dictionary)
    } else {
        tracing::debug!(%answer, "answer missing from word lists, adding it");
        let mut extended = dictionary.clone();
        extended.add_answer(answer.clone());
        Cow::Owned(extended)
    };

    let rng = RngSource::from_seed(config.game.seed);
    let mut game = RoundController::new(answer.clone(), &config.game, rng)?;

    let rejected = Transcript::default();
    let mut keys = ScriptKeys::new(config.guesses, Rc::clone(&rejected));
    let mut board = TranscriptBoard {
        typed: String::new(),
        rejected: Rc::clone(&rejected),
    };

    let outcome = match game.play(&mut keys, &mut board, &dictionary) {
        Ok(RoundState::Won { round }) => SimulationOutcome::Won { round },
        Ok(RoundState::Lost) => SimulationOutcome::Lost,
        Ok(RoundState::AwaitingGuess(_)) | Err(GameError::InputClosed) => {
            SimulationOutcome::Unfinished
        }
        Err(err) => return Err(err),
    };
    let rejected = rejected.take();

    Ok(SimulationResult {
        answer,
        rounds: game.history().to_vec(),
        rejected,
        lies: game.lies().len(),
        outcome,
    })
}

/// Refused guesses, shared by the key script and the board so both append in order
type Transcript = Rc<RefCell<Vec<String>>>;

/// Types the script one guess at a time, only as the game asks for keys
struct ScriptKeys {
    guesses: VecDeque<String>,
    pending: VecDeque<Key>,
    rejected: Transcript,
}

impl ScriptKeys {
    fn new(guesses: Vec<String>, rejected: Transcript) -> Self {
        Self {
            guesses: guesses.into(),
            pending: VecDeque::new(),
            rejected,
        }
    }
}

impl KeySource for ScriptKeys {
    fn next_key(&mut self) -> Result<Option<Key>, GameError> {
        while self.pending.is_empty() {
            let Some(guess) = self.guesses.pop_front() else {
                return Ok(None);
            };

            match Word::new(guess.as_str()) {
                Ok(word) => {
                    self.pending
                        .extend(word.letters().iter().map(|&letter| Key::Letter(letter)));
                    self.pending.push_back(Key::Enter);
                    self.pending.extend([Key::Delete; LENGTH]);
                }
                Err(_) => self.rejected.borrow_mut().push(guess.to_uppercase()),
            }
        }

        Ok(self.pending.pop_front())
    }
}

/// Board that only remembers refused words
struct TranscriptBoard {
    typed: String,
    rejected: Transcript,
}

impl Board for TranscriptBoard {
    fn update_guess(&mut self, _round: usize, letters: &[u8]) -> Result<(), GameError> {
        self.typed = String::from_utf8_lossy(letters).into_owned();
        Ok(())
    }

    fn reveal_hint(&mut self, _round: usize, _hints: &Hints) -> Result<(), GameError> {
        Ok(())
    }

    fn feedback(&mut self, _message: &str) -> Result<(), GameError> {
        Ok(())
    }

    fn mark_lie(&mut self, _round: usize, _position: usize) -> Result<(), GameError> {
        Ok(())
    }

    fn reject_guess(&mut self, _round: usize) -> Result<(), GameError> {
        self.rejected.borrow_mut().push(self.typed.clone());
        Ok(())
    }
}
