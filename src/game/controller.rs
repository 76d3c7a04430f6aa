//! Round state machine
//!
//! One `RoundController` runs one game: it waits for a guess, scores it, lies about
//! one verdict unless the guess wins, and decides whether play continues.
//!
//! ```text
//! AwaitingGuess(r) --guess == answer--> Won { round: r }
//! AwaitingGuess(r) --miss, r + 1 < rounds--> AwaitingGuess(r + 1)
//! AwaitingGuess(r) --miss, r + 1 == rounds--> Lost
//! ```

use super::config::GameConfig;
use super::error::GameError;
use super::input::{InputCollector, Key, KeyOutcome};
use super::lies::LieLog;
use super::obfuscator::obfuscate;
use super::random::RandomSource;
use crate::core::{Hints, Word};
use crate::wordlists::Dictionary;

/// Shown when a full-length guess is not a dictionary word
pub const INVALID_WORD: &str = "Invalid Word";

/// Shown when the answer is found
pub const WIN_MESSAGE: &str = "Nice Work!";

/// Shown when the last round is missed
#[must_use]
pub fn loss_message(answer: &Word) -> String {
    format!("GAME OVER\nCorrect Answer was: {answer}")
}

/// Presentation sink for the board
pub trait Board {
    /// Letters typed so far in `round`
    ///
    /// # Errors
    /// Implementations may fail on output errors.
    fn update_guess(&mut self, round: usize, letters: &[u8]) -> Result<(), GameError>;

    /// Final verdicts for `round`, as the player is allowed to see them
    ///
    /// # Errors
    /// Implementations may fail on output errors.
    fn reveal_hint(&mut self, round: usize, hints: &Hints) -> Result<(), GameError>;

    /// Replace the feedback line; an empty message clears it
    ///
    /// # Errors
    /// Implementations may fail on output errors.
    fn feedback(&mut self, message: &str) -> Result<(), GameError>;

    /// Flag the lie told in `round`
    ///
    /// # Errors
    /// Implementations may fail on output errors.
    fn mark_lie(&mut self, round: usize, position: usize) -> Result<(), GameError>;

    /// Transient rejection effect for an unknown word
    ///
    /// # Errors
    /// Implementations may fail on output errors.
    fn reject_guess(&mut self, _round: usize) -> Result<(), GameError> {
        Ok(())
    }
}

/// Source of discrete key presses
pub trait KeySource {
    /// Block until the next key; `None` once input is exhausted or the player quits
    ///
    /// # Errors
    /// Returns an error if reading input fails.
    fn next_key(&mut self) -> Result<Option<Key>, GameError>;
}

/// Where the game stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundState {
    AwaitingGuess(usize),
    Won { round: usize },
    Lost,
}

impl RoundState {
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::AwaitingGuess(_))
    }
}

/// One resolved round
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundRecord {
    pub guess: Word,
    /// Verdicts before obfuscation
    pub truth: Hints,
    /// Verdicts revealed to the player
    pub shown: Hints,
    /// Position that was lied about
    pub lie: Option<usize>,
}

/// Drives one game from the first guess to a win or loss
#[derive(Debug)]
pub struct RoundController<R> {
    answer: Word,
    rounds: usize,
    state: RoundState,
    lies: LieLog,
    history: Vec<RoundRecord>,
    rng: R,
}

impl<R: RandomSource> RoundController<R> {
    /// Start a game against a known answer
    ///
    /// # Errors
    /// Returns `GameError::InvalidConfig` if the configuration is rejected.
    pub fn new(answer: Word, config: &GameConfig, rng: R) -> Result<Self, GameError> {
        config.validate()?;
        tracing::debug!(%answer, rounds = config.rounds, "new game");

        Ok(Self {
            answer,
            rounds: config.rounds,
            state: RoundState::AwaitingGuess(0),
            lies: LieLog::new(),
            history: Vec::new(),
            rng,
        })
    }

    /// Start a game with an answer drawn from the dictionary's pool
    ///
    /// # Errors
    /// Returns `GameError::EmptyAnswerPool` or `GameError::InvalidConfig`.
    pub fn with_random_answer(
        dictionary: &Dictionary,
        config: &GameConfig,
        mut rng: R,
    ) -> Result<Self, GameError> {
        let answer = dictionary.choose_answer(&mut rng)?.clone();
        Self::new(answer, config, rng)
    }

    #[must_use]
    pub const fn state(&self) -> RoundState {
        self.state
    }

    #[must_use]
    pub const fn answer(&self) -> &Word {
        &self.answer
    }

    #[must_use]
    pub const fn lies(&self) -> &LieLog {
        &self.lies
    }

    #[must_use]
    pub fn history(&self) -> &[RoundRecord] {
        &self.history
    }

    /// Play until the game ends
    ///
    /// # Errors
    /// Returns `GameError::GameOver` if the game already ended,
    /// `GameError::InputClosed` if the key source runs dry first, or any error raised
    /// by the board.
    pub fn play<K, B>(
        &mut self,
        keys: &mut K,
        board: &mut B,
        dictionary: &Dictionary,
    ) -> Result<RoundState, GameError>
    where
        K: KeySource + ?Sized,
        B: Board + ?Sized,
    {
        if self.state.is_over() {
            return Err(GameError::GameOver);
        }
        tracing::info!(rounds = self.rounds, "game started");

        while let RoundState::AwaitingGuess(round) = self.state {
            let guess = collect_guess(round, keys, board, dictionary)?;
            self.submit(guess, board)?;
        }

        tracing::info!(state = ?self.state, lies = self.lies.len(), "game finished");
        Ok(self.state)
    }

    /// Resolve the current round with an accepted guess
    ///
    /// The guess must already be a dictionary word; `collect_guess` enforces that.
    ///
    /// # Errors
    /// Returns `GameError::GameOver` once the game has ended, or any board error.
    pub fn submit<B>(&mut self, guess: Word, board: &mut B) -> Result<RoundState, GameError>
    where
        B: Board + ?Sized,
    {
        let RoundState::AwaitingGuess(round) = self.state else {
            return Err(GameError::GameOver);
        };

        let truth = Hints::calculate(&guess, &self.answer);
        tracing::debug!(round, %guess, hints = %truth, "scored guess");

        if guess == self.answer {
            board.feedback(WIN_MESSAGE)?;
            self.reveal_lies(board)?;
            board.reveal_hint(round, &truth)?;

            self.history.push(RoundRecord {
                guess,
                truth,
                shown: truth,
                lie: None,
            });
            self.state = RoundState::Won { round };
            return Ok(self.state);
        }

        let mut shown = truth;
        let lie = match obfuscate(&mut shown, &mut self.rng) {
            Ok(position) => {
                self.lies.record(round, position);
                Some(position)
            }
            Err(err) => {
                tracing::warn!(round, %err, "hints left unobfuscated");
                None
            }
        };
        board.reveal_hint(round, &shown)?;

        self.history.push(RoundRecord {
            guess,
            truth,
            shown,
            lie,
        });

        self.state = if round + 1 == self.rounds {
            board.feedback(&loss_message(&self.answer))?;
            self.reveal_lies(board)?;
            RoundState::Lost
        } else {
            RoundState::AwaitingGuess(round + 1)
        };
        tracing::debug!(state = ?self.state, "round resolved");

        Ok(self.state)
    }

    fn reveal_lies<B>(&self, board: &mut B) -> Result<(), GameError>
    where
        B: Board + ?Sized,
    {
        for lie in &self.lies {
            board.mark_lie(lie.round, lie.position)?;
        }
        Ok(())
    }
}

/// Feed keys into a fresh collector until a dictionary word is submitted
///
/// Unknown words leave the buffer intact and keep the round open.
///
/// # Errors
/// Returns `GameError::InputClosed` if keys run out first, or any board error.
pub fn collect_guess<K, B>(
    round: usize,
    keys: &mut K,
    board: &mut B,
    dictionary: &Dictionary,
) -> Result<Word, GameError>
where
    K: KeySource + ?Sized,
    B: Board + ?Sized,
{
    let mut collector = InputCollector::new(round);

    loop {
        let key = keys.next_key()?.ok_or(GameError::InputClosed)?;

        match collector.handle(key, dictionary) {
            KeyOutcome::Edited => board.update_guess(round, collector.letters())?,
            KeyOutcome::Ignored => {}
            KeyOutcome::Rejected(word) => {
                tracing::debug!(round, %word, "rejected unknown word");
                board.feedback(INVALID_WORD)?;
                board.reject_guess(round)?;
            }
            KeyOutcome::Submitted(word) => {
                board.feedback("")?;
                return Ok(word);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{LENGTH, Verdict};
    use crate::game::RngSource;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use std::collections::VecDeque;

    #[derive(Debug, Clone, PartialEq, Eq)]
    enum Event {
        Update(usize, String),
        Reveal(usize, Hints),
        Feedback(String),
        Lie(usize, usize),
        Shake(usize),
    }

    #[derive(Default)]
    struct RecordingBoard(Vec<Event>);

    impl Board for RecordingBoard {
        fn update_guess(&mut self, round: usize, letters: &[u8]) -> Result<(), GameError> {
            self.0.push(Event::Update(
                round,
                String::from_utf8_lossy(letters).into_owned(),
            ));
            Ok(())
        }

        fn reveal_hint(&mut self, round: usize, hints: &Hints) -> Result<(), GameError> {
            self.0.push(Event::Reveal(round, *hints));
            Ok(())
        }

        fn feedback(&mut self, message: &str) -> Result<(), GameError> {
            self.0.push(Event::Feedback(message.to_string()));
            Ok(())
        }

        fn mark_lie(&mut self, round: usize, position: usize) -> Result<(), GameError> {
            self.0.push(Event::Lie(round, position));
            Ok(())
        }

        fn reject_guess(&mut self, round: usize) -> Result<(), GameError> {
            self.0.push(Event::Shake(round));
            Ok(())
        }
    }

    struct ScriptedKeys(VecDeque<Key>);

    impl ScriptedKeys {
        fn typing(text: &str) -> Self {
            Self(text.chars().filter_map(Key::from_char).collect())
        }
    }

    impl KeySource for ScriptedKeys {
        fn next_key(&mut self) -> Result<Option<Key>, GameError> {
            Ok(self.0.pop_front())
        }
    }

    fn dictionary() -> Dictionary {
        Dictionary::from_words(
            ["crane", "ghost", "slate", "pride", "plant", "robot", "mango"],
            ["mango"],
        )
    }

    fn controller(answer: &str) -> RoundController<RngSource<ChaCha8Rng>> {
        RoundController::new(
            Word::new(answer).unwrap(),
            &GameConfig::default(),
            RngSource(ChaCha8Rng::seed_from_u64(42)),
        )
        .unwrap()
    }

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    #[test]
    fn starts_awaiting_round_zero() {
        let game = controller("mango");
        assert_eq!(game.state(), RoundState::AwaitingGuess(0));
        assert!(game.lies().is_empty());
    }

    #[test]
    fn miss_is_obfuscated_and_advances() {
        let mut game = controller("mango");
        let mut board = RecordingBoard::default();

        let state = game.submit(word("crane"), &mut board).unwrap();

        assert_eq!(state, RoundState::AwaitingGuess(1));
        assert_eq!(game.lies().len(), 1);

        let record = &game.history()[0];
        let lie = record.lie.unwrap();
        assert_eq!(game.lies().position_for(0), Some(lie));
        assert_ne!(record.truth[lie], record.shown[lie]);
        assert_eq!(
            (0..LENGTH)
                .filter(|&i| record.truth[i] != record.shown[i])
                .count(),
            1
        );
        assert_eq!(board.0, vec![Event::Reveal(0, record.shown)]);
    }

    #[test]
    fn exact_answer_wins_with_true_hints() {
        let mut game = controller("mango");
        let mut board = RecordingBoard::default();

        game.submit(word("crane"), &mut board).unwrap();
        let lie = game.lies().position_for(0).unwrap();
        board.0.clear();

        let state = game.submit(word("mango"), &mut board).unwrap();

        assert_eq!(state, RoundState::Won { round: 1 });
        assert_eq!(game.lies().len(), 1);
        assert_eq!(game.history()[1].lie, None);
        assert_eq!(
            board.0,
            vec![
                Event::Feedback(WIN_MESSAGE.to_string()),
                Event::Lie(0, lie),
                Event::Reveal(1, Hints::PERFECT),
            ]
        );
    }

    #[test]
    fn first_guess_win_has_no_lies() {
        let mut game = controller("mango");
        let mut board = RecordingBoard::default();

        assert_eq!(
            game.submit(word("mango"), &mut board).unwrap(),
            RoundState::Won { round: 0 }
        );
        assert!(game.lies().is_empty());
        assert!(!board.0.iter().any(|e| matches!(e, Event::Lie(..))));
    }

    #[test]
    fn eighth_miss_loses() {
        let mut game = controller("mango");
        let mut board = RecordingBoard::default();

        for round in 0..7 {
            assert_eq!(
                game.submit(word("crane"), &mut board).unwrap(),
                RoundState::AwaitingGuess(round + 1)
            );
        }
        board.0.clear();

        assert_eq!(
            game.submit(word("ghost"), &mut board).unwrap(),
            RoundState::Lost
        );
        assert_eq!(game.lies().len(), 8);
        assert!(board.0.contains(&Event::Feedback(
            "GAME OVER\nCorrect Answer was: MANGO".to_string()
        )));
        assert_eq!(
            board.0.iter().filter(|e| matches!(e, Event::Lie(..))).count(),
            8
        );
    }

    #[test]
    fn submit_after_game_over_errors() {
        let mut game = controller("mango");
        let mut board = RecordingBoard::default();
        game.submit(word("mango"), &mut board).unwrap();

        assert!(matches!(
            game.submit(word("crane"), &mut board),
            Err(GameError::GameOver)
        ));
    }

    #[test]
    fn play_refuses_finished_game() {
        let dict = dictionary();
        let mut game = controller("mango");
        let mut board = RecordingBoard::default();
        game.submit(word("mango"), &mut board).unwrap();
        assert!(game.state().is_over());
        board.0.clear();

        let result = game.play(&mut ScriptedKeys::typing("crane+"), &mut board, &dict);

        assert!(matches!(result, Err(GameError::GameOver)));
        assert!(board.0.is_empty());
        assert!(!RoundState::AwaitingGuess(3).is_over());
        assert!(RoundState::Lost.is_over());
    }

    #[test]
    fn single_round_game_loses_immediately() {
        let mut game = RoundController::new(
            word("mango"),
            &GameConfig::new(1, None),
            RngSource(ChaCha8Rng::seed_from_u64(1)),
        )
        .unwrap();
        let mut board = RecordingBoard::default();

        assert_eq!(
            game.submit(word("crane"), &mut board).unwrap(),
            RoundState::Lost
        );
    }

    #[test]
    fn invalid_word_keeps_round_and_buffer() {
        let dict = dictionary();
        let mut board = RecordingBoard::default();
        let mut keys = ScriptedKeys::typing("zzzzz+");

        let result = collect_guess(0, &mut keys, &mut board, &dict);

        // Keys ran out while the round was still open
        assert!(matches!(result, Err(GameError::InputClosed)));
        assert_eq!(
            &board.0[board.0.len() - 2..],
            &[Event::Feedback(INVALID_WORD.to_string()), Event::Shake(0)]
        );
        assert_eq!(
            board.0[board.0.len() - 3],
            Event::Update(0, "ZZZZZ".to_string())
        );
    }

    #[test]
    fn invalid_word_then_valid_word_in_same_round() {
        let dict = dictionary();
        let mut game = controller("mango");
        let mut board = RecordingBoard::default();
        let mut keys = ScriptedKeys::typing("cranx+-e+");

        let guess = collect_guess(0, &mut keys, &mut board, &dict).unwrap();
        assert_eq!(guess, word("crane"));
        assert_eq!(game.state(), RoundState::AwaitingGuess(0));

        game.submit(guess, &mut board).unwrap();
        assert_eq!(game.state(), RoundState::AwaitingGuess(1));
    }

    #[test]
    fn play_end_to_end_mango() {
        let dict = dictionary();
        let mut game = controller("mango");
        let mut board = RecordingBoard::default();
        let mut keys = ScriptedKeys::typing("crane+ghost+mango+");

        let state = game.play(&mut keys, &mut board, &dict).unwrap();

        assert_eq!(state, RoundState::Won { round: 2 });
        let rounds: Vec<usize> = game.lies().iter().map(|lie| lie.round).collect();
        assert_eq!(rounds, vec![0, 1]);
        assert!(game.lies().iter().all(|lie| lie.position < LENGTH));
        assert_eq!(game.history()[2].shown, Hints::PERFECT);
    }

    #[test]
    fn play_stops_when_keys_run_out() {
        let dict = dictionary();
        let mut game = controller("mango");
        let mut board = RecordingBoard::default();
        let mut keys = ScriptedKeys::typing("crane+gho");

        assert!(matches!(
            game.play(&mut keys, &mut board, &dict),
            Err(GameError::InputClosed)
        ));
        assert_eq!(game.state(), RoundState::AwaitingGuess(1));
    }

    #[test]
    fn random_answer_comes_from_pool() {
        let dict = dictionary();
        let game = RoundController::with_random_answer(
            &dict,
            &GameConfig::default(),
            RngSource(ChaCha8Rng::seed_from_u64(5)),
        )
        .unwrap();

        assert_eq!(game.answer(), &word("mango"));
    }

    #[test]
    fn four_correct_miss_never_shows_a_win() {
        // PANGO against MANGO leaves one wrong letter
        let dict = Dictionary::from_words(["pango"], ["mango"]);
        let mut board = RecordingBoard::default();

        for seed in 0..200 {
            let mut game = RoundController::new(
                word("mango"),
                &GameConfig::default(),
                RngSource(ChaCha8Rng::seed_from_u64(seed)),
            )
            .unwrap();
            let guess = collect_guess(0, &mut ScriptedKeys::typing("pango+"), &mut board, &dict)
                .unwrap();
            game.submit(guess, &mut board).unwrap();

            let record = &game.history()[0];
            assert_eq!(record.truth.count(Verdict::Correct), 4);
            assert!(!record.shown.is_perfect());
            assert_ne!(record.lie, Some(0));
        }
    }
}
