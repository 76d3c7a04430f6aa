//! Valid guesses and the answer pool

use super::loader::{load_from_file, words_from_slice};
use super::{DICTIONARY, EASY_WORDS};
use crate::core::Word;
use crate::game::{GameError, RandomSource};
use rustc_hash::FxHashSet;
use std::path::Path;

/// Words a player may submit, plus the pool the hidden answer is drawn from
///
/// Every answer is also a valid guess.
#[derive(Debug, Clone)]
pub struct Dictionary {
    words: FxHashSet<Word>,
    answers: Vec<Word>,
}

impl Dictionary {
    /// Build from arbitrary word lists, skipping entries that are not valid words
    pub fn from_words<G, A>(guesses: G, answers: A) -> Self
    where
        G: IntoIterator,
        G::Item: AsRef<str>,
        A: IntoIterator,
        A::Item: AsRef<str>,
    {
        let guesses: Vec<G::Item> = guesses.into_iter().collect();
        let answers: Vec<A::Item> = answers.into_iter().collect();
        Self::from_parsed(words_from_slice(&guesses), words_from_slice(&answers))
    }

    /// Lists compiled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        Self::from_parsed(words_from_slice(DICTIONARY), words_from_slice(EASY_WORDS))
    }

    /// Load either list from disk, falling back to the embedded one when no path is given
    ///
    /// # Errors
    /// Returns `GameError::Io` if a given file cannot be read.
    pub fn load(dictionary: Option<&Path>, answers: Option<&Path>) -> Result<Self, GameError> {
        let guesses = match dictionary {
            Some(path) => load_from_file(path)?,
            None => words_from_slice(DICTIONARY),
        };
        let answers = match answers {
            Some(path) => load_from_file(path)?,
            None => words_from_slice(EASY_WORDS),
        };
        Ok(Self::from_parsed(guesses, answers))
    }

    fn from_parsed(guesses: Vec<Word>, mut answers: Vec<Word>) -> Self {
        let mut words: FxHashSet<Word> = guesses.into_iter().collect();
        words.extend(answers.iter().cloned());

        let mut seen = FxHashSet::default();
        answers.retain(|word| seen.insert(word.clone()));

        tracing::debug!(
            guesses = words.len(),
            answers = answers.len(),
            "dictionary loaded"
        );
        Self { words, answers }
    }

    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.words.contains(word)
    }

    /// Check a raw string, case-insensitively
    #[must_use]
    pub fn contains_str(&self, text: &str) -> bool {
        Word::new(text).is_ok_and(|word| self.contains(&word))
    }

    #[must_use]
    pub fn answers(&self) -> &[Word] {
        &self.answers
    }

    /// Number of valid guesses
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Add `word` to the answer pool, making it guessable too
    pub fn add_answer(&mut self, word: Word) {
        if !self.answers.contains(&word) {
            self.answers.push(word.clone());
        }
        self.words.insert(word);
    }

    /// Draw the hidden answer uniformly from the answer pool
    ///
    /// # Errors
    /// Returns `GameError::EmptyAnswerPool` if there are no answers.
    pub fn choose_answer(&self, rng: &mut impl RandomSource) -> Result<&Word, GameError> {
        if self.answers.is_empty() {
            return Err(GameError::EmptyAnswerPool);
        }
        Ok(&self.answers[rng.below(self.answers.len())])
    }
}
