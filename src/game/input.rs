//! Turning key presses into validated guesses

use crate::core::{LENGTH, Word};
use crate::wordlists::Dictionary;

/// On-screen keyboard rows; `+` is Enter and `-` is Delete
pub const KEYS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "+ZXCVBNM-"];

/// A discrete key token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// Uppercase ASCII letter
    Letter(u8),
    Enter,
    Delete,
}

impl Key {
    /// Map a typed or layout character to a key
    ///
    /// Letters of either case map to `Letter`, `+`/newline to `Enter` and `-` to
    /// `Delete`. Anything else yields `None`.
    ///
    /// # Examples
    /// ```
    /// use lying_wordle::game::Key;
    ///
    /// assert_eq!(Key::from_char('q'), Some(Key::Letter(b'Q')));
    /// assert_eq!(Key::from_char('+'), Some(Key::Enter));
    /// assert_eq!(Key::from_char('7'), None);
    /// ```
    #[must_use]
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '+' | '\n' | '\r' => Some(Self::Enter),
            '-' => Some(Self::Delete),
            c if c.is_ascii_alphabetic() => Some(Self::Letter(c.to_ascii_uppercase() as u8)),
            _ => None,
        }
    }

    /// Text shown on the key cap
    #[must_use]
    pub fn label(self) -> String {
        match self {
            Self::Letter(letter) => char::from(letter).to_string(),
            Self::Enter => "Enter".to_string(),
            Self::Delete => "Del".to_string(),
        }
    }

    /// Keys laid out as on the on-screen keyboard
    #[must_use]
    pub fn layout() -> Vec<Vec<Self>> {
        KEYS.iter()
            .map(|row| row.chars().filter_map(Self::from_char).collect())
            .collect()
    }
}

/// Result of feeding one key to the collector
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyOutcome {
    /// Letter or Delete processed; the buffer may or may not have changed
    Edited,
    /// Enter with an incomplete buffer, or a key after submission
    Ignored,
    /// Full-length word that is not in the dictionary; buffer kept as typed
    Rejected(String),
    /// Dictionary word accepted as this round's guess
    Submitted(Word),
}

/// Letter buffer for a single round
#[derive(Debug, Clone)]
pub struct InputCollector {
    round: usize,
    letters: Vec<u8>,
    submitted: bool,
}

impl InputCollector {
    #[must_use]
    pub fn new(round: usize) -> Self {
        Self {
            round,
            letters: Vec::with_capacity(LENGTH),
            submitted: false,
        }
    }

    #[must_use]
    pub const fn round(&self) -> usize {
        self.round
    }

    /// Letters typed so far
    #[must_use]
    pub fn letters(&self) -> &[u8] {
        &self.letters
    }

    #[must_use]
    pub const fn is_submitted(&self) -> bool {
        self.submitted
    }

    /// Apply one key press
    pub fn handle(&mut self, key: Key, dictionary: &Dictionary) -> KeyOutcome {
        if self.submitted {
            return KeyOutcome::Ignored;
        }

        match key {
            Key::Delete => {
                self.letters.pop();
                KeyOutcome::Edited
            }
            Key::Letter(letter) => {
                if self.letters.len() < LENGTH {
                    self.letters.push(letter.to_ascii_uppercase());
                }
                KeyOutcome::Edited
            }
            Key::Enter => self.submit(dictionary),
        }
    }

    fn submit(&mut self, dictionary: &Dictionary) -> KeyOutcome {
        if self.letters.len() != LENGTH {
            return KeyOutcome::Ignored;
        }

        match Word::from_letters(&self.letters) {
            Ok(word) if dictionary.contains(&word) => {
                self.submitted = true;
                KeyOutcome::Submitted(word)
            }
            _ => KeyOutcome::Rejected(String::from_utf8_lossy(&self.letters).into_owned()),
        }
    }
}
