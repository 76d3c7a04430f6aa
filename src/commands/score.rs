//! Word scoring command
//!
//! Scores one guess against one answer and returns the true hints, with no lie applied.

use crate::core::{Hints, Word};
use crate::game::GameError;
use crate::wordlists::Dictionary;

/// Result of scoring a guess
pub struct ScoreResult {
    pub guess: Word,
    pub answer: Word,
    pub hints: Hints,
    pub in_dictionary: bool,
}

/// Score `guess` against `answer`
///
/// The guess does not have to be a dictionary word; the result only notes whether it is.
///
/// # Errors
///
/// Returns `GameError::InvalidGuessLength` if either word is not 5 letters, or
/// `GameError::UnknownWord` if either contains anything but letters.
pub fn score_words(
    guess: &str,
    answer: &str,
    dictionary: &Dictionary,
) -> Result<ScoreResult, GameError> {
    let guess = parse_word(guess)?;
    let answer = parse_word(answer)?;
    let hints = Hints::calculate(&guess, &answer);

    Ok(ScoreResult {
        in_dictionary: dictionary.contains(&guess),
        guess,
        answer,
        hints,
    })
}

pub(crate) fn parse_word(text: &str) -> Result<Word, GameError> {
    use crate::core::WordError;

    Word::new(text).map_err(|e| match e {
        WordError::InvalidLength(len) => GameError::InvalidGuessLength(len),
        WordError::NonAscii | WordError::InvalidCharacters => {
            GameError::UnknownWord(text.to_string())
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Verdict;

    #[test]
    fn score_reports_true_hints() {
        let dict = Dictionary::from_words(["crane"], ["mango"]);
        let result = score_words("crane", "mango", &dict).unwrap();

        assert_eq!(result.hints[2], Verdict::Close);
        assert_eq!(result.hints[3], Verdict::Close);
        assert!(result.in_dictionary);
    }

    #[test]
    fn score_allows_non_dictionary_guess() {
        let dict = Dictionary::from_words(["crane"], ["mango"]);
        let result = score_words("zzzzz", "mango", &dict).unwrap();

        assert!(!result.in_dictionary);
        assert_eq!(result.hints.count(Verdict::Wrong), 5);
    }

    #[test]
    fn score_rejects_bad_length() {
        let dict = Dictionary::from_words(["crane"], ["mango"]);
        assert!(matches!(
            score_words("cran", "mango", &dict),
            Err(GameError::InvalidGuessLength(4))
        ));
        assert!(matches!(
            score_words("cr4ne", "mango", &dict),
            Err(GameError::UnknownWord(_))
        ));
    }
}
