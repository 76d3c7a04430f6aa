//! Word lists for the game
//!
//! Provides embedded word lists compiled into the binary for zero-cost access.

mod dictionary;
mod embedded;
pub mod loader;

pub use dictionary::Dictionary;
pub use embedded::{DICTIONARY, DICTIONARY_COUNT, EASY_WORDS, EASY_WORDS_COUNT};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dictionary_count_matches_const() {
        assert_eq!(DICTIONARY.len(), DICTIONARY_COUNT);
    }

    #[test]
    fn easy_words_count_matches_const() {
        assert_eq!(EASY_WORDS.len(), EASY_WORDS_COUNT);
    }

    #[test]
    fn easy_words_are_valid_words() {
        for &word in EASY_WORDS {
            assert_eq!(word.len(), 5, "Word '{word}' is not 5 letters");
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn dictionary_words_are_valid_words() {
        for &word in DICTIONARY {
            assert_eq!(word.len(), 5, "Word '{word}' is not 5 letters");
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn easy_words_subset_of_dictionary() {
        let dictionary: std::collections::HashSet<_> = DICTIONARY.iter().collect();

        for answer in EASY_WORDS {
            assert!(
                dictionary.contains(answer),
                "Answer '{answer}' not in dictionary"
            );
        }
    }
}
