//! Formatting utilities for terminal output

use crate::core::{Hints, LENGTH, Verdict, Word};
use colored::{ColoredString, Colorize};

/// Format a hint sequence as emoji string
#[must_use]
pub fn hints_to_emoji(hints: &Hints) -> String {
    hints.to_emoji()
}

/// One letter tile colored by its verdict
#[must_use]
pub fn letter_tile(letter: u8, verdict: Verdict) -> ColoredString {
    let tile = format!(" {} ", char::from(letter));
    match verdict {
        Verdict::Correct => tile.black().on_green().bold(),
        Verdict::Close => tile.black().on_yellow().bold(),
        Verdict::Wrong => tile.white().on_bright_black(),
    }
}

/// A guess rendered as colored tiles
#[must_use]
pub fn colored_guess(word: &Word, hints: &Hints) -> String {
    word.letters()
        .iter()
        .zip(hints.verdicts())
        .map(|(&letter, &verdict)| letter_tile(letter, verdict).to_string())
        .collect()
}

/// Caret line pointing at `position` under a row of three-column tiles
#[must_use]
pub fn lie_marker(position: usize) -> String {
    let mut line = " ".repeat(LENGTH * 3);
    let column = position * 3 + 1;
    line.replace_range(column..=column, "^");
    line.trim_end().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emoji_for_mixed_hints() {
        let hints = Hints::new([
            Verdict::Wrong,
            Verdict::Close,
            Verdict::Correct,
            Verdict::Wrong,
            Verdict::Correct,
        ]);
        assert_eq!(hints_to_emoji(&hints), "⬜🟨🟩⬜🟩");
    }

    #[test]
    fn lie_marker_points_at_tile_centre() {
        assert_eq!(lie_marker(0), " ^");
        assert_eq!(lie_marker(2), "       ^");
        assert_eq!(lie_marker(4), "             ^");
    }

    #[test]
    fn colored_guess_keeps_letters_in_order() {
        let word = Word::new("mango").unwrap();
        let rendered = colored_guess(&word, &Hints::PERFECT);

        let expected: String = word
            .letters()
            .iter()
            .map(|&letter| letter_tile(letter, Verdict::Correct).to_string())
            .collect();
        assert_eq!(rendered, expected);

        let offsets: Vec<usize> = [" M ", " A ", " N ", " G ", " O "]
            .iter()
            .map(|tile| rendered.find(tile).unwrap())
            .collect();
        assert!(offsets.windows(2).all(|pair| pair[0] < pair[1]));
    }
}
