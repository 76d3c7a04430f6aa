//! Hint scoring
//!
//! `Hints` is the per-round verdict sequence: one `Verdict` per letter position of a
//! guess, computed against the hidden answer.

use super::{LENGTH, Verdict, Word};
use std::fmt;
use std::ops::Index;

/// Verdicts for one guess, index = letter position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Hints([Verdict; LENGTH]);

impl Hints {
    /// All correct (the guess is the answer)
    pub const PERFECT: Self = Self([Verdict::Correct; LENGTH]);

    /// Build hints from raw verdicts
    #[inline]
    #[must_use]
    pub const fn new(verdicts: [Verdict; LENGTH]) -> Self {
        Self(verdicts)
    }

    /// Calculate the hints when `guess` is guessed and `answer` is the target
    ///
    /// # Algorithm
    /// 1. First pass: every exact position match is `Correct`, everything else `Wrong`
    /// 2. Second pass: each `Wrong` position `i` looks for the first answer position
    ///    `j != i` (ascending) holding the same letter, where `j` is not itself an exact
    ///    match and has not been consumed yet. A hit makes `i` `Close` and consumes `j`.
    ///
    /// Each answer letter satisfies at most one guess letter.
    ///
    /// # Examples
    /// ```
    /// use lying_wordle::core::{Hints, Verdict, Word};
    ///
    /// let guess = Word::new("crane").unwrap();
    /// let answer = Word::new("mango").unwrap();
    /// let hints = Hints::calculate(&guess, &answer);
    ///
    /// assert_eq!(hints[1], Verdict::Wrong);
    /// assert_eq!(hints[2], Verdict::Close);
    /// assert_eq!(hints[3], Verdict::Close);
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, answer: &Word) -> Self {
        let guess = guess.letters();
        let answer = answer.letters();
        let mut verdicts = [Verdict::Wrong; LENGTH];
        let mut consumed = [false; LENGTH];

        // Allow: Index needed to compare guess[i], answer[i] and set verdicts[i]
        #[allow(clippy::needless_range_loop)]
        for i in 0..LENGTH {
            if guess[i] == answer[i] {
                verdicts[i] = Verdict::Correct;
            }
        }

        #[allow(clippy::needless_range_loop)]
        for i in 0..LENGTH {
            if verdicts[i] == Verdict::Correct {
                continue;
            }

            let target = (0..LENGTH).find(|&j| {
                j != i && guess[i] == answer[j] && guess[j] != answer[j] && !consumed[j]
            });

            if let Some(j) = target {
                verdicts[i] = Verdict::Close;
                consumed[j] = true;
            }
        }

        Self(verdicts)
    }

    /// Verdicts as a slice
    #[inline]
    #[must_use]
    pub const fn verdicts(&self) -> &[Verdict; LENGTH] {
        &self.0
    }

    /// Replace the verdict at `position`
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    pub fn set(&mut self, position: usize, verdict: Verdict) {
        self.0[position] = verdict;
    }

    /// Check if every position is correct
    #[inline]
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        self.count(Verdict::Correct) == LENGTH
    }

    /// Count positions carrying `verdict`
    #[must_use]
    pub fn count(&self, verdict: Verdict) -> usize {
        self.0.iter().filter(|&&v| v == verdict).count()
    }

    /// Positions that are not `Correct`, ascending
    pub fn unsolved_positions(&self) -> impl Iterator<Item = usize> + '_ {
        self.0
            .iter()
            .enumerate()
            .filter(|(_, v)| **v != Verdict::Correct)
            .map(|(i, _)| i)
    }

    /// Render as a string like "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|v| v.emoji()).collect()
    }
}

impl Index<usize> for Hints {
    type Output = Verdict;

    fn index(&self, position: usize) -> &Verdict {
        &self.0[position]
    }
}

impl fmt::Display for Hints {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_emoji())
    }
}
