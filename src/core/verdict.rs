//! Per-letter feedback classification
//!
//! The three verdicts form a cycle `Wrong → Close → Correct → Wrong`. The ordering is
//! only used for modulo-3 stepping by the obfuscator, never as a ranking.

use std::fmt;

/// Feedback for a single guessed letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verdict {
    /// Letter does not appear in the answer (or every copy is already accounted for)
    Wrong,
    /// Letter appears in the answer at another position
    Close,
    /// Letter is in the correct position
    Correct,
}

impl Verdict {
    /// All verdicts in cycle order
    pub const ALL: [Self; 3] = [Self::Wrong, Self::Close, Self::Correct];

    /// Position of this verdict on the cycle (0-2)
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Wrong => 0,
            Self::Close => 1,
            Self::Correct => 2,
        }
    }

    /// Verdict at `index` modulo 3
    #[inline]
    #[must_use]
    pub const fn from_index(index: usize) -> Self {
        Self::ALL[index % 3]
    }

    /// Move `steps` places around the cycle
    ///
    /// # Examples
    /// ```
    /// use lying_wordle::core::Verdict;
    ///
    /// assert_eq!(Verdict::Correct.advance(1), Verdict::Wrong);
    /// assert_eq!(Verdict::Wrong.advance(2), Verdict::Correct);
    /// ```
    #[inline]
    #[must_use]
    pub const fn advance(self, steps: usize) -> Self {
        Self::from_index(self.index() + steps)
    }

    /// Square emoji used when printing hints
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Wrong => '⬜',
            Self::Close => '🟨',
            Self::Correct => '🟩',
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Wrong => "wrong",
            Self::Close => "close",
            Self::Correct => "correct",
        };
        f.write_str(name)
    }
}
