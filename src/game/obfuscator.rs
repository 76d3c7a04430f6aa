//! Adversarial hint corruption
//!
//! Every losing round gets exactly one false verdict. The position is random, except
//! when a single letter is left unsolved: then the lie always lands on one of the
//! correct letters, so obfuscation can neither complete the word nor always point at
//! the obvious wrong slot.

use super::error::GameError;
use super::random::RandomSource;
use crate::core::{Hints, LENGTH, Verdict};

/// Corrupt exactly one verdict of `hints` and return the altered position
///
/// The new verdict is the old one advanced one or two steps around the
/// `Wrong → Close → Correct` cycle, so it always differs from the truth.
///
/// # Errors
/// Returns `GameError::UnreachableAllCorrectObfuscation` when every verdict is
/// already correct. `hints` is left untouched in that case.
///
/// # Examples
/// ```
/// use lying_wordle::core::{Hints, Verdict};
/// use lying_wordle::game::{RngSource, obfuscate};
///
/// let truth = Hints::new([Verdict::Wrong; 5]);
/// let mut hints = truth;
/// let mut rng = RngSource::from_seed(Some(3));
///
/// let position = obfuscate(&mut hints, &mut rng).unwrap();
/// assert_ne!(hints[position], truth[position]);
/// ```
pub fn obfuscate(hints: &mut Hints, rng: &mut impl RandomSource) -> Result<usize, GameError> {
    let position = choose_position(hints, rng)?;
    let old = hints[position];
    let new = old.advance(1 + rng.below(2));
    hints.set(position, new);

    tracing::trace!(position, %old, %new, "obfuscated hint");
    Ok(position)
}

fn choose_position(hints: &Hints, rng: &mut impl RandomSource) -> Result<usize, GameError> {
    let correct = hints.count(Verdict::Correct);

    if correct == LENGTH {
        return Err(GameError::UnreachableAllCorrectObfuscation);
    }

    if correct == LENGTH - 1 {
        // Skip the lone unsolved slot by a non-zero offset
        let unsolved = hints
            .unsolved_positions()
            .next()
            .ok_or(GameError::UnreachableAllCorrectObfuscation)?;
        let offset = 1 + rng.below(LENGTH - 1);
        return Ok((unsolved + offset) % LENGTH);
    }

    Ok(rng.below(LENGTH))
}
