//! Injectable source of uniform random integers
//!
//! Every random decision in a game goes through `RandomSource` so tests can pin the
//! outcome with a seeded generator or a scripted sequence.

use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Uniform integers in a half-open range
pub trait RandomSource {
    /// Uniform value in `[0, bound)`
    ///
    /// `bound` is always at least 1.
    fn below(&mut self, bound: usize) -> usize;
}

/// Adapter exposing any `rand::Rng` as a `RandomSource`
#[derive(Debug, Clone)]
pub struct RngSource<R>(pub R);

impl<R: Rng> RandomSource for RngSource<R> {
    fn below(&mut self, bound: usize) -> usize {
        self.0.random_range(0..bound)
    }
}

impl RngSource<StdRng> {
    /// Seeded generator when `seed` is set, OS entropy otherwise
    #[must_use]
    pub fn from_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self(StdRng::seed_from_u64(seed)),
            None => Self(StdRng::from_os_rng()),
        }
    }
}

impl<T: RandomSource + ?Sized> RandomSource for &mut T {
    fn below(&mut self, bound: usize) -> usize {
        (**self).below(bound)
    }
}
