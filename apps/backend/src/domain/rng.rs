//! Seedable randomness source shared by shuffling and bot decisions.
//!
//! Every random choice the engine makes goes through [`MatchRng`], so a match
//! constructed with a fixed seed replays identically. Production matches seed
//! from OS entropy.

use rand::seq::{IndexedRandom, SliceRandom};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

#[derive(Debug, Clone)]
pub struct MatchRng {
    inner: ChaCha8Rng,
}

impl MatchRng {
    /// Deterministic RNG for tests and replays.
    pub fn seeded(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// RNG seeded from OS entropy.
    pub fn from_entropy() -> Self {
        Self {
            inner: ChaCha8Rng::from_os_rng(),
        }
    }

    /// Uniform random permutation in place.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        slice.shuffle(&mut self.inner);
    }

    /// Uniform choice from a slice; `None` when empty.
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        slice.choose(&mut self.inner)
    }

    /// Bernoulli draw with probability `p` of `true`.
    pub fn chance(&mut self, p: f64) -> bool {
        self.inner.random_bool(p)
    }
}
