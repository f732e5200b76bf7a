//! Deterministic random number generation.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical sequence
//! - **Uniform subset sampling**: `sample_indices` draws k distinct indices
//!   without replacement via partial Fisher-Yates
//!
//! All engine randomness flows through one `GameRng` owned by the match:
//! duel move sampling, power-up placement, retaliation targets, and
//! double-attack targets. Seeding the engine makes a whole match replayable.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Deterministic RNG for match randomness.
///
/// Uses ChaCha8 for speed while maintaining cryptographic quality randomness.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Get the seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Generate a random usize in the given range.
    pub fn gen_range_usize(&mut self, range: std::ops::Range<usize>) -> usize {
        self.inner.gen_range(range)
    }

    /// Choose a random element from a slice.
    #[must_use]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.inner)
    }

    /// Sample `k` distinct indices uniformly from `0..n`, without replacement.
    ///
    /// Partial Fisher-Yates: only the first `min(k, n)` positions of the
    /// index pool are shuffled. Unlike sorting by a random comparator, every
    /// k-subset is equally likely.
    ///
    /// Returns fewer than `k` indices when `n < k`.
    pub fn sample_indices(&mut self, n: usize, k: usize) -> Vec<usize> {
        let k = k.min(n);
        let mut pool: Vec<usize> = (0..n).collect();

        for i in 0..k {
            let j = self.gen_range_usize(i..n);
            pool.swap(i, j);
        }

        pool.truncate(k);
        pool
    }
}
