//! Deterministic index source.

use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256StarStar;

use super::IndexSource;

/// Seeded Xoshiro256** stream. Same seed, same passwords.
pub struct SeededSource {
    seed: u64,
    rng: Xoshiro256StarStar,
}

impl SeededSource {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Xoshiro256StarStar::seed_from_u64(seed),
        }
    }

    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl IndexSource for SeededSource {
    #[inline]
    fn next_index(&mut self, n: usize) -> usize {
        debug_assert!(n > 0, "index bound must be positive");
        self.rng.gen_range(0..n)
    }

    fn name(&self) -> &'static str {
        "seeded (xoshiro256**)"
    }
}
