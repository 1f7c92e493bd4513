use super::*;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Seeded general purpose source, the default for play.
#[derive(Clone, Debug)]
pub struct RandomSource {
    rng: SmallRng,
}

impl RandomSource {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl ColorSource for RandomSource {
    fn next_below(&mut self, bound: usize) -> usize {
        self.rng.random_range(0..bound)
    }

    fn reseed(&mut self, seed: u64) {
        self.rng = SmallRng::seed_from_u64(seed);
    }
}
