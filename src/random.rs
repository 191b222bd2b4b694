//! Random source backed by the `rand` crate.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::core::RandomSource;
use crate::types::GRID_SIZE;

/// Uniform axis sampling from a `StdRng`.
#[derive(Debug, Clone)]
pub struct StdRandom {
    rng: StdRng,
}

impl StdRandom {
    /// Reproducible fruit placement for a given seed
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Seeded when `seed` is given, otherwise from OS entropy
    pub fn new(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::seeded(seed),
            None => Self::from_entropy(),
        }
    }
}

impl RandomSource for StdRandom {
    fn sample_axis(&mut self) -> i8 {
        self.rng.gen_range(0..GRID_SIZE)
    }
}
