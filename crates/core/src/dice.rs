//! Randomness source for question parameters and bookwork triggers.

use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};

/// Seedable random source.
///
/// Production code uses [`Dice::from_entropy`]; tests and the `--seed` flag
/// use [`Dice::seeded`] so a whole round can be reproduced.
#[derive(Debug, Clone)]
pub struct Dice {
    rng: StdRng,
}

impl Dice {
    #[must_use]
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Uniform integer in `[min, max]`. Returns `min` when the range is empty.
    pub fn range(&mut self, min: i64, max: i64) -> i64 {
        if min >= max {
            return min;
        }
        self.rng.random_range(min..=max)
    }

    pub fn coin(&mut self) -> bool {
        self.rng.random_bool(0.5)
    }

    /// Returns true with probability `p`. Values outside `[0, 1]` saturate.
    pub fn chance(&mut self, p: f64) -> bool {
        if !p.is_finite() || p <= 0.0 {
            return false;
        }
        if p >= 1.0 {
            return true;
        }
        self.rng.random_bool(p)
    }

    pub fn pick<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        items.choose(&mut self.rng)
    }
}

impl Default for Dice {
    fn default() -> Self {
        Self::from_entropy()
    }
}
