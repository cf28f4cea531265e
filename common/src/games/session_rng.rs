use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Seeded randomness for one session, so a seed replays the same food.
pub struct SessionRng {
    rng: StdRng,
    seed: u64,
}

impl SessionRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    pub fn from_random() -> Self {
        Self::new(rand::rng().random())
    }

    pub fn from_optional_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::new(seed),
            None => Self::from_random(),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Uniform integer in `low..=high`.
    pub fn inclusive(&mut self, low: i32, high: i32) -> i32 {
        self.rng.random_range(low..=high)
    }
}
