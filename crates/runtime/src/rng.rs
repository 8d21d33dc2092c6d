//! Production randomness sources for the core's injectable RNG.

use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

use longnight_core::RngSource;

/// Reproducible source: the same seed replays the same match, byte for byte,
/// on any platform. Used by determinism tests and replay verification.
pub struct SeededRng(ChaCha8Rng);

impl SeededRng {
    pub fn new(seed: u64) -> Self {
        Self(ChaCha8Rng::seed_from_u64(seed))
    }
}

impl RngSource for SeededRng {
    fn next_u32(&mut self) -> u32 {
        self.0.next_u32()
    }
}

/// Entropy-seeded source for production resolution passes.
pub struct EntropyRng(rand::rngs::StdRng);

impl EntropyRng {
    pub fn from_entropy() -> Self {
        Self(rand::rngs::StdRng::from_entropy())
    }
}

impl Default for EntropyRng {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl RngSource for EntropyRng {
    fn next_u32(&mut self) -> u32 {
        self.0.next_u32()
    }
}
