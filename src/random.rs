//! World seed
//!
//! World generation is driven by a single seed; saving it is enough to
//! regenerate the same world.

use rand::Rng;

/// Exposes the seed the current world was generated from
pub trait SeedSource {
    fn seed(&self) -> u64;
}

/// Seed holder for world generation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameRandom {
    seed: u64,
}

impl GameRandom {
    /// Generator seeded with `seed`
    pub fn with_seed(seed: u64) -> Self {
        Self { seed }
    }

    /// Generator with a fresh random seed
    pub fn new() -> Self {
        Self::with_seed(rand::thread_rng().gen())
    }
}

impl Default for GameRandom {
    fn default() -> Self {
        Self::new()
    }
}

impl SeedSource for GameRandom {
    fn seed(&self) -> u64 {
        self.seed
    }
}
