//! RNG module - uniform random piece selection
//!
//! Every draw picks one of the seven kinds with equal probability; there is
//! no bag. The generator is a seeded ChaCha stream so a game can be replayed
//! from its seed.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::types::PieceKind;

/// Seeded uniform piece generator
#[derive(Debug, Clone)]
pub struct PieceSource {
    seed: u64,
    rng: ChaCha8Rng,
}

impl PieceSource {
    /// Create a new piece source with the given seed
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Draw the next piece kind
    pub fn draw(&mut self) -> PieceKind {
        PieceKind::ALL[self.rng.random_range(0..PieceKind::ALL.len())]
    }

    /// Seed this source was created with (for restarting with the same sequence)
    pub fn seed(&self) -> u64 {
        self.seed
    }
}
