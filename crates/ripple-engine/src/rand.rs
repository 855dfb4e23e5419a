//! Random sources for drop placement.
//!
//! The engine consumes randomness only through the
//! [`UnitRand`](ripple_core::UnitRand) trait, so identical draw
//! sequences reproduce identical runs bit-for-bit.

use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use ripple_core::UnitRand;

/// Seeded ChaCha8-backed random source: the production default.
///
/// Two sources constructed from the same seed yield the same draw
/// sequence on every platform.
#[derive(Clone, Debug)]
pub struct ChaChaUnitRand {
    rng: ChaCha8Rng,
}

impl ChaChaUnitRand {
    /// Create a source from a 64-bit seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl UnitRand for ChaChaUnitRand {
    fn next_unit(&mut self) -> f64 {
        self.rng.random::<f64>()
    }
}

/// A scripted random source that replays a fixed sequence of draws,
/// cycling when exhausted. Intended for tests and exact scenario
/// reproduction; the draws are not checked against `[0, 1)`.
#[derive(Clone, Debug)]
pub struct ScriptedUnitRand {
    draws: Vec<f64>,
    next: usize,
}

impl ScriptedUnitRand {
    /// Create a source replaying `draws` in order, cycling at the end.
    /// An empty script yields `0.0` forever.
    pub fn new(draws: Vec<f64>) -> Self {
        Self { draws, next: 0 }
    }
}

impl UnitRand for ScriptedUnitRand {
    fn next_unit(&mut self) -> f64 {
        if self.draws.is_empty() {
            return 0.0;
        }
        let v = self.draws[self.next % self.draws.len()];
        self.next += 1;
        v
    }
}
