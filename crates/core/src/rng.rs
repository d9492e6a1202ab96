//! RNG module - uniform random piece selection
//!
//! Every spawn picks one of the seven kinds independently and uniformly
//! (no bag). A small LCG keeps the sequence deterministic per seed, which
//! the tests and benches rely on.

use crate::types::PieceKind;

/// Multiplier and increment of the 32-bit LCG (Numerical Recipes)
const LCG_MUL: u32 = 1_664_525;
const LCG_INC: u32 = 1_013_904_223;

/// Seeded linear congruential generator for piece selection
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Seed the generator. A zero seed is bumped to 1.
    pub fn new(seed: u32) -> Self {
        Self { state: seed.max(1) }
    }

    /// Advance one step and return the new state
    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(LCG_MUL).wrapping_add(LCG_INC);
        self.state
    }

    /// Generate random value in range [0, max)
    ///
    /// Takes the high half of the state: the low bits of an LCG cycle with
    /// a short period.
    pub fn next_range(&mut self, max: u32) -> u32 {
        debug_assert!(max > 0);
        (self.next_u32() >> 16) % max
    }

    /// Pick a piece kind uniformly from [`PieceKind::ALL`]
    pub fn choose_kind(&mut self) -> PieceKind {
        let idx = self.next_range(PieceKind::ALL.len() as u32) as usize;
        PieceKind::ALL[idx]
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}
