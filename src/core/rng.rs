//! RNG module - deterministic piece selection
//!
//! Each spawn is an independent uniform draw over the 7 kinds. This is
//! deliberately not a 7-bag randomizer: droughts and repeats are possible,
//! matching the reference rules.
//!
//! The generator is a small LCG so games are reproducible from a seed.

use crate::types::PieceKind;

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }

    /// Current generator state (reusable as a seed)
    pub fn state(&self) -> u32 {
        self.state
    }
}

/// Uniform independent piece picker
#[derive(Debug, Clone)]
pub struct PiecePicker {
    rng: SimpleRng,
}

impl PiecePicker {
    pub fn new(seed: u32) -> Self {
        Self {
            rng: SimpleRng::new(seed),
        }
    }

    /// Draw the next piece kind (uniform over all 7)
    pub fn draw(&mut self) -> PieceKind {
        PieceKind::from_index(self.rng.next_range(7) as u8)
    }

    /// Current RNG state (for restarting with the same sequence)
    pub fn seed(&self) -> u32 {
        self.rng.state()
    }
}

impl Default for PiecePicker {
    fn default() -> Self {
        Self::new(1)
    }
}
