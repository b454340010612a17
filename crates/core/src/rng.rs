//! RNG module - uniform random piece generation
//!
//! Each generated piece gets a shape drawn uniformly from `Shape::ALL` and the
//! next id from a strictly increasing counter. The id is assigned first and the
//! counter advanced right after, so ids are never skipped or reused.
//!
//! Randomness comes from a simple LCG: not cryptographic, but deterministic per
//! seed, which keeps runs reproducible in tests.

use crate::types::{Piece, PieceId, Shape};

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
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        // The low bits of a power-of-two LCG cycle with a short period.
        (self.next_u32() >> 16) % max
    }
}

/// Produces pieces with random shapes and consecutive ids
#[derive(Debug, Clone)]
pub struct PieceGenerator {
    rng: SimpleRng,
    seed: u32,
    next_id: PieceId,
}

impl PieceGenerator {
    /// Create a generator whose first piece gets id 0
    pub fn new(seed: u32) -> Self {
        Self {
            rng: SimpleRng::new(seed),
            seed,
            next_id: 0,
        }
    }

    /// Generate the next piece and advance the id counter
    pub fn generate(&mut self) -> Piece {
        let shape = Shape::ALL[self.rng.next_range(Shape::ALL.len() as u32) as usize];
        let piece = Piece::new(shape, self.next_id);
        self.next_id += 1;
        piece
    }

    /// Id the next generated piece will carry
    pub fn next_id(&self) -> PieceId {
        self.next_id
    }

    /// Seed this generator was created with
    pub fn seed(&self) -> u32 {
        self.seed
    }
}

impl Default for PieceGenerator {
    fn default() -> Self {
        Self::new(1)
    }
}
