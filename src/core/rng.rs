//! Injectable random source for ore and decoration rolls
//!
//! Terrain height and biome classification are pure functions of position,
//! but ore selection and decorations (trees, cacti, boulders) are randomized
//! per call. Routing every roll through [`RandomSource`] lets tests
//! substitute a fixed sequence and assert exact generator output.

/// Source of uniform random values
pub trait RandomSource {
    /// Next f32 in [0, 1)
    fn next_f32(&mut self) -> f32;

    /// Random f32 in [min, max)
    fn range_f32(&mut self, min: f32, max: f32) -> f32 {
        min + self.next_f32() * (max - min)
    }

    /// Random i32 in [min, max)
    fn range_i32(&mut self, min: i32, max: i32) -> i32 {
        min + (self.next_f32() * (max - min) as f32) as i32
    }
}

/// Simple deterministic RNG using hash function
pub struct Pcg32 {
    state: u64,
}

impl Pcg32 {
    pub fn new(seed: u64) -> Self {
        Self { state: seed.wrapping_add(1) }
    }

    /// Advance state and return next u32
    fn next_u32(&mut self) -> u32 {
        // PCG-like state update
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        // Output function
        let mut h = (self.state >> 32) as u32;
        h = h.wrapping_mul(0x45d9f3b);
        h ^= h >> 16;
        h = h.wrapping_mul(0x45d9f3b);
        h ^= h >> 16;
        h
    }
}

impl RandomSource for Pcg32 {
    fn next_f32(&mut self) -> f32 {
        // Divide by 2^32 so the result stays below 1.0
        (self.next_u32() as f64 / (u32::MAX as f64 + 1.0)) as f32
    }
}

/// Replays a fixed sequence of values, cycling when exhausted.
///
/// Test double: pins the "accepted non-determinism" of ore and decoration
/// placement so generator output can be asserted exactly.
pub struct FixedSequence {
    values: Vec<f32>,
    index: usize,
}

impl FixedSequence {
    pub fn new(values: Vec<f32>) -> Self {
        Self { values, index: 0 }
    }

    /// Sequence that never triggers a probability roll
    pub fn always_high() -> Self {
        Self::new(vec![0.999])
    }
}

impl RandomSource for FixedSequence {
    fn next_f32(&mut self) -> f32 {
        if self.values.is_empty() {
            return 0.0;
        }
        let v = self.values[self.index % self.values.len()];
        self.index += 1;
        v
    }
}
