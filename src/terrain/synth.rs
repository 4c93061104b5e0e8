//! Sinusoidal-octave terrain synthesis
//!
//! Height is a sum of sinusoidal terms with geometrically halving amplitude
//! and doubling frequency per octave — a cheap terrain approximation, not
//! true multi-resolution noise. Both queries are pure functions of position
//! and config, so chunks generated independently agree on shared-edge
//! heights.

use crate::generation::config::WorldGenConfig;
use crate::terrain::biome::Biome;

/// Frequency of the biome classification wave
const BIOME_FREQUENCY: f64 = 0.01;

/// Pure height/biome synthesis for a fixed seed and octave parameters
#[derive(Clone, Debug)]
pub struct TerrainSynthesizer {
    seed: f64,
    octaves: u32,
    amplitude: f64,
    frequency: f64,
}

impl TerrainSynthesizer {
    pub fn new(config: &WorldGenConfig) -> Self {
        Self {
            seed: f64::from(config.seed),
            octaves: config.octaves,
            amplitude: config.amplitude,
            frequency: config.frequency,
        }
    }

    /// Terrain height at world column (x, z)
    pub fn height_at(&self, x: i32, z: i32) -> i32 {
        let mut value = 0.0;
        let mut amplitude = self.amplitude;
        let mut frequency = self.frequency;

        for _ in 0..self.octaves {
            value += ((f64::from(x) + self.seed) * frequency).sin()
                * ((f64::from(z) + self.seed) * frequency).cos()
                * amplitude;
            amplitude *= 0.5;
            frequency *= 2.0;
        }

        value.floor() as i32
    }

    /// Biome at world column (x, z)
    ///
    /// Threshold bands over a single classification wave, checked in order:
    /// mountains, forest, desert, ocean, else plains.
    pub fn biome_at(&self, x: i32, z: i32) -> Biome {
        let raw = (f64::from(x) * BIOME_FREQUENCY).sin() * (f64::from(z) * BIOME_FREQUENCY).cos();
        if raw > 0.5 {
            Biome::Mountains
        } else if raw > 0.2 {
            Biome::Forest
        } else if raw < -0.3 {
            Biome::Desert
        } else if raw < -0.1 {
            Biome::Ocean
        } else {
            Biome::Plains
        }
    }
}
