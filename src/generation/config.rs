//! World generation configuration
//!
//! Immutable per-session parameters. Defaults match the values the world was
//! tuned with: small chunks and a short render distance keep per-tick
//! generation cost low.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::types::Result;
use crate::core::Error;

/// Parameters controlling terrain synthesis and chunk streaming
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct WorldGenConfig {
    /// Random seed for terrain synthesis
    pub seed: u32,
    /// Number of sinusoidal octaves summed per height query
    pub octaves: u32,
    /// Base amplitude of the first octave
    pub amplitude: f64,
    /// Base frequency of the first octave
    pub frequency: f64,
    /// Chunk edge length in blocks
    pub chunk_size: i32,
    /// Chunk radius (Chebyshev) kept resident around the player
    pub render_distance: i32,
    /// Hard cap on chunks generated per streaming pass
    pub max_chunks_per_tick: usize,
    /// Extra radius beyond render distance before a chunk is evicted
    pub eviction_buffer: i32,
    /// Per-column probability of placing a decoration
    pub decoration_chance: f32,
    /// Minimum wall-clock milliseconds between streaming passes
    pub throttle_ms: u64,
}

impl Default for WorldGenConfig {
    fn default() -> Self {
        Self {
            seed: 12345,
            octaves: 3,
            amplitude: 6.0,
            frequency: 0.03,
            chunk_size: 8,
            render_distance: 2,
            max_chunks_per_tick: 1,
            eviction_buffer: 3,
            decoration_chance: 0.02,
            throttle_ms: 500,
        }
    }
}

impl WorldGenConfig {
    /// Load config from a JSON file
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    /// Save config as pretty-printed JSON
    pub fn to_file(&self, path: &Path) -> Result<()> {
        let text = serde_json::to_string_pretty(self)?;
        std::fs::write(path, text)?;
        Ok(())
    }

    /// Check parameter sanity
    pub fn validate(&self) -> Result<()> {
        if self.chunk_size < 1 {
            return Err(Error::Config(format!("chunk_size must be >= 1, got {}", self.chunk_size)));
        }
        if self.octaves < 1 {
            return Err(Error::Config("octaves must be >= 1".into()));
        }
        if self.render_distance < 0 {
            return Err(Error::Config(format!(
                "render_distance must be >= 0, got {}",
                self.render_distance
            )));
        }
        if self.eviction_buffer < 0 {
            return Err(Error::Config(format!(
                "eviction_buffer must be >= 0, got {}",
                self.eviction_buffer
            )));
        }
        if !(0.0..=1.0).contains(&self.decoration_chance) {
            return Err(Error::Config(format!(
                "decoration_chance must be in [0, 1], got {}",
                self.decoration_chance
            )));
        }
        Ok(())
    }
}
