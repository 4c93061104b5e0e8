//! Deterministic terrain synthesis and biome classification

pub mod biome;
pub mod synth;

pub use biome::Biome;
pub use synth::TerrainSynthesizer;
