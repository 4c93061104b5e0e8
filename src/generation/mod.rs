//! Chunk generation: config, column synthesis, decorations

pub mod config;
pub mod chunk_gen;
pub mod decoration;

pub use config::WorldGenConfig;
pub use chunk_gen::ChunkGenerator;
