//! Sparse voxel world: block palette, chunk grid, and the block store

pub mod block;
pub mod chunk;
pub mod store;

pub use block::{BlockType, Rarity};
pub use chunk::{ChunkCoord, ChunkResidency};
pub use store::{BlockStore, EVICTION_BAND_MAX_Y, EVICTION_BAND_MIN_Y};
