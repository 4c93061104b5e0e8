//! Blockworld — an infinite voxel sandbox world core
//!
//! Deterministic terrain synthesis, chunk streaming with per-tick budgets,
//! and block placement/removal over a sparse voxel store. Rendering, input,
//! and the conversational assistant are external collaborators reached
//! through narrow contracts; the world itself is plain in-memory state.

pub mod core;
pub mod math;
pub mod voxel;
pub mod render;
pub mod terrain;
pub mod generation;
pub mod streaming;
pub mod edit;
pub mod session;
