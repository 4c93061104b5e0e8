//! The authoritative sparse block store
//!
//! Keyed by integer coordinate triple. The domain entry (block type) and its
//! render handle are stored in parallel maps under the same key, so the
//! domain side can be inspected and tested without a renderer in the loop.

use std::collections::HashMap;

use crate::core::types::IVec3;
use crate::render::{MaterialFlags, Renderer};
use crate::render::RenderHandle;
use crate::voxel::block::BlockType;
use crate::voxel::chunk::ChunkCoord;

/// Bottom of the approximate height band scanned during chunk eviction.
///
/// Eviction sweeps a fixed band rather than the true generated height range;
/// blocks outside it are orphaned when their chunk unloads. Known gap, kept
/// until intended world height bounds are settled.
pub const EVICTION_BAND_MIN_Y: i32 = -10;
/// Top of the eviction height band
pub const EVICTION_BAND_MAX_Y: i32 = 10;

/// Sparse voxel map owning every existing block and its render handle
#[derive(Default)]
pub struct BlockStore {
    blocks: HashMap<IVec3, BlockType>,
    handles: HashMap<IVec3, RenderHandle>,
}

impl BlockStore {
    /// Create a new empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a block at the given coordinate.
    ///
    /// No-op when the coordinate is already occupied (permissive editing).
    /// Returns true if a block was created.
    pub fn add(&mut self, renderer: &mut dyn Renderer, pos: IVec3, ty: BlockType) -> bool {
        if self.blocks.contains_key(&pos) {
            return false;
        }

        let flags = MaterialFlags {
            transparent: ty.is_transparent(),
            glowing: ty.is_glowing(),
        };
        let handle = renderer.register_block(pos, ty.color(), flags);

        self.blocks.insert(pos, ty);
        self.handles.insert(pos, handle);
        true
    }

    /// Remove the block at the given coordinate, releasing its render handle.
    ///
    /// No-op when the coordinate is empty. Returns the removed type.
    pub fn remove(&mut self, renderer: &mut dyn Renderer, pos: IVec3) -> Option<BlockType> {
        let ty = self.blocks.remove(&pos)?;
        if let Some(handle) = self.handles.remove(&pos) {
            renderer.release_block(handle);
        }
        Some(ty)
    }

    /// Get the block type at a coordinate
    pub fn get(&self, pos: IVec3) -> Option<BlockType> {
        self.blocks.get(&pos).copied()
    }

    pub fn contains(&self, pos: IVec3) -> bool {
        self.blocks.contains_key(&pos)
    }

    /// Number of existing blocks
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Iterate all existing blocks (unordered); used by targeting
    pub fn iter(&self) -> impl Iterator<Item = (IVec3, BlockType)> + '_ {
        self.blocks.iter().map(|(&pos, &ty)| (pos, ty))
    }

    /// Remove every block inside a chunk's x/z span across the fixed
    /// eviction height band, releasing each render handle.
    ///
    /// Returns the number of blocks removed.
    pub fn remove_chunk_region(
        &mut self,
        renderer: &mut dyn Renderer,
        coord: ChunkCoord,
        chunk_size: i32,
    ) -> usize {
        let mut removed = 0;
        for (x, z) in coord.columns(chunk_size) {
            for y in EVICTION_BAND_MIN_Y..=EVICTION_BAND_MAX_Y {
                if self.remove(renderer, IVec3::new(x, y, z)).is_some() {
                    removed += 1;
                }
            }
        }
        removed
    }
}
