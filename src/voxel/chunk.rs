//! Chunk grid: horizontal regions used as generation/eviction units
//!
//! A chunk is a bounded region of coordinate space, not a container — it
//! owns no blocks. The store remains the single source of truth; chunks
//! exist only as keys in the residency set.

use std::collections::HashSet;

use crate::core::types::Vec3;

/// Integer coordinate identifying a chunk column in the world grid
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ChunkCoord {
    pub x: i32,
    pub z: i32,
}

impl ChunkCoord {
    /// Create a new chunk coordinate
    pub fn new(x: i32, z: i32) -> Self {
        Self { x, z }
    }

    /// Convert world position to chunk coordinate by floor division
    pub fn from_world_pos(pos: Vec3, chunk_size: i32) -> Self {
        Self {
            x: (pos.x / chunk_size as f32).floor() as i32,
            z: (pos.z / chunk_size as f32).floor() as i32,
        }
    }

    /// World-space minimum corner (block coordinates) of this chunk
    pub fn origin(&self, chunk_size: i32) -> (i32, i32) {
        (self.x * chunk_size, self.z * chunk_size)
    }

    /// Chebyshev (square-radius) distance to another chunk
    pub fn chebyshev_distance(&self, other: ChunkCoord) -> i32 {
        (self.x - other.x).abs().max((self.z - other.z).abs())
    }

    /// Iterate every (x, z) block column inside this chunk's footprint
    pub fn columns(&self, chunk_size: i32) -> impl Iterator<Item = (i32, i32)> {
        let (start_x, start_z) = self.origin(chunk_size);
        (start_x..start_x + chunk_size)
            .flat_map(move |x| (start_z..start_z + chunk_size).map(move |z| (x, z)))
    }
}

/// Set of currently resident chunks.
///
/// Held by the streamer; the generator consults it as an idempotency guard
/// and marks completion through it.
#[derive(Default)]
pub struct ChunkResidency {
    resident: HashSet<ChunkCoord>,
}

impl ChunkResidency {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, coord: ChunkCoord) -> bool {
        self.resident.contains(&coord)
    }

    /// Mark a chunk resident. Returns false if it already was.
    pub fn insert(&mut self, coord: ChunkCoord) -> bool {
        self.resident.insert(coord)
    }

    /// Clear a chunk's residency. Returns false if it was not resident.
    pub fn remove(&mut self, coord: ChunkCoord) -> bool {
        self.resident.remove(&coord)
    }

    pub fn len(&self) -> usize {
        self.resident.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resident.is_empty()
    }

    /// Iterate resident chunk coordinates (unordered)
    pub fn iter(&self) -> impl Iterator<Item = ChunkCoord> + '_ {
        self.resident.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_world_pos_floor_division() {
        assert_eq!(ChunkCoord::from_world_pos(Vec3::new(0.0, 5.0, 0.0), 8), ChunkCoord::new(0, 0));
        assert_eq!(ChunkCoord::from_world_pos(Vec3::new(7.9, 0.0, 8.0), 8), ChunkCoord::new(0, 1));
        // Negative positions round toward negative infinity, not zero
        assert_eq!(ChunkCoord::from_world_pos(Vec3::new(-0.1, 0.0, -8.1), 8), ChunkCoord::new(-1, -2));
    }

    #[test]
    fn test_origin() {
        assert_eq!(ChunkCoord::new(2, -1).origin(8), (16, -8));
    }

    #[test]
    fn test_chebyshev_distance() {
        let a = ChunkCoord::new(0, 0);
        assert_eq!(a.chebyshev_distance(ChunkCoord::new(3, -2)), 3);
        assert_eq!(a.chebyshev_distance(ChunkCoord::new(-1, 5)), 5);
        assert_eq!(a.chebyshev_distance(a), 0);
    }

    #[test]
    fn test_columns_cover_footprint() {
        let columns: Vec<_> = ChunkCoord::new(1, 0).columns(4).collect();
        assert_eq!(columns.len(), 16);
        assert!(columns.contains(&(4, 0)));
        assert!(columns.contains(&(7, 3)));
        assert!(!columns.contains(&(8, 0)));
    }

    #[test]
    fn test_residency_insert_remove() {
        let mut residency = ChunkResidency::new();
        let coord = ChunkCoord::new(1, 2);
        assert!(residency.insert(coord));
        assert!(!residency.insert(coord));
        assert!(residency.contains(coord));
        assert_eq!(residency.len(), 1);
        assert!(residency.remove(coord));
        assert!(!residency.remove(coord));
        assert!(residency.is_empty());
    }
}
