//! Surface decorations: trees, boulders, cacti
//!
//! Decorations anchor one unit above the surface block of a column. Trunk
//! heights and canopy pruning are randomized per call, producing organic,
//! non-reproducible shapes under the default random source.

use crate::core::rng::RandomSource;
use crate::core::types::IVec3;
use crate::render::Renderer;
use crate::terrain::biome::Biome;
use crate::voxel::block::BlockType;
use crate::voxel::store::BlockStore;

/// Place a biome-appropriate decoration anchored at (x, y, z).
///
/// Returns the number of blocks added. Plains and ocean columns stay bare.
pub fn place_decoration(
    store: &mut BlockStore,
    renderer: &mut dyn Renderer,
    rng: &mut dyn RandomSource,
    anchor: IVec3,
    biome: Biome,
) -> usize {
    match biome {
        Biome::Forest => grow_tree(store, renderer, rng, anchor),
        Biome::Mountains => {
            // Sparse boulders
            if rng.next_f32() < 0.3 {
                usize::from(store.add(renderer, anchor, BlockType::Stone))
            } else {
                0
            }
        }
        Biome::Desert => {
            if rng.next_f32() < 0.1 {
                let mut added = 0;
                for dy in 0..3 {
                    if store.add(renderer, anchor + IVec3::new(0, dy, 0), BlockType::Sand) {
                        added += 1;
                    }
                }
                added
            } else {
                0
            }
        }
        Biome::Plains | Biome::Ocean => 0,
    }
}

/// Grow a tree: wood trunk plus a pruned leaf canopy.
///
/// Canopy voxels within Manhattan-distance-plus-height threshold survive a
/// 70% per-voxel keep roll.
fn grow_tree(
    store: &mut BlockStore,
    renderer: &mut dyn Renderer,
    rng: &mut dyn RandomSource,
    anchor: IVec3,
) -> usize {
    let mut added = 0;
    let trunk_height = rng.range_i32(3, 6);

    for dy in 0..trunk_height {
        if store.add(renderer, anchor + IVec3::new(0, dy, 0), BlockType::Wood) {
            added += 1;
        }
    }

    let canopy_base = anchor.y + trunk_height;
    for dx in -2i32..=2 {
        for dz in -2i32..=2 {
            for dy in 0..=2 {
                if dx.abs() + dz.abs() + dy < 4 && rng.next_f32() > 0.3 {
                    let pos = IVec3::new(anchor.x + dx, canopy_base + dy, anchor.z + dz);
                    if store.add(renderer, pos, BlockType::Leaves) {
                        added += 1;
                    }
                }
            }
        }
    }

    added
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::rng::FixedSequence;
    use crate::render::NullRenderer;

    #[test]
    fn test_tree_exact_shape_with_fixed_rng() {
        let mut store = BlockStore::new();
        let mut renderer = NullRenderer::new();
        // First value picks trunk height 3 + floor(0.0 * 3) = 3; the
        // cycling 0.0 then fails every canopy keep roll (0.0 > 0.3 is false)
        let mut rng = FixedSequence::new(vec![0.0]);

        let added = place_decoration(
            &mut store,
            &mut renderer,
            &mut rng,
            IVec3::new(0, 1, 0),
            Biome::Forest,
        );

        assert_eq!(added, 3);
        for y in 1..4 {
            assert_eq!(store.get(IVec3::new(0, y, 0)), Some(BlockType::Wood));
        }
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_tree_full_canopy_with_fixed_rng() {
        let mut store = BlockStore::new();
        let mut renderer = NullRenderer::new();
        // 0.99 -> trunk height 3 + floor(0.99 * 3) = 5; every keep roll passes
        let mut rng = FixedSequence::new(vec![0.99]);

        place_decoration(&mut store, &mut renderer, &mut rng, IVec3::ZERO, Biome::Forest);

        // Trunk occupies y in [0, 5); canopy starts at y = 5
        for y in 0..5 {
            assert_eq!(store.get(IVec3::new(0, y, 0)), Some(BlockType::Wood));
        }
        // All voxels with |dx| + |dz| + dy < 4 are kept; the trunk column
        // cell (0, 5, 0) was free so it became a leaf
        assert_eq!(store.get(IVec3::new(0, 5, 0)), Some(BlockType::Leaves));
        assert_eq!(store.get(IVec3::new(2, 5, 1)), Some(BlockType::Leaves));
        // dy = 2 with |dx| + |dz| = 2 fails the threshold
        assert_eq!(store.get(IVec3::new(1, 7, 1)), None);
    }

    #[test]
    fn test_mountain_boulder_roll() {
        let mut store = BlockStore::new();
        let mut renderer = NullRenderer::new();

        let mut hit = FixedSequence::new(vec![0.1]);
        let added = place_decoration(&mut store, &mut renderer, &mut hit, IVec3::ZERO, Biome::Mountains);
        assert_eq!(added, 1);
        assert_eq!(store.get(IVec3::ZERO), Some(BlockType::Stone));

        let mut miss = FixedSequence::new(vec![0.9]);
        let added = place_decoration(&mut store, &mut renderer, &mut miss, IVec3::new(5, 0, 0), Biome::Mountains);
        assert_eq!(added, 0);
    }

    #[test]
    fn test_desert_cactus_column() {
        let mut store = BlockStore::new();
        let mut renderer = NullRenderer::new();
        let mut rng = FixedSequence::new(vec![0.05]);

        let added = place_decoration(&mut store, &mut renderer, &mut rng, IVec3::new(0, 2, 0), Biome::Desert);
        assert_eq!(added, 3);
        for y in 2..5 {
            assert_eq!(store.get(IVec3::new(0, y, 0)), Some(BlockType::Sand));
        }
    }

    #[test]
    fn test_bare_biomes() {
        let mut store = BlockStore::new();
        let mut renderer = NullRenderer::new();
        let mut rng = FixedSequence::new(vec![0.0]);
        assert_eq!(
            place_decoration(&mut store, &mut renderer, &mut rng, IVec3::ZERO, Biome::Plains),
            0
        );
        assert_eq!(
            place_decoration(&mut store, &mut renderer, &mut rng, IVec3::ZERO, Biome::Ocean),
            0
        );
        assert!(store.is_empty());
    }
}
