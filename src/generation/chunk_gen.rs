//! Column-by-column chunk generation
//!
//! Materializes terrain columns and decorations for one chunk and registers
//! every block in the store. Generation is idempotent per chunk: the
//! residency set guards against double generation, and duplicate-coordinate
//! inserts are silently dropped by the store.

use crate::core::rng::RandomSource;
use crate::core::types::IVec3;
use crate::generation::config::WorldGenConfig;
use crate::generation::decoration::place_decoration;
use crate::render::Renderer;
use crate::terrain::biome::deep_block;
use crate::terrain::synth::TerrainSynthesizer;
use crate::voxel::chunk::{ChunkCoord, ChunkResidency};
use crate::voxel::store::BlockStore;

/// Generates chunk terrain from the synthesizer's height and biome fields
pub struct ChunkGenerator {
    synth: TerrainSynthesizer,
    chunk_size: i32,
    decoration_chance: f32,
}

impl ChunkGenerator {
    pub fn new(config: &WorldGenConfig) -> Self {
        Self {
            synth: TerrainSynthesizer::new(config),
            chunk_size: config.chunk_size,
            decoration_chance: config.decoration_chance,
        }
    }

    /// Access the underlying terrain synthesizer
    pub fn synthesizer(&self) -> &TerrainSynthesizer {
        &self.synth
    }

    /// Generate one chunk and mark it resident.
    ///
    /// No-op if the chunk is already resident. Returns the number of blocks
    /// added to the store.
    pub fn generate(
        &self,
        residency: &mut ChunkResidency,
        store: &mut BlockStore,
        renderer: &mut dyn Renderer,
        rng: &mut dyn RandomSource,
        coord: ChunkCoord,
    ) -> usize {
        if residency.contains(coord) {
            return 0;
        }

        let mut added = 0;
        for (x, z) in coord.columns(self.chunk_size) {
            let height = self.synth.height_at(x, z);
            let biome = self.synth.biome_at(x, z);

            // Shallow columns only: from a few blocks under the surface up
            // to the surface itself
            for y in (-5).max(height - 3)..=height {
                let ty = if y == height {
                    biome.surface_block(height)
                } else if y > height - 2 {
                    biome.sub_surface_block()
                } else {
                    deep_block(y, rng)
                };

                if store.add(renderer, IVec3::new(x, y, z), ty) {
                    added += 1;
                }
            }

            if rng.next_f32() < self.decoration_chance {
                added += place_decoration(
                    store,
                    renderer,
                    rng,
                    IVec3::new(x, height + 1, z),
                    biome,
                );
            }
        }

        residency.insert(coord);
        log::debug!(
            "generated chunk ({}, {}): {} blocks",
            coord.x,
            coord.z,
            added
        );
        added
    }
}
