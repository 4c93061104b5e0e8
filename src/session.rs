//! One sandbox world instance
//!
//! Owns the config, store, generator, streamer, and editor as explicit
//! state — no statics — so sessions can be created and dropped freely for
//! test isolation. The renderer stays a borrowed collaborator: the session
//! never assumes anything about how (or whether) blocks are drawn.

use crate::core::rng::{Pcg32, RandomSource};
use crate::core::types::{IVec3, Result, Vec3};
use crate::edit::Editor;
use crate::generation::chunk_gen::ChunkGenerator;
use crate::generation::config::WorldGenConfig;
use crate::math::Ray;
use crate::render::Renderer;
use crate::streaming::streamer::{ChunkStreamer, TickStats};
use crate::voxel::block::BlockType;
use crate::voxel::store::BlockStore;

/// A running sandbox world
pub struct Session {
    config: WorldGenConfig,
    store: BlockStore,
    generator: ChunkGenerator,
    streamer: ChunkStreamer,
    editor: Editor,
    rng: Box<dyn RandomSource>,
}

impl Session {
    /// Create a session with the default random source seeded from config
    pub fn new(config: WorldGenConfig) -> Result<Self> {
        let rng = Box::new(Pcg32::new(u64::from(config.seed)));
        Self::with_rng(config, rng)
    }

    /// Create a session with an explicit random source
    pub fn with_rng(config: WorldGenConfig, rng: Box<dyn RandomSource>) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            generator: ChunkGenerator::new(&config),
            streamer: ChunkStreamer::new(&config),
            store: BlockStore::new(),
            editor: Editor::new(),
            rng,
            config,
        })
    }

    pub fn config(&self) -> &WorldGenConfig {
        &self.config
    }

    pub fn store(&self) -> &BlockStore {
        &self.store
    }

    /// Number of resident chunks
    pub fn resident_chunks(&self) -> usize {
        self.streamer.resident_count()
    }

    /// Number of existing blocks
    pub fn block_count(&self) -> usize {
        self.store.len()
    }

    /// Build the initial world square around the spawn position
    pub fn populate_spawn(&mut self, renderer: &mut dyn Renderer, spawn_pos: Vec3) -> usize {
        self.streamer.populate_spawn(
            &self.generator,
            &mut self.store,
            renderer,
            self.rng.as_mut(),
            spawn_pos,
        )
    }

    /// Run one simulation tick: stream chunks around the player
    pub fn tick(&mut self, renderer: &mut dyn Renderer, player_pos: Vec3) -> TickStats {
        self.streamer.tick(
            &self.generator,
            &mut self.store,
            renderer,
            self.rng.as_mut(),
            player_pos,
        )
    }

    /// Refresh the edit target from the camera ray
    pub fn update_target(&mut self, ray: &Ray) {
        self.editor.update_target(ray, &self.store);
    }

    /// Currently targeted block coordinate, if any
    pub fn targeted_block(&self) -> Option<IVec3> {
        self.editor.target().map(|t| t.pos)
    }

    /// Select the block type used for placement; rejects unknown names
    pub fn select_block_type(&mut self, name: &str) -> bool {
        self.editor.select_by_name(name)
    }

    pub fn selected_block_type(&self) -> BlockType {
        self.editor.selected()
    }

    /// Place the selected block against the targeted face
    pub fn place_block(&mut self, renderer: &mut dyn Renderer) -> Option<IVec3> {
        self.editor.place_adjacent(&mut self.store, renderer)
    }

    /// Remove the targeted block
    pub fn remove_block(&mut self, renderer: &mut dyn Renderer) -> Option<BlockType> {
        self.editor.remove_targeted(&mut self.store, renderer)
    }
}
