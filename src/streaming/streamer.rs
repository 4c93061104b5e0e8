//! Chunk residency management with per-tick budgets
//!
//! Each pass generates missing chunks inside the render-distance square
//! (hard quota per pass) and evicts at most one far chunk. Both caps bound
//! per-frame cost no matter how far the player jumped; chunks left behind
//! are picked up on later ticks. Passes are additionally throttled to one
//! per `throttle_ms` of wall time, decoupling streaming from frame rate.

use std::time::{Duration, Instant};

use crate::core::rng::RandomSource;
use crate::core::types::Vec3;
use crate::generation::chunk_gen::ChunkGenerator;
use crate::generation::config::WorldGenConfig;
use crate::render::Renderer;
use crate::voxel::chunk::{ChunkCoord, ChunkResidency};
use crate::voxel::store::BlockStore;

/// What one streaming pass did
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TickStats {
    /// Chunks generated this pass
    pub generated: usize,
    /// Chunks evicted this pass (0 or 1)
    pub evicted: usize,
    /// True if the pass was skipped by the wall-clock throttle
    pub throttled: bool,
}

/// Tracks chunk residency and drives generation/eviction each tick
pub struct ChunkStreamer {
    residency: ChunkResidency,
    chunk_size: i32,
    render_distance: i32,
    eviction_buffer: i32,
    max_chunks_per_tick: usize,
    throttle: Duration,
    last_pass: Option<Instant>,
}

impl ChunkStreamer {
    pub fn new(config: &WorldGenConfig) -> Self {
        Self {
            residency: ChunkResidency::new(),
            chunk_size: config.chunk_size,
            render_distance: config.render_distance,
            eviction_buffer: config.eviction_buffer,
            max_chunks_per_tick: config.max_chunks_per_tick,
            throttle: Duration::from_millis(config.throttle_ms),
            last_pass: None,
        }
    }

    /// Number of resident chunks
    pub fn resident_count(&self) -> usize {
        self.residency.len()
    }

    pub fn is_resident(&self, coord: ChunkCoord) -> bool {
        self.residency.contains(coord)
    }

    /// Populate the full render-distance square around a spawn position,
    /// ignoring the per-tick quota and the throttle.
    ///
    /// Used once at session start so the player never spawns into void.
    pub fn populate_spawn(
        &mut self,
        generator: &ChunkGenerator,
        store: &mut BlockStore,
        renderer: &mut dyn Renderer,
        rng: &mut dyn RandomSource,
        spawn_pos: Vec3,
    ) -> usize {
        let center = ChunkCoord::from_world_pos(spawn_pos, self.chunk_size);
        let mut generated = 0;
        for cx in center.x - self.render_distance..=center.x + self.render_distance {
            for cz in center.z - self.render_distance..=center.z + self.render_distance {
                let coord = ChunkCoord::new(cx, cz);
                if !self.residency.contains(coord) {
                    generator.generate(&mut self.residency, store, renderer, rng, coord);
                    generated += 1;
                }
            }
        }
        log::info!(
            "spawn populated: {} chunks around ({}, {})",
            generated,
            center.x,
            center.z
        );
        generated
    }

    /// Run one streaming pass using the wall clock for throttling
    pub fn tick(
        &mut self,
        generator: &ChunkGenerator,
        store: &mut BlockStore,
        renderer: &mut dyn Renderer,
        rng: &mut dyn RandomSource,
        player_pos: Vec3,
    ) -> TickStats {
        self.tick_at(Instant::now(), generator, store, renderer, rng, player_pos)
    }

    /// Run one streaming pass at an explicit instant.
    ///
    /// Exposed so tests and benches can drive the throttle deterministically.
    pub fn tick_at(
        &mut self,
        now: Instant,
        generator: &ChunkGenerator,
        store: &mut BlockStore,
        renderer: &mut dyn Renderer,
        rng: &mut dyn RandomSource,
        player_pos: Vec3,
    ) -> TickStats {
        if let Some(last) = self.last_pass {
            if now.duration_since(last) < self.throttle {
                return TickStats { throttled: true, ..TickStats::default() };
            }
        }
        self.last_pass = Some(now);

        let center = ChunkCoord::from_world_pos(player_pos, self.chunk_size);
        let mut stats = TickStats::default();

        // Generation: bounded sweep of the render-distance square
        'sweep: for cx in center.x - self.render_distance..=center.x + self.render_distance {
            for cz in center.z - self.render_distance..=center.z + self.render_distance {
                let coord = ChunkCoord::new(cx, cz);
                if !self.residency.contains(coord) {
                    if stats.generated >= self.max_chunks_per_tick {
                        break 'sweep;
                    }
                    generator.generate(&mut self.residency, store, renderer, rng, coord);
                    stats.generated += 1;
                }
            }
        }

        // Eviction: at most one far chunk per pass
        let max_distance = self.render_distance + self.eviction_buffer;
        let victim = self
            .residency
            .iter()
            .find(|coord| coord.chebyshev_distance(center) > max_distance);
        if let Some(coord) = victim {
            let removed = store.remove_chunk_region(renderer, coord, self.chunk_size);
            self.residency.remove(coord);
            stats.evicted = 1;
            log::debug!(
                "evicted chunk ({}, {}): {} blocks removed",
                coord.x,
                coord.z,
                removed
            );
        }

        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::rng::FixedSequence;
    use crate::render::NullRenderer;
    use crate::voxel::store::EVICTION_BAND_MAX_Y;

    struct Fixture {
        generator: ChunkGenerator,
        streamer: ChunkStreamer,
        store: BlockStore,
        renderer: NullRenderer,
        rng: FixedSequence,
    }

    fn fixture(config: &WorldGenConfig) -> Fixture {
        Fixture {
            generator: ChunkGenerator::new(config),
            streamer: ChunkStreamer::new(config),
            store: BlockStore::new(),
            renderer: NullRenderer::new(),
            rng: FixedSequence::always_high(),
        }
    }

    fn drain(f: &mut Fixture, now: &mut Instant, pos: Vec3, max_passes: usize) {
        // Step the clock past the throttle each pass
        for _ in 0..max_passes {
            *now += Duration::from_millis(600);
            let stats = f.streamer.tick_at(
                *now,
                &f.generator,
                &mut f.store,
                &mut f.renderer,
                &mut f.rng,
                pos,
            );
            if stats.generated == 0 && stats.evicted == 0 {
                break;
            }
        }
    }

    #[test]
    fn test_spawn_population_covers_square() {
        let config = WorldGenConfig::default();
        let mut f = fixture(&config);

        let generated = f.streamer.populate_spawn(
            &f.generator,
            &mut f.store,
            &mut f.renderer,
            &mut f.rng,
            Vec3::new(0.0, 2.0, 0.0),
        );

        // render_distance = 2 -> 5x5 square of chunks, no eviction yet
        assert_eq!(generated, 25);
        assert_eq!(f.streamer.resident_count(), 25);
        for cx in -2..=2 {
            for cz in -2..=2 {
                assert!(f.streamer.is_resident(ChunkCoord::new(cx, cz)));
            }
        }
        assert!(!f.streamer.is_resident(ChunkCoord::new(3, 0)));
    }

    #[test]
    fn test_tick_respects_generation_quota() {
        let mut config = WorldGenConfig::default();
        config.max_chunks_per_tick = 3;
        let mut f = fixture(&config);

        let stats = f.streamer.tick_at(
            Instant::now(),
            &f.generator,
            &mut f.store,
            &mut f.renderer,
            &mut f.rng,
            Vec3::ZERO,
        );

        // 25 chunks eligible, only the quota generated
        assert_eq!(stats.generated, 3);
        assert!(stats.evicted <= 1);
        assert_eq!(f.streamer.resident_count(), 3);
    }

    #[test]
    fn test_remaining_chunks_picked_up_later() {
        let mut config = WorldGenConfig::default();
        config.max_chunks_per_tick = 7;
        let mut f = fixture(&config);
        let mut now = Instant::now();

        drain(&mut f, &mut now, Vec3::ZERO, 10);
        assert_eq!(f.streamer.resident_count(), 25);
    }

    #[test]
    fn test_throttle_skips_fast_ticks() {
        let config = WorldGenConfig::default();
        let mut f = fixture(&config);
        let start = Instant::now();

        let first = f.streamer.tick_at(
            start,
            &f.generator,
            &mut f.store,
            &mut f.renderer,
            &mut f.rng,
            Vec3::ZERO,
        );
        assert!(!first.throttled);
        assert_eq!(first.generated, 1);

        // 100ms later: inside the 500ms window, nothing happens
        let second = f.streamer.tick_at(
            start + Duration::from_millis(100),
            &f.generator,
            &mut f.store,
            &mut f.renderer,
            &mut f.rng,
            Vec3::ZERO,
        );
        assert!(second.throttled);
        assert_eq!(second.generated, 0);

        // Past the window the streamer runs again
        let third = f.streamer.tick_at(
            start + Duration::from_millis(600),
            &f.generator,
            &mut f.store,
            &mut f.renderer,
            &mut f.rng,
            Vec3::ZERO,
        );
        assert!(!third.throttled);
        assert_eq!(third.generated, 1);
    }

    #[test]
    fn test_eviction_capped_at_one_per_tick() {
        let mut config = WorldGenConfig::default();
        config.max_chunks_per_tick = 25;
        let mut f = fixture(&config);
        let mut now = Instant::now();

        drain(&mut f, &mut now, Vec3::ZERO, 5);
        assert_eq!(f.streamer.resident_count(), 25);

        // Teleport far away: every old chunk is now past the eviction radius
        let far = Vec3::new(1000.0, 2.0, 1000.0);
        now += Duration::from_millis(600);
        let stats = f.streamer.tick_at(
            now,
            &f.generator,
            &mut f.store,
            &mut f.renderer,
            &mut f.rng,
            far,
        );

        assert_eq!(stats.evicted, 1);
        // 25 old - 1 evicted + 25 newly generated around the far position
        assert_eq!(f.streamer.resident_count(), 49);
    }

    #[test]
    fn test_eviction_removes_blocks_and_releases_handles() {
        let mut config = WorldGenConfig::default();
        config.max_chunks_per_tick = 25;
        let mut f = fixture(&config);
        let mut now = Instant::now();

        drain(&mut f, &mut now, Vec3::ZERO, 5);

        // Drain until the whole old square is gone
        let far = Vec3::new(1000.0, 2.0, 1000.0);
        drain(&mut f, &mut now, far, 60);

        for cx in -2..=2 {
            for cz in -2..=2 {
                assert!(!f.streamer.is_resident(ChunkCoord::new(cx, cz)));
            }
        }
        // Every remaining handle belongs to a remaining block (default
        // terrain stays inside the eviction band, so nothing is orphaned)
        assert_eq!(f.renderer.live_count() as usize, f.store.len());
        for (pos, _) in f.store.iter() {
            assert!(pos.y <= EVICTION_BAND_MAX_Y);
            assert!(pos.x >= 8 * (125 - 2) && pos.z >= 8 * (125 - 2));
        }
    }

    #[test]
    fn test_near_chunks_survive_eviction() {
        let mut config = WorldGenConfig::default();
        config.max_chunks_per_tick = 25;
        let mut f = fixture(&config);
        let mut now = Instant::now();

        drain(&mut f, &mut now, Vec3::ZERO, 5);

        // Move one chunk over: everything stays within the eviction radius
        drain(&mut f, &mut now, Vec3::new(8.0, 2.0, 0.0), 10);
        for cx in -2..=2 {
            for cz in -2..=2 {
                assert!(f.streamer.is_resident(ChunkCoord::new(cx, cz)));
            }
        }
    }
}
