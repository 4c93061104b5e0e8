//! Biome types and per-biome block selection tables
//!
//! Surface and sub-surface selection are deterministic tables keyed by biome
//! and height. Deep selection rolls ores per call through the injectable
//! random source — accepted non-determinism across regenerations, not a bug.

use crate::core::rng::RandomSource;
use crate::voxel::block::BlockType;

/// Biome types
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Biome {
    Plains,
    Forest,
    Desert,
    Mountains,
    Ocean,
}

impl Biome {
    pub fn name(self) -> &'static str {
        match self {
            Self::Plains => "plains",
            Self::Forest => "forest",
            Self::Desert => "desert",
            Self::Mountains => "mountains",
            Self::Ocean => "ocean",
        }
    }

    /// Surface block for a column topping out at `height`
    pub fn surface_block(self, height: i32) -> BlockType {
        match self {
            Self::Desert => BlockType::Sand,
            Self::Ocean => {
                if height < -2 {
                    BlockType::Water
                } else {
                    BlockType::Sand
                }
            }
            Self::Mountains => {
                if height > 5 {
                    BlockType::Snow
                } else {
                    BlockType::Stone
                }
            }
            Self::Forest | Self::Plains => BlockType::Grass,
        }
    }

    /// Block for the shallow layer just under the surface
    pub fn sub_surface_block(self) -> BlockType {
        match self {
            Self::Desert | Self::Ocean => BlockType::Sand,
            _ => BlockType::Dirt,
        }
    }
}

/// Deep-layer block selection with ore rolls below y = -5
pub fn deep_block(y: i32, rng: &mut dyn RandomSource) -> BlockType {
    if y < -5 {
        let roll = rng.next_f32();
        if roll < 0.005 {
            return BlockType::Diamond;
        }
        if roll < 0.015 {
            return BlockType::Gold;
        }
        if roll < 0.03 {
            return BlockType::Iron;
        }
        if roll < 0.08 {
            return BlockType::Coal;
        }
    }
    BlockType::Stone
}
