//! Block palette: the closed set of block types and their properties
//!
//! Rarity, color, and the transparent/glowing flags are properties of the
//! type, never of the instance. The string names are the external contract
//! surface for editing; parsing an unknown name yields `None` and no block
//! is ever created for it.

/// How rare a block type is, for display purposes
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Rarity {
    Common,
    Uncommon,
    Rare,
}

/// The closed block palette
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BlockType {
    Grass,
    Stone,
    Wood,
    Sand,
    Water,
    Coal,
    Iron,
    Gold,
    Diamond,
    Obsidian,
    Ice,
    Leaves,
    Lava,
    Snow,
    Dirt,
}

impl BlockType {
    /// Every palette entry, in declaration order
    pub const ALL: [BlockType; 15] = [
        Self::Grass,
        Self::Stone,
        Self::Wood,
        Self::Sand,
        Self::Water,
        Self::Coal,
        Self::Iron,
        Self::Gold,
        Self::Diamond,
        Self::Obsidian,
        Self::Ice,
        Self::Leaves,
        Self::Lava,
        Self::Snow,
        Self::Dirt,
    ];

    /// Canonical lowercase name used by the editing surface
    pub fn name(self) -> &'static str {
        match self {
            Self::Grass => "grass",
            Self::Stone => "stone",
            Self::Wood => "wood",
            Self::Sand => "sand",
            Self::Water => "water",
            Self::Coal => "coal",
            Self::Iron => "iron",
            Self::Gold => "gold",
            Self::Diamond => "diamond",
            Self::Obsidian => "obsidian",
            Self::Ice => "ice",
            Self::Leaves => "leaves",
            Self::Lava => "lava",
            Self::Snow => "snow",
            Self::Dirt => "dirt",
        }
    }

    /// Parse a palette name; unknown names are rejected
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|ty| ty.name() == name)
    }

    /// Get display name
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Grass => "Grass",
            Self::Stone => "Stone",
            Self::Wood => "Wood",
            Self::Sand => "Sand",
            Self::Water => "Water",
            Self::Coal => "Coal Ore",
            Self::Iron => "Iron Ore",
            Self::Gold => "Gold Ore",
            Self::Diamond => "Diamond Ore",
            Self::Obsidian => "Obsidian",
            Self::Ice => "Ice",
            Self::Leaves => "Leaves",
            Self::Lava => "Lava",
            Self::Snow => "Snow",
            Self::Dirt => "Dirt",
        }
    }

    /// Base color passed to the renderer
    pub fn color(self) -> [u8; 3] {
        match self {
            Self::Grass => [0x4c, 0xaf, 0x50],
            Self::Stone => [0x75, 0x75, 0x75],
            Self::Wood => [0x8d, 0x6e, 0x63],
            Self::Sand => [0xff, 0xeb, 0x3b],
            Self::Water => [0x21, 0x96, 0xf3],
            Self::Coal => [0x21, 0x21, 0x21],
            Self::Iron => [0xbd, 0xbd, 0xbd],
            Self::Gold => [0xff, 0xd7, 0x00],
            Self::Diamond => [0x00, 0xbc, 0xd4],
            Self::Obsidian => [0x1a, 0x1a, 0x1a],
            Self::Ice => [0xe0, 0xf6, 0xff],
            Self::Leaves => [0x2e, 0x7d, 0x32],
            Self::Lava => [0xff, 0x57, 0x22],
            Self::Snow => [0xff, 0xff, 0xff],
            Self::Dirt => [0x8d, 0x6e, 0x63],
        }
    }

    pub fn rarity(self) -> Rarity {
        match self {
            Self::Grass | Self::Stone | Self::Wood | Self::Sand | Self::Water
            | Self::Leaves | Self::Dirt => Rarity::Common,
            Self::Coal | Self::Iron | Self::Ice | Self::Snow => Rarity::Uncommon,
            Self::Gold | Self::Diamond | Self::Obsidian | Self::Lava => Rarity::Rare,
        }
    }

    /// Rendered with partial opacity
    pub fn is_transparent(self) -> bool {
        matches!(self, Self::Water | Self::Ice | Self::Leaves)
    }

    /// Rendered emissive
    pub fn is_glowing(self) -> bool {
        matches!(self, Self::Lava)
    }
}
