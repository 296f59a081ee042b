//! Block states: a block identity plus a small variant number.

use serde::{Deserialize, Serialize};

use crate::registry::{BlockId, blocks};

/// What a world cell holds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct BlockState {
    /// Block identity.
    pub block: BlockId,
    /// Block-specific variant, 0..=15.
    pub variant: u8,
}

impl BlockState {
    /// Empty space.
    pub const AIR: Self = Self {
        block: blocks::AIR,
        variant: 0,
    };

    /// The default state of `block` (variant 0).
    pub const fn of(block: BlockId) -> Self {
        Self { block, variant: 0 }
    }

    /// `block` with an explicit variant. Values above 15 are masked.
    pub const fn with_variant(block: BlockId, variant: u8) -> Self {
        Self {
            block,
            variant: variant & 0x0F,
        }
    }
}

/// Which faces of a huge-mushroom block show cap texture.
///
/// Discriminants are the stored variant numbers; 11..=13 are unused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum MushroomVariant {
    AllInside = 0,
    NorthWest = 1,
    North = 2,
    NorthEast = 3,
    West = 4,
    Center = 5,
    East = 6,
    SouthWest = 7,
    South = 8,
    SouthEast = 9,
    Stem = 10,
    AllOutside = 14,
    AllStem = 15,
}

impl MushroomVariant {
    /// Decodes a stored variant number. Unused numbers decode as [`MushroomVariant::AllInside`].
    pub fn from_meta(meta: u8) -> Self {
        match meta {
            1 => Self::NorthWest,
            2 => Self::North,
            3 => Self::NorthEast,
            4 => Self::West,
            5 => Self::Center,
            6 => Self::East,
            7 => Self::SouthWest,
            8 => Self::South,
            9 => Self::SouthEast,
            10 => Self::Stem,
            14 => Self::AllOutside,
            15 => Self::AllStem,
            _ => Self::AllInside,
        }
    }

    /// The stored variant number.
    pub fn meta(self) -> u8 {
        self as u8
    }

    /// `mushroom` in this variant.
    pub fn state(self, mushroom: BlockId) -> BlockState {
        BlockState::with_variant(mushroom, self.meta())
    }
}
