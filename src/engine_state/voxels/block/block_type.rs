//! # Block Type Module
//!
//! This module defines the different types of blocks in the voxel world.
//! It provides functionality for block type identification, validation, and random generation.

use num_derive::FromPrimitive;
use num_traits::FromPrimitive;

use super::BlockTypeSize;
use crate::core::VoxelError;

/// Enumerates all possible block types in the voxel world.
///
/// The discriminant is the material id stored in the grid. `AIR` is the only
/// non-solid type; every other variant is a solid material with its own region
/// of the texture atlas.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, FromPrimitive)]
pub enum BlockType {
    /// Empty space.
    AIR = 0,

    /// A basic dirt block.
    DIRT = 1,

    /// Dirt with a grass top. Top, sides and bottom use different tiles.
    GRASS = 2,

    /// Stone, also used for the bedrock floor.
    STONE = 3,

    /// A wooden block with end grain on top and bottom.
    WOOD = 4,

    /// Obsidian.
    OBSIDIAN = 5,
}

impl BlockType {
    /// Every solid material, in id order.
    pub const SOLID: [BlockType; 5] = [
        BlockType::DIRT,
        BlockType::GRASS,
        BlockType::STONE,
        BlockType::WOOD,
        BlockType::OBSIDIAN,
    ];

    /// Converts a raw material id, rejecting ids outside the material set.
    pub fn try_from_int(btype: BlockTypeSize) -> Result<Self, VoxelError> {
        FromPrimitive::from_u8(btype).ok_or(VoxelError::InvalidVoxelType(btype))
    }

    /// The raw material id of this type.
    pub fn id(self) -> BlockTypeSize {
        self as BlockTypeSize
    }

    /// `true` for every type except `AIR`.
    pub fn is_solid(self) -> bool {
        self != BlockType::AIR
    }

    /// Human readable name, as shown in block pickers.
    pub fn name(self) -> &'static str {
        match self {
            BlockType::AIR => "Air",
            BlockType::DIRT => "Dirt",
            BlockType::GRASS => "Grass",
            BlockType::STONE => "Stone",
            BlockType::WOOD => "Wood",
            BlockType::OBSIDIAN => "Obsidian",
        }
    }

    /// Picks a random solid type using the given generator.
    pub fn random_solid(rng: &mut fastrand::Rng) -> Self {
        Self::SOLID[rng.usize(..Self::SOLID.len())]
    }
}
