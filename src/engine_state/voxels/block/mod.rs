//! # Block Module
//!
//! This module provides the core block-related functionality for the voxel engine.
//! It includes block type definitions, block face handling, and block data structures.

use block_side::BlockSide;
use block_type::BlockType;

pub mod block_side;
pub mod block_type;

/// The underlying integer type used to represent block types in memory.
pub type BlockTypeSize = u8;

/// A tile of the texture atlas, addressed by `(column, row)`.
pub type AtlasTile = (u32, u32);

/// Maps each block type to the atlas tile used for each of its faces.
///
/// The outer array is indexed by `BlockType` as a `usize`.
/// The inner array is indexed by `BlockSide`, in the order:
/// [Left, Right, Bottom, Top, Back, Front]
///
/// Materials own one atlas column each (`id - 1`). Row 0 holds side tiles,
/// row 1 bottom tiles and row 2 top tiles.
pub static BLOCK_TYPE_TO_ATLAS_TILES: [[AtlasTile; 6]; 6] = [
    [(0, 0), (0, 0), (0, 0), (0, 0), (0, 0), (0, 0)], // AIR (never meshed)
    [(0, 0), (0, 0), (0, 1), (0, 2), (0, 0), (0, 0)], // DIRT
    [(1, 0), (1, 0), (1, 1), (1, 2), (1, 0), (1, 0)], // GRASS (top: grass, sides: grass over dirt)
    [(2, 0), (2, 0), (2, 1), (2, 2), (2, 0), (2, 0)], // STONE
    [(3, 0), (3, 0), (3, 1), (3, 2), (3, 0), (3, 0)], // WOOD (end grain on top and bottom)
    [(4, 0), (4, 0), (4, 1), (4, 2), (4, 0), (4, 0)], // OBSIDIAN
];

/// Represents a single voxel block in the world.
///
/// Blocks carry nothing beyond their type.
///
/// # Memory Layout
/// The `#[repr(C)]` attribute keeps the layout a single byte, so a chunk's block
/// buffer can be viewed as raw bytes.
#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable, Debug, PartialEq, Eq, Hash)]
pub struct Block {
    /// The type of this block, encoded as a `BlockTypeSize` for compact storage.
    pub block_type: BlockTypeSize,
}

impl Block {
    /// An empty block.
    pub const AIR: Block = Block { block_type: 0 };

    /// Creates a new block of the specified type.
    pub fn new(block_type: BlockType) -> Self {
        Block {
            block_type: block_type as BlockTypeSize,
        }
    }

    /// `true` unless this block is air.
    pub fn is_solid(&self) -> bool {
        self.block_type != BlockType::AIR as BlockTypeSize
    }

    /// Atlas tile for one face of this block.
    ///
    /// Blocks only ever hold validated ids, so the lookup is total; anything
    /// else falls back to the first tile.
    pub fn get_atlas_tile(&self, side: BlockSide) -> AtlasTile {
        BLOCK_TYPE_TO_ATLAS_TILES
            .get(self.block_type as usize)
            .map(|tiles| tiles[side as usize])
            .unwrap_or((0, 0))
    }
}
