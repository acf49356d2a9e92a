//! # Chunk Module
//!
//! This module provides the `Chunk` struct: a dense cube of `dimension³` blocks
//! plus a solidity bit mask kept in lock-step with it.
//!
//! ## Memory Layout
//!
//! Blocks are stored flat in x, then z, then y order:
//! `index = x + z * dimension + y * dimension²`.
//!
//! The `solid_array` bit vector mirrors the block buffer with one bit per block,
//! giving O(1) solidity checks and a cheap "is this chunk empty?" test that the
//! mesher uses to skip chunks without work.

use bitvec::prelude::BitVec;
use cgmath::Point3;

use super::block::{block_type::BlockType, Block};
use chunk_iteration::ChunkBlockIterator;

pub mod chunk_iteration;

/// A fixed-size cube of voxel blocks, the unit of allocation and remeshing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk {
    /// The position of this chunk in chunk coordinates (not block coordinates).
    pub position: Point3<i32>,
    dimension: usize,
    blocks: Vec<Block>,
    /// One bit per block, set when the block is solid. Same indexing as `blocks`.
    solid_array: BitVec,
}

impl Chunk {
    /// Creates a new, completely empty chunk (all blocks are air).
    pub fn empty(position: Point3<i32>, dimension: usize) -> Self {
        let volume = dimension * dimension * dimension;
        Chunk {
            position,
            dimension,
            blocks: vec![Block::new(BlockType::AIR); volume],
            solid_array: BitVec::repeat(false, volume),
        }
    }

    /// Edge length of the chunk, in blocks.
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Flat buffer offset of a chunk-local position.
    ///
    /// # Panics
    /// Panics (via the buffer index) if the position is outside the chunk.
    #[inline]
    pub fn index_of(&self, local: Point3<usize>) -> usize {
        local.x + local.z * self.dimension + local.y * self.dimension * self.dimension
    }

    /// Inverse of [`Chunk::index_of`].
    #[inline]
    pub fn position_of(&self, index: usize) -> Point3<usize> {
        let plane = self.dimension * self.dimension;
        Point3::new(
            index % self.dimension,
            index / plane,
            (index % plane) / self.dimension,
        )
    }

    /// The block at chunk-local coordinates.
    pub fn get_block_at(&self, local: Point3<usize>) -> Block {
        self.blocks[self.index_of(local)]
    }

    /// Overwrites the block at chunk-local coordinates, keeping the solid mask in sync.
    pub fn set_block_at(&mut self, local: Point3<usize>, block: Block) {
        let index = self.index_of(local);
        self.blocks[index] = block;
        self.solid_array.set(index, block.is_solid());
    }

    /// Checks if the block at the specified chunk-relative coordinates is solid.
    pub fn is_block_solid(&self, local: Point3<usize>) -> bool {
        self.solid_array[self.index_of(local)]
    }

    /// `true` when every block in the chunk is air.
    pub fn is_empty(&self) -> bool {
        self.solid_array.not_any()
    }

    /// Number of solid blocks in the chunk.
    pub fn solid_count(&self) -> usize {
        self.solid_array.count_ones()
    }

    /// Raw view of the block buffer, one byte per block.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.blocks)
    }

    /// Iterates over the solid blocks, in buffer order.
    pub fn iter_solid(&self) -> ChunkBlockIterator<'_> {
        ChunkBlockIterator::new(self)
    }
}
