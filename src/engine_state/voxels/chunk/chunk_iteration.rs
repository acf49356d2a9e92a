//! # Chunk Iteration Module
//!
//! Iteration over the solid blocks of a chunk. The chunk's solid bit mask is
//! scanned for set bits, so runs of air cost one word test per machine word
//! rather than one block lookup each.

use bitvec::slice::IterOnes;
use cgmath::Point3;

use crate::engine_state::voxels::block::Block;

use super::Chunk;

/// An iterator over all non-air blocks in a chunk, yielding chunk-local
/// positions in buffer order (x fastest, then z, then y).
pub struct ChunkBlockIterator<'a> {
    chunk_ref: &'a Chunk,
    ones: IterOnes<'a, usize, bitvec::order::Lsb0>,
}

impl<'a> ChunkBlockIterator<'a> {
    /// Creates a new `ChunkBlockIterator` for the given chunk.
    pub fn new(chunk_ref: &'a Chunk) -> Self {
        ChunkBlockIterator {
            chunk_ref,
            ones: chunk_ref.solid_array.iter_ones(),
        }
    }
}

impl Iterator for ChunkBlockIterator<'_> {
    type Item = (Point3<usize>, Block);

    fn next(&mut self) -> Option<Self::Item> {
        let index = self.ones.next()?;
        Some((
            self.chunk_ref.position_of(index),
            self.chunk_ref.blocks[index],
        ))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.ones.size_hint()
    }
}
