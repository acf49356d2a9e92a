//! # World Module
//!
//! This module provides the `World` struct, the voxel grid: a sparse map from
//! chunk coordinates to dense chunks.
//!
//! ## Architecture
//!
//! The world uses a sparse storage approach where only chunks that have been
//! written to exist. A chunk is allocated the first time any voxel inside it is
//! written and lives for the rest of the process. Reads never allocate: a voxel
//! with no backing chunk reads as air.
//!
//! The world owns no rendering state. A write does not rebuild any mesh; callers
//! use [`World::affected_cells`] to find which chunks need regenerating, so they
//! can batch several edits before one rebuild.

use std::collections::HashMap;

use cgmath::Point3;
use log::{debug, warn};

use crate::core::{config::DEFAULT_CELL_SIZE, MtResource, VoxelError};
use crate::engine_state::voxels::block::{block_type::BlockType, Block, BlockTypeSize};
use crate::engine_state::voxels::chunk::Chunk;

/// Represents a voxel world composed of multiple chunks.
///
/// # Examples
///
/// ```
/// use cgmath::Point3;
/// use voxel_world::World;
///
/// let mut world = World::new(32);
/// world.set_voxel(Point3::new(-1, 5, 40), 3).unwrap();
/// assert_eq!(world.get_voxel(Point3::new(-1, 5, 40)), 3);
/// assert_eq!(world.get_voxel(Point3::new(1000, 1000, 1000)), 0);
/// ```
#[derive(Debug, Clone)]
pub struct World {
    cell_size: i32,
    /// A mapping from chunk coordinates to chunk data.
    chunks: HashMap<Point3<i32>, Chunk>,
}

impl Default for World {
    fn default() -> Self {
        World::new(DEFAULT_CELL_SIZE)
    }
}

impl World {
    /// Creates a new, empty world whose chunks are `cell_size` voxels on a side.
    ///
    /// # Panics
    /// Panics if `cell_size` is not positive. Configurations are validated
    /// before they reach this point.
    pub fn new(cell_size: i32) -> Self {
        assert!(cell_size > 0, "cell size must be positive");
        World {
            cell_size,
            chunks: HashMap::new(),
        }
    }

    /// Edge length of a chunk, in voxels.
    pub fn cell_size(&self) -> i32 {
        self.cell_size
    }

    /// The chunk coordinate owning an absolute voxel coordinate (floor division).
    pub fn compute_cell_position(&self, position: Point3<i32>) -> Point3<i32> {
        Point3::new(
            position.x.div_euclid(self.cell_size),
            position.y.div_euclid(self.cell_size),
            position.z.div_euclid(self.cell_size),
        )
    }

    /// The position of an absolute voxel coordinate inside its chunk.
    pub fn compute_local_position(&self, position: Point3<i32>) -> Point3<usize> {
        Point3::new(
            position.x.rem_euclid(self.cell_size) as usize,
            position.y.rem_euclid(self.cell_size) as usize,
            position.z.rem_euclid(self.cell_size) as usize,
        )
    }

    /// Absolute coordinate of the first voxel of a chunk, or `None` for a chunk
    /// that starts outside the `i32` grid.
    pub fn cell_origin(&self, cell: Point3<i32>) -> Option<Point3<i32>> {
        Some(Point3::new(
            cell.x.checked_mul(self.cell_size)?,
            cell.y.checked_mul(self.cell_size)?,
            cell.z.checked_mul(self.cell_size)?,
        ))
    }

    /// Retrieves the chunk at the specified chunk coordinates, if allocated.
    pub fn get_chunk_at(&self, cell: Point3<i32>) -> Option<&Chunk> {
        self.chunks.get(&cell)
    }

    /// The material id at an absolute coordinate; `0` where nothing was written.
    pub fn get_voxel(&self, position: Point3<i32>) -> BlockTypeSize {
        match self.chunks.get(&self.compute_cell_position(position)) {
            Some(chunk) => {
                chunk
                    .get_block_at(self.compute_local_position(position))
                    .block_type
            }
            None => BlockType::AIR as BlockTypeSize,
        }
    }

    /// `true` if the voxel at `position` holds a solid material.
    pub fn is_solid(&self, position: Point3<i32>) -> bool {
        match self.chunks.get(&self.compute_cell_position(position)) {
            Some(chunk) => chunk.is_block_solid(self.compute_local_position(position)),
            None => false,
        }
    }

    /// Writes a raw material id, allocating the backing chunk if needed.
    ///
    /// Ids outside the material set are rejected with
    /// [`VoxelError::InvalidVoxelType`] and the grid is left unchanged.
    pub fn set_voxel(
        &mut self,
        position: Point3<i32>,
        voxel: BlockTypeSize,
    ) -> Result<(), VoxelError> {
        let block_type = BlockType::try_from_int(voxel).map_err(|err| {
            warn!("Rejected write of voxel type {} at {:?}", voxel, position);
            err
        })?;
        self.set_block(position, block_type);
        Ok(())
    }

    /// Writes a block type, allocating the backing chunk if needed.
    pub fn set_block(&mut self, position: Point3<i32>, block_type: BlockType) {
        let cell = self.compute_cell_position(position);
        let local = self.compute_local_position(position);
        let dimension = self.cell_size as usize;

        let chunk = self.chunks.entry(cell).or_insert_with(|| {
            debug!("Allocating chunk {:?}", cell);
            Chunk::empty(cell, dimension)
        });
        chunk.set_block_at(local, Block::new(block_type));
    }

    /// Chunks whose meshes may change when the voxel at `position` changes.
    ///
    /// The owning chunk comes first, followed by each neighbor whose shared face
    /// the voxel touches, in -x, +x, -y, +y, -z, +z order.
    pub fn affected_cells(&self, position: Point3<i32>) -> Vec<Point3<i32>> {
        let cell = self.compute_cell_position(position);
        let local = self.compute_local_position(position);
        let last = (self.cell_size - 1) as usize;
        let mut cells = vec![cell];

        let local = [local.x, local.y, local.z];
        for (axis, &coordinate) in local.iter().enumerate() {
            for (touches, step) in [(coordinate == 0, -1), (coordinate == last, 1)] {
                if !touches {
                    continue;
                }
                let mut neighbor = cell;
                match neighbor[axis].checked_add(step) {
                    Some(coordinate) => neighbor[axis] = coordinate,
                    None => continue,
                }
                if !cells.contains(&neighbor) {
                    cells.push(neighbor);
                }
            }
        }
        cells
    }

    /// Number of allocated chunks.
    pub fn chunk_count(&self) -> usize {
        self.chunks.len()
    }

    /// Coordinates of every allocated chunk, in unspecified order.
    pub fn chunk_positions(&self) -> impl Iterator<Item = Point3<i32>> + '_ {
        self.chunks.keys().copied()
    }

    /// Moves the world behind a read-write lock for multi-threaded hosts.
    pub fn into_shared(self) -> MtResource<World> {
        MtResource::new(self)
    }
}
