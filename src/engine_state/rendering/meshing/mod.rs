//! Mesh generation for voxel rendering.
//!
//! Converts one chunk of the world into a [`GeometryBuffer`] by visible-face
//! extraction: every solid voxel emits one quad per side whose neighbor is not
//! solid. Neighbors are read through the [`World`], so faces on a chunk border
//! are culled against the adjacent chunk rather than against nothing.
//!
//! # Architecture
//! - [`generate_geometry_data_for_cell`]: builds the buffer for one chunk
//! - [`MeshRegistry`]: owns the current buffer of every chunk and swaps it on rebuild
//! - `mesh/`: the geometry buffer and the per-face corner table

use cgmath::Point3;
use log::debug;

use crate::engine_state::{
    rendering::atlas::TextureAtlas,
    voxels::{block::block_side::BlockSide, world::World},
};

mod mesh;
mod mesh_registry;

pub use mesh::*;
pub use mesh_registry::MeshRegistry;

/// Builds the surface geometry of chunk `cell`.
///
/// Returns an empty buffer when the chunk was never allocated or holds no
/// solid voxel. The result depends only on the world's contents, so two calls
/// with no write in between produce identical buffers.
pub fn generate_geometry_data_for_cell(
    world: &World,
    atlas: &TextureAtlas,
    cell: Point3<i32>,
) -> GeometryBuffer {
    let mut geometry = GeometryBuffer::new();
    let chunk = match world.get_chunk_at(cell) {
        Some(chunk) if !chunk.is_empty() => chunk,
        _ => return geometry,
    };

    let start_time = web_time::Instant::now();
    let origin = match world.cell_origin(cell) {
        Some(origin) => origin,
        None => return geometry,
    };
    let faces = BlockSide::all().map(Face::new);

    for (local, block) in chunk.iter_solid() {
        let voxel = Point3::new(
            origin.x + local.x as i32,
            origin.y + local.y as i32,
            origin.z + local.z as i32,
        );
        for face in &faces {
            // Beyond the edge of the grid counts as air.
            let covered = face
                .block_side
                .neighbor(voxel)
                .map_or(false, |neighbor| world.is_solid(neighbor));
            if !covered {
                geometry.push_face(atlas, voxel, block, face);
            }
        }
    }

    debug!(
        "Meshed chunk {:?}: {} faces in {:?}",
        cell,
        geometry.quad_count(),
        start_time.elapsed()
    );
    geometry
}
