//! Per-chunk surface geometry.
//!
//! A `GeometryBuffer` is the flat, renderer-agnostic output of meshing: parallel
//! position, normal and uv arrays plus a triangle index list into them.

use cgmath::Point3;

use super::face::Face;
use crate::engine_state::rendering::atlas::TextureAtlas;
use crate::engine_state::voxels::block::Block;

/// Surface geometry for one chunk, in world space.
///
/// `positions`, `normals` and `uvs` always have the same length; every index
/// refers to an entry of those arrays. An empty buffer has all four arrays empty.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GeometryBuffer {
    /// Vertex positions.
    pub positions: Vec<[f32; 3]>,
    /// Unit normal of each vertex, equal to the normal of its face.
    pub normals: Vec<[f32; 3]>,
    /// Atlas texture coordinate of each vertex.
    pub uvs: Vec<[f32; 2]>,
    /// Triangle list, three indices per triangle.
    pub indices: Vec<u32>,
}

impl GeometryBuffer {
    /// Creates an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// `true` when the buffer holds no triangles.
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Number of quads, four vertices each.
    pub fn quad_count(&self) -> usize {
        self.positions.len() / 4
    }

    /// Number of triangles.
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Appends one outward quad for `face` of the voxel at `voxel`.
    pub fn push_face(&mut self, atlas: &TextureAtlas, voxel: Point3<i32>, block: Block, face: &Face) {
        let base = self.positions.len() as u32;
        let normal = face.block_side.normal();
        let tile = block.get_atlas_tile(face.block_side);

        for corner in &face.corners {
            self.positions.push([
                (i64::from(voxel.x) + i64::from(corner.offset.x)) as f32,
                (i64::from(voxel.y) + i64::from(corner.offset.y)) as f32,
                (i64::from(voxel.z) + i64::from(corner.offset.z)) as f32,
            ]);
            self.normals.push(normal.into());
            self.uvs.push(atlas.uv(tile, corner.uv));
        }
        self.indices.extend(Face::INDICES.iter().map(|i| base + i));
    }

    /// Raw bytes of the position array, ready for a vertex buffer upload.
    pub fn position_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.positions)
    }

    /// Raw bytes of the normal array.
    pub fn normal_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.normals)
    }

    /// Raw bytes of the uv array.
    pub fn uv_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.uvs)
    }

    /// Raw bytes of the index array.
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }
}
