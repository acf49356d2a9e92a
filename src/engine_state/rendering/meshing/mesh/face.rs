use cgmath::Vector3;

use crate::engine_state::voxels::block::block_side::BlockSide;

/// One corner of a unit face: its offset from the voxel's minimum corner and
/// the matching corner of the atlas tile.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FaceCorner {
    /// Offset from the voxel origin, each component 0 or 1.
    pub offset: Vector3<i32>,
    /// Tile-relative texture coordinate, each component 0 or 1.
    pub uv: [f32; 2],
}

/// Represents a single quad face of a voxel in the mesh.
///
/// Corners are ordered so that triangles `(0, 1, 2)` and `(2, 1, 3)` wind
/// counter-clockwise when seen from outside the voxel, and the uv of each
/// corner keeps the tile upright on every face.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Face {
    /// Which side of the block this face represents
    pub block_side: BlockSide,
    /// The four corners of the quad
    pub corners: [FaceCorner; 4],
}

const fn corner(x: i32, y: i32, z: i32, u: f32, v: f32) -> FaceCorner {
    FaceCorner {
        offset: Vector3 { x, y, z },
        uv: [u, v],
    }
}

/// Corner layout of every face, indexed by `BlockSide`.
const FACES: [[FaceCorner; 4]; 6] = [
    // LEFT
    [
        corner(0, 1, 0, 0.0, 1.0),
        corner(0, 0, 0, 0.0, 0.0),
        corner(0, 1, 1, 1.0, 1.0),
        corner(0, 0, 1, 1.0, 0.0),
    ],
    // RIGHT
    [
        corner(1, 1, 1, 0.0, 1.0),
        corner(1, 0, 1, 0.0, 0.0),
        corner(1, 1, 0, 1.0, 1.0),
        corner(1, 0, 0, 1.0, 0.0),
    ],
    // BOTTOM
    [
        corner(1, 0, 1, 1.0, 0.0),
        corner(0, 0, 1, 0.0, 0.0),
        corner(1, 0, 0, 1.0, 1.0),
        corner(0, 0, 0, 0.0, 1.0),
    ],
    // TOP
    [
        corner(0, 1, 1, 1.0, 1.0),
        corner(1, 1, 1, 0.0, 1.0),
        corner(0, 1, 0, 1.0, 0.0),
        corner(1, 1, 0, 0.0, 0.0),
    ],
    // BACK
    [
        corner(1, 0, 0, 0.0, 0.0),
        corner(0, 0, 0, 1.0, 0.0),
        corner(1, 1, 0, 0.0, 1.0),
        corner(0, 1, 0, 1.0, 1.0),
    ],
    // FRONT
    [
        corner(0, 0, 1, 0.0, 0.0),
        corner(1, 0, 1, 1.0, 0.0),
        corner(0, 1, 1, 0.0, 1.0),
        corner(1, 1, 1, 1.0, 1.0),
    ],
];

impl Face {
    /// Index pattern of the two triangles of a quad, relative to its first vertex.
    pub const INDICES: [u32; 6] = [0, 1, 2, 2, 1, 3];

    /// The face on `block_side` of a unit voxel.
    pub fn new(block_side: BlockSide) -> Self {
        Face {
            block_side,
            corners: FACES[block_side as usize],
        }
    }
}
