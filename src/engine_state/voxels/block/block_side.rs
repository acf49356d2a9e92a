//! # Block Side Module
//!
//! This module defines the six axis-aligned faces of a voxel block, their
//! outward normals and the neighbor offset each face looks through.

use cgmath::{Point3, Vector3};

/// Represents the six possible faces of a voxel block.
///
/// The discriminant indexes the per-face tables (atlas tiles, face corners).
/// The order is: [LEFT, RIGHT, BOTTOM, TOP, BACK, FRONT]
#[derive(PartialEq, Eq, Hash, Copy, Clone, Debug, PartialOrd, Ord)]
pub enum BlockSide {
    /// The left face (facing negative X)
    LEFT = 0,

    /// The right face (facing positive X)
    RIGHT = 1,

    /// The bottom face (facing negative Y)
    BOTTOM = 2,

    /// The top face (facing positive Y)
    TOP = 3,

    /// The back face (facing negative Z)
    BACK = 4,

    /// The front face (facing positive Z)
    FRONT = 5,
}

impl BlockSide {
    /// Returns an array containing all six block faces in table order.
    pub fn all() -> [BlockSide; 6] {
        [
            BlockSide::LEFT,
            BlockSide::RIGHT,
            BlockSide::BOTTOM,
            BlockSide::TOP,
            BlockSide::BACK,
            BlockSide::FRONT,
        ]
    }

    /// Offset from a voxel to the neighbor that shares this face.
    pub fn offset(self) -> Vector3<i32> {
        match self {
            BlockSide::LEFT => Vector3::new(-1, 0, 0),
            BlockSide::RIGHT => Vector3::new(1, 0, 0),
            BlockSide::BOTTOM => Vector3::new(0, -1, 0),
            BlockSide::TOP => Vector3::new(0, 1, 0),
            BlockSide::BACK => Vector3::new(0, 0, -1),
            BlockSide::FRONT => Vector3::new(0, 0, 1),
        }
    }

    /// The voxel sharing this face with `position`, or `None` when it lies
    /// outside the `i32` grid.
    pub fn neighbor(self, position: Point3<i32>) -> Option<Point3<i32>> {
        let offset = self.offset();
        Some(Point3::new(
            position.x.checked_add(offset.x)?,
            position.y.checked_add(offset.y)?,
            position.z.checked_add(offset.z)?,
        ))
    }

    /// Unit outward normal of this face.
    pub fn normal(self) -> Vector3<f32> {
        let offset = self.offset();
        Vector3::new(offset.x as f32, offset.y as f32, offset.z as f32)
    }

    /// The face pointing the opposite way.
    pub fn opposite(self) -> BlockSide {
        match self {
            BlockSide::LEFT => BlockSide::RIGHT,
            BlockSide::RIGHT => BlockSide::LEFT,
            BlockSide::BOTTOM => BlockSide::TOP,
            BlockSide::TOP => BlockSide::BOTTOM,
            BlockSide::BACK => BlockSide::FRONT,
            BlockSide::FRONT => BlockSide::BACK,
        }
    }

    /// Maps an axis (0 = x, 1 = y, 2 = z) and a direction sign to a face.
    pub fn from_axis(axis: usize, positive: bool) -> Option<BlockSide> {
        match (axis, positive) {
            (0, false) => Some(BlockSide::LEFT),
            (0, true) => Some(BlockSide::RIGHT),
            (1, false) => Some(BlockSide::BOTTOM),
            (1, true) => Some(BlockSide::TOP),
            (2, false) => Some(BlockSide::BACK),
            (2, true) => Some(BlockSide::FRONT),
            _ => None,
        }
    }
}
