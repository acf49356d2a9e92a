//! Mesh data for voxel rendering.
//!
//! # Architecture
//! - [`GeometryBuffer`]: positions, normals, uvs and indices of one chunk
//! - [`Face`]: the corner layout of a single voxel face

mod face;
mod geometry;

pub use face::{Face, FaceCorner};
pub use geometry::GeometryBuffer;
