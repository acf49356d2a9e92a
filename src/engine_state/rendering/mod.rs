//! Rendering-side data for the voxel engine.
//!
//! The engine never touches a graphics context. This module produces what a
//! renderer consumes: per-chunk geometry buffers and the atlas layout their
//! texture coordinates are computed against.

pub mod atlas;
pub mod meshing;

// Re-export commonly used types
pub use atlas::TextureAtlas;
pub use meshing::{generate_geometry_data_for_cell, GeometryBuffer, MeshRegistry};
