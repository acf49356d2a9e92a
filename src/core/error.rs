//! Error taxonomy for the voxel engine.
//!
//! Reads against unallocated space and zero-length rays are deliberately *not*
//! errors: they resolve to `0` and `None` respectively.

use thiserror::Error;

use crate::engine_state::voxels::block::BlockTypeSize;

/// Errors surfaced by the engine's fallible operations.
#[derive(Debug, Error)]
pub enum VoxelError {
    /// A write used a material id outside the engine's material set.
    /// The grid is left untouched when this is returned.
    #[error("invalid voxel type {0}")]
    InvalidVoxelType(BlockTypeSize),

    /// The configuration parsed but failed validation.
    #[error("invalid engine configuration: {0}")]
    InvalidConfig(String),

    /// The configuration text did not match the schema.
    #[error("failed to parse engine configuration: {0}")]
    ConfigParse(#[from] serde_json::Error),

    /// The configuration file could not be read.
    #[error("failed to read engine configuration: {0}")]
    ConfigIo(#[from] std::io::Error),
}
