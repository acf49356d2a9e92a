//! # Voxel Engine Core
//!
//! This module contains the voxel grid: representing, reading and writing a
//! sparse chunked world of typed cells.
//!
//! ## Architecture
//!
//! * **Block**: Material ids, block faces and the atlas tile of every face
//! * **Chunk**: Fixed-size dense 3D arrays of blocks with a solidity mask
//! * **World**: The sparse map of chunks and the absolute-coordinate interface
//! * **Terrain**: Startup generators that populate chunks
//!
//! ## Data Flow
//!
//! 1. World receives requests for block access or modification
//! 2. World delegates to the owning chunk (allocating it on first write)
//! 3. Callers collect `affected_cells` and remesh those chunks when ready

pub mod block;
pub mod chunk;
pub mod terrain;
pub mod world;
