//! # Engine Configuration
//!
//! Startup parameters for the engine: chunk size, texture atlas layout, agent
//! dimensions and the terrain generator. Every field has a default, so an empty
//! JSON object (or no file at all) yields a working engine.
//!
//! ```json
//! {
//!     "cell_size": 32,
//!     "atlas": { "tile_size": 64, "tile_texture_width": 512, "tile_texture_height": 512 },
//!     "agent": { "radius": 0.3, "height": 1.7, "head_clearance": 0.1 },
//!     "pick_distance": 10.0,
//!     "terrain": { "method": "waves" }
//! }
//! ```

use std::path::Path;

use log::info;
use serde::{Deserialize, Serialize};

use crate::core::VoxelError;
use crate::engine_state::voxels::terrain::TerrainGenerator;

/// Default edge length of a chunk, in voxels.
pub const DEFAULT_CELL_SIZE: i32 = 32;

/// Layout of the shared texture atlas.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AtlasConfig {
    /// Edge length of one square tile, in pixels.
    pub tile_size: u32,
    /// Width of the whole atlas, in pixels.
    pub tile_texture_width: u32,
    /// Height of the whole atlas, in pixels.
    pub tile_texture_height: u32,
}

impl Default for AtlasConfig {
    fn default() -> Self {
        AtlasConfig {
            tile_size: 64,
            tile_texture_width: 512,
            tile_texture_height: 512,
        }
    }
}

/// Extent of the simulated agent. The agent's reference point is its eye.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AgentConfig {
    /// Half-width of the agent on the x and z axes.
    pub radius: f64,
    /// Distance from the eye down to the feet.
    pub height: f64,
    /// How far below the eye the head probes sit.
    pub head_clearance: f64,
}

impl Default for AgentConfig {
    fn default() -> Self {
        AgentConfig {
            radius: 0.3,
            height: 1.7,
            head_clearance: 0.1,
        }
    }
}

/// Top-level engine configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Edge length of a chunk, in voxels.
    pub cell_size: i32,
    /// Texture atlas layout used for uv generation.
    pub atlas: AtlasConfig,
    /// Agent extent used for collision probes and placement checks.
    pub agent: AgentConfig,
    /// Length of the pointer ray used for picking.
    pub pick_distance: f64,
    /// Generator used to populate the initial world.
    pub terrain: TerrainGenerator,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            cell_size: DEFAULT_CELL_SIZE,
            atlas: AtlasConfig::default(),
            agent: AgentConfig::default(),
            pick_distance: 10.0,
            terrain: TerrainGenerator::Waves,
        }
    }
}

impl EngineConfig {
    /// Parses and validates a configuration from JSON text.
    pub fn from_json_str(json: &str) -> Result<Self, VoxelError> {
        let config: EngineConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a configuration file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, VoxelError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&text)?;
        info!("Loaded engine configuration from {}", path.display());
        Ok(config)
    }

    /// Checks the invariants the rest of the engine relies on.
    pub fn validate(&self) -> Result<(), VoxelError> {
        if self.cell_size <= 0 {
            return Err(VoxelError::InvalidConfig(format!(
                "cell_size must be positive, got {}",
                self.cell_size
            )));
        }
        if self.atlas.tile_size == 0 {
            return Err(VoxelError::InvalidConfig(
                "atlas.tile_size must be positive".to_string(),
            ));
        }
        if self.atlas.tile_texture_width < self.atlas.tile_size
            || self.atlas.tile_texture_height < self.atlas.tile_size
        {
            return Err(VoxelError::InvalidConfig(format!(
                "atlas of {}x{} cannot hold a {} pixel tile",
                self.atlas.tile_texture_width, self.atlas.tile_texture_height, self.atlas.tile_size
            )));
        }
        if !(self.agent.radius > 0.0 && self.agent.height > 0.0) {
            return Err(VoxelError::InvalidConfig(
                "agent radius and height must be positive".to_string(),
            ));
        }
        if !(self.agent.head_clearance >= 0.0 && self.agent.head_clearance < self.agent.height) {
            return Err(VoxelError::InvalidConfig(
                "agent head_clearance must lie within the agent height".to_string(),
            ));
        }
        if !(self.pick_distance > 0.0) {
            return Err(VoxelError::InvalidConfig(
                "pick_distance must be positive".to_string(),
            ));
        }
        Ok(())
    }
}
