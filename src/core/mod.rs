//! # Core Module
//!
//! Infrastructure shared by every engine subsystem.
//!
//! ## Key Components
//! - `EngineConfig`: Startup configuration, loaded from JSON
//! - `VoxelError`: The engine's error taxonomy
//! - `MtResource`: Thread-safe reference-counted resource with read-write locking

pub mod config;
pub mod error;
pub mod mt_resource;

pub use config::{AgentConfig, AtlasConfig, EngineConfig};
pub use error::VoxelError;
pub use mt_resource::MtResource;
