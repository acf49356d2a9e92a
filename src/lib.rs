#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![warn(rustdoc::invalid_rust_codeblocks)]

//! # Voxel World
//!
//! A voxel-world engine core: a sparse, chunked grid of typed cells, a
//! face-culling mesher that turns any chunk into renderable geometry, an exact
//! voxel-walking ray query for picking, and collision queries for a simulated
//! agent.
//!
//! ## Key Modules
//!
//! * `core` - Configuration, errors and the shared resource handle
//! * `engine_state` - The engine: voxels, meshing, physics and interaction
//!
//! ## Architecture
//!
//! The engine never touches a graphics context or an input device. A host
//! application owns the render loop: it feeds pointer rays and agent positions
//! in, and takes geometry buffers out to upload.
//!
//! ## Usage
//!
//! ```rust
//! use cgmath::{Point3, Vector3};
//! use voxel_world::{EngineConfig, EngineState, PointerAction};
//!
//! let mut engine = EngineState::new(EngineConfig::default()).unwrap();
//! engine.generate_terrain([Point3::new(0, 0, 0)]);
//! engine.rebuild_dirty();
//!
//! let eye = Point3::new(0.5, 12.0, 0.5);
//! engine
//!     .apply_pointer_action(PointerAction::Mine, eye, Vector3::new(0.0, -1.0, 0.0))
//!     .unwrap();
//! let retired = engine.rebuild_dirty();
//! assert_eq!(retired.len(), 1);
//! ```

use cgmath::{Point3, Vector3};
use log::{info, warn};

pub mod core;
pub mod engine_state;

pub use crate::core::{EngineConfig, MtResource, VoxelError};
pub use engine_state::{
    interaction::{EditOutcome, PointerAction},
    physics::{BoundingVolume, RayHit},
    rendering::{GeometryBuffer, TextureAtlas},
    voxels::{block::block_type::BlockType, terrain::TerrainGenerator, world::World},
    EngineState,
};

/// Environment variable naming a JSON configuration file.
pub const CONFIG_ENV_VAR: &str = "VOXEL_WORLD_CONFIG";

/// Side length, in chunks, of the square of terrain generated at startup.
const STARTUP_CHUNKS: i32 = 3;

/// Gravity applied to the demo agent, in voxels per second squared.
const GRAVITY: f64 = 30.0;

/// Runs the headless demo: generates terrain, meshes it, edits it through the
/// pointer and drops an agent onto it, logging each step.
pub fn run() -> Result<(), VoxelError> {
    let mut log_builder = env_logger::Builder::new();
    log_builder
        .target(env_logger::Target::Stdout)
        .parse_env("RUST_LOG")
        .init();

    let config = match std::env::var(CONFIG_ENV_VAR) {
        Ok(path) => EngineConfig::from_path(path)?,
        Err(_) => {
            info!("{} not set, using default configuration", CONFIG_ENV_VAR);
            EngineConfig::default()
        }
    };
    let mut engine = EngineState::new(config)?;

    let half = STARTUP_CHUNKS / 2;
    let cells: Vec<_> = (-half..=half)
        .flat_map(|x| (-half..=half).map(move |z| Point3::new(x, 0, z)))
        .collect();
    engine.generate_terrain(cells);
    engine.rebuild_dirty();
    let faces: usize = engine.meshes().iter().map(|(_, g)| g.quad_count()).sum();
    info!("Meshed {} chunks with {} faces", engine.meshes().len(), faces);

    let eye = Point3::new(0.5, 12.0, 0.5);
    let down = Vector3::new(0.0, -1.0, 0.0);
    let end = eye + down * engine.config().pick_distance;
    match engine.intersect_ray(eye, end) {
        Some(hit) => info!(
            "Pointer hit {:?} ({}) at {:?} through face {:?}",
            hit.position,
            BlockType::try_from_int(hit.voxel).map_or("unknown", BlockType::name),
            hit.point,
            hit.normal
        ),
        None => warn!("Pointer ray from {:?} hit nothing", eye),
    }

    for action in [PointerAction::Mine, PointerAction::Place(BlockType::WOOD)] {
        let outcome = engine.apply_pointer_action(action, eye, down)?;
        info!("{:?}: {:?}", action, outcome);
    }
    let retired = engine.rebuild_dirty();
    info!("Rebuilt after edits, {} buffers retired", retired.len());

    let mut position = Point3::new(3.5, 14.0, 3.5);
    let mut velocity = Vector3::new(0.0, 0.0, 0.0);
    let dt = 1.0 / 60.0;
    for frame in 0..240 {
        velocity.y -= GRAVITY * dt;
        let outcome = engine.move_agent(position, velocity, dt);
        position = outcome.position;
        velocity = outcome.velocity;
        if outcome.grounded {
            info!("Agent landed at {:?} after {} frames", position, frame + 1);
            return Ok(());
        }
    }
    warn!("Agent still falling at {:?}", position);
    Ok(())
}
