//! # Engine State Module
//!
//! The core engine module that owns the voxel world and everything derived
//! from it.
//!
//! ## Key Components
//!
//! * `EngineState` - The main state container for the engine
//! * `voxels` - Voxel data, chunks and world generation
//! * `rendering` - Per-chunk geometry and the atlas layout it targets
//! * `physics` - Ray, collision and movement queries
//! * `interaction` - Pointer-driven mine and place edits
//!
//! ## Architecture
//!
//! Writes go to the world immediately and are visible to every later read,
//! ray or collision query. Meshes are not: a write only records which chunks
//! it made stale, and [`EngineState::rebuild_dirty`] regenerates each of them
//! once. Callers can batch many edits into a single rebuild per frame.

use std::collections::HashSet;

use cgmath::{Point3, Vector3};
use log::{debug, info};

use crate::core::{EngineConfig, VoxelError};
use interaction::{apply_pointer_action, pointer_segment_end, EditOutcome, PointerAction};
use physics::{
    collision::{is_obstructed, AgentBody, BoundingVolume},
    movement::{move_axis_separated, MoveOutcome},
    raycast::{intersect_ray, RayHit},
};
use rendering::{atlas::TextureAtlas, meshing::GeometryBuffer, meshing::MeshRegistry};
use voxels::{
    block::{block_side::BlockSide, BlockTypeSize},
    world::World,
};

pub mod interaction;
pub mod physics;
pub mod rendering;
pub mod voxels;

/// The main state container for the voxel engine
///
/// Owns the world, the current geometry of every meshed chunk and the set of
/// chunks whose geometry is stale.
///
/// # Examples
///
/// ```
/// use cgmath::Point3;
/// use voxel_world::{EngineConfig, EngineState};
///
/// let mut engine = EngineState::new(EngineConfig::default()).unwrap();
/// engine.set_voxel(Point3::new(1, 1, 1), 3).unwrap();
/// engine.rebuild_dirty();
/// assert_eq!(engine.meshes().len(), 1);
/// ```
#[derive(Debug)]
pub struct EngineState {
    config: EngineConfig,
    /// The voxel world containing all chunk data
    world: World,
    atlas: TextureAtlas,
    body: AgentBody,
    meshes: MeshRegistry,
    /// Chunks written since their last rebuild
    dirty_cells: HashSet<Point3<i32>>,
}

impl EngineState {
    /// Creates an engine with an empty world.
    ///
    /// Fails if `config` does not validate.
    pub fn new(config: EngineConfig) -> Result<Self, VoxelError> {
        config.validate()?;
        Ok(EngineState {
            world: World::new(config.cell_size),
            atlas: TextureAtlas::new(&config.atlas),
            body: AgentBody::from(config.agent),
            meshes: MeshRegistry::new(),
            dirty_cells: HashSet::new(),
            config,
        })
    }

    /// The configuration the engine was built from.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Read access to the voxel world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// The atlas layout used for texture coordinates.
    pub fn atlas(&self) -> &TextureAtlas {
        &self.atlas
    }

    /// The agent's collision shape.
    pub fn body(&self) -> &AgentBody {
        &self.body
    }

    /// Current geometry of every meshed chunk.
    pub fn meshes(&self) -> &MeshRegistry {
        &self.meshes
    }

    /// Number of chunks waiting for a rebuild.
    pub fn pending_rebuilds(&self) -> usize {
        self.dirty_cells.len()
    }

    /// The material id at `position`.
    pub fn get_voxel(&self, position: Point3<i32>) -> BlockTypeSize {
        self.world.get_voxel(position)
    }

    /// Writes one voxel and marks every chunk whose mesh it affects as stale.
    pub fn set_voxel(
        &mut self,
        position: Point3<i32>,
        voxel: BlockTypeSize,
    ) -> Result<(), VoxelError> {
        self.world.set_voxel(position, voxel)?;
        self.dirty_cells.extend(self.world.affected_cells(position));
        Ok(())
    }

    /// First solid voxel along the segment `start..end`.
    pub fn intersect_ray(&self, start: Point3<f64>, end: Point3<f64>) -> Option<RayHit> {
        intersect_ray(&self.world, start, end)
    }

    /// `true` if `volume` overlaps solid space.
    pub fn is_obstructed(&self, volume: &BoundingVolume) -> bool {
        is_obstructed(&self.world, volume)
    }

    /// Runs the configured terrain generator over `cells`.
    ///
    /// Every generated chunk and its face neighbors are marked stale. Returns
    /// the number of solid voxels written.
    pub fn generate_terrain<I>(&mut self, cells: I) -> usize
    where
        I: IntoIterator<Item = Point3<i32>>,
    {
        let generator = self.config.terrain;
        let mut written = 0;
        for cell in cells {
            let count = generator.generate(&mut self.world, cell);
            if count > 0 {
                self.dirty_cells.insert(cell);
                self.dirty_cells
                    .extend(BlockSide::all().into_iter().filter_map(|side| side.neighbor(cell)));
            }
            written += count;
        }
        info!("Terrain pass wrote {} solid voxels", written);
        written
    }

    /// Regenerates every stale chunk once, in coordinate order.
    ///
    /// Returns the buffers that were replaced or removed, for the caller to release.
    pub fn rebuild_dirty(&mut self) -> Vec<GeometryBuffer> {
        let mut cells: Vec<_> = self.dirty_cells.drain().collect();
        cells.sort_by_key(|c| (c.x, c.y, c.z));

        let start_time = web_time::Instant::now();
        let retired: Vec<_> = cells
            .iter()
            .filter_map(|cell| self.meshes.rebuild(&self.world, &self.atlas, *cell))
            .collect();

        if !cells.is_empty() {
            debug!(
                "Rebuilt {} chunks ({} retired) in {:?}",
                cells.len(),
                retired.len(),
                start_time.elapsed()
            );
        }
        retired
    }

    /// Mines or places along the pointer ray from `eye` in direction `look`.
    ///
    /// The ray is `pick_distance` long. Placement never fills a cell the agent
    /// standing at `eye` occupies. Edited chunks are marked stale.
    pub fn apply_pointer_action(
        &mut self,
        action: PointerAction,
        eye: Point3<f64>,
        look: Vector3<f64>,
    ) -> Result<EditOutcome, VoxelError> {
        let end = pointer_segment_end(eye, look, self.config.pick_distance);
        let agent_box = self.body.bounding_box(eye);
        let outcome = apply_pointer_action(&mut self.world, action, eye, end, &agent_box)?;
        if let EditOutcome::Edited { dirty_cells, .. } = &outcome {
            self.dirty_cells.extend(dirty_cells.iter().copied());
        }
        Ok(outcome)
    }

    /// Moves the agent whose eye is at `eye`, resolving collisions per axis.
    pub fn move_agent(&self, eye: Point3<f64>, velocity: Vector3<f64>, dt: f64) -> MoveOutcome {
        move_axis_separated(&self.world, &self.body, eye, velocity, dt)
    }
}
