//! # Interaction Module
//!
//! Pointer-driven edits: mining the voxel under the pointer, or placing a new
//! one against the face the pointer is over. Each edit is one `intersect_ray`
//! followed by at most one write.

use cgmath::{InnerSpace, Point3, Vector3};
use log::debug;

use crate::core::VoxelError;
use crate::engine_state::{
    physics::{collision::Aabb, raycast::intersect_ray},
    voxels::{block::block_type::BlockType, world::World},
};

/// What the pointer asks for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerAction {
    /// Clear the voxel that was hit.
    Mine,
    /// Fill the empty cell in front of the face that was hit.
    Place(BlockType),
}

/// How a pointer action was resolved.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EditOutcome {
    /// The ray reached its end without touching a solid voxel.
    Missed,
    /// The placement cell overlaps the agent; nothing was written.
    Blocked {
        /// The cell that would have been filled.
        position: Point3<i32>,
    },
    /// One voxel was written.
    Edited {
        /// The voxel written.
        position: Point3<i32>,
        /// Chunks whose meshes are now stale.
        dirty_cells: Vec<Point3<i32>>,
    },
}

/// Applies `action` to whatever the segment `start..end` points at.
///
/// `agent_box` is the space the agent occupies; a placement whose unit cell
/// overlaps it is refused.
pub fn apply_pointer_action(
    world: &mut World,
    action: PointerAction,
    start: Point3<f64>,
    end: Point3<f64>,
    agent_box: &Aabb,
) -> Result<EditOutcome, VoxelError> {
    let hit = match intersect_ray(world, start, end) {
        Some(hit) => hit,
        None => return Ok(EditOutcome::Missed),
    };

    let (position, block_type) = match action {
        PointerAction::Mine => (hit.position, BlockType::AIR),
        PointerAction::Place(block_type) => {
            let target = match hit.adjacent() {
                Some(target) => target,
                None => return Ok(EditOutcome::Missed),
            };
            if Aabb::voxel(target).intersects(agent_box) {
                debug!("Placement at {:?} blocked by the agent", target);
                return Ok(EditOutcome::Blocked { position: target });
            }
            (target, block_type)
        }
    };

    world.set_voxel(position, block_type.id())?;
    debug!("{:?} at {:?}", action, position);
    Ok(EditOutcome::Edited {
        position,
        dirty_cells: world.affected_cells(position),
    })
}

/// End point of a pointer ray of length `distance` from `eye` along `look`.
pub fn pointer_segment_end(eye: Point3<f64>, look: Vector3<f64>, distance: f64) -> Point3<f64> {
    if look.magnitude2() == 0.0 {
        return eye;
    }
    eye + look.normalize() * distance
}
