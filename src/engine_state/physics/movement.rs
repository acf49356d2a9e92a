//! # Movement Module
//!
//! Per-frame agent motion. Each axis moves and is checked against the body's
//! collision probes on its own, so a blocked wall does not stop a fall.

use cgmath::{Point3, Vector3};

use super::collision::{is_obstructed, AgentBody};
use crate::engine_state::voxels::world::World;

/// Result of one movement step.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MoveOutcome {
    /// Eye position after the step.
    pub position: Point3<f64>,
    /// Velocity after the step; blocked axes are zeroed.
    pub velocity: Vector3<f64>,
    /// `true` when a downward move was stopped by the ground.
    pub grounded: bool,
}

/// Moves the agent by `velocity * dt`, one axis at a time in x, z, y order.
///
/// After each axis the body's probes are tested; if any is inside a solid
/// voxel that axis is undone and its velocity zeroed. Resolving axes
/// separately lets the agent slide along walls instead of sticking to them.
pub fn move_axis_separated(
    world: &World,
    body: &AgentBody,
    eye: Point3<f64>,
    velocity: Vector3<f64>,
    dt: f64,
) -> MoveOutcome {
    let mut position = eye;
    let mut velocity = velocity;
    let mut grounded = false;

    for axis in [0, 2, 1] {
        let displacement = velocity[axis] * dt;
        if displacement == 0.0 {
            continue;
        }
        position[axis] += displacement;
        if is_obstructed(world, &body.probe_volume(position)) {
            position[axis] -= displacement;
            if axis == 1 && velocity.y < 0.0 {
                grounded = true;
            }
            velocity[axis] = 0.0;
        }
    }

    MoveOutcome {
        position,
        velocity,
        grounded,
    }
}
