//! # Physics Module
//!
//! Read-only geometric queries against the voxel grid.
//!
//! * **Raycast**: first solid voxel along a segment, for picking
//! * **Collision**: is a set of points or a box inside solid space
//! * **Movement**: axis-separated agent motion built on the collision query

pub mod collision;
pub mod movement;
pub mod raycast;

pub use collision::{is_obstructed, Aabb, AgentBody, BoundingVolume};
pub use movement::{move_axis_separated, MoveOutcome};
pub use raycast::{cast_ray, intersect_ray, Ray, RayHit};
