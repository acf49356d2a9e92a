//! # Raycast Module
//!
//! Exact voxel traversal along a segment (3-D DDA). The walk visits every cell
//! the segment passes through, in order, one grid boundary at a time, and stops
//! at the first solid one.
//!
//! Ties between axes reaching a boundary at the same distance resolve x before
//! y before z. Axes the ray does not move along are never stepped.

use cgmath::{InnerSpace, Point3, Vector3};

use super::collision::voxel_containing;
use crate::engine_state::voxels::{block::BlockTypeSize, world::World};

/// A half-line through world space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray {
    /// Start point.
    pub origin: Point3<f64>,
    /// Direction of travel; not required to be normalized.
    pub dir: Vector3<f64>,
}

impl Ray {
    /// Creates a ray from an origin and direction.
    pub fn new(origin: Point3<f64>, dir: Vector3<f64>) -> Self {
        Ray { origin, dir }
    }

    /// The ray from `start` towards `end`.
    pub fn between(start: Point3<f64>, end: Point3<f64>) -> Self {
        Ray::new(start, end - start)
    }

    /// Evaluate the ray at a t-value to get a concrete position.
    pub fn get(&self, t: f64) -> Point3<f64> {
        self.origin + self.dir * t
    }
}

/// The first solid voxel struck by a ray.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RayHit {
    /// Absolute coordinate of the voxel hit.
    pub position: Point3<i32>,
    /// Outward normal of the face the ray entered through.
    pub normal: Vector3<i32>,
    /// World-space point where the ray entered the voxel.
    pub point: Point3<f64>,
    /// Material id of the voxel hit.
    pub voxel: BlockTypeSize,
    /// Distance from the ray origin to `point`.
    pub distance: f64,
}

impl RayHit {
    /// The empty cell in front of the face that was hit, or `None` when it
    /// lies outside the `i32` grid.
    pub fn adjacent(&self) -> Option<Point3<i32>> {
        Some(Point3::new(
            self.position.x.checked_add(self.normal.x)?,
            self.position.y.checked_add(self.normal.y)?,
            self.position.z.checked_add(self.normal.z)?,
        ))
    }
}

/// Walks the segment from `start` to `end`, returning the first solid voxel.
///
/// A zero-length segment never hits anything. If `start` already lies in a
/// solid voxel, that voxel is returned at distance zero with the normal facing
/// back along the ray's dominant axis.
pub fn intersect_ray(world: &World, start: Point3<f64>, end: Point3<f64>) -> Option<RayHit> {
    let delta = end - start;
    let length = delta.magnitude();
    if length == 0.0 || !length.is_finite() {
        return None;
    }
    walk(world, start, delta / length, length)
}

/// Casts `ray` for at most `max_distance`, returning the first solid voxel.
pub fn cast_ray(world: &World, ray: &Ray, max_distance: f64) -> Option<RayHit> {
    let length = ray.dir.magnitude();
    if length == 0.0 || !length.is_finite() || max_distance.is_nan() || max_distance <= 0.0 {
        return None;
    }
    walk(world, ray.origin, ray.dir / length, max_distance)
}

/// Per-axis traversal state. `None` entries belong to axes the ray does not
/// move along.
struct AxisWalk {
    step: i32,
    t_delta: f64,
    t_max: f64,
}

impl AxisWalk {
    fn new(origin: f64, cell: i32, dir: f64) -> Option<Self> {
        if dir == 0.0 {
            return None;
        }
        let step = if dir > 0.0 { 1 } else { -1 };
        let t_delta = (1.0 / dir).abs();
        let distance_to_boundary = if step > 0 {
            cell as f64 + 1.0 - origin
        } else {
            origin - cell as f64
        };
        Some(AxisWalk {
            step,
            t_delta,
            t_max: t_delta * distance_to_boundary,
        })
    }
}

fn walk(world: &World, origin: Point3<f64>, dir: Vector3<f64>, length: f64) -> Option<RayHit> {
    let mut cell = voxel_containing(origin)?;
    let mut axes = [
        AxisWalk::new(origin.x, cell.x, dir.x),
        AxisWalk::new(origin.y, cell.y, dir.y),
        AxisWalk::new(origin.z, cell.z, dir.z),
    ];
    let mut t = 0.0;
    let mut stepped: Option<usize> = None;

    while t <= length {
        let voxel = world.get_voxel(cell);
        if voxel != 0 {
            let normal = match stepped {
                Some(axis) => {
                    let mut normal = Vector3::new(0, 0, 0);
                    normal[axis] = -axes[axis].as_ref().map_or(0, |a| a.step);
                    normal
                }
                None => entry_normal(dir),
            };
            return Some(RayHit {
                position: cell,
                normal,
                point: origin + dir * t,
                voxel,
                distance: t,
            });
        }

        let mut next: Option<(usize, f64)> = None;
        for (axis, state) in axes.iter().enumerate() {
            if let Some(state) = state {
                if next.map_or(true, |(_, best)| state.t_max < best) {
                    next = Some((axis, state.t_max));
                }
            }
        }
        let (axis, t_max) = next?;
        if let Some(state) = axes[axis].as_mut() {
            // Leaving the grid ends the walk.
            cell[axis] = cell[axis].checked_add(state.step)?;
            state.t_max += state.t_delta;
        }
        t = t_max;
        stepped = Some(axis);
    }
    None
}

/// Normal reported when the ray starts inside a solid voxel: the face
/// opposing the largest direction component.
fn entry_normal(dir: Vector3<f64>) -> Vector3<i32> {
    let magnitudes = [dir.x.abs(), dir.y.abs(), dir.z.abs()];
    let mut axis = 0;
    for candidate in 1..3 {
        if magnitudes[candidate] > magnitudes[axis] {
            axis = candidate;
        }
    }
    let mut normal = Vector3::new(0, 0, 0);
    normal[axis] = if dir[axis] > 0.0 { -1 } else { 1 };
    normal
}
