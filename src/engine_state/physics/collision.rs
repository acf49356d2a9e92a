//! # Collision Module
//!
//! Stateless solidity queries against the voxel grid. A bounding volume is
//! either a set of sample points or an axis-aligned box. Points map to the
//! voxel containing them by flooring each coordinate; a box covers every voxel
//! its interior overlaps, so a box that only touches a voxel's face does not
//! count as overlapping it.
//!
//! What to do about an obstruction (undo a move, zero a velocity) is up to the
//! caller; see the `movement` module for the agent's own resolution.

use std::ops::RangeInclusive;

use cgmath::{Point3, Vector3};

use crate::core::AgentConfig;
use crate::engine_state::voxels::world::World;

/// An axis-aligned box in world space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Aabb {
    /// Minimum corner.
    pub min: Point3<f64>,
    /// Maximum corner.
    pub max: Point3<f64>,
}

impl Aabb {
    /// Creates a box from two opposite corners, in any order.
    pub fn new(a: Point3<f64>, b: Point3<f64>) -> Self {
        Aabb {
            min: Point3::new(a.x.min(b.x), a.y.min(b.y), a.z.min(b.z)),
            max: Point3::new(a.x.max(b.x), a.y.max(b.y), a.z.max(b.z)),
        }
    }

    /// A box of `size` centred on `center`.
    pub fn from_center_and_size(center: Point3<f64>, size: Vector3<f64>) -> Self {
        let half = size / 2.0;
        Aabb::new(center - half, center + half)
    }

    /// The unit box occupied by voxel `position`.
    pub fn voxel(position: Point3<i32>) -> Self {
        let min = Point3::new(position.x as f64, position.y as f64, position.z as f64);
        Aabb::new(min, min + Vector3::new(1.0, 1.0, 1.0))
    }

    /// `true` when the interiors of the two boxes overlap.
    pub fn intersects(&self, other: &Aabb) -> bool {
        self.min.x < other.max.x
            && self.max.x > other.min.x
            && self.min.y < other.max.y
            && self.max.y > other.min.y
            && self.min.z < other.max.z
            && self.max.z > other.min.z
    }

    /// Every voxel whose unit box overlaps this box's interior.
    pub fn overlapping_cells(&self) -> impl Iterator<Item = Point3<i32>> {
        let lo = [self.min.x, self.min.y, self.min.z].map(f64::floor);
        let hi = [self.max.x, self.max.y, self.max.z].map(|v| v.ceil() - 1.0);
        // A zero-thickness box still touches the voxel its plane lies in.
        let [xs, ys, zs] = [0, 1, 2].map(|i| grid_span(lo[i], hi[i].max(lo[i])));

        ys.flat_map(move |y| {
            let xs = xs.clone();
            zs.clone()
                .flat_map(move |z| xs.clone().map(move |x| Point3::new(x, y, z)))
        })
    }
}

/// The extent of something asking whether it is obstructed.
#[derive(Clone, Debug, PartialEq)]
pub enum BoundingVolume {
    /// A fixed set of world-space probe points.
    Points(Vec<Point3<f64>>),
    /// An axis-aligned box.
    Box(Aabb),
}

/// The voxel containing a world-space point, or `None` when the point lies
/// outside the `i32` grid.
pub fn voxel_containing(point: Point3<f64>) -> Option<Point3<i32>> {
    Some(Point3::new(
        grid_coordinate(point.x)?,
        grid_coordinate(point.y)?,
        grid_coordinate(point.z)?,
    ))
}

fn grid_coordinate(value: f64) -> Option<i32> {
    let floored = value.floor();
    if floored >= f64::from(i32::MIN) && floored <= f64::from(i32::MAX) {
        Some(floored as i32)
    } else {
        None
    }
}

/// Grid coordinates `lo..=hi`, clipped to the `i32` range.
fn grid_span(lo: f64, hi: f64) -> RangeInclusive<i32> {
    if lo.is_nan() || hi.is_nan() {
        return 1..=0;
    }
    let lo = lo.max(f64::from(i32::MIN));
    let hi = hi.min(f64::from(i32::MAX));
    if lo > hi {
        return 1..=0;
    }
    lo as i32..=hi as i32
}

/// `true` if the voxel containing `point` is solid. Points outside the grid
/// are never solid.
pub fn is_point_solid(world: &World, point: Point3<f64>) -> bool {
    voxel_containing(point).map_or(false, |voxel| world.is_solid(voxel))
}

/// `true` if any sample point, or any voxel overlapping the box, is solid.
///
/// Space outside every allocated chunk is never solid.
pub fn is_obstructed(world: &World, volume: &BoundingVolume) -> bool {
    match volume {
        BoundingVolume::Points(points) => points.iter().any(|p| is_point_solid(world, *p)),
        BoundingVolume::Box(aabb) => aabb.overlapping_cells().any(|cell| world.is_solid(cell)),
    }
}

/// Collision shape of the player agent, measured from its eye position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AgentBody {
    /// Half-width on x and z.
    pub radius: f64,
    /// Distance from the eye down to the feet.
    pub height: f64,
    /// How far below the eye the head probes sit.
    pub head_clearance: f64,
}

impl From<AgentConfig> for AgentBody {
    fn from(config: AgentConfig) -> Self {
        AgentBody {
            radius: config.radius,
            height: config.height,
            head_clearance: config.head_clearance,
        }
    }
}

impl AgentBody {
    /// Twelve probes: the four corners of the body at feet, waist and head height.
    pub fn sample_points(&self, eye: Point3<f64>) -> Vec<Point3<f64>> {
        let feet = eye.y - self.height;
        let head = eye.y - self.head_clearance;
        let waist = (feet + head) / 2.0;
        let r = self.radius;

        let mut points = Vec::with_capacity(12);
        for y in [feet, waist, head] {
            for (dx, dz) in [(-r, -r), (r, -r), (-r, r), (r, r)] {
                points.push(Point3::new(eye.x + dx, y, eye.z + dz));
            }
        }
        points
    }

    /// The probes as a bounding volume.
    pub fn probe_volume(&self, eye: Point3<f64>) -> BoundingVolume {
        BoundingVolume::Points(self.sample_points(eye))
    }

    /// The box the body occupies.
    pub fn bounding_box(&self, eye: Point3<f64>) -> Aabb {
        Aabb::from_center_and_size(
            Point3::new(eye.x, eye.y - self.height / 2.0, eye.z),
            Vector3::new(self.radius * 2.0, self.height, self.radius * 2.0),
        )
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use test_case::test_case;

    use super::*;
    use crate::engine_state::voxels::block::block_type::BlockType;

    fn world_with(cells: &[Point3<i32>]) -> World {
        let mut world = World::new(8);
        for cell in cells {
            world.set_block(*cell, BlockType::STONE);
        }
        world
    }

    #[test_case(Point3::new(2.5, 3.0, 2.5), Point3::new(2, 3, 2) ; "on a boundary")]
    #[test_case(Point3::new(-0.1, 0.9, -2.0), Point3::new(-1, 0, -2) ; "negative")]
    #[test_case(Point3::new(7.999, 8.0, 0.0), Point3::new(7, 8, 0) ; "chunk edge")]
    fn points_floor_into_voxels(point: Point3<f64>, expected: Point3<i32>) {
        assert_eq!(voxel_containing(point), Some(expected));
    }

    #[test_case(Point3::new(2147483648.0, 0.0, 0.0) ; "past max")]
    #[test_case(Point3::new(0.0, -2147483648.5, 0.0) ; "past min")]
    #[test_case(Point3::new(0.0, 0.0, f64::NAN) ; "nan")]
    fn points_off_the_grid_have_no_voxel(point: Point3<f64>) {
        assert_eq!(voxel_containing(point), None);
        assert!(!is_point_solid(&world_with(&[Point3::new(0, 0, 0)]), point));
    }

    #[test]
    fn boxes_are_clipped_to_the_grid() {
        let mut world = World::new(8);
        world.set_block(Point3::new(i32::MIN, 0, 0), BlockType::STONE);
        let straddling = Aabb::new(
            Point3::new(-2147483650.0, 0.2, 0.2),
            Point3::new(-2147483646.5, 0.8, 0.8),
        );
        assert_eq!(straddling.overlapping_cells().count(), 2);
        assert!(is_obstructed(&world, &BoundingVolume::Box(straddling)));

        let beyond = Aabb::new(Point3::new(3e9, 0.0, 0.0), Point3::new(3e9 + 1.0, 1.0, 1.0));
        assert_eq!(beyond.overlapping_cells().count(), 0);
    }

    #[test]
    fn points_outside_chunks_are_clear() {
        let world = world_with(&[Point3::new(0, 0, 0)]);
        let volume = BoundingVolume::Points(vec![Point3::new(100.5, 0.5, 0.5)]);
        assert!(!is_obstructed(&world, &volume));
        assert!(is_obstructed(
            &world,
            &BoundingVolume::Points(vec![Point3::new(100.5, 0.5, 0.5), Point3::new(0.5, 0.5, 0.5)])
        ));
    }

    #[test]
    fn box_touching_a_face_is_clear() {
        let world = world_with(&[Point3::new(1, 0, 0)]);
        let touching = Aabb::new(Point3::new(0.0, 0.0, 0.0), Point3::new(1.0, 1.0, 1.0));
        assert!(!is_obstructed(&world, &BoundingVolume::Box(touching)));

        let overlapping = Aabb::new(Point3::new(0.1, 0.0, 0.0), Point3::new(1.1, 1.0, 1.0));
        assert!(is_obstructed(&world, &BoundingVolume::Box(overlapping)));
    }

    #[test]
    fn overlapping_cells_cover_the_box() {
        let aabb = Aabb::new(Point3::new(-0.5, 0.0, 0.2), Point3::new(0.5, 2.0, 0.8));
        let cells: Vec<_> = aabb.overlapping_cells().collect();
        assert_eq!(cells.len(), 4);
        assert!(cells.contains(&Point3::new(-1, 1, 0)));
        assert!(cells.contains(&Point3::new(0, 0, 0)));
    }

    #[test]
    fn strict_box_intersection() {
        let a = Aabb::voxel(Point3::new(0, 0, 0));
        assert!(!a.intersects(&Aabb::voxel(Point3::new(1, 0, 0))));
        assert!(a.intersects(&Aabb::from_center_and_size(
            Point3::new(1.0, 0.5, 0.5),
            Vector3::new(0.5, 0.5, 0.5)
        )));
    }

    #[test]
    fn agent_probes_span_feet_to_head() {
        let body = AgentBody {
            radius: 0.3,
            height: 1.7,
            head_clearance: 0.1,
        };
        let points = body.sample_points(Point3::new(0.0, 2.0, 0.0));
        assert_eq!(points.len(), 12);
        assert_relative_eq!(points[0].y, 0.3, epsilon = 1e-9);
        assert_relative_eq!(points[4].y, 1.1, epsilon = 1e-9);
        assert_relative_eq!(points[8].y, 1.9, epsilon = 1e-9);
        assert_relative_eq!(points[3].x, 0.3, epsilon = 1e-9);
        assert_relative_eq!(points[0].z, -0.3, epsilon = 1e-9);
    }

    #[test]
    fn agent_box_hangs_below_the_eye() {
        let body = AgentBody::from(AgentConfig::default());
        let aabb = body.bounding_box(Point3::new(5.0, 3.7, 5.0));
        assert_relative_eq!(aabb.min.y, 2.0, epsilon = 1e-9);
        assert_relative_eq!(aabb.max.y, 3.7, epsilon = 1e-9);
        assert_relative_eq!(aabb.min.x, 4.7, epsilon = 1e-9);
        assert_relative_eq!(aabb.max.z, 5.3, epsilon = 1e-9);
    }
}
