//! # Terrain Module
//!
//! Startup world generation. A generator fills one chunk at a time through the
//! world's ordinary write path, so generated chunks are indistinguishable from
//! hand-edited ones.
//!
//! Supported methods:
//! - `waves`: a stone floor at `y = 0` under rolling dirt hills capped with grass
//! - `flat`: a stone floor under a flat dirt slab capped with grass
//! - `perlin`: 3-D Perlin noise for caves and overhangs
//! - `empty`: nothing

use cgmath::Point3;
use log::{info, warn};
use noise::{NoiseFn, Perlin};
use serde::{Deserialize, Serialize};

use crate::engine_state::voxels::{block::block_type::BlockType, world::World};

/// Threshold above which Perlin noise is considered solid for terrain generation.
pub const PERLIN_POSITIVE_THRESHOLD: f64 = 0.2;
/// Threshold below which Perlin noise is considered solid for terrain generation.
pub const PERLIN_NEGATIVE_THRESHOLD: f64 = -0.2;
/// Scaling factor applied to world coordinates when sampling Perlin noise.
pub const PERLIN_SCALE_FACTOR: f64 = 0.02;

/// The method used to populate new chunks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "method", rename_all = "snake_case")]
pub enum TerrainGenerator {
    /// Rolling hills: `h = (sin(x/4) + cos(z/4)) * 2 + 5`.
    #[default]
    Waves,
    /// Flat ground `height` voxels thick.
    Flat {
        /// Number of solid layers above and including the floor.
        height: i32,
    },
    /// Perlin noise caves.
    Perlin {
        /// Noise and material seed.
        seed: u32,
    },
    /// Leaves the world untouched.
    Empty,
}

impl TerrainGenerator {
    /// Fills chunk `cell` of `world`, returning how many solid voxels were written.
    pub fn generate(&self, world: &mut World, cell: Point3<i32>) -> usize {
        let size = world.cell_size();
        let origin = match world.cell_origin(cell) {
            Some(origin) => origin,
            None => {
                warn!("Chunk {:?} lies outside the grid, skipping", cell);
                return 0;
            }
        };
        let perlin = match self {
            TerrainGenerator::Perlin { seed } => Some(Perlin::new(*seed)),
            _ => None,
        };
        let mut rng = match self {
            TerrainGenerator::Perlin { seed } => {
                fastrand::Rng::with_seed(u64::from(*seed) ^ cell_hash(cell))
            }
            _ => fastrand::Rng::with_seed(0),
        };

        let mut written = 0;
        for j in 0..size {
            for k in 0..size {
                for i in 0..size {
                    let position = match (
                        origin.x.checked_add(i),
                        origin.y.checked_add(j),
                        origin.z.checked_add(k),
                    ) {
                        (Some(x), Some(y), Some(z)) => Point3::new(x, y, z),
                        _ => continue,
                    };
                    let block_type = match self {
                        TerrainGenerator::Waves => Self::waves_at(position),
                        TerrainGenerator::Flat { height } => Self::flat_at(position, *height),
                        TerrainGenerator::Perlin { .. } => match &perlin {
                            Some(perlin) => Self::perlin_at(perlin, &mut rng, position),
                            None => BlockType::AIR,
                        },
                        TerrainGenerator::Empty => BlockType::AIR,
                    };
                    if block_type.is_solid() {
                        world.set_block(position, block_type);
                        written += 1;
                    }
                }
            }
        }

        if written > 0 {
            info!(
                "Generated {} solid voxels in chunk {:?} using {:?}",
                written, cell, self
            );
        }
        written
    }

    fn waves_at(position: Point3<i32>) -> BlockType {
        if position.y == 0 {
            return BlockType::STONE;
        }
        if position.y < 0 {
            return BlockType::AIR;
        }
        let height = ((position.x as f64 / 4.0).sin() + (position.z as f64 / 4.0).cos()) * 2.0 + 5.0;
        let y = position.y as f64;
        if y < height - 1.0 {
            BlockType::DIRT
        } else if y < height {
            BlockType::GRASS
        } else {
            BlockType::AIR
        }
    }

    fn flat_at(position: Point3<i32>, height: i32) -> BlockType {
        match position.y {
            y if y < 0 || y >= height => BlockType::AIR,
            0 => BlockType::STONE,
            y if y == height - 1 => BlockType::GRASS,
            _ => BlockType::DIRT,
        }
    }

    fn perlin_at(perlin: &Perlin, rng: &mut fastrand::Rng, position: Point3<i32>) -> BlockType {
        let sample = perlin.get([
            position.x as f64 * PERLIN_SCALE_FACTOR,
            position.y as f64 * PERLIN_SCALE_FACTOR,
            position.z as f64 * PERLIN_SCALE_FACTOR,
        ]);
        if (PERLIN_NEGATIVE_THRESHOLD..=PERLIN_POSITIVE_THRESHOLD).contains(&sample) {
            BlockType::AIR
        } else {
            BlockType::random_solid(rng)
        }
    }
}

fn cell_hash(cell: Point3<i32>) -> u64 {
    (cell.x as i64 as u64).wrapping_mul(73_856_093)
        ^ (cell.y as i64 as u64).wrapping_mul(19_349_663)
        ^ (cell.z as i64 as u64).wrapping_mul(83_492_791)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn waves_lay_bedrock_dirt_and_grass() {
        let mut world = World::new(32);
        let written = TerrainGenerator::Waves.generate(&mut world, Point3::new(0, 0, 0));
        assert!(written > 32 * 32);

        // At x = 0, z = 0 the hill is (0 + 1) * 2 + 5 = 7 high.
        assert_eq!(world.get_voxel(Point3::new(0, 0, 0)), BlockType::STONE as u8);
        assert_eq!(world.get_voxel(Point3::new(0, 5, 0)), BlockType::DIRT as u8);
        assert_eq!(world.get_voxel(Point3::new(0, 6, 0)), BlockType::GRASS as u8);
        assert_eq!(world.get_voxel(Point3::new(0, 7, 0)), 0);
    }

    #[test]
    fn waves_leave_upper_chunks_empty() {
        let mut world = World::new(32);
        assert_eq!(TerrainGenerator::Waves.generate(&mut world, Point3::new(0, 1, 0)), 0);
        assert_eq!(world.chunk_count(), 0);
    }

    #[test]
    fn flat_fills_whole_layers() {
        let mut world = World::new(8);
        let written = TerrainGenerator::Flat { height: 3 }.generate(&mut world, Point3::new(0, 0, 0));
        assert_eq!(written, 3 * 8 * 8);
        assert_eq!(world.get_voxel(Point3::new(4, 0, 4)), BlockType::STONE as u8);
        assert_eq!(world.get_voxel(Point3::new(4, 1, 4)), BlockType::DIRT as u8);
        assert_eq!(world.get_voxel(Point3::new(4, 2, 4)), BlockType::GRASS as u8);
        assert_eq!(world.get_voxel(Point3::new(4, 3, 4)), 0);
    }

    #[test]
    fn perlin_is_deterministic_per_seed() {
        let generator = TerrainGenerator::Perlin { seed: 11 };
        let mut a = World::new(16);
        let mut b = World::new(16);
        generator.generate(&mut a, Point3::new(1, 0, -1));
        generator.generate(&mut b, Point3::new(1, 0, -1));
        for y in 0..16 {
            for x in 16..32 {
                let p = Point3::new(x, y, -7);
                assert_eq!(a.get_voxel(p), b.get_voxel(p));
            }
        }
    }

    #[test]
    fn waves_is_the_default() {
        assert_eq!(TerrainGenerator::default(), TerrainGenerator::Waves);
    }

    #[test]
    fn chunks_past_the_grid_edge_are_clipped() {
        let flat = TerrainGenerator::Flat { height: 1 };
        let mut world = World::new(8);
        assert_eq!(flat.generate(&mut world, Point3::new(i32::MAX, 0, 0)), 0);
        assert_eq!(world.chunk_count(), 0);

        // With 3-voxel chunks the last chunk on +x holds only two columns.
        let mut world = World::new(3);
        let cell = Point3::new(i32::MAX / 3, 0, 0);
        assert_eq!(flat.generate(&mut world, cell), 2 * 3);
        assert_eq!(world.get_voxel(Point3::new(i32::MAX, 0, 2)), BlockType::STONE as u8);
    }

    #[test]
    fn empty_generator_writes_nothing() {
        let mut world = World::new(8);
        assert_eq!(TerrainGenerator::Empty.generate(&mut world, Point3::new(0, 0, 0)), 0);
        assert_eq!(world.chunk_count(), 0);
    }
}
