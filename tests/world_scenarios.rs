use approx::assert_relative_eq;
use cgmath::{Point3, Vector3};
use test_case::test_case;

use voxel_world::engine_state::physics::collision::{Aabb, AgentBody};
use voxel_world::engine_state::rendering::generate_geometry_data_for_cell;
use voxel_world::{
    BlockType, BoundingVolume, EditOutcome, EngineConfig, EngineState, GeometryBuffer,
    PointerAction, TerrainGenerator, TextureAtlas, VoxelError, World,
};

const ORIGIN_CELL: Point3<i32> = Point3 { x: 0, y: 0, z: 0 };

fn floor_world() -> World {
    let mut world = World::new(16);
    for x in 0..16 {
        for z in 0..16 {
            world.set_block(Point3::new(x, 0, z), BlockType::STONE);
        }
    }
    world
}

#[test]
fn last_write_wins() {
    let mut world = World::new(8);
    let writes = [
        (Point3::new(0, 0, 0), 1),
        (Point3::new(-9, 3, 17), 4),
        (Point3::new(0, 0, 0), 3),
        (Point3::new(100, -100, 5), 5),
        (Point3::new(-9, 3, 17), 0),
    ];
    for (position, voxel) in writes {
        world.set_voxel(position, voxel).unwrap();
    }
    assert_eq!(world.get_voxel(Point3::new(0, 0, 0)), 3);
    assert_eq!(world.get_voxel(Point3::new(-9, 3, 17)), 0);
    assert_eq!(world.get_voxel(Point3::new(100, -100, 5)), 5);
}

#[test_case(Point3::new(1_000_000, 0, 0) ; "far positive")]
#[test_case(Point3::new(-1, -1, -1) ; "just below origin")]
#[test_case(Point3::new(i32::MIN, i32::MAX, 0) ; "extremes")]
fn untouched_space_reads_as_air(position: Point3<i32>) {
    let world = floor_world();
    let chunks = world.chunk_count();
    assert_eq!(world.get_voxel(position), 0);
    assert_eq!(world.chunk_count(), chunks);
}

#[test]
fn rejected_write_keeps_the_grid() {
    let mut world = floor_world();
    let before = world.get_voxel(Point3::new(3, 0, 3));
    let err = world.set_voxel(Point3::new(3, 0, 3), 42).unwrap_err();
    assert!(matches!(err, VoxelError::InvalidVoxelType(42)));
    assert_eq!(err.to_string(), "invalid voxel type 42");
    assert_eq!(world.get_voxel(Point3::new(3, 0, 3)), before);
}

#[test]
fn single_voxel_closure() {
    let mut world = World::new(8);
    world.set_block(Point3::new(4, 4, 4), BlockType::GRASS);
    let geometry = generate_geometry_data_for_cell(&world, &TextureAtlas::default(), ORIGIN_CELL);

    assert_eq!(geometry.quad_count(), 6);
    assert_eq!(geometry.triangle_count(), 12);
    assert_eq!(geometry.normals.len(), geometry.positions.len());
    assert_eq!(geometry.uvs.len(), geometry.positions.len());
    assert!(geometry
        .indices
        .iter()
        .all(|&i| (i as usize) < geometry.vertex_count()));

    for triangle in geometry.indices.chunks(3) {
        let [a, b, c] = [0, 1, 2].map(|k| {
            let p = geometry.positions[triangle[k] as usize];
            Vector3::new(p[0], p[1], p[2])
        });
        let n = geometry.normals[triangle[0] as usize];
        let winding = (b - a).cross(c - a);
        assert!(winding.x * n[0] + winding.y * n[1] + winding.z * n[2] > 0.0);
    }
}

#[test]
fn adjacent_voxels_share_no_face() {
    let atlas = TextureAtlas::default();
    for (a, b) in [
        (BlockType::DIRT, BlockType::DIRT),
        (BlockType::STONE, BlockType::WOOD),
        (BlockType::OBSIDIAN, BlockType::GRASS),
    ] {
        let mut world = World::new(8);
        world.set_block(Point3::new(3, 3, 3), a);
        world.set_block(Point3::new(3, 3, 4), b);
        let geometry = generate_geometry_data_for_cell(&world, &atlas, ORIGIN_CELL);
        assert_eq!(geometry.quad_count(), 10);
    }
}

#[test]
fn all_air_chunk_yields_empty_arrays() {
    let mut world = World::new(8);
    world.set_voxel(Point3::new(2, 2, 2), 0).unwrap();
    assert_eq!(world.chunk_count(), 1);
    let geometry = generate_geometry_data_for_cell(&world, &TextureAtlas::default(), ORIGIN_CELL);
    assert!(geometry.positions.is_empty());
    assert!(geometry.normals.is_empty());
    assert!(geometry.uvs.is_empty());
    assert!(geometry.indices.is_empty());
}

#[test]
fn downward_ray_scenario() {
    let mut world = floor_world();
    world.set_block(Point3::new(5, 1, 5), BlockType::DIRT);
    let engine_free_hit = voxel_world::engine_state::physics::intersect_ray(
        &world,
        Point3::new(5.5, 10.0, 5.5),
        Point3::new(5.5, -1.0, 5.5),
    )
    .unwrap();
    assert_eq!(engine_free_hit.position, Point3::new(5, 1, 5));
    assert_eq!(engine_free_hit.normal, Vector3::new(0, 1, 0));
    assert_relative_eq!(engine_free_hit.point.y, 2.0);
}

#[test]
fn ray_in_empty_space_misses() {
    let world = floor_world();
    let hit = voxel_world::engine_state::physics::intersect_ray(
        &world,
        Point3::new(-20.5, 30.0, -20.5),
        Point3::new(40.5, 5.0, 40.5),
    );
    assert!(hit.is_none());
}

#[test]
fn boundary_face_depends_on_the_neighbor_chunk() {
    let atlas = TextureAtlas::default();
    let mut world = World::new(8);
    world.set_block(Point3::new(7, 2, 2), BlockType::STONE);
    let has_plus_x = |g: &GeometryBuffer| g.normals.iter().any(|n| *n == [1.0, 0.0, 0.0]);

    assert!(has_plus_x(&generate_geometry_data_for_cell(&world, &atlas, ORIGIN_CELL)));
    world.set_block(Point3::new(8, 2, 2), BlockType::STONE);
    assert!(!has_plus_x(&generate_geometry_data_for_cell(&world, &atlas, ORIGIN_CELL)));
}

#[test]
fn regenerating_without_writes_is_identical() {
    let mut world = World::new(16);
    TerrainGenerator::Waves.generate(&mut world, ORIGIN_CELL);
    let atlas = TextureAtlas::default();
    let first = generate_geometry_data_for_cell(&world, &atlas, ORIGIN_CELL);
    let second = generate_geometry_data_for_cell(&world, &atlas, ORIGIN_CELL);
    assert!(!first.is_empty());
    assert_eq!(first, second);
    assert_eq!(first.position_bytes(), second.position_bytes());
}

#[test]
fn collision_probes_against_the_floor() {
    let world = floor_world();
    let body = AgentBody::from(EngineConfig::default().agent);
    let standing = body.sample_points(Point3::new(4.5, 2.75, 4.5));
    let sunk = body.sample_points(Point3::new(4.5, 2.5, 4.5));
    let outside = BoundingVolume::Points(vec![Point3::new(-50.0, 0.5, -50.0)]);

    assert!(!voxel_world::engine_state::physics::is_obstructed(
        &world,
        &BoundingVolume::Points(standing)
    ));
    assert!(voxel_world::engine_state::physics::is_obstructed(
        &world,
        &BoundingVolume::Points(sunk)
    ));
    assert!(!voxel_world::engine_state::physics::is_obstructed(&world, &outside));
    assert!(voxel_world::engine_state::physics::is_obstructed(
        &world,
        &BoundingVolume::Box(Aabb::new(
            Point3::new(2.5, 0.5, 2.5),
            Point3::new(3.5, 1.5, 3.5)
        ))
    ));
}

#[test]
fn agent_box_straddling_a_lone_voxel() {
    let mut world = World::new(16);
    world.set_block(Point3::new(2, 2, 2), BlockType::DIRT);
    let body = AgentBody::from(EngineConfig::default().agent);

    // Eye placed so the box spans x 1.7..2.3 and y 1.9..3.6.
    let straddling = body.bounding_box(Point3::new(2.0, 3.6, 2.5));
    assert!(voxel_world::engine_state::physics::is_obstructed(
        &world,
        &BoundingVolume::Box(straddling)
    ));

    for eye in [
        Point3::new(4.0, 3.6, 2.5),
        Point3::new(2.0, 3.6, 5.5),
        Point3::new(2.0, 7.0, 2.5),
    ] {
        let moved = body.bounding_box(eye);
        assert!(!voxel_world::engine_state::physics::is_obstructed(
            &world,
            &BoundingVolume::Box(moved)
        ));
    }
}

#[test]
fn engine_round_trip_through_pointer_and_rebuild() {
    let config = EngineConfig::from_json_str(
        r#"{ "cell_size": 8, "terrain": { "method": "flat", "height": 3 } }"#,
    )
    .unwrap();
    let mut engine = EngineState::new(config).unwrap();
    engine.generate_terrain([ORIGIN_CELL, Point3::new(1, 0, 0)]);
    engine.rebuild_dirty();
    assert_eq!(engine.meshes().len(), 2);

    // Mine the surface voxel on the chunk border; both chunks are stale.
    let eye = Point3::new(7.5, 6.0, 3.5);
    let outcome = engine
        .apply_pointer_action(PointerAction::Mine, eye, Vector3::new(0.0, -1.0, 0.0))
        .unwrap();
    match outcome {
        EditOutcome::Edited {
            position,
            dirty_cells,
        } => {
            assert_eq!(position, Point3::new(7, 2, 3));
            assert!(dirty_cells.contains(&ORIGIN_CELL));
            assert!(dirty_cells.contains(&Point3::new(1, 0, 0)));
        }
        other => panic!("unexpected outcome {:?}", other),
    }
    let retired = engine.rebuild_dirty();
    assert_eq!(retired.len(), 2);

    // The hole now exposes the neighbor's -x face.
    let neighbor = engine.meshes().get(Point3::new(1, 0, 0)).unwrap();
    assert!(neighbor.normals.iter().any(|n| *n == [-1.0, 0.0, 0.0]));
}

#[test]
fn agent_lands_on_generated_terrain() {
    let mut engine = EngineState::new(EngineConfig {
        cell_size: 8,
        terrain: TerrainGenerator::Flat { height: 1 },
        ..EngineConfig::default()
    })
    .unwrap();
    engine.generate_terrain([ORIGIN_CELL]);

    let mut position = Point3::new(4.0, 6.0, 4.0);
    let mut velocity = Vector3::new(0.0, 0.0, 0.0);
    let mut landed = false;
    for _ in 0..200 {
        velocity.y -= 30.0 / 60.0;
        let outcome = engine.move_agent(position, velocity, 1.0 / 60.0);
        position = outcome.position;
        velocity = outcome.velocity;
        if outcome.grounded {
            landed = true;
            break;
        }
    }
    assert!(landed);
    // Feet rest above the single stone layer.
    assert!(position.y - engine.body().height >= 1.0);
    assert!(position.y - engine.body().height < 1.5);
}
