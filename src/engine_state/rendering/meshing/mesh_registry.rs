use std::collections::HashMap;

use cgmath::Point3;
use log::trace;

use super::{generate_geometry_data_for_cell, GeometryBuffer};
use crate::engine_state::{rendering::atlas::TextureAtlas, voxels::world::World};

/// Current geometry of every meshed chunk.
///
/// A rebuild replaces a chunk's buffer wholesale. The buffer it replaces is
/// handed back to the caller, who releases whatever it uploaded from it.
#[derive(Debug, Default)]
pub struct MeshRegistry {
    meshes: HashMap<Point3<i32>, GeometryBuffer>,
}

impl MeshRegistry {
    /// Creates a registry with no meshes.
    pub fn new() -> Self {
        Self::default()
    }

    /// Regenerates chunk `cell` and installs the result.
    ///
    /// An empty result removes the chunk's entry. Returns the retired buffer,
    /// if the chunk had one.
    pub fn rebuild(
        &mut self,
        world: &World,
        atlas: &TextureAtlas,
        cell: Point3<i32>,
    ) -> Option<GeometryBuffer> {
        let geometry = generate_geometry_data_for_cell(world, atlas, cell);
        let retired = if geometry.is_empty() {
            self.meshes.remove(&cell)
        } else {
            trace!("Installing mesh for chunk {:?}", cell);
            self.meshes.insert(cell, geometry)
        };
        if retired.is_some() {
            trace!("Retiring previous mesh of chunk {:?}", cell);
        }
        retired
    }

    /// The installed geometry of chunk `cell`.
    pub fn get(&self, cell: Point3<i32>) -> Option<&GeometryBuffer> {
        self.meshes.get(&cell)
    }

    /// Number of chunks with installed geometry.
    pub fn len(&self) -> usize {
        self.meshes.len()
    }

    /// `true` when no chunk has geometry.
    pub fn is_empty(&self) -> bool {
        self.meshes.is_empty()
    }

    /// Every installed mesh, in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&Point3<i32>, &GeometryBuffer)> {
        self.meshes.iter()
    }
}
