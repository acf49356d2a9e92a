//! Texture atlas addressing.
//!
//! The atlas image itself belongs to the renderer; the engine only needs its
//! layout to turn an `(column, row)` tile and a corner of a face into texture
//! coordinates. Row 0 is the top row of the image, while `v` grows upward.

use crate::core::AtlasConfig;
use crate::engine_state::voxels::block::AtlasTile;

/// Layout of the shared texture atlas, in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextureAtlas {
    tile_size: f32,
    width: f32,
    height: f32,
}

impl TextureAtlas {
    /// Creates an atlas descriptor from its configured layout.
    pub fn new(config: &AtlasConfig) -> Self {
        TextureAtlas {
            tile_size: config.tile_size as f32,
            width: config.tile_texture_width as f32,
            height: config.tile_texture_height as f32,
        }
    }

    /// Number of whole tiles in each atlas row and column.
    pub fn tiles_per_axis(&self) -> (u32, u32) {
        (
            (self.width / self.tile_size) as u32,
            (self.height / self.tile_size) as u32,
        )
    }

    /// Texture coordinate of `corner` (each component 0 or 1) within `tile`.
    pub fn uv(&self, tile: AtlasTile, corner: [f32; 2]) -> [f32; 2] {
        let (column, row) = (tile.0 as f32, tile.1 as f32);
        [
            (column + corner[0]) * self.tile_size / self.width,
            1.0 - (row + 1.0 - corner[1]) * self.tile_size / self.height,
        ]
    }
}

impl Default for TextureAtlas {
    fn default() -> Self {
        TextureAtlas::new(&AtlasConfig::default())
    }
}
