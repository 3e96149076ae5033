//! # Grid Utilities
//!
//! Conversions between pixel coordinates and tile indices for a fixed-size
//! tile grid covering the render surface.

use crate::config::GameConfig;
use crate::game::TileIdx;
use macroquad::math::{Rect, Vec2};
use serde::{Deserialize, Serialize};

/// Geometry of the tile grid laid over the render surface.
///
/// # Examples
///
/// ```
/// use randomdungeon::{TileGrid, TileIdx};
/// use macroquad::math::Vec2;
///
/// let grid = TileGrid::new(800, 600, 50.0);
/// assert_eq!((grid.width, grid.height), (16, 12));
/// assert_eq!(grid.tile_idx(Vec2::new(75.0, 120.0)), TileIdx::new(1, 2));
/// assert_eq!(grid.tile_center(TileIdx::new(1, 2)), Vec2::new(75.0, 125.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TileGrid {
    /// Edge length of a tile in pixels
    pub tile_size: f32,
    /// Number of columns
    pub width: i32,
    /// Number of rows
    pub height: i32,
}

impl TileGrid {
    /// Builds the grid covering a surface of the given pixel size.
    pub fn new(surface_width: u32, surface_height: u32, tile_size: f32) -> Self {
        Self {
            tile_size,
            width: (surface_width as f32 / tile_size) as i32,
            height: (surface_height as f32 / tile_size) as i32,
        }
    }

    /// Builds the grid described by a configuration.
    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(config.surface_width, config.surface_height, config.tile_size())
    }

    /// Half of the tile edge length.
    pub fn tile_radius(&self) -> f32 {
        self.tile_size / 2.0
    }

    /// Tile containing a pixel coordinate. May be out of bounds.
    pub fn tile_idx(&self, position: Vec2) -> TileIdx {
        TileIdx::new(
            (position.x / self.tile_size).floor() as i32,
            (position.y / self.tile_size).floor() as i32,
        )
    }

    /// Pixel coordinate of a tile's top-left corner.
    pub fn tile_top_left(&self, idx: TileIdx) -> Vec2 {
        Vec2::new(idx.x as f32 * self.tile_size, idx.y as f32 * self.tile_size)
    }

    /// Pixel coordinate of a tile's center.
    pub fn tile_center(&self, idx: TileIdx) -> Vec2 {
        self.tile_top_left(idx) + Vec2::splat(self.tile_radius())
    }

    /// Pixel rectangle covered by a tile.
    pub fn tile_rect(&self, idx: TileIdx) -> Rect {
        let top_left = self.tile_top_left(idx);
        Rect::new(top_left.x, top_left.y, self.tile_size, self.tile_size)
    }

    /// Whether a tile index lies inside the grid.
    pub fn is_valid_tile(&self, idx: TileIdx) -> bool {
        idx.x >= 0 && idx.y >= 0 && idx.x < self.width && idx.y < self.height
    }

    /// Whether two pixel positions fall in the same tile.
    pub fn are_same_tile(&self, a: Vec2, b: Vec2) -> bool {
        self.tile_idx(a) == self.tile_idx(b)
    }

    /// Pixel rectangle of the whole playable area.
    pub fn bounds(&self) -> Rect {
        Rect::new(
            0.0,
            0.0,
            self.width as f32 * self.tile_size,
            self.height as f32 * self.tile_size,
        )
    }

    /// Every tile index, row by row.
    pub fn indices(&self) -> impl Iterator<Item = TileIdx> + '_ {
        (0..self.height).flat_map(move |y| (0..self.width).map(move |x| TileIdx::new(x, y)))
    }

    /// Tile in the middle of the grid.
    pub fn center_tile(&self) -> TileIdx {
        TileIdx::new(self.width / 2, self.height / 2)
    }
}

/// Collision box of a sprite centered at `center`, scaled down by `scale`.
pub fn collision_box(center: Vec2, sprite_size: f32, scale: f32) -> Rect {
    let size = sprite_size * scale;
    Rect::new(center.x - size / 2.0, center.y - size / 2.0, size, size)
}
