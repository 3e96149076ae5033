//! # Occupancy Grid
//!
//! Coarse per-tick snapshot of what stands on every tile, used for movement
//! legality checks and projectile collisions against obstacles.

use crate::game::{TileIdx, TileKind, TileMap};
use serde::{Deserialize, Serialize};

/// Coarse kind of object occupying a tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ObjectKind {
    Floor,
    Obstacle,
    Hero,
    Monster,
    OpenDoor,
}

impl ObjectKind {
    /// Maps a tile kind to the object kind it contributes before entities are placed.
    pub fn from_tile(kind: TileKind) -> Self {
        match kind {
            TileKind::Floor => ObjectKind::Floor,
            TileKind::Wall | TileKind::ClosedDoor => ObjectKind::Obstacle,
            TileKind::OpenDoor => ObjectKind::OpenDoor,
        }
    }

    /// Single-letter label used by the debug overlay.
    pub fn label(self) -> &'static str {
        match self {
            ObjectKind::Floor => " ",
            ObjectKind::Obstacle => "X",
            ObjectKind::Hero => "H",
            ObjectKind::Monster => "M",
            ObjectKind::OpenDoor => "D",
        }
    }
}

/// Grid of object kinds, fully recomputed every logic tick.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OccupancyGrid {
    width: i32,
    height: i32,
    cells: Vec<ObjectKind>,
}

impl OccupancyGrid {
    /// Creates an all-floor grid.
    pub fn new(width: i32, height: i32) -> Self {
        let width = width.max(0);
        let height = height.max(0);
        Self {
            width,
            height,
            cells: vec![ObjectKind::Floor; (width * height) as usize],
        }
    }

    /// Builds the grid for one tick.
    ///
    /// Tile kinds are mapped first, then the hero's tile is overwritten, then each
    /// monster's tile in list order. A later writer wins when two characters share
    /// a cell.
    pub fn build(
        map: &TileMap,
        hero: Option<TileIdx>,
        monsters: impl IntoIterator<Item = TileIdx>,
    ) -> Self {
        let mut grid = Self::new(map.width(), map.height());
        grid.rebuild(map, hero, monsters);
        grid
    }

    /// Recomputes the grid in place from scratch.
    pub fn rebuild(
        &mut self,
        map: &TileMap,
        hero: Option<TileIdx>,
        monsters: impl IntoIterator<Item = TileIdx>,
    ) {
        if self.width != map.width() || self.height != map.height() {
            *self = Self::new(map.width(), map.height());
        }

        for (idx, kind) in map.iter() {
            self.set(idx, ObjectKind::from_tile(kind));
        }

        if let Some(hero) = hero {
            self.set(hero, ObjectKind::Hero);
        }

        for monster in monsters {
            self.set(monster, ObjectKind::Monster);
        }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    /// Object kind at `idx`. Tiles outside the grid are obstacles.
    pub fn object_at(&self, idx: TileIdx) -> ObjectKind {
        match self.offset(idx) {
            Some(offset) => self.cells[offset],
            None => ObjectKind::Obstacle,
        }
    }

    /// Every tile index with its object kind, row by row.
    pub fn iter(&self) -> impl Iterator<Item = (TileIdx, ObjectKind)> + '_ {
        let width = self.width;
        self.cells.iter().enumerate().map(move |(i, kind)| {
            let i = i as i32;
            (TileIdx::new(i % width, i / width), *kind)
        })
    }

    fn set(&mut self, idx: TileIdx, kind: ObjectKind) {
        if let Some(offset) = self.offset(idx) {
            self.cells[offset] = kind;
        }
    }

    fn offset(&self, idx: TileIdx) -> Option<usize> {
        if idx.x < 0 || idx.y < 0 || idx.x >= self.width || idx.y >= self.height {
            return None;
        }
        Some((idx.y * self.width + idx.x) as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::TileSprite;
    use crate::utils::TileGrid;

    const NO_MONSTERS: [TileIdx; 0] = [];

    fn map() -> TileMap {
        let mut map = TileMap::filled(TileGrid::new(250, 200, 50.0), TileKind::Floor);
        map.set(TileIdx::new(0, 0), TileKind::Wall, TileSprite::WallTopLeft);
        map.set(TileIdx::new(1, 3), TileKind::ClosedDoor, TileSprite::Door);
        map.set(TileIdx::new(2, 3), TileKind::OpenDoor, TileSprite::Door);
        map
    }

    #[test]
    fn test_tile_kinds_map_to_objects() {
        let grid = OccupancyGrid::build(&map(), None, NO_MONSTERS);
        assert_eq!(grid.object_at(TileIdx::new(0, 0)), ObjectKind::Obstacle);
        assert_eq!(grid.object_at(TileIdx::new(1, 3)), ObjectKind::Obstacle);
        assert_eq!(grid.object_at(TileIdx::new(2, 3)), ObjectKind::OpenDoor);
        assert_eq!(grid.object_at(TileIdx::new(2, 2)), ObjectKind::Floor);
    }

    #[test]
    fn test_out_of_bounds_is_obstacle() {
        let grid = OccupancyGrid::build(&map(), None, NO_MONSTERS);
        assert_eq!(grid.object_at(TileIdx::new(-1, 2)), ObjectKind::Obstacle);
        assert_eq!(grid.object_at(TileIdx::new(5, 0)), ObjectKind::Obstacle);
    }

    #[test]
    fn test_characters_overwrite_tiles() {
        let grid = OccupancyGrid::build(
            &map(),
            Some(TileIdx::new(2, 2)),
            [TileIdx::new(3, 1), TileIdx::new(1, 1)],
        );
        assert_eq!(grid.object_at(TileIdx::new(2, 2)), ObjectKind::Hero);
        assert_eq!(grid.object_at(TileIdx::new(3, 1)), ObjectKind::Monster);
        assert_eq!(grid.object_at(TileIdx::new(1, 1)), ObjectKind::Monster);
    }

    #[test]
    fn test_monster_wins_shared_cell() {
        let grid = OccupancyGrid::build(&map(), Some(TileIdx::new(2, 2)), [TileIdx::new(2, 2)]);
        assert_eq!(grid.object_at(TileIdx::new(2, 2)), ObjectKind::Monster);
    }

    #[test]
    fn test_rebuild_drops_stale_entries() {
        let map = map();
        let mut grid = OccupancyGrid::build(&map, Some(TileIdx::new(2, 2)), [TileIdx::new(3, 1)]);
        grid.rebuild(&map, Some(TileIdx::new(2, 1)), NO_MONSTERS);
        assert_eq!(grid.object_at(TileIdx::new(2, 2)), ObjectKind::Floor);
        assert_eq!(grid.object_at(TileIdx::new(3, 1)), ObjectKind::Floor);
        assert_eq!(grid, OccupancyGrid::build(&map, Some(TileIdx::new(2, 1)), NO_MONSTERS));
    }

    #[test]
    fn test_iter_matches_object_at() {
        let grid = OccupancyGrid::build(&map(), Some(TileIdx::new(4, 2)), NO_MONSTERS);
        assert_eq!(grid.iter().count(), 20);
        for (idx, kind) in grid.iter() {
            assert_eq!(grid.object_at(idx), kind);
        }
    }
}
