//! # Room Layout Generation
//!
//! Builds the fixed room layout: a ring of walls around a floor, a pair of
//! closed doors in the middle of the bottom wall, and optionally two corridor
//! openings in the right wall.

use crate::config::GameConfig;
use crate::game::{TileIdx, TileKind, TileMap, TileSprite};
use crate::generation::Generator;
use crate::utils::TileGrid;
use crate::{DungeonError, DungeonResult};

/// Generator for the tile map of a room.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoomLayoutGenerator {
    /// Open two corridor cells in the right wall
    pub corridor_exits: bool,
}

impl RoomLayoutGenerator {
    /// Creates a generator with the standard layout.
    ///
    /// # Examples
    ///
    /// ```
    /// use randomdungeon::{GameConfig, Generator, RoomLayoutGenerator, TileKind};
    ///
    /// let map = RoomLayoutGenerator::new().generate(&GameConfig::default()).unwrap();
    /// assert_eq!(map.doors().len(), 2);
    /// assert_eq!(map.get(map.doors()[0]), Some(TileKind::ClosedDoor));
    /// ```
    pub fn new() -> Self {
        Self {
            corridor_exits: false,
        }
    }

    /// Creates the generator selected by a configuration.
    pub fn from_config(config: &GameConfig) -> Self {
        Self {
            corridor_exits: config.corridor_exits,
        }
    }

    /// The two door cells in the bottom wall.
    pub fn door_tiles(grid: &TileGrid) -> [TileIdx; 2] {
        let y = grid.height - 1;
        [
            TileIdx::new(grid.width / 2 - 1, y),
            TileIdx::new(grid.width / 2, y),
        ]
    }

    /// Tile where the hero appears when entering a room, just inside the top doorway.
    pub fn entry_tile(grid: &TileGrid) -> TileIdx {
        TileIdx::new(grid.width / 2, 1)
    }

    /// Corridor openings in the right wall.
    pub fn corridor_tiles(grid: &TileGrid) -> [TileIdx; 2] {
        let x = grid.width - 1;
        [
            TileIdx::new(x, grid.height / 2 - 1),
            TileIdx::new(x, grid.height / 2),
        ]
    }

    fn tile_at(&self, idx: TileIdx, grid: &TileGrid) -> (TileKind, TileSprite) {
        let last_x = grid.width - 1;
        let last_y = grid.height - 1;

        if Self::door_tiles(grid).contains(&idx) {
            return (TileKind::ClosedDoor, TileSprite::Door);
        }
        if self.corridor_exits && Self::corridor_tiles(grid).contains(&idx) {
            return (TileKind::Floor, TileSprite::CorridorFloor);
        }

        let sprite = match (idx.x, idx.y) {
            (0, 0) => TileSprite::WallTopLeft,
            (x, 0) if x == last_x => TileSprite::WallTopRight,
            (0, y) if y == last_y => TileSprite::WallBottomLeft,
            (x, y) if x == last_x && y == last_y => TileSprite::WallBottomRight,
            (x, 0) if x == grid.width / 2 => TileSprite::WallTopDoorway,
            (_, 0) => TileSprite::WallTop,
            (_, y) if y == last_y => TileSprite::WallBottom,
            (0, y) if y == grid.height / 2 => TileSprite::WallLeftDoorway,
            (0, _) => TileSprite::WallLeft,
            (x, y) if x == last_x && y == grid.height / 2 => TileSprite::WallRightDoorway,
            (x, _) if x == last_x => TileSprite::WallRight,
            _ => return (TileKind::Floor, TileSprite::Floor),
        };
        (TileKind::Wall, sprite)
    }
}

impl Generator<TileMap> for RoomLayoutGenerator {
    fn generate(&self, config: &GameConfig) -> DungeonResult<TileMap> {
        config.validate()?;
        let grid = TileGrid::from_config(config);
        let mut map = TileMap::filled(grid, TileKind::Floor);

        for idx in grid.indices() {
            let (kind, sprite) = self.tile_at(idx, &grid);
            map.set(idx, kind, sprite);
        }

        self.validate(&map, config)?;
        log::debug!(
            "{} built a {}x{} room",
            self.generator_type(),
            map.width(),
            map.height()
        );
        Ok(map)
    }

    fn validate(&self, map: &TileMap, _config: &GameConfig) -> DungeonResult<()> {
        if map.count(TileKind::Floor) == 0 {
            return Err(DungeonError::GenerationFailed(
                "Room has no floor tiles".to_string(),
            ));
        }

        let doors = Self::door_tiles(map.grid());
        if map.doors() != doors.as_slice() {
            return Err(DungeonError::GenerationFailed(format!(
                "Expected doors at {} and {}",
                doors[0], doors[1]
            )));
        }

        let entry = Self::entry_tile(map.grid());
        if map.get(entry) != Some(TileKind::Floor) {
            return Err(DungeonError::GenerationFailed(format!(
                "Entry tile {} is not floor",
                entry
            )));
        }

        Ok(())
    }

    fn generator_type(&self) -> &'static str {
        "RoomLayoutGenerator"
    }
}
