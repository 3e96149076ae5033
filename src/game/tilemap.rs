//! # Tile Maps
//!
//! The logical layout of a room and its purely visual sprite variants.

use crate::game::TileIdx;
use crate::utils::TileGrid;
use serde::{Deserialize, Serialize};

/// Logical kind of a tile.
///
/// Only door cells change after generation, when the room is cleared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TileKind {
    Floor,
    Wall,
    ClosedDoor,
    OpenDoor,
}

impl TileKind {
    /// Whether the tile is a door, open or closed.
    pub fn is_door(self) -> bool {
        matches!(self, TileKind::ClosedDoor | TileKind::OpenDoor)
    }
}

/// Visual variant used to pick a sprite for a tile. Never consulted by game logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TileSprite {
    Floor,
    CorridorFloor,
    WallTopLeft,
    WallTopRight,
    WallBottomLeft,
    WallBottomRight,
    WallTop,
    WallBottom,
    WallLeft,
    WallRight,
    WallTopDoorway,
    WallLeftDoorway,
    WallRightDoorway,
    Door,
}

/// Whether the room's exit doors are open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DoorState {
    Closed,
    Open,
}

/// Rectangular grid of tile kinds for one room, plus its rendering variants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TileMap {
    grid: TileGrid,
    tiles: Vec<Vec<TileKind>>,
    sprites: Vec<Vec<TileSprite>>,
    doors: Vec<TileIdx>,
}

impl TileMap {
    /// Creates a map of the grid's size filled with `fill`.
    pub fn filled(grid: TileGrid, fill: TileKind) -> Self {
        let width = grid.width.max(0) as usize;
        let height = grid.height.max(0) as usize;
        let sprite = match fill {
            TileKind::Floor => TileSprite::Floor,
            TileKind::Wall => TileSprite::WallTop,
            TileKind::ClosedDoor | TileKind::OpenDoor => TileSprite::Door,
        };
        Self {
            grid,
            tiles: vec![vec![fill; width]; height],
            sprites: vec![vec![sprite; width]; height],
            doors: Vec::new(),
        }
    }

    /// Grid geometry of this map.
    pub fn grid(&self) -> &TileGrid {
        &self.grid
    }

    pub fn width(&self) -> i32 {
        self.grid.width
    }

    pub fn height(&self) -> i32 {
        self.grid.height
    }

    /// Kind of the tile at `idx`, or None outside the map.
    pub fn get(&self, idx: TileIdx) -> Option<TileKind> {
        if !self.grid.is_valid_tile(idx) {
            return None;
        }
        Some(self.tiles[idx.y as usize][idx.x as usize])
    }

    /// Sprite variant of the tile at `idx`, or None outside the map.
    pub fn sprite(&self, idx: TileIdx) -> Option<TileSprite> {
        if !self.grid.is_valid_tile(idx) {
            return None;
        }
        Some(self.sprites[idx.y as usize][idx.x as usize])
    }

    /// Sets a tile and its sprite. Out-of-bounds writes are ignored.
    ///
    /// Door cells are tracked so they can be toggled later.
    pub fn set(&mut self, idx: TileIdx, kind: TileKind, sprite: TileSprite) {
        if !self.grid.is_valid_tile(idx) {
            return;
        }
        self.tiles[idx.y as usize][idx.x as usize] = kind;
        self.sprites[idx.y as usize][idx.x as usize] = sprite;

        if kind.is_door() {
            if !self.doors.contains(&idx) {
                self.doors.push(idx);
            }
        } else {
            self.doors.retain(|door| *door != idx);
        }
    }

    /// Door cells in generation order.
    pub fn doors(&self) -> &[TileIdx] {
        &self.doors
    }

    /// Whether `idx` is one of the door cells.
    pub fn is_door(&self, idx: TileIdx) -> bool {
        self.doors.contains(&idx)
    }

    /// Current state of the doors. A map without doors reports them closed.
    pub fn door_state(&self) -> DoorState {
        let all_open = !self.doors.is_empty()
            && self
                .doors
                .iter()
                .all(|door| self.get(*door) == Some(TileKind::OpenDoor));
        if all_open {
            DoorState::Open
        } else {
            DoorState::Closed
        }
    }

    /// Switches every door cell to the given state.
    pub fn set_door_state(&mut self, state: DoorState) {
        let kind = match state {
            DoorState::Open => TileKind::OpenDoor,
            DoorState::Closed => TileKind::ClosedDoor,
        };
        for door in &self.doors {
            self.tiles[door.y as usize][door.x as usize] = kind;
        }
    }

    /// Rows of tile kinds, top to bottom.
    pub fn rows(&self) -> &[Vec<TileKind>] {
        &self.tiles
    }

    /// Every tile index with its kind, row by row.
    pub fn iter(&self) -> impl Iterator<Item = (TileIdx, TileKind)> + '_ {
        self.tiles.iter().enumerate().flat_map(|(y, row)| {
            row.iter()
                .enumerate()
                .map(move |(x, kind)| (TileIdx::new(x as i32, y as i32), *kind))
        })
    }

    /// Number of tiles of the given kind.
    pub fn count(&self, kind: TileKind) -> usize {
        self.iter().filter(|(_, k)| *k == kind).count()
    }
}
