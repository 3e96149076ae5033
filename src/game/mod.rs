//! # Game Module
//!
//! Core game state, the room layout, and the entities living in it.
//!
//! This module contains the fundamental building blocks of the dungeon crawler:
//! - Tile maps and the per-tick occupancy grid
//! - Characters and their tile-by-tile movement state machine
//! - Projectiles and their collision handling
//! - Rooms, encounters and the game-level phase machine

pub mod character;
pub mod combat;
pub mod events;
pub mod occupancy;
pub mod room;
pub mod state;
pub mod tilemap;
pub mod view;

pub use character::*;
pub use combat::*;
pub use events::*;
pub use occupancy::*;
pub use room::*;
pub use state::*;
pub use tilemap::*;
pub use view::*;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Index of a tile in the room grid.
///
/// # Examples
///
/// ```
/// use randomdungeon::TileIdx;
///
/// let idx = TileIdx::new(10, 5);
/// assert_eq!(idx.x, 10);
/// assert_eq!(idx.y, 5);
///
/// let neighbors = idx.cardinal_neighbors();
/// assert_eq!(neighbors.len(), 4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct TileIdx {
    pub x: i32,
    pub y: i32,
}

impl TileIdx {
    /// Creates a new tile index.
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Calculates the Manhattan distance to another tile.
    ///
    /// # Examples
    ///
    /// ```
    /// use randomdungeon::TileIdx;
    ///
    /// assert_eq!(TileIdx::new(0, 0).manhattan_distance(TileIdx::new(3, 4)), 7);
    /// ```
    pub fn manhattan_distance(self, other: TileIdx) -> u32 {
        ((self.x - other.x).abs() + (self.y - other.y).abs()) as u32
    }

    /// Returns the 4 cardinal neighbors (no diagonals).
    pub fn cardinal_neighbors(self) -> [TileIdx; 4] {
        Direction::ALL.map(|direction| self + direction.to_delta())
    }

    /// Whether `other` is exactly one horizontal or vertical step away.
    pub fn is_cardinal_neighbor(self, other: TileIdx) -> bool {
        self.manhattan_distance(other) == 1
    }

    /// Whether `other` is this tile or one of its cardinal neighbors.
    pub fn is_same_or_cardinal_neighbor(self, other: TileIdx) -> bool {
        self.manhattan_distance(other) <= 1
    }
}

impl std::ops::Add for TileIdx {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y)
    }
}

impl std::ops::Sub for TileIdx {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y)
    }
}

impl std::ops::Mul<i32> for TileIdx {
    type Output = Self;

    fn mul(self, factor: i32) -> Self {
        Self::new(self.x * factor, self.y * factor)
    }
}

impl std::fmt::Display for TileIdx {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Cardinal directions. Movement on the grid is strictly axis-aligned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    /// All four directions.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::West,
        Direction::East,
        Direction::South,
    ];

    /// Converts a direction to a tile delta.
    ///
    /// # Examples
    ///
    /// ```
    /// use randomdungeon::{Direction, TileIdx};
    ///
    /// assert_eq!(Direction::North.to_delta(), TileIdx::new(0, -1));
    /// ```
    pub fn to_delta(self) -> TileIdx {
        match self {
            Direction::North => TileIdx::new(0, -1),
            Direction::South => TileIdx::new(0, 1),
            Direction::East => TileIdx::new(1, 0),
            Direction::West => TileIdx::new(-1, 0),
        }
    }

    /// Converts a unit tile delta to a direction.
    ///
    /// Returns None for zero, diagonal or longer deltas.
    pub fn from_delta(delta: TileIdx) -> Option<Direction> {
        match (delta.x, delta.y) {
            (0, -1) => Some(Direction::North),
            (0, 1) => Some(Direction::South),
            (1, 0) => Some(Direction::East),
            (-1, 0) => Some(Direction::West),
            _ => None,
        }
    }
}

/// Unique identifier for characters.
pub type EntityId = Uuid;

/// Creates a new unique entity ID.
pub fn new_entity_id() -> EntityId {
    Uuid::new_v4()
}
