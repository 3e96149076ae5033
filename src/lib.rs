//! # Random Dungeon
//!
//! A small tile-based dungeon crawler: a hero walks a grid of tiles one step at a
//! time, throws fireballs at wandering monsters, and moves on to the next room
//! once every monster in the current one is defeated.
//!
//! ## Architecture Overview
//!
//! The library holds the whole game core and is independent of any window:
//!
//! - **Grid utilities**: mapping between pixel coordinates and tile indices
//! - **Tile maps**: the fixed room layout and its door cells
//! - **Occupancy grid**: per-tick snapshot of what stands on every tile
//! - **Characters**: the tile-by-tile movement state machine shared by hero and monsters
//! - **Combat**: fireballs and lasers, their movement and collisions
//! - **Rooms and game state**: encounters, door gating, level progression and menus
//!
//! Rendering and input polling live in thin macroquad wrappers that consume the
//! draw list and stats produced by [`GameState`].

pub mod config;
pub mod game;
pub mod generation;
pub mod input;
pub mod rendering;
pub mod scenes;
pub mod utils;

pub use config::GameConfig;
pub use game::*;
pub use generation::*;
pub use input::*;
pub use rendering::*;
pub use scenes::*;
pub use utils::*;

/// Core error type for the dungeon crawler.
#[derive(thiserror::Error, Debug)]
pub enum DungeonError {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// Configuration values are unusable
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Game state is invalid
    #[error("Invalid game state: {0}")]
    InvalidState(String),

    /// Generation failed
    #[error("Generation failed: {0}")]
    GenerationFailed(String),
}

/// Result type used throughout the crate.
pub type DungeonResult<T> = Result<T, DungeonError>;

/// Version information for the game.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
