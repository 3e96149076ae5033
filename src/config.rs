//! # Game Configuration
//!
//! Compile-time defaults and the runtime [`GameConfig`] holding every gameplay
//! tunable. Configurations can be loaded from JSON so balancing does not need a
//! rebuild.

use crate::{DungeonError, DungeonResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default window width in pixels
pub const WINDOW_WIDTH: u32 = 800;

/// Default window height in pixels
pub const WINDOW_HEIGHT: u32 = 600;

/// Half of a tile's edge length in pixels
pub const TILE_RADIUS: f32 = 25.0;

/// Frames per second target for the game loop
pub const TARGET_FPS: u64 = 60;

/// Default seed when none is given on the command line
pub const DEFAULT_SEED: u64 = 12345;

/// Toggles for the debug overlays drawn on top of the room.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DebugFlags {
    /// Draw the occupancy grid letters over every tile
    pub render_occupancy: bool,
    /// Draw current/next/target tile cursors for every character
    pub render_character_tiles: bool,
    /// Outline collision boxes of characters and projectiles
    pub render_collision_boxes: bool,
    /// Show FPS and mouse tile in the corner
    pub render_stats: bool,
}

/// Runtime configuration for a game session.
///
/// # Examples
///
/// ```
/// use randomdungeon::GameConfig;
///
/// let config = GameConfig::default();
/// assert_eq!(config.tile_size(), 50.0);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Render surface width in pixels
    pub surface_width: u32,
    /// Render surface height in pixels
    pub surface_height: u32,
    /// Half of a tile's edge length in pixels
    pub tile_radius: f32,
    /// Hero walking speed in pixels per second
    pub hero_speed: f32,
    /// Hero starting life points
    pub hero_life_points: u32,
    /// Distance under which a character counts as arrived at a tile
    pub arrival_epsilon: f32,
    /// Fraction of the sprite box used for collisions
    pub collision_box_scale: f32,
    /// Seconds between monster wander decisions
    pub wander_countdown_secs: f32,
    /// Random jitter applied to the wander countdown, in seconds
    pub wander_jitter_secs: f32,
    /// Largest number of tiles a monster wanders in one decision
    pub wander_max_distance: i32,
    /// Seconds between laser attempts of a walking monster
    pub laser_cooldown_secs: f32,
    /// Random jitter applied to the laser cooldown, in seconds
    pub laser_jitter_secs: f32,
    /// Chance that an expired laser cooldown actually fires
    pub laser_fire_probability: f64,
    /// Laser speed in pixels per second
    pub laser_speed: f32,
    /// Fireball speed in pixels per second
    pub fireball_speed: f32,
    /// Fireball spin in degrees per second
    pub fireball_rotation_speed: f32,
    /// Spin angle at which the fireball rotation resets to zero
    pub fireball_rotation_reset_degrees: f32,
    /// Monsters added per level depth
    pub monsters_per_level: u32,
    /// Upper bound on monsters in a single room
    pub max_monsters_per_room: u32,
    /// Open corridor cells in the right wall (older room layout)
    pub corridor_exits: bool,
    /// Debug overlays
    pub debug: DebugFlags,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            surface_width: WINDOW_WIDTH,
            surface_height: WINDOW_HEIGHT,
            tile_radius: TILE_RADIUS,
            hero_speed: 200.0,
            hero_life_points: 1,
            arrival_epsilon: 5.0,
            collision_box_scale: 0.8,
            wander_countdown_secs: 5.0,
            wander_jitter_secs: 2.0,
            wander_max_distance: 5,
            laser_cooldown_secs: 1.5,
            laser_jitter_secs: 0.5,
            laser_fire_probability: 0.5,
            laser_speed: 300.0,
            fireball_speed: 400.0,
            fireball_rotation_speed: 360.0,
            fireball_rotation_reset_degrees: 90.0,
            monsters_per_level: 1,
            max_monsters_per_room: 8,
            corridor_exits: false,
            debug: DebugFlags::default(),
        }
    }
}

impl GameConfig {
    /// Loads and validates a configuration from a JSON file.
    ///
    /// Missing fields fall back to their defaults.
    pub fn load(path: impl AsRef<Path>) -> DungeonResult<Self> {
        let text = std::fs::read_to_string(path.as_ref())?;
        let config: GameConfig = serde_json::from_str(&text)?;
        config.validate()?;
        log::info!("Loaded configuration from {}", path.as_ref().display());
        Ok(config)
    }

    /// Serializes the configuration as pretty-printed JSON.
    pub fn to_json(&self) -> DungeonResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Edge length of one tile in pixels.
    pub fn tile_size(&self) -> f32 {
        self.tile_radius * 2.0
    }

    /// Checks that the values describe a playable room.
    pub fn validate(&self) -> DungeonResult<()> {
        if self.tile_radius <= 0.0 {
            return Err(DungeonError::InvalidConfig(
                "tile_radius must be positive".to_string(),
            ));
        }

        let columns = self.surface_width as f32 / self.tile_size();
        let rows = self.surface_height as f32 / self.tile_size();
        // Walls on every side, two door cells and at least one floor row.
        if columns < 4.0 || rows < 3.0 {
            return Err(DungeonError::InvalidConfig(format!(
                "surface {}x{} is too small for tiles of {} pixels",
                self.surface_width,
                self.surface_height,
                self.tile_size()
            )));
        }

        if self.hero_speed <= 0.0 || self.fireball_speed <= 0.0 || self.laser_speed <= 0.0 {
            return Err(DungeonError::InvalidConfig(
                "speeds must be positive".to_string(),
            ));
        }

        if self.arrival_epsilon <= 0.0 {
            return Err(DungeonError::InvalidConfig(
                "arrival_epsilon must be positive".to_string(),
            ));
        }

        if !(0.0..=1.0).contains(&self.laser_fire_probability) {
            return Err(DungeonError::InvalidConfig(
                "laser_fire_probability must be within 0.0..=1.0".to_string(),
            ));
        }

        let longest_side = columns.max(rows) as i32;
        if self.wander_max_distance < 1 || self.wander_max_distance > longest_side {
            return Err(DungeonError::InvalidConfig(format!(
                "wander_max_distance must be within 1..={}",
                longest_side
            )));
        }

        if self.fireball_rotation_reset_degrees <= 0.0 {
            return Err(DungeonError::InvalidConfig(
                "fireball_rotation_reset_degrees must be positive".to_string(),
            ));
        }

        Ok(())
    }
}
