//! # Combat
//!
//! Fireballs thrown by the hero and lasers fired by walking monsters.
//!
//! Projectiles move during the animation pass and are resolved against the
//! occupancy grid and character collision boxes during the logic tick. The room
//! enforces the single live fireball; projectiles themselves know nothing about
//! it.

use crate::config::GameConfig;
use crate::game::{Character, Direction, EntityId, ObjectKind, OccupancyGrid};
use crate::utils::{collision_box, TileGrid};
use macroquad::math::{Rect, Vec2};
use serde::{Deserialize, Serialize};

/// Kind of projectile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProjectileKind {
    Fireball,
    Laser,
}

/// A short-lived moving projectile.
#[derive(Debug, Clone, PartialEq)]
pub struct Projectile {
    pub kind: ProjectileKind,
    /// Center in pixels
    pub position: Vec2,
    /// Unit vector
    pub direction: Vec2,
    /// Pixels per second
    pub speed: f32,
    /// Spin in degrees, cosmetic only
    pub angle: f32,
    pub collision_box: Rect,
    /// Who launched it
    pub owner: Option<EntityId>,
    rotation_speed: f32,
    rotation_reset: f32,
    sprite_size: f32,
    collision_scale: f32,
}

/// Why a projectile was removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Impact {
    /// Left the playable rectangle
    OutOfBounds,
    /// Its tile holds an obstacle
    Obstacle,
    /// Overlapped the character at this index of the checked list
    Character(usize),
}

impl Projectile {
    /// Creates a fireball at `from` flying toward `to`.
    ///
    /// Returns None when both points coincide and no direction exists.
    ///
    /// # Examples
    ///
    /// ```
    /// use randomdungeon::{GameConfig, Projectile};
    /// use macroquad::math::Vec2;
    ///
    /// let config = GameConfig::default();
    /// let fireball = Projectile::fireball(Vec2::ZERO, Vec2::new(3.0, 4.0), None, &config).unwrap();
    /// assert!((fireball.direction - Vec2::new(0.6, 0.8)).length() < 1e-6);
    /// ```
    pub fn fireball(
        from: Vec2,
        to: Vec2,
        owner: Option<EntityId>,
        config: &GameConfig,
    ) -> Option<Self> {
        let direction = (to - from).try_normalize()?;
        Some(Self::new(
            ProjectileKind::Fireball,
            from,
            direction,
            config.fireball_speed,
            owner,
            config,
        ))
    }

    /// Creates a laser at `from` travelling in a cardinal direction.
    pub fn laser(
        from: Vec2,
        direction: Direction,
        owner: Option<EntityId>,
        config: &GameConfig,
    ) -> Self {
        let delta = direction.to_delta();
        Self::new(
            ProjectileKind::Laser,
            from,
            Vec2::new(delta.x as f32, delta.y as f32),
            config.laser_speed,
            owner,
            config,
        )
    }

    fn new(
        kind: ProjectileKind,
        position: Vec2,
        direction: Vec2,
        speed: f32,
        owner: Option<EntityId>,
        config: &GameConfig,
    ) -> Self {
        let (rotation_speed, sprite_size) = match kind {
            ProjectileKind::Fireball => (config.fireball_rotation_speed, config.tile_size()),
            ProjectileKind::Laser => (0.0, config.tile_size() / 2.0),
        };
        Self {
            kind,
            position,
            direction,
            speed,
            angle: 0.0,
            collision_box: collision_box(position, sprite_size, config.collision_box_scale),
            owner,
            rotation_speed,
            rotation_reset: config.fireball_rotation_reset_degrees,
            sprite_size,
            collision_scale: config.collision_box_scale,
        }
    }

    /// Moves the projectile and spins it.
    pub fn animate(&mut self, time_delta_in_secs: f32) {
        if self.rotation_speed != 0.0 {
            self.angle += self.rotation_speed * time_delta_in_secs;
            if self.angle >= self.rotation_reset {
                self.angle = 0.0;
            }
        }

        self.position += self.direction * self.speed * time_delta_in_secs;
        self.collision_box = collision_box(self.position, self.sprite_size, self.collision_scale);
    }

    /// Checks whether the projectile must be removed this tick.
    ///
    /// Bounds are checked first, then obstacles, then the first character in
    /// `targets` whose collision box overlaps the projectile's.
    pub fn resolve(
        &self,
        grid: &TileGrid,
        occupancy: &OccupancyGrid,
        targets: &[Character],
    ) -> Option<Impact> {
        if !grid.bounds().contains(self.position) {
            return Some(Impact::OutOfBounds);
        }

        if occupancy.object_at(grid.tile_idx(self.position)) == ObjectKind::Obstacle {
            return Some(Impact::Obstacle);
        }

        targets
            .iter()
            .position(|target| self.collision_box.overlaps(&target.collision_box))
            .map(Impact::Character)
    }

    /// Edge length of the sprite in pixels.
    pub fn sprite_size(&self) -> f32 {
        self.sprite_size
    }

    /// Rotation of the sprite in radians.
    pub fn rotation_radians(&self) -> f32 {
        match self.kind {
            ProjectileKind::Fireball => self.angle.to_radians(),
            ProjectileKind::Laser => self.direction.y.atan2(self.direction.x),
        }
    }
}
