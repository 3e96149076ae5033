//! # Characters
//!
//! Hero and monsters share one entity type carrying a role tag. Movement is a
//! per-character state machine that walks one tile at a time toward a target
//! tile, consulting the occupancy grid before every step.

use crate::config::GameConfig;
use crate::game::{new_entity_id, Direction, EntityId, ObjectKind, OccupancyGrid, TileIdx};
use crate::utils::{collision_box, TileGrid};
use macroquad::math::{Rect, Vec2};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Movement state of a character, advanced once per logic tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MovementState {
    Idle,
    CheckMove,
    Move,
    ReachedNextTile,
    ReachedTargetTile,
    Blocked,
}

/// Kinds of monsters that can be spawned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MonsterKind {
    Crab,
}

impl MonsterKind {
    /// Starting life points.
    pub fn life_points(self) -> u32 {
        match self {
            MonsterKind::Crab => 3,
        }
    }

    /// Walking speed in pixels per second.
    pub fn speed(self) -> f32 {
        match self {
            MonsterKind::Crab => 120.0,
        }
    }
}

/// Monster-only state: the wander and laser timers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonsterData {
    pub kind: MonsterKind,
    /// Seconds until the next wander decision
    pub wander_countdown: f32,
    /// Seconds until the next laser attempt, clamped at zero
    pub laser_cooldown: f32,
}

/// What a character is and the data only that role needs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Role {
    Hero,
    Monster(MonsterData),
}

/// A hero or a monster walking the tile grid.
#[derive(Debug, Clone, PartialEq)]
pub struct Character {
    pub id: EntityId,
    pub role: Role,
    /// Center of the character in pixels
    pub position: Vec2,
    pub current_tile_idx: TileIdx,
    /// Equal to `current_tile_idx` or one of its cardinal neighbors
    pub next_tile_idx: TileIdx,
    /// None exactly when the character is not pursuing a goal
    pub target_tile_idx: Option<TileIdx>,
    pub movement_state: MovementState,
    pub life_points: u32,
    /// Pixels per second
    pub speed: f32,
    pub collision_box: Rect,
    grid: TileGrid,
    arrival_epsilon: f32,
    collision_scale: f32,
}

impl Character {
    fn new(role: Role, tile: TileIdx, life_points: u32, speed: f32, config: &GameConfig) -> Self {
        let grid = TileGrid::from_config(config);
        let position = grid.tile_center(tile);
        Self {
            id: new_entity_id(),
            role,
            position,
            current_tile_idx: tile,
            next_tile_idx: tile,
            target_tile_idx: None,
            movement_state: MovementState::Idle,
            life_points,
            speed,
            collision_box: collision_box(position, grid.tile_size, config.collision_box_scale),
            grid,
            arrival_epsilon: config.arrival_epsilon,
            collision_scale: config.collision_box_scale,
        }
    }

    /// Creates the hero standing on `tile`.
    pub fn hero(tile: TileIdx, config: &GameConfig) -> Self {
        Self::new(
            Role::Hero,
            tile,
            config.hero_life_points,
            config.hero_speed,
            config,
        )
    }

    /// Creates a monster of the given kind standing on `tile`.
    pub fn monster(kind: MonsterKind, tile: TileIdx, config: &GameConfig) -> Self {
        let data = MonsterData {
            kind,
            wander_countdown: config.wander_countdown_secs,
            laser_cooldown: config.laser_cooldown_secs,
        };
        Self::new(
            Role::Monster(data),
            tile,
            kind.life_points(),
            kind.speed(),
            config,
        )
    }

    pub fn is_hero(&self) -> bool {
        matches!(self.role, Role::Hero)
    }

    /// Monster kind, or None for the hero.
    pub fn monster_kind(&self) -> Option<MonsterKind> {
        match &self.role {
            Role::Monster(data) => Some(data.kind),
            Role::Hero => None,
        }
    }

    pub fn is_alive(&self) -> bool {
        self.life_points > 0
    }

    /// Removes one life point. Returns the remaining life points.
    pub fn take_hit(&mut self) -> u32 {
        self.life_points = self.life_points.saturating_sub(1);
        self.life_points
    }

    /// Sets the goal tile the character walks toward.
    pub fn set_target(&mut self, target: TileIdx) {
        self.target_tile_idx = Some(target);
    }

    /// Places the character on `tile`, dropping any goal in progress.
    pub fn place_at(&mut self, tile: TileIdx) {
        self.current_tile_idx = tile;
        self.next_tile_idx = tile;
        self.target_tile_idx = None;
        self.movement_state = MovementState::Idle;
        self.snap_to_current_tile();
    }

    /// Whether this character may step onto a tile holding `object`.
    ///
    /// Only the hero walks through open doors.
    pub fn can_enter(&self, object: ObjectKind) -> bool {
        match self.role {
            Role::Hero => matches!(object, ObjectKind::Floor | ObjectKind::OpenDoor),
            Role::Monster(_) => object == ObjectKind::Floor,
        }
    }

    /// Direction of the step in progress, if any.
    pub fn step_direction(&self) -> Option<Direction> {
        Direction::from_delta(self.next_tile_idx - self.current_tile_idx)
    }

    /// Advances the movement state machine by one logic tick.
    pub fn update(&mut self, occupancy: &OccupancyGrid) {
        match self.movement_state {
            MovementState::Idle => {
                if self.target_tile_idx.is_some() {
                    self.movement_state = MovementState::CheckMove;
                }
            }
            MovementState::CheckMove => {
                if let Some(target) = self.target_tile_idx {
                    self.next_tile_idx = next_tile_towards(self.current_tile_idx, target);
                }
                if self.can_enter(occupancy.object_at(self.next_tile_idx)) {
                    self.movement_state = MovementState::Move;
                } else {
                    self.movement_state = MovementState::Blocked;
                }
            }
            MovementState::Move => {
                if self.has_reached_tile(self.next_tile_idx) {
                    self.movement_state = MovementState::ReachedNextTile;
                }
            }
            MovementState::ReachedNextTile => {
                self.current_tile_idx = self.next_tile_idx;
                self.snap_to_current_tile();
                if Some(self.current_tile_idx) == self.target_tile_idx {
                    self.movement_state = MovementState::ReachedTargetTile;
                } else {
                    self.movement_state = MovementState::CheckMove;
                }
            }
            MovementState::ReachedTargetTile => {
                self.target_tile_idx = None;
                self.movement_state = MovementState::Idle;
            }
            MovementState::Blocked => {
                self.target_tile_idx = None;
                self.next_tile_idx = self.current_tile_idx;
                self.movement_state = MovementState::Idle;
            }
        }
    }

    /// Interpolates the position toward the next tile. Never changes state.
    ///
    /// The step is clamped at the next tile's center so long frames cannot
    /// carry the character past it.
    pub fn animate(&mut self, time_delta_in_secs: f32) {
        if self.movement_state != MovementState::Move {
            return;
        }

        let destination = self.grid.tile_center(self.next_tile_idx);
        let remaining = destination - self.position;
        let step = self.speed * time_delta_in_secs;
        if step * step >= remaining.length_squared() {
            self.position = destination;
        } else {
            let delta = self.next_tile_idx - self.current_tile_idx;
            self.position += Vec2::new(delta.x as f32, delta.y as f32) * step;
        }
        self.collision_box = self.current_collision_box();
    }

    /// Whether the character is within the arrival epsilon of `tile`.
    ///
    /// Compares the character's top-left corner with the tile's top-left corner
    /// using squared distances.
    pub fn has_reached_tile(&self, tile: TileIdx) -> bool {
        let top_left = self.position - Vec2::splat(self.grid.tile_radius());
        let squared_dist = top_left.distance_squared(self.grid.tile_top_left(tile));
        squared_dist <= self.arrival_epsilon * self.arrival_epsilon
    }

    /// Moves the position exactly onto the center of the current tile.
    pub fn snap_to_current_tile(&mut self) {
        self.position = self.grid.tile_center(self.current_tile_idx);
        self.collision_box = self.current_collision_box();
    }

    /// Counts down the wander timer and picks a new goal when it expires.
    ///
    /// Returns the new target when one was chosen. Does nothing for the hero.
    pub fn tick_wander<R: Rng>(
        &mut self,
        time_delta_in_secs: f32,
        rng: &mut R,
        config: &GameConfig,
    ) -> Option<TileIdx> {
        let expired = match &mut self.role {
            Role::Monster(data) => {
                data.wander_countdown -= time_delta_in_secs;
                data.wander_countdown <= 0.0
            }
            Role::Hero => false,
        };
        if !expired {
            return None;
        }

        let target = self.pick_wander_target(rng, config.wander_max_distance);
        if let Some(target) = target {
            self.target_tile_idx = Some(target);
        }

        if let Role::Monster(data) = &mut self.role {
            data.wander_countdown =
                config.wander_countdown_secs + jitter(rng, config.wander_jitter_secs);
        }
        target
    }

    /// Random in-bounds tile reachable by walking straight in one cardinal direction.
    ///
    /// Picks from the full candidate list so the search always terminates.
    pub fn pick_wander_target<R: Rng>(&self, rng: &mut R, max_distance: i32) -> Option<TileIdx> {
        // No straight walk inside the room is longer than its widest side.
        let max_distance = max_distance.min(self.grid.width.max(self.grid.height));
        let candidates: Vec<TileIdx> = Direction::ALL
            .iter()
            .flat_map(|direction| {
                (1..=max_distance).map(move |distance| direction.to_delta() * distance)
            })
            .map(|offset| self.current_tile_idx + offset)
            .filter(|tile| self.grid.is_valid_tile(*tile))
            .collect();
        candidates.choose(rng).copied()
    }

    /// Counts down the laser cooldown and decides whether to fire.
    ///
    /// A monster only fires while walking, in its step direction. Returns that
    /// direction when a laser should be spawned.
    pub fn tick_laser<R: Rng>(
        &mut self,
        time_delta_in_secs: f32,
        rng: &mut R,
        config: &GameConfig,
    ) -> Option<Direction> {
        let walking = self.movement_state == MovementState::Move;
        let direction = self.step_direction();
        let data = match &mut self.role {
            Role::Monster(data) => data,
            Role::Hero => return None,
        };

        data.laser_cooldown = (data.laser_cooldown - time_delta_in_secs).max(0.0);
        if !walking || data.laser_cooldown > 0.0 {
            return None;
        }

        data.laser_cooldown = (config.laser_cooldown_secs
            + jitter(rng, config.laser_jitter_secs))
        .max(0.0);
        if rng.gen_bool(config.laser_fire_probability) {
            direction
        } else {
            None
        }
    }

    fn current_collision_box(&self) -> Rect {
        collision_box(self.position, self.grid.tile_size, self.collision_scale)
    }
}

/// Next tile on the greedy path from `current` toward `target`.
///
/// Steps along X when the X distance is strictly larger, otherwise along Y.
/// Returns `current` when already on the target.
///
/// # Examples
///
/// ```
/// use randomdungeon::{next_tile_towards, TileIdx};
///
/// let current = TileIdx::new(5, 5);
/// assert_eq!(next_tile_towards(current, TileIdx::new(8, 4)), TileIdx::new(6, 5));
/// assert_eq!(next_tile_towards(current, TileIdx::new(6, 9)), TileIdx::new(5, 6));
/// ```
pub fn next_tile_towards(current: TileIdx, target: TileIdx) -> TileIdx {
    let dist = target - current;
    if dist.x.abs() > dist.y.abs() {
        current + TileIdx::new(dist.x.signum(), 0)
    } else {
        current + TileIdx::new(0, dist.y.signum())
    }
}

fn jitter<R: Rng>(rng: &mut R, amount: f32) -> f32 {
    if amount > 0.0 {
        rng.gen_range(-amount..=amount)
    } else {
        0.0
    }
}
