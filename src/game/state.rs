//! # Game State Module
//!
//! Central game state: the game-level phase machine, the current room, the
//! level counter and the session's random number generator.
//!
//! Phases cycle `StartMenu → Menu → StartPlay → Play → GameOver → Menu`. The
//! transient `StartMenu` and `StartPlay` phases build the room for the phase
//! that follows them and move on during the next logic tick.

use crate::config::GameConfig;
use crate::game::{Character, GameEvent, Room, TileIdx};
use crate::generation::{create_rng, RoomLayoutGenerator};
use crate::input::PlayerInput;
use crate::{DungeonError, DungeonResult};
use log::{debug, info, warn};
use macroquad::math::Vec2;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

/// Game-level phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GamePhase {
    StartMenu,
    Menu,
    StartPlay,
    Play,
    GameOver,
}

/// Statistics for the current run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameStatistics {
    /// Number of monsters defeated
    pub monsters_defeated: u32,
    /// Fireballs thrown by the hero
    pub fireballs_thrown: u32,
    /// Fireballs that struck a monster
    pub fireball_hits: u32,
    /// Lasers fired by monsters
    pub lasers_fired: u32,
    /// Rooms whose doors were opened
    pub rooms_cleared: u32,
    /// Deepest level reached
    pub max_depth_reached: u32,
}

impl GameStatistics {
    /// Creates new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates statistics based on a game event.
    pub fn update_from_event(&mut self, event: &GameEvent) {
        match event {
            GameEvent::FireballLaunched { .. } => self.fireballs_thrown += 1,
            GameEvent::FireballHit { .. } => self.fireball_hits += 1,
            GameEvent::LaserFired { .. } => self.lasers_fired += 1,
            GameEvent::MonsterKilled { .. } => self.monsters_defeated += 1,
            GameEvent::DoorsOpened => self.rooms_cleared += 1,
            GameEvent::RoomEntered { level, .. } => {
                self.max_depth_reached = self.max_depth_reached.max(*level);
            }
            _ => {}
        }
    }
}

/// Central game state containing all game data.
///
/// # Examples
///
/// ```
/// use randomdungeon::{GameConfig, GamePhase, GameState};
///
/// let mut state = GameState::new(GameConfig::default(), 12345).unwrap();
/// assert_eq!(state.phase(), GamePhase::StartMenu);
/// state.update(1.0 / 60.0).unwrap();
/// assert_eq!(state.phase(), GamePhase::Menu);
/// ```
#[derive(Debug)]
pub struct GameState {
    pub config: GameConfig,
    /// Current room; the menu backdrop outside of play
    pub room: Room,
    /// Depth of the current dungeon room, 0 before the first run
    pub level: u32,
    pub statistics: GameStatistics,
    phase: GamePhase,
    rng: StdRng,
    seed: u64,
}

impl GameState {
    /// Creates a new game state sitting in the start menu.
    ///
    /// The render surface size in `config` must already be known; a zero-sized
    /// surface means the presentation layer has not been initialized yet.
    pub fn new(config: GameConfig, seed: u64) -> DungeonResult<Self> {
        if config.surface_width == 0 || config.surface_height == 0 {
            return Err(DungeonError::InvalidState(
                "Render surface is not initialized".to_string(),
            ));
        }
        config.validate()?;

        let room = Room::menu(&config)?;
        info!("Game state created with seed {}", seed);
        Ok(Self {
            config,
            room,
            level: 0,
            statistics: GameStatistics::new(),
            phase: GamePhase::StartMenu,
            rng: create_rng(seed),
            seed,
        })
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// The hero, while a dungeon room is active.
    pub fn hero(&self) -> Option<&Character> {
        self.room.encounter().map(|encounter| &encounter.hero)
    }

    /// Tile under a pixel coordinate, if it lies inside the room.
    pub fn tile_at_pixel(&self, position: Vec2) -> Option<TileIdx> {
        let grid = self.room.grid();
        let tile = grid.tile_idx(position);
        grid.is_valid_tile(tile).then_some(tile)
    }

    /// Applies one player input.
    ///
    /// During play a click on a monster throws a fireball and a click anywhere
    /// else in the room sends the hero there; quitting abandons the run.
    pub fn handle_input(&mut self, input: PlayerInput) -> Vec<GameEvent> {
        let mut events = Vec::new();
        match (self.phase, input) {
            (GamePhase::Menu, PlayerInput::Click(_) | PlayerInput::Confirm) => {
                self.set_phase(GamePhase::StartPlay, &mut events);
            }
            (GamePhase::Play, PlayerInput::Click(position)) => {
                if let Some(tile) = self.tile_at_pixel(position) {
                    let event = if self.room.monster_at(tile).is_some() {
                        self.room.launch_fireball(tile, &self.config)
                    } else {
                        self.room.set_hero_target(tile)
                    };
                    events.extend(event);
                }
            }
            (GamePhase::Play, PlayerInput::Quit) => {
                info!("Run abandoned on level {}", self.level);
                self.set_phase(GamePhase::GameOver, &mut events);
            }
            (GamePhase::GameOver, PlayerInput::Click(_) | PlayerInput::Confirm) => {
                self.set_phase(GamePhase::Menu, &mut events);
            }
            (_, PlayerInput::ToggleOverlay(overlay)) => {
                let enabled = overlay.toggle(&mut self.config.debug);
                debug!("Overlay {:?} enabled: {}", overlay, enabled);
            }
            _ => {}
        }
        self.record(&events);
        events
    }

    /// Runs one logic tick.
    pub fn update(&mut self, time_delta_in_secs: f32) -> DungeonResult<Vec<GameEvent>> {
        let mut events = Vec::new();
        match self.phase {
            GamePhase::StartMenu => {
                self.room = Room::menu(&self.config)?;
                self.set_phase(GamePhase::Menu, &mut events);
            }
            GamePhase::Menu | GamePhase::GameOver => {}
            GamePhase::StartPlay => {
                self.level = 0;
                self.statistics = GameStatistics::new();
                let entry = RoomLayoutGenerator::entry_tile(self.room.grid());
                let hero = Character::hero(entry, &self.config);
                self.enter_room(1, hero, &mut events)?;
                self.set_phase(GamePhase::Play, &mut events);
            }
            GamePhase::Play => {
                events.extend(
                    self.room
                        .update(time_delta_in_secs, &mut self.rng, &self.config),
                );

                // Lasers do not damage the hero yet, so nothing lowers hero life
                // points today; a future damage source ends the run here.
                let hero_alive = self.hero().map(Character::is_alive).unwrap_or(false);
                if !hero_alive {
                    self.set_phase(GamePhase::GameOver, &mut events);
                } else if self.room.hero_at_exit() {
                    self.advance_room(&mut events)?;
                }
            }
        }
        self.record(&events);
        Ok(events)
    }

    /// Runs one animation pass.
    pub fn animate(&mut self, time_delta_in_secs: f32) {
        if self.phase == GamePhase::Play {
            self.room.animate(time_delta_in_secs);
        }
    }

    /// Moves the hero from the cleared room into a fresh one a level deeper.
    fn advance_room(&mut self, events: &mut Vec<GameEvent>) -> DungeonResult<()> {
        let backdrop = Room::menu(&self.config)?;
        let hero = std::mem::replace(&mut self.room, backdrop)
            .into_hero()
            .ok_or_else(|| DungeonError::InvalidState("Room has no hero".to_string()))?;
        self.enter_room(self.level + 1, hero, events)
    }

    fn enter_room(
        &mut self,
        level: u32,
        hero: Character,
        events: &mut Vec<GameEvent>,
    ) -> DungeonResult<()> {
        self.room = Room::dungeon(level, hero, &self.config, &mut self.rng)?;
        self.level = level;
        let monsters = self
            .room
            .encounter()
            .map(|encounter| encounter.monsters.len())
            .unwrap_or(0);
        events.push(GameEvent::RoomEntered { level, monsters });
        Ok(())
    }

    fn set_phase(&mut self, to: GamePhase, events: &mut Vec<GameEvent>) {
        let from = self.phase;
        if from == to {
            return;
        }
        debug!("Phase {:?} -> {:?}", from, to);
        if to == GamePhase::Menu && from == GamePhase::GameOver {
            match Room::menu(&self.config) {
                Ok(room) => self.room = room,
                Err(e) => warn!("Keeping previous room as menu backdrop: {}", e),
            }
        }
        self.phase = to;
        events.push(GameEvent::PhaseChanged { from, to });
    }

    fn record(&mut self, events: &[GameEvent]) {
        for event in events {
            self.statistics.update_from_event(event);
        }
    }
}
