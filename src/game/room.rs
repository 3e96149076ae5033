//! # Rooms
//!
//! A room owns its tile map, the occupancy grid derived from it, and, for
//! dungeon rooms, the encounter: the hero, the monsters and the projectiles in
//! flight. Each logic tick the room rebuilds the occupancy grid, advances every
//! character, resolves projectiles, prunes dead monsters and opens the doors
//! once the last monster falls.

use crate::config::GameConfig;
use crate::game::{
    Character, DoorState, GameEvent, Impact, MonsterKind, OccupancyGrid, Projectile, TileIdx,
    TileMap,
};
use crate::generation::{monster_count, spawn_tiles, Generator, RoomLayoutGenerator};
use crate::utils::TileGrid;
use crate::DungeonResult;
use log::{debug, info};
use rand::Rng;

/// Live entities of a dungeon room.
#[derive(Debug, Clone)]
pub struct Encounter {
    /// Level depth, starting at 1
    pub level: u32,
    pub hero: Character,
    pub monsters: Vec<Character>,
    /// At most one fireball is live per room
    pub fireball: Option<Projectile>,
    pub lasers: Vec<Projectile>,
}

/// What kind of room this is, with the data only that kind needs.
#[derive(Debug, Clone)]
pub enum RoomMode {
    /// Static backdrop behind the menu screens
    Menu,
    /// A playable room
    Dungeon(Encounter),
}

/// One room of the dungeon, or the menu backdrop.
#[derive(Debug, Clone)]
pub struct Room {
    pub tile_map: TileMap,
    pub occupancy: OccupancyGrid,
    pub mode: RoomMode,
}

impl Room {
    /// Builds the menu backdrop room.
    pub fn menu(config: &GameConfig) -> DungeonResult<Self> {
        let tile_map = RoomLayoutGenerator::from_config(config).generate(config)?;
        let occupancy = OccupancyGrid::build(&tile_map, None, std::iter::empty());
        Ok(Self {
            tile_map,
            occupancy,
            mode: RoomMode::Menu,
        })
    }

    /// Builds a dungeon room for `level`, placing the hero at the entry tile and
    /// spawning monsters on free floor tiles.
    pub fn dungeon<R: Rng>(
        level: u32,
        mut hero: Character,
        config: &GameConfig,
        rng: &mut R,
    ) -> DungeonResult<Self> {
        let mut tile_map = RoomLayoutGenerator::from_config(config).generate(config)?;
        hero.place_at(RoomLayoutGenerator::entry_tile(tile_map.grid()));

        let occupancy =
            OccupancyGrid::build(&tile_map, Some(hero.current_tile_idx), std::iter::empty());
        let wanted = monster_count(level, config);
        let monsters: Vec<Character> = spawn_tiles(&occupancy, wanted, rng)
            .into_iter()
            .map(|tile| Character::monster(MonsterKind::Crab, tile, config))
            .collect();

        if monsters.is_empty() {
            tile_map.set_door_state(DoorState::Open);
        }

        info!(
            "Built room {} with {} monster(s), hero at {}",
            level,
            monsters.len(),
            hero.current_tile_idx
        );

        let mut room = Self {
            tile_map,
            occupancy,
            mode: RoomMode::Dungeon(Encounter {
                level,
                hero,
                monsters,
                fireball: None,
                lasers: Vec::new(),
            }),
        };
        room.rebuild_occupancy();
        Ok(room)
    }

    /// The encounter of a dungeon room.
    pub fn encounter(&self) -> Option<&Encounter> {
        match &self.mode {
            RoomMode::Dungeon(encounter) => Some(encounter),
            RoomMode::Menu => None,
        }
    }

    /// The encounter of a dungeon room, mutably.
    pub fn encounter_mut(&mut self) -> Option<&mut Encounter> {
        match &mut self.mode {
            RoomMode::Dungeon(encounter) => Some(encounter),
            RoomMode::Menu => None,
        }
    }

    /// Consumes the room and hands back its hero.
    pub fn into_hero(self) -> Option<Character> {
        match self.mode {
            RoomMode::Dungeon(encounter) => Some(encounter.hero),
            RoomMode::Menu => None,
        }
    }

    pub fn grid(&self) -> &TileGrid {
        self.tile_map.grid()
    }

    pub fn door_state(&self) -> DoorState {
        self.tile_map.door_state()
    }

    /// Recomputes the occupancy grid from the tile map and character tiles.
    pub fn rebuild_occupancy(&mut self) {
        match &self.mode {
            RoomMode::Menu => {
                self.occupancy
                    .rebuild(&self.tile_map, None, std::iter::empty());
            }
            RoomMode::Dungeon(encounter) => {
                self.occupancy.rebuild(
                    &self.tile_map,
                    Some(encounter.hero.current_tile_idx),
                    encounter.monsters.iter().map(|m| m.current_tile_idx),
                );
            }
        }
    }

    /// Live monster standing on `tile`, first in list order.
    pub fn monster_at(&self, tile: TileIdx) -> Option<&Character> {
        self.encounter()?
            .monsters
            .iter()
            .find(|monster| monster.current_tile_idx == tile)
    }

    /// Whether the hero stands on an exit door of a cleared room.
    pub fn hero_at_exit(&self) -> bool {
        match &self.mode {
            RoomMode::Dungeon(encounter) => {
                encounter.monsters.is_empty()
                    && self.tile_map.is_door(encounter.hero.current_tile_idx)
            }
            RoomMode::Menu => false,
        }
    }

    /// Sends the hero toward `tile`.
    pub fn set_hero_target(&mut self, tile: TileIdx) -> Option<GameEvent> {
        let encounter = self.encounter_mut()?;
        encounter.hero.set_target(tile);
        debug!("Hero target set to {}", tile);
        Some(GameEvent::HeroTargetSet { target: tile })
    }

    /// Throws a fireball from the hero at the monster standing on `tile`.
    ///
    /// Nothing happens when a fireball is already live or no monster stands there.
    pub fn launch_fireball(&mut self, tile: TileIdx, config: &GameConfig) -> Option<GameEvent> {
        let encounter = match &mut self.mode {
            RoomMode::Dungeon(encounter) => encounter,
            RoomMode::Menu => return None,
        };
        if encounter.fireball.is_some() {
            return None;
        }

        let target = encounter
            .monsters
            .iter()
            .find(|monster| monster.current_tile_idx == tile)?;
        let fireball = Projectile::fireball(
            encounter.hero.position,
            target.position,
            Some(encounter.hero.id),
            config,
        )?;
        let target_id = target.id;
        encounter.fireball = Some(fireball);
        debug!("Fireball launched at monster on {}", tile);
        Some(GameEvent::FireballLaunched { target: target_id })
    }

    /// Runs one logic tick.
    pub fn update<R: Rng>(
        &mut self,
        time_delta_in_secs: f32,
        rng: &mut R,
        config: &GameConfig,
    ) -> Vec<GameEvent> {
        let mut events = Vec::new();
        self.rebuild_occupancy();

        let Room {
            tile_map,
            occupancy,
            mode,
        } = self;
        let encounter = match mode {
            RoomMode::Dungeon(encounter) => encounter,
            RoomMode::Menu => return events,
        };

        encounter.hero.update(occupancy);
        for monster in encounter.monsters.iter_mut() {
            monster.update(occupancy);
            monster.tick_wander(time_delta_in_secs, rng, config);
            if let Some(direction) = monster.tick_laser(time_delta_in_secs, rng, config) {
                encounter.lasers.push(Projectile::laser(
                    monster.position,
                    direction,
                    Some(monster.id),
                    config,
                ));
                events.push(GameEvent::LaserFired {
                    monster: monster.id,
                });
            }
        }

        let grid = *tile_map.grid();
        if let Some(fireball) = &encounter.fireball {
            match fireball.resolve(&grid, occupancy, &encounter.monsters) {
                Some(Impact::Character(index)) => {
                    let monster = &mut encounter.monsters[index];
                    let remaining_life = monster.take_hit();
                    events.push(GameEvent::FireballHit {
                        monster: monster.id,
                        remaining_life,
                    });
                    encounter.fireball = None;
                }
                Some(Impact::OutOfBounds) | Some(Impact::Obstacle) => {
                    events.push(GameEvent::FireballExpired);
                    encounter.fireball = None;
                }
                None => {}
            }
        }

        // Lasers never hit characters.
        encounter
            .lasers
            .retain(|laser| laser.resolve(&grid, occupancy, &[]).is_none());

        encounter.monsters.retain(|monster| {
            if monster.is_alive() {
                true
            } else {
                info!("Monster {} defeated", monster.id);
                events.push(GameEvent::MonsterKilled {
                    monster: monster.id,
                });
                false
            }
        });

        if encounter.monsters.is_empty() && tile_map.door_state() == DoorState::Closed {
            tile_map.set_door_state(DoorState::Open);
            info!("Room {} cleared, doors open", encounter.level);
            events.push(GameEvent::DoorsOpened);
        }

        events
    }

    /// Runs one animation pass: characters and projectiles move, no state changes.
    pub fn animate(&mut self, time_delta_in_secs: f32) {
        let encounter = match &mut self.mode {
            RoomMode::Dungeon(encounter) => encounter,
            RoomMode::Menu => return,
        };

        encounter.hero.animate(time_delta_in_secs);
        for monster in encounter.monsters.iter_mut() {
            monster.animate(time_delta_in_secs);
        }
        if let Some(fireball) = encounter.fireball.as_mut() {
            fireball.animate(time_delta_in_secs);
        }
        for laser in encounter.lasers.iter_mut() {
            laser.animate(time_delta_in_secs);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{MovementState, ObjectKind, TileKind};
    use crate::generation::create_rng;

    const FRAME: f32 = 1.0 / 60.0;

    fn quiet_config() -> GameConfig {
        GameConfig {
            wander_countdown_secs: 1.0e6,
            laser_fire_probability: 0.0,
            ..GameConfig::default()
        }
    }

    fn dungeon(level: u32, config: &GameConfig) -> Room {
        let hero = Character::hero(TileIdx::new(1, 1), config);
        Room::dungeon(level, hero, config, &mut create_rng(42)).unwrap()
    }

    #[test]
    fn test_menu_room_has_no_encounter() {
        let config = GameConfig::default();
        let mut room = Room::menu(&config).unwrap();
        assert!(room.encounter().is_none());
        assert!(room.update(FRAME, &mut create_rng(1), &config).is_empty());
        assert!(!room.hero_at_exit());
        assert_eq!(room.door_state(), DoorState::Closed);
    }

    #[test]
    fn test_dungeon_room_places_hero_and_monsters() {
        let config = quiet_config();
        let room = dungeon(3, &config);
        let encounter = room.encounter().unwrap();
        assert_eq!(encounter.hero.current_tile_idx, TileIdx::new(8, 1));
        assert_eq!(encounter.monsters.len(), 3);
        for monster in &encounter.monsters {
            assert_eq!(room.tile_map.get(monster.current_tile_idx), Some(TileKind::Floor));
            assert_ne!(monster.current_tile_idx, encounter.hero.current_tile_idx);
            assert_eq!(room.occupancy.object_at(monster.current_tile_idx), ObjectKind::Monster);
        }
        assert_eq!(room.occupancy.object_at(TileIdx::new(8, 1)), ObjectKind::Hero);
        assert_eq!(room.door_state(), DoorState::Closed);
    }

    #[test]
    fn test_empty_room_starts_open() {
        let config = GameConfig {
            monsters_per_level: 0,
            ..quiet_config()
        };
        let room = dungeon(1, &config);
        assert!(room.encounter().unwrap().monsters.is_empty());
        assert_eq!(room.door_state(), DoorState::Open);
    }

    #[test]
    fn test_only_one_fireball_at_a_time() {
        let config = quiet_config();
        let mut room = dungeon(2, &config);
        let tiles: Vec<TileIdx> = room
            .encounter()
            .unwrap()
            .monsters
            .iter()
            .map(|m| m.current_tile_idx)
            .collect();

        assert!(matches!(
            room.launch_fireball(tiles[0], &config),
            Some(GameEvent::FireballLaunched { .. })
        ));
        assert!(room.launch_fireball(tiles[1], &config).is_none());
    }

    #[test]
    fn test_fireball_needs_a_monster() {
        let config = quiet_config();
        let mut room = dungeon(1, &config);
        assert!(room.monster_at(TileIdx::new(0, 0)).is_none());
        assert!(room.launch_fireball(TileIdx::new(0, 0), &config).is_none());
        assert!(room.encounter().unwrap().fireball.is_none());
    }

    #[test]
    fn test_fireball_expires_against_wall() {
        let config = quiet_config();
        let mut room = dungeon(1, &config);
        let encounter = room.encounter_mut().unwrap();
        let hero_position = encounter.hero.position;
        encounter.fireball = Projectile::fireball(
            hero_position,
            hero_position - macroquad::math::Vec2::new(0.0, 100.0),
            None,
            &config,
        );

        let mut expired = false;
        for _ in 0..120 {
            let events = room.update(FRAME, &mut create_rng(3), &config);
            if events.contains(&GameEvent::FireballExpired) {
                expired = true;
                break;
            }
            room.animate(FRAME);
        }
        assert!(expired);
        assert!(room.encounter().unwrap().fireball.is_none());
    }

    #[test]
    fn test_hero_walks_onto_open_door_and_exits() {
        let config = GameConfig {
            monsters_per_level: 0,
            ..quiet_config()
        };
        let mut room = dungeon(1, &config);
        let door = room.tile_map.doors()[1];
        room.set_hero_target(door);

        let mut rng = create_rng(8);
        for _ in 0..2000 {
            room.update(FRAME, &mut rng, &config);
            room.animate(FRAME);
            if room.hero_at_exit() {
                break;
            }
        }
        assert!(room.hero_at_exit());
        let hero = room.into_hero().unwrap();
        assert_eq!(hero.current_tile_idx, door);
    }

    #[test]
    fn test_closed_door_blocks_hero() {
        let config = quiet_config();
        let mut room = dungeon(1, &config);
        let door = room.tile_map.doors()[1];
        {
            let hero = &mut room.encounter_mut().unwrap().hero;
            hero.place_at(door - TileIdx::new(0, 1));
        }
        room.set_hero_target(door);

        let mut rng = create_rng(8);
        let mut blocked = false;
        for _ in 0..10 {
            room.update(FRAME, &mut rng, &config);
            room.animate(FRAME);
            let hero = &room.encounter().unwrap().hero;
            if hero.movement_state == MovementState::Blocked {
                blocked = true;
            }
            assert_ne!(hero.movement_state, MovementState::Move);
        }
        assert!(blocked);
        assert!(!room.hero_at_exit());
    }
}
