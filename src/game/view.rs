//! # Views
//!
//! Read-only snapshots handed to the presentation layer: an ordered draw list
//! and the numbers shown in the status line.

use crate::game::{
    DoorState, GamePhase, GameState, MonsterKind, ProjectileKind, RoomMode, TileKind, TileSprite,
};
use macroquad::math::Vec2;
use serde::{Deserialize, Serialize};

/// What to draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sprite {
    /// A room tile; the kind tells open doors from closed ones
    Tile { variant: TileSprite, kind: TileKind },
    Hero,
    Monster(MonsterKind),
    Fireball,
    Laser,
}

/// One entry of the draw list.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Drawable {
    /// Center of the sprite in pixels
    pub position: Vec2,
    /// Edge length of the sprite in pixels
    pub size: f32,
    pub sprite: Sprite,
    /// Rotation in radians around the center
    pub rotation: f32,
}

impl Drawable {
    fn upright(position: Vec2, size: f32, sprite: Sprite) -> Self {
        Self {
            position,
            size,
            sprite,
            rotation: 0.0,
        }
    }
}

/// Numbers for the status line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomStats {
    pub phase: GamePhase,
    pub level: u32,
    /// None outside of a dungeon room
    pub hero_life: Option<u32>,
    /// Life points of every live monster, in list order
    pub monster_life: Vec<u32>,
    pub doors: DoorState,
}

impl GameState {
    /// Draw list for the current frame, back to front: tiles, monsters, the
    /// hero, then projectiles.
    pub fn drawables(&self) -> Vec<Drawable> {
        let map = &self.room.tile_map;
        let grid = map.grid();
        let mut list: Vec<Drawable> = grid
            .indices()
            .filter_map(|idx| {
                let kind = map.get(idx)?;
                let variant = map.sprite(idx)?;
                Some(Drawable::upright(
                    grid.tile_center(idx),
                    grid.tile_size,
                    Sprite::Tile { variant, kind },
                ))
            })
            .collect();

        let encounter = match &self.room.mode {
            RoomMode::Dungeon(encounter) => encounter,
            RoomMode::Menu => return list,
        };

        for monster in &encounter.monsters {
            if let Some(kind) = monster.monster_kind() {
                list.push(Drawable::upright(
                    monster.position,
                    grid.tile_size,
                    Sprite::Monster(kind),
                ));
            }
        }
        list.push(Drawable::upright(
            encounter.hero.position,
            grid.tile_size,
            Sprite::Hero,
        ));

        for projectile in encounter.fireball.iter().chain(encounter.lasers.iter()) {
            let sprite = match projectile.kind {
                ProjectileKind::Fireball => Sprite::Fireball,
                ProjectileKind::Laser => Sprite::Laser,
            };
            list.push(Drawable {
                position: projectile.position,
                size: projectile.sprite_size(),
                sprite,
                rotation: projectile.rotation_radians(),
            });
        }
        list
    }

    /// Status line numbers for the current frame.
    pub fn stats(&self) -> RoomStats {
        let encounter = self.room.encounter();
        RoomStats {
            phase: self.phase(),
            level: self.level,
            hero_life: encounter.map(|e| e.hero.life_points),
            monster_life: encounter
                .map(|e| e.monsters.iter().map(|m| m.life_points).collect())
                .unwrap_or_default(),
            doors: self.room.door_state(),
        }
    }
}
