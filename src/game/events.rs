//! # Game Events
//!
//! Notifications produced by the core for the presentation layer: message log
//! lines, and any sound cues a frontend wants to attach.

use crate::game::{EntityId, GamePhase, TileIdx};
use serde::{Deserialize, Serialize};

/// Something noteworthy that happened during a tick or in response to input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// The game-level phase machine moved on
    PhaseChanged { from: GamePhase, to: GamePhase },
    /// A new dungeon room was built
    RoomEntered { level: u32, monsters: usize },
    /// The hero was sent toward a tile
    HeroTargetSet { target: TileIdx },
    /// The hero threw a fireball at a monster
    FireballLaunched { target: EntityId },
    /// A fireball struck a monster
    FireballHit { monster: EntityId, remaining_life: u32 },
    /// A fireball left the room or hit a wall
    FireballExpired,
    /// A walking monster fired a laser
    LaserFired { monster: EntityId },
    /// A monster ran out of life points and was removed
    MonsterKilled { monster: EntityId },
    /// The last monster fell and the exit doors opened
    DoorsOpened,
}

impl GameEvent {
    /// Short human-readable description, or None for events not worth a log line.
    pub fn message(&self) -> Option<String> {
        match self {
            GameEvent::RoomEntered { level, monsters } => Some(format!(
                "Entered room {} with {} monster{}",
                level,
                monsters,
                if *monsters == 1 { "" } else { "s" }
            )),
            GameEvent::FireballHit { remaining_life, .. } => {
                Some(format!("Fireball hit! Monster has {} life left", remaining_life))
            }
            GameEvent::MonsterKilled { .. } => Some("Monster defeated".to_string()),
            GameEvent::DoorsOpened => Some("The doors are open".to_string()),
            GameEvent::PhaseChanged {
                to: GamePhase::GameOver,
                ..
            } => Some("Game over".to_string()),
            _ => None,
        }
    }
}
