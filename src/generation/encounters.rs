//! # Encounter Generation
//!
//! How many monsters a room holds and where they start.

use crate::config::GameConfig;
use crate::game::{ObjectKind, OccupancyGrid, TileIdx};
use rand::seq::SliceRandom;
use rand::Rng;

/// Number of monsters for a room at the given level depth.
///
/// # Examples
///
/// ```
/// use randomdungeon::{monster_count, GameConfig};
///
/// let config = GameConfig::default();
/// assert_eq!(monster_count(1, &config), 1);
/// assert_eq!(monster_count(3, &config), 3);
/// assert_eq!(monster_count(100, &config), config.max_monsters_per_room as usize);
/// ```
pub fn monster_count(level: u32, config: &GameConfig) -> usize {
    level
        .saturating_mul(config.monsters_per_level)
        .min(config.max_monsters_per_room) as usize
}

/// Picks up to `count` distinct free floor tiles for monsters to start on.
///
/// Draws from the list of tiles whose occupancy is plain floor, so the search
/// is bounded even on crowded maps. Returns fewer tiles when the room runs out
/// of space.
pub fn spawn_tiles<R: Rng>(occupancy: &OccupancyGrid, count: usize, rng: &mut R) -> Vec<TileIdx> {
    let candidates: Vec<TileIdx> = occupancy
        .iter()
        .filter(|(_, kind)| *kind == ObjectKind::Floor)
        .map(|(idx, _)| idx)
        .collect();

    if candidates.len() < count {
        log::warn!(
            "Room has space for {} of {} monsters",
            candidates.len(),
            count
        );
    }

    candidates.choose_multiple(rng, count).copied().collect()
}
