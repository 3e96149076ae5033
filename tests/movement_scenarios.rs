//! Scenario tests for the tile-by-tile movement state machine.

use randomdungeon::{
    Character, GameConfig, Generator, MonsterKind, MovementState, OccupancyGrid,
    RoomLayoutGenerator, TileIdx, TileMap,
};

const FRAME: f32 = 1.0 / 60.0;

fn room() -> (GameConfig, TileMap) {
    let config = GameConfig::default();
    let map = RoomLayoutGenerator::new().generate(&config).unwrap();
    (config, map)
}

/// Runs update + animate until the character is idle without a target, and
/// returns the visited states with consecutive repeats collapsed.
fn walk(character: &mut Character, map: &TileMap, others: &[TileIdx]) -> Vec<MovementState> {
    let mut states = vec![character.movement_state];
    for _ in 0..1000 {
        let occupancy = OccupancyGrid::build(
            map,
            Some(character.current_tile_idx),
            others.iter().copied(),
        );
        character.update(&occupancy);
        assert!(
            character
                .current_tile_idx
                .is_same_or_cardinal_neighbor(character.next_tile_idx),
            "next tile {} is not adjacent to {}",
            character.next_tile_idx,
            character.current_tile_idx
        );
        character.animate(FRAME);

        if states.last() != Some(&character.movement_state) {
            states.push(character.movement_state);
        }
        if character.movement_state == MovementState::Idle
            && character.target_tile_idx.is_none()
        {
            break;
        }
    }
    states
}

#[test]
fn test_three_step_walk_along_x() {
    use MovementState::*;
    let (config, map) = room();
    let mut hero = Character::hero(TileIdx::new(5, 5), &config);
    hero.set_target(TileIdx::new(8, 5));

    let states = walk(&mut hero, &map, &[]);
    assert_eq!(
        states,
        vec![
            Idle,
            CheckMove,
            Move,
            ReachedNextTile,
            CheckMove,
            Move,
            ReachedNextTile,
            CheckMove,
            Move,
            ReachedNextTile,
            ReachedTargetTile,
            Idle,
        ]
    );
    assert_eq!(hero.current_tile_idx, TileIdx::new(8, 5));
    assert_eq!(hero.position, map.grid().tile_center(TileIdx::new(8, 5)));
    assert!(hero.target_tile_idx.is_none());
}

#[test]
fn test_dominant_axis_is_stepped_first() {
    let (config, map) = room();

    // Distance (3,-1): X first
    let mut hero = Character::hero(TileIdx::new(4, 6), &config);
    hero.set_target(TileIdx::new(7, 5));
    let occupancy = OccupancyGrid::build(&map, Some(hero.current_tile_idx), std::iter::empty());
    hero.update(&occupancy);
    hero.update(&occupancy);
    assert_eq!(hero.next_tile_idx, TileIdx::new(5, 6));

    // Distance (1,4): Y first
    let mut hero = Character::hero(TileIdx::new(4, 2), &config);
    hero.set_target(TileIdx::new(5, 6));
    let occupancy = OccupancyGrid::build(&map, Some(hero.current_tile_idx), std::iter::empty());
    hero.update(&occupancy);
    hero.update(&occupancy);
    assert_eq!(hero.next_tile_idx, TileIdx::new(4, 3));
}

#[test]
fn test_diagonal_target_reached_by_staircase() {
    let (config, map) = room();
    let mut hero = Character::hero(TileIdx::new(2, 2), &config);
    hero.set_target(TileIdx::new(6, 7));
    walk(&mut hero, &map, &[]);
    assert_eq!(hero.current_tile_idx, TileIdx::new(6, 7));
    assert_eq!(hero.movement_state, MovementState::Idle);
}

#[test]
fn test_wall_blocks_without_moving() {
    let (config, map) = room();
    let mut hero = Character::hero(TileIdx::new(1, 4), &config);
    let start = hero.position;
    hero.set_target(TileIdx::new(0, 4));

    let states = walk(&mut hero, &map, &[]);
    assert_eq!(
        states,
        vec![
            MovementState::Idle,
            MovementState::CheckMove,
            MovementState::Blocked,
            MovementState::Idle
        ]
    );
    assert_eq!(hero.position, start);
    assert_eq!(hero.current_tile_idx, TileIdx::new(1, 4));
    assert!(hero.target_tile_idx.is_none());
}

#[test]
fn test_monster_in_the_way_stops_the_walk() {
    let (config, map) = room();
    let mut hero = Character::hero(TileIdx::new(3, 5), &config);
    hero.set_target(TileIdx::new(7, 5));

    let states = walk(&mut hero, &map, &[TileIdx::new(5, 5)]);
    assert_eq!(hero.current_tile_idx, TileIdx::new(4, 5));
    assert!(states.contains(&MovementState::Blocked));
    assert!(!states.contains(&MovementState::ReachedTargetTile));
    assert!(hero.target_tile_idx.is_none());
}

#[test]
fn test_monsters_do_not_walk_into_doors() {
    let (config, mut map) = room();
    map.set_door_state(randomdungeon::DoorState::Open);
    let door = map.doors()[0];
    let mut crab = Character::monster(MonsterKind::Crab, door - TileIdx::new(0, 1), &config);
    crab.set_target(door);

    let states = walk(&mut crab, &map, &[]);
    assert!(states.contains(&MovementState::Blocked));
    assert_eq!(crab.current_tile_idx, door - TileIdx::new(0, 1));
}

#[test]
fn test_long_frame_does_not_overshoot() {
    let (config, map) = room();
    let mut hero = Character::hero(TileIdx::new(5, 5), &config);
    hero.set_target(TileIdx::new(6, 5));
    let occupancy = OccupancyGrid::build(&map, Some(hero.current_tile_idx), std::iter::empty());
    hero.update(&occupancy);
    hero.update(&occupancy);
    assert_eq!(hero.movement_state, MovementState::Move);

    hero.animate(10.0);
    assert_eq!(hero.position, map.grid().tile_center(TileIdx::new(6, 5)));
    hero.update(&occupancy);
    assert_eq!(hero.movement_state, MovementState::ReachedNextTile);
}
