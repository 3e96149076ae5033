//! Invariants that hold for any input.

use macroquad::math::Vec2;
use proptest::prelude::*;
use randomdungeon::{
    next_tile_towards, Character, GameConfig, Generator, OccupancyGrid, Projectile,
    RoomLayoutGenerator, TileGrid, TileIdx,
};

fn interior_tile() -> impl Strategy<Value = TileIdx> {
    (1..15i32, 1..11i32).prop_map(|(x, y)| TileIdx::new(x, y))
}

proptest! {
    #[test]
    fn next_tile_is_same_or_cardinal_neighbor(
        cx in -50..50i32, cy in -50..50i32, tx in -50..50i32, ty in -50..50i32
    ) {
        let current = TileIdx::new(cx, cy);
        let target = TileIdx::new(tx, ty);
        let next = next_tile_towards(current, target);
        prop_assert!(current.is_same_or_cardinal_neighbor(next));
        if current == target {
            prop_assert_eq!(next, current);
        } else {
            prop_assert_eq!(
                next.manhattan_distance(target) + 1,
                current.manhattan_distance(target)
            );
        }
    }

    #[test]
    fn next_tile_follows_dominant_axis(
        dx in -20..20i32, dy in -20..20i32
    ) {
        let current = TileIdx::new(0, 0);
        let next = next_tile_towards(current, TileIdx::new(dx, dy));
        if dx.abs() > dy.abs() {
            prop_assert_eq!(next, TileIdx::new(dx.signum(), 0));
        } else {
            prop_assert_eq!(next, TileIdx::new(0, dy.signum()));
        }
    }

    #[test]
    fn occupancy_is_a_pure_function(
        hero in interior_tile(),
        monsters in proptest::collection::vec(interior_tile(), 0..8)
    ) {
        let config = GameConfig::default();
        let map = RoomLayoutGenerator::new().generate(&config).unwrap();
        let first = OccupancyGrid::build(&map, Some(hero), monsters.iter().copied());
        let mut second = OccupancyGrid::build(&map, None, std::iter::empty());
        second.rebuild(&map, Some(hero), monsters.iter().copied());
        prop_assert_eq!(first, second);
    }

    #[test]
    fn fireball_direction_is_normalized(
        fx in 0.0..800.0f32, fy in 0.0..600.0f32, tx in 0.0..800.0f32, ty in 0.0..600.0f32
    ) {
        let from = Vec2::new(fx, fy);
        let to = Vec2::new(tx, ty);
        prop_assume!(from.distance(to) > 1.0e-3);
        let config = GameConfig::default();
        let fireball = Projectile::fireball(from, to, None, &config).unwrap();
        prop_assert!((fireball.direction.length() - 1.0).abs() < 1.0e-4);
        prop_assert!(fireball.direction.dot(to - from) > 0.0);
    }

    #[test]
    fn tile_centers_map_back_to_their_tile(x in 0..16i32, y in 0..12i32) {
        let grid = TileGrid::new(800, 600, 50.0);
        let idx = TileIdx::new(x, y);
        prop_assert_eq!(grid.tile_idx(grid.tile_center(idx)), idx);
        prop_assert_eq!(grid.tile_idx(grid.tile_top_left(idx)), idx);
    }

    #[test]
    fn snapping_is_idempotent(tile in interior_tile()) {
        let config = GameConfig::default();
        let mut hero = Character::hero(tile, &config);
        hero.position += Vec2::new(3.0, -2.0);
        hero.snap_to_current_tile();
        let once = hero.position;
        hero.snap_to_current_tile();
        prop_assert_eq!(hero.position, once);
        prop_assert!(hero.has_reached_tile(tile));
    }
}
