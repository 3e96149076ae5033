//! Loading gameplay settings from JSON files.

use randomdungeon::{DungeonError, GameConfig};
use std::io::Write;
use tempfile::NamedTempFile;

fn write_config(text: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(text.as_bytes()).unwrap();
    file
}

#[test]
fn test_partial_file_keeps_defaults() {
    let file = write_config(r#"{ "hero_speed": 320.0, "monsters_per_level": 2 }"#);
    let config = GameConfig::load(file.path()).unwrap();
    assert_eq!(config.hero_speed, 320.0);
    assert_eq!(config.monsters_per_level, 2);
    assert_eq!(config.tile_radius, GameConfig::default().tile_radius);
    assert!(!config.debug.render_occupancy);
}

#[test]
fn test_debug_flags_from_file() {
    let file = write_config(r#"{ "debug": { "render_occupancy": true } }"#);
    let config = GameConfig::load(file.path()).unwrap();
    assert!(config.debug.render_occupancy);
    assert!(!config.debug.render_stats);
}

#[test]
fn test_written_config_loads_back() {
    let original = GameConfig {
        corridor_exits: true,
        laser_fire_probability: 0.25,
        ..GameConfig::default()
    };
    let file = write_config(&original.to_json().unwrap());
    assert_eq!(GameConfig::load(file.path()).unwrap(), original);
}

#[test]
fn test_malformed_json_is_a_serde_error() {
    let file = write_config("{ hero_speed: fast }");
    assert!(matches!(
        GameConfig::load(file.path()),
        Err(DungeonError::Serde(_))
    ));
}

#[test]
fn test_invalid_values_are_rejected() {
    let file = write_config(r#"{ "laser_fire_probability": 1.5 }"#);
    assert!(matches!(
        GameConfig::load(file.path()),
        Err(DungeonError::InvalidConfig(_))
    ));
}

#[test]
fn test_missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    assert!(matches!(
        GameConfig::load(dir.path().join("missing.json")),
        Err(DungeonError::Io(_))
    ));
}
