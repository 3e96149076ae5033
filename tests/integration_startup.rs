//! Integration test to ensure the game can start up without errors.

use randomdungeon::{
    DungeonError, DungeonResult, GameConfig, GamePhase, GameState, PlayerInput, Sprite,
};

#[test]
fn test_basic_startup() -> DungeonResult<()> {
    let mut game_state = GameState::new(GameConfig::default(), 12345)?;
    assert_eq!(game_state.phase(), GamePhase::StartMenu);
    assert_eq!(game_state.seed(), 12345);
    assert_eq!(game_state.level, 0);

    game_state.update(1.0 / 60.0)?;
    assert_eq!(game_state.phase(), GamePhase::Menu);

    // The menu room is drawable before any run starts
    let drawables = game_state.drawables();
    assert!(!drawables.is_empty());
    assert!(drawables.iter().all(|d| matches!(d.sprite, Sprite::Tile { .. })));

    game_state.handle_input(PlayerInput::Confirm);
    game_state.update(1.0 / 60.0)?;
    assert_eq!(game_state.phase(), GamePhase::Play);
    assert!(game_state.hero().is_some());
    assert!(game_state.drawables().iter().any(|d| d.sprite == Sprite::Hero));

    Ok(())
}

#[test]
fn test_startup_requires_render_surface() {
    let config = GameConfig {
        surface_width: 0,
        surface_height: 0,
        ..GameConfig::default()
    };
    let err = GameState::new(config, 1).unwrap_err();
    assert!(matches!(err, DungeonError::InvalidState(_)));
    assert!(err.to_string().contains("Render surface"));
}

#[test]
fn test_startup_rejects_tiny_surface() {
    let config = GameConfig {
        surface_width: 100,
        surface_height: 100,
        ..GameConfig::default()
    };
    assert!(matches!(
        GameState::new(config, 1),
        Err(DungeonError::InvalidConfig(_))
    ));
}

#[test]
fn test_other_surface_sizes_give_other_grids() -> DungeonResult<()> {
    let config = GameConfig {
        surface_width: 1000,
        surface_height: 700,
        ..GameConfig::default()
    };
    let game_state = GameState::new(config, 1)?;
    let grid = game_state.room.grid();
    assert_eq!((grid.width, grid.height), (20, 14));
    Ok(())
}
