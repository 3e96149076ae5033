//! # User Interface Elements
//!
//! Screen text for the menu and game-over phases, the status line, and the
//! debug overlays drawn over a room.

use crate::game::{Character, DoorState, GameState, GameStatistics, RoomStats, TileIdx};
use crate::utils::TileGrid;
use macroquad::prelude::*;

/// Text and overlay renderer.
#[derive(Debug, Clone)]
pub struct UI {
    /// Font size of the status line
    pub font_size: f32,
    /// Font size of titles on the menu and game-over screens
    pub title_size: f32,
}

impl Default for UI {
    fn default() -> Self {
        Self::new()
    }
}

impl UI {
    /// Creates a new UI instance.
    pub fn new() -> Self {
        Self {
            font_size: 20.0,
            title_size: 48.0,
        }
    }

    /// Title screen text over the menu room.
    pub fn render_menu(&self) {
        self.dim_screen();
        self.centered_text("RANDOM DUNGEON", -40.0, self.title_size, GOLD);
        self.centered_text(
            "Click or press Enter to start",
            10.0,
            self.font_size,
            WHITE,
        );
        self.centered_text(
            "Click a tile to walk, click a monster to throw a fireball",
            40.0,
            self.font_size * 0.8,
            LIGHTGRAY,
        );
        self.centered_text("Esc to quit", 65.0, self.font_size * 0.8, LIGHTGRAY);
    }

    /// Game-over screen with the run's statistics.
    pub fn render_game_over(&self, level: u32, statistics: &GameStatistics) {
        self.dim_screen();
        self.centered_text("GAME OVER", -60.0, self.title_size, RED);

        let lines = [
            format!("Reached room {}", level),
            format!("Monsters defeated: {}", statistics.monsters_defeated),
            format!(
                "Fireballs: {} thrown, {} hit",
                statistics.fireballs_thrown, statistics.fireball_hits
            ),
            "Click or press Enter to return to the menu".to_string(),
        ];
        for (i, line) in lines.iter().enumerate() {
            self.centered_text(line, i as f32 * 26.0, self.font_size, WHITE);
        }
    }

    /// Status line in the top-left corner.
    pub fn render_status(&self, stats: &RoomStats) {
        draw_text(&status_line(stats), 10.0, 20.0, self.font_size, WHITE);
    }

    /// Hover cursor plus whichever debug overlays are enabled.
    pub fn render_overlays(&self, game_state: &GameState, pointer: Vec2) {
        let grid = game_state.room.grid();
        let flags = &game_state.config.debug;

        if flags.render_occupancy {
            for (idx, object) in game_state.room.occupancy.iter() {
                let top_left = grid.tile_top_left(idx);
                draw_text(
                    object.label(),
                    top_left.x + 4.0,
                    top_left.y + 16.0,
                    16.0,
                    YELLOW,
                );
            }
        }

        if let Some(encounter) = game_state.room.encounter() {
            let characters = std::iter::once(&encounter.hero).chain(encounter.monsters.iter());
            for character in characters {
                if flags.render_character_tiles {
                    draw_character_tiles(grid, character);
                }
                if flags.render_collision_boxes {
                    draw_rect_outline(character.collision_box, MAGENTA);
                }
            }
            if flags.render_collision_boxes {
                let projectiles = encounter.fireball.iter().chain(encounter.lasers.iter());
                for projectile in projectiles {
                    draw_rect_outline(projectile.collision_box, MAGENTA);
                }
            }
        }

        if let Some(hovered) = game_state.tile_at_pixel(pointer) {
            draw_tile_cursor(grid, hovered, WHITE, 1.0);
            if flags.render_stats {
                draw_text(
                    &format!("FPS {}  tile {}", get_fps(), hovered),
                    10.0,
                    40.0,
                    self.font_size * 0.8,
                    LIGHTGRAY,
                );
            }
        }
    }

    fn dim_screen(&self) {
        draw_rectangle(
            0.0,
            0.0,
            screen_width(),
            screen_height(),
            Color::new(0.0, 0.0, 0.0, 0.55),
        );
    }

    fn centered_text(&self, text: &str, offset_y: f32, size: f32, color: Color) {
        let dimensions = measure_text(text, None, size as u16, 1.0);
        draw_text(
            text,
            (screen_width() - dimensions.width) / 2.0,
            screen_height() / 2.0 + offset_y,
            size,
            color,
        );
    }
}

/// Text of the status line.
///
/// # Examples
///
/// ```
/// use randomdungeon::{status_line, DoorState, GamePhase, RoomStats};
///
/// let stats = RoomStats {
///     phase: GamePhase::Play,
///     level: 2,
///     hero_life: Some(1),
///     monster_life: vec![3, 1],
///     doors: DoorState::Closed,
/// };
/// assert_eq!(status_line(&stats), "Room 2  Life 1  Monsters 3 1  Doors closed");
/// ```
pub fn status_line(stats: &RoomStats) -> String {
    let monsters = if stats.monster_life.is_empty() {
        "none".to_string()
    } else {
        stats
            .monster_life
            .iter()
            .map(u32::to_string)
            .collect::<Vec<_>>()
            .join(" ")
    };
    let doors = match stats.doors {
        DoorState::Closed => "closed",
        DoorState::Open => "open",
    };
    format!(
        "Room {}  Life {}  Monsters {}  Doors {}",
        stats.level,
        stats.hero_life.unwrap_or(0),
        monsters,
        doors
    )
}

fn draw_character_tiles(grid: &TileGrid, character: &Character) {
    draw_tile_cursor(grid, character.current_tile_idx, GREEN, 2.0);
    if character.next_tile_idx != character.current_tile_idx {
        draw_tile_cursor(grid, character.next_tile_idx, YELLOW, 2.0);
    }
    if let Some(target) = character.target_tile_idx {
        draw_tile_cursor(grid, target, RED, 2.0);
    }
}

fn draw_tile_cursor(grid: &TileGrid, idx: TileIdx, color: Color, thickness: f32) {
    draw_rect_outline_thick(grid.tile_rect(idx), color, thickness);
}

fn draw_rect_outline(rect: Rect, color: Color) {
    draw_rect_outline_thick(rect, color, 1.0);
}

fn draw_rect_outline_thick(rect: Rect, color: Color, thickness: f32) {
    draw_rectangle_lines(rect.x, rect.y, rect.w, rect.h, thickness, color);
}
