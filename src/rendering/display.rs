//! # Display Management
//!
//! Screen management and 2D graphics rendering functionality using macroquad.
//! Sprites are drawn as tinted rectangles; no texture assets are loaded.

use crate::game::{
    Drawable, GameEvent, GamePhase, GameState, MonsterKind, Sprite, TileKind, TileSprite,
};
use crate::rendering::UI;
use macroquad::prelude::*;

/// Macroquad display manager for the game.
///
/// Holds the message log and draws one frame of the game state at a time.
pub struct MacroquadDisplay {
    /// Message history
    pub messages: Vec<String>,
    /// Maximum number of messages to keep
    pub max_messages: usize,
    /// Menu screens and debug overlays
    pub ui: UI,
}

impl Default for MacroquadDisplay {
    fn default() -> Self {
        Self::new()
    }
}

impl MacroquadDisplay {
    /// Creates a display with an empty message log.
    ///
    /// # Examples
    ///
    /// ```
    /// use randomdungeon::MacroquadDisplay;
    ///
    /// let mut display = MacroquadDisplay::new();
    /// display.add_message("Hello".to_string());
    /// assert_eq!(display.messages.len(), 1);
    /// ```
    pub fn new() -> Self {
        Self {
            messages: Vec::new(),
            max_messages: 100,
            ui: UI::new(),
        }
    }

    /// Renders the complete frame: room, entities, status line, screen text,
    /// overlays and the message area.
    pub fn render_game(&self, game_state: &GameState, pointer: Vec2) {
        clear_background(BLACK);

        for drawable in game_state.drawables() {
            draw_sprite(&drawable);
        }

        match game_state.phase() {
            GamePhase::Play => {
                self.ui.render_overlays(game_state, pointer);
                self.ui.render_status(&game_state.stats());
                self.render_messages();
            }
            GamePhase::Menu | GamePhase::StartMenu | GamePhase::StartPlay => {
                self.ui.render_menu();
            }
            GamePhase::GameOver => {
                self.ui
                    .render_game_over(game_state.level, &game_state.statistics);
            }
        }
    }

    /// Adds a log line for every event that has one.
    pub fn add_events(&mut self, events: &[GameEvent]) {
        for message in events.iter().filter_map(GameEvent::message) {
            self.add_message(message);
        }
    }

    /// Adds a message to the message history.
    pub fn add_message(&mut self, message: String) {
        self.messages.push(message);

        if self.messages.len() > self.max_messages {
            self.messages.remove(0);
        }
    }

    /// The most recent `count` messages, oldest first.
    pub fn recent_messages(&self, count: usize) -> &[String] {
        let start = self.messages.len().saturating_sub(count);
        &self.messages[start..]
    }

    fn render_messages(&self) {
        let line_height = 18.0;
        let recent = self.recent_messages(3);
        if recent.is_empty() {
            return;
        }

        let area_y = screen_height() - line_height * recent.len() as f32 - 8.0;
        draw_rectangle(
            0.0,
            area_y,
            screen_width(),
            screen_height() - area_y,
            Color::new(0.0, 0.0, 0.0, 0.6),
        );
        for (i, message) in recent.iter().enumerate() {
            let y = area_y + line_height * (i as f32 + 1.0);
            draw_text(message, 10.0, y, 16.0, WHITE);
        }
    }
}

fn draw_sprite(drawable: &Drawable) {
    let color = sprite_color(drawable.sprite);
    let size = match drawable.sprite {
        Sprite::Tile { .. } => drawable.size,
        Sprite::Hero | Sprite::Monster(_) => drawable.size * 0.7,
        Sprite::Fireball => drawable.size * 0.5,
        Sprite::Laser => drawable.size,
    };
    let (width, height) = match drawable.sprite {
        Sprite::Laser => (size, size * 0.2),
        _ => (size, size),
    };

    draw_rectangle_ex(
        drawable.position.x,
        drawable.position.y,
        width,
        height,
        DrawRectangleParams {
            offset: vec2(0.5, 0.5),
            rotation: drawable.rotation,
            color,
        },
    );

    if let Sprite::Tile {
        variant:
            TileSprite::WallTopDoorway | TileSprite::WallLeftDoorway | TileSprite::WallRightDoorway,
        ..
    } = drawable.sprite
    {
        let inner = drawable.size * 0.4;
        draw_rectangle(
            drawable.position.x - inner / 2.0,
            drawable.position.y - inner / 2.0,
            inner,
            inner,
            Color::new(0.12, 0.1, 0.08, 1.0),
        );
    }
}

/// Fill color used for a sprite.
pub fn sprite_color(sprite: Sprite) -> Color {
    match sprite {
        Sprite::Tile { kind, variant } => match kind {
            TileKind::Floor if variant == TileSprite::CorridorFloor => {
                Color::new(0.35, 0.32, 0.28, 1.0)
            }
            TileKind::Floor => Color::new(0.45, 0.4, 0.33, 1.0),
            TileKind::Wall => Color::new(0.22, 0.2, 0.2, 1.0),
            TileKind::ClosedDoor => BROWN,
            TileKind::OpenDoor => Color::new(0.08, 0.06, 0.05, 1.0),
        },
        Sprite::Hero => SKYBLUE,
        Sprite::Monster(MonsterKind::Crab) => ORANGE,
        Sprite::Fireball => RED,
        Sprite::Laser => GREEN,
    }
}
