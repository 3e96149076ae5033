//! # Input Module
//!
//! Polls mouse and keyboard through macroquad and turns them into player inputs
//! the game state understands.

use crate::config::DebugFlags;
use macroquad::prelude::*;

/// Player input types that can be processed by the game state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PlayerInput {
    /// Left click at a pixel position on the render surface
    Click(Vec2),
    /// Start a run from the menu, or leave the game-over screen
    Confirm,
    /// Abandon the run, or leave the game from the menu
    Quit,
    /// Flip one of the debug overlays
    ToggleOverlay(Overlay),
}

/// Debug overlays that can be switched at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    Occupancy,
    CharacterTiles,
    CollisionBoxes,
    Stats,
}

impl Overlay {
    /// Flips the matching flag and returns its new value.
    ///
    /// # Examples
    ///
    /// ```
    /// use randomdungeon::{config::DebugFlags, Overlay};
    ///
    /// let mut flags = DebugFlags::default();
    /// assert!(Overlay::Stats.toggle(&mut flags));
    /// assert!(flags.render_stats);
    /// ```
    pub fn toggle(self, flags: &mut DebugFlags) -> bool {
        let flag = match self {
            Overlay::Occupancy => &mut flags.render_occupancy,
            Overlay::CharacterTiles => &mut flags.render_character_tiles,
            Overlay::CollisionBoxes => &mut flags.render_collision_boxes,
            Overlay::Stats => &mut flags.render_stats,
        };
        *flag = !*flag;
        *flag
    }
}

/// Input handler for processing player commands.
#[derive(Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    /// Creates a new input handler.
    pub fn new() -> Self {
        Self
    }

    /// Gets the input of this frame, if any.
    ///
    /// At most one input is reported per frame; keys win over the mouse.
    pub fn get_input(&self) -> Option<PlayerInput> {
        if is_key_pressed(KeyCode::Escape) {
            return Some(PlayerInput::Quit);
        }
        if is_key_pressed(KeyCode::Enter) || is_key_pressed(KeyCode::Space) {
            return Some(PlayerInput::Confirm);
        }

        let overlays = [
            (KeyCode::F1, Overlay::Occupancy),
            (KeyCode::F2, Overlay::CharacterTiles),
            (KeyCode::F3, Overlay::CollisionBoxes),
            (KeyCode::F4, Overlay::Stats),
        ];
        if let Some((_, overlay)) = overlays.iter().find(|(key, _)| is_key_pressed(*key)) {
            return Some(PlayerInput::ToggleOverlay(*overlay));
        }

        if is_mouse_button_pressed(MouseButton::Left) {
            return Some(PlayerInput::Click(self.pointer()));
        }

        None
    }

    /// Current mouse pointer position in pixels.
    pub fn pointer(&self) -> Vec2 {
        let (x, y) = mouse_position();
        Vec2::new(x, y)
    }
}
