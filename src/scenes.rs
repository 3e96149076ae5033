//! # Scene Management System
//!
//! Runs the frame loop: one input poll, one logic tick, one animation pass
//! and one render pass per frame. Which screen is shown follows the game
//! state's phase.

use crate::config::TARGET_FPS;
use crate::game::{GameEvent, GamePhase, GameState};
use crate::input::{InputHandler, PlayerInput};
use crate::rendering::MacroquadDisplay;
use crate::DungeonResult;
use log::info;
use macroquad::prelude::*;

/// The main scene manager that drives the game state frame by frame.
pub struct SceneManager {
    game_state: GameState,
    display: MacroquadDisplay,
    input_handler: InputHandler,
}

impl SceneManager {
    /// Creates a scene manager around a freshly built game state.
    pub fn new(game_state: GameState, input_handler: InputHandler) -> Self {
        Self {
            game_state,
            display: MacroquadDisplay::new(),
            input_handler,
        }
    }

    /// Runs the main loop until the player quits from the menu.
    pub async fn run(&mut self) -> DungeonResult<()> {
        loop {
            // Stalled frames count as at most three.
            let time_delta_in_secs = get_frame_time().min(3.0 / TARGET_FPS as f32);

            if let Some(input) = self.input_handler.get_input() {
                if wants_exit(self.game_state.phase(), input) {
                    info!("Player quit the game");
                    break;
                }
                let events = self.game_state.handle_input(input);
                self.report(&events);
            }

            let events = self.game_state.update(time_delta_in_secs)?;
            self.report(&events);
            self.game_state.animate(time_delta_in_secs);

            self.display
                .render_game(&self.game_state, self.input_handler.pointer());
            next_frame().await;
        }
        Ok(())
    }

    fn report(&mut self, events: &[GameEvent]) {
        for event in events {
            if let GameEvent::RoomEntered { level: 1, .. } = event {
                self.display.messages.clear();
            }
        }
        self.display.add_events(events);
    }
}

/// Whether an input closes the application instead of reaching the game state.
pub fn wants_exit(phase: GamePhase, input: PlayerInput) -> bool {
    input == PlayerInput::Quit && matches!(phase, GamePhase::Menu | GamePhase::GameOver)
}

#[cfg(test)]
mod tests {
    use super::*;
    use macroquad::math::Vec2;

    #[test]
    fn test_escape_during_play_does_not_exit() {
        assert!(!wants_exit(GamePhase::Play, PlayerInput::Quit));
        assert!(wants_exit(GamePhase::Menu, PlayerInput::Quit));
        assert!(wants_exit(GamePhase::GameOver, PlayerInput::Quit));
        assert!(!wants_exit(GamePhase::Menu, PlayerInput::Click(Vec2::ZERO)));
    }
}
