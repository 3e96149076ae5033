//! # Rendering Module
//!
//! Macroquad presentation layer: draws the game state's draw list, the status
//! line, menu screens and debug overlays.

pub mod display;
pub mod ui;

pub use display::*;
pub use ui::*;
