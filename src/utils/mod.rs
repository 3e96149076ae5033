//! # Utilities Module
//!
//! Grid geometry helpers shared by the game core and the presentation layer.

pub mod grid;

pub use grid::*;
