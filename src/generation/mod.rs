//! # Generation Module
//!
//! Content generation for rooms: the fixed tile layout and monster encounters.
//!
//! Room layouts are deterministic; only encounter placement draws from the
//! session's random number generator.

pub mod encounters;
pub mod room_layout;

pub use encounters::*;
pub use room_layout::*;

use crate::config::GameConfig;
use crate::DungeonResult;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Trait for content generators.
///
/// Generators produce content from the configuration alone and can check that
/// content afterwards.
pub trait Generator<T> {
    /// Generates content for the given configuration.
    fn generate(&self, config: &GameConfig) -> DungeonResult<T>;

    /// Validates that the generated content meets requirements.
    fn validate(&self, content: &T, config: &GameConfig) -> DungeonResult<()>;

    /// Gets the generator type name for logging and debugging.
    fn generator_type(&self) -> &'static str;
}

/// Creates the session's seeded random number generator.
pub fn create_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn test_rng_is_reproducible() {
        let mut a = create_rng(12345);
        let mut b = create_rng(12345);
        let xs: Vec<u32> = (0..8).map(|_| a.gen()).collect();
        let ys: Vec<u32> = (0..8).map(|_| b.gen()).collect();
        assert_eq!(xs, ys);
    }
}
