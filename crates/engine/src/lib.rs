#![deny(unsafe_code)]
//! Perceptual difference engine for the chroma-trial experiment.
//!
//! Given a base sRGB color, a perceptual color model, and a difficulty
//! scalar, produces a gamut-valid color whose perceptual distance from
//! the base is controlled by difficulty and comparable across models.
//! Also provides the color-model registry, Monte-Carlo gamut-volume
//! estimation, the level-to-difficulty curve, and game-round generation.

pub mod difference;
pub mod difficulty;
pub mod model;
pub mod round;
pub mod volume;

pub use difference::{
    perceptual_difference, perceptual_difference_detailed, Difference, MAX_ATTEMPTS,
};
pub use difficulty::difficulty_for_level;
pub use model::ColorModel;
pub use round::{random_base_color, Round, GRID_SIZE, MAX_WRONG_ANSWERS};
pub use volume::estimate_gamut_volume;
