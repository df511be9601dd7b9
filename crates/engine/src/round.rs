//! Game-round generation.
//!
//! A round is one 4×4 grid: every cell shows the base color except one,
//! which shows the perturbed color. Rounds are value objects — generating
//! one consumes PRNG state but the round itself carries no generator, so a
//! persisted round replays identically.

use crate::difference::perceptual_difference;
use crate::difficulty::difficulty_for_level;
use crate::model::ColorModel;
use chroma_trial_core::{Rgb8, Srgb, Xorshift64};
use serde::{Deserialize, Serialize};

/// Cells per side of the round grid.
pub const GRID_SIZE: usize = 4;

/// Wrong answers a player may give before the game ends.
pub const MAX_WRONG_ANSWERS: u32 = 3;

/// Draws a base color uniformly from the sRGB byte cube.
pub fn random_base_color(rng: &mut Xorshift64) -> Rgb8 {
    Srgb {
        r: rng.next_f64(),
        g: rng.next_f64(),
        b: rng.next_f64(),
    }
    .to_bytes()
}

/// One generated round: everything needed to render the grid and score
/// the answer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Round {
    /// 1-based level the round was generated for.
    pub level: u32,
    /// Color shown in every undisturbed cell.
    pub base_color: Rgb8,
    /// Color shown in the odd cell out.
    pub changed_color: Rgb8,
    /// Model the perturbation was computed in.
    pub color_model: ColorModel,
    /// (column, row) of the odd cell, each in [0, GRID_SIZE).
    pub changed_position: (usize, usize),
    /// Difficulty the level mapped to.
    pub difficulty: f64,
}

impl Round {
    /// Generates a round for `level`, drawing the color model uniformly
    /// from the registry.
    pub fn generate(level: u32, rng: &mut Xorshift64) -> Round {
        let model = ColorModel::ALL[rng.next_usize(ColorModel::ALL.len())];
        Round::generate_with_model(level, model, rng)
    }

    /// Generates a round for `level` in a fixed color model.
    pub fn generate_with_model(level: u32, model: ColorModel, rng: &mut Xorshift64) -> Round {
        let difficulty = difficulty_for_level(level);
        let base_color = random_base_color(rng);
        let changed_color = perceptual_difference(base_color, model, difficulty, rng);
        let changed_position = (rng.next_usize(GRID_SIZE), rng.next_usize(GRID_SIZE));
        Round {
            level,
            base_color,
            changed_color,
            color_model: model,
            changed_position,
            difficulty,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_base_color_covers_the_cube() {
        // Coarse coverage check: over many draws every channel should hit
        // both the low and high quartile of the byte range.
        let mut rng = Xorshift64::new(42);
        let (mut low, mut high) = ([false; 3], [false; 3]);
        for _ in 0..1_000 {
            let c = random_base_color(&mut rng);
            for (i, v) in [c.r, c.g, c.b].into_iter().enumerate() {
                low[i] |= v < 64;
                high[i] |= v > 192;
            }
        }
        assert_eq!(low, [true; 3]);
        assert_eq!(high, [true; 3]);
    }

    #[test]
    fn generate_produces_valid_position_and_difficulty() {
        let mut rng = Xorshift64::new(42);
        for level in 1..=20 {
            let round = Round::generate(level, &mut rng);
            assert!(round.changed_position.0 < GRID_SIZE);
            assert!(round.changed_position.1 < GRID_SIZE);
            assert!((round.difficulty - difficulty_for_level(level)).abs() < f64::EPSILON);
            assert_eq!(round.level, level);
        }
    }

    #[test]
    fn generate_with_model_pins_the_model() {
        let mut rng = Xorshift64::new(42);
        for model in ColorModel::ALL {
            let round = Round::generate_with_model(3, model, &mut rng);
            assert_eq!(round.color_model, model);
        }
    }

    #[test]
    fn generate_draws_every_model_eventually() {
        let mut rng = Xorshift64::new(42);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..200 {
            seen.insert(Round::generate(1, &mut rng).color_model);
        }
        assert_eq!(seen.len(), ColorModel::ALL.len());
    }

    #[test]
    fn same_seed_reproduces_the_same_round() {
        let mut rng_a = Xorshift64::new(7);
        let mut rng_b = Xorshift64::new(7);
        assert_eq!(Round::generate(5, &mut rng_a), Round::generate(5, &mut rng_b));
    }

    #[test]
    fn round_json_round_trip() {
        let mut rng = Xorshift64::new(42);
        let round = Round::generate(2, &mut rng);
        let json = serde_json::to_string(&round).unwrap();
        let restored: Round = serde_json::from_str(&json).unwrap();
        assert_eq!(round, restored);
    }

    #[test]
    fn round_json_shape_is_stable() {
        let round = Round {
            level: 1,
            base_color: Rgb8::new(10, 20, 30),
            changed_color: Rgb8::new(11, 21, 31),
            color_model: ColorModel::OkLab,
            changed_position: (2, 3),
            difficulty: 1.0,
        };
        let value = serde_json::to_value(round).unwrap();
        assert_eq!(value["base_color"], serde_json::json!([10, 20, 30]));
        assert_eq!(value["color_model"], "Oklab");
        assert_eq!(value["changed_position"], serde_json::json!([2, 3]));
    }
}
