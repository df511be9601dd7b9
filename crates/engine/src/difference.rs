//! The perceptual difference engine.
//!
//! Takes a base color, a color model, and a difficulty; returns a
//! gamut-valid color displaced from the base by `difficulty` units of the
//! model's normalized step. Conversion failures and gamut misses consume
//! retry attempts; an exhausted budget falls back to a raw byte-space
//! jitter, so the engine is total — every valid input yields a displayable
//! color and no error ever reaches the caller.
//!
//! The engine is synchronous and stateless between calls. The injected
//! generator is the only shared resource; concurrent callers hold
//! independent instances.

use crate::model::ColorModel;
use chroma_trial_core::{in_gamut, random_unit_vector, Rgb8, Srgb, Xorshift64};

/// Retry budget for sampling a gamut-valid displacement.
pub const MAX_ATTEMPTS: u32 = 50;

/// Result of a single difference computation, with diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Difference {
    /// The produced color.
    pub color: Rgb8,
    /// Sampling attempts consumed.
    pub attempts: u32,
    /// Whether the byte-jitter fallback produced the color.
    pub fallback: bool,
}

/// Produces a color perceptibly different from `base` by `difficulty`
/// units of `model`'s normalized step, in-gamut and byte-valued.
pub fn perceptual_difference(
    base: Rgb8,
    model: ColorModel,
    difficulty: f64,
    rng: &mut Xorshift64,
) -> Rgb8 {
    perceptual_difference_detailed(base, model, difficulty, rng, MAX_ATTEMPTS).color
}

/// Same as [`perceptual_difference`], with an explicit attempt budget and
/// diagnostics. A budget of zero goes straight to the fallback.
pub fn perceptual_difference_detailed(
    base: Rgb8,
    model: ColorModel,
    difficulty: f64,
    rng: &mut Xorshift64,
    max_attempts: u32,
) -> Difference {
    let base_srgb = Srgb::from_bytes(base);
    let step = difficulty * model.step_scale();

    for attempt in 1..=max_attempts {
        // A failed conversion burns the attempt, same as a gamut miss.
        let Ok(native) = model.to_native(base_srgb) else {
            continue;
        };
        let candidate = native + random_unit_vector(rng) * step;
        let Ok(srgb) = model.from_native(candidate) else {
            continue;
        };
        if in_gamut(srgb) {
            return Difference {
                color: srgb.to_bytes(),
                attempts: attempt,
                fallback: false,
            };
        }
    }

    Difference {
        color: fallback_jitter(base, difficulty, rng),
        attempts: max_attempts,
        fallback: true,
    }
}

/// Raw byte-space jitter used once the attempt budget is exhausted.
///
/// Trades model fidelity for availability: always lands in [0, 255], so
/// a round can always be displayed.
fn fallback_jitter(base: Rgb8, difficulty: f64, rng: &mut Xorshift64) -> Rgb8 {
    let d = random_unit_vector(rng) * difficulty;
    Rgb8::new(
        clamp_channel(base.r as f64 + d.x),
        clamp_channel(base.g as f64 + d.y),
        clamp_channel(base.b as f64 + d.z),
    )
}

fn clamp_channel(v: f64) -> u8 {
    v.clamp(0.0, 255.0).round() as u8
}
