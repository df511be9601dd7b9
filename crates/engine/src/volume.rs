//! Monte-Carlo estimation of each model's sRGB gamut volume.
//!
//! The difference engine normalizes step size by the cube root of these
//! volumes; the constants baked into [`ColorModel::gamut_volume`] were
//! produced by a high-sample offline run of this estimator. Kept for
//! re-derivation (`chroma-trial volumes`), never invoked on the round
//! path.

use crate::model::ColorModel;
use chroma_trial_core::{in_gamut, Xorshift64};
use glam::DVec3;

/// Per-axis bounds of the native-coordinate box enclosing the sRGB gamut.
pub type BoundingBox = [[f64; 2]; 3];

/// Native-coordinate bounding box enclosing the sRGB gamut for `model`.
///
/// The boxes are deliberately loose; a looser box only costs samples, not
/// correctness, since out-of-gamut points are rejected.
pub fn bounding_box(model: ColorModel) -> BoundingBox {
    match model {
        ColorModel::Rgb => [[0.0, 1.0], [0.0, 1.0], [0.0, 1.0]],
        ColorModel::CieLab => [[0.0, 100.0], [-125.0, 125.0], [-125.0, 125.0]],
        ColorModel::OkLab => [[0.0, 1.0], [-0.4, 0.4], [-0.4, 0.4]],
        ColorModel::Jzazbz => [[0.0, 0.222], [-0.109, 0.129], [-0.185, 0.134]],
    }
}

/// Estimates the sRGB gamut volume in `model`'s native space.
///
/// Draws `samples` uniform points from the bounding box, converts each
/// back to sRGB, and scales the in-gamut fraction by the box volume.
/// Points the conversion rejects (quantizer domain) count as misses.
/// Stable to roughly three significant figures around 10^7 samples.
pub fn estimate_gamut_volume(model: ColorModel, samples: u64, rng: &mut Xorshift64) -> f64 {
    let bounds = bounding_box(model);
    let box_volume: f64 = bounds.iter().map(|[lo, hi]| hi - lo).product();

    let mut hits = 0u64;
    for _ in 0..samples {
        let p = DVec3::new(
            rng.next_range(bounds[0][0], bounds[0][1]),
            rng.next_range(bounds[1][0], bounds[1][1]),
            rng.next_range(bounds[2][0], bounds[2][1]),
        );
        if let Ok(srgb) = model.from_native(p) {
            if in_gamut(srgb) {
                hits += 1;
            }
        }
    }

    box_volume * hits as f64 / samples as f64
}
