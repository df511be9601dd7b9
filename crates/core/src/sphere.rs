//! Uniform random directions on the unit sphere.

use crate::prng::Xorshift64;
use glam::DVec3;

/// Smallest vector magnitude accepted before resampling.
const MIN_NORM: f64 = 1e-12;

/// Samples a direction uniformly distributed over the sphere surface.
///
/// Each component is an independent standard normal draw; normalizing the
/// triple makes the direction isotropic, so no perceptual axis is
/// privileged. Per-axis uniform sampling in [-1, 1] would concentrate
/// directions toward the cube corners and bias the perturbation. The
/// degenerate near-zero vector is resampled rather than normalized.
pub fn random_unit_vector(rng: &mut Xorshift64) -> DVec3 {
    loop {
        let v = DVec3::new(
            rng.next_gaussian(),
            rng.next_gaussian(),
            rng.next_gaussian(),
        );
        let len = v.length();
        if len > MIN_NORM {
            return v / len;
        }
    }
}
