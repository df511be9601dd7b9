//! CIELAB (D65) conversions.
//!
//! Pipeline: sRGB -> linear RGB -> XYZ (D65) -> L*a*b* and back, with the
//! standard CIE companding function (delta = 6/29). The white point comes
//! from the same matrix pair as the XYZ stage, so achromatic inputs land
//! exactly on the L* axis and the full round trip stays within 1e-6 per
//! normalized channel.

use crate::color::{linear_to_srgb, srgb_to_linear, Srgb};
use crate::xyz::{linear_from_xyz, xyz_from_linear, WHITE_X, WHITE_Y, WHITE_Z};

/// CIELAB coordinate. For in-gamut sRGB, L* spans [0, 100] and a*, b*
/// stay roughly within [-110, 95].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CieLab {
    pub l: f64,
    pub a: f64,
    pub b: f64,
}

impl CieLab {
    /// Euclidean distance to another Lab coordinate (CIE76 delta E).
    pub fn distance(self, other: CieLab) -> f64 {
        let dl = self.l - other.l;
        let da = self.a - other.a;
        let db = self.b - other.b;
        (dl * dl + da * da + db * db).sqrt()
    }
}

/// (6/29)^3, the companding breakpoint.
const EPSILON: f64 = 216.0 / 24389.0;
/// 24389/27, the linear-segment slope.
const KAPPA: f64 = 24389.0 / 27.0;

fn lab_f(t: f64) -> f64 {
    if t > EPSILON {
        t.cbrt()
    } else {
        (KAPPA * t + 16.0) / 116.0
    }
}

fn lab_f_inv(t: f64) -> f64 {
    let t3 = t * t * t;
    if t3 > EPSILON {
        t3
    } else {
        (116.0 * t - 16.0) / KAPPA
    }
}

/// Converts normalized sRGB to CIELAB (D65).
pub fn srgb_to_lab(c: Srgb) -> CieLab {
    let (x, y, z) = xyz_from_linear(srgb_to_linear(c));
    let fx = lab_f(x / WHITE_X);
    let fy = lab_f(y / WHITE_Y);
    let fz = lab_f(z / WHITE_Z);
    CieLab {
        l: 116.0 * fy - 16.0,
        a: 500.0 * (fx - fy),
        b: 200.0 * (fy - fz),
    }
}

/// Converts CIELAB (D65) back to normalized sRGB.
///
/// The result is not clamped: coordinates outside the sRGB gamut map to
/// components outside [0, 1], which the caller detects with
/// [`in_gamut`](crate::in_gamut).
pub fn lab_to_srgb(c: CieLab) -> Srgb {
    let fy = (c.l + 16.0) / 116.0;
    let fx = fy + c.a / 500.0;
    let fz = fy - c.b / 200.0;
    let x = lab_f_inv(fx) * WHITE_X;
    let y = lab_f_inv(fy) * WHITE_Y;
    let z = lab_f_inv(fz) * WHITE_Z;
    linear_to_srgb(linear_from_xyz(x, y, z))
}
