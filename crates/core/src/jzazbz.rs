//! JzAzBz conversions (Safdar et al., Optics Express 2017).
//!
//! Pipeline: sRGB -> linear RGB -> XYZ (D65) scaled to an absolute
//! luminance of 203 cd/m² for diffuse white -> pre-adapted X'Y' -> LMS ->
//! SMPTE ST 2084 perceptual quantizer -> (Iz, az, bz) -> Jz. The
//! quantizer is only defined for non-negative signals, so arbitrary
//! coordinates (a perturbed triple, a point sampled from a bounding box)
//! can fall outside the invertible domain; those cases report
//! [`ColorError::ConversionFailed`] instead of propagating NaN.
//!
//! For in-gamut sRGB under the 203 cd/m² convention, Jz spans [0, 0.222].

use crate::color::{linear_to_srgb, srgb_to_linear, Srgb};
use crate::error::ColorError;
use crate::xyz::{linear_from_xyz, xyz_from_linear};

/// JzAzBz perceptual coordinate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Jzazbz {
    pub jz: f64,
    pub az: f64,
    pub bz: f64,
}

impl Jzazbz {
    /// Euclidean distance to another JzAzBz coordinate.
    pub fn distance(self, other: Jzazbz) -> f64 {
        let dj = self.jz - other.jz;
        let da = self.az - other.az;
        let db = self.bz - other.bz;
        (dj * dj + da * da + db * db).sqrt()
    }
}

const SPACE: &str = "JzAzBz";

/// Absolute luminance assigned to diffuse white, cd/m².
const WHITE_LUMINANCE: f64 = 203.0;

const B: f64 = 1.15;
const G: f64 = 0.66;
const D: f64 = -0.56;
const D0: f64 = 1.629_549_953_282_156_6e-11;

// ST 2084 constants, with the JzAzBz exponent tweak rho = 1.7 * m2.
const PQ_N: f64 = 2610.0 / 16384.0;
const PQ_P: f64 = 1.7 * 2523.0 / 32.0;
const PQ_C1: f64 = 3424.0 / 4096.0;
const PQ_C2: f64 = 2413.0 / 128.0;
const PQ_C3: f64 = 2392.0 / 128.0;

/// Forward perceptual quantizer, defined for `x >= 0`.
fn pq(x: f64) -> f64 {
    let v = (x / 10_000.0).powf(PQ_N);
    ((PQ_C1 + PQ_C2 * v) / (1.0 + PQ_C3 * v)).powf(PQ_P)
}

/// Inverse perceptual quantizer. Fails when the code value implies a
/// negative signal.
fn pq_inv(y: f64) -> Result<f64, ColorError> {
    if y < 0.0 {
        return Err(ColorError::ConversionFailed { space: SPACE });
    }
    let t = y.powf(1.0 / PQ_P);
    let v = (t - PQ_C1) / (PQ_C2 - PQ_C3 * t);
    if v < 0.0 {
        return Err(ColorError::ConversionFailed { space: SPACE });
    }
    Ok(10_000.0 * v.powf(1.0 / PQ_N))
}

/// Converts normalized sRGB to JzAzBz.
///
/// Fails only when a pre-quantizer LMS component is negative, which
/// cannot arise from components in [0, 1].
pub fn srgb_to_jzazbz(c: Srgb) -> Result<Jzazbz, ColorError> {
    let lin = srgb_to_linear(c);
    let (x, y, z) = xyz_from_linear(lin);
    let (x, y, z) = (
        x * WHITE_LUMINANCE,
        y * WHITE_LUMINANCE,
        z * WHITE_LUMINANCE,
    );

    let xp = B * x - (B - 1.0) * z;
    let yp = G * y - (G - 1.0) * x;

    let l = 0.414_789_72 * xp + 0.579_999 * yp + 0.014_648 * z;
    let m = -0.201_510_0 * xp + 1.120_649 * yp + 0.053_100_8 * z;
    let s = -0.016_600_8 * xp + 0.264_800 * yp + 0.668_479_9 * z;
    if l < 0.0 || m < 0.0 || s < 0.0 {
        return Err(ColorError::ConversionFailed { space: SPACE });
    }

    let lp = pq(l);
    let mp = pq(m);
    let sp = pq(s);

    let iz = 0.5 * (lp + mp);
    let az = 3.524_000 * lp - 4.066_708 * mp + 0.542_708 * sp;
    let bz = 0.199_076 * lp + 1.096_799 * mp - 1.295_875 * sp;
    let jz = ((1.0 + D) * iz) / (1.0 + D * iz) - D0;

    Ok(Jzazbz { jz, az, bz })
}

/// Converts a JzAzBz coordinate back to normalized sRGB, unclamped.
///
/// Fails for coordinates outside the quantizer's domain (strongly
/// negative Jz, or chroma implying a negative LMS signal). Out-of-gamut
/// but invertible coordinates produce components outside [0, 1] for the
/// caller's gamut check.
pub fn jzazbz_to_srgb(c: Jzazbz) -> Result<Srgb, ColorError> {
    let q = c.jz + D0;
    let denom = 1.0 + D - D * q;
    if denom <= 0.0 {
        return Err(ColorError::ConversionFailed { space: SPACE });
    }
    let iz = q / denom;

    let lp = iz + 0.138_605_043_271_539_3 * c.az + 0.058_047_316_156_118_9 * c.bz;
    let mp = iz - 0.138_605_043_271_539_3 * c.az - 0.058_047_316_156_118_9 * c.bz;
    let sp = iz - 0.096_019_242_026_319_0 * c.az - 0.811_891_896_056_039_0 * c.bz;

    let l = pq_inv(lp)?;
    let m = pq_inv(mp)?;
    let s = pq_inv(sp)?;

    let xp = 1.924_226_435_787_606_7 * l - 1.004_792_312_595_365_7 * m
        + 0.037_651_404_030_618_0 * s;
    let yp = 0.350_316_762_094_999_1 * l + 0.726_481_193_931_655_2 * m
        - 0.065_384_422_948_085_0 * s;
    let zp = -0.090_982_810_982_847_6 * l - 0.312_728_290_523_073_9 * m
        + 1.522_766_561_305_260_3 * s;

    let x = (xp + (B - 1.0) * zp) / B;
    let y = (yp + (G - 1.0) * x) / G;
    let z = zp;

    Ok(linear_to_srgb(linear_from_xyz(
        x / WHITE_LUMINANCE,
        y / WHITE_LUMINANCE,
        z / WHITE_LUMINANCE,
    )))
}
