//! Shared CIE XYZ (D65) pipeline stage for the Lab-family conversions.
//!
//! The matrix pair is the CSS Color 4 high-precision sRGB/XYZ pair; the
//! exposed white point is the image of linear white under the forward
//! matrix, so downstream spaces that normalize by the white point map
//! achromatic colors exactly onto their lightness axis.

use crate::color::LinearRgb;

/// D65 white point: `xyz_from_linear` applied to linear RGB white.
pub(crate) const WHITE_X: f64 = 0.950_455_927_051_671_6;
pub(crate) const WHITE_Y: f64 = 1.0;
pub(crate) const WHITE_Z: f64 = 1.089_057_750_759_878_5;

/// Converts linear RGB to CIE XYZ (D65, Y = 1 white).
pub(crate) fn xyz_from_linear(c: LinearRgb) -> (f64, f64, f64) {
    let x = 0.412_390_799_265_959_34 * c.r + 0.357_584_339_383_878 * c.g
        + 0.180_480_788_401_834_3 * c.b;
    let y = 0.212_639_005_871_510_27 * c.r + 0.715_168_678_767_756 * c.g
        + 0.072_192_315_360_733_71 * c.b;
    let z = 0.019_330_818_715_591_82 * c.r + 0.119_194_779_794_625_98 * c.g
        + 0.950_532_152_249_660_7 * c.b;
    (x, y, z)
}

/// Converts CIE XYZ (D65) back to linear RGB.
pub(crate) fn linear_from_xyz(x: f64, y: f64, z: f64) -> LinearRgb {
    LinearRgb {
        r: 3.240_969_941_904_522_6 * x - 1.537_383_177_570_094 * y
            - 0.498_610_760_293_003_4 * z,
        g: -0.969_243_636_280_879_6 * x + 1.875_967_501_507_720_2 * y
            + 0.041_555_057_407_175_59 * z,
        b: 0.055_630_079_696_993_66 * x - 0.203_976_958_888_976_52 * y
            + 1.056_971_514_242_878_6 * z,
    }
}
