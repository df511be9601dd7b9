//! sRGB color representations and the gamut predicate.
//!
//! Two sRGB forms appear throughout the workspace: [`Rgb8`] is the 8-bit
//! byte form used at API boundaries (grid cells, persisted round records),
//! and [`Srgb`] is the normalized f64 form used for conversion math. A
//! perturbation applied in another space can push a converted `Srgb`
//! outside [0, 1]; [`in_gamut`] is the membership test the difference
//! engine retries against. Uses `f64` throughout for precision.

use crate::error::ColorError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// sRGB color in byte form, each channel an integer in [0, 255].
///
/// Serializes as a 3-element array `[r, g, b]`, the shape round records
/// carry on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// sRGB color in normalized form, nominally with components in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Srgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

/// Linear RGB color (gamma-decoded).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearRgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Rgb8 {
    /// Creates a byte-form color.
    pub const fn new(r: u8, g: u8, b: u8) -> Rgb8 {
        Rgb8 { r, g, b }
    }

    /// Parses a hex color string like "#ff00aa" or "ff00aa" (case insensitive).
    ///
    /// Returns `ColorError::InvalidColor` if the input is not a valid 6-digit hex color.
    pub fn from_hex(hex: &str) -> Result<Rgb8, ColorError> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if hex.len() != 6 {
            return Err(ColorError::InvalidColor(format!(
                "expected 6 hex digits, got {}",
                hex.len()
            )));
        }
        let r = u8::from_str_radix(&hex[0..2], 16)
            .map_err(|e| ColorError::InvalidColor(format!("invalid red component: {e}")))?;
        let g = u8::from_str_radix(&hex[2..4], 16)
            .map_err(|e| ColorError::InvalidColor(format!("invalid green component: {e}")))?;
        let b = u8::from_str_radix(&hex[4..6], 16)
            .map_err(|e| ColorError::InvalidColor(format!("invalid blue component: {e}")))?;
        Ok(Rgb8 { r, g, b })
    }

    /// Converts the color to a hex string like `"#rrggbb"`.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Converts the color to a CSS color string like `"rgb(128, 128, 128)"`.
    pub fn to_css(self) -> String {
        format!("rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

impl Serialize for Rgb8 {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        [self.r, self.g, self.b].serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Rgb8 {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let [r, g, b] = <[u8; 3]>::deserialize(deserializer)?;
        Ok(Rgb8 { r, g, b })
    }
}

impl Srgb {
    /// Normalizes a byte-form color into [0, 1] components.
    pub fn from_bytes(c: Rgb8) -> Srgb {
        Srgb {
            r: c.r as f64 / 255.0,
            g: c.g as f64 / 255.0,
            b: c.b as f64 / 255.0,
        }
    }

    /// Quantizes to byte form, clamping each component to [0, 1] first.
    ///
    /// The clamp makes the byte form gamut-valid by construction even when
    /// the normalized components have drifted outside [0, 1].
    pub fn to_bytes(self) -> Rgb8 {
        Rgb8 {
            r: (self.r.clamp(0.0, 1.0) * 255.0).round() as u8,
            g: (self.g.clamp(0.0, 1.0) * 255.0).round() as u8,
            b: (self.b.clamp(0.0, 1.0) * 255.0).round() as u8,
        }
    }
}

/// Returns whether all three channels lie within the renderable sRGB
/// gamut [0, 1]. NaN components fail the test.
pub fn in_gamut(c: Srgb) -> bool {
    (0.0..=1.0).contains(&c.r) && (0.0..=1.0).contains(&c.g) && (0.0..=1.0).contains(&c.b)
}

/// Applies inverse sRGB gamma to convert a single sRGB component to linear.
fn srgb_component_to_linear(c: f64) -> f64 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Applies sRGB gamma to convert a single linear component to sRGB.
fn linear_component_to_srgb(c: f64) -> f64 {
    if c <= 0.0031308 {
        c * 12.92
    } else {
        1.055 * c.powf(1.0 / 2.4) - 0.055
    }
}

/// Converts sRGB to linear RGB by applying inverse sRGB gamma.
pub fn srgb_to_linear(c: Srgb) -> LinearRgb {
    LinearRgb {
        r: srgb_component_to_linear(c.r),
        g: srgb_component_to_linear(c.g),
        b: srgb_component_to_linear(c.b),
    }
}

/// Converts linear RGB to sRGB by applying sRGB gamma.
pub fn linear_to_srgb(c: LinearRgb) -> Srgb {
    Srgb {
        r: linear_component_to_srgb(c.r),
        g: linear_component_to_srgb(c.g),
        b: linear_component_to_srgb(c.b),
    }
}
