//! Color-model registry: maps model names to native-space conversions and
//! the volume-normalization constants that equalize perturbation size.
//!
//! Each perceptual model has a wildly different native numeric range
//! (CIELAB's gamut volume is ~10^6, Oklab's ~10^-2). Scaling displacements
//! by the cube root of each model's characteristic volume makes one unit
//! of difficulty represent a comparable perceptual step in every model.
//! Adding a model is a one-place change: a variant plus its arms in the
//! tables below.

use chroma_trial_core::{jzazbz, lab, oklab, ColorError, Srgb};
use glam::DVec3;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// All recognized model names, in registry order.
const MODEL_NAMES: &[&str] = &["RGB", "CIELAB", "Oklab", "JzAzBz"];

/// Characteristic sRGB-gamut volumes, estimated offline by Monte-Carlo
/// integration over each model's native bounding box (see
/// [`crate::volume`]; `chroma-trial volumes` re-derives them). The
/// normalized sRGB cube is the unit volume by definition.
const RGB_GAMUT_VOLUME: f64 = 1.0;
const LAB_GAMUT_VOLUME: f64 = 824_204.5;
const OKLAB_GAMUT_VOLUME: f64 = 0.054_198;
const JZAZBZ_GAMUT_VOLUME: f64 = 0.004_623_5;

/// Perceptual color model selecting the space a perturbation is computed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorModel {
    /// Normalized sRGB itself — the non-perceptual control condition.
    Rgb,
    /// CIELAB, D65.
    CieLab,
    /// Oklab.
    OkLab,
    /// JzAzBz at the 203 cd/m² diffuse-white convention.
    Jzazbz,
}

impl ColorModel {
    /// Every model, in registry order. Round generation draws from this.
    pub const ALL: [ColorModel; 4] = [
        ColorModel::Rgb,
        ColorModel::CieLab,
        ColorModel::OkLab,
        ColorModel::Jzazbz,
    ];

    /// Looks a model up by its registry name.
    ///
    /// Returns `ColorError::UnknownModel` if the name is not recognized.
    pub fn from_name(name: &str) -> Result<ColorModel, ColorError> {
        match name {
            "RGB" => Ok(ColorModel::Rgb),
            "CIELAB" => Ok(ColorModel::CieLab),
            "Oklab" => Ok(ColorModel::OkLab),
            "JzAzBz" => Ok(ColorModel::Jzazbz),
            _ => Err(ColorError::UnknownModel(name.to_string())),
        }
    }

    /// The registry name (also the persisted wire form).
    pub fn name(self) -> &'static str {
        match self {
            ColorModel::Rgb => "RGB",
            ColorModel::CieLab => "CIELAB",
            ColorModel::OkLab => "Oklab",
            ColorModel::Jzazbz => "JzAzBz",
        }
    }

    /// Returns a slice of all recognized model names.
    pub fn list_names() -> &'static [&'static str] {
        MODEL_NAMES
    }

    /// The model's characteristic sRGB-gamut volume in its native space.
    pub fn gamut_volume(self) -> f64 {
        match self {
            ColorModel::Rgb => RGB_GAMUT_VOLUME,
            ColorModel::CieLab => LAB_GAMUT_VOLUME,
            ColorModel::OkLab => OKLAB_GAMUT_VOLUME,
            ColorModel::Jzazbz => JZAZBZ_GAMUT_VOLUME,
        }
    }

    /// Native-space magnitude of one unit of difficulty: the cube root of
    /// the gamut volume.
    pub fn step_scale(self) -> f64 {
        self.gamut_volume().cbrt()
    }

    /// Converts a normalized sRGB color into this model's native coordinate.
    pub fn to_native(self, c: Srgb) -> Result<DVec3, ColorError> {
        match self {
            ColorModel::Rgb => Ok(DVec3::new(c.r, c.g, c.b)),
            ColorModel::CieLab => {
                let lab = lab::srgb_to_lab(c);
                Ok(DVec3::new(lab.l, lab.a, lab.b))
            }
            ColorModel::OkLab => {
                let lab = oklab::srgb_to_oklab(c);
                Ok(DVec3::new(lab.l, lab.a, lab.b))
            }
            ColorModel::Jzazbz => {
                let jab = jzazbz::srgb_to_jzazbz(c)?;
                Ok(DVec3::new(jab.jz, jab.az, jab.bz))
            }
        }
    }

    /// Converts a native coordinate back to normalized sRGB, unclamped.
    ///
    /// Components may land outside [0, 1]; the caller decides gamut
    /// membership.
    pub fn from_native(self, v: DVec3) -> Result<Srgb, ColorError> {
        match self {
            ColorModel::Rgb => Ok(Srgb {
                r: v.x,
                g: v.y,
                b: v.z,
            }),
            ColorModel::CieLab => Ok(lab::lab_to_srgb(chroma_trial_core::CieLab {
                l: v.x,
                a: v.y,
                b: v.z,
            })),
            ColorModel::OkLab => Ok(oklab::oklab_to_srgb(chroma_trial_core::OkLab {
                l: v.x,
                a: v.y,
                b: v.z,
            })),
            ColorModel::Jzazbz => jzazbz::jzazbz_to_srgb(chroma_trial_core::Jzazbz {
                jz: v.x,
                az: v.y,
                bz: v.z,
            }),
        }
    }
}

impl fmt::Display for ColorModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for ColorModel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for ColorModel {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        ColorModel::from_name(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chroma_trial_core::in_gamut;

    #[test]
    fn from_name_resolves_every_registry_name() {
        for &name in ColorModel::list_names() {
            let model = ColorModel::from_name(name).unwrap();
            assert_eq!(model.name(), name);
        }
    }

    #[test]
    fn from_name_unknown_returns_error() {
        let result = ColorModel::from_name("CIECAM02-UCS");
        assert!(matches!(result, Err(ColorError::UnknownModel(_))));
    }

    #[test]
    fn all_matches_registry_order() {
        let names: Vec<&str> = ColorModel::ALL.iter().map(|m| m.name()).collect();
        assert_eq!(names, ColorModel::list_names());
    }

    #[test]
    fn step_scales_span_orders_of_magnitude() {
        // The whole point of the normalization: native scales differ by
        // orders of magnitude and the cube root bridges them.
        assert!((ColorModel::Rgb.step_scale() - 1.0).abs() < 1e-12);
        assert!(ColorModel::CieLab.step_scale() > 90.0);
        assert!(ColorModel::OkLab.step_scale() < 0.4);
        assert!(ColorModel::Jzazbz.step_scale() < 0.17);
    }

    #[test]
    fn rgb_native_is_identity() {
        let c = Srgb {
            r: 0.25,
            g: 0.5,
            b: 0.75,
        };
        let v = ColorModel::Rgb.to_native(c).unwrap();
        assert_eq!(v, DVec3::new(0.25, 0.5, 0.75));
        let back = ColorModel::Rgb.from_native(v).unwrap();
        assert_eq!(back, c);
    }

    #[test]
    fn every_model_round_trips_mid_gray() {
        let gray = Srgb {
            r: 0.5,
            g: 0.5,
            b: 0.5,
        };
        for model in ColorModel::ALL {
            let native = model.to_native(gray).unwrap();
            let back = model.from_native(native).unwrap();
            assert!(
                (back.r - 0.5).abs() < 1e-6
                    && (back.g - 0.5).abs() < 1e-6
                    && (back.b - 0.5).abs() < 1e-6,
                "{model}: {back:?}"
            );
            assert!(in_gamut(back));
        }
    }

    #[test]
    fn display_uses_registry_name() {
        assert_eq!(ColorModel::Jzazbz.to_string(), "JzAzBz");
        assert_eq!(ColorModel::CieLab.to_string(), "CIELAB");
    }

    #[test]
    fn serde_round_trips_as_name_string() {
        for model in ColorModel::ALL {
            let json = serde_json::to_string(&model).unwrap();
            assert_eq!(json, format!("\"{}\"", model.name()));
            let restored: ColorModel = serde_json::from_str(&json).unwrap();
            assert_eq!(restored, model);
        }
    }

    #[test]
    fn deserialize_rejects_unknown_name() {
        let result: Result<ColorModel, _> = serde_json::from_str("\"HSV\"");
        assert!(result.is_err());
    }
}
