#![deny(unsafe_code)]
//! Core types for the chroma-trial color-perception experiment.
//!
//! Provides the byte and normalized sRGB forms (`Rgb8`, `Srgb`), pure
//! conversion functions into the CIELAB, Oklab, and JzAzBz perceptual
//! spaces, the sRGB gamut predicate, the `Xorshift64` PRNG, and a
//! uniform sphere-direction sampler.

pub mod color;
pub mod error;
pub mod jzazbz;
pub mod lab;
pub mod oklab;
pub mod prng;
pub mod sphere;
mod xyz;

pub use color::{in_gamut, LinearRgb, Rgb8, Srgb};
pub use error::ColorError;
pub use jzazbz::Jzazbz;
pub use lab::CieLab;
pub use oklab::OkLab;
pub use prng::Xorshift64;
pub use sphere::random_unit_vector;
