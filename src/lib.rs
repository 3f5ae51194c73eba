//! Color encoding conversions and perceptual nearest-tone classification.
//!
//! This crate provides a distinct Rust type for each color space it touches:
//!
//! - [`Srgb`] (8-bit gamma-encoded sRGB, the `#rrggbb` hex form)
//! - [`LinearRgb`] (sRGB with the gamma encoding removed)
//! - [`Xyz`] (CIE 1931 XYZ tristimulus values under the D65 illuminant)
//! - [`Lab`] (CIE L\*a\*b\*)
//!
//! Colors move between spaces with the [`From`] trait. The pipeline is one-way
//! toward Lab: `Srgb -> LinearRgb -> Xyz -> Lab`, with shortcut impls so a hex
//! string can be taken straight to Lab.
//!
//! Perceptual color difference is measured with the CIEDE2000 formula through
//! the [`Ciede2000`] trait, and [`Palette::closest`] classifies a query color
//! against a set of named reference tones by that metric.
//!
//! # Example
//!
//! ```
//! use tone_match::Palette;
//!
//! let palette = Palette::new([
//!     ("fair", "#f2d5c2"),
//!     ("tan", "#c68863"),
//!     ("deep", "#5c3a28"),
//! ])
//! .unwrap();
//!
//! let matched = palette.closest("#c68863").unwrap();
//! assert_eq!(matched.name, "tan");
//! assert_eq!(matched.delta_e, 0.0);
//! ```
//!
//! All conversions are pure `f64` computations with no shared state, so every
//! operation here is safe to call from any number of threads at once.

mod color_difference;
mod lab;
mod linear_rgb;
mod matching;
pub mod palettes;
mod srgb;
mod xyz;

pub use color_difference::Ciede2000;
pub use lab::Lab;
pub use linear_rgb::LinearRgb;
pub use matching::{MatchError, Palette, Tone, ToneMatch};
pub use srgb::{HexColorError, Srgb};
pub use xyz::Xyz;
