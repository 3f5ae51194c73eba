use crate::{LinearRgb, Srgb, Xyz};

/// Color in CIE L\*a\*b\*, a perceptually-motivated space.
///
/// Derived deterministically from the other spaces in this crate; values are
/// transient and recomputed on demand rather than stored anywhere.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serialize",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct Lab {
    /// The lightness channel. [0.0, 100.0] for in-gamut colors.
    pub lightness: f64,
    /// The green-red axis. Typically [-128.0, 127.0]
    pub a: f64,
    /// The blue-yellow axis. Typically [-128.0, 127.0]
    pub b: f64,
}

impl Lab {
    /// Construct a new [`Lab`] color from components.
    pub const fn new(lightness: f64, a: f64, b: f64) -> Self {
        Self { lightness, a, b }
    }

    /// Chroma, the magnitude of the (a\*, b\*) vector.
    pub fn chroma(&self) -> f64 {
        (self.a * self.a + self.b * self.b).sqrt()
    }
}

/// The CIE lightness function: cube root above a small threshold, a linear
/// segment near black.
fn cie_f(t: f64) -> f64 {
    if t > 0.008856 {
        t.cbrt()
    } else {
        7.787 * t + 16.0 / 116.0
    }
}

impl From<Xyz> for Lab {
    fn from(value: Xyz) -> Self {
        let fx = cie_f(value.x / Xyz::D65_WHITE.x);
        let fy = cie_f(value.y / Xyz::D65_WHITE.y);
        let fz = cie_f(value.z / Xyz::D65_WHITE.z);

        Lab::new(116.0 * fy - 16.0, 500.0 * (fx - fy), 200.0 * (fy - fz))
    }
}

impl From<LinearRgb> for Lab {
    fn from(value: LinearRgb) -> Self {
        Xyz::from(value).into()
    }
}

impl From<Srgb> for Lab {
    fn from(value: Srgb) -> Self {
        Xyz::from(value).into()
    }
}
