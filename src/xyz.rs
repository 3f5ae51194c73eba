use crate::{LinearRgb, Srgb};

/// CIE 1931 XYZ tristimulus values under the D65 illuminant, on the 0–100
/// scale conventional for the Lab conversion.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serialize",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct Xyz {
    /// The X tristimulus value. [0.0, ~95.047]
    pub x: f64,
    /// The Y tristimulus value (luminance). [0.0, 100.0]
    pub y: f64,
    /// The Z tristimulus value. [0.0, ~108.883]
    pub z: f64,
}

impl Xyz {
    /// The D65 reference white on the same 0–100 scale.
    pub const D65_WHITE: Xyz = Xyz::new(95.047, 100.0, 108.883);

    /// Construct a new [`Xyz`] color from tristimulus values.
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

impl From<LinearRgb> for Xyz {
    fn from(value: LinearRgb) -> Self {
        let red = value.red * 100.0;
        let green = value.green * 100.0;
        let blue = value.blue * 100.0;

        // sRGB to XYZ matrix, D65
        Xyz::new(
            red * 0.4124 + green * 0.3576 + blue * 0.1805,
            red * 0.2126 + green * 0.7152 + blue * 0.0722,
            red * 0.0193 + green * 0.1192 + blue * 0.9505,
        )
    }
}

impl From<Srgb> for Xyz {
    fn from(value: Srgb) -> Self {
        LinearRgb::from(value).into()
    }
}
