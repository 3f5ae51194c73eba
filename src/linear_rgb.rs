use crate::Srgb;

/// A linear-light RGB color, sRGB with the gamma encoding removed.
///
/// Channels are in `[0.0, 1.0]` for colors that came from an [`Srgb`] value.
/// This is the working space between the hex form and CIE XYZ.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serialize",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct LinearRgb {
    /// The red channel. [0.0, 1.0]
    pub red: f64,
    /// The green channel. [0.0, 1.0]
    pub green: f64,
    /// The blue channel. [0.0, 1.0]
    pub blue: f64,
}

impl LinearRgb {
    /// Construct a new [`LinearRgb`] color from linear-light components.
    pub const fn new(red: f64, green: f64, blue: f64) -> Self {
        Self { red, green, blue }
    }

    /// The sRGB electro-optical transfer function: maps one gamma-encoded
    /// channel in `[0.0, 1.0]` to linear light (IEC 61966-2-1).
    ///
    /// The curve is piecewise: a linear segment below 0.04045, a 2.4-exponent
    /// power law above it.
    pub fn gamma_function(value: f64) -> f64 {
        if value <= 0.04045 {
            value / 12.92
        } else {
            ((value + 0.055) / 1.055).powf(2.4)
        }
    }
}

impl From<Srgb> for LinearRgb {
    fn from(value: Srgb) -> Self {
        Self::new(
            Self::gamma_function(f64::from(value.red) / 255.0),
            Self::gamma_function(f64::from(value.green) / 255.0),
            Self::gamma_function(f64::from(value.blue) / 255.0),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::assert_approx_eq;

    #[test]
    fn gamma_endpoints() {
        assert_eq!(LinearRgb::gamma_function(0.0), 0.0);
        assert_approx_eq!(LinearRgb::gamma_function(1.0), 1.0, 1e-12);
        // below the knee the curve is the linear segment
        assert_approx_eq!(LinearRgb::gamma_function(0.04045), 0.04045 / 12.92, 1e-12);
    }

    #[test]
    fn from_srgb() {
        let white = LinearRgb::from(Srgb::WHITE);
        assert_approx_eq!(white.red, 1.0, 1e-12);
        assert_approx_eq!(white.green, 1.0, 1e-12);
        assert_approx_eq!(white.blue, 1.0, 1e-12);

        let black = LinearRgb::from(Srgb::BLACK);
        assert_eq!(black, LinearRgb::new(0.0, 0.0, 0.0));

        // mid grey #808080 linearizes to ~0.2159, not 0.5
        let grey = LinearRgb::from(Srgb::new(128, 128, 128));
        assert_approx_eq!(grey.red, 0.215_86, 1e-4);
    }
}
