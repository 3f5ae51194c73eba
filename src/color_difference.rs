//! Perceptual color difference.

use crate::{Lab, Srgb};

/// Perceptual color difference using the CIEDE2000 formula (ΔE00).
///
/// CIEDE2000 corrects for the non-uniformity of Lab space with
/// chroma-dependent weighting functions and a hue rotation term. The result
/// is symmetric, non-negative, and zero for identical colors; a value around
/// 1.0 is roughly the smallest difference a human observer can notice.
pub trait Ciede2000 {
    /// Returns the CIEDE2000 difference between `self` and `other`.
    fn difference(&self, other: &Self) -> f64;
}

/// `x^7`, which the formula applies to chroma values.
fn pow7(x: f64) -> f64 {
    x.powi(7)
}

/// Hue angle of (a\*, b\*) in degrees, normalized to `[0, 360)`.
///
/// `atan2(0, 0)` is defined as 0, so achromatic colors need no special case.
fn hue_angle(a: f64, b: f64) -> f64 {
    let h = b.atan2(a).to_degrees();
    if h < 0.0 { h + 360.0 } else { h }
}

impl Ciede2000 for Lab {
    fn difference(&self, other: &Self) -> f64 {
        const POW7_25: f64 = 6_103_515_625.0; // 25^7

        let (l1, a1, b1) = (self.lightness, self.a, self.b);
        let (l2, a2, b2) = (other.lightness, other.a, other.b);

        let avg_l = 0.5 * (l1 + l2);
        let avg_c = 0.5 * (self.chroma() + other.chroma());

        // a*-axis correction for low-chroma colors
        let g = 0.5 * (1.0 - (pow7(avg_c) / (pow7(avg_c) + POW7_25)).sqrt());
        let a1_prime = (1.0 + g) * a1;
        let a2_prime = (1.0 + g) * a2;

        let c1_prime = (a1_prime * a1_prime + b1 * b1).sqrt();
        let c2_prime = (a2_prime * a2_prime + b2 * b2).sqrt();
        let avg_c_prime = 0.5 * (c1_prime + c2_prime);

        let h1_prime = hue_angle(a1_prime, b1);
        let h2_prime = hue_angle(a2_prime, b2);

        let delta_h_prime = if (h1_prime - h2_prime).abs() <= 180.0 {
            h2_prime - h1_prime
        } else if h2_prime <= h1_prime {
            h2_prime - h1_prime + 360.0
        } else {
            h2_prime - h1_prime - 360.0
        };

        let delta_l = l2 - l1;
        let delta_c = c2_prime - c1_prime;
        let delta_hh =
            2.0 * (c1_prime * c2_prime).sqrt() * (0.5 * delta_h_prime.to_radians()).sin();

        let avg_h = if (h1_prime - h2_prime).abs() > 180.0 {
            0.5 * (h1_prime + h2_prime + 360.0)
        } else {
            0.5 * (h1_prime + h2_prime)
        };

        let t = 1.0 - 0.17 * (avg_h - 30.0).to_radians().cos()
            + 0.24 * (2.0 * avg_h).to_radians().cos()
            + 0.32 * (3.0 * avg_h + 6.0).to_radians().cos()
            - 0.20 * (4.0 * avg_h - 63.0).to_radians().cos();

        let delta_theta = 30.0 * (-((avg_h - 275.0) / 25.0).powi(2)).exp();
        let r_c = 2.0 * (pow7(avg_c_prime) / (pow7(avg_c_prime) + POW7_25)).sqrt();
        let r_t = -(2.0 * delta_theta).to_radians().sin() * r_c;

        let s_l = 1.0 + 0.015 * (avg_l - 50.0).powi(2) / (20.0 + (avg_l - 50.0).powi(2)).sqrt();
        let s_c = 1.0 + 0.045 * avg_c_prime;
        let s_h = 1.0 + 0.015 * avg_c_prime * t;

        ((delta_l / s_l).powi(2)
            + (delta_c / s_c).powi(2)
            + (delta_hh / s_h).powi(2)
            + r_t * (delta_c / s_c) * (delta_hh / s_h))
            .sqrt()
    }
}

impl Ciede2000 for Srgb {
    fn difference(&self, other: &Self) -> f64 {
        Lab::from(*self).difference(&Lab::from(*other))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::assert_approx_eq;

    #[test]
    fn identity_is_zero() {
        let colors = [
            Lab::new(50.0, 2.5, 0.0),
            Lab::new(100.0, 0.0, 0.0),
            Lab::new(0.0, 0.0, 0.0),
            Lab::new(62.1, 19.5, 29.4),
            Lab::new(50.0, -80.0, 120.0),
        ];
        for lab in colors {
            assert_approx_eq!(lab.difference(&lab), 0.0, 1e-9);
        }
    }

    #[test]
    fn symmetry() {
        let pairs = [
            (Lab::new(50.0, 2.6772, -79.7751), Lab::new(50.0, 0.0, -82.7485)),
            (Lab::new(50.0, 2.5, 0.0), Lab::new(73.0, 25.0, -18.0)),
            (Lab::new(87.2, 7.1, 13.1), Lab::new(28.0, 12.8, 17.3)),
            (Lab::new(10.0, -5.0, 3.0), Lab::new(90.0, 5.0, -3.0)),
        ];
        for (a, b) in pairs {
            assert_approx_eq!(a.difference(&b), b.difference(&a), 1e-9);
            assert!(a.difference(&b) >= 0.0);
        }
    }

    #[test]
    fn published_pairs() {
        // Blue pairs from the Sharma/Wu/Dalal CIEDE2000 test data set.
        let de = Lab::new(50.0, 2.6772, -79.7751)
            .difference(&Lab::new(50.0, 0.0, -82.7485));
        assert_approx_eq!(de, 2.0425, 1e-4);

        let de = Lab::new(50.0, 3.1571, -77.2803)
            .difference(&Lab::new(50.0, 0.0, -82.7485));
        assert_approx_eq!(de, 2.8615, 1e-4);

        let de = Lab::new(50.0, 2.5, 0.0).difference(&Lab::new(73.0, 25.0, -18.0));
        assert_approx_eq!(de, 27.1492, 1e-4);
    }

    #[test]
    fn grey_axis_has_no_singularity() {
        // both endpoints have zero chroma; hue falls out of atan2(0, 0) = 0
        let de = Lab::new(50.0, 0.0, 0.0).difference(&Lab::new(70.0, 0.0, 0.0));
        assert!(de.is_finite());
        assert_approx_eq!(de, 17.5912, 1e-4);

        let de = Lab::new(50.0, 0.0, 0.0).difference(&Lab::new(50.0, 0.0, 0.0));
        assert_approx_eq!(de, 0.0, 1e-9);
    }

    #[test]
    fn srgb_endpoints_convert_through_lab() {
        let de = Srgb::WHITE.difference(&Srgb::BLACK);
        assert!(de > 0.0);
        assert_approx_eq!(
            de,
            Lab::from(Srgb::WHITE).difference(&Lab::from(Srgb::BLACK)),
            1e-12
        );
        assert_approx_eq!(Srgb::WHITE.difference(&Srgb::WHITE), 0.0, 1e-9);
    }
}
