//! Classification of a query color against a palette of named reference
//! tones.

use thiserror::Error;

use crate::color_difference::Ciede2000;
use crate::{HexColorError, Lab, Srgb};

/// A named reference color in a [`Palette`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serialize",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct Tone {
    /// Label identifying the reference color.
    pub name: String,
    /// The reference color.
    pub color: Srgb,
}

impl Tone {
    /// Construct a new [`Tone`] from a label and a color.
    pub fn new(name: impl Into<String>, color: Srgb) -> Self {
        Self {
            name: name.into(),
            color,
        }
    }
}

/// The result of classifying a query color against a [`Palette`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serialize",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct ToneMatch {
    /// Label of the winning reference tone.
    pub name: String,
    /// The winning reference color in canonical `#rrggbb` form.
    pub hex: String,
    /// CIEDE2000 distance from the query to the winning tone. Non-negative;
    /// exactly 0.0 when the query equals the reference color.
    pub delta_e: f64,
}

/// Errors produced by [`Palette::closest`].
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum MatchError {
    /// The palette contains no reference tones.
    #[error("the reference palette contains no tones")]
    EmptyPalette,
    /// The query hex string failed to parse.
    #[error(transparent)]
    Hex(#[from] HexColorError),
}

/// An ordered collection of named reference tones.
///
/// Entry order is the construction order and it is meaningful: when two tones
/// are perceptually equidistant from a query, [`Palette::closest`] returns the
/// earlier entry. Palettes are plain values; hold one wherever configuration
/// lives and pass it by reference.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(
    feature = "serialize",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct Palette {
    tones: Vec<Tone>,
}

impl Palette {
    /// Build a palette from (label, hex string) pairs.
    ///
    /// Every hex color is validated up front, so a constructed palette can
    /// never fail to convert during a match.
    ///
    /// ```
    /// use tone_match::Palette;
    ///
    /// let palette = Palette::new([("fair", "#f2d5c2"), ("deep", "#5c3a28")]).unwrap();
    /// assert_eq!(palette.len(), 2);
    /// assert!(Palette::new([("bad", "#not-hex")]).is_err());
    /// ```
    pub fn new<N, H, I>(entries: I) -> Result<Palette, HexColorError>
    where
        I: IntoIterator<Item = (N, H)>,
        N: Into<String>,
        H: AsRef<str>,
    {
        let tones = entries
            .into_iter()
            .map(|(name, hex)| Ok(Tone::new(name, Srgb::hex(hex.as_ref())?)))
            .collect::<Result<_, HexColorError>>()?;
        Ok(Palette { tones })
    }

    /// Build a palette from already-validated tones.
    pub fn from_tones<I: IntoIterator<Item = Tone>>(tones: I) -> Palette {
        Palette {
            tones: tones.into_iter().collect(),
        }
    }

    /// The number of reference tones.
    pub fn len(&self) -> usize {
        self.tones.len()
    }

    /// Whether the palette has no tones. A match against an empty palette
    /// fails with [`MatchError::EmptyPalette`].
    pub fn is_empty(&self) -> bool {
        self.tones.is_empty()
    }

    /// Iterate the tones in match-priority order.
    pub fn iter(&self) -> impl Iterator<Item = &Tone> {
        self.tones.iter()
    }

    /// Find the reference tone perceptually closest to the query hex color.
    ///
    /// The query is converted to Lab once; every tone is compared with the
    /// CIEDE2000 formula and the minimum is tracked with a strict `<` scan,
    /// so exact ties go to the earliest entry.
    pub fn closest(&self, hex: &str) -> Result<ToneMatch, MatchError> {
        if self.tones.is_empty() {
            return Err(MatchError::EmptyPalette);
        }
        let query = Lab::from(Srgb::hex(hex)?);

        let mut best: Option<(&Tone, f64)> = None;
        for tone in &self.tones {
            let delta_e = query.difference(&Lab::from(tone.color));
            if best.is_none_or(|(_, lowest)| delta_e < lowest) {
                best = Some((tone, delta_e));
            }
        }

        // non-empty checked above
        let (tone, delta_e) = best.ok_or(MatchError::EmptyPalette)?;
        Ok(ToneMatch {
            name: tone.name.clone(),
            hex: tone.color.to_hex(),
            delta_e,
        })
    }
}

impl FromIterator<Tone> for Palette {
    fn from_iter<I: IntoIterator<Item = Tone>>(iter: I) -> Self {
        Palette::from_tones(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::assert_approx_eq;

    fn skin_palette() -> Palette {
        Palette::new([
            ("fair", "#f2d5c2"),
            ("tan", "#c68863"),
            ("deep", "#5c3a28"),
        ])
        .unwrap()
    }

    #[test]
    fn self_match_is_exact() {
        let matched = skin_palette().closest("#c68863").unwrap();
        assert_eq!(matched.name, "tan");
        assert_eq!(matched.hex, "#c68863");
        assert_eq!(matched.delta_e, 0.0);
    }

    #[test]
    fn nearby_color_matches_nearest_tone() {
        let matched = skin_palette().closest("#c17a55").unwrap();
        assert_eq!(matched.name, "tan");
        assert_approx_eq!(matched.delta_e, 4.3328, 1e-4);

        let matched = skin_palette().closest("#ffffff").unwrap();
        assert_eq!(matched.name, "fair");
    }

    #[test]
    fn query_is_case_insensitive() {
        let matched = skin_palette().closest("#C68863").unwrap();
        assert_eq!(matched.name, "tan");
        assert_eq!(matched.delta_e, 0.0);
    }

    #[test]
    fn ties_go_to_the_first_entry() {
        // identical colors under different labels
        let palette = Palette::new([
            ("first", "#a65d3f"),
            ("second", "#a65d3f"),
        ])
        .unwrap();
        let matched = palette.closest("#a65d3f").unwrap();
        assert_eq!(matched.name, "first");

        // same tie, reversed order
        let palette = Palette::new([
            ("second", "#a65d3f"),
            ("first", "#a65d3f"),
        ])
        .unwrap();
        assert_eq!(palette.closest("#a65d3f").unwrap().name, "second");
    }

    #[test]
    fn empty_palette_is_an_error() {
        let palette = Palette::default();
        assert!(palette.is_empty());
        assert_eq!(
            palette.closest("#a65d3f"),
            Err(MatchError::EmptyPalette)
        );
    }

    #[test]
    fn malformed_query_is_an_error() {
        assert_eq!(
            skin_palette().closest("c68863"),
            Err(MatchError::Hex(HexColorError::InvalidFormat))
        );
    }

    #[test]
    fn malformed_entry_fails_construction() {
        let result = Palette::new([("fair", "#f2d5c2"), ("bad", "#zzzzzz")]);
        assert_eq!(result, Err(HexColorError::InvalidFormat));
    }

    #[test]
    fn from_tones_preserves_order() {
        let palette: Palette = [
            Tone::new("a", Srgb::new(1, 2, 3)),
            Tone::new("b", Srgb::new(4, 5, 6)),
        ]
        .into_iter()
        .collect();
        let names: Vec<_> = palette.iter().map(|tone| tone.name.as_str()).collect();
        assert_eq!(names, ["a", "b"]);
        assert_eq!(palette.len(), 2);
    }
}
