//! Built-in reference palettes.
//!
//! Nothing in this crate consults these implicitly; they are plain values a
//! caller passes to matching code like any other [`Palette`].

use crate::{Palette, Tone};

/// Named skin-tone reference colors, ordered lightest to deepest.
pub mod skin {
    use crate::Srgb;

    /// `#f8e7db`
    pub const PORCELAIN: Srgb = Srgb::new(0xf8, 0xe7, 0xdb);
    /// `#f2d5c2`
    pub const FAIR: Srgb = Srgb::new(0xf2, 0xd5, 0xc2);
    /// `#e8beac`
    pub const LIGHT: Srgb = Srgb::new(0xe8, 0xbe, 0xac);
    /// `#d9a585`
    pub const MEDIUM: Srgb = Srgb::new(0xd9, 0xa5, 0x85);
    /// `#c68863`
    pub const TAN: Srgb = Srgb::new(0xc6, 0x88, 0x63);
    /// `#a65d3f`
    pub const BRONZE: Srgb = Srgb::new(0xa6, 0x5d, 0x3f);
    /// `#844b35`
    pub const RICH: Srgb = Srgb::new(0x84, 0x4b, 0x35);
    /// `#5c3a28`
    pub const DEEP: Srgb = Srgb::new(0x5c, 0x3a, 0x28);
}

/// The default skin-tone palette, lightest to deepest.
///
/// Tie-breaks during matching therefore favor the lighter tone.
pub fn skin_tones() -> Palette {
    Palette::from_tones([
        Tone::new("porcelain", skin::PORCELAIN),
        Tone::new("fair", skin::FAIR),
        Tone::new("light", skin::LIGHT),
        Tone::new("medium", skin::MEDIUM),
        Tone::new("tan", skin::TAN),
        Tone::new("bronze", skin::BRONZE),
        Tone::new("rich", skin::RICH),
        Tone::new("deep", skin::DEEP),
    ])
}
