use core::fmt;
use core::str::FromStr;

use thiserror::Error;

/// An 8-bit gamma-encoded sRGB color, the form carried by `#rrggbb` hex
/// strings.
///
/// Channels are constrained to `[0, 255]` by the type. Checked construction
/// from wider integers is available through `TryFrom<(i64, i64, i64)>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serialize",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct Srgb {
    /// The red channel. [0, 255]
    pub red: u8,
    /// The green channel. [0, 255]
    pub green: u8,
    /// The blue channel. [0, 255]
    pub blue: u8,
}

impl Srgb {
    /// `#ffffff`
    pub const WHITE: Srgb = Srgb::new(255, 255, 255);
    /// `#000000`
    pub const BLACK: Srgb = Srgb::new(0, 0, 0);

    /// Construct a new [`Srgb`] color from 8-bit channels.
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Parse a hex color string in the strict `#rrggbb` form.
    ///
    /// Hex digits are case-insensitive. Anything else — wrong length, missing
    /// `#`, shorthand forms, non-hex digits — fails with
    /// [`HexColorError::InvalidFormat`].
    ///
    /// ```
    /// use tone_match::Srgb;
    ///
    /// assert_eq!(Srgb::hex("#a65d3f"), Ok(Srgb::new(0xa6, 0x5d, 0x3f)));
    /// assert!(Srgb::hex("a65d3f").is_err());
    /// ```
    pub fn hex(hex: &str) -> Result<Srgb, HexColorError> {
        let digits = hex.strip_prefix('#').ok_or(HexColorError::InvalidFormat)?;
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(HexColorError::InvalidFormat);
        }
        let value =
            u32::from_str_radix(digits, 16).map_err(|_| HexColorError::InvalidFormat)?;
        Ok(Srgb::new(
            (value >> 16) as u8,
            (value >> 8) as u8,
            value as u8,
        ))
    }

    /// Encode as a lowercase, zero-padded `#rrggbb` hex string.
    ///
    /// This is the canonical output form; [`Srgb::hex`] accepts it unchanged.
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.red, self.green, self.blue)
    }
}

impl fmt::Display for Srgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{:02x}{:02x}{:02x}",
            self.red, self.green, self.blue
        )
    }
}

impl FromStr for Srgb {
    type Err = HexColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Srgb::hex(s)
    }
}

/// Checked construction from integer channels.
///
/// Any channel outside `0..=255` fails with [`HexColorError::OutOfRange`];
/// values are never clamped or truncated.
impl TryFrom<(i64, i64, i64)> for Srgb {
    type Error = HexColorError;

    fn try_from((red, green, blue): (i64, i64, i64)) -> Result<Self, Self::Error> {
        let channel =
            |value: i64| u8::try_from(value).map_err(|_| HexColorError::OutOfRange(value));
        Ok(Srgb::new(channel(red)?, channel(green)?, channel(blue)?))
    }
}

/// Errors produced when parsing or constructing an [`Srgb`] color.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum HexColorError {
    /// The string is not `#` followed by exactly six hex digits.
    #[error("hex color must be `#` followed by six hex digits")]
    InvalidFormat,
    /// An integer channel was outside the 8-bit range.
    #[error("color channel {0} is outside of range 0..=255")]
    OutOfRange(i64),
}
