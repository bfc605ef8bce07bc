//! # Color Utilities
//!
//! 8-bit RGBA colors and their HTML-style `RRGGBB` hex form.

use crate::config::{HEX_COLOR_LEN, OPAQUE_ALPHA};
use crate::{SimkitError, SimkitResult};
use macroquad::color::Color;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A color with 8-bit red, green, blue and alpha channels.
///
/// Displays, parses and serializes as an `RRGGBB` hex string. The hex form
/// carries no alpha: parsed colors are always fully opaque.
///
/// # Examples
///
/// ```
/// use simkit::Rgba;
///
/// let magenta: Rgba = "FF0080".parse().unwrap();
/// assert_eq!(magenta, Rgba::rgb(255, 0, 128));
/// assert_eq!(magenta.to_string(), "FF0080");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    /// Creates a color from all four channels.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Creates a fully opaque color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, OPAQUE_ALPHA)
    }

    /// Uppercase `RRGGBB` hex form. Alpha is ignored.
    pub fn to_hex(&self) -> String {
        self.to_string()
    }

    /// Parses an `RRGGBB` hex string into an opaque color.
    ///
    /// Only the first six characters are read; anything after them is
    /// ignored. Digits may be upper or lower case. There is no `#` prefix.
    /// Whitespace is not trimmed: `" F0080"` fails, although hex parsers
    /// that allow padding around the number would accept it.
    pub fn from_hex(hex: &str) -> SimkitResult<Self> {
        if hex.len() < HEX_COLOR_LEN {
            log::debug!("hex color {:?} is shorter than {} characters", hex, HEX_COLOR_LEN);
            return Err(SimkitError::HexTooShort {
                len: hex.len(),
                expected: HEX_COLOR_LEN,
            });
        }

        Ok(Self::rgb(
            hex_byte(hex, 0)?,
            hex_byte(hex, 2)?,
            hex_byte(hex, 4)?,
        ))
    }
}

/// Parses the two characters of `hex` starting at `offset` as one byte.
fn hex_byte(hex: &str, offset: usize) -> SimkitResult<u8> {
    let invalid = || {
        let pair: String = hex.chars().skip(offset).take(2).collect();
        log::debug!("hex color {:?} has invalid digits {:?} at {}", hex, pair, offset);
        SimkitError::InvalidHex { pair, offset }
    };

    // `get` fails on a non-ASCII char boundary, which is invalid input anyway.
    let pair = hex.get(offset..offset + 2).ok_or_else(invalid)?;
    // from_str_radix would accept a leading '+'.
    if !pair.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(invalid());
    }
    u8::from_str_radix(pair, 16).map_err(|_| invalid())
}

/// Converts a color to its uppercase `RRGGBB` hex string, ignoring alpha.
///
/// # Examples
///
/// ```
/// use simkit::{color_to_hex, Rgba};
///
/// assert_eq!(color_to_hex(Rgba::rgb(255, 0, 128)), "FF0080");
/// assert_eq!(color_to_hex(Rgba::new(1, 2, 3, 0)), "010203");
/// ```
pub fn color_to_hex(color: Rgba) -> String {
    color.to_hex()
}

/// Parses an `RRGGBB` hex string into a fully opaque color.
///
/// # Examples
///
/// ```
/// use simkit::{hex_to_color, Rgba};
///
/// assert_eq!(hex_to_color("FF0080").unwrap(), Rgba::new(255, 0, 128, 255));
/// assert!(hex_to_color("ZZ0080").is_err());
/// assert!(hex_to_color("FF").is_err());
/// ```
pub fn hex_to_color(hex: &str) -> SimkitResult<Rgba> {
    Rgba::from_hex(hex)
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgba {
    type Err = SimkitError;

    fn from_str(s: &str) -> SimkitResult<Self> {
        Rgba::from_hex(s)
    }
}

impl Serialize for Rgba {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Rgba {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let hex = String::deserialize(deserializer)?;
        Rgba::from_hex(&hex).map_err(de::Error::custom)
    }
}

impl From<Rgba> for Color {
    fn from(color: Rgba) -> Color {
        Color::from_rgba(color.r, color.g, color.b, color.a)
    }
}

impl From<Color> for Rgba {
    fn from(color: Color) -> Rgba {
        fn channel(value: f32) -> u8 {
            (value.clamp(0.0, 1.0) * 255.0).round() as u8
        }
        Rgba::new(
            channel(color.r),
            channel(color.g),
            channel(color.b),
            channel(color.a),
        )
    }
}
