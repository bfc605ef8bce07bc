//! # Simkit
//!
//! Small, stateless helpers shared by the 2D game systems.
//!
//! ## Overview
//!
//! The crate is a flat set of independent utility groups:
//!
//! - **List utilities**: O(1) unordered removal from a `Vec`
//! - **Vector utilities**: point distance under Minkowski p-norms
//! - **Color utilities**: conversion between 8-bit RGBA colors and hex strings
//!
//! None of them hold state. Everything is re-exported at the crate root.
//!
//! ```
//! use simkit::{color_to_hex, distance, hex_to_color, Rgba, Vec2};
//!
//! assert_eq!(distance(Vec2::new(0.0, 0.0), Vec2::new(3.0, 4.0)), 5.0);
//! assert_eq!(color_to_hex(Rgba::rgb(255, 0, 128)), "FF0080");
//! assert_eq!(hex_to_color("FF0080").unwrap(), Rgba::new(255, 0, 128, 255));
//! ```

pub mod utils;

pub use utils::*;

pub use macroquad::math::Vec2;

/// Core error type for the Simkit utilities.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum SimkitError {
    /// Distance exponent outside the supported range (`p >= 1`)
    #[error("Unsupported norm: p-norm {p} is not supported, p must be >= 1")]
    UnsupportedNorm { p: f32 },

    /// Hex color string shorter than six characters
    #[error("Hex color too short: expected {expected} characters, got {len}")]
    HexTooShort { len: usize, expected: usize },

    /// A two-character channel is not a valid hex byte
    #[error("Invalid hex color: {pair:?} at offset {offset} is not a hex byte")]
    InvalidHex { pair: String, offset: usize },
}

impl SimkitError {
    /// Returns true for errors raised while parsing a hex color string.
    pub fn is_parse_error(&self) -> bool {
        matches!(
            self,
            SimkitError::HexTooShort { .. } | SimkitError::InvalidHex { .. }
        )
    }
}

/// Result type used throughout the Simkit codebase.
pub type SimkitResult<T> = Result<T, SimkitError>;

/// Version information for the crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Utility configuration constants.
pub mod config {
    /// Minkowski exponent used when no norm is given (Euclidean distance)
    pub const DEFAULT_NORM_EXPONENT: f32 = 2.0;

    /// Number of characters in an `RRGGBB` hex color
    pub const HEX_COLOR_LEN: usize = 6;

    /// Alpha value of a fully opaque color
    pub const OPAQUE_ALPHA: u8 = 255;
}
