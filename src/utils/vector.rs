//! # Vector Mathematics
//!
//! Distance between 2D points under a Minkowski p-norm.
//!
//! The exponent `p` selects the metric:
//! - `p = 2`: Euclidean distance (the default)
//! - `p = 1`: taxicab distance
//! - `p = +inf`: Chebyshev distance (the chess king's move count)
//! - any other `p > 1`: the general Minkowski distance
//!
//! Exponents below 1 are rejected with [`SimkitError::UnsupportedNorm`].

use crate::config::DEFAULT_NORM_EXPONENT;
use crate::{SimkitError, SimkitResult};
use macroquad::math::Vec2;
use serde::{Deserialize, Serialize};

/// A validated Minkowski norm.
///
/// Values only come from [`Norm::from_exponent`] (or deserialization, which
/// goes through it), so every norm has `p >= 1`. Serializes as an externally
/// tagged enum (`"Chebyshev"`, `{"Minkowski":3.0}`), which JSON can hold.
///
/// # Examples
///
/// ```
/// use simkit::Norm;
///
/// let norm = Norm::from_exponent(1.0).unwrap();
/// assert_eq!(norm, Norm::Taxicab);
/// assert_eq!(norm.distance(3.0, -4.0), 7.0);
/// assert!(Norm::from_exponent(0.5).is_err());
/// ```
///
/// The general exponent cannot be built by hand:
///
/// ```compile_fail
/// use simkit::{Exponent, Norm};
///
/// let norm = Norm::Minkowski(Exponent(0.5));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(try_from = "NormRepr", into = "NormRepr")]
pub enum Norm {
    /// `p = 2`
    #[default]
    Euclidean,
    /// `p = 1`
    Taxicab,
    /// `p = +inf`
    Chebyshev,
    /// Any finite `p > 1` other than 2
    Minkowski(Exponent),
}

/// Exponent of a general [`Norm::Minkowski`]: finite, `> 1` and not 2.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Exponent(f32);

impl Exponent {
    /// Returns the raw exponent.
    pub fn get(self) -> f32 {
        self.0
    }
}

impl Norm {
    /// Builds the norm for exponent `p`.
    ///
    /// Fails with [`SimkitError::UnsupportedNorm`] when `p < 1` or `p` is NaN.
    pub fn from_exponent(p: f32) -> SimkitResult<Self> {
        if p == DEFAULT_NORM_EXPONENT {
            Ok(Norm::Euclidean)
        } else if p == 1.0 {
            Ok(Norm::Taxicab)
        } else if p == f32::INFINITY {
            Ok(Norm::Chebyshev)
        } else if p > 1.0 {
            Ok(Norm::Minkowski(Exponent(p)))
        } else {
            log::debug!("rejecting p-norm with exponent {}", p);
            Err(SimkitError::UnsupportedNorm { p })
        }
    }

    /// Returns the exponent `p` of this norm.
    pub fn exponent(self) -> f32 {
        match self {
            Norm::Euclidean => DEFAULT_NORM_EXPONENT,
            Norm::Taxicab => 1.0,
            Norm::Chebyshev => f32::INFINITY,
            Norm::Minkowski(p) => p.get(),
        }
    }

    /// Length of the offset `(dx, dy)` under this norm.
    pub fn distance(self, dx: f32, dy: f32) -> f32 {
        match self {
            Norm::Euclidean => (dx * dx + dy * dy).sqrt(),
            Norm::Taxicab => dx.abs() + dy.abs(),
            Norm::Chebyshev => dx.abs().max(dy.abs()),
            Norm::Minkowski(p) => minkowski(dx.abs(), dy.abs(), p.get()),
        }
    }

    /// Distance between two points under this norm.
    ///
    /// The Euclidean case goes straight to [`Vec2::distance`].
    pub fn between(self, a: Vec2, b: Vec2) -> f32 {
        match self {
            Norm::Euclidean => a.distance(b),
            _ => self.distance(a.x - b.x, a.y - b.y),
        }
    }
}

/// `(x^p + y^p)^(1/p)` for non-negative `x`, `y`.
///
/// Both terms are scaled by the larger one first so `x^p` cannot overflow
/// to infinity or underflow to zero in `f32`.
fn minkowski(x: f32, y: f32, p: f32) -> f32 {
    let max = x.max(y);
    if max == 0.0 || max.is_infinite() {
        return max;
    }
    max * ((x / max).powf(p) + (y / max).powf(p)).powf(1.0 / p)
}

impl TryFrom<f32> for Norm {
    type Error = SimkitError;

    fn try_from(p: f32) -> SimkitResult<Self> {
        Norm::from_exponent(p)
    }
}

impl From<Norm> for f32 {
    fn from(norm: Norm) -> f32 {
        norm.exponent()
    }
}

/// Wire form of [`Norm`].
#[derive(Serialize, Deserialize)]
#[serde(rename = "Norm")]
enum NormRepr {
    Euclidean,
    Taxicab,
    Chebyshev,
    Minkowski(f32),
}

impl TryFrom<NormRepr> for Norm {
    type Error = SimkitError;

    fn try_from(repr: NormRepr) -> SimkitResult<Self> {
        match repr {
            NormRepr::Euclidean => Ok(Norm::Euclidean),
            NormRepr::Taxicab => Ok(Norm::Taxicab),
            NormRepr::Chebyshev => Ok(Norm::Chebyshev),
            NormRepr::Minkowski(p) => Norm::from_exponent(p),
        }
    }
}

impl From<Norm> for NormRepr {
    fn from(norm: Norm) -> NormRepr {
        match norm {
            Norm::Euclidean => NormRepr::Euclidean,
            Norm::Taxicab => NormRepr::Taxicab,
            Norm::Chebyshev => NormRepr::Chebyshev,
            Norm::Minkowski(p) => NormRepr::Minkowski(p.get()),
        }
    }
}

/// Euclidean distance between two points.
///
/// # Examples
///
/// ```
/// use simkit::{distance, Vec2};
///
/// assert_eq!(distance(Vec2::new(1.0, 1.0), Vec2::new(4.0, 5.0)), 5.0);
/// ```
pub fn distance(a: Vec2, b: Vec2) -> f32 {
    a.distance(b)
}

/// Distance between two points using the Minkowski p-norm `p`.
///
/// # Examples
///
/// ```
/// use simkit::{distance_with_norm, Vec2};
///
/// let a = Vec2::new(0.0, 0.0);
/// let b = Vec2::new(3.0, 4.0);
/// assert_eq!(distance_with_norm(a, b, 1.0).unwrap(), 7.0);
/// assert_eq!(distance_with_norm(a, b, f32::INFINITY).unwrap(), 4.0);
/// ```
pub fn distance_with_norm(a: Vec2, b: Vec2, p: f32) -> SimkitResult<f32> {
    if p == DEFAULT_NORM_EXPONENT {
        return Ok(a.distance(b));
    }
    distance_coords_with_norm(a.x, a.y, b.x, b.y, p)
}

/// Euclidean distance between `(ax, ay)` and `(bx, by)`.
pub fn distance_coords(ax: f32, ay: f32, bx: f32, by: f32) -> f32 {
    Norm::Euclidean.distance(ax - bx, ay - by)
}

/// Distance between `(ax, ay)` and `(bx, by)` using the Minkowski p-norm `p`.
pub fn distance_coords_with_norm(ax: f32, ay: f32, bx: f32, by: f32, p: f32) -> SimkitResult<f32> {
    let norm = Norm::from_exponent(p)?;
    Ok(norm.distance(ax - bx, ay - by))
}
