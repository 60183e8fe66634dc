//! # Angle Representation Module
//!
//! This module provides the [`Radian`] angle type used by the spherical
//! coordinate fields.
//!
//! ## Internal Storage
//!
//! A `Radian` is a transparent wrapper around an `f64` holding radians.
//! Values built from degrees are converted once on construction, so two
//! angles compare equal exactly when their radian values are bit-for-bit
//! equal. No normalization happens implicitly: out of range and negative
//! angles are stored as given, and `wrap_two_pi` / `wrap_pi` are explicit.
//!
//! ## Examples
//!
//! ```rust
//! use spherevec::Radian;
//!
//! let right = Radian::from_degrees(90.0);
//! assert!((right.radians() - std::f64::consts::FRAC_PI_2).abs() < 1e-15);
//!
//! let sum = right + Radian::HALF_PI;
//! assert!((sum.degrees() - 180.0).abs() < 1e-12);
//! ```

use std::f64::consts::{FRAC_PI_2, PI, TAU};
use std::fmt;
use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

use approx::{AbsDiffEq, RelativeEq};
use serde::{Deserialize, Serialize};

/// An angle in radians
///
/// Supports the arithmetic needed by field-wise spherical operations
/// (add, subtract, negate, scale) and the trigonometric functions used by
/// Cartesian conversion.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Radian(f64);

impl Radian {
    /// Zero angle
    pub const ZERO: Radian = Radian(0.0);
    /// Quarter turn
    pub const HALF_PI: Radian = Radian(FRAC_PI_2);
    /// Half turn
    pub const PI: Radian = Radian(PI);
    /// Full turn
    pub const TWO_PI: Radian = Radian(TAU);

    /// Creates an angle from a value in radians
    pub const fn new(radians: f64) -> Self {
        Radian(radians)
    }

    /// Creates an angle from a value in degrees
    ///
    /// # Examples
    ///
    /// ```rust
    /// use spherevec::Radian;
    ///
    /// let half_turn = Radian::from_degrees(180.0);
    /// assert!((half_turn.radians() - std::f64::consts::PI).abs() < 1e-15);
    /// ```
    pub fn from_degrees(degrees: f64) -> Self {
        Radian(degrees.to_radians())
    }

    /// Returns the angle value in radians
    pub const fn radians(self) -> f64 {
        self.0
    }

    /// Returns the angle value in degrees
    pub fn degrees(self) -> f64 {
        self.0.to_degrees()
    }

    pub fn sin(self) -> f64 {
        self.0.sin()
    }

    pub fn cos(self) -> f64 {
        self.0.cos()
    }

    pub fn tan(self) -> f64 {
        self.0.tan()
    }

    /// Single-argument arctangent, range (-π/2, π/2)
    pub fn atan(value: f64) -> Self {
        Radian(value.atan())
    }

    /// Four-quadrant arctangent of `y / x`, range (-π, π]
    ///
    /// Well defined when `x` is zero; `atan2(0, 0)` is zero.
    pub fn atan2(y: f64, x: f64) -> Self {
        Radian(y.atan2(x))
    }

    /// Arccosine, range [0, π]
    ///
    /// The argument is clamped to [-1, 1] first so that rounding noise on a
    /// normalized dot product does not produce NaN.
    pub fn acos(value: f64) -> Self {
        Radian(value.clamp(-1.0, 1.0).acos())
    }

    /// Wraps the angle into [0, 2π)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use spherevec::Radian;
    ///
    /// let wrapped = Radian::from_degrees(-90.0).wrap_two_pi();
    /// assert!((wrapped.degrees() - 270.0).abs() < 1e-12);
    /// ```
    pub fn wrap_two_pi(self) -> Self {
        let wrapped = self.0.rem_euclid(TAU);
        // rem_euclid can round up to exactly TAU for tiny negative inputs
        if wrapped >= TAU {
            Radian(0.0)
        } else {
            Radian(wrapped)
        }
    }

    /// Wraps the angle into (-π, π]
    pub fn wrap_pi(self) -> Self {
        let wrapped = self.wrap_two_pi().0;
        if wrapped > PI {
            Radian(wrapped - TAU)
        } else {
            Radian(wrapped)
        }
    }

    pub fn is_finite(self) -> bool {
        self.0.is_finite()
    }
}

impl From<f64> for Radian {
    fn from(radians: f64) -> Self {
        Radian(radians)
    }
}

impl From<Radian> for f64 {
    fn from(angle: Radian) -> Self {
        angle.0
    }
}

impl fmt::Display for Radian {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)?;
        f.write_str(" rad")
    }
}

impl Add for Radian {
    type Output = Radian;

    fn add(self, other: Radian) -> Radian {
        Radian(self.0 + other.0)
    }
}

impl Sub for Radian {
    type Output = Radian;

    fn sub(self, other: Radian) -> Radian {
        Radian(self.0 - other.0)
    }
}

impl Neg for Radian {
    type Output = Radian;

    fn neg(self) -> Radian {
        Radian(-self.0)
    }
}

impl AddAssign for Radian {
    fn add_assign(&mut self, other: Radian) {
        self.0 += other.0;
    }
}

impl SubAssign for Radian {
    fn sub_assign(&mut self, other: Radian) {
        self.0 -= other.0;
    }
}

impl Mul<f64> for Radian {
    type Output = Radian;

    fn mul(self, scalar: f64) -> Radian {
        Radian(self.0 * scalar)
    }
}

impl Div<f64> for Radian {
    type Output = Radian;

    fn div(self, scalar: f64) -> Radian {
        Radian(self.0 / scalar)
    }
}

impl AbsDiffEq for Radian {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.0.abs_diff_eq(&other.0, epsilon)
    }
}

impl RelativeEq for Radian {
    fn default_max_relative() -> f64 {
        f64::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f64, max_relative: f64) -> bool {
        self.0.relative_eq(&other.0, epsilon, max_relative)
    }
}
