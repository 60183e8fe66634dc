//! # Spherical Coordinate Vector Module
//!
//! [`SphereVector`] stores a point as a radius and two angles measured
//! against a Y-up Cartesian frame:
//!
//! - **theta**: polar angle from the +Y axis, conventionally in [0, π]
//! - **phi**: azimuth around the +Y axis, measured from +Z towards +X,
//!   conventionally in [0, 2π)
//!
//! Some example values:
//!
//! | radius | theta | phi | Cartesian |
//! |--------|-------|-----|-----------|
//! | 1 | 0° | 0° | +Y |
//! | 1 | 90° | 0° | +Z |
//! | 1 | 90° | 90° | +X |
//!
//! ## Conversion
//!
//! - `x = radius * sin(theta) * sin(phi)`
//! - `y = radius * cos(theta)`
//! - `z = radius * sin(theta) * cos(phi)`
//!
//! The inverse uses four-quadrant arctangents (`phi = atan2(x, z)`,
//! `theta = atan2(hypot(x, z), y)`), so it never divides by a component
//! and keeps quadrant information. Lengths are taken with `hypot`, so
//! vectors near the limits of `f64` keep a finite, non-zero radius. The zero vector maps to
//! [`SphereVector::ZERO`].
//!
//! ## Arithmetic
//!
//! `+`, `-` and unary `-` work field by field. They are not geometric
//! additions; convert to Cartesian for that. Multiplying by a
//! `UnitQuaternion` rotates the point around the origin.
//!
//! ```rust
//! use nalgebra::{UnitQuaternion, Vector3};
//! use spherevec::SphereVector;
//!
//! let quarter_turn = UnitQuaternion::from_axis_angle(&Vector3::y_axis(), std::f64::consts::FRAC_PI_2);
//! let rotated = SphereVector::UNIT_Z * quarter_turn;
//! assert!((rotated.to_cartesian() - Vector3::x()).norm() < 1e-12);
//! ```

use std::f64::consts::{FRAC_PI_2, PI};
use std::fmt;
use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use approx::{AbsDiffEq, RelativeEq};
use nalgebra::{Unit, UnitQuaternion, Vector3};
use serde::{Deserialize, Serialize};

use super::angle::Radian;
use super::rotation::rotation_between;
use crate::{Result, SphericalError};

/// A point in spherical coordinates
///
/// All fields are public and unconstrained: negative radii and out of range
/// angles are valid values, produced for instance by negation. A radius of
/// zero is the degenerate point at the origin, where the angles carry no
/// meaning.
///
/// Equality is exact and field-wise. Use the `approx` traits for tolerance
/// comparisons.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SphereVector {
    /// Distance from the center of the sphere
    pub radius: f64,
    /// Polar angle from the +Y axis
    pub theta: Radian,
    /// Azimuthal angle around the +Y axis, from +Z towards +X
    pub phi: Radian,
}

impl SphereVector {
    /// The origin
    pub const ZERO: SphereVector = SphereVector::from_parts(0.0, 0.0, 0.0);
    /// Unit vector along +X
    pub const UNIT_X: SphereVector = SphereVector::from_parts(1.0, FRAC_PI_2, FRAC_PI_2);
    /// Unit vector along +Y
    pub const UNIT_Y: SphereVector = SphereVector::from_parts(1.0, 0.0, 0.0);
    /// Unit vector along +Z
    pub const UNIT_Z: SphereVector = SphereVector::from_parts(1.0, FRAC_PI_2, 0.0);
    /// Unit vector along -X
    pub const NEGATIVE_UNIT_X: SphereVector = SphereVector::from_parts(1.0, FRAC_PI_2, -FRAC_PI_2);
    /// Unit vector along -Y
    pub const NEGATIVE_UNIT_Y: SphereVector = SphereVector::from_parts(1.0, PI, 0.0);
    /// Unit vector along -Z
    pub const NEGATIVE_UNIT_Z: SphereVector = SphereVector::from_parts(1.0, FRAC_PI_2, PI);

    const fn from_parts(radius: f64, theta: f64, phi: f64) -> Self {
        SphereVector {
            radius,
            theta: Radian::new(theta),
            phi: Radian::new(phi),
        }
    }

    /// Creates a spherical vector from its radius and angles
    ///
    /// Angles may be given as [`Radian`] or as plain `f64` radians.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use spherevec::{Radian, SphereVector};
    ///
    /// let a = SphereVector::new(2.0, Radian::HALF_PI, 0.0);
    /// assert_eq!(a.theta, Radian::HALF_PI);
    /// assert_eq!(a.phi, Radian::ZERO);
    /// ```
    pub fn new(radius: f64, theta: impl Into<Radian>, phi: impl Into<Radian>) -> Self {
        SphereVector {
            radius,
            theta: theta.into(),
            phi: phi.into(),
        }
    }

    /// Creates a spherical vector with angles given in degrees
    pub fn from_degrees(radius: f64, theta_deg: f64, phi_deg: f64) -> Self {
        SphereVector::new(
            radius,
            Radian::from_degrees(theta_deg),
            Radian::from_degrees(phi_deg),
        )
    }

    /// Returns the Cartesian vector for this spherical coordinate
    ///
    /// Defined for every finite input; a zero radius gives the zero vector.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use spherevec::SphereVector;
    ///
    /// let v = SphereVector::from_degrees(1.0, 90.0, 90.0).to_cartesian();
    /// assert!((v.x - 1.0).abs() < 1e-15);
    /// assert!(v.y.abs() < 1e-15);
    /// assert!(v.z.abs() < 1e-15);
    /// ```
    pub fn to_cartesian(&self) -> Vector3<f64> {
        let sin_theta = self.theta.sin();
        Vector3::new(
            self.radius * sin_theta * self.phi.sin(),
            self.radius * self.theta.cos(),
            self.radius * sin_theta * self.phi.cos(),
        )
    }

    /// Returns the spherical coordinate of a Cartesian vector
    ///
    /// A zero length vector has no direction and yields [`SphereVector::ZERO`]
    /// without evaluating any angle.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use nalgebra::Vector3;
    /// use spherevec::SphereVector;
    ///
    /// assert_eq!(SphereVector::from_cartesian(&Vector3::zeros()), SphereVector::ZERO);
    /// assert_eq!(SphereVector::from_cartesian(&Vector3::y()), SphereVector::UNIT_Y);
    /// ```
    pub fn from_cartesian(cartesian: &Vector3<f64>) -> Self {
        // hypot avoids squaring, so huge and tiny components keep their length
        let horizontal = cartesian.x.hypot(cartesian.z);
        let radius = horizontal.hypot(cartesian.y);
        if radius == 0.0 {
            log::trace!("zero length vector converted to SphereVector::ZERO");
            return SphereVector::ZERO;
        }

        SphereVector {
            radius,
            theta: Radian::atan2(horizontal, cartesian.y),
            phi: Radian::atan2(cartesian.x, cartesian.z),
        }
    }

    /// Like [`SphereVector::from_cartesian`] but rejects input without a
    /// usable direction
    ///
    /// # Errors
    ///
    /// - [`SphericalError::NonFinite`] if any component is NaN or infinite
    /// - [`SphericalError::DegenerateVector`] for the zero vector
    pub fn try_from_cartesian(cartesian: &Vector3<f64>) -> Result<Self> {
        if !cartesian.iter().all(|c| c.is_finite()) {
            return Err(SphericalError::NonFinite {
                what: "cartesian vector",
            });
        }
        let sv = SphereVector::from_cartesian(cartesian);
        if sv.is_degenerate() {
            return Err(SphericalError::DegenerateVector);
        }
        Ok(sv)
    }

    /// True for the point at the origin
    pub fn is_degenerate(&self) -> bool {
        self.radius == 0.0
    }

    pub fn is_finite(&self) -> bool {
        self.radius.is_finite() && self.theta.is_finite() && self.phi.is_finite()
    }

    /// Returns the unit direction of this vector
    ///
    /// A negative radius points the opposite way of its angles.
    ///
    /// # Errors
    ///
    /// - [`SphericalError::NonFinite`] if any field is NaN or infinite
    /// - [`SphericalError::DegenerateVector`] if the radius is zero
    pub fn direction(&self) -> Result<Unit<Vector3<f64>>> {
        if !self.is_finite() {
            return Err(SphericalError::NonFinite {
                what: "spherical vector",
            });
        }
        if self.is_degenerate() {
            return Err(SphericalError::DegenerateVector);
        }
        // Direction from the angles alone; the radius only contributes its sign
        let unit = SphereVector {
            radius: self.radius.signum(),
            ..*self
        };
        Ok(Unit::new_normalize(unit.to_cartesian()))
    }

    /// Returns the rotation taking `axis` onto the direction of this vector
    ///
    /// # Examples
    ///
    /// ```rust
    /// use nalgebra::Vector3;
    /// use spherevec::SphereVector;
    ///
    /// let q = SphereVector::UNIT_Z.rotation_from(&Vector3::x());
    /// assert!((q * Vector3::x() - Vector3::z()).norm() < 1e-12);
    /// ```
    pub fn rotation_from(&self, axis: &Vector3<f64>) -> UnitQuaternion<f64> {
        rotation_between(axis, &self.to_cartesian())
    }

    /// Like [`SphereVector::rotation_from`] but fails when either end has no
    /// direction, instead of returning the identity
    pub fn try_rotation_from(&self, axis: &Vector3<f64>) -> Result<UnitQuaternion<f64>> {
        let target = self.direction()?;
        if !axis.iter().all(|c| c.is_finite()) {
            return Err(SphericalError::NonFinite { what: "axis" });
        }
        if axis.iter().all(|c| *c == 0.0) {
            return Err(SphericalError::DegenerateVector);
        }
        Ok(rotation_between(axis, &target))
    }

    /// Rotates the point around the origin
    pub fn rotate(&self, rotation: &UnitQuaternion<f64>) -> Self {
        SphereVector::from_cartesian(&(rotation * self.to_cartesian()))
    }

    /// Returns the equivalent value with radius ≥ 0, theta in [0, π] and
    /// phi in [0, 2π)
    ///
    /// The result describes the same Cartesian point up to rounding. The
    /// origin normalizes to [`SphereVector::ZERO`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use spherevec::SphereVector;
    ///
    /// let flipped = -SphereVector::UNIT_X;
    /// let canonical = flipped.canonical();
    /// assert!(canonical.radius > 0.0);
    /// assert!((canonical.to_cartesian() - flipped.to_cartesian()).norm() < 1e-12);
    /// ```
    pub fn canonical(&self) -> Self {
        let mut sv = SphereVector::from_cartesian(&self.to_cartesian());
        sv.phi = sv.phi.wrap_two_pi();
        sv
    }

    /// Angle between the directions of two vectors, in [0, π]
    ///
    /// Zero when either vector is degenerate.
    pub fn angle_to(&self, other: &SphereVector) -> Radian {
        let a = self.to_cartesian();
        let b = other.to_cartesian();
        // atan2 stays accurate near 0 and π where acos of the dot product does not
        Radian::atan2(a.cross(&b).norm(), a.dot(&b))
    }
}

impl From<Vector3<f64>> for SphereVector {
    fn from(cartesian: Vector3<f64>) -> Self {
        SphereVector::from_cartesian(&cartesian)
    }
}

impl From<&Vector3<f64>> for SphereVector {
    fn from(cartesian: &Vector3<f64>) -> Self {
        SphereVector::from_cartesian(cartesian)
    }
}

impl From<SphereVector> for Vector3<f64> {
    fn from(sv: SphereVector) -> Self {
        sv.to_cartesian()
    }
}

impl fmt::Display for SphereVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "(r={}, θ={}°, φ={}°)",
            self.radius,
            self.theta.degrees(),
            self.phi.degrees()
        )
    }
}

impl Neg for SphereVector {
    type Output = SphereVector;

    fn neg(self) -> SphereVector {
        SphereVector {
            radius: -self.radius,
            theta: -self.theta,
            phi: -self.phi,
        }
    }
}

impl Add for SphereVector {
    type Output = SphereVector;

    fn add(self, other: SphereVector) -> SphereVector {
        SphereVector {
            radius: self.radius + other.radius,
            theta: self.theta + other.theta,
            phi: self.phi + other.phi,
        }
    }
}

impl Sub for SphereVector {
    type Output = SphereVector;

    fn sub(self, other: SphereVector) -> SphereVector {
        self + (-other)
    }
}

impl AddAssign for SphereVector {
    fn add_assign(&mut self, other: SphereVector) {
        *self = *self + other;
    }
}

impl SubAssign for SphereVector {
    fn sub_assign(&mut self, other: SphereVector) {
        *self = *self - other;
    }
}

impl Mul<UnitQuaternion<f64>> for SphereVector {
    type Output = SphereVector;

    fn mul(self, rotation: UnitQuaternion<f64>) -> SphereVector {
        self.rotate(&rotation)
    }
}

impl Mul<&UnitQuaternion<f64>> for SphereVector {
    type Output = SphereVector;

    fn mul(self, rotation: &UnitQuaternion<f64>) -> SphereVector {
        self.rotate(rotation)
    }
}

impl Mul<SphereVector> for UnitQuaternion<f64> {
    type Output = SphereVector;

    fn mul(self, sv: SphereVector) -> SphereVector {
        sv.rotate(&self)
    }
}

impl MulAssign<UnitQuaternion<f64>> for SphereVector {
    fn mul_assign(&mut self, rotation: UnitQuaternion<f64>) {
        *self = self.rotate(&rotation);
    }
}

impl AbsDiffEq for SphereVector {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.radius.abs_diff_eq(&other.radius, epsilon)
            && self.theta.abs_diff_eq(&other.theta, epsilon)
            && self.phi.abs_diff_eq(&other.phi, epsilon)
    }
}

impl RelativeEq for SphereVector {
    fn default_max_relative() -> f64 {
        f64::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f64, max_relative: f64) -> bool {
        self.radius.relative_eq(&other.radius, epsilon, max_relative)
            && self.theta.relative_eq(&other.theta, epsilon, max_relative)
            && self.phi.relative_eq(&other.phi, epsilon, max_relative)
    }
}
