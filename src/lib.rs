//! Spherevec: spherical coordinate vectors on top of nalgebra
//!
//! This crate provides [`SphereVector`], a plain value type holding a point in
//! spherical coordinates (radius, polar angle, azimuthal angle), together with
//! conversions to and from `nalgebra::Vector3`, field-wise arithmetic and
//! rotation composition with `nalgebra::UnitQuaternion`.
//!
//! ```rust
//! use nalgebra::Vector3;
//! use spherevec::SphereVector;
//!
//! let sv = SphereVector::from_cartesian(&Vector3::new(0.0, 0.0, 2.0));
//! assert_eq!(sv.radius, 2.0);
//! assert!((sv.to_cartesian() - Vector3::new(0.0, 0.0, 2.0)).norm() < 1e-12);
//! ```

use thiserror::Error;

pub mod coordinates;

// Re-export commonly used types
pub use coordinates::angle::Radian;
pub use coordinates::rotation::rotation_between;
pub use coordinates::spherical::SphereVector;

/// Main error type for the spherevec library
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SphericalError {
    /// The vector has zero length, so it has no direction
    #[error("Degenerate vector: direction is undefined at the origin")]
    DegenerateVector,

    /// A component was NaN or infinite
    #[error("Non-finite value in {what}")]
    NonFinite {
        /// Which value was rejected
        what: &'static str,
    },
}

/// Result type for spherevec operations
pub type Result<T> = std::result::Result<T, SphericalError>;
