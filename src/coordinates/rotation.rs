//! Rotation helpers over nalgebra quaternions

use std::f64::consts::PI;

use nalgebra::{Unit, UnitQuaternion, Vector3};

// Below this length a cross product is treated as collinear
const COLLINEAR_EPSILON: f64 = 1e-6;

/// Returns the minimal rotation taking the direction of `from` onto the
/// direction of `to`
///
/// Lengths are ignored, however short or long. If either vector has zero
/// length or a non-finite component the identity is returned. Anti-parallel
/// vectors have no unique minimal rotation; in that case the result is a
/// half turn about an axis perpendicular to `from`.
///
/// # Examples
///
/// ```rust
/// use nalgebra::Vector3;
/// use spherevec::rotation_between;
///
/// let q = rotation_between(&Vector3::x(), &Vector3::y());
/// assert!((q * Vector3::x() - Vector3::y()).norm() < 1e-12);
/// ```
pub fn rotation_between(from: &Vector3<f64>, to: &Vector3<f64>) -> UnitQuaternion<f64> {
    let (Some(from), Some(to)) = (rescaled(from), rescaled(to)) else {
        return UnitQuaternion::identity();
    };
    if let Some(rotation) = UnitQuaternion::rotation_between(&from, &to) {
        return rotation;
    }

    // nalgebra only gives up on opposite, non-zero vectors. `from` has its
    // largest component at ±1 here, so the threshold is relative to its length
    let mut axis = from.cross(&Vector3::x());
    if axis.norm() < COLLINEAR_EPSILON {
        axis = from.cross(&Vector3::y());
    }
    UnitQuaternion::from_axis_angle(&Unit::new_normalize(axis), PI)
}

// Scales so the largest component is ±1, keeping squared norms clear of
// underflow and overflow. None for zero or non-finite vectors.
fn rescaled(v: &Vector3<f64>) -> Option<Vector3<f64>> {
    if !v.iter().all(|c| c.is_finite()) {
        return None;
    }
    let largest = v.amax();
    if largest == 0.0 {
        None
    } else {
        Some(v / largest)
    }
}
