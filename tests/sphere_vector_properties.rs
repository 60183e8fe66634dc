//! Property checks for SphereVector over sampled vectors and rotations

use approx::assert_abs_diff_eq;
use nalgebra::{UnitQuaternion, Vector3};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rstest::{fixture, rstest};
use spherevec::{Radian, SphereVector, SphericalError};

const TOL: f64 = 1e-10;
const SAMPLES: usize = 500;

#[fixture]
fn rng() -> StdRng {
    StdRng::seed_from_u64(0x5eed_1234)
}

fn random_vector(rng: &mut StdRng) -> Vector3<f64> {
    Vector3::new(
        rng.gen_range(-100.0..100.0),
        rng.gen_range(-100.0..100.0),
        rng.gen_range(-100.0..100.0),
    )
}

fn random_sphere_vector(rng: &mut StdRng) -> SphereVector {
    SphereVector::new(
        rng.gen_range(-10.0..10.0),
        Radian::new(rng.gen_range(-7.0..7.0)),
        Radian::new(rng.gen_range(-7.0..7.0)),
    )
}

fn random_rotation(rng: &mut StdRng) -> UnitQuaternion<f64> {
    UnitQuaternion::from_euler_angles(
        rng.gen_range(-3.0..3.0),
        rng.gen_range(-1.5..1.5),
        rng.gen_range(-3.0..3.0),
    )
}

#[rstest]
fn round_trip_through_cartesian(mut rng: StdRng) {
    for _ in 0..SAMPLES {
        let v = random_vector(&mut rng);
        if v.norm() < 1e-6 {
            continue;
        }
        let back = SphereVector::from_cartesian(&v).to_cartesian();
        assert_abs_diff_eq!(back, v, epsilon = TOL);
    }
}

#[rstest]
#[case(Vector3::new(1.0, 0.0, 0.0))]
#[case(Vector3::new(0.0, 0.0, -3.0))]
#[case(Vector3::new(0.0, 2.0, 0.0))]
#[case(Vector3::new(0.0, -2.0, 0.0))]
#[case(Vector3::new(-1e-9, 0.0, 1e-9))]
#[case(Vector3::new(1e6, -1e6, 1e6))]
#[case(Vector3::new(1e200, 0.0, 1e200))]
#[case(Vector3::new(-1e300, 1e300, 1e300))]
#[case(Vector3::new(1e-200, 0.0, 0.0))]
#[case(Vector3::new(0.0, -1e-300, 1e-300))]
fn round_trip_edge_vectors(#[case] v: Vector3<f64>) {
    let sv = SphereVector::from_cartesian(&v);
    let length = v.x.hypot(v.z).hypot(v.y);
    assert!(sv.radius.is_finite() && sv.radius > 0.0);
    assert_eq!(sv.radius, length);
    assert_abs_diff_eq!(sv.to_cartesian(), v, epsilon = TOL * length);
    assert!(SphereVector::try_from_cartesian(&v).is_ok());
}

#[test]
fn zero_vector_is_degenerate() {
    assert_eq!(
        SphereVector::from_cartesian(&Vector3::zeros()),
        SphereVector::ZERO
    );
    assert_eq!(
        SphereVector::try_from_cartesian(&Vector3::zeros()),
        Err(SphericalError::DegenerateVector)
    );
}

#[rstest]
#[case(SphereVector::UNIT_X, Vector3::new(1.0, 0.0, 0.0))]
#[case(SphereVector::UNIT_Y, Vector3::new(0.0, 1.0, 0.0))]
#[case(SphereVector::UNIT_Z, Vector3::new(0.0, 0.0, 1.0))]
#[case(SphereVector::NEGATIVE_UNIT_X, Vector3::new(-1.0, 0.0, 0.0))]
#[case(SphereVector::NEGATIVE_UNIT_Y, Vector3::new(0.0, -1.0, 0.0))]
#[case(SphereVector::NEGATIVE_UNIT_Z, Vector3::new(0.0, 0.0, -1.0))]
fn named_constants_point_along_axes(#[case] constant: SphereVector, #[case] axis: Vector3<f64>) {
    assert_eq!(constant.radius, 1.0);
    assert_abs_diff_eq!(constant.to_cartesian(), axis, epsilon = 1e-15);
    assert_eq!(constant, SphereVector::from_cartesian(&axis));
}

#[test]
fn documented_example_maps_to_x() {
    let sv = SphereVector::new(1.0, Radian::from_degrees(90.0), Radian::from_degrees(90.0));
    assert_abs_diff_eq!(sv.to_cartesian(), Vector3::x(), epsilon = 1e-15);
}

#[rstest]
fn additive_inverse_is_zero(mut rng: StdRng) {
    for _ in 0..SAMPLES {
        let a = random_sphere_vector(&mut rng);
        assert_eq!(a + (-a), SphereVector::ZERO);
    }
}

#[rstest]
fn subtraction_adds_the_negation(mut rng: StdRng) {
    for _ in 0..SAMPLES {
        let a = random_sphere_vector(&mut rng);
        let b = random_sphere_vector(&mut rng);
        assert_eq!(a - b, a + (-b));

        let mut c = a;
        c -= b;
        assert_eq!(c, a - b);
        c += b;
        assert_eq!(c, a - b + b);
    }
}

#[rstest]
fn identity_rotation_keeps_the_point(mut rng: StdRng) {
    let identity = UnitQuaternion::<f64>::identity();
    for _ in 0..SAMPLES {
        let sv = random_sphere_vector(&mut rng);
        let rotated = sv * identity;
        assert_abs_diff_eq!(rotated.to_cartesian(), sv.to_cartesian(), epsilon = TOL);
    }
}

#[rstest]
fn rotation_matches_cartesian_rotation(mut rng: StdRng) {
    for _ in 0..SAMPLES {
        let sv = random_sphere_vector(&mut rng);
        let q = random_rotation(&mut rng);

        let expected = q * sv.to_cartesian();
        let rotated = sv * q;
        assert_abs_diff_eq!(rotated.to_cartesian(), expected, epsilon = TOL);
        assert_eq!(q * sv, rotated);

        let mut in_place = sv;
        in_place *= q;
        assert_eq!(in_place, rotated);
    }
}

#[rstest]
fn rotation_from_reaches_the_direction(mut rng: StdRng) {
    for _ in 0..SAMPLES {
        let sv = random_sphere_vector(&mut rng);
        let axis = random_vector(&mut rng);
        if sv.is_degenerate() || axis.norm() < 1e-6 {
            continue;
        }
        let q = sv.rotation_from(&axis);
        let reached = q * axis.normalize();
        let direction = sv.direction().unwrap().into_inner();
        assert_abs_diff_eq!(reached, direction, epsilon = TOL);
    }
}

#[test]
fn rotation_from_opposite_axis() {
    let q = SphereVector::NEGATIVE_UNIT_Z.rotation_from(&Vector3::z());
    assert_abs_diff_eq!(q * Vector3::z(), -Vector3::z(), epsilon = 1e-12);

    // A short axis pointing the opposite way still yields a half turn
    let q = SphereVector::NEGATIVE_UNIT_Y.rotation_from(&Vector3::new(0.0, 1e-7, 0.0));
    assert!(q.coords.iter().all(|c| c.is_finite()));
    assert_abs_diff_eq!(q * Vector3::y(), -Vector3::y(), epsilon = 1e-12);
}

#[rstest]
fn equality_is_reflexive_and_exact(mut rng: StdRng) {
    for _ in 0..SAMPLES {
        let a = random_sphere_vector(&mut rng);
        assert_eq!(a, a);
        assert_eq!(a, SphereVector::new(a.radius, a.theta, a.phi));
    }

    let a = SphereVector::new(1.0, 0.5, 2.0);
    let b = SphereVector::new(2.0, 1.0, 4.0) + SphereVector::new(-1.0, -0.5, -2.0);
    assert_eq!(a, b);
    assert!(!(a != b));

    assert_ne!(a, SphereVector::new(1.5, 0.5, 2.0));
    assert_ne!(a, SphereVector::new(1.0, 0.6, 2.0));
    assert_ne!(a, SphereVector::new(1.0, 0.5, 2.1));
}

#[rstest]
fn canonical_ranges(mut rng: StdRng) {
    use std::f64::consts::{PI, TAU};

    for _ in 0..SAMPLES {
        let sv = random_sphere_vector(&mut rng);
        let canonical = sv.canonical();
        if canonical.is_degenerate() {
            continue;
        }
        assert!(canonical.radius > 0.0);
        assert!((0.0..=PI).contains(&canonical.theta.radians()));
        assert!((0.0..TAU).contains(&canonical.phi.radians()));
        assert_abs_diff_eq!(canonical.to_cartesian(), sv.to_cartesian(), epsilon = TOL);
    }
}

#[test]
fn constants_are_shareable_across_threads() {
    let handles: Vec<_> = (0..4)
        .map(|_| std::thread::spawn(|| SphereVector::UNIT_X.to_cartesian()))
        .collect();
    for handle in handles {
        let v = handle.join().unwrap();
        assert_abs_diff_eq!(v, Vector3::x(), epsilon = 1e-15);
    }
}
