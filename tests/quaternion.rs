#[macro_use]
extern crate fixmat_assert_close;

#[macro_use]
mod shared;
use self::shared::util::*;

use fixmat::{quat, mat, Quaternion, EulerAngles, V3, M33};
use rand::Rng;
use std::f64::consts::{PI, FRAC_PI_2};

type Q = Quaternion<f64>;

#[test]
fn identity_is_neutral_both_sides() {
    let mut rng = seeded_rng(10);
    let unit = Q::new(0.0, 0.0, 0.0, 1.0);
    for _ in 0..20 {
        let q = Q::random_rotation_with(&mut rng) * rng.gen_range(0.5, 2.0);
        assert_eq!(q, quat::mul(&unit, &q));
        assert_eq!(q, quat::mul(&q, &unit));
    }
}

#[test]
fn identity_matrix_gives_identity_quaternion() {
    assert_eq!(Q::new(0.0, 0.0, 0.0, 1.0), quat::from_rotation_matrix(&M33::eye()));
}

#[test]
fn half_turn_about_x() {
    init_logger();
    let q = quat::from_axis_angle(&V3([1.0, 0.0, 0.0]), PI);
    let (angle, axis) = quat::to_angle_axis(&q);
    assert_close!(abs=1e-12, PI, angle);
    assert_close!(abs=1e-12, [1.0, 0.0, 0.0], axis.0);
}

#[test]
fn matrix_round_trip() {
    let mut rng = seeded_rng(11);
    for _ in 0..200 {
        let q = Q::random_rotation_with(&mut rng);
        let m = quat::to_rotation_matrix(&q);
        assert_same_rotation(&q, &quat::from_rotation_matrix(&m), 1e-10);

        let h = quat::to_matrix(&q);
        assert_eq!(mat::embed::<fixmat::M44, _>(&m), h);
    }
}

#[test]
fn division_is_multiplication_by_inverse() {
    let mut rng = seeded_rng(12);
    for _ in 0..20 {
        let a = Q::random_rotation_with(&mut rng);
        let b = Q::random_rotation_with(&mut rng) * 2.0;
        let expected = &a * &b.inverse();
        assert_close!(abs=1e-12, expected.into_array(), quat::div(&a, &b).into_array());
    }
}

#[test]
fn rotation_composition_matches_matrices() {
    let mut rng = seeded_rng(13);
    for _ in 0..20 {
        let a = Q::random_rotation_with(&mut rng);
        let b = Q::random_rotation_with(&mut rng);
        let v = random_v3(&mut rng);

        let by_quaternion = (a * b).rotate(&v);
        let by_matrix = &a.to_rotation_matrix() * &(&b.to_rotation_matrix() * &v);
        assert_close!(abs=1e-12, by_quaternion.0, by_matrix.0);
    }
}

#[test]
fn euler_round_trip_inside_band() {
    init_logger();
    let mut rng = seeded_rng(14);
    for _ in 0..500 {
        let angles = EulerAngles {
            roll: rng.gen_range(-1.4, 1.4),
            pitch: rng.gen_range(-3.1, 3.1),
            yaw: rng.gen_range(-3.1, 3.1),
        };
        let q = Q::from_euler(angles.roll, angles.pitch, angles.yaw);
        let out = q.to_euler();
        assert_close!(
            abs=1e-9,
            [angles.roll, angles.pitch, angles.yaw],
            [out.roll, out.pitch, out.yaw],
        );
    }
}

#[test]
fn euler_branch_switches_at_threshold() {
    init_logger();
    // with pitch = yaw = 0, the gimbal test value is sin(roll) / 2
    let below = (2.0 * 0.4989f64).asin();
    let above = (2.0 * 0.4991f64).asin();

    let out = Q::from_euler(below, 0.0, 0.0).to_euler();
    assert_close!(abs=1e-9, below, out.roll);

    let out = Q::from_euler(above, 0.0, 0.0).to_euler();
    assert_eq!(FRAC_PI_2, out.roll);
    assert_eq!(0.0, out.pitch);
    assert_eq!(0.0, out.yaw);
}

#[test]
fn axes_are_rotated_basis_vectors() {
    let mut rng = seeded_rng(15);
    let q = Q::random_rotation_with(&mut rng);
    let axes = quat::to_axes(&q);
    assert_close!(abs=1e-12, q.rotate(&V3([1.0, 0.0, 0.0])).0, axes.x.0);
    assert_close!(abs=1e-12, q.rotate(&V3([0.0, 1.0, 0.0])).0, axes.y.0);
    assert_close!(abs=1e-12, q.rotate(&V3([0.0, 0.0, 1.0])).0, axes.z.0);
    assert_close!(abs=1e-12, axes.x.cross(&axes.y).0, axes.z.0);
}

#[test]
fn literal_and_textbook_conjugates() {
    let q = Q::new(0.1, 0.2, 0.3, 0.9);
    assert_eq!(Q::new(0.1, -0.2, -0.3, 0.9), quat::conjugate_yz(&q));
    assert_eq!(Q::new(-0.1, -0.2, -0.3, 0.9), q.conj());
}

#[test]
fn single_precision_conversions() {
    let q = quat::from_rotation_matrix(&M33::<f32>::eye());
    assert_eq!(Quaternion::<f32>::new(0.0, 0.0, 0.0, 1.0), q);

    let q = Quaternion::<f32>::from_euler(0.3, -0.7, 1.2);
    let out = q.to_euler();
    assert_close!(abs=1e-5, [0.3f32, -0.7, 1.2], [out.roll, out.pitch, out.yaw]);

    let back = quat::from_rotation_matrix(&q.to_rotation_matrix());
    assert_close!(abs=1e-5, q.into_array(), back.into_array());

    let (angle, axis) = quat::to_angle_axis(&quat::from_axis_angle(&V3([0.0f32, 0.0, 1.0]), 0.5));
    assert_close!(abs=1e-5, 0.5f32, angle);
    assert_close!(abs=1e-5, [0.0f32, 0.0, 1.0], axis.0);
}

#[cfg(feature = "serde-support")]
#[test]
fn quaternions_serialize_by_component() {
    let q = Q::new(1.0, 2.0, 3.0, 4.0);
    let json = serde_json::to_string(&q).unwrap();
    assert_eq!(r#"{"x":1.0,"y":2.0,"z":3.0,"w":4.0}"#, json);
    assert_eq!(q, serde_json::from_str::<Q>(&json).unwrap());
}
