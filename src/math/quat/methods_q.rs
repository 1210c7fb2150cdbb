/* ************************************************************************ **
** This file is part of fixmat, and is licensed under EITHER the MIT        **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Conversions between unit quaternions and other rotation representations.
//!
//! Matrices use the column-vector convention: `&R * v` rotates `v`.
//! All angles are in radians.
//!
//! Euler angles follow a y-z-x order. `yaw` is about the y axis, `roll` about
//! the z axis, and `pitch` about the x axis, and
//! `from_euler(roll, pitch, yaw) = q_y(yaw) * q_z(roll) * q_x(pitch)`.

use crate::Quaternion;
use fixmat_array_types::{mat, V3, M3, M33, M44, Field};
use fixmat_array_types::internal::PrimitiveFloat;

#[cfg(feature = "serde")]
use serde::{Serialize, Deserialize};

// ---------------------------------------------------------------------------
// ------------------------------ PUBLIC API ---------------------------------

/// Hamilton product.
#[inline(always)]
pub fn mul<X: Field + PrimitiveFloat>(a: &Quaternion<X>, b: &Quaternion<X>) -> Quaternion<X>
{ a * b }

/// `a * conj(b) / |b|^2`. A zero `b` produces NaNs and infinities.
#[inline(always)]
pub fn div<X: Field + PrimitiveFloat>(a: &Quaternion<X>, b: &Quaternion<X>) -> Quaternion<X>
{ a / b }

/// `(x, -y, -z, w)`. See `Quaternion::conj` for the textbook conjugate.
#[inline(always)]
pub fn conjugate_yz<X: Field + PrimitiveFloat>(q: &Quaternion<X>) -> Quaternion<X>
{ q.conjugate_yz() }

/// Euler angles in radians. See the module documentation for the axis order.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EulerAngles<X=f64> {
    /// Rotation about z.
    pub roll: X,
    /// Rotation about x.
    pub pitch: X,
    /// Rotation about y.
    pub yaw: X,
}

/// Images of the three basis vectors under a rotation.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Axes<X=f64> {
    pub x: V3<X>,
    pub y: V3<X>,
    pub z: V3<X>,
}

/// Thresholds used by the conversions out of a quaternion.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Tolerances {
    /// `to_euler` takes the gimbal lock branch when `|xy + zw|` exceeds this.
    pub gimbal_threshold: f64,
    /// `to_euler` snaps angles at most this large (in magnitude) to zero.
    pub euler_snap_tol: f64,
    /// `to_angle_axis` treats a vector part with a norm at most this large
    /// as no rotation at all.
    pub zero_axis_tol: f64,
}

impl Default for Tolerances {
    fn default() -> Self {
        Tolerances {
            gimbal_threshold: 0.499,
            euler_snap_tol: std::f64::EPSILON,
            zero_axis_tol: 0.0,
        }
    }
}

/// Shepperd's method.
///
/// The input should be a proper rotation matrix; anything else produces a
/// meaningless (possibly non-unit) quaternion.
pub fn from_rotation_matrix<X: Field + PrimitiveFloat>(m: &M33<X>) -> Quaternion<X> {
    let [
        [m00, m01, m02],
        [m10, m11, m12],
        [m20, m21, m22],
    ] = m.into_array();

    let one = X::one();
    let two = X::two();
    let quarter = X::from_float(0.25);

    let trace = m00 + m11 + m22;
    if trace > X::zero() {
        let s = X::from_float(0.5) / (trace + one).sqrt();
        Quaternion::new((m21 - m12) * s, (m02 - m20) * s, (m10 - m01) * s, quarter / s)
    } else if m00 >= m11 && m00 >= m22 {
        let s = two * (one + m00 - m11 - m22).sqrt();
        Quaternion::new(quarter * s, (m01 + m10) / s, (m02 + m20) / s, (m21 - m12) / s)
    } else if m11 > m22 {
        let s = two * (one + m11 - m00 - m22).sqrt();
        Quaternion::new((m01 + m10) / s, quarter * s, (m12 + m21) / s, (m02 - m20) / s)
    } else {
        let s = two * (one + m22 - m00 - m11).sqrt();
        Quaternion::new((m02 + m20) / s, (m12 + m21) / s, quarter * s, (m10 - m01) / s)
    }
}

/// 3x3 rotation matrix of a unit quaternion.
pub fn to_rotation_matrix<X: Field + PrimitiveFloat>(q: &Quaternion<X>) -> M33<X> {
    let Quaternion { x, y, z, w } = *q;
    let one = X::one();
    let two = X::two();

    mat::from_array([
        [one - two * (y * y + z * z), two * (x * y - z * w), two * (x * z + y * w)],
        [two * (x * y + z * w), one - two * (x * x + z * z), two * (y * z - x * w)],
        [two * (x * z - y * w), two * (y * z + x * w), one - two * (x * x + y * y)],
    ])
}

/// 4x4 homogeneous transform of a unit quaternion, with no translation.
#[inline]
pub fn to_matrix<X: Field + PrimitiveFloat>(q: &Quaternion<X>) -> M44<X>
{ mat::embed(&to_rotation_matrix(q)) }

/// Rotation by `angle` about a unit `axis`.
pub fn from_axis_angle<X: Field + PrimitiveFloat>(axis: &V3<X>, angle: X) -> Quaternion<X> {
    let half = angle / X::two();
    Quaternion::from_vw(axis * half.sin(), half.cos())
}

/// `to_angle_axis_with` using the default tolerances.
#[inline]
pub fn to_angle_axis<X: Field + PrimitiveFloat>(q: &Quaternion<X>) -> (X, V3<X>)
{ to_angle_axis_with(q, &Tolerances::default()) }

/// Angle in `[0, 2pi]` and unit axis of a unit quaternion.
///
/// When the rotation is trivial there is no meaningful axis, and this
/// returns an angle of zero about the x axis.
pub fn to_angle_axis_with<X: Field + PrimitiveFloat>(q: &Quaternion<X>, tol: &Tolerances) -> (X, V3<X>) {
    let vector = q.vector();
    let norm = vector.norm();
    if norm <= X::from_float(tol.zero_axis_tol) {
        trace!("quaternion has no rotation axis (|v| = {:?})", norm);
        return (X::zero(), V3::axis_unit(0));
    }

    let w = q.w.max(-X::one()).min(X::one());
    (X::two() * w.acos(), vector / norm)
}

/// Rotation from Euler angles. See the module documentation for the axis order.
pub fn from_euler<X: Field + PrimitiveFloat>(roll: X, pitch: X, yaw: X) -> Quaternion<X> {
    let two = X::two();
    let (s1, c1) = (yaw / two).sin_cos();
    let (s2, c2) = (roll / two).sin_cos();
    let (s3, c3) = (pitch / two).sin_cos();

    Quaternion::new(
        s1 * s2 * c3 + c1 * c2 * s3,
        s1 * c2 * c3 + c1 * s2 * s3,
        c1 * s2 * c3 - s1 * c2 * s3,
        c1 * c2 * c3 - s1 * s2 * s3,
    )
}

/// `to_euler_with` using the default tolerances.
#[inline]
pub fn to_euler<X: Field + PrimitiveFloat>(q: &Quaternion<X>) -> EulerAngles<X>
{ to_euler_with(q, &Tolerances::default()) }

/// Euler angles of a unit quaternion.
///
/// Near `roll = ±pi/2` the other two angles are not independent. Past the
/// gimbal threshold, all of the remaining rotation is attributed to `yaw`
/// and `pitch` is zero.
pub fn to_euler_with<X: Field + PrimitiveFloat>(q: &Quaternion<X>, tol: &Tolerances) -> EulerAngles<X> {
    let Quaternion { x, y, z, w } = *q;
    let one = X::one();
    let two = X::two();
    let threshold = X::from_float(tol.gimbal_threshold);

    let test = x * y + z * w;
    let angles = if test > threshold {
        trace!("euler extraction at north pole singularity (xy + zw = {:?})", test);
        EulerAngles {
            yaw: two * x.atan2(w),
            roll: X::FRAC_PI_2(),
            pitch: X::zero(),
        }
    } else if test < -threshold {
        trace!("euler extraction at south pole singularity (xy + zw = {:?})", test);
        EulerAngles {
            yaw: -two * x.atan2(w),
            roll: -X::FRAC_PI_2(),
            pitch: X::zero(),
        }
    } else {
        EulerAngles {
            yaw: (two * y * w - two * x * z).atan2(one - two * y * y - two * z * z),
            roll: (two * test).asin(),
            pitch: (two * x * w - two * y * z).atan2(one - two * x * x - two * z * z),
        }
    };

    let snap_tol = X::from_float(tol.euler_snap_tol);
    let snap = |angle: X| if angle.abs() <= snap_tol { X::zero() } else { angle };
    EulerAngles {
        roll: snap(angles.roll),
        pitch: snap(angles.pitch),
        yaw: snap(angles.yaw),
    }
}

/// Images of the basis vectors; i.e. the columns of the rotation matrix.
pub fn to_axes<X: Field + PrimitiveFloat>(q: &Quaternion<X>) -> Axes<X> {
    let M3([x, y, z]) = to_rotation_matrix(q).t();
    Axes { x, y, z }
}

impl<X: Field + PrimitiveFloat> Quaternion<X> {
    /// See `quat::from_rotation_matrix`.
    #[inline(always)]
    pub fn from_rotation_matrix(m: &M33<X>) -> Self
    { from_rotation_matrix(m) }

    /// See `quat::to_rotation_matrix`.
    #[inline(always)]
    pub fn to_rotation_matrix(&self) -> M33<X>
    { to_rotation_matrix(self) }

    /// See `quat::to_matrix`.
    #[inline(always)]
    pub fn to_matrix(&self) -> M44<X>
    { to_matrix(self) }

    /// See `quat::from_axis_angle`.
    #[inline(always)]
    pub fn from_axis_angle(axis: &V3<X>, angle: X) -> Self
    { from_axis_angle(axis, angle) }

    /// See `quat::to_angle_axis`.
    #[inline(always)]
    pub fn to_angle_axis(&self) -> (X, V3<X>)
    { to_angle_axis(self) }

    /// See `quat::from_euler`.
    #[inline(always)]
    pub fn from_euler(roll: X, pitch: X, yaw: X) -> Self
    { from_euler(roll, pitch, yaw) }

    /// See `quat::to_euler`.
    #[inline(always)]
    pub fn to_euler(&self) -> EulerAngles<X>
    { to_euler(self) }

    /// See `quat::to_axes`.
    #[inline(always)]
    pub fn to_axes(&self) -> Axes<X>
    { to_axes(self) }
}

// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng, XorShiftRng};
    use std::f64::consts::{PI, FRAC_PI_2};

    type Q = Quaternion<f64>;

    fn rng() -> XorShiftRng { XorShiftRng::from_seed([1, 4, 1, 4]) }

    // Unit quaternions q and -q are the same rotation.
    fn assert_same_rotation(a: &Q, b: &Q) {
        let sign = if a.dot(b) < 0.0 { -1.0 } else { 1.0 };
        assert_close!(abs=1e-10, a.into_array(), (b * sign).into_array());
    }

    #[test]
    fn identity_matrix() {
        assert_eq!(Q::identity(), from_rotation_matrix(&M33::eye()));
        assert!(mat::is_eye(&to_rotation_matrix(&Q::identity())));
        assert!(mat::is_eye(&to_matrix(&Q::identity())));
    }

    #[test]
    fn matrix_round_trip_all_branches() {
        let half = FRAC_PI_2 / 2.0;
        let cases = vec![
            // trace > 0
            Quaternion::new(0.1, 0.2, 0.3, 0.9).normalized(),
            // half turns about each axis force the three other branches
            Quaternion::new(1.0, 0.0, 0.0, 0.0),
            Quaternion::new(0.0, 1.0, 0.0, 0.0),
            Quaternion::new(0.0, 0.0, 1.0, 0.0),
            Quaternion::new(0.7, 0.2, -0.1, 0.05).normalized(),
            Quaternion::new(0.1, -0.8, 0.3, 0.1).normalized(),
            Quaternion::new(-0.2, 0.1, 0.9, -0.1).normalized(),
            Quaternion::new(half.sin(), 0.0, 0.0, half.cos()),
        ];
        for q in cases {
            assert_same_rotation(&q, &from_rotation_matrix(&to_rotation_matrix(&q)));
        }

        let mut rng = rng();
        for _ in 0..100 {
            let q = Q::random_rotation_with(&mut rng);
            assert_same_rotation(&q, &Q::from_rotation_matrix(&q.to_rotation_matrix()));
        }
    }

    #[test]
    fn rotation_matrix_is_orthonormal() {
        let mut rng = rng();
        for _ in 0..20 {
            let r = Q::random_rotation_with(&mut rng).to_rotation_matrix();
            assert!((&r * &r.t()).is_eye_within(1e-12));
            assert_close!(abs=1e-12, 1.0, r.det());
        }
    }

    #[test]
    fn matrix_agrees_with_rotate() {
        let mut rng = rng();
        for _ in 0..20 {
            let q = Q::random_rotation_with(&mut rng);
            let v = V3([rng.gen_range(-1.0, 1.0), rng.gen_range(-1.0, 1.0), rng.gen_range(-1.0, 1.0)]);
            assert_close!(abs=1e-12, (&q.to_rotation_matrix() * &v).0, q.rotate(&v).0);
        }
    }

    #[test]
    fn composition_matches_matrix_product() {
        let mut rng = rng();
        let a = Q::random_rotation_with(&mut rng);
        let b = Q::random_rotation_with(&mut rng);
        let expected: M33 = &a.to_rotation_matrix() * &b.to_rotation_matrix();
        assert_close!(abs=1e-12, expected.into_array(), (a * b).to_rotation_matrix().into_array());
    }

    #[test]
    fn homogeneous_matrix() {
        let q = Q::from_axis_angle(&V3([0.0, 0.0, 1.0]), FRAC_PI_2);
        let m: M44 = q.to_matrix();
        assert_eq!([0.0, 0.0, 0.0, 1.0], m[3].0);
        assert_eq!(0.0, m[0][3]);
        assert_close!(abs=1e-12, [0.0, 1.0, 0.0, 1.0], (&m * &fixmat_array_types::V4([1.0, 0.0, 0.0, 1.0])).0);
    }

    #[test]
    fn axis_angle_half_turn() {
        let q = from_axis_angle(&V3([1.0, 0.0, 0.0]), PI);
        let (angle, axis) = to_angle_axis(&q);
        assert_close!(abs=1e-12, PI, angle);
        assert_close!(abs=1e-12, [1.0, 0.0, 0.0], axis.0);
    }

    #[test]
    fn axis_angle_round_trip() {
        let axis = V3([1.0, -2.0, 2.0]) / 3.0;
        for &angle in &[0.1, 1.0, 2.5, 3.0] {
            let (angle_out, axis_out) = Q::from_axis_angle(&axis, angle).to_angle_axis();
            assert_close!(abs=1e-12, angle, angle_out);
            assert_close!(abs=1e-12, axis.0, axis_out.0);
        }
    }

    #[test]
    fn axis_angle_zero_vector() {
        assert_eq!((0.0, V3([1.0, 0.0, 0.0])), to_angle_axis(&Q::identity()));

        // a tiny rotation still has an axis by default...
        let q = Q::from_axis_angle(&V3([0.0, 1.0, 0.0]), 1e-10);
        assert_eq!(V3([0.0, 1.0, 0.0]), to_angle_axis(&q).1);

        // ...unless the tolerance says otherwise
        let tol = Tolerances { zero_axis_tol: 1e-8, ..Default::default() };
        assert_eq!((0.0, V3([1.0, 0.0, 0.0])), to_angle_axis_with(&q, &tol));
    }

    #[test]
    fn euler_single_axes() {
        let (s, c) = (0.3f64.sin(), 0.3f64.cos());

        // roll is about z
        assert_close!(abs=1e-14, [0.0, 0.0, s, c], from_euler(0.6, 0.0, 0.0).into_array());
        // pitch is about x
        assert_close!(abs=1e-14, [s, 0.0, 0.0, c], from_euler(0.0, 0.6, 0.0).into_array());
        // yaw is about y
        assert_close!(abs=1e-14, [0.0, s, 0.0, c], from_euler(0.0, 0.0, 0.6).into_array());
    }

    #[test]
    fn euler_factor_order() {
        let (roll, pitch, yaw) = (0.4, -1.1, 2.3);
        let q_roll = Q::from_axis_angle(&V3([0.0, 0.0, 1.0]), roll);
        let q_pitch = Q::from_axis_angle(&V3([1.0, 0.0, 0.0]), pitch);
        let q_yaw = Q::from_axis_angle(&V3([0.0, 1.0, 0.0]), yaw);
        let expected = &(&q_yaw * &q_roll) * &q_pitch;
        assert_close!(abs=1e-12, expected.into_array(), from_euler(roll, pitch, yaw).into_array());
    }

    #[test]
    fn euler_round_trip() {
        let mut rng = rng();
        for _ in 0..200 {
            let roll = rng.gen_range(-1.45, 1.45);
            let pitch = rng.gen_range(-3.0, 3.0);
            let yaw = rng.gen_range(-3.0, 3.0);
            let angles = to_euler(&from_euler(roll, pitch, yaw));
            assert_close!(abs=1e-9, [roll, pitch, yaw], [angles.roll, angles.pitch, angles.yaw]);
        }
    }

    #[test]
    fn euler_gimbal_threshold() {
        // with no pitch or yaw, xy + zw = sin(roll) / 2

        // sin(1.50) / 2 = 0.49875: general branch
        let angles = Q::from_euler(1.50, 0.0, 0.0).to_euler();
        assert_close!(abs=1e-10, 1.50, angles.roll);
        assert_eq!(0.0, angles.pitch);
        assert_eq!(0.0, angles.yaw);

        // sin(1.52) / 2 = 0.49936: north pole
        let angles = Q::from_euler(1.52, 0.0, 0.0).to_euler();
        assert_eq!(EulerAngles { roll: FRAC_PI_2, pitch: 0.0, yaw: 0.0 }, angles);

        // south pole
        let angles = Q::from_euler(-1.52, 0.0, 0.0).to_euler();
        assert_eq!(EulerAngles { roll: -FRAC_PI_2, pitch: 0.0, yaw: 0.0 }, angles);

        // a stricter threshold moves 1.50 into the north pole branch
        let tol = Tolerances { gimbal_threshold: 0.498, ..Default::default() };
        let angles = to_euler_with(&from_euler(1.50, 0.0, 0.0), &tol);
        assert_eq!(FRAC_PI_2, angles.roll);
    }

    #[test]
    fn euler_gimbal_keeps_rotation() {
        // in gimbal lock, yaw absorbs the pitch
        let q = from_euler(FRAC_PI_2, 0.2, 0.5);
        let angles = to_euler(&q);
        assert_eq!(FRAC_PI_2, angles.roll);
        assert_eq!(0.0, angles.pitch);
        assert_same_rotation(&q, &from_euler(angles.roll, angles.pitch, angles.yaw));
    }

    #[test]
    fn euler_snaps_to_zero() {
        let angles = to_euler(&Q::identity());
        assert_eq!(EulerAngles { roll: 0.0, pitch: 0.0, yaw: 0.0 }, angles);
        assert!(angles.roll.is_sign_positive());

        let q = from_euler(1e-17, 0.0, 0.0);
        assert_eq!(0.0, to_euler(&q).roll);

        let tol = Tolerances { euler_snap_tol: 1e-6, ..Default::default() };
        assert_eq!(0.0, to_euler_with(&from_euler(0.0, 1e-7, 0.0), &tol).pitch);
    }

    #[test]
    fn axes_are_matrix_columns() {
        let q = Q::from_axis_angle(&V3([0.0, 0.0, 1.0]), FRAC_PI_2);
        let Axes { x, y, z } = q.to_axes();
        assert_close!(abs=1e-12, [0.0, 1.0, 0.0], x.0);
        assert_close!(abs=1e-12, [-1.0, 0.0, 0.0], y.0);
        assert_close!(abs=1e-12, [0.0, 0.0, 1.0], z.0);
    }

    #[test]
    fn free_function_forms() {
        let a = Quaternion::new(1.0, 2.0, 3.0, 4.0);
        let b = Quaternion::new(-1.0, 0.5, 2.0, 1.0);
        assert_eq!(&a * &b, mul(&a, &b));
        assert_eq!(&a / &b, div(&a, &b));
        assert_eq!(Quaternion::new(1.0, -2.0, -3.0, 4.0), conjugate_yz(&a));
    }
}
