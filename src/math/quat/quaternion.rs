/* ************************************************************************ **
** This file is part of fixmat, and is licensed under EITHER the MIT        **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use fixmat_array_types::{V3, Field};
use fixmat_array_types::internal::PrimitiveFloat;
use std::ops::{Add, Sub, Mul, Div, Neg};

#[cfg(feature = "serde")]
use serde::{Serialize, Deserialize};

/// A quaternion `x i + y j + z k + w`.
///
/// Only unit quaternions represent rotations. Nothing in this crate
/// normalizes implicitly; the conversions to and from rotations simply
/// assume a unit input.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Quaternion<X=f64> {
    pub x: X,
    pub y: X,
    pub z: X,
    pub w: X,
}

impl<X> Quaternion<X> {
    #[inline(always)]
    pub fn new(x: X, y: X, z: X, w: X) -> Self
    { Quaternion { x, y, z, w } }

    /// Construct from components in `(x, y, z, w)` order.
    #[inline(always)]
    pub fn from_array([x, y, z, w]: [X; 4]) -> Self
    { Quaternion { x, y, z, w } }

    /// Components in `(x, y, z, w)` order.
    #[inline(always)]
    pub fn into_array(self) -> [X; 4]
    { [self.x, self.y, self.z, self.w] }

    /// Construct from a vector part and a scalar part.
    #[inline(always)]
    pub fn from_vw(V3([x, y, z]): V3<X>, w: X) -> Self
    { Quaternion { x, y, z, w } }
}

impl<X: Field + PrimitiveFloat> Quaternion<X> {
    /// The rotation by zero, `(0, 0, 0, 1)`.
    #[inline(always)]
    pub fn identity() -> Self
    { Quaternion::new(X::zero(), X::zero(), X::zero(), X::one()) }

    /// The vector part `(x, y, z)`.
    #[inline(always)]
    pub fn vector(&self) -> V3<X>
    { V3([self.x, self.y, self.z]) }

    /// The scalar part `w`.
    #[inline(always)]
    pub fn scalar(&self) -> X
    { self.w }

    /// The textbook conjugate, `(-x, -y, -z, w)`.
    ///
    /// For a unit quaternion this is the inverse rotation.
    #[inline(always)]
    pub fn conj(&self) -> Self
    { Quaternion::new(-self.x, -self.y, -self.z, self.w) }

    /// Negate only the `y` and `z` components, giving `(x, -y, -z, w)`.
    ///
    /// This is NOT the quaternion conjugate (see `conj`).
    #[inline(always)]
    pub fn conjugate_yz(&self) -> Self
    { Quaternion::new(self.x, -self.y, -self.z, self.w) }

    /// Four-dimensional inner product.
    #[inline(always)]
    pub fn dot(&self, other: &Self) -> X
    { self.x * other.x + self.y * other.y + self.z * other.z + self.w * other.w }

    #[inline(always)]
    pub fn sqnorm(&self) -> X
    { self.dot(self) }

    #[inline(always)]
    pub fn norm(&self) -> X
    { self.sqnorm().sqrt() }

    /// Scale to unit norm. A zero quaternion produces NaNs.
    #[inline]
    pub fn normalized(&self) -> Self
    { self * (X::one() / self.norm()) }

    /// Multiplicative inverse, `conj(q) / |q|^2`.
    #[inline]
    pub fn inverse(&self) -> Self
    { self.conj() * (X::one() / self.sqnorm()) }

    /// Rotate a vector by a unit quaternion, computing `q v conj(q)`.
    pub fn rotate(&self, v: &V3<X>) -> V3<X> {
        let pure = Quaternion::from_vw(*v, X::zero());
        (&(self * &pure) * &self.conj()).vector()
    }

    /// Spherical linear interpolation along the shorter arc.
    ///
    /// `t = 0` gives `self` and `t = 1` gives `other` (or `-other`, which is
    /// the same rotation). Both inputs should be unit quaternions.
    pub fn slerp(&self, other: &Self, t: X) -> Self {
        let mut other = *other;
        let mut cos = self.dot(&other);
        if cos < X::zero() {
            other = -other;
            cos = -cos;
        }

        // nearly parallel; sin(theta) is too small to divide by
        if cos > X::from_float(SLERP_LERP_THRESHOLD) {
            return (self + &((&other - self) * t)).normalized();
        }

        let theta_0 = cos.acos();
        let theta = theta_0 * t;
        let sin_0 = theta_0.sin();
        let s_self = theta.cos() - cos * theta.sin() / sin_0;
        let s_other = theta.sin() / sin_0;
        &(self * s_self) + &(other * s_other)
    }

    /// A uniformly-distributed random rotation.
    ///
    /// Uses Shoemake's method: three uniform samples mapped onto the unit 3-sphere.
    pub fn random_rotation_with(mut rng: impl rand::Rng) -> Self {
        let unit = (X::zero(), X::one());
        let u1 = X::uniform_with(&mut rng, unit);
        let u2 = X::uniform_with(&mut rng, unit);
        let u3 = X::uniform_with(&mut rng, unit);

        let two_pi = X::two() * X::PI();
        let a = (X::one() - u1).sqrt();
        let b = u1.sqrt();
        Quaternion::new(
            a * (two_pi * u2).sin(),
            a * (two_pi * u2).cos(),
            b * (two_pi * u3).sin(),
            b * (two_pi * u3).cos(),
        )
    }

    /// `random_rotation_with` using the thread-local RNG.
    pub fn random_rotation() -> Self
    { Self::random_rotation_with(rand::thread_rng()) }
}

const SLERP_LERP_THRESHOLD: f64 = 0.9995;

// ---------------------------------------------------------------------------
// Operators for every combination of owned and borrowed operands.

macro_rules! impl_binop_variants {
    (
        impl $Trait:ident::$method:ident,
        |$a:ident, $b:ident| $body:expr
    ) => {
        impl<'a, 'b, X: Field + PrimitiveFloat> $Trait<&'b Quaternion<X>> for &'a Quaternion<X> {
            type Output = Quaternion<X>;

            #[inline]
            fn $method(self, other: &'b Quaternion<X>) -> Quaternion<X> {
                let ($a, $b) = (self, other);
                $body
            }
        }

        impl<'b, X: Field + PrimitiveFloat> $Trait<&'b Quaternion<X>> for Quaternion<X> {
            type Output = Quaternion<X>;

            #[inline(always)]
            fn $method(self, other: &'b Quaternion<X>) -> Quaternion<X>
            { $Trait::$method(&self, other) }
        }

        impl<'a, X: Field + PrimitiveFloat> $Trait<Quaternion<X>> for &'a Quaternion<X> {
            type Output = Quaternion<X>;

            #[inline(always)]
            fn $method(self, other: Quaternion<X>) -> Quaternion<X>
            { $Trait::$method(self, &other) }
        }

        impl<X: Field + PrimitiveFloat> $Trait<Quaternion<X>> for Quaternion<X> {
            type Output = Quaternion<X>;

            #[inline(always)]
            fn $method(self, other: Quaternion<X>) -> Quaternion<X>
            { $Trait::$method(&self, &other) }
        }
    };
}

// Hamilton product
impl_binop_variants!{
    impl Mul::mul,
    |a, b| Quaternion {
        x: a.x * b.w + b.x * a.w + (a.y * b.z - a.z * b.y),
        y: a.y * b.w + b.y * a.w + (a.z * b.x - a.x * b.z),
        z: a.z * b.w + b.z * a.w + (a.x * b.y - a.y * b.x),
        w: a.w * b.w - (a.x * b.x + a.y * b.y + a.z * b.z),
    }
}

// a * conj(b) / |b|^2
impl_binop_variants!{
    impl Div::div,
    |a, b| (a * &b.conj()) * (X::one() / b.sqnorm())
}

impl_binop_variants!{
    impl Add::add,
    |a, b| Quaternion::new(a.x + b.x, a.y + b.y, a.z + b.z, a.w + b.w)
}

impl_binop_variants!{
    impl Sub::sub,
    |a, b| Quaternion::new(a.x - b.x, a.y - b.y, a.z - b.z, a.w - b.w)
}

// quaternion * scalar
impl<'a, X: Field + PrimitiveFloat> Mul<X> for &'a Quaternion<X> {
    type Output = Quaternion<X>;

    #[inline]
    fn mul(self, s: X) -> Quaternion<X>
    { Quaternion::new(self.x * s, self.y * s, self.z * s, self.w * s) }
}

impl<X: Field + PrimitiveFloat> Mul<X> for Quaternion<X> {
    type Output = Quaternion<X>;

    #[inline(always)]
    fn mul(self, s: X) -> Quaternion<X>
    { &self * s }
}

impl<'a, X: Field + PrimitiveFloat> Neg for &'a Quaternion<X> {
    type Output = Quaternion<X>;

    #[inline]
    fn neg(self) -> Quaternion<X>
    { Quaternion::new(-self.x, -self.y, -self.z, -self.w) }
}

impl<X: Field + PrimitiveFloat> Neg for Quaternion<X> {
    type Output = Quaternion<X>;

    #[inline(always)]
    fn neg(self) -> Quaternion<X>
    { -&self }
}

impl<X> From<[X; 4]> for Quaternion<X> {
    #[inline(always)]
    fn from(arr: [X; 4]) -> Self
    { Quaternion::from_array(arr) }
}

// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, XorShiftRng};

    type Q = Quaternion<f64>;

    fn rng() -> XorShiftRng { XorShiftRng::from_seed([2, 7, 1, 8]) }

    fn q(x: f64, y: f64, z: f64, w: f64) -> Q { Quaternion::new(x, y, z, w) }

    #[test]
    fn identity_is_neutral() {
        let a = q(1.5, -2.0, 0.25, 3.0);
        assert_eq!(a, Q::identity() * a);
        assert_eq!(a, a * Q::identity());
        assert_eq!(a, &a * &q(0.0, 0.0, 0.0, 1.0));
    }

    #[test]
    fn hamilton_basis() {
        let i = q(1.0, 0.0, 0.0, 0.0);
        let j = q(0.0, 1.0, 0.0, 0.0);
        let k = q(0.0, 0.0, 1.0, 0.0);
        let minus_one = q(0.0, 0.0, 0.0, -1.0);

        assert_eq!(k, i * j);
        assert_eq!(-k, j * i);
        assert_eq!(i, j * k);
        assert_eq!(j, k * i);
        assert_eq!(minus_one, i * i);
        assert_eq!(minus_one, &(&i * &j) * &k);
    }

    #[test]
    fn division_undoes_multiplication() {
        let mut rng = rng();
        for _ in 0..20 {
            let a = Q::random_rotation_with(&mut rng);
            let b = Q::random_rotation_with(&mut rng) * 3.0;
            let c = &(&a * &b) / &b;
            assert_close!(abs=1e-12, a.into_array(), c.into_array());
        }
    }

    #[test]
    fn division_by_zero_is_nonfinite() {
        let c = q(1.0, 2.0, 3.0, 4.0) / q(0.0, 0.0, 0.0, 0.0);
        assert!(c.into_array().iter().all(|x| !x.is_finite()));
    }

    #[test]
    fn conjugates() {
        let a = q(1.0, 2.0, 3.0, 4.0);
        assert_eq!(q(1.0, -2.0, -3.0, 4.0), a.conjugate_yz());
        assert_eq!(q(-1.0, -2.0, -3.0, 4.0), a.conj());
        assert_eq!(q(0.0, 0.0, 0.0, a.sqnorm()), a * a.conj());
    }

    #[test]
    fn inverse() {
        let a = q(1.0, 2.0, -3.0, 4.0);
        let prod = a * a.inverse();
        assert_close!(abs=1e-14, Q::identity().into_array(), prod.into_array());
    }

    #[test]
    fn random_rotations_are_unit() {
        let mut rng = rng();
        for _ in 0..100 {
            assert_close!(abs=1e-12, 1.0, Q::random_rotation_with(&mut rng).norm());
        }
    }

    #[test]
    fn rotate_quarter_turn() {
        let half = std::f64::consts::FRAC_PI_4;
        let about_z = q(0.0, 0.0, half.sin(), half.cos());
        let v = about_z.rotate(&V3([1.0, 0.0, 0.0]));
        assert_close!(abs=1e-12, [0.0, 1.0, 0.0], v.0);
    }

    #[test]
    fn slerp_endpoints_and_midpoint() {
        let a = Q::identity();
        let half = std::f64::consts::FRAC_PI_4;
        let b = q(0.0, 0.0, half.sin(), half.cos());

        assert_close!(abs=1e-12, a.into_array(), a.slerp(&b, 0.0).into_array());
        assert_close!(abs=1e-12, b.into_array(), a.slerp(&b, 1.0).into_array());

        let eighth = std::f64::consts::FRAC_PI_8;
        let expected = q(0.0, 0.0, eighth.sin(), eighth.cos());
        assert_close!(abs=1e-12, expected.into_array(), a.slerp(&b, 0.5).into_array());

        // -b is the same rotation, and slerp takes the short way round
        assert_close!(abs=1e-12, expected.into_array(), a.slerp(&-b, 0.5).into_array());
    }

    #[test]
    fn slerp_nearly_parallel() {
        let a = Q::identity();
        let b = q(0.0, 1e-6, 0.0, 1.0).normalized();
        let mid = a.slerp(&b, 0.5);
        assert_close!(abs=1e-12, 1.0, mid.norm());
        assert_close!(abs=1e-9, 0.5e-6, mid.y);
    }

    #[test]
    fn array_order() {
        let a = Q::from_array([1.0, 2.0, 3.0, 4.0]);
        assert_eq!(4.0, a.scalar());
        assert_eq!(V3([1.0, 2.0, 3.0]), a.vector());
        assert_eq!([1.0, 2.0, 3.0, 4.0], a.into_array());
        assert_eq!(a, Quaternion::from_vw(V3([1.0, 2.0, 3.0]), 4.0));
    }
}
