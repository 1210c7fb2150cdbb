/* ************************************************************************ **
** This file is part of fixmat, and is licensed under EITHER the MIT        **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use crate::traits::{Semiring, Ring, Field};
use crate::traits::internal::{PrimitiveSemiring, PrimitiveRing, PrimitiveFloat};

use crate::types::*;

use num_traits::{Zero, Float};

// ---------------------------------------------------------------------------
// ------------------------------ PUBLIC API ---------------------------------

/// Construct a fixed-size vector from a function on indices.
///
/// The size is inferred from how the result is used.
#[inline(always)]
pub fn from_fn<V: FromFn<F>, F>(f: F) -> V
{ FromFn::from_fn(f) }

/// Get a zero vector (using type inference).
#[inline(always)]
pub fn zero<V: Zero + IsV>() -> V
{ Zero::zero() }

gen_each!{
    @{Vn_n}
    for_each!(
        {$Vn:ident $n:tt}
    ) => {
        impl<X> $Vn<X> {
            /// Get a zero vector.
            ///
            /// This is also available as the free function `vee::zero`;
            /// this static method just provides an easy way to supply a type hint.
            #[inline(always)]
            pub fn zero() -> Self
            where Self: Zero,
            { Zero::zero() }

            /// Construct a fixed-size vector from a function on indices.
            ///
            /// This is also available as the free function `vee::from_fn`;
            /// this static method just provides an easy way to supply a type hint.
            #[inline(always)]
            pub fn from_fn<F>(f: F) -> Self
            where F: FnMut(usize) -> X,
            { $Vn(std::array::from_fn(f)) }

            /// Get the inner product of two vectors.
            ///
            /// It is recommended you write this as `V3::dot(a, b)`, rather than `a.dot(b)`.
            #[inline(always)]
            pub fn dot(&self, other: &Self) -> ScalarT<Self>
            where Self: Dot,
            { Dot::dot(self, other) }

            /// Get the vector's squared magnitude.
            #[inline(always)]
            pub fn sqnorm(&self) -> ScalarT<Self>
            where Self: Dot,
            { Dot::dot(self, self) }

            /// Get the vector's magnitude.
            #[inline(always)]
            pub fn norm(&self) -> ScalarT<Self>
            where Self: Dot, ScalarT<Self>: PrimitiveFloat,
            { self.sqnorm().sqrt() }

            /// Normalize the vector.
            ///
            /// The zero vector normalizes to NaNs.
            #[inline(always)]
            pub fn unit(&self) -> Self
            where X: Field + PrimitiveFloat,
            { self / self.norm() }

            /// Get a basis vector.
            #[inline(always)]
            pub fn axis_unit(i: usize) -> Self
            where
                Self: Zero,
                X: Semiring + PrimitiveSemiring,
            {
                let mut v = Self::zero();
                *v.get_mut(i)
                    .unwrap_or_else(|| panic!("Invalid axis for {}d vector: {}", $n, i)) = X::one();
                v
            }

            /// Get the shortest angle (as a value in `[0, pi]`) between this vector and another.
            #[inline(always)]
            pub fn angle_to(&self, other: &Self) -> ScalarT<Self>
            where X: Field + PrimitiveFloat,
            {
                let arg = dot(self, other) / (self.sqnorm() * other.sqnorm()).sqrt();
                arg.min(X::one()).max(-X::one()).acos()
            }

            /// Perform elementwise multiplication, or multiplication of a vector by a diagonal
            /// matrix.
            #[inline(always)]
            pub fn mul_diag(&self, other: &Self) -> Self
            where X: Semiring + PrimitiveSemiring,
            { Self::from_fn(|i| self[i] * other[i]) }

            /// Get the part of the vector that is parallel to `r`.
            #[inline]
            pub fn par(&self, r: &Self) -> Self
            where X: Field + PrimitiveFloat,
            { r * ($Vn::dot(self, r) / $Vn::dot(r, r)) }

            /// Get the part of the vector that is perpendicular to `r`.
            ///
            /// Chained calls to `perp` are numerically unstable; `c.perp(a).perp(b)`
            /// is not orthogonal to `a` unless `b` is.
            #[inline]
            pub fn perp(&self, r: &Self) -> Self
            where X: Field + PrimitiveFloat,
            { self - self.par(r) }

            /// Apply a function to each element.
            #[inline]
            pub fn map<B, F>(self, f: F) -> $Vn<B>
            where F: FnMut(X) -> B,
            { $Vn(self.0.map(f)) }
        }
    }
}

impl<X: Ring> V3<X>
where X: PrimitiveRing
{
    /// Cross-product. Only defined on 3-dimensional vectors.
    #[inline]
    pub fn cross(&self, other: &Self) -> Self {
        V3([
            self[1] * other[2] - self[2] * other[1],
            self[2] * other[0] - self[0] * other[2],
            self[0] * other[1] - self[1] * other[0],
        ])
    }
}

gen_each!{
    [{V2} {V3}]
    for_each!( {$Vn:ident} ) => {
        impl<X> $Vn<X> {
            /// Generate a randomly-oriented unit vector whose direction comes from a uniform
            /// distribution.
            #[inline(always)]
            pub fn random_unit() -> Self
            where Self: RandomUnit,
            { RandomUnit::random_unit() }

            /// Generate a randomly-oriented unit vector whose direction comes from a uniform
            /// distribution.
            #[inline(always)]
            pub fn random_unit_with(rng: impl rand::Rng) -> Self
            where Self: RandomUnit,
            { RandomUnit::random_unit_with(rng) }
        }
    }
}

/// Inner product of vectors.
///
/// This is basically just `{V2,...,V6}::dot` as a free function,
/// because everyone loves symmetry.
#[inline(always)]
pub fn dot<V>(a: &V, b: &V) -> ScalarT<V>
where V: Dot,
{ Dot::dot(a, b) }

/// Element type of the vector.
pub type ScalarT<V> = <V as IsV>::Scalar;
/// Trait that provides associated types for `V2, ..., V6`.
pub trait IsV {
    type Scalar;
}

gen_each!{
    @{Vn}
    for_each!(
        {$Vn:ident}
    ) => {
        impl<X> IsV for $Vn<X>
        { type Scalar = X; }
    }
}

// -------------------------- END PUBLIC API ---------------------------------

gen_each!{
    @{Vn_n}
    for_each!(
        {$Vn:ident $n:tt}
    ) => {
        impl<X: Semiring> Zero for $Vn<X>
        where X: PrimitiveSemiring,
        {
            #[inline]
            fn zero() -> Self
            { $Vn([X::zero(); $n]) }

            #[inline]
            fn is_zero(&self) -> bool
            { self.iter().all(Zero::is_zero) }
        }
    }
}

// ---------------------------------------------------------------------------

/// Implementation detail of the free function `vee::from_fn`.
///
/// > **_Fuggedaboudit._**
pub trait FromFn<F>: Sized {
    fn from_fn(f: F) -> Self;
}

gen_each!{
    @{Vn}
    for_each!( {$Vn:ident} ) => {
        impl<X, F> FromFn<F> for $Vn<X>
        where F: FnMut(usize) -> X,
        {
            #[inline(always)]
            fn from_fn(f: F) -> Self
            { $Vn::from_fn(f) }
        }
    }
}

// ---------------------------------------------------------------------------

/// Implementation detail of the inherent method `{V2,...,V6}::dot`.
///
/// > **_Fuggedaboudit._**
///
/// Without this, the free function `dot` could not be generic over different
/// sizes of V.
pub trait Dot: IsV {
    fn dot(&self, b: &Self) -> ScalarT<Self>;
}

gen_each!{
    @{Vn_n}
    for_each!( {$Vn:ident $n:tt} ) => {
        impl<X: Semiring> Dot for $Vn<X>
          where X: PrimitiveSemiring,
        {
            #[inline]
            fn dot(&self, other: &$Vn<X>) -> ScalarT<Self>
            { (1..$n).fold(self[0] * other[0], |s, i| s + self[i] * other[i]) }
        }
    }
}

// ---------------------------------------------------------------------------

/// Implementation detail of the inherent method `{V2,V3}::random_unit`.
///
/// > **_Fuggedaboudit._**
pub trait RandomUnit: IsV + Sized {
    #[inline]
    fn random_unit() -> Self
    { RandomUnit::random_unit_with(rand::thread_rng()) }

    fn random_unit_with(rng: impl rand::Rng) -> Self;
}

// http://mathworld.wolfram.com/CirclePointPicking.html
impl<X: Field> RandomUnit for V2<X>
where X: PrimitiveFloat,
{
    #[inline]
    fn random_unit_with(mut rng: impl rand::Rng) -> Self
    {
        loop {
            let x1 = X::uniform_with(&mut rng, (-X::one(), X::one()));
            let x2 = X::uniform_with(&mut rng, (-X::one(), X::one()));
            let denom = x1*x1 + x2*x2;
            if denom >= X::one() || denom == X::zero() {
                continue;
            }
            let x = (x1*x1 - x2*x2) / denom;
            let y = X::two()*x1*x2 / denom;
            return V2([x, y]);
        }
    }
}

// http://mathworld.wolfram.com/SpherePointPicking.html
impl<X: Field> RandomUnit for V3<X>
where X: PrimitiveFloat,
{
    #[inline]
    fn random_unit_with(mut rng: impl rand::Rng) -> Self
    {
        loop {
            let x1 = X::uniform_with(&mut rng, (-X::one(), X::one()));
            let x2 = X::uniform_with(&mut rng, (-X::one(), X::one()));
            let sqsum = x1*x1 + x2*x2;
            if sqsum >= X::one() {
                continue;
            }
            let root = (X::one() - sqsum).sqrt();
            let x = X::two() * x1 * root;
            let y = X::two() * x2 * root;
            let z = X::one() - X::two() * sqsum;
            return V3([x, y, z]);
        }
    }
}

// ---------------------------------------------------------------------------

// stdlib integration

gen_each!{
    @{Vn}
    for_each!( {$Vn:ident} ) => {
        impl<X: Semiring> std::iter::Sum for $Vn<X>
        where X: PrimitiveSemiring,
        {
            fn sum<I: Iterator<Item=$Vn<X>>>(iter: I) -> Self {
                iter.fold($Vn::zero(), |a, b| a + b)
            }
        }

        impl<'a, X: Semiring> std::iter::Sum<&'a $Vn<X>> for $Vn<X>
        where X: PrimitiveSemiring,
        {
            fn sum<I: Iterator<Item=&'a $Vn<X>>>(iter: I) -> Self {
                iter.fold($Vn::zero(), |a, b| a + b)
            }
        }
    }
}

// slice-of-array integration, for viewing packed coordinate buffers
// as slices of vectors. (see the `batch` module)

gen_each!{
    @{Vn_n}
    for_each!( {$Vn:ident $n:tt} ) => {
        unsafe impl<X> slice_of_array::IsSliceomorphic for $Vn<X> {
            type Element = X;
            const LEN: usize = $n;
        }
    }
}

// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, XorShiftRng};

    fn rng() -> XorShiftRng { XorShiftRng::from_seed([5, 8, 13, 21]) }

    #[test]
    fn angle() {
        let a: V3 = V3([0.5, 0.0,  0.0]);
        let b: V3 = V3([8.0, 0.0, -8.0]);

        assert_close!(45.0, a.angle_to(&b).to_degrees());
    }

    #[test]
    fn angle_clamps_parallel() {
        // the dot product here can round to slightly above 1
        let a: V3 = V3([0.1, 0.2, 0.3]);
        assert!(!a.angle_to(&(a * 3.0)).is_nan());
    }

    #[test]
    fn cross_is_right_handed() {
        let x: V3<i32> = V3::axis_unit(0);
        let y: V3<i32> = V3::axis_unit(1);
        assert_eq!(V3([0, 0, 1]), x.cross(&y));
        assert_eq!(V3([0, 0, -1]), y.cross(&x));
    }

    #[test]
    #[should_panic(expected = "Invalid axis")]
    fn axis_unit_out_of_range() {
        let _: V5<f64> = V5::axis_unit(5);
    }

    #[test]
    fn dot_all_sizes() {
        assert_eq!(V2([1, 2]).dot(&V2([3, 4])), 11);
        assert_eq!(V5([1, 1, 1, 1, 1]).sqnorm(), 5);
        assert_eq!(V6([1, 2, 3, 4, 5, 6]).dot(&V6([1, 0, 1, 0, 1, 0])), 9);
    }

    #[test]
    fn prop_perp_plus_par() {
        let mut rng = rng();
        for _ in 0..10 {
            let a: V3 = V3(rand::Rng::gen(&mut rng));
            let b: V3 = V3(rand::Rng::gen(&mut rng));
            (a.perp(&b) + a.par(&b) - a).iter().for_each(|&x| {
                assert_close!(abs=1e-10, 0.0, x);
            });
        }
    }

    #[test]
    fn prop_perp_is_perp() {
        let mut rng = rng();
        for _ in 0..10 {
            let a: V3 = V3(rand::Rng::gen(&mut rng));
            let b: V3 = V3(rand::Rng::gen(&mut rng));
            assert_close!(abs=1e-10, 0.0, dot(&a.perp(&b), &b));
        }
    }

    #[test]
    fn random_unit_norm() {
        let mut rng = rng();
        for _ in 0..10 {
            assert_close!(abs=1e-10, 1.0, V2::<f64>::random_unit_with(&mut rng).sqnorm());
            assert_close!(abs=1e-10, 1.0, V3::<f64>::random_unit_with(&mut rng).sqnorm());
        }
    }

    #[test]
    fn sum_of_refs() {
        let vs = vec![V4([1, 2, 3, 4]), V4([10, 20, 30, 40])];
        assert_eq!(V4([11, 22, 33, 44]), vs.iter().sum::<V4<i32>>());
    }
}
