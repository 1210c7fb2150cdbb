/* ************************************************************************ **
** This file is part of fixmat, and is licensed under EITHER the MIT        **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Small fixed-size matrix types, compatible with `V2`...`V6`
//!
//! This library uses a row-based storage formalism; matrices are containers
//! of row-vectors, indexed as `m[row][col]`. Both `&m * v` (column vector)
//! and `v * &m` (row vector) products are available.
//!
//! The determinant is computed by Laplace expansion along the first row,
//! recursing through statically-sized minors down to the 2x2 closed form.
//! Cofactors, adjugates and inverses are built on the same minors, so every
//! size from 2x2 to 6x6 shares one algorithm.
//!
//! Inversion of a singular matrix is not an error: it produces infinities
//! and NaNs, like dividing by zero. Use `try_inv` if you want to know.

use crate::traits::{Semiring, Ring, Field};
use crate::traits::internal::{PrimitiveSemiring, PrimitiveRing, PrimitiveFloat};
use crate::vee;
use crate::types::*;
use num_traits::{Zero, One};
use std::ops::Mul;

// ---------------------------------------------------------------------------
// ------------------------------ PUBLIC API ---------------------------------

/// Construct a matrix from a function on indices.
///
/// The shape of the matrix will be inferred solely from how it
/// is used.  There is also a static method form of this for
/// easily supplying a type hint. (e.g. `M33::from_fn`)
#[inline(always)]
pub fn from_fn<M: FromFn<F>, B, F>(f: F) -> M
where F: FnMut(usize, usize) -> B,
{ FromFn::from_fn(f) }

/// Construct a matrix from a 2D array (of rows).
///
/// The signature is such that type inference will work in the
/// forward direction (deciding the output Matrix shape from
/// the input array).
#[inline(always)]
pub fn from_array<A: IntoMatrix>(arr: A) -> A::Matrix
{ arr.into_matrix() }

/// Construct an identity matrix (using type inference).
///
/// This is also available as a static method on the matrix types.
#[inline(always)]
pub fn eye<M: One + IsMatrix>() -> M
{ One::one() }

/// Construct a zero matrix (using type inference).
///
/// This is also available as a static method on the matrix types.
#[inline(always)]
pub fn zero<M: Zero + IsMatrix>() -> M
{ Zero::zero() }

/// Unary plus. Returns an elementwise copy.
#[inline(always)]
pub fn pos<M: Copy + IsMatrix>(m: &M) -> M
{ *m }

/// Matrix determinant.
#[inline(always)]
pub fn det<M: Det>(m: &M) -> DetT<M>
{ Det::det(m) }

/// Reciprocal of the determinant.
///
/// There is no check for zero; a singular matrix gives an infinity.
#[inline(always)]
pub fn inv_det<M: Det>(m: &M) -> DetT<M>
where DetT<M>: Field + PrimitiveFloat,
{ <DetT<M> as One>::one() / Det::det(m) }

/// Matrix of signed minors.
#[inline(always)]
pub fn cofactor<M: Cofactor>(m: &M) -> M
{ Cofactor::cofactor(m) }

/// Adjugate matrix; the transpose of the cofactor matrix.
#[inline(always)]
pub fn adjoint<M>(m: &M) -> M
where M: Cofactor + Transpose<Output=M>,
{ Cofactor::cofactor(m).t() }

/// Matrix inverse.
///
/// A singular matrix produces a matrix of infinities and NaNs.
#[inline(always)]
pub fn inv<M: Inv>(m: &M) -> M
{ Inv::inv(m) }

/// Matrix inverse, failing on a matrix whose determinant is zero or not finite.
pub fn try_inv<M>(m: &M) -> Result<M, DegenerateMatrixError>
where M: Inv + Det, DetT<M>: PrimitiveFloat,
{
    let det = m.det();
    if det == <DetT<M> as Zero>::zero() || !num_traits::Float::is_finite(det) {
        trace!("refusing to invert a matrix with determinant {:?}", det);
        return Err(DegenerateMatrixError);
    }
    Ok(m.inv())
}

/// Test whether a matrix is the identity, up to the machine epsilon of its
/// scalar type. (absolute tolerance on every element)
///
/// For an exact test, use `num_traits::One::is_one`.
#[inline(always)]
pub fn is_eye<M: IsEyeWithin>(m: &M) -> bool
{ m.is_eye_within(<M::Scalar as num_traits::Float>::epsilon()) }

/// Minor matrix, with one row and one column deleted.
#[inline(always)]
pub fn minor<M: Minor>(m: &M, row: usize, col: usize) -> M::Output
{ Minor::minor(m, row, col) }

/// Place a smaller matrix in the top-left block of an identity matrix.
///
/// This turns e.g. a 2x2 linear map into a 3x3 homogeneous transform.
/// The output shape is decided by type inference.
#[inline(always)]
pub fn embed<B: Embed<S>, S>(small: &S) -> B
{ Embed::embed(small) }

/// Compute `embed(small) * big`.
///
/// This is a true block product. Rows of `big` below the block of `small`
/// pass through unchanged, but the top-right block of the result is
/// `small` times the top-right block of `big`, so entries there only pass
/// through when that block of `big` is zero.
#[inline(always)]
pub fn mul_embedded<S, B>(small: &S, big: &B) -> B
where
    B: Embed<S>,
    for<'a> &'a B: Mul<&'a B, Output=B>,
{ &B::embed(small) * big }

#[derive(Debug, Fail)]
#[fail(display = "matrix was perfectly degenerate")]
pub struct DegenerateMatrixError;

// Square matrices
gen_each!{
    @{Mnn_Mn_Vn_n}
    impl_square_inherent_wrappers!(
        {$Mnn:ident $Mn:ident $Vn:ident $n:tt}
    ) => {
        impl<X> $Mnn<X> {
            /// Construct the identity matrix.
            ///
            /// This is also available as the free function `mat::eye`;
            /// this static method just provides an easy way to supply a type hint.
            #[inline(always)]
            pub fn eye() -> Self
            where Self: One,
            { One::one() }

            /// Matrix determinant.
            #[inline(always)]
            pub fn det(&self) -> DetT<Self>
            where Self: Det,
            { Det::det(self) }

            /// Reciprocal of the determinant.
            #[inline(always)]
            pub fn inv_det(&self) -> DetT<Self>
            where Self: Det, DetT<Self>: Field + PrimitiveFloat,
            { inv_det(self) }

            /// Matrix of signed minors.
            #[inline(always)]
            pub fn cofactor(&self) -> Self
            where Self: Cofactor,
            { Cofactor::cofactor(self) }

            /// Adjugate matrix.
            #[inline(always)]
            pub fn adjoint(&self) -> Self
            where Self: Cofactor + Transpose<Output=Self>,
            { adjoint(self) }

            /// Unary plus.
            #[inline(always)]
            pub fn pos(&self) -> Self
            where X: Copy,
            { *self }

            /// Test for the identity matrix with an absolute tolerance.
            #[inline(always)]
            pub fn is_eye_within(&self, tol: X) -> bool
            where Self: IsEyeWithin<Scalar=X>,
            { IsEyeWithin::is_eye_within(self, tol) }
        }
    }
}

gen_each!{
    @{Mnn_n_minor}
    impl_minor_inherent_wrappers!(
        {$Mnn:ident $n:tt $Minor:ident}
    ) => {
        impl<X: Copy> $Mnn<X> {
            /// Delete a row and a column.
            ///
            /// # Panics
            ///
            /// Panics if either index is out of bounds.
            #[inline(always)]
            pub fn minor(&self, row: usize, col: usize) -> $Minor<X>
            { Minor::minor(self, row, col) }
        }
    }
}

// General rectangular.
gen_each!{
    @{Mn_n}
    @{Vn_n}
    impl_general_inherent_wrappers!(
        {$Mr:ident $r:tt}
        {$Vc:ident $c:tt}
    ) => {
        impl<X> $Mr<$Vc<X>> {
            /// Construct the zero matrix.
            ///
            /// This is also available as the free function `mat::zero`;
            /// this static method just provides an easy way to supply a type hint.
            #[inline(always)]
            pub fn zero() -> Self
            where Self: Zero,
            { Zero::zero() }

            /// Construct a matrix from a function on indices.
            ///
            /// This is also available as the free function `mat::from_fn`;
            /// this static method just provides an easy way to supply a type hint.
            #[inline(always)]
            pub fn from_fn<F>(f: F) -> Self
            where F: FnMut(usize, usize) -> X,
            { FromFn::from_fn(f) }

            /// Matrix transpose.
            #[inline(always)]
            pub fn t(&self) -> TransposeT<Self>
            where Self: Transpose,
            { Transpose::t(self) }

            /// Cast into a plain `[[T; c]; r]`.
            #[inline(always)]
            pub fn into_array(self) -> [[X; $c]; $r]
            { self.0.map(|row| row.0) }

            /// Map each scalar element of a matrix.
            #[inline(always)]
            pub fn map<B, F>(self, mut f: F) -> $Mr<$Vc<B>>
            where F: FnMut(X) -> B,
            { $Mr(self.0.map(|row| row.map(&mut f))) }
        }
    }
}

// -------------------------- END PUBLIC API ---------------------------------
// The rest is implementation and boilerplate
// ---------------------------------------------------------------------------

/// Implementation detail of some free functions that defer to external traits.
///
/// > **_Fuggedaboudit._**
///
/// Its purpose is to prevent those functions from producing non-matrix types.
pub trait IsMatrix: Sized { }

gen_each!{
    @{Mn_n}
    @{Vn_n}
    impl_is_matrix!(
        {$Mr:ident $r:tt}
        {$Vc:ident $c:tt}
    ) => {
        impl<X> IsMatrix for $Mr<$Vc<X>> { }
    }
}

// ---------------------------------------------------------------------------

gen_each!{
    @{Mn_n}
    @{Vn_n}
    impl_num_zero!(
        {$Mr:ident $r:tt}
        {$Vc:ident $c:tt}
    ) => {
        impl<X: Semiring> Zero for $Mr<$Vc<X>>
        where X: PrimitiveSemiring,
        {
            #[inline]
            fn zero() -> Self
            { from_array([[X::zero(); $c]; $r]) }

            #[inline]
            fn is_zero(&self) -> bool
            { self.iter().all(|row| row.iter().all(|x| x.is_zero())) }
        }
    }
}

// ---------------------------------------------------------------------------

/// Implementation detail of the free function `mat::from_fn`.
///
/// > **_Fuggedaboudit._**
pub trait FromFn<F>: Sized {
    fn from_fn(f: F) -> Self;
}

gen_each!{
    @{Mn_n}
    @{Vn_n}
    impl_from_fn!(
        {$Mr:ident $r:tt}
        {$Vc:ident $c:tt}
    ) => {
        impl<X, F> FromFn<F> for $Mr<$Vc<X>>
          where F: FnMut(usize, usize) -> X,
        {
            #[inline]
            fn from_fn(mut f: F) -> Self {
                $Mr(std::array::from_fn(|r| {
                    $Vc(std::array::from_fn(|c| f(r, c)))
                }))
            }
        }
    }
}

// ---------------------------------------------------------------------------

/// Implementation detail of the free function `mat::from_array`.
///
/// > **_Fuggedaboudit._**
pub trait IntoMatrix: Sized {
    type Matrix;

    fn into_matrix(self) -> Self::Matrix;
}

gen_each!{
    @{Mn_n}
    @{Vn_n}
    impl_into_matrix!(
        {$Mr:ident $r:tt}
        {$Vc:ident $c:tt}
    ) => {
        impl<X> IntoMatrix for [[X; $c]; $r] {
            type Matrix = $Mr<$Vc<X>>;

            #[inline(always)]
            fn into_matrix(self) -> Self::Matrix
            { $Mr(self.map($Vc)) }
        }
    }
}

// ---------------------------------------------------------------------------

gen_each!{
    @{Mnn_Mn_Vn_n}
    impl_num_one!(
        {$Mnn:ident $Mn:ident $Vn:ident $n:tt}
    ) => {
        impl<X: Semiring> One for $Mnn<X>
        where X: PrimitiveSemiring,
        {
            #[inline(always)]
            fn one() -> Self
            { from_fn(|r, c| if r == c { X::one() } else { X::zero() }) }

            #[inline]
            fn is_one(&self) -> bool
            { is_one_impl(self) }
        }
    }
}

#[inline(always)]
fn is_one_impl<M, V, X>(m: &M) -> bool
where
    for<'a> &'a M: IntoIterator<Item=&'a V>,
    for<'a> &'a V: IntoIterator<Item=&'a X>,
    X: Zero + One + PartialEq,
{
    m.into_iter().enumerate().all(|(r, v)| {
        v.into_iter().enumerate().all(|(c, x)| {
            match r == c {
                true => x.is_one(),
                false => x.is_zero(),
            }
        })
    })
}

// ---------------------------------------------------------------------------

/// Implementation detail of the free function `mat::is_eye` and the
/// inherent method `is_eye_within`.
///
/// > **_Fuggedaboudit._**
pub trait IsEyeWithin {
    type Scalar: PrimitiveFloat;

    fn is_eye_within(&self, tol: Self::Scalar) -> bool;
}

gen_each!{
    @{Mnn_Mn_Vn_n}
    impl_is_eye_within!(
        {$Mnn:ident $Mn:ident $Vn:ident $n:tt}
    ) => {
        impl<X: Field> IsEyeWithin for $Mnn<X>
        where X: PrimitiveFloat,
        {
            type Scalar = X;

            fn is_eye_within(&self, tol: X) -> bool {
                // NOTE: written so that NaN fails the test
                self.iter().enumerate().all(|(r, row)| {
                    row.iter().enumerate().all(|(c, &x)| {
                        let target = if r == c { X::one() } else { X::zero() };
                        (x - target).abs() <= tol
                    })
                })
            }
        }
    }
}

// ---------------------------------------------------------------------------

/// Output of `det`. Probably a scalar type.
pub type DetT<A> = <A as Det>::Output;

/// Implementation detail of the inherent method `{M22,...,M66}::det`.
///
/// > **_Fuggedaboudit._**
pub trait Det {
    type Output;

    fn det(&self) -> Self::Output;
}

impl<T: Ring> Det for M22<T>
where T: PrimitiveRing,
{
    type Output = T;

    #[inline]
    fn det(&self) -> T {
        let [[a, b], [c, d]] = self.into_array();
        a * d - b * c
    }
}

gen_each!{
    @{Mnn_n_minor}
    impl_det!(
        {$Mnn:ident $n:tt $Minor:ident}
    ) => {
        impl<T: Ring> Det for $Mnn<T>
        where T: PrimitiveRing,
        {
            type Output = T;

            fn det(&self) -> T {
                (0..$n)
                    .map(|k| alternate(k, self[0][k] * self.minor(0, k).det()))
                    .sum()
            }
        }
    }
}

/// `(-1)^k x`
#[inline(always)]
fn alternate<T: PrimitiveRing>(k: usize, x: T) -> T {
    match k % 2 {
        0 => x,
        _ => -x,
    }
}

// ---------------------------------------------------------------------------

/// Implementation detail of the inherent method `{M33,...,M66}::minor`.
///
/// > **_Fuggedaboudit._**
pub trait Minor {
    type Output;

    fn minor(&self, row: usize, col: usize) -> Self::Output;
}

gen_each!{
    @{Mnn_n_minor}
    impl_minor!(
        {$Mnn:ident $n:tt $Minor:ident}
    ) => {
        impl<X: Copy> Minor for $Mnn<X> {
            type Output = $Minor<X>;

            #[inline]
            fn minor(&self, row: usize, col: usize) -> $Minor<X> {
                assert!(
                    row < $n && col < $n,
                    "minor ({}, {}) is out of bounds for a {}x{} matrix", row, col, $n, $n,
                );
                from_fn(|r, c| {
                    let r = if r < row { r } else { r + 1 };
                    let c = if c < col { c } else { c + 1 };
                    self[r][c]
                })
            }
        }
    }
}

// ---------------------------------------------------------------------------

/// Implementation detail of the inherent method `{M22,...,M66}::cofactor`.
///
/// > **_Fuggedaboudit._**
pub trait Cofactor {
    fn cofactor(&self) -> Self;
}

impl<T: Ring> Cofactor for M22<T>
where T: PrimitiveRing,
{
    #[inline]
    fn cofactor(&self) -> Self {
        let [[a, b], [c, d]] = self.into_array();
        from_array([[d, -c], [-b, a]])
    }
}

gen_each!{
    @{Mnn_n_minor}
    impl_cofactor!(
        {$Mnn:ident $n:tt $Minor:ident}
    ) => {
        impl<T: Ring> Cofactor for $Mnn<T>
        where T: PrimitiveRing,
        {
            fn cofactor(&self) -> Self {
                from_fn(|r, c| alternate(r + c, self.minor(r, c).det()))
            }
        }
    }
}

// ---------------------------------------------------------------------------

/// Implementation detail of the free function `mat::inv`.
///
/// > **_Fuggedaboudit._**
pub trait Inv {
    fn inv(&self) -> Self;
}

gen_each!{
    @{Mnn_Mn_Vn_n}
    impl_inv!(
        {$Mnn:ident $Mn:ident $Vn:ident $n:tt}
    ) => {
        impl<T: Field> Inv for $Mnn<T>
        where T: PrimitiveFloat,
        {
            fn inv(&self) -> Self {
                let cofactors = self.cofactor();
                // Laplace expansion along row 0, reusing the cofactors
                let det = vee::dot(&self[0], &cofactors[0]);
                let rdet = T::one() / det;
                from_fn(|r, c| cofactors[c][r] * rdet)
            }
        }
    }
}

// ---------------------------------------------------------------------------

/// Implementation detail of the free functions `mat::embed` and `mat::mul_embedded`.
///
/// > **_Fuggedaboudit._**
pub trait Embed<Small>: Sized {
    fn embed(small: &Small) -> Self;
}

gen_each!{
    @{embed}
    impl_embed!(
        {$Ms:ident $s:tt $Mb:ident $b:tt}
    ) => {
        impl<X: Semiring> Embed<$Ms<X>> for $Mb<X>
        where X: PrimitiveSemiring,
        {
            #[inline]
            fn embed(small: &$Ms<X>) -> Self {
                from_fn(|r, c| match (r < $s && c < $s, r == c) {
                    (true, _) => small[r][c],
                    (false, true) => X::one(),
                    (false, false) => X::zero(),
                })
            }
        }
    }
}

// ---------------------------------------------------------------------------

/// Output of `transpose`. Probably a matrix with the dimensions flipped.
pub type TransposeT<A> = <A as Transpose>::Output;

/// Implementation detail of the inherent method `{M2,...,M6}::t`.
///
/// > **_Fuggedaboudit._**
pub trait Transpose {
    type Output;

    fn t(&self) -> Self::Output;
}

gen_each!{
    @{Mn_n}
    @{Vn_n}
    impl_transpose!(
        {$Mr:ident $r:tt}
        {$Vc:ident $c:tt}
    ) => {
        impl<X: Copy> Transpose for $Mr<$Vc<X>> {
            type Output = M![$c, V![$r, X]];

            #[inline]
            fn t(&self) -> Self::Output
            { from_fn(|r, c| self[c][r]) }
        }
    }
}

// ---------------------------------------------------------------------------
