/* ************************************************************************ **
** This file is part of fixmat, and is licensed under EITHER the MIT        **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use std::ops::{Add, Sub, AddAssign, SubAssign, Neg};
use std::ops::{Mul, Div, MulAssign, DivAssign};
use std::fmt;
use crate::traits::{Semiring, Ring, Field};
use crate::traits::internal::{PrimitiveSemiring, PrimitiveRing, PrimitiveFloat};
use crate::{vee, mat};

use crate::types::*;

// ---------------------------------------------------------------------------
// vector-vector ops

// NOTE: Operator impls are deliberately between same-typed operands,
//       rather than e.g. V3<T> and V3<U> where T: Add<U>.
//       Such generic bounds tend to push the rest of the library
//       towards a design that is impossible to implement.
gen_each!{
    @{Vn}
    [ [(   ) (   )] [('a,) (&'a)] ]
    [ [(   ) (   )] [('b,) (&'b)] ]
    impl_v_add_sub!(
        {$Vn:ident}
        [ ($($lt_a:tt)*) ($($ref_a:tt)*) ]
        [ ($($lt_b:tt)*) ($($ref_b:tt)*) ]
    ) => {
        // vector + vector
        impl<$($lt_a)* $($lt_b)* X: Semiring> Add<$($ref_b)* $Vn<X>> for $($ref_a)*$Vn<X>
          where X: PrimitiveSemiring,
        {
            type Output = $Vn<X>;

            #[inline]
            fn add(self, other: $($ref_b)* $Vn<X>) -> Self::Output
            { vee::from_fn(|k| self[k] + other[k]) }
        }

        // vector - vector
        impl<$($lt_a)* $($lt_b)* X: Ring> Sub<$($ref_b)* $Vn<X>> for $($ref_a)*$Vn<X>
          where X: PrimitiveRing,
        {
            type Output = $Vn<X>;

            #[inline]
            fn sub(self, other: $($ref_b)* $Vn<X>) -> Self::Output
            { vee::from_fn(|k| self[k] - other[k]) }
        }
    }
}

// ---------------------------------------------------------------------------
// vector unary ops

gen_each!{
    @{Vn}
    [ [(   ) (   )] [('a,) (&'a)] ]
    impl_v_unops!(
        {$Vn:ident}
        [ ($($lt_a:tt)*) ($($ref_a:tt)*) ]
    ) => {
        // -vector
        impl<$($lt_a)* X: Ring> Neg for $($ref_a)* $Vn<X>
          where X: PrimitiveRing,
        {
            type Output = $Vn<X>;

            #[inline]
            fn neg(self) -> Self::Output
            { $Vn::from_fn(|k| -self.0[k]) }
        }
    }
}

// ---------------------------------------------------------------------------
// vector-scalar ops

// scalar `op` vector
gen_each!{
    @{Vn}
    // NOTE: the orphan rules prevent us from impl-ing these ops "for X" so
    //       we must generate a separate impl for each Semiring type rather than
    //       being generic over X: Semiring
    @{semiring}
    [ [(   ) (   )] [('a,) (&'a)] ]
    impl_v_scalar_ops!(
        {$Vn:ident}
        {$X:ty}
        [ ($($lt_a:tt)*) ($($ref_a:tt)*) ]
    ) => {
        // scalar * vector
        impl<$($lt_a)*> Mul<$($ref_a)* $Vn<$X>> for $X {
            type Output = $Vn<$X>;

            #[inline(always)]
            fn mul(self, vector: $($ref_a)* $Vn<$X>) -> Self::Output
            { vector * self }
        }
    }
}

// vector `op` scalar
gen_each!{
    @{Vn}
    [ [(   ) (   )] [('a,) (&'a)] ]
    impl_v_scalar_ops!(
        {$Vn:ident}
        [ ($($lt_a:tt)*) ($($ref_a:tt)*) ]
    ) => {
        // vector * scalar
        impl<$($lt_a)* X: Semiring> Mul<X> for $($ref_a)* $Vn<X>
        where X: PrimitiveSemiring,
        {
            type Output = $Vn<X>;

            #[inline]
            fn mul(self, scalar: X) -> Self::Output
            { vee::from_fn(|k| self[k] * scalar) }
        }

        // vector / scalar
        impl<$($lt_a)* X: Field> Div<X> for $($ref_a)* $Vn<X>
        where X: PrimitiveFloat,
        {
            type Output = $Vn<X>;

            #[inline]
            fn div(self, scalar: X) -> Self::Output
            { vee::from_fn(|k| self[k] / scalar) }
        }
    }
}

// ---------------------------------------------------------------------------
// matrix-matrix elementwise ops

gen_each!{
    @{Mn_n}
    @{Vn_n}
    [ [(   ) (   )] [('a,) (&'a)] ]
    [ [(   ) (   )] [('b,) (&'b)] ]
    impl_m_add_sub!(
        {$Mr:ident $r:tt}
        {$Vc:ident $c:tt}
        [ ($($lt_a:tt)*) ($($ref_a:tt)*) ]
        [ ($($lt_b:tt)*) ($($ref_b:tt)*) ]
    ) => {
        // matrix + matrix
        impl<$($lt_a)* $($lt_b)* X: Semiring> Add<$($ref_b)* $Mr<$Vc<X>>> for $($ref_a)* $Mr<$Vc<X>>
          where X: PrimitiveSemiring,
        {
            type Output = $Mr<$Vc<X>>;

            #[inline]
            fn add(self, other: $($ref_b)* $Mr<$Vc<X>>) -> Self::Output
            { mat::from_fn(|r, c| self[r][c] + other[r][c]) }
        }

        // matrix - matrix
        impl<$($lt_a)* $($lt_b)* X: Ring> Sub<$($ref_b)* $Mr<$Vc<X>>> for $($ref_a)* $Mr<$Vc<X>>
          where X: PrimitiveRing,
        {
            type Output = $Mr<$Vc<X>>;

            #[inline]
            fn sub(self, other: $($ref_b)* $Mr<$Vc<X>>) -> Self::Output
            { mat::from_fn(|r, c| self[r][c] - other[r][c]) }
        }
    }
}

// matrix unary ops, and matrix `op` scalar
gen_each!{
    @{Mn_n}
    @{Vn_n}
    [ [(   ) (   )] [('a,) (&'a)] ]
    impl_m_unops!(
        {$Mr:ident $r:tt}
        {$Vc:ident $c:tt}
        [ ($($lt_a:tt)*) ($($ref_a:tt)*) ]
    ) => {
        // -matrix
        impl<$($lt_a)* X: Ring> Neg for $($ref_a)* $Mr<$Vc<X>>
          where X: PrimitiveRing,
        {
            type Output = $Mr<$Vc<X>>;

            #[inline]
            fn neg(self) -> Self::Output
            { mat::from_fn(|r, c| -self[r][c]) }
        }

        // matrix * scalar
        impl<$($lt_a)* X: Semiring> Mul<X> for $($ref_a)* $Mr<$Vc<X>>
          where X: PrimitiveSemiring,
        {
            type Output = $Mr<$Vc<X>>;

            #[inline]
            fn mul(self, scalar: X) -> Self::Output
            { mat::from_fn(|r, c| self[r][c] * scalar) }
        }

        // matrix / scalar
        impl<$($lt_a)* X: Field> Div<X> for $($ref_a)* $Mr<$Vc<X>>
          where X: PrimitiveFloat,
        {
            type Output = $Mr<$Vc<X>>;

            #[inline]
            fn div(self, scalar: X) -> Self::Output
            { mat::from_fn(|r, c| self[r][c] / scalar) }
        }
    }
}

// scalar * matrix (square only; see the orphan rule note above)
gen_each!{
    @{Mnn_Mn_Vn_n}
    @{semiring}
    [ [(   ) (   )] [('a,) (&'a)] ]
    impl_m_scalar_ops!(
        {$Mnn:ident $Mn:ident $Vn:ident $n:tt}
        {$X:ty}
        [ ($($lt_a:tt)*) ($($ref_a:tt)*) ]
    ) => {
        impl<$($lt_a)*> Mul<$($ref_a)* $Mnn<$X>> for $X {
            type Output = $Mnn<$X>;

            #[inline(always)]
            fn mul(self, matrix: $($ref_a)* $Mnn<$X>) -> Self::Output
            { matrix * self }
        }
    }
}

// ---------------------------------------------------------------------------
// assign ops (general)

gen_each!{
    [
        {V2 X} {V3 X} {V4 X} {V5 X} {V6 X}
        {M2 V} {M3 V} {M4 V} {M5 V} {M6 V}
    ]
    impl_assign_ops!(
        {$Cn:ident $T:ident}
    ) => {
        // x += y;
        impl<$T, B> AddAssign<B> for $Cn<$T> where for<'a> &'a Self: Add<B, Output=Self> {
            #[inline(always)]
            fn add_assign(&mut self, rhs: B)
            { *self = &*self + rhs; }
        }

        // x -= y;
        impl<$T, B> SubAssign<B> for $Cn<$T> where for<'a> &'a Self: Sub<B, Output=Self> {
            #[inline(always)]
            fn sub_assign(&mut self, rhs: B)
            { *self = &*self - rhs; }
        }

        // x *= scalar;
        // vector *= matrix;   (row vectors)
        // matrix *= &matrix;
        impl<$T, B> MulAssign<B> for $Cn<$T> where for<'a> &'a Self: Mul<B, Output=Self> {
            #[inline(always)]
            fn mul_assign(&mut self, rhs: B)
            { *self = &*self * rhs; }
        }

        // x /= scalar;
        impl<$T, B> DivAssign<B> for $Cn<$T> where for<'a> &'a Self: Div<B, Output=Self> {
            #[inline(always)]
            fn div_assign(&mut self, rhs: B)
            { *self = &*self / rhs; }
        }
    }
}

// ---------------------------------------------------------------------------

// vector * matrix
gen_each!{
    [ [(   ) (   )] [('v,) (&'v)] ]
    @{2...6}
    @{2...6}
    impl_mat_vec_mul!( [ ($($lt_v:tt)*) ($($ref_v:tt)*) ] {$r:tt} {$c:tt} ) => {
        // matrix * column vector
        impl<$($lt_v)* 'm, X: Semiring> Mul<$($ref_v)* V![$c, X]> for &'m M![$r, V![$c, X]]
          where X: PrimitiveSemiring,
        {
            type Output = V![$r, X];

            #[inline]
            fn mul(self, other: $($ref_v)* V![$c, X]) -> Self::Output {
                let matrix = self;
                let vector = other;
                <V![$r, X]>::from_fn(|r| (0..$c).map(|i| matrix[r][i] * vector[i]).sum())
            }
        }

        // row vector * matrix
        impl<$($lt_v)* 'm, X: Semiring> Mul<&'m M![$r, V![$c, X]]> for $($ref_v)* V![$r, X]
          where X: PrimitiveSemiring,
        {
            type Output = V![$c, X];

            #[inline]
            fn mul(self, other: &'m M![$r, V![$c, X]]) -> Self::Output {
                let vector = self;
                let matrix = other;
                <V![$c, X]>::from_fn(|c| (0..$r).map(|i| vector[i] * matrix[i][c]).sum())
            }
        }
    }
}

gen_each!{
    [ [(   ) (   )] [('a,) (&'a)] ]
    [ [(   ) (   )] [('b,) (&'b)] ]
    @{2...6}
    @{2...6}
    @{2...6}
    impl_mat_mat_mul!(
        [ ($($lt_a:tt)*) ($($ref_a:tt)*) ]
        [ ($($lt_b:tt)*) ($($ref_b:tt)*) ]
        {$r:tt} {$k:tt} {$c:tt}
    ) => {
        // matrix * matrix
        impl<$($lt_a)* $($lt_b)* X: Semiring> Mul<$($ref_b)* M![$k, V![$c, X]]> for $($ref_a)* M![$r, V![$k, X]]
          where X: PrimitiveSemiring,
        {
            type Output = M![$r, V![$c, X]];

            #[inline]
            fn mul(self, other: $($ref_b)* M![$k, V![$c, X]]) -> Self::Output {
                mat::from_fn(|r, c| (0..$k).map(|i| self[r][i] * other[i][c]).sum())
            }
        }
    }
}

// ---------------------------------------------------------------------------

// fmt traits apply the format to each element for convenience.
gen_each!{
    [
        {V2 X} {V3 X} {V4 X} {V5 X} {V6 X}
        {M2 V} {M3 V} {M4 V} {M5 V} {M6 V}
    ]
    [
        // Display is included because there's no other way to get
        // output like `[1.0000, 0.3333]`.
        {LowerExp} {UpperExp} {Display}
    ]
    impl_fmt!(
        {$Cn:ident $T:ident}
        {$Format:ident}
    ) => {
        impl<$T: fmt::$Format> fmt::$Format for $Cn<$T> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "[")?;
                fmt::$Format::fmt(&self[0], f)?;
                for x in &self[1..] {
                    write!(f, ", ")?;
                    fmt::$Format::fmt(x, f)?;
                }
                write!(f, "]")?;
                Ok(())
            }
        }
    }
}

// ---------------------------------------------------------------------------
