/* ************************************************************************ **
** This file is part of fixmat, and is licensed under EITHER the MIT        **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

// Traits exposed in public interfaces,
// implemented on finite sets of types rather than more general
//  generic bounds in order to reduce coupling with client crates.

pub use self::semiring::Semiring;
mod semiring {
    /// Trait for scalars with addition and multiplication.
    ///
    /// Only primitive floats and integers implement this.
    /// This trait is sealed to avoid accidental commitments.
    pub trait Semiring : Sealed { }

    pub(super) use self::private::Sealed;
    pub(super) mod private {
        pub trait Sealed { }
    }
}

pub use self::ring::Ring;
mod ring {
    use super::Semiring;

    /// Trait for scalars with addition, multiplication, and subtraction.
    ///
    /// This trait is sealed to avoid accidental commitments.
    /// It doesn't include unsigned integers because a ring must be
    /// closed under negation.
    pub trait Ring : Semiring + Sealed { }

    pub(super) use self::private::Sealed;
    pub(super) mod private {
        pub trait Sealed { }
    }
}

pub use self::field::Field;
mod field {
    use super::Ring;

    /// Trait for scalars with addition, multiplication, subtraction, and division.
    ///
    /// This is exactly `f32` and `f64`. Everything that needs a reciprocal
    /// (inverses, quaternion division, trigonometry) requires it.
    pub trait Field : Ring + Sealed { }

    pub(super) use self::private::Sealed;
    pub(super) mod private {
        pub trait Sealed { }
    }
}

// Generate the (trivial) impls of Field, Ring, and Semiring.
gen_each!{
    @{field}
    for_each!({$T:ty}) => {
        impl Field for $T { }
        impl field::Sealed for $T { }
    };
}

gen_each!{
    @{ring}
    for_each!({$T:ty}) => {
        impl Ring for $T { }
        impl ring::Sealed for $T { }
    };
}

gen_each!{
    @{semiring}
    for_each!({$T:ty}) => {
        impl Semiring for $T { }
        impl semiring::Sealed for $T { }
    };
}

/// Marker traits for generic implementations.
///
/// These appear in `where` clauses of the public API (so that e.g. the
/// quaternion crate can be generic over `f32` and `f64`), but are not
/// meant to be implemented or named by anyone else.
#[doc(hidden)]
pub mod internal {
    use std::ops::{Add, Sub, Mul, Div, Neg};

    macro_rules! markers {
        ($( $name:ident[$($bound:tt)+]; )+)
        => {$(
            pub trait $name: $($bound)+ { }
            impl<T> $name for T where T: $($bound)+ { }
        )+};
    }

    markers!{
        SelfAdd[Sized + Add<Self, Output=Self>];
        SelfSub[Sized + Sub<Self, Output=Self>];
        SelfMul[Sized + Mul<Self, Output=Self>];
        SelfDiv[Sized + Div<Self, Output=Self>];
        SelfNeg[Sized + Neg<Output=Self>];
        RefAdd[Sized + for<'a> Add<&'a Self, Output=Self>];
        RefSub[Sized + for<'a> Sub<&'a Self, Output=Self>];
        RefMul[Sized + for<'a> Mul<&'a Self, Output=Self>];
        RefDiv[Sized + for<'a> Div<&'a Self, Output=Self>];
    }

    pub trait PrimitiveSemiring
        : Sized + Copy + Clone + Default
        + PartialEq + PartialOrd
        + SelfAdd + RefAdd
        + SelfMul + RefMul
        + num_traits::Zero
        + num_traits::One
        + std::iter::Sum
        + std::iter::Product
        + Send + Sync
    {
        fn from_uint(u: u8) -> Self;
        #[inline(always)] fn two() -> Self { Self::from_uint(2) }
    }

    gen_each!{
        @{semiring}
        for_each!({$T:ty})
        => {
            impl PrimitiveSemiring for $T {
                #[inline(always)] fn from_uint(u: u8) -> $T { u as $T }
            }
        };
    }

    pub trait PrimitiveRing
        : PrimitiveSemiring
        + SelfSub + RefSub + SelfNeg
    {
        fn from_int(i: i8) -> Self;
    }

    gen_each!{
        @{ring}
        for_each!({$T:ty})
        => {
            impl PrimitiveRing for $T {
                #[inline(always)] fn from_int(i: i8) -> $T { i as $T }
            }
        };
    }

    /// The transcendental functions (`sin`, `atan2`, `sqrt`, ...) come
    /// from `num_traits::Float`, the constants from `FloatConst`.
    pub trait PrimitiveFloat
        : PrimitiveRing
        + SelfDiv + RefDiv
        + num_traits::Float
        + num_traits::FloatConst
        + rand::Rand
        + std::fmt::Debug
    {
        /// Convert an `f64` constant (typically a tolerance) into this type.
        fn from_float(x: f64) -> Self;

        fn uniform_with(rng: impl rand::Rng, _: (Self, Self)) -> Self;
    }

    gen_each!{
        @{float}
        for_each!({$T:ty})
        => {
            impl PrimitiveFloat for $T {
                #[inline(always)] fn from_float(x: f64) -> $T { x as $T }

                #[inline(always)] fn uniform_with(mut rng: impl rand::Rng, (lo, hi): (Self, Self)) -> Self {
                    let alpha: Self = rng.gen();
                    lo + (hi - lo) * alpha
                }
            }
        };
    }
}
