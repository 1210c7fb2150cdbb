/* ************************************************************************ **
** This file is part of fixmat, and is licensed under EITHER the MIT        **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Approximate equality assertions for floats and (nested) containers of floats.
//!
//! ```
//! # #[macro_use] extern crate fixmat_assert_close;
//! # fn main() {
//! assert_close!(0.1 + 0.2, 0.3);
//! assert_close!(abs=1e-12, [[1.0, 0.0], [0.0, 1.0]], [[1.0, 1e-14], [0.0, 1.0]]);
//! # }
//! ```

#[macro_use]
extern crate failure;
use std::fmt;

pub const DEFAULT_NONZERO_TOL: f64 = 1e-9;

/// Assert that two values are close, with optional `rel=` and `abs=` tolerances.
///
/// Without either, the relative tolerance is `DEFAULT_NONZERO_TOL` and the
/// absolute tolerance is zero. (so comparisons against exactly `0.0` fail
/// unless an `abs=` is given)
#[macro_export]
macro_rules! assert_close {
    ($($t:tt)*) => {
        assert_close_impl!{@parsing [$($t)*] [[@rel $crate::DEFAULT_NONZERO_TOL] [@abs 0.0]]}
    };
}

#[macro_export]
macro_rules! debug_assert_close {
    ($($t:tt)*) => {{
        #[cfg(debug_assertions)] {
            assert_close!{$($t)*}
        }
    }};
}

#[doc(hidden)]
#[macro_export]
macro_rules! assert_close_impl {
    (@parsing [rel=$tol:expr, $($rest:tt)*] [$($assignment:tt)*]) => {
        assert_close_impl!(@parsing [$($rest)*] [$($assignment)* [@rel $tol]]);
    };
    (@parsing [abs=$tol:expr, $($rest:tt)*] [$($assignment:tt)*]) => {
        assert_close_impl!(@parsing [$($rest)*] [$($assignment)* [@abs $tol]]);
    };
    (@parsing [$a:expr, $b:expr $(,)*] $assignments:tt) => {
        assert_close_impl!(@expand $assignments [@comp $a, $b] [@fmt "not nearly equal!"])
    };
    (@parsing [$a:expr, $b:expr, $($fmt:tt)+] $assignments:tt) => {
        assert_close_impl!(@expand $assignments [@comp $a, $b] [@fmt $($fmt)+])
    };
    (@expand [$($assignment:tt)*] [@comp $a:expr, $b:expr] [@fmt $($fmt:tt)+] ) => {
        #[allow(unused_mut)]
        #[allow(unused_assignments)]
        {
            let a = $a;
            let b = $b;

            let mut abs: f64;
            let mut rel: f64;
            $(
                assert_close_impl!{@stmt::assign [abs, rel] $assignment}
            )*

            if let Err(e) = $crate::CheckClose::check_close(&a, &b, $crate::Tolerances { abs, rel }) {
                panic!(
                    "{} (tolerances: rel={}, abs={})\n left: {:?}\nright: {:?}\n{}",
                    format!($($fmt)*), rel, abs, a, b, e,
                );
            }
        }
    };
    (@stmt::assign [$abs:ident, $rel:ident] [@abs $tol:expr]) => { $abs = $tol; };
    (@stmt::assign [$abs:ident, $rel:ident] [@rel $tol:expr]) => { $rel = $tol; };
}

/// Test two floats for closeness.
///
/// Two infinities of the same sign are close. NaN is never close to anything.
#[inline]
pub fn is_close(a: f64, b: f64, Tolerances { abs, rel }: Tolerances) -> bool {
    // same approach as Python's math.isclose
    assert!(rel >= 0.0, "negative relative tolerance: {}", rel);
    assert!(abs >= 0.0, "negative absolute tolerance: {}", abs);

    if a == b { return true; }

    // avoid an infinite relative tolerance
    if a.is_infinite() || b.is_infinite() { return false; }

    (a - b).abs() <= abs.max(rel * a.abs()).max(rel * b.abs())
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Tolerances {
    pub abs: f64,
    pub rel: f64,
}

/// The first pair of elements that failed a closeness check.
#[derive(Debug, Fail)]
pub struct CheckCloseError {
    pub values: (f64, f64),
    pub tol: Tolerances,
}

impl fmt::Display for CheckCloseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (left, right) = self.values;
        write!(f, "failed at:\n  left: {:?}\n right: {:?}\n   tol: {:?}", left, right, self.tol)
    }
}

/// Types whose values can be compared elementwise for closeness.
pub trait CheckClose<Rhs: ?Sized = Self> {
    /// Test that all values of self and other are close.
    ///
    /// # Panics
    ///
    /// Containers panic if their lengths differ.
    fn check_close(&self, other: &Rhs, tol: Tolerances) -> Result<(), CheckCloseError>;
}

macro_rules! impl_float {
    ($($F:ty)*) => {$(
        impl CheckClose for $F {
            #[inline]
            fn check_close(&self, other: &Self, tol: Tolerances) -> Result<(), CheckCloseError> {
                let values = (f64::from(*self), f64::from(*other));
                match is_close(values.0, values.1, tol) {
                    true => Ok(()),
                    false => Err(CheckCloseError { values, tol }),
                }
            }
        }
    )*};
}

impl_float!{ f32 f64 }

impl<'a, T: ?Sized + CheckClose> CheckClose for &'a T {
    fn check_close(&self, other: &Self, tol: Tolerances) -> Result<(), CheckCloseError>
    { CheckClose::check_close(*self, *other, tol) }
}

impl<T: CheckClose> CheckClose for [T] {
    fn check_close(&self, other: &Self, tol: Tolerances) -> Result<(), CheckCloseError> {
        assert_eq!(self.len(), other.len(), "length mismatch in check_close");
        self.iter().zip(other)
            .map(|(a, b)| a.check_close(b, tol))
            .collect()
    }
}

impl<T: CheckClose, const N: usize> CheckClose for [T; N] {
    fn check_close(&self, other: &Self, tol: Tolerances) -> Result<(), CheckCloseError>
    { self[..].check_close(&other[..], tol) }
}

impl<T: CheckClose> CheckClose for Vec<T> {
    fn check_close(&self, other: &Self, tol: Tolerances) -> Result<(), CheckCloseError>
    { self[..].check_close(&other[..], tol) }
}

impl<T: CheckClose> CheckClose<[T]> for Vec<T> {
    fn check_close(&self, other: &[T], tol: Tolerances) -> Result<(), CheckCloseError>
    { self[..].check_close(other, tol) }
}

impl<T: CheckClose> CheckClose<Vec<T>> for [T] {
    fn check_close(&self, other: &Vec<T>, tol: Tolerances) -> Result<(), CheckCloseError>
    { self.check_close(&other[..], tol) }
}

impl<A: CheckClose, B: CheckClose> CheckClose for (A, B) {
    fn check_close(&self, other: &Self, tol: Tolerances) -> Result<(), CheckCloseError> {
        self.0.check_close(&other.0, tol)?;
        self.1.check_close(&other.1, tol)
    }
}
