/* ************************************************************************ **
** This file is part of fixmat, and is licensed under EITHER the MIT        **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Fixed-size vector and matrix types for sizes 2 through 6.
//!
//! Matrices are stored as arrays of row vectors (`M33<X> = M3<V3<X>>`),
//! and every size shares one implementation of each operation, generated
//! with `gen_each!`.

#[cfg(test)]
#[macro_use]
extern crate fixmat_assert_close;

#[macro_use]
extern crate failure;
#[macro_use]
extern crate log;

#[macro_use]
mod macros;

pub use self::traits::{Semiring, Ring, Field};
#[doc(hidden)]
pub use self::traits::internal;
mod traits;

pub use self::types::*;
mod types;

mod ops;

// Expose neatly-named modules, but let the .rs files have names that are close alphabetically.
#[doc(hidden)] pub mod methods_v;
#[doc(hidden)] pub mod methods_m;
pub use self::methods_v as vee;
pub use self::methods_m as mat;

pub use self::methods_v::dot;
pub use self::methods_m::DegenerateMatrixError;

pub mod batch;
