/* ************************************************************************ **
** This file is part of fixmat, and is licensed under EITHER the MIT        **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Quaternion algebra, and conversions to and from rotation matrices,
//! axis-angle pairs and Euler angles.
//!
//! Components are ordered `(x, y, z, w)`, with `w` the scalar part.

#[cfg(test)]
#[macro_use]
extern crate fixmat_assert_close;

#[macro_use]
extern crate log;

pub use self::quaternion::Quaternion;
mod quaternion;

#[doc(hidden)] pub mod methods_q;
pub use self::methods_q as quat;

pub use self::methods_q::{EulerAngles, Axes, Tolerances};
