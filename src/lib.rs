/* ************************************************************************ **
** This file is part of fixmat, and is licensed under EITHER the MIT        **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Fixed-size linear algebra and quaternion rotations.
//!
//! The actual code lives in the member crates; this crate gathers it under one name.
//!
//! ```
//! use fixmat::{mat, quat, Quaternion, V3, M33};
//!
//! let m: M33 = mat::from_array([[2.0, 0.0, 0.0], [0.0, 4.0, 0.0], [1.0, 0.0, 1.0]]);
//! assert!(mat::is_eye(&(&mat::inv(&m) * &m)));
//!
//! let q = Quaternion::from_axis_angle(&V3([0.0, 0.0, 1.0]), std::f64::consts::FRAC_PI_2);
//! let r = quat::to_rotation_matrix(&q);
//! let v = &r * &V3([1.0, 0.0, 0.0]);
//! assert!((v - V3([0.0, 1.0, 0.0])).norm() < 1e-12);
//! ```

pub use fixmat_array_types::*;

pub use fixmat_quat::{quat, Quaternion, EulerAngles, Axes};

pub use fixmat_config as config;
