/* ************************************************************************ **
** This file is part of fixmat, and is licensed under EITHER the MIT        **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! All of the post-processing that occurs after deserialization is written here.

use crate::config::*;
use crate::FailResult;

impl Settings {
    pub fn validate(self) -> FailResult<ValidatedSettings> {
        check_tolerance("identity-tol", self.identity_tol)?;
        self.quaternion.check()?;

        if self.identity_tol == 0.0 {
            warn!("`identity-tol: 0` only accepts matrices that are exactly the identity.");
        }

        Ok(ValidatedSettings(self))
    }
}

impl QuaternionSettings {
    fn check(&self) -> FailResult<()> {
        let QuaternionSettings { gimbal_threshold, euler_snap_tol, zero_axis_tol } = *self;

        check_tolerance("quaternion.euler-snap-tol", euler_snap_tol)?;
        check_tolerance("quaternion.zero-axis-tol", zero_axis_tol)?;

        // |xy + zw| never exceeds 0.5 for a unit quaternion
        if !(0.0 < gimbal_threshold && gimbal_threshold < 0.5) {
            bail!("`quaternion.gimbal-threshold: {}` is invalid. (0 < threshold < 0.5)", gimbal_threshold);
        }
        Ok(())
    }
}

fn check_tolerance(key: &str, value: f64) -> FailResult<()> {
    if !value.is_finite() {
        bail!("`{}: {}` must be finite.", key, value);
    }
    if value < 0.0 {
        bail!("`{}: {}` must not be negative.", key, value);
    }
    Ok(())
}
