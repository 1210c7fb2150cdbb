/* ************************************************************************ **
** This file is part of fixmat, and is licensed under EITHER the MIT        **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

// NOTE: Please make sure to use the YamlRead trait when deserializing these types!

use serde::de;

/// Root settings object.
///
/// This is what you should deserialize.
#[derive(Serialize)]
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedSettings(pub Settings);

/// Raw deserialized form of settings.
///
/// You shouldn't deserialize this type directly; deserialize `ValidatedSettings`
/// instead, so that the tolerances are checked.
#[derive(Serialize, Deserialize)]
#[derive(Debug, Clone, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub struct Settings {
    /// Absolute tolerance for matrix identity tests.
    ///
    /// Defaults to the machine epsilon of `f64`.
    #[serde(default = "settings__identity_tol")]
    pub identity_tol: f64,

    #[serde(default)]
    pub quaternion: QuaternionSettings,
}
derive_yaml_read!{Settings}

fn settings__identity_tol() -> f64 { std::f64::EPSILON }

impl Default for Settings {
    fn default() -> Self {
        Settings {
            identity_tol: settings__identity_tol(),
            quaternion: Default::default(),
        }
    }
}

derive_yaml_read!{ValidatedSettings}

impl<'de> de::Deserialize<'de> for ValidatedSettings {
    fn deserialize<D: de::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let cereal: Settings = de::Deserialize::deserialize(deserializer)?;

        cereal.validate().map_err(de::Error::custom)
    }
}

/// Thresholds for the conversions out of a quaternion.
#[derive(Serialize, Deserialize)]
#[derive(Debug, Clone, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub struct QuaternionSettings {
    /// Euler extraction treats `|xy + zw|` above this as gimbal lock.
    ///
    /// Must lie strictly between 0 and 0.5.
    #[serde(default = "quaternion__gimbal_threshold")]
    pub gimbal_threshold: f64,

    /// Extracted Euler angles no larger than this (in magnitude) become exactly zero.
    #[serde(default = "quaternion__euler_snap_tol")]
    pub euler_snap_tol: f64,

    /// Axis-angle extraction reports no rotation when the vector part has a
    /// norm no larger than this.
    #[serde(default = "quaternion__zero_axis_tol")]
    pub zero_axis_tol: f64,
}
derive_yaml_read!{QuaternionSettings}

fn quaternion__gimbal_threshold() -> f64 { fixmat_quat::Tolerances::default().gimbal_threshold }
fn quaternion__euler_snap_tol() -> f64 { fixmat_quat::Tolerances::default().euler_snap_tol }
fn quaternion__zero_axis_tol() -> f64 { fixmat_quat::Tolerances::default().zero_axis_tol }

impl Default for QuaternionSettings {
    fn default() -> Self {
        QuaternionSettings {
            gimbal_threshold: quaternion__gimbal_threshold(),
            euler_snap_tol: quaternion__euler_snap_tol(),
            zero_axis_tol: quaternion__zero_axis_tol(),
        }
    }
}

impl ValidatedSettings {
    /// Absolute tolerance for `is_eye_within`.
    pub fn identity_tol(&self) -> f64
    { self.0.identity_tol }

    /// Tolerances for the `_with` conversions in `fixmat_quat::quat`.
    pub fn quaternion_tolerances(&self) -> fixmat_quat::Tolerances {
        let QuaternionSettings { gimbal_threshold, euler_snap_tol, zero_axis_tol } = self.0.quaternion;
        fixmat_quat::Tolerances { gimbal_threshold, euler_snap_tol, zero_axis_tol }
    }
}

impl From<ValidatedSettings> for fixmat_quat::Tolerances {
    fn from(settings: ValidatedSettings) -> Self
    { settings.quaternion_tolerances() }
}
