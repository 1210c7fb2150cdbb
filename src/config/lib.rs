/* ************************************************************************ **
** This file is part of fixmat, and is licensed under EITHER the MIT        **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

#![allow(non_snake_case)]

// Crate where serde_yaml code for fixmat's settings is monomorphized.
//
// The functions here also make use of serde_ignored to catch typos in the config.

#[macro_use]
extern crate serde_derive;
#[macro_use]
extern crate failure;
#[macro_use]
extern crate log;

use std::io::Read;

pub type FailResult<T> = Result<T, failure::Error>;

/// Provides an alternative to serde_yaml::from_reader that warns about
/// unrecognized keys.
pub trait YamlRead: for <'de> serde::Deserialize<'de> {
    fn from_reader(mut r: impl Read) -> Result<Self, serde_yaml::Error>
    { YamlRead::from_dyn_reader(&mut r) }

    fn from_dyn_reader(r: &mut dyn Read) -> Result<Self, serde_yaml::Error> {
        // serde_ignored needs a Deserializer, and serde_yaml 0.7 only offers
        // one by way of Value.
        Self::from_value(value_from_dyn_reader(r)?)
    }

    fn from_value(value: serde_yaml::Value) -> Result<Self, serde_yaml::Error>;
}

macro_rules! derive_yaml_read {
    ($Type:ty) => {
        impl $crate::YamlRead for $Type {
            fn from_value(value: serde_yaml::Value) -> Result<$Type, serde_yaml::Error> {
                serde_ignored::deserialize(
                    value,
                    |path| warn!("Unused config item (possible typo?): {}", path),
                )
            }
        }
    };
}

derive_yaml_read!{serde_yaml::Value}

fn value_from_dyn_reader(r: &mut dyn Read) -> Result<serde_yaml::Value, serde_yaml::Error>
{ serde_yaml::from_reader(r) }

pub use self::config::*;
mod config;

mod validation;
