// Helpers shared by the integration tests.
#![allow(dead_code)]

#[macro_use]
pub mod util;
