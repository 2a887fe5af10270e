// Licensed under the Apache-2.0 license

//! CAT24M01 serial EEPROM driver module.
//!
//! This module provides the address translation, transaction framing, and
//! blocking read/write operations for the CAT24M01 family of two-bank I2C
//! EEPROMs, on top of the `embedded-hal` 1.0 bus traits.

pub mod address;
pub mod common;
pub mod driver;

pub use common::Config;
pub use driver::{Cat24m01, Error};
