// Licensed under the Apache-2.0 license

//! Platform-agnostic driver for the CAT24M01 serial EEPROM.
//!
//! The CAT24M01 is a 1-Mbit (128 KiB) I2C EEPROM whose 17th address bit is
//! carried in the device select byte rather than in the memory pointer: the
//! part answers on two adjacent seven-bit addresses, one per 64 KiB bank.
//! This crate implements the address translation and transaction framing for
//! that scheme on top of the [`embedded_hal::i2c::I2c`] trait, so it runs
//! against any embedded-hal 1.0 bus implementation and can be tested against
//! a mock bus without hardware.

// Enforce coding guidelines - prevent panic-prone patterns in production code only
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::indexing_slicing))]
#![cfg_attr(not(test), warn(clippy::expect_used))]
#![cfg_attr(not(test), no_std)]
pub mod common;
pub mod eeprom;
