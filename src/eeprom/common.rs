// Licensed under the Apache-2.0 license

//! Common types and constants for the CAT24M01 driver.
//!
//! This module provides the device geometry (capacity, page and block
//! layout) and the per-instance configuration shared across the driver
//! implementation.

/// Total device capacity in bytes (1 Mbit).
pub const CAPACITY: u32 = 131_072;

/// Highest valid linear address (`a16:a0`).
pub const MAX_ADDRESS: u32 = CAPACITY - 1;

/// Physical write-page size defined by the EEPROM hardware.
pub const PAGE_SIZE: usize = 256;

/// Number of physical pages on the device.
pub const PAGE_COUNT: u16 = 512;

/// First page available for page writes; pages below this are reserved.
pub const FIRST_WRITABLE_PAGE: u16 = 12;

/// Software-defined half-page write unit, not a device concept.
pub const BLOCK_SIZE: usize = 128;

/// Number of blocks on the device.
pub const BLOCK_COUNT: u16 = 1024;

/// Bytes returned by a block read.
///
/// One byte short of [`BLOCK_SIZE`]: the original firmware this driver is
/// compatible with reads 127 bytes per block, and stored layouts depend on
/// that length.
pub const BLOCK_READ_LEN: usize = 127;

/// Seven-bit device select address for bank 0 (A16 = 0) with all address
/// pins strapped to their default level. Bank 1 always answers one above.
pub const DEFAULT_BASE_ADDRESS: u8 = 0x54;

/// Per-instance driver configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Seven-bit I2C address of bank 0; bank 1 is `base_address + 1`.
    pub base_address: u8,
}

impl Config {
    #[must_use]
    pub fn with_base_address(base_address: u8) -> Self {
        Self { base_address }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_address: DEFAULT_BASE_ADDRESS,
        }
    }
}
