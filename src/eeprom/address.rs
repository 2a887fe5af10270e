// Licensed under the Apache-2.0 license

//! Pure address-translation helpers for the CAT24M01.
//!
//! The device spreads a 17-bit address space across two I2C select
//! addresses: bit A16 picks the bank (and with it the select address) and
//! the low 16 bits travel as a big-endian memory pointer at the start of
//! every transaction. Every driver operation goes through the helpers here
//! so that bank selection and pointer encoding cannot diverge between the
//! read and write paths.

use crate::eeprom::common::{
    BLOCK_COUNT, BLOCK_SIZE, FIRST_WRITABLE_PAGE, MAX_ADDRESS, PAGE_COUNT, PAGE_SIZE,
};

/// Clamp a linear address into the device range `[0, MAX_ADDRESS]`.
///
/// Out-of-range addresses are not an error: they are silently pinned to the
/// last cell, matching the device-protection policy of the firmware this
/// driver is compatible with.
#[must_use]
pub fn clamp_address(addr: u32) -> u32 {
    addr.min(MAX_ADDRESS)
}

/// Derive the seven-bit select address for the bank containing `addr`.
///
/// `base` answers for bank 0 (A16 = 0), `base + 1` for bank 1. `addr` must
/// already be clamped; callers go through [`clamp_address`] first.
#[must_use]
pub fn bank_address(base: u8, addr: u32) -> u8 {
    if addr >> 16 == 0 {
        base
    } else {
        base.wrapping_add(1)
    }
}

/// Encode the low 16 bits of `addr` as the big-endian memory pointer sent
/// first in every transaction.
#[must_use]
pub fn encode_pointer(addr: u32) -> [u8; 2] {
    [(addr >> 8) as u8, addr as u8]
}

/// Clamp a page index into the writable range.
///
/// Pages below [`FIRST_WRITABLE_PAGE`] are reserved and clamped up; indices
/// past the end of the device are clamped down to the last page.
#[must_use]
pub fn clamp_page(page: u16) -> u16 {
    page.clamp(FIRST_WRITABLE_PAGE, PAGE_COUNT - 1)
}

/// Clamp a block index onto the device.
#[must_use]
pub fn clamp_block(block: u16) -> u16 {
    block.min(BLOCK_COUNT - 1)
}

/// Linear address of the first byte of `page`.
#[must_use]
pub fn page_start(page: u16) -> u32 {
    u32::from(page) * PAGE_SIZE as u32
}

/// Linear address of the first byte of `block`.
#[must_use]
pub fn block_start(block: u16) -> u32 {
    u32::from(block) * BLOCK_SIZE as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eeprom::common::{BLOCK_COUNT, DEFAULT_BASE_ADDRESS as BASE};

    #[test]
    fn clamp_passes_in_range_addresses_through() {
        for addr in [0, 1, 0xFFFF, 0x1_0000, MAX_ADDRESS] {
            assert_eq!(clamp_address(addr), addr);
        }
    }

    #[test]
    fn clamp_pins_out_of_range_addresses_to_last_cell() {
        assert_eq!(clamp_address(MAX_ADDRESS + 1), MAX_ADDRESS);
        assert_eq!(clamp_address(u32::MAX), MAX_ADDRESS);
    }

    #[test]
    fn bank_select_follows_bit_16() {
        // Bank 0: a16 = 0
        assert_eq!(bank_address(BASE, 0), BASE);
        assert_eq!(bank_address(BASE, 0xFFFF), BASE);
        // Bank 1: a16 = 1
        assert_eq!(bank_address(BASE, 0x1_0000), BASE + 1);
        assert_eq!(bank_address(BASE, MAX_ADDRESS), BASE + 1);
    }

    #[test]
    fn bank_select_sweep_matches_definition() {
        for addr in (0..=MAX_ADDRESS).step_by(1021) {
            let expected = if addr >> 16 == 0 { BASE } else { BASE + 1 };
            assert_eq!(bank_address(BASE, addr), expected, "addr {addr:#x}");
        }
    }

    #[test]
    fn pointer_encoding_is_big_endian_low_16_bits() {
        for addr in [0u32, 5, 0x0C00, 0x1234, 0xFFFF, 0x1_1170, MAX_ADDRESS] {
            let [hi, lo] = encode_pointer(addr);
            assert_eq!(
                (u32::from(hi) << 8) | u32::from(lo),
                addr & 0xFFFF,
                "addr {addr:#x}"
            );
        }
    }

    #[test]
    fn reserved_pages_are_clamped_up() {
        for page in 0..FIRST_WRITABLE_PAGE {
            assert_eq!(clamp_page(page), FIRST_WRITABLE_PAGE);
        }
        assert_eq!(clamp_page(FIRST_WRITABLE_PAGE), FIRST_WRITABLE_PAGE);
        assert_eq!(clamp_page(200), 200);
    }

    #[test]
    fn page_index_is_clamped_to_last_page() {
        assert_eq!(clamp_page(PAGE_COUNT - 1), PAGE_COUNT - 1);
        assert_eq!(clamp_page(PAGE_COUNT), PAGE_COUNT - 1);
        assert_eq!(clamp_page(u16::MAX), PAGE_COUNT - 1);
    }

    #[test]
    fn block_index_is_clamped_to_last_block() {
        assert_eq!(clamp_block(0), 0);
        assert_eq!(clamp_block(BLOCK_COUNT - 1), BLOCK_COUNT - 1);
        assert_eq!(clamp_block(BLOCK_COUNT), BLOCK_COUNT - 1);
    }

    #[test]
    fn start_addresses_scale_by_unit_size() {
        assert_eq!(page_start(12), 3072);
        assert_eq!(page_start(PAGE_COUNT - 1), 130_816);
        assert_eq!(block_start(0), 0);
        assert_eq!(block_start(1), 128);
        assert_eq!(block_start(BLOCK_COUNT - 1), 130_944);
    }

    #[test]
    fn last_page_and_block_stay_in_range() {
        assert!(page_start(PAGE_COUNT - 1) + PAGE_SIZE as u32 - 1 <= MAX_ADDRESS);
        assert!(block_start(BLOCK_COUNT - 1) + BLOCK_SIZE as u32 - 1 <= MAX_ADDRESS);
    }
}
