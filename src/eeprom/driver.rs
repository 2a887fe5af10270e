// Licensed under the Apache-2.0 license

//! Blocking CAT24M01 driver over `embedded-hal` I2C.
//!
//! Every operation is a single request/response exchange with the bus. The
//! one multi-phase pattern, a byte read, writes the two-byte memory pointer
//! and reads the data byte inside one `write_read` transaction, so the bus
//! is not released between the phases.

use embedded_hal::i2c::I2c;
use heapless::Vec;

use crate::common::{Logger, NoOpLogger};
use crate::eeprom::address::{
    bank_address, block_start, clamp_address, clamp_block, clamp_page, encode_pointer, page_start,
};
use crate::eeprom::common::{Config, BLOCK_READ_LEN, BLOCK_SIZE, PAGE_SIZE};

/// Longest frame sent in one transaction: pointer plus one full page.
const FRAME_CAPACITY: usize = PAGE_SIZE + 2;

/// Errors returned by the driver.
///
/// Wraps the bus error type `E` of the underlying I2C implementation and
/// adds the one logical failure the driver can detect itself.
#[derive(Debug, PartialEq, Eq)]
pub enum Error<E> {
    /// The bus transaction failed (NACK, timeout, arbitration loss, ...).
    /// Forwarded from the transport untouched; the driver does not retry.
    Bus(E),
    /// The payload does not fit the addressed page or block. The driver
    /// never splits a payload or lets it wrap into the next unit.
    DataTooLong,
}

/// Blocking driver for the CAT24M01 two-bank I2C EEPROM.
///
/// The driver holds no device state between calls; everything it computes
/// per operation is derived from the linear address. Out-of-range addresses
/// and page indices are silently clamped onto the device rather than
/// rejected, for compatibility with deployed data layouts.
///
/// Operations take `&mut self`, so one instance cannot interleave its own
/// transactions. Sharing a bus or device across threads or tasks still
/// requires external serialization (a mutex or a single-owner handle):
/// nothing here arbitrates between instances.
pub struct Cat24m01<I2C, L: Logger = NoOpLogger> {
    i2c: I2C,
    config: Config,
    logger: L,
}

impl<I2C: I2c> Cat24m01<I2C> {
    /// Create a driver with the default bank-0 select address (0x54).
    pub fn new(i2c: I2C) -> Self {
        Self::with_config(i2c, Config::default())
    }

    pub fn with_config(i2c: I2C, config: Config) -> Self {
        Self {
            i2c,
            config,
            logger: NoOpLogger,
        }
    }
}

impl<I2C: I2c, L: Logger> Cat24m01<I2C, L> {
    /// Create a driver that reports clamping and rejected payloads to
    /// `logger`.
    pub fn with_logger(i2c: I2C, config: Config, logger: L) -> Self {
        Self {
            i2c,
            config,
            logger,
        }
    }

    /// Seven-bit select address of bank 0.
    pub fn base_address(&self) -> u8 {
        self.config.base_address
    }

    /// Consume the driver and return the bus.
    pub fn release(self) -> I2C {
        self.i2c
    }

    /// Write one byte at a linear address.
    ///
    /// The address is clamped onto the device, the bank select address is
    /// derived from bit A16, and a single `[hi, lo, value]` frame is
    /// written.
    pub fn write_byte(&mut self, value: u8, addr: u32) -> Result<(), Error<I2C::Error>> {
        let addr = self.clamp_logged(addr);
        let select = bank_address(self.config.base_address, addr);
        let [hi, lo] = encode_pointer(addr);
        self.i2c.write(select, &[hi, lo, value]).map_err(Error::Bus)
    }

    /// Write `data` to the start of a 256-byte physical page.
    ///
    /// The page index is clamped into the writable range (the first 12
    /// pages are reserved). `data` may be shorter than a page but not
    /// longer; the device would wrap a longer frame around the page
    /// boundary, so it is rejected with [`Error::DataTooLong`].
    pub fn write_page(&mut self, data: &[u8], page: u16) -> Result<(), Error<I2C::Error>> {
        let clamped = clamp_page(page);
        if clamped != page {
            self.logger
                .log(format_args!("cat24m01: page {page} clamped to {clamped}"));
        }
        self.write_frame(page_start(clamped), data, PAGE_SIZE)
    }

    /// Write `data` to the start of a 128-byte block.
    ///
    /// Blocks are a software partition of each page into halves, not a
    /// device concept. The block index is clamped onto the device.
    pub fn write_block(&mut self, data: &[u8], block: u16) -> Result<(), Error<I2C::Error>> {
        let clamped = clamp_block(block);
        if clamped != block {
            self.logger
                .log(format_args!("cat24m01: block {block} clamped to {clamped}"));
        }
        self.write_frame(block_start(clamped), data, BLOCK_SIZE)
    }

    /// Read a block entry as 127 sequential single-byte reads.
    ///
    /// The length is deliberately one short of the 128-byte block: deployed
    /// firmware reads 127 bytes per block and stored layouts depend on it,
    /// so the driver reproduces it rather than reading the full block.
    pub fn read_block(&mut self, block: u16) -> Result<[u8; BLOCK_READ_LEN], Error<I2C::Error>> {
        let start = block_start(clamp_block(block));
        let mut entry = [0u8; BLOCK_READ_LEN];
        for (offset, slot) in entry.iter_mut().enumerate() {
            *slot = self.read_byte(start + offset as u32)?;
        }
        Ok(entry)
    }

    /// Read one byte from a linear address.
    ///
    /// Two-phase protocol in one transaction: the memory pointer is written
    /// and the data byte read back under a repeated start, without
    /// releasing the bus in between.
    pub fn read_byte(&mut self, addr: u32) -> Result<u8, Error<I2C::Error>> {
        let addr = self.clamp_logged(addr);
        let select = bank_address(self.config.base_address, addr);
        let pointer = encode_pointer(addr);
        let mut data = [0u8; 1];
        self.i2c
            .write_read(select, &pointer, &mut data)
            .map_err(Error::Bus)?;
        let [value] = data;
        Ok(value)
    }

    /// Frame `pointer + data` and write it in one transaction.
    fn write_frame(
        &mut self,
        start: u32,
        data: &[u8],
        unit_len: usize,
    ) -> Result<(), Error<I2C::Error>> {
        if data.len() > unit_len {
            self.logger.log(format_args!(
                "cat24m01: {} byte payload rejected, unit is {unit_len} bytes",
                data.len()
            ));
            return Err(Error::DataTooLong);
        }
        let select = bank_address(self.config.base_address, start);
        let mut frame: Vec<u8, FRAME_CAPACITY> = Vec::new();
        frame
            .extend_from_slice(&encode_pointer(start))
            .map_err(|()| Error::DataTooLong)?;
        frame.extend_from_slice(data).map_err(|()| Error::DataTooLong)?;
        self.i2c.write(select, &frame).map_err(Error::Bus)
    }

    fn clamp_logged(&mut self, addr: u32) -> u32 {
        let clamped = clamp_address(addr);
        if clamped != addr {
            self.logger
                .log(format_args!("cat24m01: address {addr} clamped to {clamped}"));
        }
        clamped
    }
}
