//! 16-bit-addressed register transport over I2C.
//!
//! Every transaction starts with the register address, big-endian, as
//! the first two bytes. Writes append the payload to the same
//! transaction; reads issue a second addressed read transaction for the
//! requested length.
//!
//! Both operations return the total number of bytes moved on the wire
//! for diagnostics. Bus faults surface as [`Error::Bus`] - this layer
//! never retries and never swallows a failure; retry policy belongs to
//! the caller.

use embedded_hal_async::i2c::{I2c, Operation, SevenBitAddress};

use crate::config::TOUCH_I2C_ADDR;
use crate::error::Error;

/// Register-addressed wrapper over a raw I2C bus.
pub struct RegisterBus<I2C> {
    i2c: I2C,
}

impl<I2C: I2c<SevenBitAddress>> RegisterBus<I2C> {
    pub fn new(i2c: I2C) -> Self {
        Self { i2c }
    }

    /// Write `payload` to the register at `reg`.
    ///
    /// The address prefix and payload go out in one transaction.
    /// Returns the number of bytes transmitted (2 + payload length).
    pub async fn write_register(&mut self, reg: u16, payload: &[u8]) -> Result<usize, Error> {
        let addr = reg.to_be_bytes();
        let mut ops = [Operation::Write(&addr), Operation::Write(payload)];
        self.i2c
            .transaction(TOUCH_I2C_ADDR, &mut ops)
            .await
            .map_err(Error::bus)?;
        Ok(addr.len() + payload.len())
    }

    /// Read `buf.len()` bytes from the register at `reg`.
    ///
    /// Returns the total bytes moved (2 written + `buf.len()` read).
    pub async fn read_register(&mut self, reg: u16, buf: &mut [u8]) -> Result<usize, Error> {
        let addr = reg.to_be_bytes();
        self.i2c
            .write_read(TOUCH_I2C_ADDR, &addr, buf)
            .await
            .map_err(Error::bus)?;
        Ok(addr.len() + buf.len())
    }
}
