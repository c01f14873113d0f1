//! Unified error type for touch2usb.
//!
//! We avoid `alloc` - all error variants carry only fixed-size data.
//! Implements `defmt::Format` for efficient on-target logging when the
//! `defmt` feature is enabled; host builds stay formatter-free.

use embedded_hal::i2c::ErrorKind;

/// Top-level error type used across the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    // Transport
    /// The I2C bus rejected a transaction (NACK, arbitration loss,
    /// timeout). Carries the HAL's classification of the fault.
    Bus(ErrorKind),

    /// The reset or interrupt line could not be driven/read.
    Pin,

    // Protocol
    /// The chip reported an active-touch count above the five point
    /// slots it actually has. The raw nibble is preserved so the
    /// caller can log it before clamping.
    TouchCount(u8),

    // Caller contract
    /// A report encoder was called with a point table whose length is
    /// not exactly five. The call is rejected without touching any
    /// encoder state or output buffer.
    PointCount,

    /// Output buffer too small for the encoded report.
    BufferOverflow,
}

impl Error {
    /// Classify a HAL bus error into the transport variant.
    pub fn bus<E: embedded_hal::i2c::Error>(e: E) -> Self {
        Error::Bus(e.kind())
    }
}
