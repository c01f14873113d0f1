//! Touch controller subsystem - I2C register protocol and point decoding.
//!
//! The chip exposes a 16-bit register space over I2C. A falling edge on
//! its INT line means a fresh point table is ready; the driver reads the
//! status register, all five point records, and writes the status back
//! to zero to re-arm the line.
//!
//! Split by concern:
//! - [`regs`]: the fixed register map and per-point field offsets
//! - [`frame`]: typed decodes of the status byte and point records
//! - [`transport`]: 16-bit-addressed register reads/writes over any
//!   `embedded-hal-async` I2C bus
//! - [`driver`]: chip lifecycle (reset, identify, poll)

pub mod driver;
pub mod frame;
pub mod regs;
pub mod transport;

pub use driver::TouchController;
pub use frame::{ChipIdentity, ContactPoint, StatusSnapshot, TouchFrame};

/// Number of point slots in the chip's register bank.
///
/// This is a property of the silicon, not a tunable: there are exactly
/// five point registers, and the HID report layouts are sized to match.
pub const MAX_POINTS: usize = 5;
