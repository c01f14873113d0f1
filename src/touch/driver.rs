//! Touch controller driver - chip lifecycle and point polling.
//!
//! Owns the reset line, the interrupt line, and the register transport.
//! Lifecycle is `new` → [`init`] → [`poll_points`] on every falling
//! edge of the INT line; the chip holds the line until the status
//! register is written back to zero, which `poll_points` does as its
//! final step.
//!
//! The driver is deliberately silent: every operation returns a
//! `Result` and the caller owns the recovery policy (skip the frame,
//! or force a chip [`reset`] after repeated faults). There is no retry
//! and no logging at this layer.
//!
//! [`init`]: TouchController::init
//! [`poll_points`]: TouchController::poll_points
//! [`reset`]: TouchController::reset

use embedded_hal::digital::OutputPin;
use embedded_hal_async::delay::DelayNs;
use embedded_hal_async::digital::Wait;
use embedded_hal_async::i2c::{I2c, SevenBitAddress};

use crate::config::{TOUCH_RESET_PULSE_US, TOUCH_RESET_SETTLE_MS};
use crate::error::Error;
use crate::touch::frame::{ChipIdentity, ContactPoint, StatusSnapshot, TouchFrame};
use crate::touch::regs;
use crate::touch::transport::RegisterBus;
use crate::touch::MAX_POINTS;

/// Driver for the I2C touch controller.
///
/// Generic over the `embedded-hal` traits so the register protocol runs
/// unchanged against the RP2040 peripherals or a scripted mock bus.
pub struct TouchController<I2C, INT, RST, D> {
    bus: RegisterBus<I2C>,
    int: INT,
    rst: RST,
    delay: D,
    identity: ChipIdentity,
    status: StatusSnapshot,
    points: [ContactPoint; MAX_POINTS],
}

impl<I2C, INT, RST, D> TouchController<I2C, INT, RST, D>
where
    I2C: I2c<SevenBitAddress>,
    INT: Wait,
    RST: OutputPin,
    D: DelayNs,
{
    /// Wrap the bus and pins. The chip is untouched until [`init`].
    ///
    /// [`init`]: TouchController::init
    pub fn new(i2c: I2C, int: INT, rst: RST, delay: D) -> Self {
        Self {
            bus: RegisterBus::new(i2c),
            int,
            rst,
            delay,
            identity: ChipIdentity::default(),
            status: StatusSnapshot::default(),
            points: [ContactPoint::default(); MAX_POINTS],
        }
    }

    /// Bring the chip up: reset pulse, configure the maximum touch
    /// count, then read the identification block.
    ///
    /// Re-initialization is not a supported use case; call once after
    /// power-up.
    pub async fn init(&mut self) -> Result<(), Error> {
        self.reset().await?;

        // The chip tracks at most MAX_POINTS contacts; tell it so.
        self.bus
            .write_register(regs::REG_TOUCH_NUM, &[MAX_POINTS as u8])
            .await?;

        let mut product_id = [0u8; 4];
        let mut firmware = [0u8; 2];
        let mut x_res = [0u8; 2];
        let mut y_res = [0u8; 2];
        let mut vendor = [0u8; 1];
        self.bus
            .read_register(regs::REG_PRODUCT_ID, &mut product_id)
            .await?;
        self.bus
            .read_register(regs::REG_FIRMWARE_ID, &mut firmware)
            .await?;
        self.bus.read_register(regs::REG_X_RES, &mut x_res).await?;
        self.bus.read_register(regs::REG_Y_RES, &mut y_res).await?;
        self.bus
            .read_register(regs::REG_VENDOR_ID, &mut vendor)
            .await?;

        self.identity = ChipIdentity {
            product_id,
            firmware_version: u16::from_le_bytes(firmware),
            x_resolution: u16::from_le_bytes(x_res),
            y_resolution: u16::from_le_bytes(y_res),
            vendor_id: vendor[0],
        };
        Ok(())
    }

    /// Pulse the reset line low, release it, then block for the settle
    /// window. Both delays are hard chip requirements.
    pub async fn reset(&mut self) -> Result<(), Error> {
        self.rst.set_low().map_err(|_| Error::Pin)?;
        self.delay.delay_us(TOUCH_RESET_PULSE_US).await;
        self.rst.set_high().map_err(|_| Error::Pin)?;
        self.delay.delay_ms(TOUCH_RESET_SETTLE_MS).await;
        Ok(())
    }

    /// Block until the chip signals a fresh point table (falling edge
    /// on the INT line).
    pub async fn wait_for_touch(&mut self) -> Result<(), Error> {
        self.int.wait_for_falling_edge().await.map_err(|_| Error::Pin)
    }

    /// Service one interrupt: read the status register, refresh all
    /// five point slots, and write the status back to zero to re-arm
    /// the INT line.
    ///
    /// Every slot is read regardless of the reported touch count, so
    /// slots beyond the count hold whatever the chip returned -
    /// consumers gate on [`StatusSnapshot::contact_count`].
    ///
    /// Returns the total transport byte count for diagnostics. Any bus
    /// fault aborts the poll and leaves the previous table in place.
    pub async fn poll_points(&mut self) -> Result<usize, Error> {
        let mut bytes = 0;

        let mut status = [0u8; 1];
        bytes += self.bus.read_register(regs::REG_STATUS, &mut status).await?;
        let snapshot = StatusSnapshot::from_byte(status[0]);

        let mut points = self.points;
        for (slot, reg) in regs::REG_POINTS.iter().enumerate() {
            let mut record = [0u8; regs::POINT_RECORD_LEN];
            bytes += self.bus.read_register(*reg, &mut record).await?;
            points[slot] = ContactPoint::from_record(&record);
        }

        // Datasheet: clear the status register to arm the next interrupt.
        bytes += self.bus.write_register(regs::REG_STATUS, &[0]).await?;

        self.status = snapshot;
        self.points = points;
        Ok(bytes)
    }

    /// Identification block read during [`init`].
    ///
    /// [`init`]: TouchController::init
    pub fn identity(&self) -> &ChipIdentity {
        &self.identity
    }

    /// Latest decoded status register.
    pub fn status(&self) -> StatusSnapshot {
        self.status
    }

    /// Latest point table, indexed by physical slot.
    pub fn points(&self) -> &[ContactPoint; MAX_POINTS] {
        &self.points
    }

    /// Snapshot of the latest poll as one publishable unit.
    pub fn frame(&self) -> TouchFrame {
        TouchFrame {
            status: self.status,
            points: self.points,
        }
    }
}
