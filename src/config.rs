//! Application-wide constants and compile-time configuration.
//!
//! All hardware pin assignments, timing parameters, and protocol
//! constants live here so they can be tuned in one place.

// Touch controller I2C

/// 7-bit I2C address of the touch controller.
pub const TOUCH_I2C_ADDR: u8 = 0x5D;

/// I2C bus speed (Hz). The chip supports up to 400 kHz fast mode.
pub const TOUCH_I2C_HZ: u32 = 400_000;

/// Reset pulse width (µs). The reset line must be held low at least
/// this long for the chip to register the pulse.
pub const TOUCH_RESET_PULSE_US: u32 = 100;

/// Settle window (ms) after releasing reset before the chip's
/// registers are valid. Chip requirement, not tunable.
pub const TOUCH_RESET_SETTLE_MS: u32 = 50;

/// Consecutive failed polls before the touch task forces a chip reset.
pub const TOUCH_FAULT_RESET_THRESHOLD: u8 = 3;

// USB

/// USB VID/PID - use the "pid.codes" open-source test VID.
/// Replace with your own allocated VID/PID for production.
pub const USB_VID: u16 = 0x1209;
pub const USB_PID: u16 = 0x0002;

/// USB device strings.
pub const USB_MANUFACTURER: &str = "touch2usb";
pub const USB_PRODUCT: &str = "I2C-to-USB Touch Digitizer";
pub const USB_SERIAL_NUMBER: &str = "000001";

/// USB HID polling interval (ms).
pub const USB_HID_POLL_MS: u8 = 1;

// GPIO pin assignments (LCD driver board defaults)
//
// These are logical names; actual `embassy_rp::peripherals::*` pins are
// selected in `main.rs`.  Adjust for your custom PCB.
//
//   I2C SDA (I2C1)  → GPIO18
//   I2C SCL (I2C1)  → GPIO19
//   Touch RST       → GPIO20
//   Touch INT       → GPIO21
//   Status LED      → GPIO6

/// Status LED blink half-period (ms).
pub const LED_BLINK_MS: u64 = 250;
