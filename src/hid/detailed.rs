//! Detailed per-finger digitizer report (report ID 4).
//!
//! Layout (84 bytes):
//! ```text
//! Byte 0:      Report ID (0x04)
//! Bytes 1-16:  Finger 0:
//!              flags (tip switch bit + 7 pad bits), contact id,
//!              x (u32 LE, high word always 0), y (u32 LE, same),
//!              width (u16 LE), height (u16 LE), azimuth (u16 LE)
//! Bytes 17-80: Fingers 1-4, same 16-byte layout
//! Bytes 81-82: Relative scan time (u16 LE)
//! Byte 83:     Contact count
//! ```
//!
//! All five slots are written unconditionally at their latest table
//! values - there is no contact-count gating of the per-finger fields.
//! Contact id carries the chip's track id, and the contact size feeds
//! both width and height. The chip provides no tip, azimuth, or
//! scan-time data, so those fields are always emitted as 0.

use crate::error::Error;
use crate::hid::ReportEncoder;
use crate::touch::{ContactPoint, MAX_POINTS};

/// Bytes per finger entry.
const ENTRY_LEN: usize = 16;

/// Stateless encoder for the detailed digitizer layout.
pub struct DetailedReport;

impl DetailedReport {
    pub const fn new() -> Self {
        Self
    }
}

impl Default for DetailedReport {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportEncoder for DetailedReport {
    const REPORT_ID: u8 = 0x04;
    const LEN: usize = 1 + MAX_POINTS * ENTRY_LEN + 3;
    const DESCRIPTOR: &'static [u8] = DETAILED_REPORT_DESCRIPTOR;

    fn encode(
        &mut self,
        points: &[ContactPoint],
        contact_count: u8,
        buf: &mut [u8],
    ) -> Result<usize, Error> {
        if points.len() != MAX_POINTS {
            return Err(Error::PointCount);
        }
        if buf.len() < Self::LEN {
            return Err(Error::BufferOverflow);
        }

        buf[0] = Self::REPORT_ID;
        for (slot, point) in points.iter().enumerate() {
            let base = 1 + slot * ENTRY_LEN;
            buf[base] = 0; // tip switch not derived from the chip
            buf[base + 1] = point.track_id;
            buf[base + 2..base + 6].copy_from_slice(&(point.x as u32).to_le_bytes());
            buf[base + 6..base + 10].copy_from_slice(&(point.y as u32).to_le_bytes());
            buf[base + 10..base + 12].copy_from_slice(&point.size.to_le_bytes());
            buf[base + 12..base + 14].copy_from_slice(&point.size.to_le_bytes());
            buf[base + 14..base + 16].copy_from_slice(&0u16.to_le_bytes()); // azimuth
        }
        buf[Self::LEN - 3..Self::LEN - 1].copy_from_slice(&0u16.to_le_bytes()); // scan time
        buf[Self::LEN - 1] = contact_count;

        Ok(Self::LEN)
    }
}

/// USB HID Report Descriptor for the detailed digitizer layout.
///
/// Each finger collection declares X/Y as 32-bit fields even though
/// only the low 16 bits are ever populated, matching the wire layout
/// above.
pub const DETAILED_REPORT_DESCRIPTOR: &[u8] = &[
    0x05, 0x0D, // Usage Page (Digitizer)
    0x09, 0x04, // Usage (Touch Screen)
    0xA1, 0x01, // Collection (Application)
    0x85, 0x04, //   Report ID (4)
    //
    //   - Finger 0 -
    0x09, 0x22, //   Usage (Finger)
    0xA1, 0x02, //   Collection (Logical)
    0x09, 0x42, //     Usage (Tip Switch)
    0x15, 0x00, //     Logical Minimum (0)
    0x25, 0x01, //     Logical Maximum (1)
    0x75, 0x01, //     Report Size (1)
    0x95, 0x01, //     Report Count (1)
    0x81, 0x02, //     Input (Data, Variable, Absolute)
    0x75, 0x07, //     Report Size (7)
    0x81, 0x03, //     Input (Constant) - padding
    0x09, 0x51, //     Usage (Contact Identifier)
    0x75, 0x08, //     Report Size (8)
    0x26, 0xFF, 0x00, // Logical Maximum (255)
    0x81, 0x02, //     Input (Data, Variable, Absolute)
    0x05, 0x01, //     Usage Page (Generic Desktop)
    0x09, 0x30, //     Usage (X)
    0x26, 0xFF, 0x0F, // Logical Maximum (4095)
    0x75, 0x20, //     Report Size (32)
    0x81, 0x02, //     Input (Data, Variable, Absolute)
    0x09, 0x31, //     Usage (Y)
    0x81, 0x02, //     Input (Data, Variable, Absolute)
    0x05, 0x0D, //     Usage Page (Digitizer)
    0x09, 0x48, //     Usage (Width)
    0x75, 0x10, //     Report Size (16)
    0x81, 0x02, //     Input (Data, Variable, Absolute)
    0x09, 0x49, //     Usage (Height)
    0x81, 0x02, //     Input (Data, Variable, Absolute)
    0x09, 0x3F, //     Usage (Azimuth)
    0x27, 0x6F, 0xF5, 0x00, 0x00, // Logical Maximum (62831)
    0x81, 0x02, //     Input (Data, Variable, Absolute)
    0xC0, //       End Collection
    //
    //   - Finger 1 -
    0x05, 0x0D, //   Usage Page (Digitizer)
    0x09, 0x22, //   Usage (Finger)
    0xA1, 0x02, //   Collection (Logical)
    0x09, 0x42, //     Usage (Tip Switch)
    0x15, 0x00, //     Logical Minimum (0)
    0x25, 0x01, //     Logical Maximum (1)
    0x75, 0x01, //     Report Size (1)
    0x95, 0x01, //     Report Count (1)
    0x81, 0x02, //     Input (Data, Variable, Absolute)
    0x75, 0x07, //     Report Size (7)
    0x81, 0x03, //     Input (Constant) - padding
    0x09, 0x51, //     Usage (Contact Identifier)
    0x75, 0x08, //     Report Size (8)
    0x26, 0xFF, 0x00, // Logical Maximum (255)
    0x81, 0x02, //     Input (Data, Variable, Absolute)
    0x05, 0x01, //     Usage Page (Generic Desktop)
    0x09, 0x30, //     Usage (X)
    0x26, 0xFF, 0x0F, // Logical Maximum (4095)
    0x75, 0x20, //     Report Size (32)
    0x81, 0x02, //     Input (Data, Variable, Absolute)
    0x09, 0x31, //     Usage (Y)
    0x81, 0x02, //     Input (Data, Variable, Absolute)
    0x05, 0x0D, //     Usage Page (Digitizer)
    0x09, 0x48, //     Usage (Width)
    0x75, 0x10, //     Report Size (16)
    0x81, 0x02, //     Input (Data, Variable, Absolute)
    0x09, 0x49, //     Usage (Height)
    0x81, 0x02, //     Input (Data, Variable, Absolute)
    0x09, 0x3F, //     Usage (Azimuth)
    0x27, 0x6F, 0xF5, 0x00, 0x00, // Logical Maximum (62831)
    0x81, 0x02, //     Input (Data, Variable, Absolute)
    0xC0, //       End Collection
    //
    //   - Finger 2 -
    0x05, 0x0D, //   Usage Page (Digitizer)
    0x09, 0x22, //   Usage (Finger)
    0xA1, 0x02, //   Collection (Logical)
    0x09, 0x42, //     Usage (Tip Switch)
    0x15, 0x00, //     Logical Minimum (0)
    0x25, 0x01, //     Logical Maximum (1)
    0x75, 0x01, //     Report Size (1)
    0x95, 0x01, //     Report Count (1)
    0x81, 0x02, //     Input (Data, Variable, Absolute)
    0x75, 0x07, //     Report Size (7)
    0x81, 0x03, //     Input (Constant) - padding
    0x09, 0x51, //     Usage (Contact Identifier)
    0x75, 0x08, //     Report Size (8)
    0x26, 0xFF, 0x00, // Logical Maximum (255)
    0x81, 0x02, //     Input (Data, Variable, Absolute)
    0x05, 0x01, //     Usage Page (Generic Desktop)
    0x09, 0x30, //     Usage (X)
    0x26, 0xFF, 0x0F, // Logical Maximum (4095)
    0x75, 0x20, //     Report Size (32)
    0x81, 0x02, //     Input (Data, Variable, Absolute)
    0x09, 0x31, //     Usage (Y)
    0x81, 0x02, //     Input (Data, Variable, Absolute)
    0x05, 0x0D, //     Usage Page (Digitizer)
    0x09, 0x48, //     Usage (Width)
    0x75, 0x10, //     Report Size (16)
    0x81, 0x02, //     Input (Data, Variable, Absolute)
    0x09, 0x49, //     Usage (Height)
    0x81, 0x02, //     Input (Data, Variable, Absolute)
    0x09, 0x3F, //     Usage (Azimuth)
    0x27, 0x6F, 0xF5, 0x00, 0x00, // Logical Maximum (62831)
    0x81, 0x02, //     Input (Data, Variable, Absolute)
    0xC0, //       End Collection
    //
    //   - Finger 3 -
    0x05, 0x0D, //   Usage Page (Digitizer)
    0x09, 0x22, //   Usage (Finger)
    0xA1, 0x02, //   Collection (Logical)
    0x09, 0x42, //     Usage (Tip Switch)
    0x15, 0x00, //     Logical Minimum (0)
    0x25, 0x01, //     Logical Maximum (1)
    0x75, 0x01, //     Report Size (1)
    0x95, 0x01, //     Report Count (1)
    0x81, 0x02, //     Input (Data, Variable, Absolute)
    0x75, 0x07, //     Report Size (7)
    0x81, 0x03, //     Input (Constant) - padding
    0x09, 0x51, //     Usage (Contact Identifier)
    0x75, 0x08, //     Report Size (8)
    0x26, 0xFF, 0x00, // Logical Maximum (255)
    0x81, 0x02, //     Input (Data, Variable, Absolute)
    0x05, 0x01, //     Usage Page (Generic Desktop)
    0x09, 0x30, //     Usage (X)
    0x26, 0xFF, 0x0F, // Logical Maximum (4095)
    0x75, 0x20, //     Report Size (32)
    0x81, 0x02, //     Input (Data, Variable, Absolute)
    0x09, 0x31, //     Usage (Y)
    0x81, 0x02, //     Input (Data, Variable, Absolute)
    0x05, 0x0D, //     Usage Page (Digitizer)
    0x09, 0x48, //     Usage (Width)
    0x75, 0x10, //     Report Size (16)
    0x81, 0x02, //     Input (Data, Variable, Absolute)
    0x09, 0x49, //     Usage (Height)
    0x81, 0x02, //     Input (Data, Variable, Absolute)
    0x09, 0x3F, //     Usage (Azimuth)
    0x27, 0x6F, 0xF5, 0x00, 0x00, // Logical Maximum (62831)
    0x81, 0x02, //     Input (Data, Variable, Absolute)
    0xC0, //       End Collection
    //
    //   - Finger 4 -
    0x05, 0x0D, //   Usage Page (Digitizer)
    0x09, 0x22, //   Usage (Finger)
    0xA1, 0x02, //   Collection (Logical)
    0x09, 0x42, //     Usage (Tip Switch)
    0x15, 0x00, //     Logical Minimum (0)
    0x25, 0x01, //     Logical Maximum (1)
    0x75, 0x01, //     Report Size (1)
    0x95, 0x01, //     Report Count (1)
    0x81, 0x02, //     Input (Data, Variable, Absolute)
    0x75, 0x07, //     Report Size (7)
    0x81, 0x03, //     Input (Constant) - padding
    0x09, 0x51, //     Usage (Contact Identifier)
    0x75, 0x08, //     Report Size (8)
    0x26, 0xFF, 0x00, // Logical Maximum (255)
    0x81, 0x02, //     Input (Data, Variable, Absolute)
    0x05, 0x01, //     Usage Page (Generic Desktop)
    0x09, 0x30, //     Usage (X)
    0x26, 0xFF, 0x0F, // Logical Maximum (4095)
    0x75, 0x20, //     Report Size (32)
    0x81, 0x02, //     Input (Data, Variable, Absolute)
    0x09, 0x31, //     Usage (Y)
    0x81, 0x02, //     Input (Data, Variable, Absolute)
    0x05, 0x0D, //     Usage Page (Digitizer)
    0x09, 0x48, //     Usage (Width)
    0x75, 0x10, //     Report Size (16)
    0x81, 0x02, //     Input (Data, Variable, Absolute)
    0x09, 0x49, //     Usage (Height)
    0x81, 0x02, //     Input (Data, Variable, Absolute)
    0x09, 0x3F, //     Usage (Azimuth)
    0x27, 0x6F, 0xF5, 0x00, 0x00, // Logical Maximum (62831)
    0x81, 0x02, //     Input (Data, Variable, Absolute)
    0xC0, //       End Collection
    //
    //   - Scan time and contact count -
    0x05, 0x0D, //   Usage Page (Digitizer)
    0x09, 0x56, //   Usage (Relative Scan Time)
    0x15, 0x00, //   Logical Minimum (0)
    0x27, 0xFF, 0xFF, 0x00, 0x00, // Logical Maximum (65535)
    0x75, 0x10, //   Report Size (16)
    0x95, 0x01, //   Report Count (1)
    0x81, 0x02, //   Input (Data, Variable, Absolute)
    0x09, 0x54, //   Usage (Contact Count)
    0x25, 0x7F, //   Logical Maximum (127)
    0x75, 0x08, //   Report Size (8)
    0x81, 0x02, //   Input (Data, Variable, Absolute)
    0x09, 0x55, //   Usage (Contact Count Maximum)
    0x25, 0x05, //   Logical Maximum (5)
    0xB1, 0x02, //   Feature (Data, Variable, Absolute)
    0xC0, // End Collection
];
