//! Compact 5-finger digitizer report (report ID 1).
//!
//! Layout (32 bytes):
//! ```text
//! Byte 0:     Report ID (0x01)
//! Bytes 1-6:  Finger 0: flags, contact id, x lo, x hi, y lo, y hi
//!             flags bit 0 = tip switch, bit 1 = in range
//! Bytes 7-30: Fingers 1-4, same 6-byte layout
//! Byte 31:    Contact count
//! ```
//!
//! Contact id is the physical slot index and in-range is always set.
//! The tip switch and coordinates are only written for slots below the
//! supplied contact count; an idle slot keeps the x/y bytes from the
//! last report it appeared in, with only its cleared tip bit marking
//! it invalid. The encoder is stateful to carry those bytes across
//! calls.

use crate::error::Error;
use crate::hid::ReportEncoder;
use crate::touch::{ContactPoint, MAX_POINTS};

/// Flags byte: tip switch - contact is touching the panel.
const TIP_SWITCH: u8 = 1 << 0;
/// Flags byte: in range - contact is tracked by the sensor.
const IN_RANGE: u8 = 1 << 1;

/// Bytes per finger entry.
const ENTRY_LEN: usize = 6;

/// Report ID byte + five finger entries + contact count.
const REPORT_LEN: usize = 1 + MAX_POINTS * ENTRY_LEN + 1;

/// Stateful encoder for the compact digitizer layout.
pub struct CompactReport {
    report: [u8; REPORT_LEN],
}

impl CompactReport {
    pub const fn new() -> Self {
        let mut report = [0u8; REPORT_LEN];
        report[0] = Self::REPORT_ID;
        Self { report }
    }
}

impl Default for CompactReport {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportEncoder for CompactReport {
    const REPORT_ID: u8 = 0x01;
    const LEN: usize = REPORT_LEN;
    const DESCRIPTOR: &'static [u8] = COMPACT_REPORT_DESCRIPTOR;

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

        for (slot, point) in points.iter().enumerate() {
            let base = 1 + slot * ENTRY_LEN;
            let touched = (slot as u8) < contact_count;

            self.report[base] = if touched { IN_RANGE | TIP_SWITCH } else { IN_RANGE };
            self.report[base + 1] = slot as u8;
            if touched {
                self.report[base + 2..base + 4].copy_from_slice(&point.x.to_le_bytes());
                self.report[base + 4..base + 6].copy_from_slice(&point.y.to_le_bytes());
            }
        }
        self.report[Self::LEN - 1] = contact_count;

        buf[..Self::LEN].copy_from_slice(&self.report);
        Ok(Self::LEN)
    }
}

/// USB HID Report Descriptor for the compact digitizer layout.
///
/// Five identical logical collections, one per point slot, followed by
/// the contact-count field and a Contact Count Maximum feature item.
pub const COMPACT_REPORT_DESCRIPTOR: &[u8] = &[
    0x05, 0x0D, // Usage Page (Digitizer)
    0x09, 0x04, // Usage (Touch Screen)
    0xA1, 0x01, // Collection (Application)
    0x85, 0x01, //   Report ID (1)
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
    0x09, 0x32, //     Usage (In Range)
    0x81, 0x02, //     Input (Data, Variable, Absolute)
    0x75, 0x06, //     Report Size (6)
    0x81, 0x03, //     Input (Constant) - padding
    0x09, 0x51, //     Usage (Contact Identifier)
    0x75, 0x08, //     Report Size (8)
    0x25, 0x7F, //     Logical Maximum (127)
    0x81, 0x02, //     Input (Data, Variable, Absolute)
    0x05, 0x01, //     Usage Page (Generic Desktop)
    0x09, 0x30, //     Usage (X)
    0x26, 0xFF, 0x0F, // Logical Maximum (4095)
    0x75, 0x10, //     Report Size (16)
    0x81, 0x02, //     Input (Data, Variable, Absolute)
    0x09, 0x31, //     Usage (Y)
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
    0x09, 0x32, //     Usage (In Range)
    0x81, 0x02, //     Input (Data, Variable, Absolute)
    0x75, 0x06, //     Report Size (6)
    0x81, 0x03, //     Input (Constant) - padding
    0x09, 0x51, //     Usage (Contact Identifier)
    0x75, 0x08, //     Report Size (8)
    0x25, 0x7F, //     Logical Maximum (127)
    0x81, 0x02, //     Input (Data, Variable, Absolute)
    0x05, 0x01, //     Usage Page (Generic Desktop)
    0x09, 0x30, //     Usage (X)
    0x26, 0xFF, 0x0F, // Logical Maximum (4095)
    0x75, 0x10, //     Report Size (16)
    0x81, 0x02, //     Input (Data, Variable, Absolute)
    0x09, 0x31, //     Usage (Y)
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
    0x09, 0x32, //     Usage (In Range)
    0x81, 0x02, //     Input (Data, Variable, Absolute)
    0x75, 0x06, //     Report Size (6)
    0x81, 0x03, //     Input (Constant) - padding
    0x09, 0x51, //     Usage (Contact Identifier)
    0x75, 0x08, //     Report Size (8)
    0x25, 0x7F, //     Logical Maximum (127)
    0x81, 0x02, //     Input (Data, Variable, Absolute)
    0x05, 0x01, //     Usage Page (Generic Desktop)
    0x09, 0x30, //     Usage (X)
    0x26, 0xFF, 0x0F, // Logical Maximum (4095)
    0x75, 0x10, //     Report Size (16)
    0x81, 0x02, //     Input (Data, Variable, Absolute)
    0x09, 0x31, //     Usage (Y)
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
    0x09, 0x32, //     Usage (In Range)
    0x81, 0x02, //     Input (Data, Variable, Absolute)
    0x75, 0x06, //     Report Size (6)
    0x81, 0x03, //     Input (Constant) - padding
    0x09, 0x51, //     Usage (Contact Identifier)
    0x75, 0x08, //     Report Size (8)
    0x25, 0x7F, //     Logical Maximum (127)
    0x81, 0x02, //     Input (Data, Variable, Absolute)
    0x05, 0x01, //     Usage Page (Generic Desktop)
    0x09, 0x30, //     Usage (X)
    0x26, 0xFF, 0x0F, // Logical Maximum (4095)
    0x75, 0x10, //     Report Size (16)
    0x81, 0x02, //     Input (Data, Variable, Absolute)
    0x09, 0x31, //     Usage (Y)
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
    0x09, 0x32, //     Usage (In Range)
    0x81, 0x02, //     Input (Data, Variable, Absolute)
    0x75, 0x06, //     Report Size (6)
    0x81, 0x03, //     Input (Constant) - padding
    0x09, 0x51, //     Usage (Contact Identifier)
    0x75, 0x08, //     Report Size (8)
    0x25, 0x7F, //     Logical Maximum (127)
    0x81, 0x02, //     Input (Data, Variable, Absolute)
    0x05, 0x01, //     Usage Page (Generic Desktop)
    0x09, 0x30, //     Usage (X)
    0x26, 0xFF, 0x0F, // Logical Maximum (4095)
    0x75, 0x10, //     Report Size (16)
    0x81, 0x02, //     Input (Data, Variable, Absolute)
    0x09, 0x31, //     Usage (Y)
    0x81, 0x02, //     Input (Data, Variable, Absolute)
    0xC0, //       End Collection
    //
    //   - Contact count -
    0x05, 0x0D, //   Usage Page (Digitizer)
    0x09, 0x54, //   Usage (Contact Count)
    0x15, 0x00, //   Logical Minimum (0)
    0x25, 0x05, //   Logical Maximum (5)
    0x75, 0x08, //   Report Size (8)
    0x95, 0x01, //   Report Count (1)
    0x81, 0x02, //   Input (Data, Variable, Absolute)
    0x09, 0x55, //   Usage (Contact Count Maximum)
    0xB1, 0x02, //   Feature (Data, Variable, Absolute)
    0xC0, // End Collection
];
