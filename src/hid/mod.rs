//! HID digitizer report encoders - point table to USB wire format.
//!
//! Two mutually exclusive report layouts exist behind one trait:
//!
//! - [`compact::CompactReport`] (report ID 1): bit-packed 5-finger
//!   digitizer report, 32 bytes. The default.
//! - [`detailed::DetailedReport`] (report ID 4): per-finger record with
//!   explicit width/height/azimuth fields and a scan-time trailer,
//!   84 bytes. Selected with the `detailed-report` crate feature.
//!
//! Exactly one layout is active per build, and the report descriptor
//! advertised during USB enumeration comes from the same selection -
//! the two must never diverge. Each `encode` call produces exactly one
//! fixed-size report; the detailed layout is longer than a full-speed
//! interrupt packet and is fragmented by the USB class layer, not here.

pub mod compact;
pub mod detailed;

#[cfg(test)]
mod tests;

use crate::error::Error;
use crate::touch::ContactPoint;

/// A wire-format encoder for one HID input report layout.
pub trait ReportEncoder {
    /// Report ID; also the first byte of every encoded report.
    const REPORT_ID: u8;

    /// Encoded report length in bytes, including the report ID.
    const LEN: usize;

    /// Report descriptor advertised during USB enumeration. Must
    /// describe exactly the bytes [`encode`] produces.
    ///
    /// [`encode`]: ReportEncoder::encode
    const DESCRIPTOR: &'static [u8];

    /// Encode the point table into `buf` and return the report length.
    ///
    /// `points` must hold exactly [`MAX_POINTS`] slots - anything else
    /// is a caller contract violation, rejected with
    /// [`Error::PointCount`] before any state or output is touched.
    /// `contact_count` is the caller's (already classified) number of
    /// valid leading slots.
    ///
    /// [`MAX_POINTS`]: crate::touch::MAX_POINTS
    fn encode(
        &mut self,
        points: &[ContactPoint],
        contact_count: u8,
        buf: &mut [u8],
    ) -> Result<usize, Error>;
}

/// The report layout compiled into this build.
#[cfg(not(feature = "detailed-report"))]
pub type ActiveReport = compact::CompactReport;
#[cfg(feature = "detailed-report")]
pub type ActiveReport = detailed::DetailedReport;

/// Length of the active layout's encoded report.
pub const ACTIVE_REPORT_LEN: usize = <ActiveReport as ReportEncoder>::LEN;
