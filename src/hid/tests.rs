//! Unit tests for HID digitizer report encoding.
//!
//! These tests run on the host (not embedded) and verify the pure
//! logic of report encoding: bit packing, contact-count gating, the
//! stale-slot passthrough of the compact layout, and agreement between
//! each encoder and its advertised report descriptor.

use super::compact::CompactReport;
use super::detailed::DetailedReport;
use super::ReportEncoder;
use crate::error::Error;
use crate::touch::ContactPoint;

fn point(track_id: u8, x: u16, y: u16, size: u16) -> ContactPoint {
    ContactPoint {
        track_id,
        x,
        y,
        size,
    }
}

fn five_points() -> [ContactPoint; 5] {
    [
        point(7, 0x0102, 0x0304, 10),
        point(3, 0x0506, 0x0708, 20),
        point(1, 0x090A, 0x0B0C, 30),
        point(0, 0x0D0E, 0x0F10, 40),
        point(9, 0x1112, 0x1314, 50),
    ]
}

/// Walk a report descriptor and sum the Input item bits, to check that
/// the advertised layout matches the encoder's wire size.
fn input_report_bytes(descriptor: &[u8]) -> usize {
    let mut report_size = 0usize;
    let mut report_count = 0usize;
    let mut bits = 0usize;

    let mut i = 0;
    while i < descriptor.len() {
        let prefix = descriptor[i];
        let tag = (prefix >> 4) & 0x0F;
        let item_type = (prefix >> 2) & 0x03;
        let size = match prefix & 0x03 {
            3 => 4,
            n => n as usize,
        };
        assert!(i + 1 + size <= descriptor.len(), "truncated item at {i}");

        let mut value = 0u32;
        for (n, &b) in descriptor[i + 1..i + 1 + size].iter().enumerate() {
            value |= (b as u32) << (8 * n);
        }

        match (item_type, tag) {
            // Main: Input
            (0, 0x08) => bits += report_size * report_count,
            // Global: Report Size / Report Count
            (1, 0x07) => report_size = value as usize,
            (1, 0x09) => report_count = value as usize,
            _ => {}
        }

        i += 1 + size;
    }

    assert_eq!(bits % 8, 0, "input report is not byte-aligned");
    bits / 8
}

// ═══════════════════════════════════════════════════════════════════════════
// Compact Report (ID 1)
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn compact_two_contacts() {
    let mut encoder = CompactReport::new();
    let mut buf = [0u8; CompactReport::LEN];
    let n = encoder.encode(&five_points(), 2, &mut buf).unwrap();

    assert_eq!(n, 32);
    assert_eq!(buf[0], 0x01); // report ID

    // Slot 0: tip + in-range, contact id 0, live coordinates.
    assert_eq!(buf[1], 0b11);
    assert_eq!(buf[2], 0);
    assert_eq!(&buf[3..7], &[0x02, 0x01, 0x04, 0x03]);

    // Slot 1: tip + in-range, contact id 1.
    assert_eq!(buf[7], 0b11);
    assert_eq!(buf[8], 1);
    assert_eq!(&buf[9..13], &[0x06, 0x05, 0x08, 0x07]);

    // Slots 2-4: in-range only, ids still the slot index.
    for slot in 2..5 {
        let base = 1 + slot * 6;
        assert_eq!(buf[base], 0b10, "slot {slot} flags");
        assert_eq!(buf[base + 1], slot as u8);
    }

    assert_eq!(buf[31], 2); // contact count
}

#[test]
fn compact_stale_slot_passthrough() {
    let mut encoder = CompactReport::new();
    let mut buf = [0u8; CompactReport::LEN];

    // First frame: all five slots touching, nonzero coordinates.
    encoder.encode(&five_points(), 5, &mut buf).unwrap();

    // Second frame: chip table fully refreshed, but only two contacts.
    let mut next = five_points();
    for p in next.iter_mut() {
        p.x ^= 0xFFFF;
        p.y ^= 0xFFFF;
    }
    encoder.encode(&next, 2, &mut buf).unwrap();

    // Slots 0-1 carry the new coordinates.
    assert_eq!(&buf[3..7], &[!0x02, !0x01, !0x04, !0x03]);

    // Slots 2-4 keep the bytes from the previous report, tip cleared.
    let old = five_points();
    for slot in 2..5 {
        let base = 1 + slot * 6;
        assert_eq!(buf[base], 0b10, "slot {slot} tip must be clear");
        assert_eq!(
            &buf[base + 2..base + 4],
            &old[slot].x.to_le_bytes(),
            "slot {slot} x must be stale"
        );
        assert_eq!(
            &buf[base + 4..base + 6],
            &old[slot].y.to_le_bytes(),
            "slot {slot} y must be stale"
        );
    }
    assert_eq!(buf[31], 2);
}

#[test]
fn compact_zero_contacts_keeps_ids_and_range() {
    let mut encoder = CompactReport::new();
    let mut buf = [0u8; CompactReport::LEN];
    encoder.encode(&five_points(), 0, &mut buf).unwrap();

    for slot in 0..5 {
        let base = 1 + slot * 6;
        assert_eq!(buf[base], 0b10);
        assert_eq!(buf[base + 1], slot as u8);
    }
    assert_eq!(buf[31], 0);
}

#[test]
fn compact_rejects_wrong_slot_count() {
    let mut encoder = CompactReport::new();
    let mut buf = [0xAA; CompactReport::LEN];

    let points = five_points();
    assert_eq!(
        encoder.encode(&points[..4], 2, &mut buf),
        Err(Error::PointCount)
    );

    let mut six = [ContactPoint::default(); 6];
    six[..5].copy_from_slice(&five_points());
    assert_eq!(encoder.encode(&six, 2, &mut buf), Err(Error::PointCount));

    // Output buffer untouched by the rejected calls.
    assert_eq!(buf, [0xAA; CompactReport::LEN]);
}

#[test]
fn compact_rejected_call_leaves_state_untouched() {
    let mut encoder = CompactReport::new();
    let mut buf = [0u8; CompactReport::LEN];
    encoder.encode(&five_points(), 5, &mut buf).unwrap();
    let before = buf;

    let points = five_points();
    let mut scratch = [0u8; CompactReport::LEN];
    assert!(encoder.encode(&points[..4], 1, &mut scratch).is_err());

    // Re-encoding the same frame reproduces the same bytes.
    encoder.encode(&five_points(), 5, &mut buf).unwrap();
    assert_eq!(buf, before);
}

#[test]
fn compact_buffer_too_small() {
    let mut encoder = CompactReport::new();
    let mut small = [0xAA; 16];
    assert_eq!(
        encoder.encode(&five_points(), 2, &mut small),
        Err(Error::BufferOverflow)
    );
    assert_eq!(small, [0xAA; 16]);
}

#[test]
fn compact_descriptor_matches_wire_size() {
    // LEN includes the report ID byte; the descriptor describes the rest.
    assert_eq!(
        input_report_bytes(CompactReport::DESCRIPTOR),
        CompactReport::LEN - 1
    );
}

// ═══════════════════════════════════════════════════════════════════════════
// Detailed Report (ID 4)
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn detailed_layout() {
    let mut encoder = DetailedReport::new();
    let mut buf = [0u8; DetailedReport::LEN];
    let n = encoder.encode(&five_points(), 3, &mut buf).unwrap();

    assert_eq!(n, 84);
    assert_eq!(buf[0], 0x04); // report ID

    for (slot, p) in five_points().iter().enumerate() {
        let base = 1 + slot * 16;
        assert_eq!(buf[base], 0, "slot {slot} tip/pad byte");
        assert_eq!(buf[base + 1], p.track_id, "slot {slot} contact id");
        // X as 32-bit little-endian with the high word forced to 0.
        assert_eq!(&buf[base + 2..base + 6], &(p.x as u32).to_le_bytes());
        assert_eq!(&buf[base + 6..base + 10], &(p.y as u32).to_le_bytes());
        // Contact size feeds both width and height.
        assert_eq!(&buf[base + 10..base + 12], &p.size.to_le_bytes());
        assert_eq!(&buf[base + 12..base + 14], &p.size.to_le_bytes());
        // Azimuth is never derived.
        assert_eq!(&buf[base + 14..base + 16], &[0, 0]);
    }

    assert_eq!(&buf[81..83], &[0, 0]); // scan time
    assert_eq!(buf[83], 3); // contact count
}

#[test]
fn detailed_writes_all_slots_regardless_of_count() {
    let mut encoder = DetailedReport::new();
    let mut buf = [0u8; DetailedReport::LEN];
    encoder.encode(&five_points(), 0, &mut buf).unwrap();

    // Even with zero contacts every slot's fields are at the latest
    // table values - this layout has no count gating.
    for (slot, p) in five_points().iter().enumerate() {
        let base = 1 + slot * 16;
        assert_eq!(&buf[base + 2..base + 4], &p.x.to_le_bytes());
    }
    assert_eq!(buf[83], 0);
}

#[test]
fn detailed_rejects_wrong_slot_count() {
    let mut encoder = DetailedReport::new();
    let mut buf = [0xAA; DetailedReport::LEN];

    assert_eq!(
        encoder.encode(&five_points()[..4], 2, &mut buf),
        Err(Error::PointCount)
    );
    let mut six = [ContactPoint::default(); 6];
    six[..5].copy_from_slice(&five_points());
    assert_eq!(encoder.encode(&six, 2, &mut buf), Err(Error::PointCount));

    assert_eq!(buf, [0xAA; DetailedReport::LEN]);
}

#[test]
fn detailed_buffer_too_small() {
    let mut encoder = DetailedReport::new();
    let mut small = [0xAA; 64];
    assert_eq!(
        encoder.encode(&five_points(), 2, &mut small),
        Err(Error::BufferOverflow)
    );
    assert_eq!(small, [0xAA; 64]);
}

#[test]
fn detailed_descriptor_matches_wire_size() {
    assert_eq!(
        input_report_bytes(DetailedReport::DESCRIPTOR),
        DetailedReport::LEN - 1
    );
}
