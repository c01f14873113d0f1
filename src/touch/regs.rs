//! Touch controller register map.
//!
//! Fixed addresses in the chip's 16-bit register space, plus the byte
//! offsets of the fields inside a per-point record. Values match the
//! vendor datasheet; nothing here is runtime-configurable.

/// Maximum-touch-count configuration register (1 byte).
pub const REG_TOUCH_NUM: u16 = 0x804C;

/// Product ID (4 bytes, ASCII).
pub const REG_PRODUCT_ID: u16 = 0x8140;

/// Firmware version (2 bytes, little-endian).
pub const REG_FIRMWARE_ID: u16 = 0x8144;

/// X resolution (2 bytes, little-endian).
pub const REG_X_RES: u16 = 0x8146;

/// Y resolution (2 bytes, little-endian).
pub const REG_Y_RES: u16 = 0x8148;

/// Vendor ID (1 byte).
pub const REG_VENDOR_ID: u16 = 0x814A;

/// Status register: flag bits in the high nibble, active-touch count
/// in the low nibble. Written back as 0 after every read to re-arm
/// the interrupt line.
pub const REG_STATUS: u16 = 0x814E;

/// Base address of each point slot's record, in slot order.
pub const REG_POINTS: [u16; 5] = [0x814F, 0x8157, 0x815F, 0x8167, 0x816F];

/// Length of one per-point record in bytes.
pub const POINT_RECORD_LEN: usize = 7;

/// Byte offsets of the fields inside a per-point record.
pub struct PointOffsets {
    pub track_id: usize,
    pub xl: usize,
    pub xh: usize,
    pub yl: usize,
    pub yh: usize,
    pub size_l: usize,
    pub size_h: usize,
}

/// Field offsets for the current chip revision.
pub const POINT_OFFSETS: PointOffsets = PointOffsets {
    track_id: 0,
    xl: 1,
    xh: 2,
    yl: 3,
    yh: 4,
    size_l: 5,
    size_h: 6,
};
