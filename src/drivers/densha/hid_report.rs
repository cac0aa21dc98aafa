//! Reference: https://marcriera.github.io/ddgo-controller-docs/controllers/usb/
use packed_struct::prelude::*;

use super::driver::{HORN_RESERVED, TYPE2_REPORT_ID};

/// Size in bytes of every Densha controller input report
pub const REPORT_SIZE: usize = 6;

/// D-Pad hat switch direction. Values 0-7 are compass directions starting
/// at "up" and going clockwise, 8 is centered.
#[derive(PrimitiveEnum_u8, Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Direction {
    Up = 0,
    UpRight = 1,
    Right = 2,
    DownRight = 3,
    Down = 4,
    DownLeft = 5,
    Left = 6,
    UpLeft = 7,
    #[default]
    None = 8,
}

impl Direction {
    /// Resolve the four d-pad flags into a single hat direction.
    ///
    /// Diagonals are checked first, then single directions in clockwise
    /// order. The single direction checks ignore the other flags, so opposing
    /// directions resolve to whichever comes first (up+down is "up",
    /// left+right is "right").
    pub fn from_dpad(up: bool, down: bool, left: bool, right: bool) -> Self {
        if up && right {
            Self::UpRight
        } else if right && down {
            Self::DownRight
        } else if down && left {
            Self::DownLeft
        } else if left && up {
            Self::UpLeft
        } else if up {
            Self::Up
        } else if right {
            Self::Right
        } else if down {
            Self::Down
        } else if left {
            Self::Left
        } else {
            Self::None
        }
    }
}

/// Input report for the two handle "Type 2" controller (TCPP20009)
#[derive(PackedStruct, Debug, Copy, Clone, PartialEq)]
#[packed_struct(bit_numbering = "msb0", size_bytes = "6")]
pub struct PackedType2InputReport {
    // byte 0
    #[packed_field(bytes = "0")]
    pub report_id: u8, // Always 0x01

    // byte 1-3
    #[packed_field(bytes = "1")]
    pub brake: u8,
    #[packed_field(bytes = "2")]
    pub power: u8,
    #[packed_field(bytes = "3")]
    pub horn: u8, // Button C doubles as the horn, always 0xFF

    // byte 4
    #[packed_field(bits = "36..=39", ty = "enum")]
    pub dpad: Direction,

    // byte 5
    #[packed_field(bytes = "5")]
    pub buttons: u8,
}

impl Default for PackedType2InputReport {
    fn default() -> Self {
        Self {
            report_id: TYPE2_REPORT_ID,
            brake: 0,
            power: 0,
            horn: HORN_RESERVED,
            dpad: Direction::None,
            buttons: 0,
        }
    }
}

/// Input report for the Shinkansen controller (TCPP20011)
#[derive(PackedStruct, Debug, Copy, Clone, PartialEq)]
#[packed_struct(bit_numbering = "msb0", size_bytes = "6")]
pub struct PackedShinkansenInputReport {
    // byte 0-2
    #[packed_field(bytes = "0")]
    pub brake: u8,
    #[packed_field(bytes = "1")]
    pub power: u8,
    #[packed_field(bytes = "2")]
    pub horn: u8, // Pedal, always 0xFF

    // byte 3
    #[packed_field(bits = "28..=31", ty = "enum")]
    pub dpad: Direction,

    // byte 4
    #[packed_field(bytes = "4")]
    pub buttons: u8,

    // byte 5
    #[packed_field(bytes = "5")]
    pub padding: u8,
}

impl Default for PackedShinkansenInputReport {
    fn default() -> Self {
        Self {
            brake: 0,
            power: 0,
            horn: HORN_RESERVED,
            dpad: Direction::None,
            buttons: 0,
            padding: 0,
        }
    }
}
