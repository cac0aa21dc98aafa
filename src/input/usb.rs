//! Minimal model of the USB packets exchanged between a host controller and
//! an emulated device.

/// Packet identifier of a USB token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PacketId {
    Setup,
    In,
    Out,
}

/// Completion status of a USB packet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UsbStatus {
    #[default]
    Success,
    Stall,
    IoError,
}

impl UsbStatus {
    /// Returns the status as the signed code used by USB host emulation
    /// (0 on success, negative on failure).
    pub fn code(&self) -> i32 {
        match self {
            UsbStatus::Success => 0,
            UsbStatus::Stall => -3,
            UsbStatus::IoError => -5,
        }
    }
}

/// A single USB transfer to or from an endpoint
#[derive(Debug, Clone)]
pub struct UsbPacket {
    pub pid: PacketId,
    /// Endpoint number, without the direction bit
    pub endpoint: u8,
    pub buffer: Vec<u8>,
    /// Number of bytes of `buffer` filled in by the device
    pub actual_length: usize,
    pub status: UsbStatus,
}

impl UsbPacket {
    /// Create a new IN packet for the given endpoint with room for `size` bytes
    pub fn new_in(endpoint: u8, size: usize) -> Self {
        Self {
            pid: PacketId::In,
            endpoint,
            buffer: vec![0; size],
            actual_length: 0,
            status: UsbStatus::Success,
        }
    }

    /// Returns the bytes the device wrote into the packet
    pub fn data(&self) -> &[u8] {
        let len = self.actual_length.min(self.buffer.len());
        &self.buffer[..len]
    }
}

/// A standard control request received on the default endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlRequest {
    pub request_type: u8,
    pub request: u8,
    pub value: u16,
    pub index: u16,
    pub length: u16,
}
