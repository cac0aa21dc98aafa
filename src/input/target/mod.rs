pub mod client;
pub mod command;
pub mod densha;
#[cfg(test)]
pub mod densha_test;

use thiserror::Error;

use crate::drivers::densha::{binding::BindingInfo, driver::ModelVariant, snapshot::FreezeError};

use super::usb::{ControlRequest, UsbPacket, UsbStatus};

/// Possible errors constructing a target device
#[derive(Error, Debug)]
pub enum DeviceError {
    #[error("controller model `{0}` cannot be emulated")]
    UnsupportedModel(ModelVariant),
    #[error("malformed {name} descriptor for `{model}`")]
    InvalidDescriptor {
        model: ModelVariant,
        name: &'static str,
    },
}

/// Possible errors handling host input for a target device
#[derive(Error, Debug)]
pub enum InputError {
    #[error("failed to restore save state: {0}")]
    FreezeError(#[from] FreezeError),
}

/// Possible errors emitting output from a target device
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("report consumer no longer exists")]
    ChannelClosed,
}

/// A [TargetInputDevice] receives control values from the host input
/// binding layer.
pub trait TargetInputDevice {
    /// Set the normalized (0.0 - 1.0) value of the given bind index
    fn set_binding_value(&mut self, bind_index: u32, value: f32);

    /// Returns the normalized (0.0 - 1.0) value of the given bind index
    fn get_binding_value(&self, bind_index: u32) -> f32;

    /// Returns the bindings this device exposes to the host
    fn get_bindings(&self) -> &'static [BindingInfo];

    /// Append the device save state section to the given buffer
    fn freeze(&self, buf: &mut Vec<u8>);

    /// Restore the device state from the start of the given save state data,
    /// returning the number of bytes consumed.
    fn thaw(&mut self, data: &[u8]) -> Result<usize, InputError>;
}

/// A [TargetOutputDevice] is driven by the USB host transport.
pub trait TargetOutputDevice {
    /// Handle a bus reset
    fn handle_reset(&mut self);

    /// Handle a data packet on a non-control endpoint
    fn handle_data(&mut self, packet: &mut UsbPacket);

    /// Handle a request on the control endpoint. Devices that do not service
    /// class or vendor requests stall them.
    fn handle_control(&mut self, packet: &mut UsbPacket, request: ControlRequest) {
        log::debug!("Unhandled control request: {request:?}");
        packet.status = UsbStatus::Stall;
    }
}
