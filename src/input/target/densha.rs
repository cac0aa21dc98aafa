//! Emulates a Taito Densha de GO! USB controller as a target input device.
use std::{fmt::Debug, time::Duration};

use tokio::{
    sync::mpsc::{Receiver, Sender},
    time::MissedTickBehavior,
};

use crate::{
    config::DeviceProfile,
    drivers::densha::{
        binding::{self, BindingInfo},
        driver::{ControllerCodec, ModelVariant, INTERRUPT_ENDPOINT, POLL_INTERVAL_MS, VID},
        report_descriptor::CONFIG_DESCRIPTOR,
    },
    input::usb::{PacketId, UsbPacket, UsbStatus},
};

use super::{
    command::TargetCommand, DeviceError, InputError, OutputError, TargetInputDevice,
    TargetOutputDevice,
};

/// wMaxPacketSize of the interrupt IN endpoint
pub const MAX_PACKET_SIZE: usize = 8;

/// The [DenshaControllerDevice] is a target device implementation that
/// emulates a Densha controller plugged into an emulated USB port.
pub struct DenshaControllerDevice {
    port: u32,
    codec: ControllerCodec,
    poll_interval: Duration,
    last_report: Option<Vec<u8>>,
}

impl DenshaControllerDevice {
    /// Create a new controller of the given model attached to the given port.
    /// Fails for models that cannot be emulated.
    pub fn new(model: ModelVariant, port: u32) -> Result<Self, DeviceError> {
        if !model.is_supported() {
            return Err(DeviceError::UnsupportedModel(model));
        }
        validate_descriptors(model)?;
        log::debug!("Creating {model} controller on port {port}");

        let mut device = Self {
            port,
            codec: ControllerCodec::new(model),
            poll_interval: Duration::from_millis(POLL_INTERVAL_MS),
            last_report: None,
        };
        device.handle_reset();

        Ok(device)
    }

    /// Create a new controller from the given device profile
    pub fn from_profile(profile: &DeviceProfile) -> Result<Self, DeviceError> {
        let mut device = Self::new(profile.model, profile.port)?;
        device.poll_interval = profile.poll_interval();
        Ok(device)
    }

    pub fn model(&self) -> ModelVariant {
        self.codec.model()
    }

    pub fn port(&self) -> u32 {
        self.port
    }

    pub fn codec(&self) -> &ControllerCodec {
        &self.codec
    }

    pub fn poll_interval(&self) -> Duration {
        self.poll_interval
    }

    /// Product string reported by the device
    pub fn product(&self) -> &'static str {
        self.model().strings()[2]
    }

    /// Run the device, processing commands and servicing the interrupt IN
    /// endpoint every poll interval. Reports are sent to the given channel
    /// whenever they change. Returns when a [TargetCommand::Stop] is received
    /// or when either channel is closed.
    ///
    /// All access to the controller state happens on this task, so commands
    /// and reports are always applied in order.
    pub async fn run(
        mut self,
        mut rx: Receiver<TargetCommand>,
        reports: Sender<Vec<u8>>,
    ) -> Result<(), OutputError> {
        log::debug!("Starting {} device on port {}", self.product(), self.port);
        let mut interval = tokio::time::interval(self.poll_interval);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                cmd = rx.recv() => {
                    let Some(cmd) = cmd else {
                        log::debug!("Command channel closed");
                        break;
                    };
                    if !self.handle_command(cmd) {
                        break;
                    }
                },
                _ = interval.tick() => {
                    let Some(report) = self.poll_changed() else {
                        continue;
                    };
                    if reports.send(report).await.is_err() {
                        log::debug!("Report channel closed");
                        return Err(OutputError::ChannelClosed);
                    }
                },
            }
        }

        log::debug!("Stopped {} device on port {}", self.product(), self.port);
        Ok(())
    }

    /// Handle the given command. Returns false if the device should stop.
    fn handle_command(&mut self, cmd: TargetCommand) -> bool {
        log::trace!("Received command: {cmd:?}");
        match cmd {
            TargetCommand::SetValue(index, value) => self.set_binding_value(index, value),
            TargetCommand::GetValue(index, tx) => {
                let value = self.get_binding_value(index);
                if let Err(e) = tx.try_send(value) {
                    log::error!("Failed to send binding value: {e:?}");
                }
            }
            TargetCommand::Reset => self.handle_reset(),
            TargetCommand::Freeze(tx) => {
                let mut buf = Vec::new();
                self.freeze(&mut buf);
                if let Err(e) = tx.try_send(buf) {
                    log::error!("Failed to send save state: {e:?}");
                }
            }
            TargetCommand::Thaw(data, tx) => {
                let result = self.thaw(&data).map_err(|e| e.to_string());
                if let Err(e) = tx.try_send(result) {
                    log::error!("Failed to send save state result: {e:?}");
                }
            }
            TargetCommand::Poll(tx) => {
                let mut packet = UsbPacket::new_in(INTERRUPT_ENDPOINT, MAX_PACKET_SIZE);
                self.handle_data(&mut packet);
                if let Err(e) = tx.try_send(packet) {
                    log::error!("Failed to send polled packet: {e:?}");
                }
            }
            TargetCommand::Stop => return false,
        }
        true
    }

    /// Service the interrupt IN endpoint and return the report if it changed
    /// since the last poll.
    fn poll_changed(&mut self) -> Option<Vec<u8>> {
        let mut packet = UsbPacket::new_in(INTERRUPT_ENDPOINT, MAX_PACKET_SIZE);
        self.handle_data(&mut packet);
        if packet.status != UsbStatus::Success {
            log::warn!("Interrupt IN transfer failed: {:?}", packet.status);
            return None;
        }

        let report = packet.data().to_vec();
        if self.last_report.as_ref() == Some(&report) {
            return None;
        }
        self.last_report = Some(report.clone());
        Some(report)
    }
}

impl TargetInputDevice for DenshaControllerDevice {
    fn set_binding_value(&mut self, bind_index: u32, value: f32) {
        self.codec.set_value(bind_index, value);
    }

    fn get_binding_value(&self, bind_index: u32) -> f32 {
        self.codec.get_value(bind_index)
    }

    fn get_bindings(&self) -> &'static [BindingInfo] {
        binding::bindings(self.model())
    }

    fn freeze(&self, buf: &mut Vec<u8>) {
        self.codec.freeze(buf);
    }

    fn thaw(&mut self, data: &[u8]) -> Result<usize, InputError> {
        let len = self.codec.thaw(data)?;
        Ok(len)
    }
}

impl TargetOutputDevice for DenshaControllerDevice {
    fn handle_reset(&mut self) {
        log::debug!("Resetting {} on port {}", self.product(), self.port);
        self.codec.reset();
    }

    fn handle_data(&mut self, packet: &mut UsbPacket) {
        if packet.pid != PacketId::In || packet.endpoint != INTERRUPT_ENDPOINT {
            log::trace!(
                "Stalling {:?} packet on endpoint {}",
                packet.pid,
                packet.endpoint
            );
            packet.status = UsbStatus::Stall;
            return;
        }

        // Packets too short for a whole report fail instead of being truncated
        let start = packet.actual_length.min(packet.buffer.len());
        let Some(buf) = packet.buffer.get_mut(start..) else {
            packet.status = UsbStatus::Stall;
            return;
        };
        match self.codec.produce_report(buf) {
            Ok(len) => packet.actual_length += len,
            Err(e) => {
                log::debug!("Failed to produce input report: {e}");
                packet.status = UsbStatus::IoError;
            }
        }
    }
}

impl Debug for DenshaControllerDevice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DenshaControllerDevice")
            .field("port", &self.port)
            .field("codec", &self.codec)
            .field("poll_interval", &self.poll_interval)
            .finish()
    }
}

/// Sanity check the static descriptors of the given model
fn validate_descriptors(model: ModelVariant) -> Result<(), DeviceError> {
    let invalid = |name| DeviceError::InvalidDescriptor { model, name };

    let device = model.device_descriptor();
    let [length, kind, ..] = device else {
        return Err(invalid("device"));
    };
    if *length as usize != device.len() || *kind != 0x01 {
        return Err(invalid("device"));
    }
    let vid = device.get(8..10).map(|b| u16::from_le_bytes([b[0], b[1]]));
    let pid = device.get(10..12).map(|b| u16::from_le_bytes([b[0], b[1]]));
    if vid != Some(VID) || pid != Some(model.product_id()) {
        return Err(invalid("device"));
    }

    let total_length = CONFIG_DESCRIPTOR
        .get(2..4)
        .map(|b| u16::from_le_bytes([b[0], b[1]]) as usize);
    if total_length != Some(CONFIG_DESCRIPTOR.len()) {
        return Err(invalid("configuration"));
    }

    if model.report_descriptor().last() != Some(&0xC0) {
        return Err(invalid("report"));
    }

    Ok(())
}
