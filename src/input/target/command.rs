use tokio::sync::mpsc::Sender;

use crate::input::usb::UsbPacket;

/// A [TargetCommand] is a message that can be sent to a target device over
/// a channel.
#[derive(Debug, Clone)]
pub enum TargetCommand {
    SetValue(u32, f32),
    GetValue(u32, Sender<f32>),
    Reset,
    Freeze(Sender<Vec<u8>>),
    Thaw(Vec<u8>, Sender<Result<usize, String>>),
    Poll(Sender<UsbPacket>),
    Stop,
}
