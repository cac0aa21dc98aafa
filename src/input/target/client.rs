use thiserror::Error;
use tokio::sync::mpsc::{
    channel,
    error::{SendError, TrySendError},
    Sender,
};

use crate::input::usb::UsbPacket;

use super::command::TargetCommand;

/// Possible errors for a target device client
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("failed to send command to device")]
    SendError(SendError<TargetCommand>),
    #[error("failed to try to send command to device")]
    TrySendError(TrySendError<TargetCommand>),
    #[error("device no longer exists")]
    ChannelClosed,
    #[error("device failed to process command: {0}")]
    DeviceError(String),
}

impl From<SendError<TargetCommand>> for ClientError {
    fn from(err: SendError<TargetCommand>) -> Self {
        Self::SendError(err)
    }
}

impl From<TrySendError<TargetCommand>> for ClientError {
    fn from(err: TrySendError<TargetCommand>) -> Self {
        Self::TrySendError(err)
    }
}

/// A client for communicating with a target device. All commands are
/// processed in order by the task that owns the device.
#[derive(Debug, Clone)]
pub struct TargetDeviceClient {
    tx: Sender<TargetCommand>,
}

impl From<Sender<TargetCommand>> for TargetDeviceClient {
    fn from(tx: Sender<TargetCommand>) -> Self {
        TargetDeviceClient::new(tx)
    }
}

impl TargetDeviceClient {
    /// Create a new [TargetDeviceClient] from the given channel
    pub fn new(tx: Sender<TargetCommand>) -> Self {
        Self { tx }
    }

    /// Set the normalized value of the given bind index without waiting for
    /// the device.
    pub fn set_value(&self, bind_index: u32, value: f32) -> Result<(), ClientError> {
        self.tx
            .try_send(TargetCommand::SetValue(bind_index, value))?;
        Ok(())
    }

    /// Returns the normalized value of the given bind index
    pub async fn get_value(&self, bind_index: u32) -> Result<f32, ClientError> {
        let (tx, mut rx) = channel(1);
        self.tx.send(TargetCommand::GetValue(bind_index, tx)).await?;
        if let Some(value) = rx.recv().await {
            return Ok(value);
        }
        Err(ClientError::ChannelClosed)
    }

    /// Reset the target device
    pub async fn reset(&self) -> Result<(), ClientError> {
        self.tx.send(TargetCommand::Reset).await?;
        Ok(())
    }

    /// Returns the save state section of the target device
    pub async fn freeze(&self) -> Result<Vec<u8>, ClientError> {
        let (tx, mut rx) = channel(1);
        self.tx.send(TargetCommand::Freeze(tx)).await?;
        if let Some(value) = rx.recv().await {
            return Ok(value);
        }
        Err(ClientError::ChannelClosed)
    }

    /// Restore the target device from the given save state section. Returns
    /// the number of bytes consumed.
    pub async fn thaw(&self, data: Vec<u8>) -> Result<usize, ClientError> {
        let (tx, mut rx) = channel(1);
        self.tx.send(TargetCommand::Thaw(data, tx)).await?;
        match rx.recv().await {
            Some(Ok(len)) => Ok(len),
            Some(Err(e)) => Err(ClientError::DeviceError(e)),
            None => Err(ClientError::ChannelClosed),
        }
    }

    /// Service an interrupt IN transfer immediately and return the completed
    /// packet.
    pub async fn poll(&self) -> Result<UsbPacket, ClientError> {
        let (tx, mut rx) = channel(1);
        self.tx.send(TargetCommand::Poll(tx)).await?;
        if let Some(packet) = rx.recv().await {
            return Ok(packet);
        }
        Err(ClientError::ChannelClosed)
    }

    /// Stop the target device.
    pub async fn stop(&self) -> Result<(), ClientError> {
        self.tx.send(TargetCommand::Stop).await?;
        Ok(())
    }

    /// Completes when the receiver has dropped.
    ///
    /// This allows the producers to get notified when interest in the produced
    /// values is canceled and immediately stop doing work.
    pub async fn closed(&self) {
        self.tx.closed().await
    }
}
