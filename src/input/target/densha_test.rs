use std::{error::Error, time::Duration};

use tokio::{sync::mpsc, time::timeout};

use crate::{
    config::DeviceProfile,
    drivers::densha::{binding::Binding, driver::ModelVariant, snapshot::SNAPSHOT_MARKER},
    input::{
        target::{
            client::{ClientError, TargetDeviceClient},
            densha::DenshaControllerDevice,
            DeviceError, TargetInputDevice, TargetOutputDevice,
        },
        usb::{ControlRequest, PacketId, UsbPacket, UsbStatus},
    },
};

const RELEASED_TYPE2: [u8; 6] = [0x01, 0x79, 0x81, 0xFF, 0x08, 0x00];

#[test]
fn test_unsupported_model() {
    let result = DenshaControllerDevice::new(ModelVariant::Ryojouhen, 0);
    assert!(matches!(
        result,
        Err(DeviceError::UnsupportedModel(ModelVariant::Ryojouhen))
    ));
}

#[test]
fn test_supported_models() -> Result<(), Box<dyn Error>> {
    for model in ModelVariant::SUPPORTED {
        let device = DenshaControllerDevice::new(model, 1)?;
        assert_eq!(device.model(), model);
        assert_eq!(device.port(), 1);
        assert_eq!(device.get_bindings().len(), Binding::COUNT as usize);
    }

    Ok(())
}

#[test]
fn test_interrupt_in() -> Result<(), Box<dyn Error>> {
    let mut device = DenshaControllerDevice::new(ModelVariant::Type2, 0)?;
    let mut packet = UsbPacket::new_in(1, 8);
    device.handle_data(&mut packet);
    assert_eq!(packet.status, UsbStatus::Success);
    assert_eq!(packet.actual_length, 6);
    assert_eq!(packet.data(), &RELEASED_TYPE2);

    Ok(())
}

#[test]
fn test_interrupt_in_short_buffer() -> Result<(), Box<dyn Error>> {
    let mut device = DenshaControllerDevice::new(ModelVariant::Type2, 0)?;
    let mut packet = UsbPacket::new_in(1, 4);
    device.handle_data(&mut packet);
    assert_eq!(packet.status, UsbStatus::IoError);
    assert_eq!(packet.status.code(), -5);
    assert_eq!(packet.actual_length, 0);
    assert_eq!(packet.buffer, vec![0; 4]);

    Ok(())
}

#[test]
fn test_stalled_packets() -> Result<(), Box<dyn Error>> {
    let mut device = DenshaControllerDevice::new(ModelVariant::Shinkansen, 0)?;

    let mut out = UsbPacket::new_in(1, 8);
    out.pid = PacketId::Out;
    device.handle_data(&mut out);
    assert_eq!(out.status, UsbStatus::Stall);
    assert_eq!(out.status.code(), -3);

    let mut wrong_endpoint = UsbPacket::new_in(2, 8);
    device.handle_data(&mut wrong_endpoint);
    assert_eq!(wrong_endpoint.status, UsbStatus::Stall);
    assert_eq!(wrong_endpoint.actual_length, 0);

    let mut setup = UsbPacket::new_in(0, 8);
    setup.pid = PacketId::Setup;
    let request = ControlRequest {
        request_type: 0x21,
        request: 0x0A,
        value: 0,
        index: 0,
        length: 0,
    };
    device.handle_control(&mut setup, request);
    assert_eq!(setup.status, UsbStatus::Stall);

    Ok(())
}

#[test]
fn test_reset_releases_levers() -> Result<(), Box<dyn Error>> {
    let mut device = DenshaControllerDevice::new(ModelVariant::Type2, 0)?;
    device.set_binding_value(Binding::Power.index(), 1.0);
    device.set_binding_value(Binding::Brake.index(), 1.0);
    device.set_binding_value(Binding::Start.index(), 1.0);
    device.handle_reset();

    assert_eq!(device.get_binding_value(Binding::Power.index()), 0.0);
    assert_eq!(device.get_binding_value(Binding::Brake.index()), 0.0);
    assert_eq!(device.get_binding_value(Binding::Start.index()), 1.0);

    Ok(())
}

#[test]
fn test_freeze_thaw() -> Result<(), Box<dyn Error>> {
    let mut device = DenshaControllerDevice::new(ModelVariant::Type2, 0)?;
    device.set_binding_value(Binding::Power.index(), 1.0);
    let mut state = Vec::new();
    device.freeze(&mut state);
    assert!(state.starts_with(SNAPSHOT_MARKER.as_bytes()));

    let mut restored = DenshaControllerDevice::new(ModelVariant::Type2, 0)?;
    let len = restored.thaw(&state)?;
    assert_eq!(len, state.len());
    assert_eq!(restored.get_binding_value(Binding::Power.index()), 1.0);

    assert!(restored.thaw(b"NotAController").is_err());

    Ok(())
}

#[test]
fn test_from_profile() -> Result<(), Box<dyn Error>> {
    let profile = DeviceProfile {
        model: ModelVariant::Shinkansen,
        port: 1,
        poll_interval_ms: Some(5),
        ..Default::default()
    };
    let device = DenshaControllerDevice::from_profile(&profile)?;
    assert_eq!(device.model(), ModelVariant::Shinkansen);
    assert_eq!(device.poll_interval(), Duration::from_millis(5));
    assert_eq!(device.product(), "TAITO_DENSYA_CON_T02");

    Ok(())
}

fn spawn_device(
    model: ModelVariant,
    poll_interval_ms: u64,
) -> Result<
    (
        TargetDeviceClient,
        mpsc::Receiver<Vec<u8>>,
        tokio::task::JoinHandle<Result<(), crate::input::target::OutputError>>,
    ),
    Box<dyn Error>,
> {
    let profile = DeviceProfile {
        model,
        poll_interval_ms: Some(poll_interval_ms),
        ..Default::default()
    };
    let device = DenshaControllerDevice::from_profile(&profile)?;
    let (tx, rx) = mpsc::channel(64);
    let (reports_tx, reports_rx) = mpsc::channel(64);
    let task = tokio::spawn(device.run(rx, reports_tx));

    Ok((TargetDeviceClient::new(tx), reports_rx, task))
}

#[tokio::test]
async fn test_run_commands() -> Result<(), Box<dyn Error>> {
    let (client, _reports, task) = spawn_device(ModelVariant::Type2, 1000)?;

    client.set_value(Binding::Brake.index(), 1.0)?;
    client.set_value(Binding::ButtonA.index(), 1.0)?;
    assert_eq!(client.get_value(Binding::Brake.index()).await?, 1.0);

    let packet = client.poll().await?;
    assert_eq!(packet.status, UsbStatus::Success);
    assert_eq!(packet.data(), &[0x01, 0xB9, 0x81, 0xFF, 0x08, 0x02]);

    let state = client.freeze().await?;
    client.reset().await?;
    assert_eq!(client.get_value(Binding::Brake.index()).await?, 0.0);
    assert_eq!(client.thaw(state).await?, SNAPSHOT_MARKER.len() + 2);
    assert_eq!(client.get_value(Binding::Brake.index()).await?, 1.0);

    let result = client.thaw(b"garbage".to_vec()).await;
    assert!(matches!(result, Err(ClientError::DeviceError(_))));

    client.stop().await?;
    task.await??;
    client.closed().await;

    Ok(())
}

#[tokio::test]
async fn test_run_forwards_changed_reports() -> Result<(), Box<dyn Error>> {
    let (client, mut reports, task) = spawn_device(ModelVariant::Type2, 1)?;

    let first = timeout(Duration::from_secs(5), reports.recv()).await?;
    assert_eq!(first, Some(RELEASED_TYPE2.to_vec()));

    client.set_value(Binding::HatUp.index(), 1.0)?;
    let next = timeout(Duration::from_secs(5), reports.recv()).await?;
    assert_eq!(next, Some(vec![0x01, 0x79, 0x81, 0xFF, 0x00, 0x00]));

    client.stop().await?;
    task.await??;

    // Unchanged reports are never forwarded
    assert_eq!(reports.try_recv().ok(), None);

    Ok(())
}

#[tokio::test]
async fn test_run_stops_when_clients_dropped() -> Result<(), Box<dyn Error>> {
    let (client, _reports, task) = spawn_device(ModelVariant::Shinkansen, 1000)?;
    drop(client);
    timeout(Duration::from_secs(5), task).await???;

    Ok(())
}
