use std::error::Error;
use std::path::PathBuf;
use std::time::Duration;

use clap::ValueEnum;
use tabled::settings::{Panel, Style};
use tabled::{Table, Tabled};
use tokio::sync::mpsc;

use crate::cli::format_hex;
use crate::config::{DeviceProfile, SessionScript};
use crate::drivers::densha::binding::{self, Binding};
use crate::drivers::densha::driver::{ControllerCodec, ModelVariant};
use crate::drivers::densha::report_descriptor::CONFIG_DESCRIPTOR;
use crate::input::target::client::TargetDeviceClient;
use crate::input::target::densha::DenshaControllerDevice;

/// Size of the command and report channels of an emulated controller
const BUFFER_SIZE: usize = 2048;

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DescriptorKind {
    /// USB device descriptor
    Device,
    /// USB configuration descriptor, including interface and endpoint
    Configuration,
    /// HID report descriptor
    Report,
    /// USB string descriptors
    Strings,
}

#[derive(Tabled)]
struct BindingRow {
    #[tabled(rename = "Index")]
    index: u32,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Display Name")]
    display_name: String,
    #[tabled(rename = "Kind")]
    kind: String,
    #[tabled(rename = "Default Mapping")]
    generic: String,
}

#[derive(Tabled)]
struct StringRow {
    #[tabled(rename = "Index")]
    index: usize,
    #[tabled(rename = "Value")]
    value: String,
}

/// Parse a "binding=value" argument into a bind index and normalized value
pub fn parse_binding_value(arg: &str) -> Result<(u32, f32), String> {
    let Some((name, value)) = arg.split_once('=') else {
        return Err(format!("expected <binding>=<value>, got `{arg}`"));
    };
    let Some(binding) = Binding::from_name(name.trim()) else {
        return Err(format!("unknown binding `{name}`"));
    };
    let value: f32 = value
        .trim()
        .parse()
        .map_err(|e| format!("invalid value `{value}`: {e}"))?;

    Ok((binding.index(), value))
}

pub fn handle_bindings(model: ModelVariant) -> Result<(), Box<dyn Error>> {
    let rows: Vec<BindingRow> = binding::bindings(model)
        .iter()
        .map(|info| BindingRow {
            index: info.bind_index(),
            name: info.name.to_string(),
            display_name: info.display_name.to_string(),
            kind: info.kind.to_string(),
            generic: format!("{:?}", info.generic),
        })
        .collect();
    let count = rows.len();

    let mut table = Table::new(rows);
    table
        .with(Style::modern_rounded())
        .with(Panel::header(format!("{} Bindings", model.display_name())));
    println!("{table}");
    println!("Found {count} binding(s)");

    Ok(())
}

pub fn handle_report(model: ModelVariant, values: Vec<(u32, f32)>) -> Result<(), Box<dyn Error>> {
    let mut codec = ControllerCodec::new(model);
    for (bind_index, value) in values {
        codec.set_value(bind_index, value);
    }
    let report = codec.report()?;
    println!("{}", format_hex(&report));

    Ok(())
}

pub fn handle_descriptor(model: ModelVariant, kind: DescriptorKind) -> Result<(), Box<dyn Error>> {
    match kind {
        DescriptorKind::Device => println!("{}", format_hex(model.device_descriptor())),
        DescriptorKind::Configuration => println!("{}", format_hex(&CONFIG_DESCRIPTOR)),
        DescriptorKind::Report => println!("{}", format_hex(model.report_descriptor())),
        DescriptorKind::Strings => {
            let rows: Vec<StringRow> = model
                .strings()
                .iter()
                .enumerate()
                .skip(1)
                .map(|(index, value)| StringRow {
                    index,
                    value: value.to_string(),
                })
                .collect();
            let mut table = Table::new(rows);
            table
                .with(Style::modern_rounded())
                .with(Panel::header(format!("{} Strings", model.display_name())));
            println!("{table}");
        }
    }

    Ok(())
}

pub async fn handle_run(
    profile: Option<PathBuf>,
    model: ModelVariant,
    script: Option<PathBuf>,
) -> Result<(), Box<dyn Error>> {
    let profile = match profile {
        Some(path) => DeviceProfile::from_yaml_path(path)?,
        None => DeviceProfile {
            model,
            ..Default::default()
        },
    };
    let script = match script {
        Some(path) => Some(SessionScript::from_yaml_path(path)?),
        None => None,
    };

    let device = DenshaControllerDevice::from_profile(&profile)?;
    log::info!(
        "Emulating {} on port {}",
        device.model().display_name(),
        device.port()
    );
    let poll_interval = device.poll_interval();
    let (tx, rx) = mpsc::channel(BUFFER_SIZE);
    let (reports_tx, mut reports_rx) = mpsc::channel(BUFFER_SIZE);
    let client = TargetDeviceClient::new(tx);
    let task = tokio::spawn(device.run(rx, reports_tx));

    let printer = tokio::spawn(async move {
        while let Some(report) = reports_rx.recv().await {
            println!("{}", format_hex(&report));
        }
    });

    match script {
        Some(script) => {
            for step in script.steps {
                if step.delay_ms > 0 {
                    tokio::time::sleep(Duration::from_millis(step.delay_ms)).await;
                }
                let Some(bind_index) = step.bind_index() else {
                    continue;
                };
                log::debug!("Setting {} to {}", step.binding, step.value);
                client.set_value(bind_index, step.value)?;
            }
            // Give the device a chance to report the final state
            tokio::time::sleep(poll_interval * 2).await;
        }
        None => {
            tokio::signal::ctrl_c().await?;
            log::info!("Shutting down");
        }
    }

    client.stop().await?;
    task.await??;
    printer.await?;

    Ok(())
}
