use std::error::Error;

use clap::Subcommand;
use tabled::settings::{Panel, Style};
use tabled::{Table, Tabled};

use crate::config::{path::get_device_profile_paths, DeviceProfile};

#[derive(Subcommand, Debug, Clone)]
pub enum DevicesCommand {
    /// List all device profiles found on the system
    List,
    /// Dump the given device profile in YAML format
    Dump {
        /// Name of the device profile
        name: String,
    },
}

#[derive(Tabled)]
struct DeviceProfileRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Model")]
    model: String,
    #[tabled(rename = "Port")]
    port: u32,
    #[tabled(rename = "Poll Interval")]
    poll_interval: String,
    #[tabled(rename = "Path")]
    path: String,
}

pub fn handle_devices(cmd: DevicesCommand) -> Result<(), Box<dyn Error>> {
    match cmd {
        DevicesCommand::List => {
            let profiles: Vec<DeviceProfileRow> = get_device_profile_paths()
                .into_iter()
                .filter_map(|path| {
                    let profile = match DeviceProfile::from_yaml_path(&path) {
                        Ok(profile) => profile,
                        Err(e) => {
                            log::warn!("Failed to load device profile {path:?}: {e}");
                            return None;
                        }
                    };
                    Some(DeviceProfileRow {
                        name: profile.name.clone(),
                        model: profile.model.display_name().to_string(),
                        port: profile.port,
                        poll_interval: format!("{:?}", profile.poll_interval()),
                        path: path.display().to_string(),
                    })
                })
                .collect();
            let count = profiles.len();

            let mut table = Table::new(profiles);
            table
                .with(Style::modern_rounded())
                .with(Panel::header("Device Profiles"));
            println!("{table}");
            println!("Found {count} device profile(s)");
        }
        DevicesCommand::Dump { name } => {
            let profile = get_device_profile_paths()
                .into_iter()
                .filter_map(|path| DeviceProfile::from_yaml_path(path).ok())
                .find(|profile| profile.name == name);
            let Some(profile) = profile else {
                return Err(format!("No device profile found with name: {name}").into());
            };
            let yaml = serde_yaml::to_string(&profile)?;
            println!("{yaml}");
        }
    }

    Ok(())
}
