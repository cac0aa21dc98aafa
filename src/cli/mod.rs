pub mod device;
pub mod target;

use std::{error::Error, path::PathBuf};

use clap::{Parser, Subcommand};
use device::{handle_devices, DevicesCommand};
use target::{handle_bindings, handle_descriptor, handle_report, handle_run, DescriptorKind};

use crate::drivers::densha::driver::ModelVariant;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// List the bindings exposed by a controller model
    Bindings {
        /// Controller model (type2, shinkansen, ryojouhen) or subtype index
        #[arg(short, long, default_value_t = ModelVariant::Type2)]
        model: ModelVariant,
    },
    /// Print the input report for the given control values
    Report {
        /// Controller model (type2, shinkansen, ryojouhen) or subtype index
        #[arg(short, long, default_value_t = ModelVariant::Type2)]
        model: ModelVariant,
        /// Control value to set (e.g. "power=0.5" or "start=1")
        #[arg(short, long = "set", value_parser = target::parse_binding_value)]
        values: Vec<(u32, f32)>,
    },
    /// Dump the USB descriptors of a controller model
    Descriptor {
        /// Controller model (type2, shinkansen, ryojouhen) or subtype index
        #[arg(short, long, default_value_t = ModelVariant::Type2)]
        model: ModelVariant,
        /// Descriptor to dump
        #[arg(short, long, value_enum, default_value_t = DescriptorKind::Device)]
        kind: DescriptorKind,
    },
    /// Manage device profiles
    Devices {
        #[command(subcommand)]
        cmd: DevicesCommand,
    },
    /// Emulate a controller and print every changed input report
    Run {
        /// Device profile to load
        #[arg(short, long)]
        profile: Option<PathBuf>,
        /// Controller model to emulate when no profile is given
        #[arg(short, long, default_value_t = ModelVariant::Type2)]
        model: ModelVariant,
        /// Session script to replay. Without a script the controller runs
        /// until interrupted.
        #[arg(short, long)]
        script: Option<PathBuf>,
    },
}

pub async fn main_cli(args: Args) -> Result<(), Box<dyn Error>> {
    match args.cmd {
        Commands::Bindings { model } => handle_bindings(model)?,
        Commands::Report { model, values } => handle_report(model, values)?,
        Commands::Descriptor { model, kind } => handle_descriptor(model, kind)?,
        Commands::Devices { cmd } => handle_devices(cmd)?,
        Commands::Run {
            profile,
            model,
            script,
        } => handle_run(profile, model, script).await?,
    }

    Ok(())
}

/// Format the given bytes as space separated hex
pub fn format_hex(data: &[u8]) -> String {
    data.iter()
        .map(|byte| format!("{byte:02X}"))
        .collect::<Vec<String>>()
        .join(" ")
}
