use std::fs::File;
use std::io::Write;

use denshacon::config::{DeviceProfile, SessionScript};
use schemars::schema_for;

fn main() {
    let device_profile_schema = schema_for!(DeviceProfile);
    let mut file = File::create("./rootfs/usr/share/denshacon/schema/device_profile_v1.json")
        .expect("Failed to create schema file");
    write!(
        file,
        "{}",
        serde_json::to_string_pretty(&device_profile_schema).unwrap()
    )
    .expect("Failed to write schema");

    let session_script_schema = schema_for!(SessionScript);
    let mut file = File::create("./rootfs/usr/share/denshacon/schema/session_script_v1.json")
        .expect("Failed to create schema file");
    write!(
        file,
        "{}",
        serde_json::to_string_pretty(&session_script_schema).unwrap()
    )
    .expect("Failed to write schema");
}
