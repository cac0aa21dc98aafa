use std::{error::Error, time::Duration};

use crate::{
    config::{path::get_multidir_sorted_files, DeviceProfile, LoadError, SessionScript},
    drivers::densha::driver::ModelVariant,
};

const DEVICE_CONFIG_DIR: &str = "./rootfs/usr/share/denshacon/devices";

#[test]
fn test_load_profile() -> Result<(), Box<dyn Error>> {
    let yaml = r#"
version: 1
kind: DenshaCon
name: Shinkansen
model: shinkansen
port: 1
poll_interval_ms: 8
"#;
    let profile = DeviceProfile::from_yaml(yaml.to_string())?;
    assert_eq!(profile.model, ModelVariant::Shinkansen);
    assert_eq!(profile.port, 1);
    assert_eq!(profile.poll_interval(), Duration::from_millis(8));

    Ok(())
}

#[test]
fn test_profile_defaults() -> Result<(), Box<dyn Error>> {
    let yaml = r#"
version: 1
kind: DenshaCon
name: Type 2
model: type2
"#;
    let profile = DeviceProfile::from_yaml(yaml.to_string())?;
    assert_eq!(profile.port, 0);
    assert_eq!(profile.poll_interval(), Duration::from_millis(20));
    assert_eq!(profile.description, None);

    Ok(())
}

#[test]
fn test_invalid_profiles() {
    let wrong_kind = "version: 1\nkind: Gamepad\nname: x\nmodel: type2\n";
    assert!(matches!(
        DeviceProfile::from_yaml(wrong_kind.to_string()),
        Err(LoadError::Invalid(_))
    ));

    let zero_interval = "version: 1\nkind: DenshaCon\nname: x\nmodel: type2\npoll_interval_ms: 0\n";
    assert!(matches!(
        DeviceProfile::from_yaml(zero_interval.to_string()),
        Err(LoadError::Invalid(_))
    ));

    let unknown_model = "version: 1\nkind: DenshaCon\nname: x\nmodel: type3\n";
    assert!(matches!(
        DeviceProfile::from_yaml(unknown_model.to_string()),
        Err(LoadError::DeserializeError(_))
    ));
}

#[test]
fn test_load_session_script() -> Result<(), Box<dyn Error>> {
    let yaml = r#"
steps:
  - binding: Brake
    value: 1.0
  - binding: Power
    value: 0.5
    delay_ms: 100
  - binding: start
    value: 1.0
"#;
    let script = SessionScript::from_yaml(yaml.to_string())?;
    assert_eq!(script.steps.len(), 3);
    assert_eq!(script.steps[0].bind_index(), Some(1));
    assert_eq!(script.steps[0].delay_ms, 0);
    assert_eq!(script.steps[1].delay_ms, 100);
    assert_eq!(script.steps[2].bind_index(), Some(11));

    let bad = "steps:\n  - binding: horn\n    value: 1.0\n";
    assert!(matches!(
        SessionScript::from_yaml(bad.to_string()),
        Err(LoadError::Invalid(_))
    ));

    Ok(())
}

/// Every shipped device profile must load
#[test]
fn check_shipped_profiles() -> Result<(), Box<dyn Error>> {
    let paths = get_multidir_sorted_files(&[DEVICE_CONFIG_DIR.into()], |_| true);
    assert!(!paths.is_empty(), "no device profiles found");
    for path in paths {
        if let Err(e) = DeviceProfile::from_yaml_path(&path) {
            panic!("failed to load {path:?}: {e}");
        }
    }

    Ok(())
}
