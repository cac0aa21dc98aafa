#[cfg(test)]
pub mod config_test;
pub mod path;

use std::{io, path::Path, time::Duration};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::drivers::densha::{
    binding::Binding,
    driver::{ModelVariant, POLL_INTERVAL_MS, TYPE_NAME},
};

/// Represents all possible errors loading a config
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Could not read: {0}")]
    IoError(#[from] io::Error),
    #[error("Unable to deserialize: {0}")]
    DeserializeError(#[from] serde_yaml::Error),
    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Configuration of a single emulated Densha controller
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub struct DeviceProfile {
    pub version: u32,
    pub kind: String,
    pub name: String,
    pub description: Option<String>,
    /// Controller hardware to emulate
    pub model: ModelVariant,
    /// USB port the controller is attached to
    #[serde(default)]
    pub port: u32,
    /// Interrupt endpoint polling interval. Defaults to the endpoint's
    /// bInterval.
    pub poll_interval_ms: Option<u64>,
}

impl Default for DeviceProfile {
    fn default() -> Self {
        Self {
            version: 1,
            kind: TYPE_NAME.to_string(),
            name: "Default".to_string(),
            description: None,
            model: ModelVariant::default(),
            port: 0,
            poll_interval_ms: None,
        }
    }
}

impl DeviceProfile {
    /// Load a [DeviceProfile] from the given YAML string
    pub fn from_yaml(content: String) -> Result<DeviceProfile, LoadError> {
        let profile: DeviceProfile = serde_yaml::from_str(content.as_str())?;
        profile.validate()?;
        Ok(profile)
    }

    /// Load a [DeviceProfile] from the given YAML file
    pub fn from_yaml_path<P: AsRef<Path>>(path: P) -> Result<DeviceProfile, LoadError> {
        let file = std::fs::File::open(path)?;
        let profile: DeviceProfile = serde_yaml::from_reader(file)?;
        profile.validate()?;
        Ok(profile)
    }

    /// Returns the interrupt endpoint polling interval
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms.unwrap_or(POLL_INTERVAL_MS))
    }

    fn validate(&self) -> Result<(), LoadError> {
        if self.kind != TYPE_NAME {
            return Err(LoadError::Invalid(format!(
                "unexpected kind `{}`, expected `{TYPE_NAME}`",
                self.kind
            )));
        }
        if self.poll_interval_ms == Some(0) {
            return Err(LoadError::Invalid(
                "poll_interval_ms must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

/// A scripted sequence of binding changes to replay against a controller
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub struct SessionScript {
    pub steps: Vec<SessionStep>,
}

/// Set a single binding, optionally waiting before it is applied
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub struct SessionStep {
    /// Binding identifier, e.g. "Power", "Up" or "Start"
    pub binding: String,
    /// Normalized value between 0.0 and 1.0
    pub value: f32,
    /// Time to wait before applying this step
    #[serde(default)]
    pub delay_ms: u64,
}

impl SessionStep {
    /// Returns the bind index this step targets
    pub fn bind_index(&self) -> Option<u32> {
        Binding::from_name(self.binding.as_str()).map(|b| b.index())
    }
}

impl SessionScript {
    /// Load a [SessionScript] from the given YAML string
    pub fn from_yaml(content: String) -> Result<SessionScript, LoadError> {
        let script: SessionScript = serde_yaml::from_str(content.as_str())?;
        script.validate()?;
        Ok(script)
    }

    /// Load a [SessionScript] from the given YAML file
    pub fn from_yaml_path<P: AsRef<Path>>(path: P) -> Result<SessionScript, LoadError> {
        let file = std::fs::File::open(path)?;
        let script: SessionScript = serde_yaml::from_reader(file)?;
        script.validate()?;
        Ok(script)
    }

    fn validate(&self) -> Result<(), LoadError> {
        for step in self.steps.iter() {
            if step.bind_index().is_none() {
                return Err(LoadError::Invalid(format!(
                    "unknown binding `{}`",
                    step.binding
                )));
            }
        }
        Ok(())
    }
}
