use std::{fmt::Display, str::FromStr};

use packed_struct::{PackedStruct, PackingError};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{
    binding::Binding,
    buttons::{self, ButtonState},
    hid_report::{Direction, PackedShinkansenInputReport, PackedType2InputReport, REPORT_SIZE},
    notch::{self, NotchTable},
    report_descriptor::{
        DescriptorStrings, RYOJOUHEN_DEVICE_DESCRIPTOR, RYOJOUHEN_REPORT_DESCRIPTOR,
        RYOJOUHEN_STRINGS, SHINKANSEN_DEVICE_DESCRIPTOR, SHINKANSEN_REPORT_DESCRIPTOR,
        SHINKANSEN_STRINGS, TYPE2_DEVICE_DESCRIPTOR, TYPE2_REPORT_DESCRIPTOR, TYPE2_STRINGS,
    },
    snapshot::{FreezeError, Snapshot},
};

/// Human readable device name
pub const NAME: &str = "Densha Controller";
/// Device type identifier used in configs
pub const TYPE_NAME: &str = "DenshaCon";

pub const VID: u16 = 0x0AE4;
pub const PID_TYPE2: u16 = 0x0004;
pub const PID_SHINKANSEN: u16 = 0x0005;
pub const PID_RYOJOUHEN: u16 = 0x0007;

/// Report ID prefixed to every Type 2 input report
pub const TYPE2_REPORT_ID: u8 = 0x01;
/// The horn axis is folded into Button C on real hardware and always reads
/// fully released.
pub const HORN_RESERVED: u8 = 0xFF;

/// Interrupt IN endpoint that input reports are read from
pub const INTERRUPT_ENDPOINT: u8 = 1;
/// Endpoint polling interval (bInterval) in milliseconds
pub const POLL_INTERVAL_MS: u64 = 20;

// Binding values are normalized from 0.0 - 1.0
const AXIS_MAX: f32 = 255.0;
const BUTTON_THRESHOLD: f32 = 0.5;

/// Supported Densha controller hardware
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum ModelVariant {
    /// Two handle controller (TCPP20009)
    #[default]
    Type2,
    /// Shinkansen controller (TCPP20011)
    Shinkansen,
    /// Ryojouhen controller (TCPP20014)
    Ryojouhen,
}

impl ModelVariant {
    /// Models that can be emulated, in subtype order
    pub const SUPPORTED: [ModelVariant; 2] = [ModelVariant::Type2, ModelVariant::Shinkansen];

    /// Returns the model for the given subtype index
    pub fn from_subtype(subtype: u32) -> Option<Self> {
        match subtype {
            0 => Some(Self::Type2),
            1 => Some(Self::Shinkansen),
            2 => Some(Self::Ryojouhen),
            _ => None,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Type2 => "Type 2",
            Self::Shinkansen => "Shinkansen",
            Self::Ryojouhen => "Ryojouhen",
        }
    }

    pub fn product_id(&self) -> u16 {
        match self {
            Self::Type2 => PID_TYPE2,
            Self::Shinkansen => PID_SHINKANSEN,
            Self::Ryojouhen => PID_RYOJOUHEN,
        }
    }

    /// Whether input reports can be produced for this model
    pub fn is_supported(&self) -> bool {
        Self::SUPPORTED.contains(self)
    }

    pub fn device_descriptor(&self) -> &'static [u8] {
        match self {
            Self::Type2 => &TYPE2_DEVICE_DESCRIPTOR,
            Self::Shinkansen => &SHINKANSEN_DEVICE_DESCRIPTOR,
            Self::Ryojouhen => &RYOJOUHEN_DEVICE_DESCRIPTOR,
        }
    }

    pub fn report_descriptor(&self) -> &'static [u8] {
        match self {
            Self::Type2 => &TYPE2_REPORT_DESCRIPTOR,
            Self::Shinkansen => &SHINKANSEN_REPORT_DESCRIPTOR,
            Self::Ryojouhen => &RYOJOUHEN_REPORT_DESCRIPTOR,
        }
    }

    pub fn strings(&self) -> &'static DescriptorStrings {
        match self {
            Self::Type2 => &TYPE2_STRINGS,
            Self::Shinkansen => &SHINKANSEN_STRINGS,
            Self::Ryojouhen => &RYOJOUHEN_STRINGS,
        }
    }

    /// Returns the (power, brake) notch tables for this model
    pub fn notch_tables(&self) -> Option<(&'static NotchTable, &'static NotchTable)> {
        match self {
            Self::Type2 => Some((&notch::TYPE2_POWER, &notch::TYPE2_BRAKE)),
            Self::Shinkansen => Some((&notch::SHINKANSEN_POWER, &notch::SHINKANSEN_BRAKE)),
            Self::Ryojouhen => None,
        }
    }
}

impl Display for ModelVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let value = match self {
            ModelVariant::Type2 => "type2",
            ModelVariant::Shinkansen => "shinkansen",
            ModelVariant::Ryojouhen => "ryojouhen",
        };
        write!(f, "{}", value)
    }
}

impl FromStr for ModelVariant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Hosts may also select the model by its subtype index
        if let Ok(subtype) = s.parse::<u32>() {
            return Self::from_subtype(subtype)
                .ok_or_else(|| format!("unknown controller subtype: {s}"));
        }

        match s.to_ascii_lowercase().as_str() {
            "type2" | "type-2" | "tcpp20009" => Ok(Self::Type2),
            "shinkansen" | "tcpp20011" => Ok(Self::Shinkansen),
            "ryojouhen" | "tcpp20014" => Ok(Self::Ryojouhen),
            _ => Err(format!("unknown controller model: {s}")),
        }
    }
}

/// Possible errors producing an input report
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("model `{0}` has no input report layout")]
    UnsupportedVariant(ModelVariant),
    #[error("report buffer too small: need {needed} bytes, got {available}")]
    BufferTooSmall { needed: usize, available: usize },
    #[error("unable to pack input report: {0:?}")]
    PackingError(#[from] PackingError),
}

/// Raw controller input. The hat switch direction is derived from the four
/// d-pad flags and is updated every time one of them changes.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ControlState {
    power: u8,
    brake: u8,
    hat_up: bool,
    hat_down: bool,
    hat_left: bool,
    hat_right: bool,
    hat_switch: Direction,
    buttons: ButtonState,
}

impl ControlState {
    /// Power lever position, 255 is fully applied
    pub fn power(&self) -> u8 {
        self.power
    }

    pub fn set_power(&mut self, value: u8) {
        self.power = value;
    }

    /// Brake lever position, 255 is fully applied
    pub fn brake(&self) -> u8 {
        self.brake
    }

    pub fn set_brake(&mut self, value: u8) {
        self.brake = value;
    }

    pub fn hat_up(&self) -> bool {
        self.hat_up
    }

    pub fn hat_down(&self) -> bool {
        self.hat_down
    }

    pub fn hat_left(&self) -> bool {
        self.hat_left
    }

    pub fn hat_right(&self) -> bool {
        self.hat_right
    }

    pub fn set_hat_up(&mut self, pressed: bool) {
        self.hat_up = pressed;
        self.update_hat_switch();
    }

    pub fn set_hat_down(&mut self, pressed: bool) {
        self.hat_down = pressed;
        self.update_hat_switch();
    }

    pub fn set_hat_left(&mut self, pressed: bool) {
        self.hat_left = pressed;
        self.update_hat_switch();
    }

    pub fn set_hat_right(&mut self, pressed: bool) {
        self.hat_right = pressed;
        self.update_hat_switch();
    }

    pub fn hat_switch(&self) -> Direction {
        self.hat_switch
    }

    pub fn buttons(&self) -> ButtonState {
        self.buttons
    }

    pub fn buttons_mut(&mut self) -> &mut ButtonState {
        &mut self.buttons
    }

    /// Recompute the hat switch direction from the d-pad flags
    pub fn update_hat_switch(&mut self) {
        self.hat_switch =
            Direction::from_dpad(self.hat_up, self.hat_down, self.hat_left, self.hat_right);
    }
}

/// [ControllerCodec] translates host binding values into the input reports
/// a real Densha controller would send.
///
/// The codec does no locking of its own. Callers that set bindings and read
/// reports from different threads or tasks must serialize access, either
/// behind a lock or by confining the codec to a single task (see
/// [crate::input::target::densha::DenshaControllerDevice::run]).
#[derive(Debug, Clone)]
pub struct ControllerCodec {
    model: ModelVariant,
    state: ControlState,
}

impl ControllerCodec {
    /// Create a new codec for the given model with all controls released
    pub fn new(model: ModelVariant) -> Self {
        Self {
            model,
            state: ControlState::default(),
        }
    }

    pub fn model(&self) -> ModelVariant {
        self.model
    }

    pub fn state(&self) -> &ControlState {
        &self.state
    }

    /// Release both levers. The d-pad and button state is kept as-is to match
    /// the behavior of the emulated hardware after a bus reset.
    pub fn reset(&mut self) {
        self.state.set_power(0);
        self.state.set_brake(0);
    }

    /// Returns the normalized (0.0 - 1.0) value of the given bind index.
    /// Unknown indices read as released.
    pub fn get_value(&self, bind_index: u32) -> f32 {
        let Some(binding) = Binding::from_index(bind_index) else {
            return 0.0;
        };

        match binding {
            Binding::Power => self.state.power() as f32 / AXIS_MAX,
            Binding::Brake => self.state.brake() as f32 / AXIS_MAX,
            Binding::HatUp => bool_value(self.state.hat_up()),
            Binding::HatRight => bool_value(self.state.hat_right()),
            Binding::HatDown => bool_value(self.state.hat_down()),
            Binding::HatLeft => bool_value(self.state.hat_left()),
            _ => {
                let pressed = binding
                    .button()
                    .map(|button| self.state.buttons().is_pressed(button))
                    .unwrap_or_default();
                bool_value(pressed)
            }
        }
    }

    /// Set the given bind index to the given normalized (0.0 - 1.0) value.
    /// Unknown indices are ignored.
    pub fn set_value(&mut self, bind_index: u32, value: f32) {
        let Some(binding) = Binding::from_index(bind_index) else {
            log::trace!("Ignoring value for unknown bind index {bind_index}");
            return;
        };

        match binding {
            Binding::Power => self.state.set_power(denormalize_unsigned_value(value)),
            Binding::Brake => self.state.set_brake(denormalize_unsigned_value(value)),
            Binding::HatUp => self.state.set_hat_up(hat_value(value)),
            Binding::HatRight => self.state.set_hat_right(hat_value(value)),
            Binding::HatDown => self.state.set_hat_down(hat_value(value)),
            Binding::HatLeft => self.state.set_hat_left(hat_value(value)),
            _ => {
                if let Some(button) = binding.button() {
                    let pressed = value >= BUTTON_THRESHOLD;
                    self.state.buttons_mut().set(button, pressed);
                }
            }
        }
    }

    /// Write the current input report into the given buffer and return the
    /// number of bytes written.
    pub fn produce_report(&mut self, buf: &mut [u8]) -> Result<usize, ReportError> {
        let report = self.report()?;
        let available = buf.len();
        let Some(dst) = buf.get_mut(..REPORT_SIZE) else {
            return Err(ReportError::BufferTooSmall {
                needed: REPORT_SIZE,
                available,
            });
        };
        dst.copy_from_slice(&report);

        Ok(REPORT_SIZE)
    }

    /// Returns the packed input report for the current state
    pub fn report(&mut self) -> Result<[u8; REPORT_SIZE], ReportError> {
        self.state.update_hat_switch();

        let Some((power_notches, brake_notches)) = self.model.notch_tables() else {
            return Err(ReportError::UnsupportedVariant(self.model));
        };
        let Some(buttons) = buttons::remap(self.model, self.state.buttons()) else {
            return Err(ReportError::UnsupportedVariant(self.model));
        };
        let power = notch::quantize(power_notches, self.state.power());
        let brake = notch::quantize(brake_notches, self.state.brake());
        let dpad = self.state.hat_switch();

        let data = match self.model {
            ModelVariant::Type2 => {
                let report = PackedType2InputReport {
                    brake,
                    power,
                    dpad,
                    buttons,
                    ..Default::default()
                };
                log::trace!("{report}");
                report.pack()?
            }
            ModelVariant::Shinkansen => {
                let report = PackedShinkansenInputReport {
                    brake,
                    power,
                    dpad,
                    buttons,
                    ..Default::default()
                };
                log::trace!("{report}");
                report.pack()?
            }
            ModelVariant::Ryojouhen => return Err(ReportError::UnsupportedVariant(self.model)),
        };

        log::trace!(
            "Mascon - Type: {} Power: {power:02x} (raw: {:02x}) Brake: {brake:02x} (raw: {:02x}) Buttons: {buttons:02x}",
            self.model,
            self.state.power(),
            self.state.brake()
        );

        Ok(data)
    }

    /// Returns the persisted part of the controller state
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            power: self.state.power(),
            brake: self.state.brake(),
        }
    }

    /// Restore the persisted part of the controller state
    pub fn restore(&mut self, snapshot: Snapshot) {
        self.state.set_power(snapshot.power);
        self.state.set_brake(snapshot.brake);
    }

    /// Append this controller's save state section to the given buffer
    pub fn freeze(&self, buf: &mut Vec<u8>) {
        self.snapshot().freeze(buf);
    }

    /// Load this controller's save state section from the start of the given
    /// data, returning the number of bytes consumed.
    pub fn thaw(&mut self, data: &[u8]) -> Result<usize, FreezeError> {
        let (snapshot, len) = Snapshot::thaw(data)?;
        self.restore(snapshot);
        Ok(len)
    }
}

fn bool_value(value: bool) -> f32 {
    if value {
        1.0
    } else {
        0.0
    }
}

/// Hat flags are set by any value that does not round down to zero
fn hat_value(normal_value: f32) -> bool {
    denormalize_unsigned_value(normal_value) != 0
}

/// De-normalizes the given value from 0.0 - 1.0 into a byte, rounding to the
/// nearest step and clamping out of range values.
fn denormalize_unsigned_value(normal_value: f32) -> u8 {
    (normal_value * AXIS_MAX).round().clamp(0.0, AXIS_MAX) as u8
}
