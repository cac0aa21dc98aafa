use std::fmt::Display;

use super::{buttons::Button, driver::ModelVariant};

/// Bindable controls of a Densha controller. The discriminant is the stable
/// bind index used by hosts to get and set control values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Binding {
    Power = 0,
    Brake = 1,
    HatUp = 2,
    HatRight = 3,
    HatDown = 4,
    HatLeft = 5,
    // Buttons are ordered the way the Type 2 controller sends them
    ButtonB = 6,
    ButtonA = 7,
    ButtonC = 8,
    ButtonD = 9,
    Select = 10,
    Start = 11,
}

impl Binding {
    /// Number of bind indices
    pub const COUNT: u32 = 12;

    /// Returns the binding at the given bind index, if any
    pub fn from_index(index: u32) -> Option<Self> {
        let binding = match index {
            0 => Self::Power,
            1 => Self::Brake,
            2 => Self::HatUp,
            3 => Self::HatRight,
            4 => Self::HatDown,
            5 => Self::HatLeft,
            6 => Self::ButtonB,
            7 => Self::ButtonA,
            8 => Self::ButtonC,
            9 => Self::ButtonD,
            10 => Self::Select,
            11 => Self::Start,
            _ => return None,
        };
        Some(binding)
    }

    pub fn index(&self) -> u32 {
        *self as u32
    }

    /// Returns the logical button for button bindings
    pub fn button(&self) -> Option<Button> {
        match self {
            Self::ButtonB => Some(Button::B),
            Self::ButtonA => Some(Button::A),
            Self::ButtonC => Some(Button::C),
            Self::ButtonD => Some(Button::D),
            Self::Select => Some(Button::Select),
            Self::Start => Some(Button::Start),
            _ => None,
        }
    }

    /// Look up a binding by its identifier (e.g. "Power" or "Up")
    pub fn from_name(name: &str) -> Option<Self> {
        COMMON_BINDINGS
            .iter()
            .find(|info| info.name.eq_ignore_ascii_case(name))
            .map(|info| info.binding)
    }
}

impl Display for Binding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = COMMON_BINDINGS
            .iter()
            .find(|info| info.binding == *self)
            .map(|info| info.name)
            .unwrap_or("Unknown");
        write!(f, "{name}")
    }
}

/// Whether a binding is an analog axis or a digital button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BindingKind {
    Axis,
    Button,
}

impl Display for BindingKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let value = match self {
            BindingKind::Axis => "axis",
            BindingKind::Button => "button",
        };
        write!(f, "{}", value)
    }
}

/// Generic host input a binding defaults to when automatically mapped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenericBinding {
    LeftStickDown,
    LeftStickUp,
    DPadUp,
    DPadDown,
    DPadLeft,
    DPadRight,
    Square,
    Cross,
    Circle,
    Triangle,
    Select,
    Start,
}

/// Static description of a binding used by hosts to build their binding UI
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BindingInfo {
    /// Stable identifier
    pub name: &'static str,
    pub display_name: &'static str,
    /// Icon hint for the host UI
    pub icon: &'static str,
    pub kind: BindingKind,
    pub binding: Binding,
    pub generic: GenericBinding,
}

impl BindingInfo {
    const fn new(
        name: &'static str,
        display_name: &'static str,
        icon: &'static str,
        kind: BindingKind,
        binding: Binding,
        generic: GenericBinding,
    ) -> Self {
        Self {
            name,
            display_name,
            icon,
            kind,
            binding,
            generic,
        }
    }

    pub fn bind_index(&self) -> u32 {
        self.binding.index()
    }
}

/// Bindings shared by the Type 2 and Shinkansen controllers, in display order
pub static COMMON_BINDINGS: [BindingInfo; 12] = [
    BindingInfo::new(
        "Power",
        "Power",
        "left_analog_down",
        BindingKind::Axis,
        Binding::Power,
        GenericBinding::LeftStickDown,
    ),
    BindingInfo::new(
        "Brake",
        "Brake",
        "left_analog_up",
        BindingKind::Axis,
        Binding::Brake,
        GenericBinding::LeftStickUp,
    ),
    BindingInfo::new(
        "Up",
        "D-Pad Up",
        "dpad_up",
        BindingKind::Button,
        Binding::HatUp,
        GenericBinding::DPadUp,
    ),
    BindingInfo::new(
        "Down",
        "D-Pad Down",
        "dpad_down",
        BindingKind::Button,
        Binding::HatDown,
        GenericBinding::DPadDown,
    ),
    BindingInfo::new(
        "Left",
        "D-Pad Left",
        "dpad_left",
        BindingKind::Button,
        Binding::HatLeft,
        GenericBinding::DPadLeft,
    ),
    BindingInfo::new(
        "Right",
        "D-Pad Right",
        "dpad_right",
        BindingKind::Button,
        Binding::HatRight,
        GenericBinding::DPadRight,
    ),
    BindingInfo::new(
        "A",
        "A Button",
        "key_a",
        BindingKind::Button,
        Binding::ButtonA,
        GenericBinding::Square,
    ),
    BindingInfo::new(
        "B",
        "B Button",
        "key_b",
        BindingKind::Button,
        Binding::ButtonB,
        GenericBinding::Cross,
    ),
    BindingInfo::new(
        "C",
        "C Button",
        "key_c",
        BindingKind::Button,
        Binding::ButtonC,
        GenericBinding::Circle,
    ),
    BindingInfo::new(
        "D",
        "D Button",
        "key_d",
        BindingKind::Button,
        Binding::ButtonD,
        GenericBinding::Triangle,
    ),
    BindingInfo::new(
        "Select",
        "Select",
        "select_share",
        BindingKind::Button,
        Binding::Select,
        GenericBinding::Select,
    ),
    BindingInfo::new(
        "Start",
        "Start",
        "start",
        BindingKind::Button,
        Binding::Start,
        GenericBinding::Start,
    ),
];

/// Returns the binding descriptors for the given model. Models that cannot
/// be emulated have no bindings.
pub fn bindings(model: ModelVariant) -> &'static [BindingInfo] {
    match model {
        ModelVariant::Type2 | ModelVariant::Shinkansen => &COMMON_BINDINGS,
        ModelVariant::Ryojouhen => &[],
    }
}
