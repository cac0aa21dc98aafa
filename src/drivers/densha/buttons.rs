use super::driver::ModelVariant;

/// Logical buttons found on every Densha controller. The discriminant is the
/// bit each button occupies in [ButtonState], which matches the order the
/// Type 2 controller sends them in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Button {
    B = 0,
    A = 1,
    C = 2,
    D = 3,
    Select = 4,
    Start = 5,
}

impl Button {
    pub const ALL: [Button; 6] = [
        Button::B,
        Button::A,
        Button::C,
        Button::D,
        Button::Select,
        Button::Start,
    ];

    /// Bit mask of this button in [ButtonState]
    pub const fn mask(&self) -> u8 {
        1 << (*self as u8)
    }
}

/// Active-high set of pressed buttons. Only the lower six bits are used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ButtonState(u8);

impl ButtonState {
    /// Mask of all bits that map to a logical button
    pub const MASK: u8 = 0b0011_1111;

    pub fn from_bits(bits: u8) -> Self {
        Self(bits & Self::MASK)
    }

    pub fn bits(&self) -> u8 {
        self.0
    }

    pub fn is_pressed(&self, button: Button) -> bool {
        self.0 & button.mask() != 0
    }

    pub fn set(&mut self, button: Button, pressed: bool) {
        if pressed {
            self.0 |= button.mask();
        } else {
            self.0 &= !button.mask();
        }
    }

    fn masked(&self, button: Button) -> u8 {
        self.0 & button.mask()
    }
}

/// Type 2 reports buttons in logical order.
pub fn type2_buttons(buttons: ButtonState) -> u8 {
    buttons.bits()
}

/// Shinkansen reports A/B in bits 2-3 and C/D swapped into bits 0-1, with
/// Select/Start left in place.
pub fn shinkansen_buttons(buttons: ButtonState) -> u8 {
    let ab = buttons.masked(Button::A) | buttons.masked(Button::B);
    let cd = (buttons.masked(Button::C) << 1) | (buttons.masked(Button::D) >> 1);
    let ss = buttons.masked(Button::Start) | buttons.masked(Button::Select);
    (ab << 2) | (cd >> 2) | ss
}

/// Remap the logical button state into the wire byte of the given model.
/// Returns [None] for models without a known button layout.
pub fn remap(model: ModelVariant, buttons: ButtonState) -> Option<u8> {
    match model {
        ModelVariant::Type2 => Some(type2_buttons(buttons)),
        ModelVariant::Shinkansen => Some(shinkansen_buttons(buttons)),
        ModelVariant::Ryojouhen => None,
    }
}
