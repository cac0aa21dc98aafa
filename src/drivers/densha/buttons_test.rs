use std::collections::HashSet;

use crate::drivers::densha::{
    buttons::{remap, shinkansen_buttons, type2_buttons, Button, ButtonState},
    driver::ModelVariant,
};

fn pressed(buttons: &[Button]) -> ButtonState {
    let mut state = ButtonState::default();
    for button in buttons {
        state.set(*button, true);
    }
    state
}

#[test]
fn test_button_state() {
    let mut state = ButtonState::default();
    state.set(Button::A, true);
    state.set(Button::Start, true);
    assert!(state.is_pressed(Button::A));
    assert!(state.is_pressed(Button::Start));
    assert!(!state.is_pressed(Button::B));
    assert_eq!(state.bits(), 0b0010_0010);

    state.set(Button::A, false);
    assert_eq!(state.bits(), 0b0010_0000);

    assert_eq!(ButtonState::from_bits(0xFF).bits(), 0b0011_1111);
}

#[test]
fn test_type2_buttons() {
    for button in Button::ALL {
        assert_eq!(type2_buttons(pressed(&[button])), button.mask());
    }
}

#[test]
fn test_shinkansen_buttons() {
    assert_eq!(shinkansen_buttons(pressed(&[Button::D])), 0b0000_0001);
    assert_eq!(shinkansen_buttons(pressed(&[Button::C])), 0b0000_0010);
    assert_eq!(shinkansen_buttons(pressed(&[Button::B])), 0b0000_0100);
    assert_eq!(shinkansen_buttons(pressed(&[Button::A])), 0b0000_1000);
    assert_eq!(shinkansen_buttons(pressed(&[Button::Select])), 0b0001_0000);
    assert_eq!(shinkansen_buttons(pressed(&[Button::Start])), 0b0010_0000);
    assert_eq!(shinkansen_buttons(pressed(&Button::ALL)), 0b0011_1111);
}

#[test]
fn test_remap_is_bijective() {
    for model in ModelVariant::SUPPORTED {
        let outputs: HashSet<u8> = (0..=ButtonState::MASK)
            .filter_map(|bits| remap(model, ButtonState::from_bits(bits)))
            .collect();
        assert_eq!(
            outputs.len(),
            64,
            "{model} should map every combination uniquely"
        );
    }
    assert_eq!(remap(ModelVariant::Ryojouhen, ButtonState::default()), None);
}
