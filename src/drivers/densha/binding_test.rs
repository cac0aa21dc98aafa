use std::collections::HashSet;

use crate::drivers::densha::{
    binding::{bindings, Binding, BindingKind, COMMON_BINDINGS},
    driver::ModelVariant,
};

#[test]
fn test_bind_indices() {
    for index in 0..Binding::COUNT {
        let binding = Binding::from_index(index).expect("index should be valid");
        assert_eq!(binding.index(), index);
    }
    assert_eq!(Binding::from_index(Binding::COUNT), None);
    assert_eq!(Binding::from_index(u32::MAX), None);

    assert_eq!(Binding::Power.index(), 0);
    assert_eq!(Binding::HatRight.index(), 3);
    assert_eq!(Binding::ButtonB.index(), 6);
    assert_eq!(Binding::Start.index(), 11);
}

#[test]
fn test_binding_table() {
    let indices: HashSet<u32> = COMMON_BINDINGS.iter().map(|b| b.bind_index()).collect();
    assert_eq!(indices.len(), Binding::COUNT as usize);

    for info in COMMON_BINDINGS.iter() {
        let expected = match info.binding {
            Binding::Power | Binding::Brake => BindingKind::Axis,
            _ => BindingKind::Button,
        };
        assert_eq!(info.kind, expected, "{} kind", info.name);
    }

    assert_eq!(bindings(ModelVariant::Type2).len(), 12);
    assert_eq!(bindings(ModelVariant::Shinkansen).len(), 12);
    assert!(bindings(ModelVariant::Ryojouhen).is_empty());
}

#[test]
fn test_binding_names() {
    assert_eq!(Binding::from_name("power"), Some(Binding::Power));
    assert_eq!(Binding::from_name("Up"), Some(Binding::HatUp));
    assert_eq!(Binding::from_name("select"), Some(Binding::Select));
    assert_eq!(Binding::from_name("horn"), None);
    assert_eq!(Binding::HatLeft.to_string(), "Left");
}
