use std::error::Error;

use packed_struct::{PackedStruct, PrimitiveEnum};

use crate::drivers::densha::hid_report::{
    Direction, PackedShinkansenInputReport, PackedType2InputReport,
};

#[test]
fn test_hat_switch_all_combinations() {
    // (up, down, left, right) => hat value
    let expected = [
        ((false, false, false, false), 8),
        ((true, false, false, false), 0),
        ((false, true, false, false), 4),
        ((false, false, true, false), 6),
        ((false, false, false, true), 2),
        ((true, false, false, true), 1),
        ((false, true, false, true), 3),
        ((false, true, true, false), 5),
        ((true, false, true, false), 7),
        // Opposing directions fall through to the single direction checks
        ((true, true, false, false), 0),
        ((false, false, true, true), 2),
        ((true, true, true, false), 5),
        ((true, true, false, true), 1),
        ((true, false, true, true), 1),
        ((false, true, true, true), 3),
        ((true, true, true, true), 1),
    ];

    for ((up, down, left, right), value) in expected {
        let direction = Direction::from_dpad(up, down, left, right);
        assert_eq!(
            direction.to_primitive(),
            value,
            "up: {up}, down: {down}, left: {left}, right: {right}"
        );
        assert!(direction.to_primitive() <= 8);
    }
}

#[test]
fn test_reports_display() {
    let type2 = PackedType2InputReport::default();
    assert!(!format!("{type2}").is_empty());

    let shinkansen = PackedShinkansenInputReport {
        dpad: Direction::Up,
        ..Default::default()
    };
    assert!(!format!("{shinkansen}").is_empty());
}

#[test]
fn test_type2_report_layout() -> Result<(), Box<dyn Error>> {
    let report = PackedType2InputReport {
        brake: 0x79,
        power: 0x81,
        dpad: Direction::None,
        buttons: 0,
        ..Default::default()
    };
    assert_eq!(report.pack()?, [0x01, 0x79, 0x81, 0xFF, 0x08, 0x00]);

    let report = PackedType2InputReport {
        brake: 0xB9,
        power: 0x00,
        dpad: Direction::UpLeft,
        buttons: 0b0010_0001,
        ..Default::default()
    };
    assert_eq!(report.pack()?, [0x01, 0xB9, 0x00, 0xFF, 0x07, 0x21]);

    let unpacked = PackedType2InputReport::unpack(&[0x01, 0xB9, 0x00, 0xFF, 0x07, 0x21])?;
    assert_eq!(unpacked, report);

    Ok(())
}

#[test]
fn test_shinkansen_report_layout() -> Result<(), Box<dyn Error>> {
    let report = PackedShinkansenInputReport {
        brake: 0xFB,
        power: 0x12,
        dpad: Direction::Up,
        buttons: 0x08,
        ..Default::default()
    };
    assert_eq!(report.pack()?, [0xFB, 0x12, 0xFF, 0x00, 0x08, 0x00]);

    let report = PackedShinkansenInputReport::default();
    assert_eq!(report.pack()?, [0x00, 0x00, 0xFF, 0x08, 0x00, 0x00]);

    Ok(())
}
