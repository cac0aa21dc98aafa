use crate::drivers::densha::snapshot::{FreezeError, Snapshot, SNAPSHOT_MARKER};

#[test]
fn test_freeze_layout() {
    let snapshot = Snapshot {
        power: 0x12,
        brake: 0xF0,
    };
    let mut buf = vec![0xAA];
    snapshot.freeze(&mut buf);

    assert_eq!(buf.len(), 1 + Snapshot::SIZE);
    let marker = &buf[1..1 + SNAPSHOT_MARKER.len()];
    assert_eq!(marker, SNAPSHOT_MARKER.as_bytes());
    assert_eq!(&buf[buf.len() - 2..], &[0x12, 0xF0]);
}

#[test]
fn test_thaw() {
    let snapshot = Snapshot {
        power: 0x80,
        brake: 0x01,
    };
    let mut buf = Vec::new();
    snapshot.freeze(&mut buf);
    buf.extend_from_slice(b"next section");

    let (thawed, len) = Snapshot::thaw(&buf).expect("should thaw snapshot");
    assert_eq!(thawed, snapshot);
    assert_eq!(len, Snapshot::SIZE);
}

#[test]
fn test_thaw_errors() {
    assert_eq!(
        Snapshot::thaw(b"PadDevice\x00\x00\x00\x00\x00"),
        Err(FreezeError::MarkerMismatch)
    );

    let mut buf = Vec::new();
    Snapshot::default().freeze(&mut buf);
    buf.pop();
    assert_eq!(
        Snapshot::thaw(&buf),
        Err(FreezeError::Truncated {
            expected: Snapshot::SIZE,
            actual: Snapshot::SIZE - 1,
        })
    );

    assert_eq!(
        Snapshot::thaw(&[]),
        Err(FreezeError::Truncated {
            expected: Snapshot::SIZE,
            actual: 0,
        })
    );
}
