use thiserror::Error;

/// Marker that identifies the controller section of a save state
pub const SNAPSHOT_MARKER: &str = "MasconDevice";

/// Possible errors restoring a [Snapshot]
#[derive(Error, Debug, PartialEq, Eq)]
pub enum FreezeError {
    #[error("save state section marker does not match `MasconDevice`")]
    MarkerMismatch,
    #[error("save state section is truncated: expected {expected} bytes, got {actual}")]
    Truncated { expected: usize, actual: usize },
}

/// Persisted controller state. Only the lever positions are saved; the d-pad
/// and buttons are re-read from the host after a state is loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Snapshot {
    pub power: u8,
    pub brake: u8,
}

impl Snapshot {
    /// Size in bytes of a frozen snapshot, including the marker
    pub const SIZE: usize = SNAPSHOT_MARKER.len() + 2;

    /// Append the marker followed by the power and brake bytes to the given
    /// save state buffer.
    pub fn freeze(&self, buf: &mut Vec<u8>) {
        buf.extend_from_slice(SNAPSHOT_MARKER.as_bytes());
        buf.push(self.power);
        buf.push(self.brake);
    }

    /// Read a snapshot from the start of the given save state data. Returns
    /// the snapshot and the number of bytes consumed.
    pub fn thaw(data: &[u8]) -> Result<(Self, usize), FreezeError> {
        let marker = SNAPSHOT_MARKER.as_bytes();
        let Some(found) = data.get(..marker.len()) else {
            return Err(FreezeError::Truncated {
                expected: Self::SIZE,
                actual: data.len(),
            });
        };
        if found != marker {
            return Err(FreezeError::MarkerMismatch);
        }

        let Some(&[power, brake]) = data.get(marker.len()..Self::SIZE) else {
            return Err(FreezeError::Truncated {
                expected: Self::SIZE,
                actual: data.len(),
            });
        };

        Ok((Self { power, brake }, Self::SIZE))
    }
}
