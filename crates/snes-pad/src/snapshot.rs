//! Two-byte pad samples and change detection

/// Number of bytes in a sample
pub const SNAPSHOT_BYTES: usize = 2;

/// One remapped sample of the controller, active-high
///
/// Byte 0 holds button bits 0..=7 (B, Y, Select, Start, Up, Down, Left,
/// Right), byte 1 holds bits 8..=15 (A, X, L, R, Home, then unused).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PinSnapshot(pub [u8; SNAPSHOT_BYTES]);

impl PinSnapshot {
    /// Nothing pressed, also what an unplugged pad reads as
    pub const RELEASED: PinSnapshot = PinSnapshot([0; SNAPSHOT_BYTES]);

    pub fn new(low: u8, high: u8) -> Self {
        Self([low, high])
    }

    /// Raw bytes as reported
    pub fn bytes(&self) -> [u8; SNAPSHOT_BYTES] {
        self.0
    }

    /// Little-endian packing of both bytes into the 16-bit button mask
    pub fn buttons(&self) -> u16 {
        u16::from_le_bytes(self.0)
    }
}

/// Whether `current` differs from what was last handed to the host
pub fn changed(current: &PinSnapshot, last_reported: &PinSnapshot) -> bool {
    current != last_reported
}
