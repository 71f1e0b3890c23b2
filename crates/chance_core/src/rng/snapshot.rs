//! Generator state snapshots.

/// Opaque copy of a generator's complete state.
///
/// A snapshot is a pure value: it holds no reference to the generator it
/// was taken from, never changes once captured, and restoring it yields a
/// generator whose future output is identical to the original's at the
/// moment of capture.
///
/// # Example
///
/// ```rust
/// use chance_core::rng::{BitSource, Chance};
///
/// let mut rng = Chance::from_seed(7);
/// rng.next_u64();
/// let snapshot = rng.snapshot();
///
/// let expected = rng.next_u64();
/// let mut restored = Chance::from_snapshot(snapshot);
/// assert_eq!(restored.next_u64(), expected);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Snapshot {
    counter: u64,
    key: u64,
}

impl Snapshot {
    pub(crate) fn new(counter: u64, key: u64) -> Self {
        Self { counter, key }
    }

    /// Number of draws taken since the generator was seeded.
    pub fn draws(&self) -> u64 {
        self.counter
    }

    pub(crate) fn counter(&self) -> u64 {
        self.counter
    }

    pub(crate) fn key(&self) -> u64 {
        self.key
    }

    /// Encodes the snapshot as 16 little-endian bytes.
    pub fn to_bytes(&self) -> [u8; 16] {
        let mut bytes = [0u8; 16];
        bytes[..8].copy_from_slice(&self.counter.to_le_bytes());
        bytes[8..].copy_from_slice(&self.key.to_le_bytes());
        bytes
    }

    /// Decodes a snapshot produced by [`Snapshot::to_bytes`].
    pub fn from_bytes(bytes: [u8; 16]) -> Self {
        let mut counter = [0u8; 8];
        let mut key = [0u8; 8];
        counter.copy_from_slice(&bytes[..8]);
        key.copy_from_slice(&bytes[8..]);
        Self {
            counter: u64::from_le_bytes(counter),
            key: u64::from_le_bytes(key),
        }
    }
}
