use thiserror::Error as ThisError;

/// Construction Result.
pub type Result<T> = std::result::Result<T, Error>;

/// Construction-time errors.
///
/// Matching itself never fails; the only failure mode is building a perfect
/// hash table whose multiplier cannot place every key into a distinct slot.
/// Surfacing this as a typed error lets the caller log, fall back to another
/// strategy or abort deliberately.
#[derive(Debug, ThisError)]
#[non_exhaustive]
pub enum Error {
    /// Two keys map to the same table slot. The table has no collision
    /// chains, so the multiplier is unsound for this key set.
    #[error("slot {slot} collision: 0x{existing:08X} and 0x{incoming:08X}")]
    SlotCollision {
        /// The contested slot index.
        slot: usize,
        /// The key already stored in the slot.
        existing: u32,
        /// The key that failed to insert.
        incoming: u32,
    },
    /// Zero is reserved as the empty slot sentinel and cannot be a key.
    #[error("key 0x00000000 is reserved as the empty slot sentinel")]
    ReservedKey,
}
