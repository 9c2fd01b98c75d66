//! Direct-mapped minimal hash tables.
//!
//! A 16 slot table indexed by a multiplicative hash: `(key * multiplier)`
//! keeps the low 32 bits, the top 4 select the slot. The multiplier is tuned
//! so the 15 keys occupy 15 distinct slots; there are no collision chains.
//! Zero marks an empty slot, so zero is not a legal key.

use crate::error::{Error, Result};
use crate::keys;
use crate::kit;
use crate::matcher::Matcher;

/// Multiplier for native-order keys. Collision free for the key set as read
/// on little endian hosts.
pub const NATIVE_MULTIPLIER: u32 = 239_012;

/// Multiplier for canonical-order keys. Collision free on every host.
pub const CANONICAL_MULTIPLIER: u32 = 93_564;

const SLOTS: usize = 16;
const SLOT_SHIFT: u32 = 28;

/// A direct-mapped 16 slot perfect hash table over a fixed key set.
#[derive(Copy, Clone, Debug)]
pub struct PerfectTable {
    slots: [u32; SLOTS],
    multiplier: u32,
}

impl PerfectTable {
    /// Place `keys` into the table using `multiplier`.
    ///
    /// # Errors
    ///
    /// * [Error::ReservedKey] if a key is zero, the empty slot sentinel.
    /// * [Error::SlotCollision] if two keys map to the same slot, in which
    ///   case the multiplier is unsound for this key set.
    pub fn build(keys: &[u32], multiplier: u32) -> Result<Self> {
        let mut slots = [0u32; SLOTS];
        for &key in keys {
            if key == 0 {
                return Err(Error::ReservedKey);
            }
            let slot = index(multiplier, key);
            let existing = slots[slot];
            if existing != 0 {
                return Err(Error::SlotCollision { slot, existing, incoming: key });
            }
            tracing::trace!("key 0x{:08X} -> slot {}", key, slot);
            slots[slot] = key;
        }
        Ok(Self { slots, multiplier })
    }

    /// True iff the slot selected by `u` holds exactly `u`. An occupied slot
    /// holding a different key is a miss. Zero is never a member: without
    /// the guard a zero probe would compare equal to an empty slot sentinel.
    #[inline(always)]
    pub fn contains(&self, u: u32) -> bool {
        u != 0 && self.slots[index(self.multiplier, u)] == u
    }
}

#[inline(always)]
fn index(multiplier: u32, u: u32) -> usize {
    (u.wrapping_mul(multiplier) >> SLOT_SHIFT) as usize
}

/// Perfect-hash matcher over native-order keys.
///
/// Host-order dependent: the native key encodings and therefore the slot
/// layout differ between architectures, and [NATIVE_MULTIPLIER] is only
/// collision free for the little endian encodings. On big endian hosts
/// construction reports the collision. Intended for peak-performance
/// measurement on a known architecture; prefer [PortableTableMatcher]
/// otherwise.
#[derive(Copy, Clone, Debug)]
pub struct NativeTableMatcher {
    table: PerfectTable,
}

impl NativeTableMatcher {
    /// Build the table from the canonical key set.
    ///
    /// # Errors
    ///
    /// [Error::SlotCollision] where the host byte order breaks the slot
    /// layout, see the type docs.
    pub fn new() -> Result<Self> {
        PerfectTable::build(&keys::NATIVE_KEYS, NATIVE_MULTIPLIER).map(|table| Self { table })
    }
}

impl Matcher for NativeTableMatcher {
    #[inline(always)]
    unsafe fn matches_unchecked(&self, bytes: &[u8], index: usize) -> bool {
        self.table.contains(kit::load_ne_unchecked(bytes, index))
    }
}

/// Perfect-hash matcher over canonical-order keys.
///
/// Tokens are normalized to network order before hashing, the same step the
/// table applies when storing keys, so results are identical on every host.
#[derive(Copy, Clone, Debug)]
pub struct PortableTableMatcher {
    table: PerfectTable,
}

impl PortableTableMatcher {
    /// Build the table from the canonical key set.
    ///
    /// # Errors
    ///
    /// None in practice: [CANONICAL_MULTIPLIER] is collision free for the
    /// canonical encodings regardless of host byte order.
    pub fn new() -> Result<Self> {
        PerfectTable::build(&keys::CANONICAL_KEYS, CANONICAL_MULTIPLIER).map(|table| Self { table })
    }
}

impl Matcher for PortableTableMatcher {
    #[inline(always)]
    unsafe fn matches_unchecked(&self, bytes: &[u8], index: usize) -> bool {
        self.table.contains(kit::load_be_unchecked(bytes, index))
    }
}
