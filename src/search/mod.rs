//! Comparison-based strategies: sorted binary search and a hand-balanced
//! decision tree.

use crate::keys::{self, fold_be, KEY_COUNT};
use crate::kit;
use crate::matcher::Matcher;

/// Binary search over the ascending-sorted key set. The sort runs exactly
/// once at construction; the array is immutable thereafter.
#[derive(Copy, Clone, Debug)]
pub struct BinarySearchMatcher {
    keys: [u32; KEY_COUNT],
}

impl BinarySearchMatcher {
    /// Build the matcher, sorting the canonical key set.
    pub fn new() -> Self {
        let mut keys = keys::NATIVE_KEYS;
        keys.sort_unstable();
        Self { keys }
    }
}

impl Default for BinarySearchMatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl Matcher for BinarySearchMatcher {
    #[inline(always)]
    unsafe fn matches_unchecked(&self, bytes: &[u8], index: usize) -> bool {
        let v = kit::load_ne_unchecked(bytes, index);
        self.keys.binary_search(&v).is_ok()
    }
}

const ACK: u32 = fold_be(*b"ACK ");
const BYE: u32 = fold_be(*b"BYE ");
const CANC: u32 = fold_be(*b"CANC");
const INFO: u32 = fold_be(*b"INFO");
const INVI: u32 = fold_be(*b"INVI");
const MESS: u32 = fold_be(*b"MESS");
const NOTI: u32 = fold_be(*b"NOTI");
const OPTI: u32 = fold_be(*b"OPTI");
const PRAC: u32 = fold_be(*b"PRAC");
const PUBL: u32 = fold_be(*b"PUBL");
const REFE: u32 = fold_be(*b"REFE");
const REGI: u32 = fold_be(*b"REGI");
const SIP: u32 = fold_be(*b"SIP/");
const SUBS: u32 = fold_be(*b"SUBS");
const UPDA: u32 = fold_be(*b"UPDA");

/// Hand-balanced binary decision tree over the 15 keys in canonical order.
///
/// Semantically equivalent to [BinarySearchMatcher] for every 32-bit input,
/// expressed as nested conditional branches rather than index arithmetic.
/// Canonical-order pivots keep the literal tree host independent.
#[derive(Copy, Clone, Debug, Default)]
pub struct DecisionTreeMatcher;

impl Matcher for DecisionTreeMatcher {
    #[inline(always)]
    unsafe fn matches_unchecked(&self, bytes: &[u8], index: usize) -> bool {
        tree(kit::load_be_unchecked(bytes, index))
    }
}

// Pivots are the midpoints of the lexicographically sorted key list:
// ACK BYE CANC INFO INVI MESS NOTI OPTI PRAC PUBL REFE REGI SIP/ SUBS UPDA.
#[inline(always)]
fn tree(v: u32) -> bool {
    if v == OPTI {
        true
    } else if v < OPTI {
        if v == INFO {
            true
        } else if v < INFO {
            if v == BYE {
                true
            } else if v < BYE {
                v == ACK
            } else {
                v == CANC
            }
        } else if v == MESS {
            true
        } else if v < MESS {
            v == INVI
        } else {
            v == NOTI
        }
    } else if v == REGI {
        true
    } else if v < REGI {
        if v == PUBL {
            true
        } else if v < PUBL {
            v == PRAC
        } else {
            v == REFE
        }
    } else if v == SUBS {
        true
    } else if v < SUBS {
        v == SIP
    } else {
        v == UPDA
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::Rng;

    #[test]
    fn keywords_match() {
        let search = BinarySearchMatcher::new();
        let tree = DecisionTreeMatcher::default();
        for &keyword in keys::KEYWORDS.iter() {
            assert!(search.matches(&keyword, 0));
            assert!(tree.matches(&keyword, 0));
        }
    }

    #[test]
    fn non_keywords_reject() {
        let search = BinarySearchMatcher::new();
        let tree = DecisionTreeMatcher::default();
        for bytes in [b"ABCD", b"OPTJ", b"\x00\x00\x00\x00", b"\xFF\xFF\xFF\xFF"].iter() {
            assert!(!search.matches(*bytes, 0));
            assert!(!tree.matches(*bytes, 0));
        }
    }

    #[test]
    fn tree_partitions_key_neighborhood() {
        // The tree must partition the full input space, not just hit the
        // keys. Probe every value adjacent to a sorted key boundary.
        for &key in keys::CANONICAL_KEYS.iter() {
            assert!(tree(key));
            assert!(!tree(key.wrapping_add(1)));
            assert!(!tree(key.wrapping_sub(1)));
        }
    }

    #[test]
    fn tree_agrees_with_binary_search() {
        let search = BinarySearchMatcher::new();
        let tree = DecisionTreeMatcher::default();
        let mut rng = Rng::new(0xB5A2_71E4);
        for _ in 0..100_000 {
            let bytes = rng.gen().to_be_bytes();
            assert_eq!(search.matches(&bytes, 0), tree.matches(&bytes, 0));
        }
    }
}
