//! Set-backed baselines: membership delegated to the standard associative
//! containers. These exist to compare the hand-rolled strategies against
//! general-purpose collections; answers are identical by contract.

use std::collections::{BTreeSet, HashSet};

use crate::keys;
use crate::kit;
use crate::matcher::Matcher;

/// Membership via a balanced-tree set with logarithmic lookup.
#[derive(Clone, Debug)]
pub struct OrderedSetMatcher {
    keys: BTreeSet<u32>,
}

impl OrderedSetMatcher {
    /// Build the matcher, inserting all keys once.
    pub fn new() -> Self {
        Self { keys: keys::NATIVE_KEYS.iter().copied().collect() }
    }
}

impl Default for OrderedSetMatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl Matcher for OrderedSetMatcher {
    #[inline(always)]
    unsafe fn matches_unchecked(&self, bytes: &[u8], index: usize) -> bool {
        self.keys.contains(&kit::load_ne_unchecked(bytes, index))
    }
}

/// Membership via a general-purpose hash set with amortized constant lookup.
#[derive(Clone, Debug)]
pub struct HashSetMatcher {
    keys: HashSet<u32>,
}

impl HashSetMatcher {
    /// Build the matcher, inserting all keys once.
    pub fn new() -> Self {
        Self { keys: keys::NATIVE_KEYS.iter().copied().collect() }
    }
}

impl Default for HashSetMatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl Matcher for HashSetMatcher {
    #[inline(always)]
    unsafe fn matches_unchecked(&self, bytes: &[u8], index: usize) -> bool {
        self.keys.contains(&kit::load_ne_unchecked(bytes, index))
    }
}
