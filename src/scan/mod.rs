//! Linear scan strategies.
//!
//! All three hold the keys in declaration order and short-circuit on the
//! first equality; they differ only in how the scan is expressed.

use crate::keys::{self, KEY_COUNT};
use crate::kit;
use crate::matcher::Matcher;

/// Linear scan over the key sequence with an explicit loop.
#[derive(Copy, Clone, Debug)]
pub struct ScanMatcher {
    keys: [u32; KEY_COUNT],
}

impl ScanMatcher {
    /// Build the matcher from the canonical key set.
    pub fn new() -> Self {
        Self { keys: keys::NATIVE_KEYS }
    }
}

impl Default for ScanMatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl Matcher for ScanMatcher {
    #[inline(always)]
    unsafe fn matches_unchecked(&self, bytes: &[u8], index: usize) -> bool {
        let v = kit::load_ne_unchecked(bytes, index);
        for &key in self.keys.iter() {
            if key == v {
                return true;
            }
        }
        false
    }
}

/// Linear scan expressed as an any-element-satisfies reduction. Same order
/// and short-circuit behavior as [ScanMatcher].
#[derive(Copy, Clone, Debug)]
pub struct IterScanMatcher {
    keys: [u32; KEY_COUNT],
}

impl IterScanMatcher {
    /// Build the matcher from the canonical key set.
    pub fn new() -> Self {
        Self { keys: keys::NATIVE_KEYS }
    }
}

impl Default for IterScanMatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl Matcher for IterScanMatcher {
    #[inline(always)]
    unsafe fn matches_unchecked(&self, bytes: &[u8], index: usize) -> bool {
        let v = kit::load_ne_unchecked(bytes, index);
        self.keys.iter().any(|&key| key == v)
    }
}

/// Fully unrolled linear scan: a flat sequence of equality checks with no
/// loop or indexing overhead. Search order and result are identical to
/// [ScanMatcher].
#[derive(Copy, Clone, Debug, Default)]
pub struct UnrolledMatcher;

impl Matcher for UnrolledMatcher {
    #[inline(always)]
    unsafe fn matches_unchecked(&self, bytes: &[u8], index: usize) -> bool {
        const K: [u32; KEY_COUNT] = keys::NATIVE_KEYS;
        let v = kit::load_ne_unchecked(bytes, index);
        if v == K[0] {
            return true;
        }
        if v == K[1] {
            return true;
        }
        if v == K[2] {
            return true;
        }
        if v == K[3] {
            return true;
        }
        if v == K[4] {
            return true;
        }
        if v == K[5] {
            return true;
        }
        if v == K[6] {
            return true;
        }
        if v == K[7] {
            return true;
        }
        if v == K[8] {
            return true;
        }
        if v == K[9] {
            return true;
        }
        if v == K[10] {
            return true;
        }
        if v == K[11] {
            return true;
        }
        if v == K[12] {
            return true;
        }
        if v == K[13] {
            return true;
        }
        v == K[14]
    }
}
