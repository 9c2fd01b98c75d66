//! Lane-parallel compare strategies.
//!
//! The token is broadcast across every lane of a wide register and compared
//! against vector constants that pack the keys in groups. Unused trailing
//! lanes repeat the last real key; a duplicate of a real key cannot produce a
//! false positive against a different key. Two aggregation policies exist:
//! early exit after each packed compare, and a single OR-reduction over all
//! groups. Both return the same boolean for every input.
//!
//! SSE2 is an x86_64 baseline feature and compiles unconditionally there;
//! AVX2 is detected at construction. Other architectures fall back to a
//! scalar scan with identical results.

#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::*;

use crate::keys::NATIVE_KEYS;
use crate::kit;
use crate::matcher::Matcher;

// 15 keys packed into 4-lane groups, last lane padded with a duplicate.
#[cfg(target_arch = "x86_64")]
const GROUPS_X4: [[u32; 4]; 4] = [
    [NATIVE_KEYS[0], NATIVE_KEYS[1], NATIVE_KEYS[2], NATIVE_KEYS[3]],
    [NATIVE_KEYS[4], NATIVE_KEYS[5], NATIVE_KEYS[6], NATIVE_KEYS[7]],
    [NATIVE_KEYS[8], NATIVE_KEYS[9], NATIVE_KEYS[10], NATIVE_KEYS[11]],
    [NATIVE_KEYS[12], NATIVE_KEYS[13], NATIVE_KEYS[14], NATIVE_KEYS[14]],
];

// The same keys in 8-lane groups.
#[cfg(target_arch = "x86_64")]
const GROUPS_X8: [[u32; 8]; 2] = [
    [
        NATIVE_KEYS[0],
        NATIVE_KEYS[1],
        NATIVE_KEYS[2],
        NATIVE_KEYS[3],
        NATIVE_KEYS[4],
        NATIVE_KEYS[5],
        NATIVE_KEYS[6],
        NATIVE_KEYS[7],
    ],
    [
        NATIVE_KEYS[8],
        NATIVE_KEYS[9],
        NATIVE_KEYS[10],
        NATIVE_KEYS[11],
        NATIVE_KEYS[12],
        NATIVE_KEYS[13],
        NATIVE_KEYS[14],
        NATIVE_KEYS[14],
    ],
];

/// 128-bit lane-parallel compare with per-group early exit.
#[derive(Copy, Clone, Debug, Default)]
pub struct SseMatcher;

impl Matcher for SseMatcher {
    #[inline(always)]
    unsafe fn matches_unchecked(&self, bytes: &[u8], index: usize) -> bool {
        let v = kit::load_ne_unchecked(bytes, index);
        #[cfg(target_arch = "x86_64")]
        {
            any_eq_x4(v)
        }
        #[cfg(not(target_arch = "x86_64"))]
        {
            any_eq_scalar(v)
        }
    }
}

/// 128-bit lane-parallel compare with a single OR-reduction over all groups.
/// Boolean-equivalent to [SseMatcher]; only the latency profile differs.
#[derive(Copy, Clone, Debug, Default)]
pub struct SseReduceMatcher;

impl Matcher for SseReduceMatcher {
    #[inline(always)]
    unsafe fn matches_unchecked(&self, bytes: &[u8], index: usize) -> bool {
        let v = kit::load_ne_unchecked(bytes, index);
        #[cfg(target_arch = "x86_64")]
        {
            or_eq_x4(v)
        }
        #[cfg(not(target_arch = "x86_64"))]
        {
            any_eq_scalar(v)
        }
    }
}

/// 256-bit lane-parallel compare with OR-reduction. AVX2 availability is
/// captured once at construction; hosts without it use the scalar scan.
#[derive(Copy, Clone, Debug)]
pub struct Avx2Matcher {
    avx2: bool,
}

impl Avx2Matcher {
    /// Build the matcher, probing AVX2 support.
    pub fn new() -> Self {
        #[cfg(target_arch = "x86_64")]
        let avx2 = is_x86_feature_detected!("avx2");
        #[cfg(not(target_arch = "x86_64"))]
        let avx2 = false;
        Self { avx2 }
    }
}

impl Default for Avx2Matcher {
    fn default() -> Self {
        Self::new()
    }
}

impl Matcher for Avx2Matcher {
    #[inline(always)]
    unsafe fn matches_unchecked(&self, bytes: &[u8], index: usize) -> bool {
        let v = kit::load_ne_unchecked(bytes, index);
        #[cfg(target_arch = "x86_64")]
        {
            if self.avx2 {
                return any_eq_x8(v);
            }
        }
        any_eq_scalar(v)
    }
}

#[cfg(target_arch = "x86_64")]
#[inline(always)]
unsafe fn any_eq_x4(v: u32) -> bool {
    let w = _mm_set1_epi32(v as i32);
    for group in GROUPS_X4.iter() {
        let k = _mm_loadu_si128(group.as_ptr().cast::<__m128i>());
        if _mm_movemask_epi8(_mm_cmpeq_epi32(w, k)) != 0 {
            return true;
        }
    }
    false
}

#[cfg(target_arch = "x86_64")]
#[inline(always)]
unsafe fn or_eq_x4(v: u32) -> bool {
    let w = _mm_set1_epi32(v as i32);
    let mut d = _mm_setzero_si128();
    for group in GROUPS_X4.iter() {
        let k = _mm_loadu_si128(group.as_ptr().cast::<__m128i>());
        d = _mm_or_si128(d, _mm_cmpeq_epi32(w, k));
    }
    _mm_movemask_epi8(d) != 0
}

#[cfg(target_arch = "x86_64")]
#[target_feature(enable = "avx2")]
unsafe fn any_eq_x8(v: u32) -> bool {
    let w = _mm256_set1_epi32(v as i32);
    let mut d = _mm256_setzero_si256();
    for group in GROUPS_X8.iter() {
        let k = _mm256_loadu_si256(group.as_ptr().cast::<__m256i>());
        d = _mm256_or_si256(d, _mm256_cmpeq_epi32(w, k));
    }
    _mm256_movemask_epi8(d) != 0
}

#[allow(dead_code)]
#[inline(always)]
fn any_eq_scalar(v: u32) -> bool {
    NATIVE_KEYS.iter().any(|&key| key == v)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keys::KEYWORDS;
    use crate::scan::ScanMatcher;
    use crate::test_utils::Rng;

    fn agree(bytes: &[u8]) {
        let scan = ScanMatcher::new();
        let expect = scan.matches(bytes, 0);
        assert_eq!(SseMatcher::default().matches(bytes, 0), expect);
        assert_eq!(SseReduceMatcher::default().matches(bytes, 0), expect);
        assert_eq!(Avx2Matcher::new().matches(bytes, 0), expect);
    }

    #[test]
    fn keywords_match() {
        for &keyword in KEYWORDS.iter() {
            agree(&keyword);
        }
    }

    #[test]
    fn key_neighbors_reject() {
        for &key in NATIVE_KEYS.iter() {
            agree(&key.wrapping_add(1).to_ne_bytes());
            agree(&key.wrapping_sub(1).to_ne_bytes());
        }
    }

    #[test]
    fn padded_lane_is_harmless() {
        // The duplicate padding key must behave exactly like its original.
        agree(&NATIVE_KEYS[14].to_ne_bytes());
    }

    #[test]
    fn random_sample_agrees_with_scalar() {
        let mut rng = Rng::new(0x1D87_2B41);
        for _ in 0..100_000 {
            agree(&rng.gen().to_ne_bytes());
        }
    }
}
