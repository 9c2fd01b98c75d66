//! Unaligned 4-byte token loads.

/// Load the token at `index` in native order.
///
/// # Panics
///
/// If `bytes` holds less than 4 readable bytes at `index`.
#[allow(dead_code)]
#[inline(always)]
pub fn load_ne(bytes: &[u8], index: usize) -> u32 {
    assert!(bytes.len() >= 4);
    assert!(index <= bytes.len() - 4);
    unsafe { load_ne_unchecked(bytes, index) }
}

/// Load the token at `index` in native order without bounds checking.
///
/// # Safety
///
/// `bytes` must hold at least 4 readable bytes at `index`.
#[inline(always)]
pub unsafe fn load_ne_unchecked(bytes: &[u8], index: usize) -> u32 {
    debug_assert!(bytes.len() >= 4);
    debug_assert!(index <= bytes.len() - 4);
    bytes.as_ptr().add(index).cast::<u32>().read_unaligned()
}

/// Load the token at `index` normalized to canonical (network) order.
/// The normalization is the single byte-order step shared by insertion and
/// lookup in the portable strategies.
///
/// # Panics
///
/// If `bytes` holds less than 4 readable bytes at `index`.
#[allow(dead_code)]
#[inline(always)]
pub fn load_be(bytes: &[u8], index: usize) -> u32 {
    assert!(bytes.len() >= 4);
    assert!(index <= bytes.len() - 4);
    unsafe { load_be_unchecked(bytes, index) }
}

/// Load the token at `index` normalized to canonical (network) order, without
/// bounds checking.
///
/// # Safety
///
/// `bytes` must hold at least 4 readable bytes at `index`.
#[inline(always)]
pub unsafe fn load_be_unchecked(bytes: &[u8], index: usize) -> u32 {
    u32::from_be(load_ne_unchecked(bytes, index))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_ne_matches_from_ne_bytes() {
        let bytes = b"xxPUBLxx";
        assert_eq!(load_ne(bytes, 2), u32::from_ne_bytes(*b"PUBL"));
    }

    #[test]
    fn load_be_is_host_independent() {
        let bytes = b"SIP/2.0";
        assert_eq!(load_be(bytes, 0), 0x5349_502F);
        assert_eq!(load_be(bytes, 1), 0x4950_2F32);
    }

    #[test]
    fn load_at_trailing_edge() {
        let bytes = [0x01, 0x02, 0x03, 0x04, 0x05];
        assert_eq!(load_be(&bytes, 1), 0x0203_0405);
    }
}
