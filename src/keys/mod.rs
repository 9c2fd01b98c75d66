//! The canonical key set: 15 four-byte SIP keyword prefixes.
//!
//! Every matching strategy is built from this one list. Keys are encoded into
//! `u32` values through the explicit fold functions below rather than through
//! multi-character literals, so the encoding is portable and auditable.

/// Number of recognized keyword prefixes.
pub const KEY_COUNT: usize = 15;

/// The recognized 4-byte keyword prefixes, in declaration order.
pub const KEYWORDS: [[u8; 4]; KEY_COUNT] = [
    *b"SIP/", *b"INVI", *b"ACK ", *b"CANC", *b"BYE ", *b"PRAC", *b"REGI", *b"OPTI", *b"INFO",
    *b"UPDA", *b"SUBS", *b"NOTI", *b"MESS", *b"REFE", *b"PUBL",
];

/// The key set in native-order interpretation. Host dependent.
pub const NATIVE_KEYS: [u32; KEY_COUNT] = fold_keys_ne();

/// The key set in canonical (network) order interpretation. Host independent.
pub const CANONICAL_KEYS: [u32; KEY_COUNT] = fold_keys_be();

/// Fold 4 bytes, most significant first, into a canonical (network-order)
/// integer. `fold_be(*b"SIP/") == 0x5349_502F` on every host.
#[inline(always)]
pub const fn fold_be(bytes: [u8; 4]) -> u32 {
    (bytes[0] as u32) << 24 | (bytes[1] as u32) << 16 | (bytes[2] as u32) << 8 | bytes[3] as u32
}

/// Reinterpret 4 bytes directly as a host-order integer. The value differs
/// between little and big endian hosts; comparisons against tokens loaded the
/// same way are still exact.
#[inline(always)]
pub const fn fold_ne(bytes: [u8; 4]) -> u32 {
    u32::from_ne_bytes(bytes)
}

const fn fold_keys_ne() -> [u32; KEY_COUNT] {
    let mut keys = [0u32; KEY_COUNT];
    let mut i = 0;
    while i != KEY_COUNT {
        keys[i] = fold_ne(KEYWORDS[i]);
        i += 1;
    }
    keys
}

const fn fold_keys_be() -> [u32; KEY_COUNT] {
    let mut keys = [0u32; KEY_COUNT];
    let mut i = 0;
    while i != KEY_COUNT {
        keys[i] = fold_be(KEYWORDS[i]);
        i += 1;
    }
    keys
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fold_be_msb_first() {
        assert_eq!(fold_be(*b"SIP/"), 0x5349_502F);
        assert_eq!(fold_be(*b"PUBL"), 0x5055_424C);
        assert_eq!(fold_be([0x01, 0x02, 0x03, 0x04]), 0x0102_0304);
    }

    #[test]
    fn fold_ne_is_from_ne_bytes() {
        for &keyword in KEYWORDS.iter() {
            assert_eq!(fold_ne(keyword), u32::from_ne_bytes(keyword));
        }
    }

    #[test]
    fn keys_distinct_in_both_interpretations() {
        for (i, &a) in KEYWORDS.iter().enumerate() {
            for &b in KEYWORDS.iter().skip(i + 1) {
                assert_ne!(fold_ne(a), fold_ne(b));
                assert_ne!(fold_be(a), fold_be(b));
            }
        }
    }

    #[test]
    fn no_key_encodes_to_zero() {
        // Zero is the perfect table empty slot sentinel.
        for i in 0..KEY_COUNT {
            assert_ne!(NATIVE_KEYS[i], 0);
            assert_ne!(CANONICAL_KEYS[i], 0);
        }
    }
}
