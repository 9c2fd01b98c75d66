//! The membership contract shared by every strategy.

/// Tests whether the 4-byte token at a buffer position belongs to the fixed
/// key set.
///
/// Implementations are immutable after construction and hold no interior
/// mutability, so a constructed matcher may be shared across threads freely.
/// For a fixed buffer, repeated calls at the same position always return the
/// same result.
pub trait Matcher {
    /// Test the token at `index` without bounds checking.
    ///
    /// # Safety
    ///
    /// `bytes` must hold at least 4 readable bytes at `index`. No length
    /// validation is performed.
    unsafe fn matches_unchecked(&self, bytes: &[u8], index: usize) -> bool;

    /// Test the token at `index`.
    ///
    /// # Panics
    ///
    /// If `bytes` holds less than 4 readable bytes at `index`.
    #[inline(always)]
    fn matches(&self, bytes: &[u8], index: usize) -> bool {
        assert!(bytes.len() >= 4);
        assert!(index <= bytes.len() - 4);
        unsafe { self.matches_unchecked(bytes, index) }
    }
}
