//! Shared test helpers.

/// Deterministic xorshift random number generator.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Rng(u32);

impl Rng {
    /// `seed` must be non-zero.
    pub fn new(seed: u32) -> Self {
        assert_ne!(seed, 0);
        Self(seed)
    }

    /// Next value in the sequence.
    #[inline(always)]
    pub fn gen(&mut self) -> u32 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.0 = x;
        x
    }
}

impl Iterator for Rng {
    type Item = u32;

    #[inline(always)]
    fn next(&mut self) -> Option<Self::Item> {
        Some(self.gen())
    }
}
