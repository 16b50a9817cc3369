//! Blocked-cell set

use super::MAX_CELLS;

const WORDS: usize = MAX_CELLS / 64;

/// One bit per cell index, enough for the largest 16x16 board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Bitboard {
    bits: [u64; WORDS],
}

impl Bitboard {
    pub const fn new() -> Self {
        Self { bits: [0; WORDS] }
    }

    #[inline]
    pub fn set(&mut self, idx: usize) {
        debug_assert!(idx < MAX_CELLS);
        self.bits[idx / 64] |= 1u64 << (idx % 64);
    }

    #[inline]
    pub fn get(&self, idx: usize) -> bool {
        debug_assert!(idx < MAX_CELLS);
        (self.bits[idx / 64] >> (idx % 64)) & 1 == 1
    }

    /// Number of blocked cells
    #[inline]
    pub fn count(&self) -> u32 {
        self.bits.iter().map(|w| w.count_ones()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_get_across_words() {
        let mut bb = Bitboard::new();
        assert_eq!(bb.count(), 0);

        for idx in [0, 63, 64, 255] {
            bb.set(idx);
        }
        assert!(bb.get(0) && bb.get(63) && bb.get(64) && bb.get(255));
        assert!(!bb.get(1) && !bb.get(128));
        assert_eq!(bb.count(), 4);

        bb.set(64);
        assert_eq!(bb.count(), 4);
    }
}
