//! Machine words used as storage granules.
//!
//! Bits are addressed from the most significant end of each word:
//! position `0` of a word is its highest bit and position `W::BITS - 1` its lowest.

use std::fmt::Debug;
use std::hash::Hash;

use num_traits::{PrimInt, Unsigned};

/// Unsigned integer type that backs a [`BitArray`](crate::BitArray).
pub trait Word: PrimInt + Unsigned + Debug + Hash + Default + 'static {
    /// The number of bits in a word.
    const BITS: usize;

    /// Returns the word with every bit set.
    #[inline(always)]
    fn ones() -> Self {
        Self::max_value()
    }

    /// Returns the singleton mask for in-word position `pos`.
    ///
    /// `pos` must be less than [`Self::BITS`].
    #[inline(always)]
    fn msb_mask(pos: usize) -> Self {
        Self::one() << (Self::BITS - 1 - pos)
    }

    /// Returns the mask covering positions `[pos, BITS)`, or zero if `pos >= BITS`.
    #[inline(always)]
    fn ones_from(pos: usize) -> Self {
        if pos >= Self::BITS {
            Self::zero()
        } else {
            Self::ones() >> pos
        }
    }

    /// Returns the mask covering positions `[start, end)`.
    #[inline(always)]
    fn range_mask(start: usize, end: usize) -> Self {
        Self::ones_from(start) & !Self::ones_from(end)
    }

    /// Returns the number of bits set.
    #[inline(always)]
    fn popcount(self) -> usize {
        self.count_ones() as usize
    }
}

macro_rules! impl_word {
    ($($word:ty),*) => {
        $(
            impl Word for $word {
                const BITS: usize = <$word>::BITS as usize;
            }
        )*
    };
}

impl_word!(u8, u16, u32, u64, u128, usize);

/// Returns the number of words needed to hold `bits` bits.
#[inline(always)]
pub const fn words_for(bits: usize, word_bits: usize) -> usize {
    bits.div_ceil(word_bits)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_msb_mask() {
        assert_eq!(u8::msb_mask(0), 0b1000_0000);
        assert_eq!(u8::msb_mask(7), 0b0000_0001);
        assert_eq!(u64::msb_mask(63), 1);
    }

    #[test]
    fn test_range_mask() {
        assert_eq!(u8::range_mask(0, 8), 0xff);
        assert_eq!(u8::range_mask(2, 5), 0b0011_1000);
        assert_eq!(u8::range_mask(3, 3), 0);
        assert_eq!(u32::ones_from(32), 0);
    }

    #[test]
    fn test_words_for() {
        assert_eq!(words_for(0, 64), 0);
        assert_eq!(words_for(1, 64), 1);
        assert_eq!(words_for(64, 64), 1);
        assert_eq!(words_for(65, 64), 2);
    }
}
