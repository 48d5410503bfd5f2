//! Bitwise combination, inversion, shifts and comparison of bit arrays.
//!
//! Every operation comes in two forms: a mutating one that works in place and
//! returns `Result<()>`, and a pure one that leaves the receiver untouched and
//! returns a new array.
//!
//! Two arrays of equal length always own the same number of words, so the
//! binary operations run over whole words. Tail bits may hold garbage
//! afterwards, which is never observable through indexed access.
use std::hash::{Hash, Hasher};

use crate::bit_array::BitArray;
use crate::error::{Error, Result};
use crate::word::Word;

impl<W: Word> BitArray<W> {
    fn check_operands(&self, other: &Self) -> Result<()> {
        if self.is_empty() {
            return Err(Error::invalid_argument("left bit array is empty"));
        }
        if other.is_empty() {
            return Err(Error::invalid_argument("right bit array is empty"));
        }
        if self.len() != other.len() {
            return Err(Error::SizeMismatch {
                left: self.len(),
                right: other.len(),
            });
        }
        Ok(())
    }

    fn zip_words_with<F>(&mut self, other: &Self, f: F) -> Result<()>
    where
        F: Fn(W, W) -> W,
    {
        self.check_operands(other)?;
        debug_assert_eq!(self.words.len(), other.words.len());
        for (a, &b) in self.words.iter_mut().zip(other.words.iter()) {
            *a = f(*a, b);
        }
        Ok(())
    }

    /// Replaces `self` with `self & other`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if either array is empty, or
    /// [`Error::SizeMismatch`] if the lengths differ.
    pub fn and_assign(&mut self, other: &Self) -> Result<()> {
        self.zip_words_with(other, |a, b| a & b)
    }

    /// Replaces `self` with `self | other`.
    ///
    /// # Errors
    ///
    /// Same as [`Self::and_assign()`].
    pub fn or_assign(&mut self, other: &Self) -> Result<()> {
        self.zip_words_with(other, |a, b| a | b)
    }

    /// Replaces `self` with `self ^ other`.
    ///
    /// # Errors
    ///
    /// Same as [`Self::and_assign()`].
    pub fn xor_assign(&mut self, other: &Self) -> Result<()> {
        self.zip_words_with(other, |a, b| a ^ b)
    }

    /// Returns `self & other`.
    ///
    /// # Examples
    ///
    /// ```
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// use packed_bits::BitArray;
    ///
    /// let a = BitArray::<u32>::with_bits(32, 0b101010);
    /// let b = BitArray::<u32>::with_bits(32, 0b111100);
    /// assert_eq!(a.and(&b)?, BitArray::with_bits(32, 0b101000));
    /// # Ok(())
    /// # }
    /// ```
    pub fn and(&self, other: &Self) -> Result<Self> {
        let mut out = self.clone();
        out.and_assign(other)?;
        Ok(out)
    }

    /// Returns `self | other`.
    pub fn or(&self, other: &Self) -> Result<Self> {
        let mut out = self.clone();
        out.or_assign(other)?;
        Ok(out)
    }

    /// Returns `self ^ other`.
    pub fn xor(&self, other: &Self) -> Result<Self> {
        let mut out = self.clone();
        out.xor_assign(other)?;
        Ok(out)
    }

    /// Returns the complement, with every word inverted.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if the array is empty.
    pub fn not(&self) -> Result<Self> {
        self.check_non_empty()?;
        Ok(Self::from_raw_parts(
            self.words.iter().map(|&w| !w).collect(),
            self.len(),
        ))
    }

    /// Moves the bit at `i` to `i - n` for every `i` in `[n, len)` and unsets
    /// `[len - n, len)`. Shifting by `len` or more unsets everything.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if the array is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// use packed_bits::BitArray;
    ///
    /// let mut bits: BitArray = [false, true, true, false, true].into_iter().collect();
    /// bits.shift_left(1)?;
    /// assert_eq!(bits.to_bit_string()?, "11010");
    /// # Ok(())
    /// # }
    /// ```
    pub fn shift_left(&mut self, n: usize) -> Result<()> {
        self.check_non_empty()?;
        if n >= self.len() {
            self.words.fill(W::zero());
            return Ok(());
        }
        if n == 0 {
            return Ok(());
        }
        // Sources lie at or beyond their destinations, so ascending order reads
        // each word before it is overwritten.
        self.clear_tail();
        let (wshift, bshift) = (n / W::BITS, n % W::BITS);
        for k in 0..self.words.len() {
            let hi = self.word_or_zero(k + wshift);
            self.words[k] = if bshift == 0 {
                hi
            } else {
                let lo = self.word_or_zero(k + wshift + 1);
                (hi << bshift) | (lo >> (W::BITS - bshift))
            };
        }
        Ok(())
    }

    /// Moves the bit at `i` to `i + n` for every `i` in `[0, len - n)` and
    /// unsets `[0, n)`. Shifting by `len` or more unsets everything.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if the array is empty.
    pub fn shift_right(&mut self, n: usize) -> Result<()> {
        self.check_non_empty()?;
        if n >= self.len() {
            self.words.fill(W::zero());
            return Ok(());
        }
        if n == 0 {
            return Ok(());
        }
        let (wshift, bshift) = (n / W::BITS, n % W::BITS);
        for k in (0..self.words.len()).rev() {
            let lo = k.checked_sub(wshift).map_or(W::zero(), |j| self.words[j]);
            self.words[k] = if bshift == 0 {
                lo
            } else {
                let hi = k
                    .checked_sub(wshift + 1)
                    .map_or(W::zero(), |j| self.words[j]);
                (lo >> bshift) | (hi << (W::BITS - bshift))
            };
        }
        Ok(())
    }

    /// Returns a copy shifted by [`Self::shift_left()`].
    pub fn shifted_left(&self, n: usize) -> Result<Self> {
        let mut out = self.clone();
        out.shift_left(n)?;
        Ok(out)
    }

    /// Returns a copy shifted by [`Self::shift_right()`].
    pub fn shifted_right(&self, n: usize) -> Result<Self> {
        let mut out = self.clone();
        out.shift_right(n)?;
        Ok(out)
    }

    /// Compares two arrays bit by bit.
    ///
    /// Two empty arrays are equal.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if exactly one array is empty, or
    /// [`Error::SizeMismatch`] if the lengths differ.
    pub fn try_eq(&self, other: &Self) -> Result<bool> {
        if self.is_empty() && other.is_empty() {
            return Ok(true);
        }
        self.check_operands(other)?;
        Ok(self.masked_words().eq(other.masked_words()))
    }

    /// Negation of [`Self::try_eq()`].
    pub fn try_ne(&self, other: &Self) -> Result<bool> {
        Ok(!self.try_eq(other)?)
    }

    #[inline(always)]
    fn word_or_zero(&self, wpos: usize) -> W {
        self.words.get(wpos).copied().unwrap_or_else(W::zero)
    }
}

/// Arrays of different lengths compare unequal; use [`BitArray::try_eq()`] to
/// get an error instead.
impl<W: Word> PartialEq for BitArray<W> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.masked_words().eq(other.masked_words())
    }
}

impl<W: Word> Eq for BitArray<W> {}

impl<W: Word> Hash for BitArray<W> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        self.masked_words().for_each(|w| w.hash(state));
    }
}
