//! Top module for resizable bit arrays.
//!
//! # Introduction
//!
//! [`BitArray`] stores a sequence of bits packed into machine words of type `W`
//! (see [`Word`]). The array keeps a logical length $`n`$ and a capacity that is
//! always a whole number of words, so $`\lceil n / w \rceil`$ words hold the data
//! where $`w`$ is the word width.
//!
//! Bit $`i`$ lives in word $`\lfloor i / w \rfloor`$ at position $`i \bmod w`$
//! counted from the most significant bit. Bit 0 is therefore the highest bit of
//! the first word, which is also the first character of
//! [`BitArray::to_bit_string`].
//!
//! | Operation | Complexity |
//! | --- | :-: |
//! | [`get`](BitArray::get), [`set`](BitArray::set), [`push_back`](BitArray::push_back) | $`O(1)`$ |
//! | [`any`](BitArray::any), [`count`](BitArray::count), bitwise ops, shifts | $`O(n / w)`$ |
//! | [`resize`](BitArray::resize) | $`O(n / w)`$ |
//!
//! # Empty arrays
//!
//! An array holding no bits owns no words. Operations that need content, such as
//! [`get`](BitArray::get) or [`count`](BitArray::count), return
//! [`Error::InvalidArgument`] on an empty array.
//!
//! # Examples
//!
//! ```
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use packed_bits::bit_array::*;
//!
//! let mut bits = BitArray::<u32>::with_bits(8, u32::MAX);
//! assert_eq!(bits.to_bit_string()?, "11111111");
//!
//! bits.set(0, false)?;
//! assert_eq!(bits.to_bit_string()?, "01111111");
//! assert_eq!(bits.not()?.to_bit_string()?, "10000000");
//!
//! assert_eq!(bits.num_ones(), 7);
//! assert_eq!(bits.access(8), None);
//! # Ok(())
//! # }
//! ```
pub mod builder;
pub mod ops;
pub mod prelude;

use std::fmt;

use crate::error::{Error, Result};
use crate::word::{words_for, Word};

pub use builder::BitArrayBuilder;

/// Interface for reporting basic statistics in a bit array.
pub trait NumBits {
    /// Returns the number of bits stored.
    fn num_bits(&self) -> usize;

    /// Returns the number of bits set.
    fn num_ones(&self) -> usize;

    /// Returns the number of bits unset.
    #[inline(always)]
    fn num_zeros(&self) -> usize {
        self.num_bits() - self.num_ones()
    }
}

/// Interface for accessing elements on bit arrays.
pub trait Access {
    /// Returns the `pos`-th bit, or [`None`] if out of bounds.
    fn access(&self, pos: usize) -> Option<bool>;
}

/// Resizable array of bits packed into words of type `W`.
///
/// # Examples
///
/// ```
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// use packed_bits::BitArray;
///
/// let mut bits = BitArray::<u64>::zeros(48);
/// bits.set(36, true)?;
/// bits.shift_left(20)?;
///
/// assert!(bits.get(16)?);
/// assert_eq!(bits.count()?, 1);
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Default)]
pub struct BitArray<W: Word = usize> {
    words: Vec<W>,
    len: usize,
}

impl<W: Word> BitArray<W> {
    /// Creates an empty array that owns no words.
    pub const fn new() -> Self {
        Self {
            words: Vec::new(),
            len: 0,
        }
    }

    /// Creates an array of `len` bits whose first word is `first_word`.
    ///
    /// The remaining words are zeroed. `first_word` is stored verbatim, so with
    /// `len < W::BITS` only its `len` highest bits are visible. A zero `len`
    /// yields the empty array.
    ///
    /// # Examples
    ///
    /// ```
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// use packed_bits::BitArray;
    ///
    /// let bits = BitArray::<u32>::with_bits(32, 0b1010);
    /// assert!(bits.get(28)?);
    /// assert!(!bits.get(29)?);
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_bits(len: usize, first_word: W) -> Self {
        if len == 0 {
            return Self::new();
        }
        let mut words = vec![W::zero(); words_for(len, W::BITS)];
        words[0] = first_word;
        Self { words, len }
    }

    /// Creates an array of `len` unset bits.
    pub fn zeros(len: usize) -> Self {
        Self::with_bits(len, W::zero())
    }

    pub(crate) fn from_raw_parts(words: Vec<W>, len: usize) -> Self {
        debug_assert_eq!(words.len(), words_for(len, W::BITS));
        Self { words, len }
    }

    /// Gets the number of bits.
    #[inline(always)]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Checks if the array owns no words.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Returns the number of bits the array holds without reallocating,
    /// always a multiple of `W::BITS`.
    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.words.len() * W::BITS
    }

    /// Returns the raw words, including the tail bits at or beyond [`Self::len()`].
    pub fn words(&self) -> &[W] {
        &self.words
    }

    /// Returns the `pos`-th bit.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if the array is empty, or
    /// [`Error::OutOfRange`] if `pos` is not less than [`Self::len()`].
    pub fn get(&self, pos: usize) -> Result<bool> {
        self.check_pos(pos)?;
        Ok(self.bit(pos))
    }

    /// Sets the `pos`-th bit to `bit`.
    ///
    /// # Errors
    ///
    /// Same as [`Self::get()`].
    pub fn set(&mut self, pos: usize, bit: bool) -> Result<()> {
        self.check_pos(pos)?;
        self.put(pos, bit);
        Ok(())
    }

    /// Unsets the `pos`-th bit.
    ///
    /// # Errors
    ///
    /// Same as [`Self::get()`].
    pub fn reset(&mut self, pos: usize) -> Result<()> {
        self.set(pos, false)
    }

    /// Sets every bit in every word, tail bits included.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if the array is empty.
    pub fn set_all(&mut self) -> Result<()> {
        self.check_non_empty()?;
        self.words.fill(W::ones());
        Ok(())
    }

    /// Unsets every bit in every word, tail bits included.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if the array is empty.
    pub fn reset_all(&mut self) -> Result<()> {
        self.check_non_empty()?;
        self.words.fill(W::zero());
        Ok(())
    }

    /// Changes the length to `new_len`.
    ///
    /// Bits in `[0, min(len, new_len))` are kept and bits in `[len, new_len)`
    /// are set to `fill`. The capacity becomes the smallest multiple of
    /// `W::BITS` holding `new_len` bits, and resizing to zero releases all words.
    ///
    /// # Examples
    ///
    /// ```
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// use packed_bits::BitArray;
    ///
    /// let mut bits = BitArray::<u64>::zeros(3);
    /// bits.resize(6, true);
    /// assert_eq!(bits.to_bit_string()?, "000111");
    /// bits.resize(0, false);
    /// assert!(bits.is_empty());
    /// # Ok(())
    /// # }
    /// ```
    pub fn resize(&mut self, new_len: usize, fill: bool) {
        if new_len == 0 {
            self.clear();
            return;
        }
        let num_words = words_for(new_len, W::BITS);
        if num_words != self.words.len() {
            self.words.resize(num_words, W::zero());
            self.words.shrink_to_fit();
        }
        let old_len = self.len;
        self.len = new_len;
        self.fill_range(old_len, new_len, fill);
    }

    /// Releases all words. Calling it on an empty array does nothing.
    pub fn clear(&mut self) {
        self.words = Vec::new();
        self.len = 0;
    }

    /// Appends `bit` at the end.
    ///
    /// When the array is full, the capacity grows by exactly one word.
    pub fn push_back(&mut self, bit: bool) {
        if self.len == self.capacity() {
            self.words.push(W::zero());
        }
        self.len += 1;
        self.put(self.len - 1, bit);
    }

    /// Checks if any bit in `[0, len)` is set.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if the array is empty.
    pub fn any(&self) -> Result<bool> {
        self.check_non_empty()?;
        Ok(self.masked_words().any(|w| w != W::zero()))
    }

    /// Checks if no bit in `[0, len)` is set.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if the array is empty.
    pub fn none(&self) -> Result<bool> {
        Ok(!self.any()?)
    }

    /// Counts the bits set in `[0, len)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if the array is empty.
    pub fn count(&self) -> Result<usize> {
        self.check_non_empty()?;
        Ok(self.count_ones())
    }

    /// Renders the bits as `'0'`/`'1'` characters, bit 0 first.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if the array is empty.
    pub fn to_bit_string(&self) -> Result<String> {
        self.check_non_empty()?;
        Ok(self.render())
    }

    /// Exchanges contents with `other`.
    pub fn swap(&mut self, other: &mut Self) {
        std::mem::swap(self, other);
    }

    /// Creates an iterator for enumerating bits.
    ///
    /// # Examples
    ///
    /// ```
    /// use packed_bits::BitArray;
    ///
    /// let bits: BitArray = [true, false, true].into_iter().collect();
    /// let mut it = bits.iter();
    ///
    /// assert_eq!(it.next(), Some(true));
    /// assert_eq!(it.next(), Some(false));
    /// assert_eq!(it.next(), Some(true));
    /// assert_eq!(it.next(), None);
    /// ```
    pub const fn iter(&self) -> Iter<'_, W> {
        Iter::new(self)
    }

    /// Collects all bits into a `Vec<bool>` for inspection.
    pub fn to_vec(&self) -> Vec<bool> {
        self.iter().collect()
    }

    fn check_non_empty(&self) -> Result<()> {
        if self.is_empty() {
            return Err(Error::invalid_argument("bit array is empty"));
        }
        Ok(())
    }

    fn check_pos(&self, pos: usize) -> Result<()> {
        self.check_non_empty()?;
        if self.len <= pos {
            return Err(Error::out_of_range(format!(
                "pos must be less than self.len()={}, but got {pos}.",
                self.len
            )));
        }
        Ok(())
    }

    #[inline(always)]
    fn bit(&self, pos: usize) -> bool {
        self.words[pos / W::BITS] & W::msb_mask(pos % W::BITS) != W::zero()
    }

    #[inline(always)]
    fn put(&mut self, pos: usize, bit: bool) {
        let word = &mut self.words[pos / W::BITS];
        let mask = W::msb_mask(pos % W::BITS);
        *word = if bit { *word | mask } else { *word & !mask };
    }

    /// Sets every bit in `[start, end)` to `bit`, one word at a time.
    pub(crate) fn fill_range(&mut self, start: usize, end: usize, bit: bool) {
        if end <= start {
            return;
        }
        let (first, last) = (start / W::BITS, (end - 1) / W::BITS);
        for wpos in first..=last {
            let lo = if wpos == first { start % W::BITS } else { 0 };
            let hi = if wpos == last {
                (end - 1) % W::BITS + 1
            } else {
                W::BITS
            };
            let mask = W::range_mask(lo, hi);
            let word = &mut self.words[wpos];
            *word = if bit { *word | mask } else { *word & !mask };
        }
    }

    /// Unsets the tail bits of the last word.
    pub(crate) fn clear_tail(&mut self) {
        let rest = self.len % W::BITS;
        if rest == 0 {
            return;
        }
        if let Some(last) = self.words.last_mut() {
            *last = *last & W::range_mask(0, rest);
        }
    }

    /// Iterates over the words with tail bits masked out.
    pub(crate) fn masked_words(&self) -> impl Iterator<Item = W> + '_ {
        let rest = self.len % W::BITS;
        let last = self.words.len().wrapping_sub(1);
        self.words.iter().enumerate().map(move |(i, &w)| {
            if i == last && rest != 0 {
                w & W::range_mask(0, rest)
            } else {
                w
            }
        })
    }

    fn count_ones(&self) -> usize {
        self.masked_words().map(Word::popcount).sum()
    }

    fn render(&self) -> String {
        self.iter().map(|b| if b { '1' } else { '0' }).collect()
    }
}

impl<W: Word> NumBits for BitArray<W> {
    fn num_bits(&self) -> usize {
        self.len
    }

    fn num_ones(&self) -> usize {
        self.count_ones()
    }
}

impl<W: Word> Access for BitArray<W> {
    fn access(&self, pos: usize) -> Option<bool> {
        if pos < self.len {
            Some(self.bit(pos))
        } else {
            None
        }
    }
}

impl<W: Word> FromIterator<bool> for BitArray<W> {
    fn from_iter<I: IntoIterator<Item = bool>>(iter: I) -> Self {
        let mut builder = BitArrayBuilder::new();
        builder.extend_bits(iter);
        builder.freeze()
    }
}

impl<W: Word> Extend<bool> for BitArray<W> {
    fn extend<I: IntoIterator<Item = bool>>(&mut self, iter: I) {
        iter.into_iter().for_each(|b| self.push_back(b));
    }
}

impl<'a, W: Word> IntoIterator for &'a BitArray<W> {
    type Item = bool;
    type IntoIter = Iter<'a, W>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<W: Word> fmt::Debug for BitArray<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BitArray")
            .field("bits", &self.render())
            .field("len", &self.len)
            .field("capacity", &self.capacity())
            .finish()
    }
}

/// Iterator for enumerating bits, created by [`BitArray::iter()`].
pub struct Iter<'a, W: Word> {
    bits: &'a BitArray<W>,
    pos: usize,
}

impl<'a, W: Word> Iter<'a, W> {
    /// Creates a new iterator.
    pub const fn new(bits: &'a BitArray<W>) -> Self {
        Self { bits, pos: 0 }
    }
}

impl<W: Word> Iterator for Iter<'_, W> {
    type Item = bool;

    #[inline(always)]
    fn next(&mut self) -> Option<Self::Item> {
        let bit = self.bits.access(self.pos)?;
        self.pos += 1;
        Some(bit)
    }

    #[inline(always)]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let rest = self.bits.len() - self.pos;
        (rest, Some(rest))
    }
}

impl<W: Word> ExactSizeIterator for Iter<'_, W> {}
