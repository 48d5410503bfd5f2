//! Streaming builder for [`BitArray`].

use anyhow::{anyhow, Result};

use crate::bit_array::BitArray;
use crate::builder::{Build, Builder};
use crate::word::{words_for, Word};

/// Builder that collects bits into a [`BitArray`].
///
/// Unlike [`BitArray::push_back()`], the builder lets the word buffer grow
/// freely and fixes the capacity once on [`freeze`](Self::freeze).
///
/// # Examples
///
/// ```
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// use packed_bits::bit_array::BitArrayBuilder;
///
/// let mut builder = BitArrayBuilder::<u8>::new();
/// builder.extend_bits([true, false]);
/// builder.push_bits(0b011, 3)?;
/// builder.set_bit(1, true)?;
/// let bits = builder.freeze();
///
/// assert_eq!(bits.to_bit_string()?, "11011");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Default, Clone)]
pub struct BitArrayBuilder<W: Word = usize> {
    words: Vec<W>,
    len: usize,
}

impl<W: Word> BitArrayBuilder<W> {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty builder with room for `bits` bits.
    pub fn with_capacity(bits: usize) -> Self {
        Self {
            words: Vec::with_capacity(words_for(bits, W::BITS)),
            len: 0,
        }
    }

    /// Gets the number of bits pushed so far.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Checks if no bit has been pushed.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Pushes a single bit.
    pub fn push_bit(&mut self, bit: bool) {
        let pos_in_word = self.len % W::BITS;
        let mask = if bit {
            W::msb_mask(pos_in_word)
        } else {
            W::zero()
        };
        if pos_in_word == 0 {
            self.words.push(mask);
        } else if let Some(cur) = self.words.last_mut() {
            *cur = *cur | mask;
        }
        self.len += 1;
    }

    /// Pushes the lowest `len` bits of `bits`, most significant first.
    ///
    /// # Errors
    ///
    /// An error is returned if `len` exceeds `W::BITS`.
    pub fn push_bits(&mut self, bits: W, len: usize) -> Result<()> {
        if W::BITS < len {
            return Err(anyhow!(
                "len must be no greater than {}, but got {len}.",
                W::BITS
            ));
        }
        if len == 0 {
            return Ok(());
        }
        let bits = bits & W::ones_from(W::BITS - len);

        let pos_in_word = self.len % W::BITS;
        if pos_in_word == 0 {
            self.words.push(bits << (W::BITS - len));
        } else {
            let free = W::BITS - pos_in_word;
            if let Some(cur) = self.words.last_mut() {
                *cur = if len <= free {
                    *cur | (bits << (free - len))
                } else {
                    *cur | (bits >> (len - free))
                };
            }
            if len > free {
                self.words.push(bits << (W::BITS - (len - free)));
            }
        }
        self.len += len;
        Ok(())
    }

    /// Sets the `pos`-th bit to `bit`.
    ///
    /// # Errors
    ///
    /// An error is returned if `pos` is not less than [`Self::len()`].
    pub fn set_bit(&mut self, pos: usize, bit: bool) -> Result<()> {
        if self.len <= pos {
            return Err(anyhow!(
                "pos must be less than self.len()={}, but got {pos}.",
                self.len
            ));
        }
        let word = &mut self.words[pos / W::BITS];
        let mask = W::msb_mask(pos % W::BITS);
        *word = if bit { *word | mask } else { *word & !mask };
        Ok(())
    }

    /// Extends the builder from an iterator of bits.
    pub fn extend_bits<I: IntoIterator<Item = bool>>(&mut self, bits: I) {
        bits.into_iter().for_each(|b| self.push_bit(b));
    }

    /// Finalizes the builder into a [`BitArray`].
    ///
    /// A builder holding no bits yields the empty array.
    pub fn freeze(mut self) -> BitArray<W> {
        self.words.shrink_to_fit();
        BitArray::from_raw_parts(self.words, self.len)
    }
}

impl<W: Word> Builder for BitArrayBuilder<W> {
    type Build = BitArray<W>;

    fn push(&mut self, bit: bool) -> Result<()> {
        self.push_bit(bit);
        Ok(())
    }

    fn num_pushed(&self) -> usize {
        self.len
    }

    fn build(self) -> BitArray<W> {
        self.freeze()
    }
}

impl<W: Word> Build for BitArray<W> {
    type Builder = BitArrayBuilder<W>;

    fn builder(bits: usize) -> Self::Builder {
        BitArrayBuilder::with_capacity(bits)
    }
}
