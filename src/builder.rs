//! Streaming construction of bit arrays.
//!
//! A [`Builder`] accepts bits one at a time and is finalized with
//! [`Builder::build`]. Types implementing [`Build`] can then be created from
//! bit iterators or from their `'0'`/`'1'` rendering.

use anyhow::{anyhow, Result};

/// Interface for pushing bits into a structure under construction.
pub trait Builder {
    /// Final type produced by [`Self::build`].
    type Build;

    /// Pushes a single bit.
    fn push(&mut self, bit: bool) -> Result<()>;

    /// Returns the number of bits pushed so far.
    fn num_pushed(&self) -> usize;

    /// Pushes every bit of `iter`, stopping at the first failure.
    fn extend<I>(&mut self, iter: I) -> Result<()>
    where
        I: IntoIterator<Item = bool>,
    {
        iter.into_iter().try_for_each(|bit| self.push(bit))
    }

    /// Finalizes the builder and returns the constructed value.
    fn build(self) -> Self::Build;
}

/// Convenience trait for constructing objects through a streaming [`Builder`].
pub trait Build: Sized {
    /// Builder type used for construction.
    type Builder: Builder<Build = Self>;

    /// Returns a builder with room for `bits` bits.
    fn builder(bits: usize) -> Self::Builder;

    /// Creates an instance from an iterator of bits.
    fn build_from_bits<I>(iter: I) -> Result<Self>
    where
        I: IntoIterator<Item = bool>,
    {
        let iter = iter.into_iter();
        let mut b = Self::builder(iter.size_hint().0);
        b.extend(iter)?;
        Ok(b.build())
    }

    /// Creates an instance from a string of `'0'` and `'1'` characters,
    /// the first character becoming bit 0.
    ///
    /// # Errors
    ///
    /// An error is returned if `s` contains any other character.
    fn build_from_str(s: &str) -> Result<Self> {
        let mut b = Self::builder(s.len());
        for (pos, c) in s.char_indices() {
            match c {
                '0' => b.push(false)?,
                '1' => b.push(true)?,
                _ => {
                    return Err(anyhow!(
                        "s must consist only of '0' and '1', but got {c:?} at {pos}."
                    ))
                }
            }
        }
        Ok(b.build())
    }
}
