//! # Packed bit arrays
//!
//! This crate provides [`BitArray`], a dynamically resizable array of single bits
//! packed into machine words. It supports per-bit access, bulk predicates,
//! bitwise logic between arrays of equal length, shifts and capacity growth.
//!
//! ## Design policy
//!
//! - **Words are the unit of work:**
//!   Bulk operations such as [`count`](BitArray::count), the bitwise
//!   combinators and shifts process whole words, touching individual bits only
//!   at the boundaries.
//!
//! - **Failures are values:**
//!   Every operation that can fail returns [`Result`] with an [`Error`] and
//!   validates its arguments before mutating anything.
//!
//! - **Ensure safety:**
//!   The crate contains no unsafe code.
//!
//! ## Bit order
//!
//! Bit $`i`$ of an array with word width $`w`$ lives in word $`\lfloor i / w \rfloor`$
//! at position $`i \bmod w`$ counted from the most significant bit.
//! [`BitArray::to_bit_string`] renders bit 0 first, so the rendering of a
//! single-word array reads like the binary literal of that word.
//!
//! ```
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use packed_bits::BitArray;
//!
//! let a = BitArray::<u8>::with_bits(8, 0b1010_1100);
//! assert_eq!(a.to_bit_string()?, "10101100");
//! assert_eq!(a.shifted_left(2)?.to_bit_string()?, "10110000");
//! # Ok(())
//! # }
//! ```
//!
//! ## Word type
//!
//! The word type defaults to [`usize`]. Any unsigned integer implementing
//! [`Word`] may be used instead.
#![deny(missing_docs)]
#![forbid(unsafe_code)]

pub mod bit_array;
pub mod builder;
pub mod error;
pub mod word;

pub use bit_array::{BitArray, BitArrayBuilder};
pub use error::{Error, Result};
pub use word::Word;
