//! The prelude for bit arrays.
//!
//! The purpose of this module is to alleviate imports of many common traits for bit arrays.
//!
//! ```
//! # #![allow(unused_imports)]
//! use packed_bits::bit_array::prelude::*;
//! ```
pub use crate::bit_array::{Access, NumBits};
pub use crate::builder::{Build, Builder};
