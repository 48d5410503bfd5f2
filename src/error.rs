//! Error types for bit array operations.

use std::fmt;

/// Result type used across the crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Error type covering failures of [`BitArray`](crate::BitArray) operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// An argument violated preconditions, or the array holds no bits.
    InvalidArgument(String),
    /// A bit position fell outside `[0, len)`.
    OutOfRange(String),
    /// Two arrays combined or compared have different lengths.
    SizeMismatch {
        /// Number of bits in the left operand.
        left: usize,
        /// Number of bits in the right operand.
        right: usize,
    },
}

impl Error {
    /// Creates an [`Error::InvalidArgument`] with the provided message.
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// Creates an [`Error::OutOfRange`] with the provided message.
    pub fn out_of_range(msg: impl Into<String>) -> Self {
        Self::OutOfRange(msg.into())
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidArgument(msg) => write!(f, "{msg}"),
            Error::OutOfRange(msg) => write!(f, "{msg}"),
            Error::SizeMismatch { left, right } => write!(
                f,
                "size mismatch: left has {left} bits, right has {right} bits"
            ),
        }
    }
}

impl std::error::Error for Error {}
