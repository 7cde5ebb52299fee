//! Codec error type.

use thiserror::Error;

/// Failure raised by the validating decoders when the input byte sequence
/// cannot supply the bytes the target type requires.
///
/// Encoding and the fixed-arity `*_exact` decoders are total functions and
/// never produce this error.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidArgument {
    /// The optional byte sequence was `None`.
    #[error("byte sequence is absent")]
    Absent,
    /// The byte sequence held fewer bytes than the target type's width.
    #[error("byte sequence length {len} is less than required {min}")]
    TooShort {
        /// Minimum number of bytes the target type requires.
        min: usize,
        /// Number of bytes actually supplied.
        len: usize,
    },
}
