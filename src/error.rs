//! Error types
//!
//! Scanning never fails; malformed markup only shortens the event stream.
//! Errors arise solely when turning raw bytes into text.

use thiserror::Error;

use crate::core::encoding::Encoding;

/// Failure to decode a byte document into text
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// The input is not valid UTF-8
    #[error("invalid UTF-8: first bad byte at offset {valid_up_to}")]
    InvalidUtf8 {
        /// Length of the valid prefix
        valid_up_to: usize,
    },

    /// A UTF-16 document whose byte length is odd
    #[error("invalid {encoding}: odd number of bytes ({len})")]
    OddLength {
        /// Detected encoding
        encoding: Encoding,
        /// Byte length after the BOM
        len: usize,
    },

    /// A UTF-16 document with an unpaired surrogate
    #[error("invalid {encoding}: unpaired surrogate")]
    UnpairedSurrogate {
        /// Detected encoding
        encoding: Encoding,
    },
}
