//! Stream errors
//!
//! Everything the codec can fail with is a transport-level failure: the
//! bytes were truncated, malformed, or larger than configured. The codec
//! never retries and never recovers; callers decide what to do.

use std::io;
use thiserror::Error;

/// Result alias for stream operations
pub type Result<T> = std::result::Result<T, StreamError>;

/// Failure reading or writing stream primitives
#[derive(Debug, Error)]
pub enum StreamError {
    /// Underlying I/O failure, including truncated input
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Boolean byte other than 0 or 1
    #[error("unexpected byte [{0:#04x}] for boolean")]
    InvalidBoolean(u8),

    /// Variable-length integer ran past its maximum width
    #[error("variable-length value is too long")]
    VarIntTooLong,

    /// Length prefix decoded as negative
    #[error("negative {kind} length: {len}")]
    NegativeLength {
        /// What was being read
        kind: &'static str,
        /// Decoded length
        len: i32,
    },

    /// Length prefix larger than the configured limit
    #[error("{kind} length {len} exceeds limit {limit}")]
    LengthLimitExceeded {
        /// What was being read
        kind: &'static str,
        /// Decoded length
        len: usize,
        /// Configured maximum
        limit: usize,
    },

    /// Value too long to be length-prefixed
    #[error("{kind} length {len} does not fit a vint")]
    LengthOverflow {
        /// What was being written
        kind: &'static str,
        /// Attempted length
        len: usize,
    },

    /// String bytes are not a valid encoding of UTF-16 text
    #[error("invalid string encoding")]
    InvalidString,

    /// Unknown time unit ordinal
    #[error("unknown time unit ordinal [{0}]")]
    UnknownTimeUnit(u8),
}

impl StreamError {
    /// Whether the input ended before the value was complete
    pub fn is_eof(&self) -> bool {
        matches!(self, StreamError::Io(e) if e.kind() == io::ErrorKind::UnexpectedEof)
    }
}
