//! Error types for the framing layer.
//!
//! [`FramingError`] is the single fault surface of the crate. Insufficient
//! data is never an error: the decoder simply waits for more bytes. Every
//! variant here is a genuine fault that propagates synchronously from
//! [`FramingBuffer::feed`](crate::FramingBuffer::feed) or one of the adapters.
//!
//! # Error Categories
//!
//! - Configuration faults: [`FramingError::ZeroLengthFieldSize`] and
//!   [`FramingError::UnsupportedPrefixWidth`].
//! - Length faults raised by the decoder after a length field is read:
//!   [`FramingError::NegativeLength`] and [`FramingError::LengthOverflow`].
//! - Internal invariant violations: [`FramingError::Underflow`].
//! - Transport faults surfaced by the async adapters: [`FramingError::Io`] and
//!   [`FramingError::Eof`].

use std::io;

use thiserror::Error;

/// EOF conditions reported when a stream ends inside a frame.
///
/// A stream that ends exactly at a frame boundary is a clean close and is
/// not represented here.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum EofError {
    /// EOF received while the length field was being read.
    #[error("premature EOF during length field: {bytes_received} of {header_size} bytes")]
    MidHeader {
        /// Length field bytes received before EOF.
        bytes_received: usize,
        /// Configured length field size.
        header_size: usize,
    },

    /// EOF received after the length field but before the body completed.
    #[error("premature EOF: {bytes_received} bytes of {expected} byte frame received")]
    MidFrame {
        /// Body bytes received before EOF.
        bytes_received: usize,
        /// Body length announced by the length field.
        expected: usize,
    },
}

/// Top-level error type exposed by `framing`.
#[derive(Debug, Error)]
pub enum FramingError {
    /// A length field size of zero was configured.
    #[error("length field size must be positive")]
    ZeroLengthFieldSize,

    /// The built-in integer formats only cover widths of 1 to 8 bytes.
    #[error("unsupported length prefix width: {0} bytes")]
    UnsupportedPrefixWidth(usize),

    /// The reader was handed fewer bytes than its format requires.
    #[error("incomplete length prefix: have {have}, need {need}")]
    IncompletePrefix {
        /// Bytes supplied to the reader.
        have: usize,
        /// Bytes the format needs.
        need: usize,
    },

    /// The length reader produced a negative frame length.
    #[error("length field decoded to negative frame length {0}")]
    NegativeLength(i64),

    /// The decoded frame length cannot be addressed on this platform.
    #[error("frame length {0} exceeds addressable memory")]
    LengthOverflow(u64),

    /// A body cannot be described by the configured prefix width.
    #[error("frame of {len} bytes does not fit a {width}-byte length prefix")]
    FrameTooLarge {
        /// Body length that was rejected.
        len: usize,
        /// Prefix width in bytes.
        width: usize,
    },

    /// An extraction asked for more bytes than were buffered.
    #[error("buffer underflow: requested {requested} bytes, {available} available")]
    Underflow {
        /// Bytes requested.
        requested: usize,
        /// Bytes buffered at the time of the request.
        available: usize,
    },

    /// Transport layer I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The stream ended inside a frame.
    #[error("EOF: {0}")]
    Eof(#[from] EofError),
}

impl FramingError {
    /// Returns the error category as a string for logging and metrics.
    ///
    /// One of `"config"`, `"length"`, `"encode"`, `"invariant"`, `"io"` or
    /// `"eof"`.
    #[must_use]
    pub fn error_type(&self) -> &'static str {
        match self {
            Self::ZeroLengthFieldSize | Self::UnsupportedPrefixWidth(_) => "config",
            Self::IncompletePrefix { .. } | Self::NegativeLength(_) | Self::LengthOverflow(_) => {
                "length"
            }
            Self::FrameTooLarge { .. } => "encode",
            Self::Underflow { .. } => "invariant",
            Self::Io(_) => "io",
            Self::Eof(_) => "eof",
        }
    }
}

impl From<FramingError> for io::Error {
    fn from(err: FramingError) -> Self {
        match err {
            FramingError::Io(e) => e,
            FramingError::Eof(e) => io::Error::new(io::ErrorKind::UnexpectedEof, e),
            FramingError::ZeroLengthFieldSize
            | FramingError::UnsupportedPrefixWidth(_)
            | FramingError::FrameTooLarge { .. } => io::Error::new(io::ErrorKind::InvalidInput, err),
            other => io::Error::new(io::ErrorKind::InvalidData, other),
        }
    }
}

/// Canonical result alias used by `framing` public APIs.
pub type Result<T> = std::result::Result<T, FramingError>;
