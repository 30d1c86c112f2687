//! Length prefix formatting options.
use bytes::BytesMut;
use serde::{Deserialize, Serialize};

use super::conversion::{bytes_to_i64, bytes_to_u64, check_width, u64_to_bytes};
use crate::error::{FramingError, Result};

/// Byte order used for encoding and decoding length prefixes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Endianness {
    /// Most significant byte first.
    #[default]
    Big,
    /// Least significant byte first.
    Little,
}

/// Format of the fixed-width integer length field preceding each frame.
///
/// The default is a 4-byte big-endian signed integer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LengthFormat {
    pub bytes: usize,
    pub endianness: Endianness,
    pub signed: bool,
}

impl LengthFormat {
    /// Creates a new `LengthFormat` with the specified width, endianness and
    /// signedness.
    ///
    /// # Panics
    ///
    /// Panics if `bytes` is not in `1..=8`.
    #[must_use]
    pub const fn new(bytes: usize, endianness: Endianness, signed: bool) -> Self {
        assert!(matches!(bytes, 1..=8), "invalid length-prefix width");
        Self {
            bytes,
            endianness,
            signed,
        }
    }

    /// Fallible constructor validating the prefix width.
    ///
    /// # Errors
    ///
    /// Returns [`FramingError::UnsupportedPrefixWidth`] if `bytes` is not in
    /// `1..=8`.
    pub fn try_new(bytes: usize, endianness: Endianness, signed: bool) -> Result<Self> {
        check_width(bytes)?;
        Ok(Self {
            bytes,
            endianness,
            signed,
        })
    }

    /// 4-byte big-endian signed prefix.
    #[must_use]
    pub const fn i32_be() -> Self { Self::new(4, Endianness::Big, true) }

    /// 2-byte big-endian unsigned prefix.
    #[must_use]
    pub const fn u16_be() -> Self { Self::new(2, Endianness::Big, false) }

    /// 2-byte little-endian unsigned prefix.
    #[must_use]
    pub const fn u16_le() -> Self { Self::new(2, Endianness::Little, false) }

    /// 4-byte big-endian unsigned prefix.
    #[must_use]
    pub const fn u32_be() -> Self { Self::new(4, Endianness::Big, false) }

    /// 4-byte little-endian unsigned prefix.
    #[must_use]
    pub const fn u32_le() -> Self { Self::new(4, Endianness::Little, false) }

    /// 8-byte big-endian unsigned prefix.
    #[must_use]
    pub const fn u64_be() -> Self { Self::new(8, Endianness::Big, false) }

    /// Read the raw length value from `bytes` according to this format.
    ///
    /// Signed formats may yield negative values; rejecting them is left to
    /// the decoder.
    ///
    /// # Errors
    /// Returns an error if `bytes` is shorter than the prefix, if the width is
    /// unsupported, or if an unsigned value exceeds `i64::MAX`.
    pub fn read_raw(&self, bytes: &[u8]) -> Result<i64> {
        if self.signed {
            return bytes_to_i64(bytes, self.bytes, self.endianness);
        }
        let value = bytes_to_u64(bytes, self.bytes, self.endianness)?;
        i64::try_from(value).map_err(|_| FramingError::LengthOverflow(value))
    }

    /// Write `len` to `dst` using this format's prefix encoding.
    ///
    /// # Errors
    /// Returns [`FramingError::FrameTooLarge`] if `len` cannot be represented
    /// by the prefix.
    pub fn write_len(&self, len: usize, dst: &mut BytesMut) -> Result<()> {
        let mut buf = [0u8; 8];
        let written = u64_to_bytes(len, self.bytes, self.endianness, self.signed, &mut buf)?;
        dst.extend_from_slice(&buf[..written]);
        Ok(())
    }
}

impl Default for LengthFormat {
    fn default() -> Self { Self::i32_be() }
}
