//! Serialisable session configuration.
//!
//! [`FramingConfig`] describes a built-in integer length field and can be
//! loaded from any serde format. Custom readers are not serialisable; build
//! those sessions with [`FramingBuffer::with_reader`](crate::FramingBuffer::with_reader).
use serde::{Deserialize, Serialize};

use crate::{
    error::{FramingError, Result},
    frame::{Endianness, LengthFormat},
};

/// Default length field size in bytes.
pub const DEFAULT_LENGTH_FIELD_SIZE: usize = 4;

/// Configuration for the built-in integer length field.
///
/// Every field is optional when deserialising; missing fields take the
/// defaults of a 4-byte big-endian signed length.
///
/// # Examples
///
/// ```
/// use framing::{LengthFormat, config::FramingConfig};
///
/// let config = FramingConfig::default();
/// assert_eq!(config.length_format().unwrap(), LengthFormat::i32_be());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FramingConfig {
    /// Width of the length field in bytes.
    pub length_field_size: usize,
    /// Byte order of the length field.
    pub endianness: Endianness,
    /// Whether the length field is a two's complement integer.
    pub signed: bool,
}

impl FramingConfig {
    /// Resolve this configuration into a [`LengthFormat`].
    ///
    /// # Errors
    ///
    /// Returns [`FramingError::ZeroLengthFieldSize`] for a zero width and
    /// [`FramingError::UnsupportedPrefixWidth`] for widths above 8 bytes.
    pub fn length_format(&self) -> Result<LengthFormat> {
        if self.length_field_size == 0 {
            return Err(FramingError::ZeroLengthFieldSize);
        }
        LengthFormat::try_new(self.length_field_size, self.endianness, self.signed)
    }
}

impl Default for FramingConfig {
    fn default() -> Self {
        Self {
            length_field_size: DEFAULT_LENGTH_FIELD_SIZE,
            endianness: Endianness::Big,
            signed: true,
        }
    }
}

impl From<LengthFormat> for FramingConfig {
    fn from(format: LengthFormat) -> Self {
        Self {
            length_field_size: format.bytes,
            endianness: format.endianness,
            signed: format.signed,
        }
    }
}
