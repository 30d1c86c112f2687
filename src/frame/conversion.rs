//! Conversion helpers for length prefix encoding.
use super::format::Endianness;
use crate::error::{FramingError, Result};

/// Largest prefix width, in bytes, the integer helpers support.
pub const MAX_PREFIX_WIDTH: usize = 8;

pub(crate) fn check_width(size: usize) -> Result<()> {
    if (1..=MAX_PREFIX_WIDTH).contains(&size) {
        Ok(())
    } else {
        Err(FramingError::UnsupportedPrefixWidth(size))
    }
}

/// Largest value a `size`-byte prefix can carry.
fn prefix_max(size: usize, signed: bool) -> u128 {
    let bits = 8 * size;
    if signed {
        (1u128 << (bits - 1)) - 1
    } else {
        (1u128 << bits) - 1
    }
}

/// Converts a byte slice into a `u64` according to `size` and `endianness`.
///
/// Prefix sizes of `1` to `8` bytes are supported. `bytes` must contain at
/// least `size` bytes; any surplus is ignored.
///
/// # Errors
/// Returns [`FramingError::UnsupportedPrefixWidth`] if `size` is outside
/// `1..=8` or [`FramingError::IncompletePrefix`] if `bytes` is too short.
#[expect(
    clippy::big_endian_bytes,
    reason = "Big-endian prefixes are a supported wire format."
)]
pub fn bytes_to_u64(bytes: &[u8], size: usize, endianness: Endianness) -> Result<u64> {
    check_width(size)?;
    let Some(field) = bytes.get(..size) else {
        return Err(FramingError::IncompletePrefix {
            have: bytes.len(),
            need: size,
        });
    };

    let mut buf = [0u8; 8];
    let val = match endianness {
        Endianness::Big => {
            buf[8 - size..].copy_from_slice(field);
            u64::from_be_bytes(buf)
        }
        Endianness::Little => {
            buf[..size].copy_from_slice(field);
            u64::from_le_bytes(buf)
        }
    };
    Ok(val)
}

/// Converts a byte slice into a two's complement `i64`, sign-extending from
/// the top bit of the `size`-byte field.
///
/// # Errors
/// See [`bytes_to_u64`].
pub fn bytes_to_i64(bytes: &[u8], size: usize, endianness: Endianness) -> Result<i64> {
    let raw = bytes_to_u64(bytes, size, endianness)?;
    let width = u32::try_from(size).map_err(|_| FramingError::UnsupportedPrefixWidth(size))?;
    let shift = 64 - 8 * width;
    #[expect(
        clippy::cast_possible_wrap,
        reason = "Reinterpreting the raw bits is the point of sign extension."
    )]
    let signed = ((raw << shift) as i64) >> shift;
    Ok(signed)
}

/// Encodes `len` directly into `out` according to `size`, `endianness` and
/// signedness.
///
/// Returns the number of bytes written, always `size`. Bytes of `out` past
/// `size` are zeroed.
///
/// # Errors
/// Returns [`FramingError::UnsupportedPrefixWidth`] if the size is
/// unsupported or [`FramingError::FrameTooLarge`] if `len` does not fit into
/// the prefix.
#[must_use = "length prefix byte count must be used"]
#[expect(
    clippy::big_endian_bytes,
    reason = "Big-endian prefixes are a supported wire format."
)]
pub fn u64_to_bytes(
    len: usize,
    size: usize,
    endianness: Endianness,
    signed: bool,
    out: &mut [u8; 8],
) -> Result<usize> {
    check_width(size)?;
    let too_large = || FramingError::FrameTooLarge { len, width: size };
    let value = u64::try_from(len).map_err(|_| too_large())?;
    if u128::from(value) > prefix_max(size, signed) {
        return Err(too_large());
    }

    match endianness {
        Endianness::Big => out[..size].copy_from_slice(&value.to_be_bytes()[8 - size..]),
        Endianness::Little => out[..size].copy_from_slice(&value.to_le_bytes()[..size]),
    }
    out[size..].fill(0);

    Ok(size)
}
