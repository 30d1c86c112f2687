//! Pluggable length-field readers.
//!
//! A [`LengthReader`] turns the fixed-size span at the start of each frame
//! into the frame's body length. [`LengthFormat`] covers the fixed-width
//! integer encodings; anything else can be supplied as a closure:
//!
//! ```
//! use framing::FramingBuffer;
//!
//! // Three-byte big-endian length field.
//! let reader = |field: &[u8]| {
//!     field
//!         .iter()
//!         .fold(0i64, |acc, byte| (acc << 8) | i64::from(*byte))
//! };
//! let mut session = FramingBuffer::with_reader(3, reader).expect("valid size");
//! assert_eq!(session.feed(&b"\x00\x00\x02hi"[..]).expect("decode"), 1);
//! ```

use crate::{
    byte_order::read_network_i32,
    error::{FramingError, Result},
    frame::LengthFormat,
};

/// Strategy converting a length field into a frame body length.
///
/// The decoder hands the reader exactly `length_field_size` bytes. The value
/// returned is validated by the decoder: negative lengths and lengths that do
/// not fit in `usize` are faults.
pub trait LengthReader {
    /// Decode the body length encoded in `field`.
    ///
    /// # Errors
    ///
    /// Returns an error if `field` cannot be interpreted as a length.
    fn read_length(&self, field: &[u8]) -> Result<i64>;
}

impl<F> LengthReader for F
where
    F: Fn(&[u8]) -> i64,
{
    fn read_length(&self, field: &[u8]) -> Result<i64> { Ok(self(field)) }
}

impl LengthReader for LengthFormat {
    fn read_length(&self, field: &[u8]) -> Result<i64> { self.read_raw(field) }
}

/// Reader for a 4-byte big-endian signed length field.
///
/// Equivalent to [`LengthFormat::i32_be`] but without the generic width
/// handling. Fields shorter than four bytes are rejected; only the first four
/// bytes of longer fields are used.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NetworkI32;

impl LengthReader for NetworkI32 {
    fn read_length(&self, field: &[u8]) -> Result<i64> {
        let bytes = field
            .first_chunk::<4>()
            .ok_or(FramingError::IncompletePrefix {
                have: field.len(),
                need: 4,
            })?;
        Ok(i64::from(read_network_i32(*bytes)))
    }
}

/// Convert a raw reader value into a body length.
pub(crate) fn validate_length(raw: i64) -> Result<usize> {
    let value = u64::try_from(raw).map_err(|_| FramingError::NegativeLength(raw))?;
    usize::try_from(value).map_err(|_| FramingError::LengthOverflow(value))
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::{LengthReader, NetworkI32, validate_length};
    use crate::{error::FramingError, frame::LengthFormat};

    #[rstest]
    #[case(&[0, 0, 0, 4], 4)]
    #[case(&[0, 0, 1, 0], 256)]
    #[case(&[0xFF, 0xFF, 0xFF, 0xFE], -2)]
    fn network_reader_matches_default_format(#[case] field: &[u8], #[case] expected: i64) {
        assert_eq!(NetworkI32.read_length(field).expect("read length"), expected);
        assert_eq!(
            LengthFormat::default()
                .read_length(field)
                .expect("read length"),
            expected
        );
    }

    #[rstest]
    #[case(&[])]
    #[case(&[0, 5])]
    #[case(&[0, 0, 5])]
    fn network_reader_rejects_short_fields(#[case] field: &[u8]) {
        let err = NetworkI32.read_length(field).unwrap_err();
        assert!(matches!(
            err,
            FramingError::IncompletePrefix { have, need: 4 } if have == field.len()
        ));
    }

    #[test]
    fn closures_act_as_readers() {
        let reader = |field: &[u8]| i64::from(field[0]) * 2;
        assert_eq!(reader.read_length(&[21]).expect("read length"), 42);
    }

    #[test]
    fn negative_values_are_rejected() {
        let err = validate_length(-5).unwrap_err();
        assert!(matches!(err, FramingError::NegativeLength(-5)));
    }

    #[rstest]
    #[case(0, 0)]
    #[case(17, 17)]
    fn non_negative_values_pass(#[case] raw: i64, #[case] expected: usize) {
        assert_eq!(validate_length(raw).expect("valid length"), expected);
    }
}
