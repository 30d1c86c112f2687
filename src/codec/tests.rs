//! Unit tests for the codec adapters.
//!
//! Covers decoding through the `Decoder` trait, EOF classification and
//! encoding with `LengthPrefixEncoder`.

use bytes::{Bytes, BytesMut};
use rstest::rstest;
use tokio_util::codec::{Decoder, Encoder};

use super::*;
use crate::frame::Endianness;

fn encoded(format: LengthFormat, bodies: &[&[u8]]) -> BytesMut {
    let mut encoder = LengthPrefixEncoder::new(format);
    let mut wire = BytesMut::new();
    for body in bodies {
        encoder.encode(*body, &mut wire).expect("encode body");
    }
    wire
}

#[test]
fn decoder_yields_frames_then_waits() {
    let mut session = FramingBuffer::new();
    let mut wire = encoded(LengthFormat::default(), &[b"one", b"two"]);
    wire.extend_from_slice(&[0, 0]);

    assert_eq!(
        session.decode(&mut wire).expect("decode"),
        Some(Bytes::from_static(b"one"))
    );
    assert!(wire.is_empty(), "decoder takes ownership of buffered bytes");
    assert_eq!(
        session.decode(&mut wire).expect("decode"),
        Some(Bytes::from_static(b"two"))
    );
    assert_eq!(session.decode(&mut wire).expect("decode"), None);
    assert_eq!(session.buffered_len(), 2);
}

#[test]
fn clean_eof_at_frame_boundary() {
    let mut session = FramingBuffer::new();
    let mut wire = encoded(LengthFormat::default(), &[b"done"]);

    assert_eq!(
        session.decode_eof(&mut wire).expect("decode"),
        Some(Bytes::from_static(b"done"))
    );
    assert_eq!(session.decode_eof(&mut wire).expect("decode"), None);
    assert_eq!(session.end_of_stream(), None);
}

#[rstest]
#[case(vec![0, 0], EofError::MidHeader { bytes_received: 2, header_size: 4 })]
#[case(vec![0, 0, 0, 6, b'a', b'b'], EofError::MidFrame { bytes_received: 2, expected: 6 })]
fn truncated_streams_report_position(#[case] bytes: Vec<u8>, #[case] expected: EofError) {
    let mut session = FramingBuffer::new();
    let mut wire = BytesMut::from(bytes.as_slice());

    let err = session.decode_eof(&mut wire).unwrap_err();

    assert!(matches!(err, FramingError::Eof(eof) if eof == expected));
}

#[rstest]
#[case(LengthFormat::i32_be(), vec![0, 0, 0, 3, b'a', b'b', b'c'])]
#[case(LengthFormat::u16_le(), vec![3, 0, b'a', b'b', b'c'])]
fn encoder_writes_length_then_body(#[case] format: LengthFormat, #[case] expected: Vec<u8>) {
    let wire = encoded(format, &[b"abc"]);
    assert_eq!(&wire[..], expected.as_slice());
}

#[test]
fn encoder_rejects_bodies_beyond_prefix_range() {
    let mut encoder = LengthPrefixEncoder::new(LengthFormat::new(1, Endianness::Big, false));
    let mut wire = BytesMut::new();
    let body = vec![0u8; 256];

    let err = encoder.encode(body.as_slice(), &mut wire).unwrap_err();

    assert!(matches!(err, FramingError::FrameTooLarge { len: 256, width: 1 }));
    assert!(wire.is_empty());
}

#[test]
fn encoded_units_decode_back() {
    let format = LengthFormat::u32_le();
    let mut wire = encoded(format, &[b"", b"payload"]);
    let mut session = FramingBuffer::with_format(format).expect("valid format");

    assert_eq!(session.decode(&mut wire).expect("decode"), Some(Bytes::new()));
    assert_eq!(
        session.decode(&mut wire).expect("decode"),
        Some(Bytes::from_static(b"payload"))
    );
}
