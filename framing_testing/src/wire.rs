//! Builders for length-prefixed wire streams and chunk layouts.

use bytes::{Bytes, BytesMut};
use framing::{LengthFormat, byte_order::write_network_i32, encode_frame};

/// One unit with the default 4-byte big-endian signed length field.
///
/// # Panics
///
/// Panics if `body` is longer than `i32::MAX` bytes.
#[must_use]
pub fn i32_unit(body: &[u8]) -> Vec<u8> {
    let len = i32::try_from(body.len()).expect("body length fits the default length field");
    let mut out = write_network_i32(len).to_vec();
    out.extend_from_slice(body);
    out
}

/// Back-to-back units using the default length field.
#[must_use]
pub fn i32_stream(bodies: &[&[u8]]) -> Vec<u8> { bodies.iter().flat_map(|b| i32_unit(b)).collect() }

/// Back-to-back units using `format`.
///
/// # Panics
///
/// Panics if a body does not fit the prefix width.
#[must_use]
pub fn encode_stream(format: LengthFormat, bodies: &[&[u8]]) -> Vec<u8> {
    let mut wire = BytesMut::new();
    for body in bodies {
        encode_frame(format, body, &mut wire).expect("body fits the length prefix");
    }
    wire.to_vec()
}

/// Cut `wire` at the given offsets.
///
/// Offsets are clamped to the stream length and sorted; duplicates produce
/// no empty chunks.
#[must_use]
pub fn split_at(wire: &[u8], offsets: &[usize]) -> Vec<Bytes> {
    let mut cuts: Vec<usize> = offsets.iter().map(|&o| o.min(wire.len())).collect();
    cuts.push(wire.len());
    cuts.sort_unstable();
    cuts.dedup();

    let mut start = 0;
    let mut chunks = Vec::with_capacity(cuts.len());
    for end in cuts {
        if end > start {
            chunks.push(Bytes::copy_from_slice(&wire[start..end]));
            start = end;
        }
    }
    chunks
}

/// Cut `wire` into chunks of `size` bytes; the last chunk may be shorter.
///
/// # Panics
///
/// Panics if `size` is zero.
#[must_use]
pub fn chunk_evenly(wire: &[u8], size: usize) -> Vec<Bytes> {
    wire.chunks(size).map(Bytes::copy_from_slice).collect()
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::{chunk_evenly, i32_stream, split_at};

    #[rstest]
    #[case(&[], vec![6])]
    #[case(&[2], vec![2, 4])]
    #[case(&[4, 2, 2], vec![2, 2, 2])]
    #[case(&[0, 9], vec![6])]
    fn split_layouts_cover_the_stream(#[case] offsets: &[usize], #[case] lens: Vec<usize>) {
        let wire = b"abcdef";
        let chunks = split_at(wire, offsets);
        assert_eq!(chunks.iter().map(|c| c.len()).collect::<Vec<_>>(), lens);
        assert_eq!(chunks.concat(), wire.to_vec());
    }

    #[test]
    fn even_chunks_keep_the_tail() {
        let chunks = chunk_evenly(b"abcdefg", 3);
        assert_eq!(chunks.len(), 3);
        assert_eq!(&chunks[2][..], b"g");
    }

    #[test]
    fn i32_stream_prefixes_each_body() {
        assert_eq!(i32_stream(&[b"a", b""]), vec![0, 0, 0, 1, b'a', 0, 0, 0, 0]);
    }
}
