//! `tokio_util` codec adapters.
//!
//! [`FramingBuffer`] implements [`Decoder`] so a session can sit directly
//! under a [`FramedRead`](tokio_util::codec::FramedRead):
//!
//! ```
//! use futures::StreamExt;
//! use tokio_util::codec::FramedRead;
//! use framing::FramingBuffer;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let wire: &[u8] = b"\x00\x00\x00\x02hi\x00\x00\x00\x00";
//! let mut frames = FramedRead::new(wire, FramingBuffer::new());
//! assert_eq!(frames.next().await.unwrap().unwrap(), &b"hi"[..]);
//! assert!(frames.next().await.unwrap().unwrap().is_empty());
//! assert!(frames.next().await.is_none());
//! # }
//! ```
//!
//! Frames decoded this way are yielded to the stream consumer; subscribers
//! registered on the session are not notified. [`LengthPrefixEncoder`]
//! writes the same wire format.

use bytes::{Bytes, BytesMut};
use tokio_util::codec::{Decoder, Encoder};

use crate::{
    decoder::{DecodeState, FramingBuffer},
    error::{EofError, FramingError, Result},
    frame::LengthFormat,
    length::LengthReader,
};

impl<R> FramingBuffer<R> {
    /// Describe how the stream would end if EOF arrived now.
    ///
    /// Returns `None` when the session sits exactly on a frame boundary.
    #[must_use]
    pub fn end_of_stream(&self) -> Option<EofError> {
        let bytes_received = self.buffered_len();
        match self.state() {
            DecodeState::AwaitingLength if bytes_received == 0 => None,
            DecodeState::AwaitingLength => Some(EofError::MidHeader {
                bytes_received,
                header_size: self.length_field_size(),
            }),
            DecodeState::AwaitingBody { expected_length } => Some(EofError::MidFrame {
                bytes_received,
                expected: expected_length,
            }),
        }
    }
}

impl<R: LengthReader> Decoder for FramingBuffer<R> {
    type Item = Bytes;
    type Error = FramingError;

    fn decode(&mut self, src: &mut BytesMut) -> Result<Option<Self::Item>> {
        if !src.is_empty() {
            self.extend(src.split().freeze());
        }
        self.decode_next()
    }

    fn decode_eof(&mut self, src: &mut BytesMut) -> Result<Option<Self::Item>> {
        if let Some(frame) = self.decode(src)? {
            return Ok(Some(frame));
        }
        match self.end_of_stream() {
            None => Ok(None),
            Some(eof) => {
                tracing::debug!(error = %eof, "stream ended inside a frame");
                Err(eof.into())
            }
        }
    }
}

/// Encoder writing bodies behind a fixed-width length field.
#[derive(Clone, Copy, Debug, Default)]
pub struct LengthPrefixEncoder {
    format: LengthFormat,
}

impl LengthPrefixEncoder {
    /// Construct an encoder for `format`.
    #[must_use]
    pub const fn new(format: LengthFormat) -> Self { Self { format } }

    /// The length format written before each body.
    #[must_use]
    pub fn format(&self) -> LengthFormat { self.format }
}

impl<T: AsRef<[u8]>> Encoder<T> for LengthPrefixEncoder {
    type Error = FramingError;

    fn encode(&mut self, item: T, dst: &mut BytesMut) -> Result<()> {
        encode_frame(self.format, item.as_ref(), dst)
    }
}

/// Append one `(length field, body)` unit to `dst`.
///
/// # Errors
///
/// Returns [`FramingError::FrameTooLarge`] if `body` is longer than `format`
/// can describe. `dst` is unchanged in that case.
pub fn encode_frame(format: LengthFormat, body: &[u8], dst: &mut BytesMut) -> Result<()> {
    dst.reserve(format.bytes + body.len());
    format.write_len(body.len(), dst)?;
    dst.extend_from_slice(body);
    Ok(())
}

#[cfg(test)]
mod tests;
