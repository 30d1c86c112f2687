//! Drive a session from an async byte source.
//!
//! [`pump`] reads chunks until EOF and feeds each one to the session, so
//! subscribers see frames exactly as they would from manual `feed` calls.
//! No read happens while a `feed` is in progress.

use bytes::BytesMut;
use tokio::io::{AsyncRead, AsyncReadExt};

use crate::{decoder::FramingBuffer, error::Result, length::LengthReader};

/// Default number of bytes requested per read.
pub const DEFAULT_READ_CAPACITY: usize = 8 * 1024;

/// Totals gathered while pumping a stream to completion.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PumpSummary {
    /// Number of non-empty reads fed to the session.
    pub chunks: usize,
    /// Total bytes read from the source.
    pub bytes_read: u64,
    /// Frames emitted to subscribers.
    pub frames: usize,
}

/// Feed everything `source` yields into `session` until EOF.
///
/// # Errors
///
/// Returns [`FramingError::Io`](crate::FramingError::Io) if a read fails, any
/// decoding fault raised by [`FramingBuffer::feed`], or
/// [`FramingError::Eof`](crate::FramingError::Eof) if the source ends inside
/// a frame.
pub async fn pump<S, R>(source: &mut S, session: &mut FramingBuffer<R>) -> Result<PumpSummary>
where
    S: AsyncRead + Unpin,
    R: LengthReader,
{
    pump_with_capacity(source, session, DEFAULT_READ_CAPACITY).await
}

/// Like [`pump`], requesting at most `capacity` bytes per read.
///
/// A `capacity` of zero is treated as one byte.
///
/// # Errors
///
/// See [`pump`].
pub async fn pump_with_capacity<S, R>(
    source: &mut S,
    session: &mut FramingBuffer<R>,
    capacity: usize,
) -> Result<PumpSummary>
where
    S: AsyncRead + Unpin,
    R: LengthReader,
{
    let capacity = capacity.max(1);
    let mut summary = PumpSummary::default();
    let mut buf = BytesMut::with_capacity(capacity);

    loop {
        buf.reserve(capacity);
        let n = (&mut *source).take(capacity as u64).read_buf(&mut buf).await?;
        if n == 0 {
            break;
        }
        summary.chunks += 1;
        summary.bytes_read += n as u64;
        summary.frames += session.feed(buf.split().freeze())?;
    }

    if let Some(eof) = session.end_of_stream() {
        tracing::warn!(error = %eof, frames = summary.frames, "source ended inside a frame");
        return Err(eof.into());
    }
    tracing::debug!(
        chunks = summary.chunks,
        bytes_read = summary.bytes_read,
        frames = summary.frames,
        "source drained"
    );
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use std::sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    };

    use rstest::rstest;
    use tokio::io::AsyncWriteExt;

    use super::{PumpSummary, pump, pump_with_capacity};
    use crate::{
        decoder::FramingBuffer,
        error::{EofError, FramingError},
    };

    #[rstest]
    #[case(1, 10)]
    #[case(3, 4)]
    #[case(1024, 1)]
    #[tokio::test]
    async fn pump_feeds_every_chunk(#[case] capacity: usize, #[case] chunks: usize) {
        let wire: &[u8] = b"\x00\x00\x00\x01a\x00\x00\x00\x01b";
        let mut source = wire;
        let count = Arc::new(AtomicUsize::new(0));
        let mut session = FramingBuffer::new();
        let seen = Arc::clone(&count);
        session.subscribe(move |_| {
            seen.fetch_add(1, Ordering::SeqCst);
        });

        let summary = pump_with_capacity(&mut source, &mut session, capacity)
            .await
            .expect("pump");

        assert_eq!(
            summary,
            PumpSummary {
                chunks,
                bytes_read: 10,
                frames: 2,
            }
        );
        assert_eq!(count.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn pump_reports_truncated_frame() {
        let (mut client, mut server) = tokio::io::duplex(64);
        client
            .write_all(b"\x00\x00\x00\x05abc")
            .await
            .expect("write");
        drop(client);

        let mut session = FramingBuffer::new();
        let err = pump(&mut server, &mut session).await.unwrap_err();

        assert!(matches!(
            err,
            FramingError::Eof(EofError::MidFrame {
                bytes_received: 3,
                expected: 5
            })
        ));
    }

    #[tokio::test]
    async fn empty_source_is_a_clean_close() {
        let mut source: &[u8] = &[];
        let mut session = FramingBuffer::new();
        let summary = pump(&mut source, &mut session).await.expect("pump");
        assert_eq!(summary, PumpSummary::default());
    }
}
