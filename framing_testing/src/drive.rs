//! Push wire bytes through an in-memory duplex pipe.
//!
//! A writer task sends each chunk separately and shuts the pipe down; the
//! reader side decodes with either `FramedRead` or `framing::pump`.

use bytes::Bytes;
use framing::{FramingBuffer, FramingError, LengthReader, PumpSummary, pump};
use futures::StreamExt;
use tokio::io::{AsyncWriteExt, DuplexStream, duplex};
use tokio_util::codec::FramedRead;

fn spawn_writer(chunks: Vec<Bytes>, capacity: usize) -> DuplexStream {
    let (mut client, server) = duplex(capacity);
    tokio::spawn(async move {
        for chunk in chunks {
            if client.write_all(&chunk).await.is_err() {
                return;
            }
            if client.flush().await.is_err() {
                return;
            }
        }
        let _ = client.shutdown().await;
    });
    server
}

/// Decode `chunks` through `FramedRead`, collecting every frame.
///
/// Stops at the first error and returns it.
///
/// # Errors
///
/// Returns the decoder's error if the stream is malformed or truncated.
pub async fn decode_over_duplex<R>(
    chunks: Vec<Bytes>,
    capacity: usize,
    session: FramingBuffer<R>,
) -> Result<Vec<Bytes>, FramingError>
where
    R: LengthReader + Unpin,
{
    let server = spawn_writer(chunks, capacity);
    let mut framed = FramedRead::new(server, session);
    let mut frames = Vec::new();
    while let Some(frame) = framed.next().await {
        frames.push(frame?);
    }
    Ok(frames)
}

/// Feed `chunks` into `session` through [`pump`].
///
/// # Errors
///
/// Returns any error raised by [`pump`].
pub async fn pump_over_duplex<R: LengthReader>(
    chunks: Vec<Bytes>,
    capacity: usize,
    session: &mut FramingBuffer<R>,
) -> Result<PumpSummary, FramingError> {
    let mut server = spawn_writer(chunks, capacity);
    pump(&mut server, session).await
}
