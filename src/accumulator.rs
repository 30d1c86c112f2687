//! Segmented byte accumulator feeding the frame decoder.
//!
//! Chunks are kept as the [`Bytes`] handles they arrived in. Appending never
//! copies; extracting a span that lies within the front segment is a
//! zero-copy split, while a span crossing segments is gathered into one
//! contiguous buffer. Callers cannot observe where chunk boundaries fell.

use std::collections::VecDeque;

use bytes::{Bytes, BytesMut};

use crate::error::{FramingError, Result};

/// Ordered store of received bytes not yet consumed by the decoder.
#[derive(Debug, Default)]
pub struct Accumulator {
    segments: VecDeque<Bytes>,
    len: usize,
}

impl Accumulator {
    /// Create an empty accumulator.
    #[must_use]
    pub fn new() -> Self { Self::default() }

    /// Append `chunk` after all buffered bytes. Empty chunks are ignored.
    pub fn append(&mut self, chunk: impl Into<Bytes>) {
        let chunk = chunk.into();
        if chunk.is_empty() {
            return;
        }
        self.len += chunk.len();
        self.segments.push_back(chunk);
    }

    /// Total number of buffered bytes.
    #[must_use]
    pub fn len(&self) -> usize { self.len }

    /// Whether no bytes are buffered.
    #[must_use]
    pub fn is_empty(&self) -> bool { self.len == 0 }

    /// Number of appended chunks still (partially) held.
    #[must_use]
    pub fn segment_count(&self) -> usize { self.segments.len() }

    /// Remove and return exactly the first `n` buffered bytes.
    ///
    /// # Errors
    ///
    /// Returns [`FramingError::Underflow`] if fewer than `n` bytes are
    /// buffered. The accumulator is left untouched in that case.
    pub fn extract(&mut self, n: usize) -> Result<Bytes> {
        if n > self.len {
            return Err(FramingError::Underflow {
                requested: n,
                available: self.len,
            });
        }
        if n == 0 {
            return Ok(Bytes::new());
        }

        let within_front = self.segments.front().is_some_and(|front| front.len() >= n);
        let out = if within_front {
            self.split_front(n)?
        } else {
            self.gather(n)?
        };
        self.len -= n;
        Ok(out)
    }

    /// Zero-copy split of `n` bytes off the front segment.
    fn split_front(&mut self, n: usize) -> Result<Bytes> {
        let Some(front) = self.segments.front_mut() else {
            return Err(self.desync(n));
        };
        let out = front.split_to(n);
        if front.is_empty() {
            self.segments.pop_front();
        }
        Ok(out)
    }

    /// Copy `n` bytes spanning several segments into one buffer.
    fn gather(&mut self, n: usize) -> Result<Bytes> {
        let mut out = BytesMut::with_capacity(n);
        while out.len() < n {
            let Some(front) = self.segments.front_mut() else {
                return Err(self.desync(n));
            };
            let take = front.len().min(n - out.len());
            out.extend_from_slice(&front.split_to(take));
            if front.is_empty() {
                self.segments.pop_front();
            }
        }
        Ok(out.freeze())
    }

    /// The segments ran out before the tracked length did. Resynchronise the
    /// length with what is actually held and report the shortfall.
    fn desync(&mut self, requested: usize) -> FramingError {
        let tracked = self.len;
        self.len = self.segments.iter().map(Bytes::len).sum();
        tracing::error!(
            requested,
            tracked,
            held = self.len,
            "accumulator length out of step with its segments"
        );
        FramingError::Underflow {
            requested,
            available: self.len,
        }
    }

    /// Discard all buffered bytes.
    pub fn clear(&mut self) {
        self.segments.clear();
        self.len = 0;
    }
}
