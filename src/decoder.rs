//! Length-prefixed frame decoder.
//!
//! [`FramingBuffer`] is fed arbitrarily chunked deliveries from one ordered
//! byte stream and emits every complete frame they contain. It alternates
//! between two explicit states:
//!
//! - [`DecodeState::AwaitingLength`]: waiting for `length_field_size` bytes.
//! - [`DecodeState::AwaitingBody`]: the length field has been consumed and
//!   `expected_length` body bytes are still needed.
//!
//! A zero-length frame passes through `AwaitingBody { expected_length: 0 }`
//! and completes on the same step, so it never stalls.
//!
//! ```
//! use std::sync::{Arc, Mutex};
//!
//! use framing::FramingBuffer;
//!
//! let frames = Arc::new(Mutex::new(Vec::new()));
//! let mut session = FramingBuffer::new();
//! let sink = Arc::clone(&frames);
//! session.subscribe(move |frame| sink.lock().unwrap().push(frame.clone()));
//!
//! session.feed(&b"\x00\x00\x00\x05hel"[..]).unwrap();
//! session.feed(&b"lo\x00\x00"[..]).unwrap();
//!
//! let frames = frames.lock().unwrap();
//! assert_eq!(frames.len(), 1);
//! assert_eq!(frames[0], &b"hello"[..]);
//! assert_eq!(session.buffered_len(), 2);
//! ```

use bytes::Bytes;

use crate::{
    accumulator::Accumulator,
    config::FramingConfig,
    error::{FramingError, Result},
    frame::{LengthFormat, conversion::check_width},
    length::{LengthReader, validate_length},
    subscriber::{SubscriptionId, Subscribers},
};

/// Position of the decoder within the current frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DecodeState {
    /// The next bytes are a length field.
    #[default]
    AwaitingLength,
    /// A length field was read; this many body bytes complete the frame.
    AwaitingBody { expected_length: usize },
}

/// Decoding session for one length-prefixed byte stream.
///
/// The session only needs `&mut self`; drive it from one caller at a time.
pub struct FramingBuffer<R = LengthFormat> {
    length_field_size: usize,
    reader: R,
    state: DecodeState,
    buffer: Accumulator,
    subscribers: Subscribers,
}

impl FramingBuffer {
    /// Create a session reading 4-byte big-endian signed length fields.
    #[must_use]
    pub fn new() -> Self { Self::from_valid_format(LengthFormat::default()) }

    /// Create a session for a built-in integer length field.
    ///
    /// # Errors
    ///
    /// Returns [`FramingError::UnsupportedPrefixWidth`] if `format.bytes` is
    /// not in `1..=8`.
    pub fn with_format(format: LengthFormat) -> Result<Self> {
        check_width(format.bytes)?;
        Ok(Self::from_valid_format(format))
    }

    /// Create a session from deserialised configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured width is zero or wider than 8
    /// bytes.
    pub fn from_config(config: &FramingConfig) -> Result<Self> {
        config.length_format().and_then(Self::with_format)
    }

    fn from_valid_format(format: LengthFormat) -> Self {
        Self {
            length_field_size: format.bytes,
            reader: format,
            state: DecodeState::AwaitingLength,
            buffer: Accumulator::new(),
            subscribers: Subscribers::default(),
        }
    }
}

impl Default for FramingBuffer {
    fn default() -> Self { Self::new() }
}

impl<R: LengthReader> FramingBuffer<R> {
    /// Create a session using a custom length reader.
    ///
    /// `reader` is always handed exactly `length_field_size` bytes.
    ///
    /// # Errors
    ///
    /// Returns [`FramingError::ZeroLengthFieldSize`] if `length_field_size`
    /// is zero.
    pub fn with_reader(length_field_size: usize, reader: R) -> Result<Self> {
        if length_field_size == 0 {
            return Err(FramingError::ZeroLengthFieldSize);
        }
        Ok(Self {
            length_field_size,
            reader,
            state: DecodeState::AwaitingLength,
            buffer: Accumulator::new(),
            subscribers: Subscribers::default(),
        })
    }

    /// Append `chunk` and emit every frame that can now be completed.
    ///
    /// Frames are delivered to all subscribers, in stream order, before this
    /// call returns. Returns the number of frames emitted. An empty chunk is
    /// a no-op apart from retrying the decode loop.
    ///
    /// # Errors
    ///
    /// Returns an error if the length reader fails or yields a negative or
    /// unaddressable length. Frames completed earlier in the same call have
    /// already been delivered; the faulty length field has been consumed, so
    /// the stream is no longer aligned and the session should be dropped or
    /// [`reset`](Self::reset).
    pub fn feed(&mut self, chunk: impl Into<Bytes>) -> Result<usize> {
        self.buffer.append(chunk);
        let mut emitted = 0;
        while let Some(frame) = self.decode_next()? {
            self.subscribers.notify(&frame);
            emitted += 1;
        }
        Ok(emitted)
    }

    /// Append `chunk` without attempting to decode.
    pub fn extend(&mut self, chunk: impl Into<Bytes>) { self.buffer.append(chunk); }

    /// Advance the state machine until one frame completes or no further
    /// progress is possible.
    ///
    /// Returns the completed frame instead of notifying subscribers.
    ///
    /// # Errors
    ///
    /// See [`feed`](Self::feed).
    pub fn decode_next(&mut self) -> Result<Option<Bytes>> {
        let result = self.step();
        if let Err(err) = &result {
            tracing::error!(error = %err, state = ?self.state, "frame decoding failed");
            #[cfg(feature = "metrics")]
            crate::metrics::inc_errors(err.error_type());
        }
        result
    }

    fn step(&mut self) -> Result<Option<Bytes>> {
        loop {
            match self.state {
                DecodeState::AwaitingLength => {
                    if self.buffer.len() < self.length_field_size {
                        return Ok(None);
                    }
                    let field = self.buffer.extract(self.length_field_size)?;
                    let expected_length = validate_length(self.reader.read_length(&field)?)?;
                    tracing::debug!(expected_length, "read length field");
                    self.state = DecodeState::AwaitingBody { expected_length };
                }
                DecodeState::AwaitingBody { expected_length } => {
                    if self.buffer.len() < expected_length {
                        return Ok(None);
                    }
                    let frame = self.buffer.extract(expected_length)?;
                    self.state = DecodeState::AwaitingLength;
                    tracing::trace!(len = frame.len(), remaining = self.buffer.len(), "frame complete");
                    #[cfg(feature = "metrics")]
                    crate::metrics::inc_frames(frame.len());
                    return Ok(Some(frame));
                }
            }
        }
    }

    /// Register `callback` to receive every frame completed by
    /// [`feed`](Self::feed).
    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: FnMut(&Bytes) + Send + 'static,
    {
        self.subscribers.subscribe(callback)
    }

    /// Remove a subscription. Returns `false` if it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool { self.subscribers.unsubscribe(id) }

    /// Number of registered subscribers.
    #[must_use]
    pub fn subscriber_count(&self) -> usize { self.subscribers.len() }

    /// Discard buffered bytes and return to [`DecodeState::AwaitingLength`].
    ///
    /// Subscribers stay registered.
    pub fn reset(&mut self) {
        self.buffer.clear();
        self.state = DecodeState::AwaitingLength;
    }
}

impl<R> FramingBuffer<R> {
    /// Current decoder state.
    #[must_use]
    pub fn state(&self) -> DecodeState { self.state }

    /// Bytes buffered but not yet consumed into a length field or frame.
    #[must_use]
    pub fn buffered_len(&self) -> usize { self.buffer.len() }

    /// Configured length field size in bytes.
    #[must_use]
    pub fn length_field_size(&self) -> usize { self.length_field_size }

    /// The length reader in use.
    #[must_use]
    pub fn reader(&self) -> &R { &self.reader }
}

impl<R: std::fmt::Debug> std::fmt::Debug for FramingBuffer<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FramingBuffer")
            .field("length_field_size", &self.length_field_size)
            .field("reader", &self.reader)
            .field("state", &self.state)
            .field("buffered_len", &self.buffer.len())
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}
