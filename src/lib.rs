#![doc(html_root_url = "https://docs.rs/framing/latest")]
//! Public API for the `framing` library.
//!
//! This crate splits a continuous byte stream into length-prefixed frames.
//! One [`FramingBuffer`] handles one ordered stream: feed it chunks as they
//! arrive and it emits every complete frame, reassembling frames split across
//! reads and splitting reads that carry several frames.
//!
//! ```
//! use framing::FramingBuffer;
//!
//! let mut session = FramingBuffer::new();
//! session.subscribe(|frame| println!("frame of {} bytes", frame.len()));
//! session.feed(&b"\x00\x00\x00\x03abc"[..]).expect("well-formed stream");
//! ```

pub mod accumulator;
pub mod byte_order;
pub mod codec;
pub mod config;
pub mod decoder;
pub mod error;
pub mod frame;
pub mod length;
#[cfg(feature = "metrics")]
pub mod metrics;
pub mod stream;
pub mod subscriber;

pub use accumulator::Accumulator;
pub use codec::{LengthPrefixEncoder, encode_frame};
pub use config::FramingConfig;
pub use decoder::{DecodeState, FramingBuffer};
pub use error::{EofError, FramingError, Result};
pub use frame::{Endianness, LengthFormat};
pub use length::{LengthReader, NetworkI32};
pub use stream::{PumpSummary, pump};
pub use subscriber::SubscriptionId;
