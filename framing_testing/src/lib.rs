//! Utilities for exercising [`FramingBuffer`](framing::FramingBuffer)
//! sessions in tests.
//!
//! Helpers build well-formed wire streams, cut them into awkward chunk
//! layouts, record emitted frames and push streams through in-memory duplex
//! pipes.
//!
//! ```rust
//! use framing::FramingBuffer;
//! use framing_testing::{FrameLog, i32_stream, split_at};
//!
//! let wire = i32_stream(&[b"ab", b"cde"]);
//! let mut session = FramingBuffer::new();
//! let log = FrameLog::attach(&mut session);
//! for chunk in split_at(&wire, &[3, 7]) {
//!     session.feed(chunk).unwrap();
//! }
//! assert_eq!(log.bodies(), vec![b"ab".to_vec(), b"cde".to_vec()]);
//! ```

pub mod collect;
pub mod drive;
pub mod logging;
pub mod macros;
pub mod wire;

pub use collect::FrameLog;
pub use drive::{decode_over_duplex, pump_over_duplex};
pub use logging::{LoggerHandle, logger};
pub use wire::{chunk_evenly, encode_stream, i32_stream, i32_unit, split_at};
