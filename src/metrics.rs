//! Metric helpers for `framing`.
//!
//! This module defines metric names and simple helper functions
//! wrapping the [`metrics`](https://docs.rs/metrics) crate.

use metrics::counter;

/// Name of the counter tracking decoded frames.
pub const FRAMES_DECODED: &str = "framing_frames_decoded_total";
/// Name of the counter tracking body bytes delivered in decoded frames.
pub const FRAME_BYTES: &str = "framing_frame_bytes_total";
/// Name of the counter tracking faults, labelled by category.
pub const ERRORS_TOTAL: &str = "framing_errors_total";

/// Record one decoded frame carrying `len` body bytes.
pub fn inc_frames(len: usize) {
    counter!(FRAMES_DECODED).increment(1);
    counter!(FRAME_BYTES).increment(u64::try_from(len).unwrap_or(u64::MAX));
}

/// Record a fault of the given category.
pub fn inc_errors(kind: &'static str) { counter!(ERRORS_TOTAL, "kind" => kind).increment(1); }
