#![cfg(feature = "metrics")]
//! Tests for `framing` metrics.
//!
//! These tests verify that counters update as expected using
//! `metrics_util::debugging::DebuggingRecorder`.
use bytes::Bytes;
use framing::{FramingBuffer, byte_order::write_network_i32, metrics as framing_metrics};
use framing_testing::i32_stream;
use metrics_util::debugging::{DebugValue, DebuggingRecorder, Snapshotter};
use rstest::rstest;

/// Creates a debugging recorder and snapshotter for metrics testing.
fn debugging_recorder_setup() -> (Snapshotter, DebuggingRecorder) {
    let recorder = DebuggingRecorder::new();
    let snapshotter = recorder.snapshotter();
    (snapshotter, recorder)
}

fn counter_value(snapshotter: &Snapshotter, name: &str, label: Option<(&str, &str)>) -> u64 {
    snapshotter
        .snapshot()
        .into_vec()
        .into_iter()
        .filter(|(k, _, _, _)| {
            k.key().name() == name
                && label.is_none_or(|(key, value)| {
                    k.key()
                        .labels()
                        .any(|l| l.key() == key && l.value() == value)
                })
        })
        .map(|(_, _, _, v)| match v {
            DebugValue::Counter(c) => c,
            _ => 0,
        })
        .sum()
}

#[rstest]
#[case(&[b"a".as_slice()], 1, 1)]
#[case(&[b"abc".as_slice(), b"".as_slice(), b"de".as_slice()], 3, 5)]
fn decoded_frames_are_counted(#[case] bodies: &[&[u8]], #[case] frames: u64, #[case] bytes: u64) {
    let (snapshotter, recorder) = debugging_recorder_setup();
    let wire = i32_stream(bodies);

    metrics::with_local_recorder(&recorder, || {
        let mut session = FramingBuffer::new();
        session.feed(wire).expect("well-formed stream");
    });

    assert_eq!(
        counter_value(&snapshotter, framing_metrics::FRAMES_DECODED, None),
        frames
    );
    assert_eq!(
        counter_value(&snapshotter, framing_metrics::FRAME_BYTES, None),
        bytes
    );
}

#[test]
fn negative_length_counts_a_length_error() {
    let (snapshotter, recorder) = debugging_recorder_setup();

    metrics::with_local_recorder(&recorder, || {
        let mut session = FramingBuffer::new();
        let _ = session.feed(Bytes::copy_from_slice(&write_network_i32(-1)));
    });

    assert_eq!(
        counter_value(
            &snapshotter,
            framing_metrics::ERRORS_TOTAL,
            Some(("kind", "length"))
        ),
        1
    );
}

#[test]
fn partial_input_records_nothing() {
    let (snapshotter, recorder) = debugging_recorder_setup();

    metrics::with_local_recorder(&recorder, || {
        let mut session = FramingBuffer::new();
        session.feed(&b"\x00\x00"[..]).expect("partial header");
    });

    assert_eq!(
        counter_value(&snapshotter, framing_metrics::FRAMES_DECODED, None),
        0
    );
}
