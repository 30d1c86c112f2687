//! Steps for length-prefixed decoding scenarios.
use cucumber::{given, then, when};

use crate::world::{FramingWorld, TestResult};

#[given(expr = "a decoder with a {int} byte {word} {word} length field")]
fn given_decoder(
    world: &mut FramingWorld,
    bytes: usize,
    endianness: String,
    signedness: String,
) -> TestResult {
    world.configure(bytes, &endianness, &signedness)
}

#[when(expr = "the bodies {string} are delivered in chunks of {int} bytes")]
fn when_bodies(world: &mut FramingWorld, bodies: String, chunk_size: usize) -> TestResult {
    world.deliver_bodies(&bodies, chunk_size)
}

#[when(expr = "the raw bytes {string} are delivered")]
fn when_raw(world: &mut FramingWorld, hex: String) -> TestResult { world.deliver_hex(&hex) }

#[then(expr = "{int} frames are emitted")]
fn then_count(world: &mut FramingWorld, expected: usize) -> TestResult {
    world.assert_frame_count(expected)
}

#[then(expr = "frame {int} is {string}")]
fn then_frame(world: &mut FramingWorld, index: usize, body: String) -> TestResult {
    world.assert_frame(index, &body)
}

#[then(expr = "{int} bytes remain buffered")]
fn then_buffered(world: &mut FramingWorld, expected: usize) -> TestResult {
    world.assert_buffered(expected)
}

#[then(expr = "decoding fails with a {word} error")]
fn then_error(world: &mut FramingWorld, kind: String) -> TestResult {
    world.assert_error_kind(&kind)
}

#[then(expr = "the stream end reports a truncated {word}")]
fn then_truncated(world: &mut FramingWorld, part: String) -> TestResult {
    world.assert_truncated(&part)
}
