//! Assertion macros shared by test helpers and integration tests.

/// Feed a chunk and panic with contextual diagnostics on failure.
///
/// Evaluates to the number of frames emitted.
#[macro_export]
macro_rules! feed_expect {
    ($session:expr, $chunk:expr) => {{
        $session
            .feed($chunk)
            .expect(concat!("feed failed at ", file!(), ":", line!()))
    }};
    ($session:expr, $chunk:expr, $msg:expr) => {{
        let m = ::std::format!("{msg} at {}:{}", file!(), line!(), msg = $msg);
        $session.feed($chunk).expect(&m)
    }};
}

pub use crate::feed_expect;
