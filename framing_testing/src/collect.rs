//! Recording subscriber for assertions on emitted frames.

use std::sync::{Arc, Mutex, PoisonError};

use bytes::Bytes;
use framing::{FramingBuffer, LengthReader, SubscriptionId};

/// Shared log of every frame a session emitted, in emission order.
#[derive(Clone, Debug, Default)]
pub struct FrameLog {
    frames: Arc<Mutex<Vec<Bytes>>>,
}

impl FrameLog {
    /// Subscribe a new log to `session`.
    pub fn attach<R: LengthReader>(session: &mut FramingBuffer<R>) -> Self {
        Self::attach_with_id(session).0
    }

    /// Subscribe a new log to `session`, also returning the subscription.
    pub fn attach_with_id<R: LengthReader>(session: &mut FramingBuffer<R>) -> (Self, SubscriptionId) {
        let log = Self::default();
        let sink = Arc::clone(&log.frames);
        let id = session.subscribe(move |frame| {
            sink.lock()
                .unwrap_or_else(PoisonError::into_inner)
                .push(frame.clone());
        });
        (log, id)
    }

    /// Snapshot of the recorded frames.
    pub fn frames(&self) -> Vec<Bytes> {
        self.frames
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Recorded frame bodies as owned vectors.
    pub fn bodies(&self) -> Vec<Vec<u8>> { self.frames().iter().map(|f| f.to_vec()).collect() }

    /// Number of recorded frames.
    pub fn len(&self) -> usize {
        self.frames
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Whether nothing has been recorded.
    pub fn is_empty(&self) -> bool { self.len() == 0 }
}

#[cfg(test)]
mod tests {
    use bytes::Bytes;
    use framing::FramingBuffer;

    use super::FrameLog;
    use crate::i32_stream;

    #[test]
    fn detached_log_stops_recording() {
        let mut session = FramingBuffer::new();
        let (log, id) = FrameLog::attach_with_id(&mut session);
        let wire = i32_stream(&[b"kept", b"dropped"]);
        let (first, second) = wire.split_at(8);

        session.feed(Bytes::copy_from_slice(first)).expect("first frame");
        assert!(session.unsubscribe(id));
        session.feed(Bytes::copy_from_slice(second)).expect("second frame");

        assert_eq!(log.bodies(), vec![b"kept".to_vec()]);
        assert!(!log.is_empty());
    }
}
