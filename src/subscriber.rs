//! Synchronous frame subscribers.
//!
//! Every completed frame is handed to each registered callback, in
//! registration order, before the decoder continues. Callbacks run inline on
//! the caller's thread; a callback that blocks stalls the decoder.

use bytes::Bytes;

/// Handle returned by [`Subscribers::subscribe`], used to unsubscribe.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Callback = Box<dyn FnMut(&Bytes) + Send>;

/// Registry of frame callbacks.
#[derive(Default)]
pub struct Subscribers {
    next_id: u64,
    entries: Vec<(SubscriptionId, Callback)>,
}

impl Subscribers {
    /// Register `callback` to receive every subsequently completed frame.
    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: FnMut(&Bytes) + Send + 'static,
    {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, Box::new(callback)));
        id
    }

    /// Remove the callback registered under `id`.
    ///
    /// Returns `false` if no such subscription exists.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry, _)| *entry != id);
        self.entries.len() != before
    }

    /// Number of active subscriptions.
    #[must_use]
    pub fn len(&self) -> usize { self.entries.len() }

    /// Whether no callbacks are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool { self.entries.is_empty() }

    /// Deliver `frame` to every subscriber.
    pub fn notify(&mut self, frame: &Bytes) {
        for (_, callback) in &mut self.entries {
            callback(frame);
        }
    }
}

impl std::fmt::Debug for Subscribers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscribers")
            .field("len", &self.entries.len())
            .finish_non_exhaustive()
    }
}
