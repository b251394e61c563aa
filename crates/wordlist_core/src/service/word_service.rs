//! Word use-case service.
//!
//! # Responsibility
//! - Be the single authorized access path to the word store.
//! - Expose the read stream and the fire-and-forget insert to callers.
//!
//! # Invariants
//! - No validation, normalization or trimming happens here; the service is a
//!   pure pass-through and the repository enforces model invariants.
//! - `clear` is deliberately not exposed: it exists in the store contract but
//!   is unreachable from this surface.

use crate::model::word::Word;
use crate::store::word_store::{WordStore, WordsFeed};

/// Mediator between callers and the word store.
///
/// Owns the one store instance for the process; nothing outside this service
/// should hold a `WordStore` of its own.
pub struct WordService {
    store: WordStore,
}

impl WordService {
    /// Wraps the single store handle constructed at startup.
    pub fn new(store: WordStore) -> Self {
        Self { store }
    }

    /// Subscribes to the ordered word list.
    ///
    /// The feed's first value is the current contents; every successful
    /// mutation afterwards produces a fresh full snapshot.
    pub fn words(&self) -> WordsFeed {
        self.store.subscribe()
    }

    /// Requests an insert and returns without waiting for completion.
    ///
    /// The caller's thread never touches storage; the word appears in a later
    /// feed emission, or nothing changes if it already existed.
    pub fn add(&self, word: Word) {
        self.store.add(word);
    }

    /// Shuts the underlying store down and joins its worker.
    pub fn close(self) {
        self.store.close();
    }
}
