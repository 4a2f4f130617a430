//! Rate limit storage backends

use std::time::Instant;

use dashmap::DashMap;

use super::types::RateLimitEntry;

/// Storage for per-identifier counters.
///
/// The limiter serializes check-and-increment itself, so implementations
/// only need per-call consistency.
pub trait RateLimitStore: Send + Sync + 'static {
    fn get(&self, key: &str) -> Option<RateLimitEntry>;

    fn set(&self, key: &str, entry: RateLimitEntry);

    fn delete(&self, key: &str);

    /// Drop entries whose window has ended; returns how many were removed
    fn retain_unexpired(&self, now: Instant) -> usize;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// In-process store. Counters are lost on restart and not shared between
/// processes.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    entries: DashMap<String, RateLimitEntry>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RateLimitStore for InMemoryStore {
    fn get(&self, key: &str) -> Option<RateLimitEntry> {
        self.entries.get(key).map(|entry| *entry)
    }

    fn set(&self, key: &str, entry: RateLimitEntry) {
        self.entries.insert(key.to_string(), entry);
    }

    fn delete(&self, key: &str) {
        self.entries.remove(key);
    }

    fn retain_unexpired(&self, now: Instant) -> usize {
        let before = self.entries.len();
        self.entries.retain(|_, entry| !entry.is_expired(now));
        before.saturating_sub(self.entries.len())
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}
