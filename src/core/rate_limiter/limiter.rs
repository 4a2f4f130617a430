//! Core rate limiter implementation

use std::sync::Arc;
use std::time::Instant;

use parking_lot::Mutex;
use tracing::{debug, warn};

use super::store::{InMemoryStore, RateLimitStore};
use super::types::{RateLimitEntry, RateLimitPolicy, RateLimitResult, ceil_secs};

/// Fixed-window rate limiter over a pluggable store
pub struct RateLimiter {
    pub(super) store: Arc<dyn RateLimitStore>,
    /// Serializes read-modify-write on the store
    pub(super) lock: Mutex<()>,
    pub(super) enabled: bool,
}

impl RateLimiter {
    /// Create a new rate limiter backed by an in-memory store
    pub fn new(enabled: bool) -> Self {
        Self::with_store(Arc::new(InMemoryStore::new()), enabled)
    }

    pub fn with_store(store: Arc<dyn RateLimitStore>, enabled: bool) -> Self {
        Self {
            store,
            lock: Mutex::new(()),
            enabled,
        }
    }

    /// Count one request against `key` and report whether it may proceed
    pub fn check(&self, key: &str, policy: &RateLimitPolicy) -> RateLimitResult {
        self.check_at(key, policy, Instant::now())
    }

    /// `check` with an explicit clock reading
    pub fn check_at(&self, key: &str, policy: &RateLimitPolicy, now: Instant) -> RateLimitResult {
        if !self.enabled {
            return Self::unlimited(policy);
        }

        let _guard = self.lock.lock();

        match self.store.get(key).filter(|entry| !entry.is_expired(now)) {
            None => {
                let entry = RateLimitEntry {
                    count: 1,
                    window_reset_at: now + policy.window,
                };
                self.store.set(key, entry);
                debug!(key = key, "Rate limit window started");
                RateLimitResult {
                    allowed: policy.max_requests > 0,
                    limit: policy.max_requests,
                    remaining: policy.max_requests.saturating_sub(1),
                    reset_in_seconds: ceil_secs(policy.window),
                }
            }
            Some(entry) if entry.count >= policy.max_requests => {
                let reset_in_seconds = ceil_secs(entry.window_reset_at.duration_since(now));
                warn!(
                    key = key,
                    limit = policy.max_requests,
                    reset_in_seconds = reset_in_seconds,
                    "Rate limit exceeded"
                );
                RateLimitResult {
                    allowed: false,
                    limit: policy.max_requests,
                    remaining: 0,
                    reset_in_seconds,
                }
            }
            Some(mut entry) => {
                entry.count += 1;
                self.store.set(key, entry);
                RateLimitResult {
                    allowed: true,
                    limit: policy.max_requests,
                    remaining: policy.max_requests.saturating_sub(entry.count),
                    reset_in_seconds: ceil_secs(entry.window_reset_at.duration_since(now)),
                }
            }
        }
    }

    /// Report usage for `key` without counting a request
    pub fn peek(&self, key: &str, policy: &RateLimitPolicy) -> RateLimitResult {
        self.peek_at(key, policy, Instant::now())
    }

    pub fn peek_at(&self, key: &str, policy: &RateLimitPolicy, now: Instant) -> RateLimitResult {
        if !self.enabled {
            return Self::unlimited(policy);
        }

        match self.store.get(key).filter(|entry| !entry.is_expired(now)) {
            Some(entry) => {
                let remaining = policy.max_requests.saturating_sub(entry.count);
                RateLimitResult {
                    allowed: remaining > 0,
                    limit: policy.max_requests,
                    remaining,
                    reset_in_seconds: ceil_secs(entry.window_reset_at.duration_since(now)),
                }
            }
            None => Self::unlimited(policy),
        }
    }

    /// Forget the counter for `key`
    pub fn reset(&self, key: &str) {
        let _guard = self.lock.lock();
        self.store.delete(key);
    }

    fn unlimited(policy: &RateLimitPolicy) -> RateLimitResult {
        RateLimitResult {
            allowed: true,
            limit: policy.max_requests,
            remaining: policy.max_requests,
            reset_in_seconds: 0,
        }
    }
}

impl std::fmt::Debug for RateLimiter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RateLimiter")
            .field("enabled", &self.enabled)
            .field("tracked_keys", &self.store.len())
            .finish()
    }
}
