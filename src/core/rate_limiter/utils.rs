//! Rate limiter utility functions

use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::task::JoinHandle;
use tracing::debug;

use super::limiter::RateLimiter;

impl RateLimiter {
    /// Remove expired entries; returns how many were dropped
    pub fn cleanup(&self) -> usize {
        let _guard = self.lock.lock();
        let removed = self.store.retain_unexpired(Instant::now());
        if removed > 0 {
            debug!(removed = removed, "Cleaned up expired rate limit entries");
        }
        removed
    }

    /// Sweep expired entries every `interval` until the task is aborted
    pub fn start_cleanup_task(self: Arc<Self>, interval: Duration) -> JoinHandle<()> {
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            ticker.tick().await;
            loop {
                ticker.tick().await;
                self.cleanup();
            }
        })
    }

    /// Number of identifiers currently tracked, expired ones included
    pub fn tracked_keys(&self) -> usize {
        self.store.len()
    }

    /// Check if rate limiting is enabled
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }
}
