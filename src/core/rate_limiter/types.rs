//! Rate limiter types and data structures

use std::time::{Duration, Instant};

use crate::config::{MAX_WINDOW_SECS, PolicyConfig};

/// Fixed-window policy: at most `max_requests` per `window`.
/// Windows longer than 30 days are clamped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitPolicy {
    pub max_requests: u32,
    pub window: Duration,
}

impl RateLimitPolicy {
    pub const fn new(max_requests: u32, window: Duration) -> Self {
        let window = if window.as_secs() > MAX_WINDOW_SECS {
            Duration::from_secs(MAX_WINDOW_SECS)
        } else {
            window
        };
        Self {
            max_requests,
            window,
        }
    }
}

impl From<&PolicyConfig> for RateLimitPolicy {
    fn from(config: &PolicyConfig) -> Self {
        Self::new(config.max_requests, config.window())
    }
}

/// Counter for one identifier. Past `window_reset_at` it is logically absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitEntry {
    pub count: u32,
    pub window_reset_at: Instant,
}

impl RateLimitEntry {
    pub fn is_expired(&self, now: Instant) -> bool {
        now >= self.window_reset_at
    }
}

/// Rate limit result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitResult {
    /// Whether the request is allowed
    pub allowed: bool,
    /// Maximum requests allowed
    pub limit: u32,
    /// Remaining requests in the window
    pub remaining: u32,
    /// Whole seconds until the window resets, rounded up
    pub reset_in_seconds: u64,
}

/// Which policy a key belongs to; also the key prefix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RateLimitScope {
    /// Chat and diet generation
    Ai,
    /// Admin login
    Auth,
    /// Contact form
    Contact,
}

impl RateLimitScope {
    pub fn prefix(&self) -> &'static str {
        match self {
            RateLimitScope::Ai => "ai",
            RateLimitScope::Auth => "login",
            RateLimitScope::Contact => "contact",
        }
    }

    /// Store key for an identifier, e.g. `ai_user_42`
    pub fn key(&self, identifier: &str) -> String {
        format!("{}_{}", self.prefix(), identifier)
    }
}

/// Seconds until `deadline`, rounded up
pub(crate) fn ceil_secs(duration: Duration) -> u64 {
    let millis = duration.as_millis();
    millis.div_ceil(1000) as u64
}
