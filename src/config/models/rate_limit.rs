//! Rate limiting configuration

use super::*;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Longest accepted window: 30 days
pub const MAX_WINDOW_SECS: u64 = 30 * 24 * 60 * 60;

/// Longest accepted sweep interval
pub const MAX_CLEANUP_INTERVAL_SECS: u64 = 24 * 60 * 60;

/// One fixed-window policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyConfig {
    pub max_requests: u32,
    pub window_secs: u64,
}

impl PolicyConfig {
    pub const fn new(max_requests: u32, window_secs: u64) -> Self {
        Self {
            max_requests,
            window_secs,
        }
    }

    pub fn window(&self) -> Duration {
        Duration::from_secs(self.window_secs.min(MAX_WINDOW_SECS))
    }
}

/// Rate limiting configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RateLimitConfig {
    /// Enable rate limiting
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// AI chat and diet generation
    #[serde(default = "default_ai_policy")]
    pub ai: PolicyConfig,
    /// Admin login attempts
    #[serde(default = "default_auth_policy")]
    pub auth: PolicyConfig,
    /// Contact form submissions
    #[serde(default = "default_contact_policy")]
    pub contact: PolicyConfig,
    /// Seconds between sweeps of expired entries
    #[serde(default = "default_cleanup_interval")]
    pub cleanup_interval_secs: u64,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            ai: default_ai_policy(),
            auth: default_auth_policy(),
            contact: default_contact_policy(),
            cleanup_interval_secs: default_cleanup_interval(),
        }
    }
}

impl RateLimitConfig {
    pub fn cleanup_interval(&self) -> Duration {
        Duration::from_secs(self.cleanup_interval_secs)
    }
}

fn default_ai_policy() -> PolicyConfig {
    PolicyConfig::new(5, 24 * 60 * 60)
}

fn default_auth_policy() -> PolicyConfig {
    PolicyConfig::new(5, 15 * 60)
}

fn default_contact_policy() -> PolicyConfig {
    PolicyConfig::new(3, 60 * 60)
}

fn default_cleanup_interval() -> u64 {
    300
}
