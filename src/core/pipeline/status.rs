use serde::Serialize;

use crate::core::rate_limiter::RateLimitResult;

/// Standing of one caller under one policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuotaStatus {
    pub remaining: u32,
    pub total: u32,
    pub reset_in: u64,
}

impl From<RateLimitResult> for QuotaStatus {
    fn from(result: RateLimitResult) -> Self {
        Self {
            remaining: result.remaining,
            total: result.limit,
            reset_in: result.reset_in_seconds,
        }
    }
}

/// Body of `GET /rate-limit-status`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RateLimitStatus {
    pub ai: QuotaStatus,
}
