//! Helper functions for creating specific error types

use super::types::GatewayError;

impl GatewayError {
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config(message.into())
    }

    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation(message.into())
    }

    /// Rate-limit rejection whose message names the wait in seconds
    pub fn rate_limited(reset_in_seconds: u64) -> Self {
        Self::RateLimited {
            message: format!(
                "Too many requests. Please try again in {} seconds.",
                reset_in_seconds
            ),
            reset_in_seconds,
        }
    }

    pub fn providers_exhausted<S: Into<String>>(message: S) -> Self {
        Self::ProvidersExhausted(message.into())
    }

    pub fn timeout<S: Into<String>>(message: S) -> Self {
        Self::Timeout(message.into())
    }

    pub fn malformed_ai_response<S: Into<String>>(message: S) -> Self {
        Self::MalformedAiResponse(message.into())
    }

    pub fn unauthorized<S: Into<String>>(message: S) -> Self {
        Self::Unauthorized(message.into())
    }

    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal(message.into())
    }

    /// Seconds a rejected caller should wait, if this is a rate-limit rejection
    pub fn retry_after(&self) -> Option<u64> {
        match self {
            Self::RateLimited {
                reset_in_seconds, ..
            } => Some(*reset_in_seconds),
            _ => None,
        }
    }
}
