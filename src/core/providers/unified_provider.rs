//! Unified Provider Error Handling
//!
//! Single error type for all providers.
//!
//! | Variant | Purpose | Retryable |
//! |------|------|--------|
//! | Authentication | Key missing or rejected | No |
//! | RateLimit | Upstream throttling (429) | Yes |
//! | ModelNotFound | Unknown model (404) | No |
//! | InvalidRequest | Rejected payload (400) | No |
//! | Network | Connection or transport failure | Yes |
//! | Timeout | Per-call timeout | Yes |
//! | ProviderUnavailable | Upstream overloaded (503) | Yes |
//! | ApiError | Any other status | 429 and 5xx only |
//! | Configuration | Provider cannot be called at all | No |
//! | ContentFiltered | Safety block | No |
//! | ResponseParsing | Unreadable success body | No |
//!
//! The chain executor advances past every variant; the retryable flag only
//! decides how the attempt is recorded.

use crate::utils::logging::Sanitization;

/// Longest upstream body kept in an error message
const MAX_ERROR_BODY_CHARS: usize = 300;

/// Unified provider error type
#[derive(Debug, Clone, thiserror::Error)]
pub enum ProviderError {
    #[error("Authentication failed for {provider}: {message}")]
    Authentication {
        provider: &'static str,
        message: String,
    },

    #[error("Rate limit exceeded for {provider}: {message}")]
    RateLimit {
        provider: &'static str,
        message: String,
        retry_after: Option<u64>,
    },

    #[error("Model '{model}' not found for {provider}")]
    ModelNotFound {
        provider: &'static str,
        model: String,
    },

    #[error("Invalid request for {provider}: {message}")]
    InvalidRequest {
        provider: &'static str,
        message: String,
    },

    #[error("Network error for {provider}: {message}")]
    Network {
        provider: &'static str,
        message: String,
    },

    #[error("Provider {provider} is unavailable: {message}")]
    ProviderUnavailable {
        provider: &'static str,
        message: String,
    },

    #[error("Configuration error for {provider}: {message}")]
    Configuration {
        provider: &'static str,
        message: String,
    },

    #[error("Timeout for {provider}: {message}")]
    Timeout {
        provider: &'static str,
        message: String,
    },

    #[error("Content filtered by {provider} safety systems: {reason}")]
    ContentFiltered {
        provider: &'static str,
        reason: String,
    },

    #[error("API error for {provider} (status {status}): {message}")]
    ApiError {
        provider: &'static str,
        status: u16,
        message: String,
    },

    #[error("Failed to parse {provider} response: {message}")]
    ResponseParsing {
        provider: &'static str,
        message: String,
    },
}

impl ProviderError {
    pub fn authentication(provider: &'static str, message: impl Into<String>) -> Self {
        Self::Authentication {
            provider,
            message: message.into(),
        }
    }

    pub fn rate_limit(provider: &'static str, retry_after: Option<u64>) -> Self {
        Self::RateLimit {
            provider,
            message: match retry_after {
                Some(seconds) => format!("Rate limit exceeded. Retry after {} seconds", seconds),
                None => "Rate limit exceeded".to_string(),
            },
            retry_after,
        }
    }

    pub fn model_not_found(provider: &'static str, model: impl Into<String>) -> Self {
        Self::ModelNotFound {
            provider,
            model: model.into(),
        }
    }

    pub fn invalid_request(provider: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidRequest {
            provider,
            message: message.into(),
        }
    }

    pub fn network(provider: &'static str, message: impl Into<String>) -> Self {
        Self::Network {
            provider,
            message: message.into(),
        }
    }

    pub fn provider_unavailable(provider: &'static str, message: impl Into<String>) -> Self {
        Self::ProviderUnavailable {
            provider,
            message: message.into(),
        }
    }

    pub fn configuration(provider: &'static str, message: impl Into<String>) -> Self {
        Self::Configuration {
            provider,
            message: message.into(),
        }
    }

    pub fn timeout(provider: &'static str, message: impl Into<String>) -> Self {
        Self::Timeout {
            provider,
            message: message.into(),
        }
    }

    pub fn content_filtered(provider: &'static str, reason: impl Into<String>) -> Self {
        Self::ContentFiltered {
            provider,
            reason: reason.into(),
        }
    }

    pub fn api_error(provider: &'static str, status: u16, message: impl Into<String>) -> Self {
        Self::ApiError {
            provider,
            status,
            message: message.into(),
        }
    }

    pub fn response_parsing(provider: &'static str, message: impl Into<String>) -> Self {
        Self::ResponseParsing {
            provider,
            message: message.into(),
        }
    }

    /// Map a transport failure. The message is sanitized because reqwest
    /// errors embed the request URL.
    pub fn from_reqwest(provider: &'static str, err: reqwest::Error) -> Self {
        let message = Sanitization::sanitize_log_data(&err.to_string());
        if err.is_timeout() {
            Self::timeout(provider, message)
        } else {
            Self::network(provider, message)
        }
    }

    /// Upstream body cut to a loggable size with secrets redacted
    pub fn clip_body(body: &str) -> String {
        Sanitization::for_log(body.trim(), MAX_ERROR_BODY_CHARS)
    }

    /// Get provider name
    pub fn provider(&self) -> &'static str {
        match self {
            Self::Authentication { provider, .. }
            | Self::RateLimit { provider, .. }
            | Self::ModelNotFound { provider, .. }
            | Self::InvalidRequest { provider, .. }
            | Self::Network { provider, .. }
            | Self::ProviderUnavailable { provider, .. }
            | Self::Configuration { provider, .. }
            | Self::Timeout { provider, .. }
            | Self::ContentFiltered { provider, .. }
            | Self::ApiError { provider, .. }
            | Self::ResponseParsing { provider, .. } => provider,
        }
    }

    /// Whether the failure is transient (throttling, overload, transport)
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Network { .. }
            | Self::Timeout { .. }
            | Self::RateLimit { .. }
            | Self::ProviderUnavailable { .. } => true,

            Self::ApiError { status, .. } => matches!(*status, 429 | 500..=599),

            Self::Authentication { .. }
            | Self::ModelNotFound { .. }
            | Self::InvalidRequest { .. }
            | Self::Configuration { .. }
            | Self::ContentFiltered { .. }
            | Self::ResponseParsing { .. } => false,
        }
    }

    /// Seconds the upstream asked us to wait, when it said
    pub fn retry_after(&self) -> Option<u64> {
        match self {
            Self::RateLimit { retry_after, .. } => *retry_after,
            _ => None,
        }
    }
}
