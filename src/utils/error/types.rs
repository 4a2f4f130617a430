//! Error types for the gateway

use thiserror::Error;

/// Result type alias for the gateway
pub type Result<T> = std::result::Result<T, GatewayError>;

/// Main error type for the gateway
#[derive(Error, Debug)]
pub enum GatewayError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// HTTP client errors
    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Request payload failed validation
    #[error("{0}")]
    Validation(String),

    /// Caller exceeded a rate-limit policy
    #[error("{message}")]
    RateLimited {
        message: String,
        reset_in_seconds: u64,
    },

    /// Every candidate in a provider chain failed
    #[error("All AI providers failed: {0}")]
    ProvidersExhausted(String),

    /// The operation deadline fired before any candidate succeeded
    #[error("Timeout error: {0}")]
    Timeout(String),

    /// The provider answered with text that is not the expected document
    #[error("Malformed AI response: {0}")]
    MalformedAiResponse(String),

    /// Missing or rejected credentials
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Token encoding or decoding failure
    #[error("JWT error: {0}")]
    Jwt(#[from] jsonwebtoken::errors::Error),

    /// Internal errors
    #[error("Internal error: {0}")]
    Internal(String),
}
