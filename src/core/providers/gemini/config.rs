//! Gemini Configuration Module

use crate::config::ProviderConfig;

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";
const DEFAULT_API_VERSION: &str = "v1beta";

/// Google AI Studio connection settings
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    /// API key, sent as `x-goog-api-key`
    pub api_key: Option<String>,
    pub base_url: String,
    pub api_version: String,
    /// Per-call timeout in seconds
    pub request_timeout: u64,
    pub connect_timeout: u64,
}

impl GeminiConfig {
    pub fn new_google_ai(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Some(api_key.into()),
            base_url: DEFAULT_BASE_URL.to_string(),
            api_version: DEFAULT_API_VERSION.to_string(),
            request_timeout: 30,
            connect_timeout: 10,
        }
    }

    /// Build from gateway provider settings; the key may still be absent
    pub fn from_provider_config<F>(config: &ProviderConfig, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            api_key: config.resolve_api_key(lookup),
            base_url: config
                .api_base
                .as_deref()
                .map(|base| base.trim_end_matches('/').to_string())
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            api_version: DEFAULT_API_VERSION.to_string(),
            request_timeout: config.timeout,
            connect_timeout: 10,
        }
    }

    /// `generateContent` URL for a model. The key never goes in the URL.
    pub fn get_endpoint(&self, model: &str) -> String {
        format!(
            "{}/{}/models/{}:generateContent",
            self.base_url, self.api_version, model
        )
    }
}
