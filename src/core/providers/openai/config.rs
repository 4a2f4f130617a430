//! OpenAI Provider Configuration

use crate::config::ProviderConfig;

const DEFAULT_API_BASE: &str = "https://api.openai.com/v1";

#[derive(Debug, Clone)]
pub struct OpenAIConfig {
    /// Bearer token
    pub api_key: Option<String>,
    pub api_base: String,
    /// Per-call timeout in seconds
    pub timeout: u64,
}

impl OpenAIConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Some(api_key.into()),
            api_base: DEFAULT_API_BASE.to_string(),
            timeout: 30,
        }
    }

    pub fn from_provider_config<F>(config: &ProviderConfig, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            api_key: config.resolve_api_key(lookup),
            api_base: config
                .api_base
                .as_deref()
                .map(|base| base.trim_end_matches('/').to_string())
                .unwrap_or_else(|| DEFAULT_API_BASE.to_string()),
            timeout: config.timeout,
        }
    }

    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into().trim_end_matches('/').to_string();
        self
    }

    pub fn chat_completions_url(&self) -> String {
        format!("{}/chat/completions", self.api_base)
    }
}
