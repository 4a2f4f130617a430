//! Provider configuration

use super::*;
use serde::{Deserialize, Serialize};

/// Provider API family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderType {
    /// Google Gemini `generateContent`
    Gemini,
    /// OpenAI `chat/completions`
    #[serde(alias = "open_ai")]
    OpenAI,
}

impl ProviderType {
    /// Environment variables consulted for the API key, in order
    pub fn api_key_env_vars(&self) -> &'static [&'static str] {
        match self {
            ProviderType::Gemini => &["GEMINI_API_KEY", "GOOGLE_API_KEY"],
            ProviderType::OpenAI => &["OPENAI_API_KEY"],
        }
    }
}

/// Provider configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// Provider name referenced by chain candidates
    pub name: String,
    /// Provider API family
    pub provider_type: ProviderType,
    /// API key; falls back to the family's environment variables
    #[serde(default, skip_serializing)]
    pub api_key: Option<String>,
    /// Base URL override
    pub api_base: Option<String>,
    /// Per-call timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout: u64,
}

impl ProviderConfig {
    pub fn new(name: impl Into<String>, provider_type: ProviderType) -> Self {
        Self {
            name: name.into(),
            provider_type,
            api_key: None,
            api_base: None,
            timeout: default_timeout(),
        }
    }

    /// Resolve the API key from config, then from the environment.
    ///
    /// Blank values count as absent.
    pub fn resolve_api_key<F>(&self, lookup: F) -> Option<String>
    where
        F: Fn(&str) -> Option<String>,
    {
        self.api_key
            .clone()
            .filter(|key| !key.trim().is_empty())
            .or_else(|| {
                self.provider_type
                    .api_key_env_vars()
                    .iter()
                    .filter_map(|var| lookup(var))
                    .find(|key| !key.trim().is_empty())
            })
    }
}

/// Providers present when the config file names none
pub fn default_providers() -> Vec<ProviderConfig> {
    vec![
        ProviderConfig::new("gemini", ProviderType::Gemini),
        ProviderConfig::new("openai", ProviderType::OpenAI),
    ]
}
