//! Pipeline configuration: candidate chains and per-operation limits

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Longest accepted chain deadline
pub const MAX_OPERATION_TIMEOUT_SECS: u64 = 600;

/// One (provider, model) pair in a fallback chain
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderCandidate {
    /// Name of a configured provider
    #[serde(alias = "provider_name")]
    pub provider: String,
    /// Model identifier passed to the provider
    #[serde(alias = "model_name")]
    pub model: String,
    /// Lower runs first; ties keep declaration order
    #[serde(default)]
    pub priority: u32,
}

impl ProviderCandidate {
    pub fn new(provider: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            provider: provider.into(),
            model: model.into(),
            priority: 0,
        }
    }

    pub fn with_priority(mut self, priority: u32) -> Self {
        self.priority = priority;
        self
    }
}

impl fmt::Display for ProviderCandidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.provider, self.model)
    }
}

/// Settings for one AI operation (chat or diet)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OperationConfig {
    #[serde(default = "default_candidates")]
    pub candidates: Vec<ProviderCandidate>,
    /// Deadline for the whole chain, in seconds
    #[serde(default = "default_operation_timeout")]
    pub timeout_secs: u64,
    #[serde(default = "default_temperature")]
    pub temperature: f32,
    #[serde(default = "default_max_output_tokens")]
    pub max_output_tokens: u32,
}

impl Default for OperationConfig {
    fn default() -> Self {
        Self {
            candidates: default_candidates(),
            timeout_secs: default_operation_timeout(),
            temperature: default_temperature(),
            max_output_tokens: default_max_output_tokens(),
        }
    }
}

impl OperationConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.min(MAX_OPERATION_TIMEOUT_SECS))
    }

    /// Stable sort by priority
    pub fn sort_candidates(&mut self) {
        self.candidates.sort_by_key(|candidate| candidate.priority);
    }
}

/// Pipeline configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    #[serde(default)]
    pub chat: OperationConfig,
    #[serde(default = "default_diet_operation")]
    pub diet: OperationConfig,
    /// Longest accepted chat message, in characters
    #[serde(default = "default_max_message_chars")]
    pub max_message_chars: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            chat: OperationConfig::default(),
            diet: default_diet_operation(),
            max_message_chars: default_max_message_chars(),
        }
    }
}

/// Two Gemini models, then one OpenAI model
pub fn default_candidates() -> Vec<ProviderCandidate> {
    vec![
        ProviderCandidate::new("gemini", "gemini-2.0-flash"),
        ProviderCandidate::new("gemini", "gemini-1.5-flash"),
        ProviderCandidate::new("openai", "gpt-4o-mini"),
    ]
}

fn default_operation_timeout() -> u64 {
    60
}

fn default_temperature() -> f32 {
    0.7
}

fn default_max_output_tokens() -> u32 {
    1024
}

fn default_max_message_chars() -> usize {
    2000
}

fn default_diet_operation() -> OperationConfig {
    OperationConfig {
        temperature: 0.4,
        max_output_tokens: 4096,
        ..OperationConfig::default()
    }
}
