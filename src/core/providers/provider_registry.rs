//! Provider Registry
//!
//! Name-keyed table of provider strategies consulted by the chain executor.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::{info, warn};

use super::gemini::{GeminiConfig, GeminiProvider};
use super::openai::{OpenAIConfig, OpenAIProvider};
use crate::config::{ProviderConfig, ProviderType};
use crate::core::providers::unified_provider::ProviderError;
use crate::core::traits::TextGenerationProvider;

#[derive(Clone, Default)]
pub struct ProviderRegistry {
    providers: HashMap<String, Arc<dyn TextGenerationProvider>>,
}

impl ProviderRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build providers from configuration, resolving API keys through `lookup`.
    ///
    /// Providers without a key are still registered; their calls fail as
    /// configuration errors, which the chain treats as a candidate failure.
    pub fn from_config<F>(configs: &[ProviderConfig], lookup: F) -> Result<Self, ProviderError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut registry = Self::new();

        for config in configs {
            let provider: Arc<dyn TextGenerationProvider> = match config.provider_type {
                ProviderType::Gemini => {
                    let gemini = GeminiConfig::from_provider_config(config, &lookup);
                    if gemini.api_key.is_none() {
                        warn!("Provider '{}' has no API key configured", config.name);
                    }
                    Arc::new(GeminiProvider::new(gemini)?)
                }
                ProviderType::OpenAI => {
                    let openai = OpenAIConfig::from_provider_config(config, &lookup);
                    if openai.api_key.is_none() {
                        warn!("Provider '{}' has no API key configured", config.name);
                    }
                    Arc::new(OpenAIProvider::new(openai)?)
                }
            };
            registry.register(config.name.clone(), provider);
        }

        info!("Registered {} providers", registry.len());
        Ok(registry)
    }

    /// Register a provider under `name`, replacing any previous one
    pub fn register(&mut self, name: impl Into<String>, provider: Arc<dyn TextGenerationProvider>) {
        self.providers.insert(name.into(), provider);
    }

    pub fn get(&self, name: &str) -> Option<Arc<dyn TextGenerationProvider>> {
        self.providers.get(name).cloned()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.providers.contains_key(name)
    }

    pub fn list(&self) -> Vec<String> {
        let mut names: Vec<String> = self.providers.keys().cloned().collect();
        names.sort();
        names
    }

    pub fn len(&self) -> usize {
        self.providers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }
}

impl std::fmt::Debug for ProviderRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderRegistry")
            .field("providers", &self.list())
            .finish()
    }
}
