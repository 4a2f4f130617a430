//! Gemini provider

use async_trait::async_trait;

use crate::core::providers::unified_provider::ProviderError;
use crate::core::traits::TextGenerationProvider;
use crate::core::types::GenerationRequest;

use super::client::GeminiClient;
use super::config::GeminiConfig;

#[derive(Debug, Clone)]
pub struct GeminiProvider {
    client: GeminiClient,
}

impl GeminiProvider {
    pub fn new(config: GeminiConfig) -> Result<Self, ProviderError> {
        Ok(Self {
            client: GeminiClient::new(config)?,
        })
    }
}

#[async_trait]
impl TextGenerationProvider for GeminiProvider {
    fn name(&self) -> &'static str {
        "gemini"
    }

    async fn generate(
        &self,
        model: &str,
        request: &GenerationRequest,
    ) -> Result<String, ProviderError> {
        self.client.generate(model, request).await
    }
}
