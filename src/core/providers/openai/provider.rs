//! OpenAI provider

use async_trait::async_trait;

use crate::core::providers::unified_provider::ProviderError;
use crate::core::traits::TextGenerationProvider;
use crate::core::types::GenerationRequest;

use super::client::OpenAIClient;
use super::config::OpenAIConfig;

#[derive(Debug, Clone)]
pub struct OpenAIProvider {
    client: OpenAIClient,
}

impl OpenAIProvider {
    pub fn new(config: OpenAIConfig) -> Result<Self, ProviderError> {
        Ok(Self {
            client: OpenAIClient::new(config)?,
        })
    }
}

#[async_trait]
impl TextGenerationProvider for OpenAIProvider {
    fn name(&self) -> &'static str {
        "openai"
    }

    async fn generate(
        &self,
        model: &str,
        request: &GenerationRequest,
    ) -> Result<String, ProviderError> {
        self.client.generate(model, request).await
    }
}
