//! Text generation provider trait

use async_trait::async_trait;

use crate::core::providers::unified_provider::ProviderError;
use crate::core::types::GenerationRequest;

/// One upstream LLM family.
///
/// The chain executor only ever talks to this trait, so adding a provider
/// never touches fallback logic.
#[async_trait]
pub trait TextGenerationProvider: Send + Sync + 'static {
    /// Name used by chain candidates and in logs
    fn name(&self) -> &'static str;

    /// Generate text for `request` with `model`.
    ///
    /// Dropping the returned future aborts the underlying HTTP request.
    async fn generate(
        &self,
        model: &str,
        request: &GenerationRequest,
    ) -> Result<String, ProviderError>;
}
