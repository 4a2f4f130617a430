//! Provider chain

use crate::core::providers::ProviderRegistry;

/// Sequential fallback executor over a provider registry
#[derive(Debug, Clone)]
pub struct ProviderChain {
    pub(super) registry: ProviderRegistry,
}

impl ProviderChain {
    pub fn new(registry: ProviderRegistry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &ProviderRegistry {
        &self.registry
    }
}
