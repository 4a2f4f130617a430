//! Provider adapters
//!
//! Each family maps its HTTP contract onto [`TextGenerationProvider`] and
//! its failures onto [`ProviderError`].
//!
//! [`TextGenerationProvider`]: crate::core::traits::TextGenerationProvider

pub mod gemini;
pub mod openai;
pub mod provider_registry;
pub mod unified_provider;

pub use provider_registry::ProviderRegistry;
pub use unified_provider::ProviderError;
