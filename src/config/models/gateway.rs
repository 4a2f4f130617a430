//! Main gateway configuration

use super::*;
use serde::{Deserialize, Serialize};

/// Main gateway configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewayConfig {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Provider configurations
    #[serde(default = "default_providers")]
    pub providers: Vec<ProviderConfig>,
    /// Candidate chains and per-operation limits
    #[serde(default)]
    pub pipeline: PipelineConfig,
    /// Rate limiting configuration
    #[serde(default)]
    pub rate_limit: RateLimitConfig,
    /// Admin authentication configuration
    #[serde(default)]
    pub auth: AuthConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            providers: default_providers(),
            pipeline: PipelineConfig::default(),
            rate_limit: RateLimitConfig::default(),
            auth: AuthConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl GatewayConfig {
    /// Put candidate chains in execution order
    pub fn normalize(&mut self) {
        self.pipeline.chat.sort_candidates();
        self.pipeline.diet.sort_candidates();
    }

    pub fn provider(&self, name: &str) -> Option<&ProviderConfig> {
        self.providers.iter().find(|p| p.name == name)
    }
}
