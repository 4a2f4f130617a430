//! Configuration management for the gateway
//!
//! Configuration comes from a YAML file, overlaid with environment variables,
//! then normalized and validated once at startup.

pub mod loader;
pub mod models;
pub mod validation;

pub use models::*;
pub use validation::Validate;

use crate::utils::error::{GatewayError, Result};
use std::path::Path;
use tracing::{debug, info, warn};

/// Main configuration struct for the gateway
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Gateway configuration
    pub gateway: GatewayConfig,
}

impl Config {
    /// Load the file if it exists, then apply the process environment.
    ///
    /// A missing file is not an error; defaults are used instead.
    pub async fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::load_with_env(path, |name| std::env::var(name).ok()).await
    }

    /// [`Config::load`] with an explicit variable lookup
    pub async fn load_with_env<P, F>(path: P, lookup: F) -> Result<Self>
    where
        P: AsRef<Path>,
        F: Fn(&str) -> Option<String>,
    {
        let path = path.as_ref();

        let mut gateway = if tokio::fs::try_exists(path).await.unwrap_or(false) {
            info!("Loading configuration from: {:?}", path);
            let content = tokio::fs::read_to_string(path).await.map_err(|e| {
                GatewayError::Config(format!("Failed to read config file: {}", e))
            })?;
            serde_yaml::from_str(&content)
                .map_err(|e| GatewayError::Config(format!("Failed to parse config: {}", e)))?
        } else {
            warn!("Config file {:?} not found, using defaults", path);
            GatewayConfig::default()
        };

        gateway.apply_env_overrides(lookup)?;
        gateway.normalize();

        let config = Self { gateway };
        config.validate()?;
        Ok(config)
    }

    /// Get server configuration
    pub fn server(&self) -> &ServerConfig {
        &self.gateway.server
    }

    /// Get providers configuration
    pub fn providers(&self) -> &[ProviderConfig] {
        &self.gateway.providers
    }

    /// Get pipeline configuration
    pub fn pipeline(&self) -> &PipelineConfig {
        &self.gateway.pipeline
    }

    /// Get rate limit configuration
    pub fn rate_limit(&self) -> &RateLimitConfig {
        &self.gateway.rate_limit
    }

    /// Get auth configuration
    pub fn auth(&self) -> &AuthConfig {
        &self.gateway.auth
    }

    /// Get logging configuration
    pub fn logging(&self) -> &LoggingConfig {
        &self.gateway.logging
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<()> {
        debug!("Validating configuration");

        self.gateway.validate().map_err(GatewayError::Config)?;

        self.gateway.server.cors.warn_if_open();
        warn_insecure_config(&self.gateway.auth);

        Ok(())
    }

    /// Convert to YAML string; secrets are skipped
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(&self.gateway)
            .map_err(|e| GatewayError::Config(format!("Failed to serialize config to YAML: {}", e)))
    }
}
