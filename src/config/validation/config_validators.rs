//! Configuration validators

use super::trait_def::Validate;
use crate::config::models::*;
use std::collections::HashSet;
use tracing::{debug, warn};

impl Validate for GatewayConfig {
    fn validate(&self) -> Result<(), String> {
        debug!("Validating gateway configuration");

        self.server.validate()?;

        let mut provider_names = HashSet::new();
        for provider in &self.providers {
            if !provider_names.insert(provider.name.as_str()) {
                return Err(format!("Duplicate provider name: {}", provider.name));
            }
            provider.validate()?;
        }

        self.pipeline.validate()?;

        // unknown names fail at request time as candidate failures
        for candidate in self
            .pipeline
            .chat
            .candidates
            .iter()
            .chain(&self.pipeline.diet.candidates)
        {
            if !provider_names.contains(candidate.provider.as_str()) {
                warn!(
                    "Candidate {} references unknown provider '{}'",
                    candidate, candidate.provider
                );
            }
        }

        self.rate_limit.validate()?;
        self.auth.validate()?;
        self.logging.validate()?;

        debug!("Gateway configuration validation completed");
        Ok(())
    }
}

impl Validate for ServerConfig {
    fn validate(&self) -> Result<(), String> {
        if self.host.is_empty() {
            return Err("Server host cannot be empty".to_string());
        }

        if self.port == 0 {
            return Err("Server port must be greater than 0".to_string());
        }

        if let Some(workers) = self.workers {
            if workers == 0 {
                return Err("Worker count must be greater than 0".to_string());
            }
            if workers > 1000 {
                return Err("Worker count seems too high (>1000)".to_string());
            }
        }

        if self.max_body_size == 0 {
            return Err("Max body size must be greater than 0".to_string());
        }

        self.cors.validate()
    }
}

impl Validate for CorsConfig {
    fn validate(&self) -> Result<(), String> {
        if self.enabled && self.allows_all_origins() && self.allow_credentials {
            return Err(
                "CORS cannot allow all origins (*) when credentials are enabled".to_string(),
            );
        }
        Ok(())
    }
}

impl Validate for ProviderConfig {
    fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Provider name cannot be empty".to_string());
        }

        if self.timeout == 0 {
            return Err(format!("Provider {} timeout must be greater than 0", self.name));
        }

        if let Some(api_base) = &self.api_base {
            let parsed = url::Url::parse(api_base)
                .map_err(|e| format!("Provider {} has invalid api_base: {}", self.name, e))?;
            if !matches!(parsed.scheme(), "http" | "https") {
                return Err(format!(
                    "Provider {} api_base must use http or https",
                    self.name
                ));
            }
        }

        Ok(())
    }
}

impl Validate for OperationConfig {
    fn validate(&self) -> Result<(), String> {
        if self.candidates.is_empty() {
            return Err("Candidate list cannot be empty".to_string());
        }

        for candidate in &self.candidates {
            if candidate.provider.trim().is_empty() || candidate.model.trim().is_empty() {
                return Err("Candidates need both a provider and a model".to_string());
            }
        }

        if self.timeout_secs == 0 {
            return Err("Operation timeout must be greater than 0".to_string());
        }
        if self.timeout_secs > MAX_OPERATION_TIMEOUT_SECS {
            return Err(format!(
                "Operation timeout cannot exceed {} seconds",
                MAX_OPERATION_TIMEOUT_SECS
            ));
        }

        if !(0.0..=2.0).contains(&self.temperature) {
            return Err("Temperature must be between 0.0 and 2.0".to_string());
        }

        if self.max_output_tokens == 0 {
            return Err("max_output_tokens must be greater than 0".to_string());
        }

        Ok(())
    }
}

impl Validate for PipelineConfig {
    fn validate(&self) -> Result<(), String> {
        self.chat
            .validate()
            .map_err(|e| format!("pipeline.chat: {}", e))?;
        self.diet
            .validate()
            .map_err(|e| format!("pipeline.diet: {}", e))?;

        if self.max_message_chars == 0 {
            return Err("max_message_chars must be greater than 0".to_string());
        }

        Ok(())
    }
}

impl Validate for PolicyConfig {
    fn validate(&self) -> Result<(), String> {
        if self.max_requests == 0 {
            return Err("max_requests must be greater than 0".to_string());
        }
        if self.window_secs == 0 {
            return Err("window_secs must be greater than 0".to_string());
        }
        if self.window_secs > MAX_WINDOW_SECS {
            return Err(format!("window_secs cannot exceed {}", MAX_WINDOW_SECS));
        }
        Ok(())
    }
}

impl Validate for RateLimitConfig {
    fn validate(&self) -> Result<(), String> {
        self.ai.validate().map_err(|e| format!("rate_limit.ai: {}", e))?;
        self.auth
            .validate()
            .map_err(|e| format!("rate_limit.auth: {}", e))?;
        self.contact
            .validate()
            .map_err(|e| format!("rate_limit.contact: {}", e))?;

        if self.cleanup_interval_secs == 0 {
            return Err("Cleanup interval must be greater than 0".to_string());
        }
        if self.cleanup_interval_secs > MAX_CLEANUP_INTERVAL_SECS {
            return Err(format!(
                "Cleanup interval cannot exceed {} seconds",
                MAX_CLEANUP_INTERVAL_SECS
            ));
        }

        if !self.enabled {
            warn!("Rate limiting is disabled");
        }

        Ok(())
    }
}

impl Validate for AuthConfig {
    fn validate(&self) -> Result<(), String> {
        if self.jwt_secret.len() < 32 {
            return Err("JWT secret must be at least 32 characters long".to_string());
        }

        if self.jwt_secret == "your-secret-key" || self.jwt_secret == "change-me" {
            return Err("JWT secret must not use default values".to_string());
        }

        if self.token_ttl_secs == 0 {
            return Err("Token TTL must be greater than 0".to_string());
        }
        if self.token_ttl_secs > MAX_TOKEN_TTL_SECS {
            return Err(format!("Token TTL cannot exceed {} seconds", MAX_TOKEN_TTL_SECS));
        }

        if let Some(hash) = &self.admin_password_hash {
            if !hash.trim().is_empty() && !hash.starts_with("$argon2") {
                return Err("admin_password_hash must be an Argon2 PHC string".to_string());
            }
        }

        Ok(())
    }
}

impl Validate for LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        if self.level.trim().is_empty() {
            return Err("Log level cannot be empty".to_string());
        }
        Ok(())
    }
}
