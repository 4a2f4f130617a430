//! Environment overlay
//!
//! Values from the environment take precedence over the config file.

use super::models::*;
use crate::utils::error::{GatewayError, Result};
use std::str::FromStr;
use tracing::debug;

fn parse_var<T>(name: &str, value: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    value
        .trim()
        .parse()
        .map_err(|e| GatewayError::config(format!("Invalid {}: {}", name, e)))
}

impl GatewayConfig {
    /// Apply environment overrides read through `lookup`.
    ///
    /// Provider API keys are not copied here; they are resolved from the
    /// environment when providers are built.
    pub fn apply_env_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup("GATEWAY_HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("GATEWAY_PORT").or_else(|| lookup("PORT")) {
            self.server.port = parse_var("GATEWAY_PORT", &port)?;
        }
        if let Some(workers) = lookup("GATEWAY_WORKERS") {
            self.server.workers = Some(parse_var("GATEWAY_WORKERS", &workers)?);
        }
        if let Some(origins) = lookup("ALLOWED_ORIGINS") {
            self.server.cors.allowed_origins = origins
                .split(',')
                .map(|origin| origin.trim().to_string())
                .filter(|origin| !origin.is_empty())
                .collect();
        }

        if let Some(secret) = lookup("JWT_SECRET") {
            self.auth.jwt_secret = secret;
        }
        if let Some(hash) = lookup("ADMIN_PASSWORD_HASH") {
            self.auth.admin_password_hash = Some(hash);
        }
        if let Some(ttl) = lookup("JWT_EXPIRATION") {
            self.auth.token_ttl_secs = parse_var("JWT_EXPIRATION", &ttl)?;
        }

        if let Some(enabled) = lookup("RATE_LIMIT_ENABLED") {
            self.rate_limit.enabled = parse_var("RATE_LIMIT_ENABLED", &enabled)?;
        }

        if let Some(level) = lookup("LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(json) = lookup("LOG_JSON") {
            self.logging.json = parse_var("LOG_JSON", &json)?;
        }

        debug!("Environment overrides applied");
        Ok(())
    }
}
