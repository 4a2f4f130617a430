//! Application state shared across HTTP handlers

use std::sync::Arc;

use crate::auth::AdminAuth;
use crate::config::{Config, PolicyConfig};
use crate::core::leads::LeadStore;
use crate::core::pipeline::AiPipeline;
use crate::core::providers::ProviderRegistry;
use crate::core::rate_limiter::{RateLimitPolicy, RateLimitScope, RateLimiter};
use crate::core::router::ProviderChain;
use crate::utils::error::{GatewayError, Result};

/// HTTP server state shared across handlers.
///
/// Every field is an `Arc`, so cloning per worker is cheap.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Gateway configuration (shared read-only)
    pub config: Arc<Config>,
    pub pipeline: Arc<AiPipeline>,
    pub limiter: Arc<RateLimiter>,
    pub admin: Arc<AdminAuth>,
    pub leads: Arc<LeadStore>,
}

impl AppState {
    /// Wire the pipeline, limiter, auth and lead store from configuration
    pub fn new(config: Config, registry: ProviderRegistry) -> Self {
        let limiter = Arc::new(RateLimiter::new(config.rate_limit().enabled));
        let pipeline = AiPipeline::new(
            ProviderChain::new(registry),
            limiter.clone(),
            config.pipeline().clone(),
            config.rate_limit(),
        );
        let admin = AdminAuth::new(config.auth());

        Self {
            config: Arc::new(config),
            pipeline: Arc::new(pipeline),
            limiter,
            admin: Arc::new(admin),
            leads: Arc::new(LeadStore::new()),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Count a request against `scope` for `identifier`
    pub fn enforce_rate_limit(&self, scope: RateLimitScope, identifier: &str) -> Result<()> {
        let policy = RateLimitPolicy::from(self.policy_config(scope));
        let decision = self.limiter.check(&scope.key(identifier), &policy);
        if decision.allowed {
            Ok(())
        } else {
            Err(GatewayError::rate_limited(decision.reset_in_seconds))
        }
    }

    fn policy_config(&self, scope: RateLimitScope) -> &PolicyConfig {
        let rate_limit = self.config.rate_limit();
        match scope {
            RateLimitScope::Ai => &rate_limit.ai,
            RateLimitScope::Auth => &rate_limit.auth,
            RateLimitScope::Contact => &rate_limit.contact,
        }
    }
}
