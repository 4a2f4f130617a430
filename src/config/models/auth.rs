//! Authentication configuration

use serde::{Deserialize, Serialize};
use tracing::warn;
use uuid::Uuid;

/// Longest accepted admin token lifetime
pub const MAX_TOKEN_TTL_SECS: u64 = 30 * 24 * 60 * 60;

/// Authentication configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// HMAC secret for admin tokens
    #[serde(default = "generate_secure_jwt_secret", skip_serializing)]
    pub jwt_secret: String,
    /// Argon2 PHC string of the admin password; login is disabled when absent
    #[serde(default, skip_serializing)]
    pub admin_password_hash: Option<String>,
    /// Token lifetime in seconds
    #[serde(default = "default_token_ttl")]
    pub token_ttl_secs: u64,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: generate_secure_jwt_secret(),
            admin_password_hash: None,
            token_ttl_secs: default_token_ttl(),
        }
    }
}

impl AuthConfig {
    pub fn login_enabled(&self) -> bool {
        self.admin_password_hash
            .as_deref()
            .is_some_and(|hash| !hash.trim().is_empty())
    }
}

fn default_token_ttl() -> u64 {
    24 * 60 * 60
}

/// Random per-process secret; tokens do not survive a restart
pub fn generate_secure_jwt_secret() -> String {
    format!("{}{}", Uuid::new_v4().simple(), Uuid::new_v4().simple())
}

/// Log a warning for configurations that are unsafe to deploy
pub fn warn_insecure_config(config: &AuthConfig) {
    if !config.login_enabled() {
        warn!("No admin password hash configured; admin login is disabled.");
    }
}
