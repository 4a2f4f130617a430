use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::jwt::{AdminClaims, JwtHandler};
use super::password::verify_password;
use crate::config::AuthConfig;
use crate::utils::error::{GatewayError, Result};

#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    pub password: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub token: String,
    /// Seconds until the token expires
    pub expires_in: u64,
}

/// Admin login and token checks
#[derive(Debug, Clone)]
pub struct AdminAuth {
    jwt: JwtHandler,
    password_hash: Option<String>,
}

impl AdminAuth {
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            jwt: JwtHandler::new(config),
            password_hash: config
                .admin_password_hash
                .clone()
                .filter(|hash| !hash.trim().is_empty()),
        }
    }

    pub fn login_enabled(&self) -> bool {
        self.password_hash.is_some()
    }

    /// Check the admin password and issue a token.
    ///
    /// Argon2 verification runs on the blocking pool.
    pub async fn login(&self, request: LoginRequest) -> Result<LoginResponse> {
        let Some(hash) = self.password_hash.clone() else {
            warn!("Admin login attempted but no password hash is configured");
            return Err(GatewayError::unauthorized("Invalid credentials"));
        };

        if request.password.is_empty() {
            return Err(GatewayError::validation("password is required"));
        }

        let verified =
            tokio::task::spawn_blocking(move || verify_password(&request.password, &hash))
                .await
                .map_err(|e| GatewayError::internal(format!("Password check failed: {}", e)))??;

        if !verified {
            warn!("Admin login failed: wrong password");
            return Err(GatewayError::unauthorized("Invalid credentials"));
        }

        let token = self.jwt.create_admin_token()?;
        info!("Admin logged in");
        Ok(LoginResponse {
            token,
            expires_in: self.jwt.expiration(),
        })
    }

    /// Validate an `Authorization` header value
    pub fn authorize(&self, header: Option<&str>) -> Result<AdminClaims> {
        let token = header
            .and_then(|value| value.strip_prefix("Bearer "))
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .ok_or_else(|| GatewayError::unauthorized("Missing bearer token"))?;

        self.jwt.verify_token(token)
    }
}
