//! Admin token signing and verification

use std::time::{SystemTime, UNIX_EPOCH};

use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

use crate::config::AuthConfig;
use crate::utils::error::{GatewayError, Result};

pub const ADMIN_SUBJECT: &str = "admin";

/// Admin token payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminClaims {
    pub sub: String,
    pub iat: u64,
    pub exp: u64,
}

#[derive(Clone)]
pub struct JwtHandler {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
    /// Token lifetime in seconds
    expiration: u64,
}

impl std::fmt::Debug for JwtHandler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtHandler")
            .field("algorithm", &self.algorithm)
            .field("expiration", &self.expiration)
            .field("encoding_key", &"[REDACTED]")
            .field("decoding_key", &"[REDACTED]")
            .finish()
    }
}

impl JwtHandler {
    pub fn new(config: &AuthConfig) -> Self {
        let secret = config.jwt_secret.as_bytes();
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            algorithm: Algorithm::HS256,
            expiration: config.token_ttl_secs,
        }
    }

    pub fn expiration(&self) -> u64 {
        self.expiration
    }

    /// Sign a fresh admin token
    pub fn create_admin_token(&self) -> Result<String> {
        let now = unix_now()?;
        let claims = AdminClaims {
            sub: ADMIN_SUBJECT.to_string(),
            iat: now,
            exp: now.saturating_add(self.expiration),
        };

        encode(&Header::new(self.algorithm), &claims, &self.encoding_key).map_err(GatewayError::Jwt)
    }

    /// Verify signature, expiry and subject
    pub fn verify_token(&self, token: &str) -> Result<AdminClaims> {
        let mut validation = Validation::new(self.algorithm);
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp", "sub"]);

        let data = decode::<AdminClaims>(token, &self.decoding_key, &validation)
            .map_err(GatewayError::Jwt)?;

        if data.claims.sub != ADMIN_SUBJECT {
            return Err(GatewayError::unauthorized("Invalid token subject"));
        }
        Ok(data.claims)
    }
}

fn unix_now() -> Result<u64> {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .map_err(|e| GatewayError::internal(format!("System time error: {}", e)))
}
