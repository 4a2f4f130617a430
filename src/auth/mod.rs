//! Admin authentication
//!
//! A single administrator logs in with a password checked against an Argon2
//! hash and receives a stateless HS256 token. Tokens cannot be revoked before
//! they expire; rotating `auth.jwt_secret` invalidates all of them.

mod jwt;
mod password;
mod system;


pub use jwt::{AdminClaims, JwtHandler};
pub use password::{hash_password, verify_password};
pub use system::{AdminAuth, LoginRequest, LoginResponse};
