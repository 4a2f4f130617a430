//! Configuration data models
//!
//! This module defines all configuration structures used throughout the gateway.

#![allow(missing_docs)]

pub mod auth;
pub mod gateway;
pub mod logging;
pub mod pipeline;
pub mod provider;
pub mod rate_limit;
pub mod server;

pub use auth::*;
pub use gateway::*;
pub use logging::*;
pub use pipeline::*;
pub use provider::*;
pub use rate_limit::*;
pub use server::*;

/// Default values for configuration
pub fn default_host() -> String {
    "0.0.0.0".to_string()
}

/// Default server port
pub fn default_port() -> u16 {
    8000
}

/// Default per-call provider timeout in seconds
pub fn default_timeout() -> u64 {
    30
}

/// Default maximum body size in bytes
pub fn default_max_body_size() -> usize {
    256 * 1024
}

pub fn default_true() -> bool {
    true
}
