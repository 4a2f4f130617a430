//! # Brother's Fitness Gateway
//!
//! Server-side AI gateway for the Brother's Fitness website. It keeps the
//! upstream LLM keys off the browser and fronts them with:
//!
//! - **Chat assistant**: free-form fitness questions answered in English or Hindi
//! - **Diet plans**: structured meal and shopping plans parsed from model JSON
//! - **Provider fallback**: an ordered chain of Gemini and OpenAI-compatible models
//! - **Rate limiting**: fixed-window quotas per caller for AI, login and contact
//! - **Admin**: password login issuing short-lived JWTs for the leads inbox
//!
//! ## Gateway Mode
//!
//! ```rust,no_run
//! use brofit_gateway::Config;
//! use brofit_gateway::server::HttpServer;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load("config/gateway.yaml").await?;
//!     HttpServer::new(config)?.start().await?;
//!     Ok(())
//! }
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_inception)]

pub mod auth;
pub mod config;
pub mod core;
pub mod server;
pub mod utils;

// Re-export main types
pub use config::Config;
pub use core::pipeline::{AiPipeline, ChatRequest, ChatResponse, RateLimitStatus};
pub use core::providers::{ProviderError, ProviderRegistry};
pub use core::rate_limiter::{RateLimitPolicy, RateLimitResult, RateLimiter};
pub use core::router::{ChainError, ProviderChain};
pub use utils::error::{GatewayError, Result};

// Version information
/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");
/// Description of the crate
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

/// Gateway build information
#[derive(Debug, Clone)]
pub struct BuildInfo {
    /// Version number
    pub version: &'static str,
    /// Build time, unix seconds
    pub build_time: &'static str,
    /// Git commit hash
    pub git_hash: &'static str,
}

impl Default for BuildInfo {
    fn default() -> Self {
        Self {
            version: VERSION,
            build_time: env!("BUILD_TIME"),
            git_hash: env!("GIT_HASH"),
        }
    }
}

/// Build metadata stamped by `build.rs`
pub fn build_info() -> BuildInfo {
    BuildInfo::default()
}
