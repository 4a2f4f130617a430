//! Logging utilities
//!
//! Subscriber setup plus the redaction helpers every log site that touches
//! upstream text goes through.

mod sanitization;

pub use sanitization::Sanitization;

use crate::config::LoggingConfig;
use crate::utils::error::{GatewayError, Result};
use tracing_subscriber::EnvFilter;

/// Install the global tracing subscriber.
///
/// `RUST_LOG` wins over the configured level when it is set.
pub fn init_tracing(config: &LoggingConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .map_err(|e| GatewayError::config(format!("Invalid log level: {}", e)))?;

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false);

    let result = if config.json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    result.map_err(|e| GatewayError::internal(format!("Failed to install subscriber: {}", e)))
}
