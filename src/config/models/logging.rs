//! Logging configuration

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Filter directive, e.g. `info` or `brofit_gateway=debug,actix_web=info`
    #[serde(default = "default_level")]
    pub level: String,
    /// Emit JSON lines instead of human-readable output
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            json: false,
        }
    }
}

fn default_level() -> String {
    "info".to_string()
}
