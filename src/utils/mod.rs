//! Utility modules for the gateway
//!
//! - **error**: the service-boundary error type and its HTTP rendering
//! - **logging**: subscriber setup and secret redaction
//! - **validation**: payload field checks

pub mod error;
pub mod logging;
pub mod validation;

pub use error::{GatewayError, Result};
pub use logging::Sanitization;
pub use validation::DataValidator;
