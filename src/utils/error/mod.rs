//! Error handling for the gateway
//!
//! [`GatewayError`] is the only error type that crosses the HTTP boundary.
//! Provider and chain failures are converted into it before a response is
//! rendered, so no upstream detail leaks to callers.

mod conversions;
mod helpers;
mod response;
mod types;

pub use response::ErrorResponse;
pub use types::{GatewayError, Result};
