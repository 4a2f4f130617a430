//! Core functionality for the gateway
//!
//! Business logic independent of HTTP: quotas, the provider chain, and the
//! chat and diet operations built on top of them.

pub mod diet;
pub mod leads;
pub mod pipeline;
pub mod providers;
pub mod rate_limiter;
pub mod router;
pub mod traits;
pub mod types;
