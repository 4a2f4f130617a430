//! Provider fallback chain
//!
//! Runs one generation request against an ordered list of
//! (provider, model) candidates and returns the first success.
//!
//! ## Module Structure
//!
//! - `chain` - `ProviderChain` and its provider registry
//! - `error` - Chain failure types
//! - `fallback` - Per-attempt outcomes and the execution result
//! - `execution` - Failure classification helpers
//! - `execute_impl` - The sequential execution loop

pub mod chain;
pub mod error;
pub mod execute_impl;
pub mod execution;
pub mod fallback;

#[cfg(test)]
mod tests;

pub use chain::ProviderChain;
pub use error::ChainError;
pub use fallback::{AttemptOutcome, ChainAttemptResult, ExecutionResult};
