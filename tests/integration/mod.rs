//! Integration tests for brofit-gateway
//!
//! Upstream APIs are replaced by wiremock servers; everything else runs
//! for real.

pub mod config_tests;
pub mod error_handling_tests;
pub mod fallback_tests;
pub mod pipeline_tests;
pub mod provider_contract_tests;
