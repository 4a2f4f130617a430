//! Common test utilities
//!
//! - Request fixtures with sensible defaults
//! - Scripted in-process providers
//! - Wiremock stubs speaking the Gemini and OpenAI wire formats

pub mod fixtures;
pub mod providers;

pub use fixtures::{DietRequestFactory, diet_plan_json};
pub use providers::{ScriptedProvider, UpstreamStub};
