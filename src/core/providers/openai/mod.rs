//! OpenAI Provider
//!
//! `chat/completions` with a system and a user message.

pub mod client;
pub mod config;
pub mod error;
pub mod provider;

pub use client::OpenAIClient;
pub use config::OpenAIConfig;
pub use error::OpenAIErrorMapper;
pub use provider::OpenAIProvider;
