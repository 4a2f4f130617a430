//! Google Gemini Provider
//!
//! Google AI Studio models (`gemini-2.0-flash`, `gemini-1.5-flash`, ...)
//! through the `generateContent` endpoint.

pub mod client;
pub mod config;
pub mod error;
pub mod provider;

pub use client::GeminiClient;
pub use config::GeminiConfig;
pub use error::GeminiErrorMapper;
pub use provider::GeminiProvider;
