//! Core traits module
//!
//! Abstract interfaces the pipeline is written against

pub mod provider;

pub use provider::TextGenerationProvider;
