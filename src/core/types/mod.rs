//! Core request types shared by providers and the pipeline

pub mod language;
pub mod requests;

pub use language::Language;
pub use requests::{GenerationRequest, ResponseFormat};
