use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::core::types::Language;

#[derive(Debug, Clone, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    #[serde(default)]
    pub context: ChatContext,
}

/// Page context sent with a chat message. Fields other than `language` are
/// passed to the model untouched.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChatContext {
    #[serde(default)]
    pub language: Language,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatResponse {
    pub response: String,
}
