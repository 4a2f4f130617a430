//! Parsing model output into a diet plan

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

use super::types::DietPlanResponse;

static FENCE_RE: Lazy<Option<Regex>> =
    Lazy::new(|| Regex::new(r"(?s)^```[A-Za-z0-9_-]*[ \t]*\r?\n?(.*?)\r?\n?```\s*$").ok());

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DietParseError {
    #[error("Model output is not valid JSON: {0}")]
    InvalidJson(String),

    #[error("Model output is not a JSON object")]
    NotAnObject,

    #[error("Model output does not match the diet plan shape: {0}")]
    Schema(String),
}

/// Remove a surrounding markdown code fence, with or without a language tag
pub fn strip_code_fences(text: &str) -> &str {
    let trimmed = text.trim();
    let body = FENCE_RE
        .as_ref()
        .and_then(|re| re.captures(trimmed))
        .and_then(|caps| caps.get(1));
    match body {
        Some(body) => body.as_str().trim(),
        None => trimmed,
    }
}

/// Parse raw model text into a plan. The top level must be an object.
pub fn parse_diet_plan(raw: &str) -> Result<DietPlanResponse, DietParseError> {
    let body = strip_code_fences(raw);
    let value: Value =
        serde_json::from_str(body).map_err(|e| DietParseError::InvalidJson(e.to_string()))?;

    if !value.is_object() {
        return Err(DietParseError::NotAnObject);
    }

    serde_json::from_value(value).map_err(|e| DietParseError::Schema(e.to_string()))
}
