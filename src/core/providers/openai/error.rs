//! OpenAI Provider Error Handling

use serde_json::Value;

use crate::core::providers::unified_provider::ProviderError;

pub struct OpenAIErrorMapper;

impl OpenAIErrorMapper {
    /// Map a non-2xx response for `model`
    pub fn from_http_status(status: u16, body: &str, model: &str) -> ProviderError {
        let detail = ProviderError::clip_body(&Self::error_message(body));
        match status {
            400 => ProviderError::invalid_request("openai", detail),
            401 | 403 => ProviderError::authentication("openai", detail),
            404 => ProviderError::model_not_found("openai", model),
            429 => ProviderError::RateLimit {
                provider: "openai",
                message: detail,
                retry_after: None,
            },
            503 => ProviderError::provider_unavailable("openai", detail),
            _ => ProviderError::api_error("openai", status, detail),
        }
    }

    fn error_message(body: &str) -> String {
        serde_json::from_str::<Value>(body)
            .ok()
            .and_then(|json| {
                json.pointer("/error/message")
                    .and_then(Value::as_str)
                    .map(str::to_string)
            })
            .unwrap_or_else(|| body.to_string())
    }
}
