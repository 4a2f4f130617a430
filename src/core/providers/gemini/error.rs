//! Gemini Error Handling

use serde_json::Value;

use crate::core::providers::unified_provider::ProviderError;

pub struct GeminiErrorMapper;

impl GeminiErrorMapper {
    /// Map a non-2xx response for `model`
    pub fn from_http_status(status: u16, body: &str, model: &str) -> ProviderError {
        let detail = ProviderError::clip_body(&Self::error_message(body));
        match status {
            400 => ProviderError::invalid_request("gemini", format!("Bad request: {}", detail)),
            401 => ProviderError::authentication("gemini", "Invalid or missing API key"),
            403 => ProviderError::authentication("gemini", "Forbidden: insufficient permissions"),
            404 => ProviderError::model_not_found("gemini", model),
            429 => ProviderError::rate_limit("gemini", Self::extract_retry_after(body)),
            503 => ProviderError::provider_unavailable("gemini", detail),
            500..=599 => {
                ProviderError::api_error("gemini", status, format!("Server error: {}", detail))
            }
            _ => ProviderError::api_error("gemini", status, detail),
        }
    }

    /// Map an `error` object found in a 200 body
    pub fn from_api_response(response: &Value) -> ProviderError {
        let Some(error) = response.get("error") else {
            return ProviderError::response_parsing("gemini", "Unknown API error");
        };

        let code = error.get("code").and_then(Value::as_u64).unwrap_or(500) as u16;
        let message = error
            .get("message")
            .and_then(Value::as_str)
            .unwrap_or("Unknown error");
        let status = error.get("status").and_then(Value::as_str).unwrap_or("");

        match (code, status) {
            (401, _) | (_, "UNAUTHENTICATED") | (403, _) | (_, "PERMISSION_DENIED") => {
                ProviderError::authentication("gemini", message)
            }
            (429, _) | (_, "RESOURCE_EXHAUSTED") => {
                ProviderError::rate_limit("gemini", Self::retry_after_from_error(error))
            }
            (503, _) | (_, "UNAVAILABLE") => {
                ProviderError::provider_unavailable("gemini", message)
            }
            (404, _) | (_, "NOT_FOUND") => ProviderError::model_not_found("gemini", message),
            (400, _) | (_, "INVALID_ARGUMENT") => ProviderError::invalid_request("gemini", message),
            _ => ProviderError::api_error("gemini", code, message),
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

    fn extract_retry_after(body: &str) -> Option<u64> {
        let json = serde_json::from_str::<Value>(body).ok()?;
        match json.get("error") {
            Some(error) => Self::retry_after_from_error(error),
            None => json.get("retry_after").and_then(Value::as_u64),
        }
    }

    /// `retry_after` field, or a `RetryInfo` detail with `retryDelay: "37s"`
    fn retry_after_from_error(error: &Value) -> Option<u64> {
        if let Some(retry_after) = error.get("retry_after").and_then(Value::as_u64) {
            return Some(retry_after);
        }

        error
            .get("details")
            .and_then(Value::as_array)?
            .iter()
            .find_map(|detail| {
                if let Some(seconds) = detail.get("retry_after").and_then(Value::as_u64) {
                    return Some(seconds);
                }
                let delay = detail.get("retryDelay").and_then(Value::as_str)?;
                let seconds: f64 = delay.trim_end_matches('s').parse().ok()?;
                Some(seconds.ceil() as u64)
            })
    }
}
