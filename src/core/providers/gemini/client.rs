//! Gemini Client
//!
//! Google AI Studio `generateContent` over reqwest.

use std::time::Duration;

use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, ClientBuilder, Response};
use serde_json::{Value, json};
use tracing::debug;

use crate::core::providers::unified_provider::ProviderError;
use crate::core::types::GenerationRequest;

use super::config::GeminiConfig;
use super::error::GeminiErrorMapper;

const API_KEY_HEADER: &str = "x-goog-api-key";

/// Gemini API client
#[derive(Debug, Clone)]
pub struct GeminiClient {
    config: GeminiConfig,
    http_client: Client,
}

impl GeminiClient {
    pub fn new(config: GeminiConfig) -> Result<Self, ProviderError> {
        let http_client = ClientBuilder::new()
            .timeout(Duration::from_secs(config.request_timeout))
            .connect_timeout(Duration::from_secs(config.connect_timeout))
            .build()
            .map_err(|e| {
                ProviderError::configuration("gemini", format!("Failed to create HTTP client: {}", e))
            })?;

        Ok(Self {
            config,
            http_client,
        })
    }

    pub fn config(&self) -> &GeminiConfig {
        &self.config
    }

    /// Run `generateContent` and return the concatenated candidate text
    pub async fn generate(
        &self,
        model: &str,
        request: &GenerationRequest,
    ) -> Result<String, ProviderError> {
        let body = Self::transform_request(request);
        let response = self.send_request(model, body).await?;
        Self::extract_text(&response)
    }

    async fn send_request(&self, model: &str, body: Value) -> Result<Value, ProviderError> {
        let url = self.config.get_endpoint(model);
        let headers = self.build_headers()?;

        debug!(model = model, "Sending Gemini request");

        let response = self
            .http_client
            .post(&url)
            .headers(headers)
            .json(&body)
            .send()
            .await
            .map_err(|e| ProviderError::from_reqwest("gemini", e))?;

        self.handle_response(response, model).await
    }

    fn build_headers(&self) -> Result<HeaderMap, ProviderError> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .filter(|key| !key.is_empty())
            .ok_or_else(|| ProviderError::configuration("gemini", "API key is not configured"))?;

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let mut key_value = HeaderValue::from_str(api_key)
            .map_err(|_| ProviderError::configuration("gemini", "API key has invalid characters"))?;
        key_value.set_sensitive(true);
        headers.insert(HeaderName::from_static(API_KEY_HEADER), key_value);

        Ok(headers)
    }

    async fn handle_response(
        &self,
        response: Response,
        model: &str,
    ) -> Result<Value, ProviderError> {
        let status = response.status();
        let response_text = response
            .text()
            .await
            .map_err(|e| ProviderError::from_reqwest("gemini", e))?;

        if !status.is_success() {
            return Err(GeminiErrorMapper::from_http_status(
                status.as_u16(),
                &response_text,
                model,
            ));
        }

        let json_response: Value = serde_json::from_str(&response_text).map_err(|e| {
            ProviderError::response_parsing("gemini", format!("Invalid response JSON: {}", e))
        })?;

        if json_response.get("error").is_some() {
            return Err(GeminiErrorMapper::from_api_response(&json_response));
        }

        Ok(json_response)
    }

    /// Build the `generateContent` body
    pub fn transform_request(request: &GenerationRequest) -> Value {
        let mut body = json!({
            "contents": [{
                "role": "user",
                "parts": [{"text": request.prompt}]
            }]
        });

        if let Some(system) = request.system_context.as_deref().filter(|s| !s.is_empty()) {
            body["systemInstruction"] = json!({"parts": [{"text": system}]});
        }

        let mut generation_config = serde_json::Map::new();
        if let Some(temperature) = request.temperature {
            generation_config.insert("temperature".to_string(), json!(temperature));
        }
        if let Some(max_tokens) = request.max_output_tokens {
            generation_config.insert("maxOutputTokens".to_string(), json!(max_tokens));
        }
        if request.wants_json() {
            generation_config.insert("responseMimeType".to_string(), json!("application/json"));
        }
        if !generation_config.is_empty() {
            body["generationConfig"] = Value::Object(generation_config);
        }

        body
    }

    /// Text of the first candidate, parts joined in order
    pub fn extract_text(response: &Value) -> Result<String, ProviderError> {
        if let Some(reason) = response
            .pointer("/promptFeedback/blockReason")
            .and_then(Value::as_str)
        {
            return Err(ProviderError::content_filtered("gemini", reason));
        }

        let candidate = response
            .get("candidates")
            .and_then(Value::as_array)
            .and_then(|candidates| candidates.first())
            .ok_or_else(|| ProviderError::response_parsing("gemini", "Response has no candidates"))?;

        let text: String = candidate
            .pointer("/content/parts")
            .and_then(Value::as_array)
            .map(|parts| {
                parts
                    .iter()
                    .filter_map(|part| part.get("text").and_then(Value::as_str))
                    .collect()
            })
            .unwrap_or_default();

        if text.is_empty() {
            let finish_reason = candidate
                .get("finishReason")
                .and_then(Value::as_str)
                .unwrap_or("UNKNOWN");
            return match finish_reason {
                "SAFETY" | "RECITATION" | "BLOCKLIST" | "PROHIBITED_CONTENT" => {
                    Err(ProviderError::content_filtered("gemini", finish_reason))
                }
                _ => Err(ProviderError::response_parsing(
                    "gemini",
                    format!("Empty candidate text (finishReason {})", finish_reason),
                )),
            };
        }

        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::ResponseFormat;

    #[test]
    fn test_transform_request_with_system_and_json() {
        let request = GenerationRequest::new("Plan my diet")
            .with_system_context("You are a coach")
            .with_response_format(ResponseFormat::Json)
            .with_temperature(0.4);

        let body = GeminiClient::transform_request(&request);
        assert_eq!(body["contents"][0]["parts"][0]["text"], "Plan my diet");
        assert_eq!(body["systemInstruction"]["parts"][0]["text"], "You are a coach");
        assert_eq!(body["generationConfig"]["responseMimeType"], "application/json");
    }

    #[test]
    fn test_transform_request_plain_text() {
        let body = GeminiClient::transform_request(&GenerationRequest::new("hi"));
        assert!(body.get("systemInstruction").is_none());
        assert!(body.get("generationConfig").is_none());
    }

    #[test]
    fn test_extract_text_joins_parts() {
        let response = json!({
            "candidates": [{
                "content": {"parts": [{"text": "Hello "}, {"text": "champ"}]},
                "finishReason": "STOP"
            }]
        });
        assert_eq!(GeminiClient::extract_text(&response).unwrap(), "Hello champ");
    }

    #[test]
    fn test_extract_text_blocked_prompt() {
        let response = json!({"promptFeedback": {"blockReason": "SAFETY"}});
        assert!(matches!(
            GeminiClient::extract_text(&response),
            Err(ProviderError::ContentFiltered { .. })
        ));
    }

    #[test]
    fn test_extract_text_safety_finish() {
        let response = json!({"candidates": [{"finishReason": "SAFETY"}]});
        assert!(matches!(
            GeminiClient::extract_text(&response),
            Err(ProviderError::ContentFiltered { .. })
        ));
    }

    #[test]
    fn test_extract_text_no_candidates() {
        assert!(matches!(
            GeminiClient::extract_text(&json!({})),
            Err(ProviderError::ResponseParsing { .. })
        ));
    }
}
