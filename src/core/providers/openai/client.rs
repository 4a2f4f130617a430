//! OpenAI Client

use std::time::Duration;

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue, RETRY_AFTER};
use reqwest::{Client, ClientBuilder, Response, StatusCode};
use serde_json::{Value, json};
use tracing::debug;

use crate::core::providers::unified_provider::ProviderError;
use crate::core::types::GenerationRequest;

use super::config::OpenAIConfig;
use super::error::OpenAIErrorMapper;

#[derive(Debug, Clone)]
pub struct OpenAIClient {
    config: OpenAIConfig,
    http_client: Client,
}

impl OpenAIClient {
    pub fn new(config: OpenAIConfig) -> Result<Self, ProviderError> {
        let http_client = ClientBuilder::new()
            .timeout(Duration::from_secs(config.timeout))
            .connect_timeout(Duration::from_secs(10))
            .build()
            .map_err(|e| {
                ProviderError::configuration("openai", format!("Failed to create HTTP client: {}", e))
            })?;

        Ok(Self {
            config,
            http_client,
        })
    }

    pub async fn generate(
        &self,
        model: &str,
        request: &GenerationRequest,
    ) -> Result<String, ProviderError> {
        let body = Self::transform_request(model, request);
        let headers = self.build_headers()?;

        debug!(model = model, "Sending OpenAI request");

        let response = self
            .http_client
            .post(self.config.chat_completions_url())
            .headers(headers)
            .json(&body)
            .send()
            .await
            .map_err(|e| ProviderError::from_reqwest("openai", e))?;

        let json_response = Self::handle_response(response, model).await?;
        Self::extract_text(&json_response)
    }

    fn build_headers(&self) -> Result<HeaderMap, ProviderError> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .filter(|key| !key.is_empty())
            .ok_or_else(|| ProviderError::configuration("openai", "API key is not configured"))?;

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let mut auth = HeaderValue::from_str(&format!("Bearer {}", api_key))
            .map_err(|_| ProviderError::configuration("openai", "API key has invalid characters"))?;
        auth.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth);

        Ok(headers)
    }

    async fn handle_response(response: Response, model: &str) -> Result<Value, ProviderError> {
        let status = response.status();
        let retry_after = response
            .headers()
            .get(RETRY_AFTER)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.trim().parse::<u64>().ok());

        let response_text = response
            .text()
            .await
            .map_err(|e| ProviderError::from_reqwest("openai", e))?;

        if !status.is_success() {
            let error = OpenAIErrorMapper::from_http_status(status.as_u16(), &response_text, model);
            return Err(match (status, error) {
                (StatusCode::TOO_MANY_REQUESTS, ProviderError::RateLimit { message, .. }) => {
                    ProviderError::RateLimit {
                        provider: "openai",
                        message,
                        retry_after,
                    }
                }
                (_, error) => error,
            });
        }

        serde_json::from_str(&response_text).map_err(|e| {
            ProviderError::response_parsing("openai", format!("Invalid response JSON: {}", e))
        })
    }

    /// Build the `chat/completions` body
    pub fn transform_request(model: &str, request: &GenerationRequest) -> Value {
        let mut messages = Vec::with_capacity(2);
        if let Some(system) = request.system_context.as_deref().filter(|s| !s.is_empty()) {
            messages.push(json!({"role": "system", "content": system}));
        }
        messages.push(json!({"role": "user", "content": request.prompt}));

        let mut body = json!({
            "model": model,
            "messages": messages,
        });

        if let Some(temperature) = request.temperature {
            body["temperature"] = json!(temperature);
        }
        if let Some(max_tokens) = request.max_output_tokens {
            body["max_tokens"] = json!(max_tokens);
        }
        if request.wants_json() {
            body["response_format"] = json!({"type": "json_object"});
        }

        body
    }

    pub fn extract_text(response: &Value) -> Result<String, ProviderError> {
        let choice = response
            .get("choices")
            .and_then(Value::as_array)
            .and_then(|choices| choices.first())
            .ok_or_else(|| ProviderError::response_parsing("openai", "Response has no choices"))?;

        if choice.get("finish_reason").and_then(Value::as_str) == Some("content_filter") {
            return Err(ProviderError::content_filtered("openai", "content_filter"));
        }

        match choice.pointer("/message/content").and_then(Value::as_str) {
            Some(text) if !text.is_empty() => Ok(text.to_string()),
            _ => Err(ProviderError::response_parsing(
                "openai",
                "Choice has no message content",
            )),
        }
    }
}
