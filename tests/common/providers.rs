//! Provider test utilities
//!
//! [`ScriptedProvider`] runs in-process; [`UpstreamStub`] wraps a wiremock
//! server that answers like Gemini or OpenAI.

use std::collections::VecDeque;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use brofit_gateway::config::{ProviderConfig, ProviderType};
use brofit_gateway::core::providers::{ProviderError, ProviderRegistry};
use brofit_gateway::core::traits::TextGenerationProvider;
use brofit_gateway::core::types::GenerationRequest;
use parking_lot::Mutex;
use serde_json::{Value, json};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const GEMINI_KEY: &str = "test-gemini-key";
pub const OPENAI_KEY: &str = "test-openai-key";

/// Replays queued replies; repeats the last one when the queue runs dry
pub struct ScriptedProvider {
    replies: Mutex<VecDeque<Result<String, ProviderError>>>,
    delay: Duration,
    calls: AtomicUsize,
}

impl ScriptedProvider {
    pub fn new(replies: Vec<Result<String, ProviderError>>) -> Arc<Self> {
        Self::delayed(replies, Duration::ZERO)
    }

    pub fn always(text: &str) -> Arc<Self> {
        Self::new(vec![Ok(text.to_string())])
    }

    pub fn delayed(replies: Vec<Result<String, ProviderError>>, delay: Duration) -> Arc<Self> {
        Arc::new(Self {
            replies: Mutex::new(replies.into()),
            delay,
            calls: AtomicUsize::new(0),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TextGenerationProvider for ScriptedProvider {
    fn name(&self) -> &'static str {
        "scripted"
    }

    async fn generate(
        &self,
        _model: &str,
        _request: &GenerationRequest,
    ) -> Result<String, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        let mut replies = self.replies.lock();
        match replies.len() {
            0 => Err(ProviderError::provider_unavailable("gemini", "script exhausted")),
            1 => replies[0].clone(),
            _ => replies
                .pop_front()
                .unwrap_or_else(|| Err(ProviderError::provider_unavailable("gemini", "empty"))),
        }
    }
}

/// Wiremock server standing in for both upstream APIs
pub struct UpstreamStub {
    pub server: MockServer,
}

impl UpstreamStub {
    pub async fn start() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    pub fn uri(&self) -> String {
        self.server.uri()
    }

    /// Gemini and OpenAI providers pointed at this server
    pub fn provider_configs(&self) -> Vec<ProviderConfig> {
        let mut gemini = ProviderConfig::new("gemini", ProviderType::Gemini);
        gemini.api_key = Some(GEMINI_KEY.to_string());
        gemini.api_base = Some(self.uri());
        gemini.timeout = 5;

        let mut openai = ProviderConfig::new("openai", ProviderType::OpenAI);
        openai.api_key = Some(OPENAI_KEY.to_string());
        openai.api_base = Some(format!("{}/v1", self.uri()));
        openai.timeout = 5;

        vec![gemini, openai]
    }

    pub fn registry(&self) -> ProviderRegistry {
        ProviderRegistry::from_config(&self.provider_configs(), |_| None).unwrap()
    }

    pub fn gemini_path(model: &str) -> String {
        format!("/v1beta/models/{}:generateContent", model)
    }

    pub async fn mount_gemini(&self, model: &str, response: ResponseTemplate) {
        Mock::given(method("POST"))
            .and(path(Self::gemini_path(model)))
            .and(header("x-goog-api-key", GEMINI_KEY))
            .respond_with(response)
            .mount(&self.server)
            .await;
    }

    pub async fn mount_openai(&self, response: ResponseTemplate) {
        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .and(header("authorization", format!("Bearer {}", OPENAI_KEY).as_str()))
            .respond_with(response)
            .mount(&self.server)
            .await;
    }

    /// Paths of every request the server saw, in arrival order
    pub async fn request_paths(&self) -> Vec<String> {
        self.server
            .received_requests()
            .await
            .unwrap_or_default()
            .into_iter()
            .map(|request| request.url.path().to_string())
            .collect()
    }
}

pub fn gemini_ok(text: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({
        "candidates": [{
            "content": {"role": "model", "parts": [{"text": text}]},
            "finishReason": "STOP"
        }]
    }))
}

pub fn gemini_error(status: u16, message: &str) -> ResponseTemplate {
    let status_name = match status {
        429 => "RESOURCE_EXHAUSTED",
        503 => "UNAVAILABLE",
        401 => "UNAUTHENTICATED",
        _ => "INTERNAL",
    };
    ResponseTemplate::new(status).set_body_json(json!({
        "error": {"code": status, "message": message, "status": status_name}
    }))
}

pub fn openai_ok(text: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(openai_body(text))
}

pub fn openai_body(text: &str) -> Value {
    json!({
        "id": "chatcmpl-test",
        "object": "chat.completion",
        "choices": [{
            "index": 0,
            "message": {"role": "assistant", "content": text},
            "finish_reason": "stop"
        }]
    })
}

pub fn openai_error(status: u16, message: &str) -> ResponseTemplate {
    ResponseTemplate::new(status).set_body_json(json!({
        "error": {"message": message, "type": "server_error"}
    }))
}
