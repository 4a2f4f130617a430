//! Provider HTTP contract tests
//!
//! Each adapter is driven through the registry against a wiremock server
//! to pin the request shape and the error mapping.

#[cfg(test)]
mod tests {
    use brofit_gateway::core::providers::ProviderError;
    use brofit_gateway::core::types::{GenerationRequest, ResponseFormat};
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, ResponseTemplate};

    use crate::common::UpstreamStub;
    use crate::common::providers::{
        GEMINI_KEY, gemini_error, gemini_ok, openai_error, openai_ok,
    };

    fn diet_request() -> GenerationRequest {
        GenerationRequest::new("Plan my week")
            .with_system_context("You are a nutrition coach")
            .with_response_format(ResponseFormat::Json)
            .with_temperature(0.4)
    }

    // ==================== Gemini ====================

    #[tokio::test]
    async fn test_gemini_request_shape() {
        let stub = UpstreamStub::start().await;
        Mock::given(method("POST"))
            .and(path(UpstreamStub::gemini_path("gemini-2.0-flash")))
            .and(header("x-goog-api-key", GEMINI_KEY))
            .and(body_partial_json(json!({
                "contents": [{"role": "user", "parts": [{"text": "Plan my week"}]}],
                "systemInstruction": {"parts": [{"text": "You are a nutrition coach"}]},
                "generationConfig": {"responseMimeType": "application/json"}
            })))
            .respond_with(gemini_ok("{\"tacticalBrief\": \"ok\"}"))
            .expect(1)
            .mount(&stub.server)
            .await;

        let provider = stub.registry().get("gemini").unwrap();
        let text = provider
            .generate("gemini-2.0-flash", &diet_request())
            .await
            .unwrap();
        assert_eq!(text, "{\"tacticalBrief\": \"ok\"}");
    }

    #[tokio::test]
    async fn test_gemini_key_not_in_url() {
        let stub = UpstreamStub::start().await;
        stub.mount_gemini("gemini-2.0-flash", gemini_ok("hello")).await;

        let provider = stub.registry().get("gemini").unwrap();
        provider
            .generate("gemini-2.0-flash", &GenerationRequest::new("hi"))
            .await
            .unwrap();

        let received = stub.server.received_requests().await.unwrap();
        assert_eq!(received.len(), 1);
        assert!(received[0].url.query().is_none());
        assert!(!received[0].url.as_str().contains(GEMINI_KEY));
    }

    #[tokio::test]
    async fn test_gemini_unknown_model_is_named() {
        let stub = UpstreamStub::start().await;
        stub.mount_gemini("gemini-9", gemini_error(404, "models/gemini-9 is not found"))
            .await;

        let provider = stub.registry().get("gemini").unwrap();
        let err = provider
            .generate("gemini-9", &GenerationRequest::new("hi"))
            .await
            .unwrap_err();
        match err {
            ProviderError::ModelNotFound { model, .. } => assert_eq!(model, "gemini-9"),
            other => panic!("Expected model not found, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_gemini_rate_limit_is_retryable() {
        let stub = UpstreamStub::start().await;
        stub.mount_gemini("gemini-2.0-flash", gemini_error(429, "Resource has been exhausted"))
            .await;

        let provider = stub.registry().get("gemini").unwrap();
        let err = provider
            .generate("gemini-2.0-flash", &GenerationRequest::new("hi"))
            .await
            .unwrap_err();
        assert!(matches!(err, ProviderError::RateLimit { .. }));
        assert!(err.is_retryable());
    }

    #[tokio::test]
    async fn test_gemini_safety_block_is_fatal() {
        let stub = UpstreamStub::start().await;
        stub.mount_gemini(
            "gemini-2.0-flash",
            ResponseTemplate::new(200).set_body_json(json!({
                "candidates": [{"finishReason": "SAFETY"}]
            })),
        )
        .await;

        let provider = stub.registry().get("gemini").unwrap();
        let err = provider
            .generate("gemini-2.0-flash", &GenerationRequest::new("hi"))
            .await
            .unwrap_err();
        assert!(matches!(err, ProviderError::ContentFiltered { .. }));
        assert!(!err.is_retryable());
    }

    // ==================== OpenAI ====================

    #[tokio::test]
    async fn test_openai_request_shape() {
        let stub = UpstreamStub::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .and(body_partial_json(json!({
                "model": "gpt-4o-mini",
                "messages": [
                    {"role": "system", "content": "You are a nutrition coach"},
                    {"role": "user", "content": "Plan my week"}
                ],
                "response_format": {"type": "json_object"}
            })))
            .respond_with(openai_ok("{}"))
            .expect(1)
            .mount(&stub.server)
            .await;

        let provider = stub.registry().get("openai").unwrap();
        let text = provider.generate("gpt-4o-mini", &diet_request()).await.unwrap();
        assert_eq!(text, "{}");
    }

    #[tokio::test]
    async fn test_openai_retry_after_header() {
        let stub = UpstreamStub::start().await;
        stub.mount_openai(openai_error(429, "slow down").insert_header("retry-after", "17"))
            .await;

        let provider = stub.registry().get("openai").unwrap();
        let err = provider
            .generate("gpt-4o-mini", &GenerationRequest::new("hi"))
            .await
            .unwrap_err();
        assert_eq!(err.retry_after(), Some(17));
    }

    #[tokio::test]
    async fn test_openai_rejected_key_is_fatal() {
        let stub = UpstreamStub::start().await;
        stub.mount_openai(openai_error(401, "Incorrect API key provided")).await;

        let provider = stub.registry().get("openai").unwrap();
        let err = provider
            .generate("gpt-4o-mini", &GenerationRequest::new("hi"))
            .await
            .unwrap_err();
        assert!(matches!(err, ProviderError::Authentication { provider: "openai", .. }));
        assert!(!err.is_retryable());
    }

    #[tokio::test]
    async fn test_missing_key_fails_without_network() {
        let stub = UpstreamStub::start().await;
        let mut configs = stub.provider_configs();
        for config in &mut configs {
            config.api_key = None;
        }
        let registry =
            brofit_gateway::core::providers::ProviderRegistry::from_config(&configs, |_| None)
                .unwrap();

        let err = registry
            .get("gemini")
            .unwrap()
            .generate("gemini-2.0-flash", &GenerationRequest::new("hi"))
            .await
            .unwrap_err();
        assert!(matches!(err, ProviderError::Configuration { .. }));
        assert!(stub.request_paths().await.is_empty());
    }
}
