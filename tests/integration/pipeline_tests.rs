//! Pipeline integration tests
//!
//! Quotas, prompts and diet parsing with providers served over HTTP.

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use brofit_gateway::config::{OperationConfig, PipelineConfig, PolicyConfig, RateLimitConfig};
    use brofit_gateway::core::diet::DietRequest;
    use brofit_gateway::core::pipeline::{AiPipeline, CallerIdentity, ChatContext, ChatRequest};
    use brofit_gateway::core::providers::{ProviderError, ProviderRegistry};
    use brofit_gateway::core::rate_limiter::RateLimiter;
    use brofit_gateway::core::router::ProviderChain;
    use brofit_gateway::utils::error::GatewayError;
    use serde_json::json;

    use crate::common::providers::{gemini_error, gemini_ok, openai_ok};
    use crate::common::{DietRequestFactory, ScriptedProvider, UpstreamStub, diet_plan_json};

    fn rate_limit(max_ai: u32) -> RateLimitConfig {
        RateLimitConfig {
            ai: PolicyConfig::new(max_ai, 24 * 60 * 60),
            ..RateLimitConfig::default()
        }
    }

    fn pipeline(registry: ProviderRegistry, max_ai: u32) -> AiPipeline {
        let config = PipelineConfig {
            chat: OperationConfig {
                timeout_secs: 10,
                ..OperationConfig::default()
            },
            diet: OperationConfig {
                timeout_secs: 10,
                ..OperationConfig::default()
            },
            ..PipelineConfig::default()
        };
        AiPipeline::new(
            ProviderChain::new(registry),
            Arc::new(RateLimiter::new(true)),
            config,
            &rate_limit(max_ai),
        )
    }

    fn chat(message: &str) -> ChatRequest {
        serde_json::from_value(json!({
            "message": message,
            "context": {"language": "hi", "page": "programs"}
        }))
        .unwrap()
    }

    fn user(id: &str) -> CallerIdentity {
        CallerIdentity::from_parts(Some(id), None, None, Some("10.0.0.1"))
    }

    // ==================== Chat ====================

    #[tokio::test]
    async fn test_chat_over_http_sends_language_directive() {
        let stub = UpstreamStub::start().await;
        stub.mount_gemini("gemini-2.0-flash", gemini_ok("नमस्ते")).await;

        let pipeline = pipeline(stub.registry(), 5);
        let response = pipeline.chat(&user("u1"), chat("Namaste")).await.unwrap();
        assert_eq!(response.response, "नमस्ते");

        let received = stub.server.received_requests().await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&received[0].body).unwrap();
        let system = body["systemInstruction"]["parts"][0]["text"].as_str().unwrap();
        assert!(system.contains("Respond in Hindi"));
        assert!(system.contains("programs"));
    }

    #[tokio::test]
    async fn test_quota_counts_attempted_operations() {
        let stub = UpstreamStub::start().await;
        stub.mount_gemini("gemini-2.0-flash", gemini_error(503, "overloaded")).await;
        stub.mount_gemini("gemini-1.5-flash", gemini_error(503, "overloaded")).await;
        stub.mount_openai(openai_ok("ok")).await;

        let pipeline = pipeline(stub.registry(), 2);
        let identity = user("u2");

        pipeline.chat(&identity, chat("one")).await.unwrap();
        pipeline.chat(&identity, chat("two")).await.unwrap();

        let err = pipeline.chat(&identity, chat("three")).await.unwrap_err();
        match err {
            GatewayError::RateLimited {
                reset_in_seconds, ..
            } => assert!((86_399..=86_400).contains(&reset_in_seconds)),
            other => panic!("Expected rate limit, got {:?}", other),
        }

        // the rejected call never reached an upstream
        assert_eq!(stub.request_paths().await.len(), 6);
        assert_eq!(pipeline.ai_status(&identity).ai.remaining, 0);
    }

    #[tokio::test]
    async fn test_callers_have_separate_quotas() {
        let provider = ScriptedProvider::always("hello");
        let mut registry = ProviderRegistry::new();
        registry.register("gemini", provider.clone());

        let pipeline = pipeline(registry, 1);
        pipeline.chat(&user("a"), chat("hi")).await.unwrap();
        pipeline.chat(&user("b"), chat("hi")).await.unwrap();
        assert!(pipeline.chat(&user("a"), chat("hi")).await.is_err());
        assert_eq!(provider.calls(), 2);
    }

    #[tokio::test]
    async fn test_chat_exhaustion_is_server_error() {
        let provider = ScriptedProvider::new(vec![Err(ProviderError::provider_unavailable(
            "gemini", "down",
        ))]);
        let mut registry = ProviderRegistry::new();
        registry.register("gemini", provider);

        let pipeline = pipeline(registry, 5);
        let err = pipeline.chat(&user("c"), chat("hi")).await.unwrap_err();
        assert!(matches!(err, GatewayError::ProvidersExhausted(_)));
    }

    // ==================== Diet ====================

    #[tokio::test]
    async fn test_diet_plan_from_fenced_reply() {
        let stub = UpstreamStub::start().await;
        let fenced = format!("```json\n{}\n```", diet_plan_json());
        stub.mount_gemini("gemini-2.0-flash", gemini_ok(&fenced)).await;

        let pipeline = pipeline(stub.registry(), 5);
        let plan = pipeline
            .generate_diet(&user("d"), DietRequestFactory::create())
            .await
            .unwrap();

        let timeline = plan.transformation_timeline.unwrap();
        assert_eq!(timeline.daily_calories, Some(2259.0));

        let shopping = plan.shopping_list.unwrap();
        assert_eq!(shopping.total_cost, Some(5800.0));
        assert_eq!(shopping.items[1].price, Some(380.0));

        let meals = plan.meal_plan.unwrap();
        assert_eq!(meals[0].protein, Some(28.0));
        assert_eq!(meals[0].items.len(), 2);

        let received = stub.server.received_requests().await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&received[0].body).unwrap();
        assert_eq!(body["generationConfig"]["responseMimeType"], "application/json");
    }

    #[tokio::test]
    async fn test_diet_accepts_string_numbers() {
        let request: DietRequest =
            serde_json::from_value(DietRequestFactory::hindi_with_string_numbers()).unwrap();

        let pipeline = pipeline(
            {
                let mut registry = ProviderRegistry::new();
                registry.register("gemini", ScriptedProvider::always("{\"mealPlan\": []}"));
                registry
            },
            5,
        );

        let plan = pipeline.generate_diet(&user("e"), request).await.unwrap();
        assert_eq!(plan.meal_plan.map(|m| m.len()), Some(0));
    }

    #[tokio::test]
    async fn test_diet_prose_reply_is_malformed() {
        let mut registry = ProviderRegistry::new();
        registry.register(
            "gemini",
            ScriptedProvider::always("Sure! Here is your plan: eat well."),
        );

        let pipeline = pipeline(registry, 5);
        let err = pipeline
            .generate_diet(&user("f"), DietRequestFactory::create())
            .await
            .unwrap_err();
        assert!(matches!(err, GatewayError::MalformedAiResponse(_)));
    }

    #[tokio::test]
    async fn test_chat_context_is_optional() {
        let mut registry = ProviderRegistry::new();
        registry.register("gemini", ScriptedProvider::always("hey"));
        let pipeline = pipeline(registry, 5);

        let request = ChatRequest {
            message: "hello".to_string(),
            context: ChatContext::default(),
        };
        assert_eq!(pipeline.chat(&user("g"), request).await.unwrap().response, "hey");
    }
}
