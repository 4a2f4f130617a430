//! Fallback chain tests over real HTTP
//!
//! The default candidate order is two Gemini models then one OpenAI model.

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use brofit_gateway::config::{ProviderCandidate, default_candidates};
    use brofit_gateway::core::router::{AttemptOutcome, ChainError, ProviderChain};
    use brofit_gateway::core::types::GenerationRequest;
    use tokio::time::Instant;

    use crate::common::UpstreamStub;
    use crate::common::providers::{gemini_error, gemini_ok, openai_error, openai_ok};

    fn deadline(secs: u64) -> Instant {
        Instant::now() + Duration::from_secs(secs)
    }

    // ==================== Fallback Order ====================

    #[tokio::test]
    async fn test_first_candidate_success_short_circuits() {
        let stub = UpstreamStub::start().await;
        stub.mount_gemini("gemini-2.0-flash", gemini_ok("Drink water.")).await;
        stub.mount_gemini("gemini-1.5-flash", gemini_ok("unused")).await;
        stub.mount_openai(openai_ok("unused")).await;

        let chain = ProviderChain::new(stub.registry());
        let result = chain
            .generate(&GenerationRequest::new("hi"), &default_candidates(), deadline(10))
            .await
            .unwrap();

        assert_eq!(result.text, "Drink water.");
        assert!(!result.used_fallback);
        assert_eq!(result.attempts.len(), 1);
        assert_eq!(stub.request_paths().await.len(), 1);
    }

    #[tokio::test]
    async fn test_throttled_then_overloaded_then_openai() {
        let stub = UpstreamStub::start().await;
        stub.mount_gemini("gemini-2.0-flash", gemini_error(429, "quota exceeded")).await;
        stub.mount_gemini("gemini-1.5-flash", gemini_error(503, "model overloaded")).await;
        stub.mount_openai(openai_ok("Fallback answer")).await;

        let chain = ProviderChain::new(stub.registry());
        let result = chain
            .generate(&GenerationRequest::new("hi"), &default_candidates(), deadline(10))
            .await
            .unwrap();

        assert_eq!(result.text, "Fallback answer");
        assert!(result.used_fallback);
        assert_eq!(result.candidate, ProviderCandidate::new("openai", "gpt-4o-mini"));

        let outcomes: Vec<&AttemptOutcome> = result.attempts.iter().map(|a| &a.outcome).collect();
        assert!(matches!(outcomes[0], AttemptOutcome::RetryableFailure(_)));
        assert!(matches!(outcomes[1], AttemptOutcome::RetryableFailure(_)));
        assert!(outcomes[2].is_success());

        assert_eq!(
            stub.request_paths().await,
            vec![
                UpstreamStub::gemini_path("gemini-2.0-flash"),
                UpstreamStub::gemini_path("gemini-1.5-flash"),
                "/v1/chat/completions".to_string(),
            ]
        );
    }

    #[tokio::test]
    async fn test_every_candidate_fails() {
        let stub = UpstreamStub::start().await;
        stub.mount_gemini("gemini-2.0-flash", gemini_error(500, "internal")).await;
        stub.mount_gemini("gemini-1.5-flash", gemini_error(503, "overloaded")).await;
        stub.mount_openai(openai_error(502, "bad gateway")).await;

        let chain = ProviderChain::new(stub.registry());
        let err = chain
            .generate(&GenerationRequest::new("hi"), &default_candidates(), deadline(10))
            .await
            .unwrap_err();

        match &err {
            ChainError::AllProvidersExhausted { attempts } => {
                assert_eq!(attempts.len(), 3);
                assert!(attempts.iter().all(|a| !a.outcome.is_success()));
            }
            other => panic!("Expected exhaustion, got {:?}", other),
        }
        assert!(err.summary().contains("openai/gpt-4o-mini"));
    }

    #[tokio::test]
    async fn test_rejected_key_still_falls_back() {
        let stub = UpstreamStub::start().await;
        stub.mount_gemini("gemini-2.0-flash", gemini_error(401, "API key not valid")).await;
        stub.mount_gemini("gemini-1.5-flash", gemini_ok("second model")).await;

        let chain = ProviderChain::new(stub.registry());
        let result = chain
            .generate(&GenerationRequest::new("hi"), &default_candidates(), deadline(10))
            .await
            .unwrap();

        assert_eq!(result.text, "second model");
        assert!(matches!(
            result.attempts[0].outcome,
            AttemptOutcome::FatalFailure(_)
        ));
    }

    // ==================== Deadline ====================

    #[tokio::test]
    async fn test_slow_upstream_hits_deadline() {
        let stub = UpstreamStub::start().await;
        stub.mount_gemini(
            "gemini-2.0-flash",
            gemini_ok("too late").set_delay(Duration::from_secs(3)),
        )
        .await;

        let chain = ProviderChain::new(stub.registry());
        let started = std::time::Instant::now();
        let err = chain
            .generate(
                &GenerationRequest::new("hi"),
                &default_candidates(),
                Instant::now() + Duration::from_millis(300),
            )
            .await
            .unwrap_err();

        assert!(started.elapsed() < Duration::from_secs(2));
        match err {
            ChainError::Timeout { candidate, .. } => {
                assert_eq!(candidate, Some(ProviderCandidate::new("gemini", "gemini-2.0-flash")));
            }
            other => panic!("Expected timeout, got {:?}", other),
        }
    }
}
