//! Error handling integration tests
//!
//! Verifies how internal failures are rendered to HTTP clients.

#[cfg(test)]
mod tests {
    use actix_web::ResponseError;
    use actix_web::body::to_bytes;
    use actix_web::http::header::RETRY_AFTER;
    use brofit_gateway::config::ProviderCandidate;
    use brofit_gateway::core::diet::parse_diet_plan;
    use brofit_gateway::core::router::{AttemptOutcome, ChainAttemptResult, ChainError};
    use brofit_gateway::utils::error::GatewayError;
    use serde_json::Value;

    async fn body_of(err: &GatewayError) -> Value {
        let bytes = to_bytes(err.error_response().into_body()).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn failed_attempt(model: &str, reason: &str) -> ChainAttemptResult {
        ChainAttemptResult {
            candidate: ProviderCandidate::new("gemini", model),
            outcome: AttemptOutcome::RetryableFailure(reason.to_string()),
            latency_ms: 12,
        }
    }

    // ==================== Rate Limits ====================

    #[actix_web::test]
    async fn test_rate_limited_sets_retry_after() {
        let err = GatewayError::rate_limited(3599);
        let response = err.error_response();
        assert_eq!(response.status().as_u16(), 429);
        assert_eq!(response.headers().get(RETRY_AFTER).unwrap(), "3599");

        let body = body_of(&err).await;
        assert_eq!(body["code"], "RATE_LIMIT_EXCEEDED");
        assert_eq!(body["error"], "Too many requests. Please try again in 3599 seconds.");
    }

    // ==================== Chain Failures ====================

    #[actix_web::test]
    async fn test_exhaustion_hides_upstream_detail() {
        let chain_err = ChainError::AllProvidersExhausted {
            attempts: vec![
                failed_attempt("gemini-2.0-flash", "quota exceeded for key AIza-123"),
                failed_attempt("gemini-1.5-flash", "overloaded"),
            ],
        };
        let err = GatewayError::from(chain_err);
        assert_eq!(err.status_code().as_u16(), 500);

        let body = body_of(&err).await;
        assert_eq!(body["code"], "PROVIDERS_EXHAUSTED");
        let message = body["error"].as_str().unwrap();
        assert!(message.contains("overloaded"));
        assert!(!message.contains("AIza-123"));
        assert!(!message.contains("gemini"));
    }

    #[actix_web::test]
    async fn test_chain_timeout_is_408() {
        let err = GatewayError::from(ChainError::Timeout {
            candidate: Some(ProviderCandidate::new("openai", "gpt-4o-mini")),
            attempts: vec![],
        });
        assert_eq!(err.status_code().as_u16(), 408);
        assert_eq!(body_of(&err).await["code"], "TIMEOUT");
    }

    // ==================== Diet Parsing ====================

    #[actix_web::test]
    async fn test_malformed_plan_is_500() {
        let parse_err = parse_diet_plan("[1, 2, 3]").unwrap_err();
        let err = GatewayError::from(parse_err);
        assert!(matches!(err, GatewayError::MalformedAiResponse(_)));
        assert_eq!(err.status_code().as_u16(), 500);
    }

    // ==================== Client Errors ====================

    #[actix_web::test]
    async fn test_validation_message_passes_through() {
        let err = GatewayError::validation("message is required");
        assert_eq!(err.status_code().as_u16(), 400);
        assert_eq!(body_of(&err).await["error"], "message is required");
    }

    #[actix_web::test]
    async fn test_config_error_is_generic() {
        let err = GatewayError::config("JWT secret must be at least 32 characters long");
        let body = body_of(&err).await;
        assert_eq!(body["error"], "An internal error occurred");
    }
}
