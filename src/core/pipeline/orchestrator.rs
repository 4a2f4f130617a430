use std::sync::Arc;

use tokio::time::Instant;
use tracing::{debug, error, info};

use super::chat::{ChatRequest, ChatResponse};
use super::identity::CallerIdentity;
use super::prompts::build_chat_system_prompt;
use super::status::{QuotaStatus, RateLimitStatus};
use crate::config::{OperationConfig, PipelineConfig, RateLimitConfig};
use crate::core::diet::prompt::{DIET_SYSTEM_CONTEXT, build_diet_prompt};
use crate::core::diet::{BodyMetrics, DietPlanResponse, DietRequest, parse_diet_plan};
use crate::core::rate_limiter::{RateLimitPolicy, RateLimitScope, RateLimiter};
use crate::core::router::{ChainError, ExecutionResult, ProviderChain};
use crate::core::types::{GenerationRequest, ResponseFormat};
use crate::utils::error::{GatewayError, Result};
use crate::utils::logging::Sanitization;
use crate::utils::validation::DataValidator;

/// Longest slice of a malformed model reply written to the log
const MAX_LOGGED_REPLY_CHARS: usize = 500;

/// Chat, diet generation and quota status over one provider chain
#[derive(Debug, Clone)]
pub struct AiPipeline {
    chain: ProviderChain,
    limiter: Arc<RateLimiter>,
    config: PipelineConfig,
    ai_policy: RateLimitPolicy,
}

impl AiPipeline {
    pub fn new(
        chain: ProviderChain,
        limiter: Arc<RateLimiter>,
        config: PipelineConfig,
        rate_limit: &RateLimitConfig,
    ) -> Self {
        Self {
            chain,
            limiter,
            config,
            ai_policy: RateLimitPolicy::from(&rate_limit.ai),
        }
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Answer a chat message with raw model text
    pub async fn chat(&self, identity: &CallerIdentity, request: ChatRequest) -> Result<ChatResponse> {
        DataValidator::validate_required("message", &request.message)?;
        DataValidator::validate_length("message", &request.message, 1, self.config.max_message_chars)?;

        self.check_ai_quota(identity)?;

        let generation = Self::generation_request(
            &self.config.chat,
            build_chat_system_prompt(&request.context),
            request.message.trim().to_string(),
            ResponseFormat::Text,
        );

        let result = self.run_chain(&self.config.chat, &generation).await?;
        info!(
            candidate = %result.candidate,
            attempts = result.attempts.len(),
            latency_ms = result.latency_ms,
            "Chat response generated"
        );

        Ok(ChatResponse {
            response: result.text,
        })
    }

    /// Generate and parse a diet plan.
    ///
    /// A deadline hit is reported as exhaustion here; the client only ever
    /// sees a plan or a server error.
    pub async fn generate_diet(
        &self,
        identity: &CallerIdentity,
        request: DietRequest,
    ) -> Result<DietPlanResponse> {
        request.validate()?;
        self.check_ai_quota(identity)?;

        let metrics = BodyMetrics::calculate(&request);
        let generation = Self::generation_request(
            &self.config.diet,
            DIET_SYSTEM_CONTEXT.to_string(),
            build_diet_prompt(&request, &metrics),
            ResponseFormat::Json,
        );

        let result = self
            .run_chain(&self.config.diet, &generation)
            .await
            .map_err(|err| match err {
                ChainError::Timeout { .. } => GatewayError::providers_exhausted(err.summary()),
                other => GatewayError::from(other),
            })?;

        let plan = parse_diet_plan(&result.text).map_err(|err| {
            error!(
                candidate = %result.candidate,
                error = %err,
                reply = %Sanitization::for_log(&result.text, MAX_LOGGED_REPLY_CHARS),
                "Model returned an unusable diet plan"
            );
            GatewayError::from(err)
        })?;

        info!(
            candidate = %result.candidate,
            meals = plan.meal_plan.as_ref().map_or(0, Vec::len),
            latency_ms = result.latency_ms,
            "Diet plan generated"
        );
        Ok(plan)
    }

    /// Remaining AI quota for a caller; consumes nothing
    pub fn ai_status(&self, identity: &CallerIdentity) -> RateLimitStatus {
        let key = RateLimitScope::Ai.key(identity.ai_identifier());
        RateLimitStatus {
            ai: QuotaStatus::from(self.limiter.peek(&key, &self.ai_policy)),
        }
    }

    fn check_ai_quota(&self, identity: &CallerIdentity) -> Result<()> {
        let key = RateLimitScope::Ai.key(identity.ai_identifier());
        let decision = self.limiter.check(&key, &self.ai_policy);
        if !decision.allowed {
            return Err(GatewayError::rate_limited(decision.reset_in_seconds));
        }
        debug!(key = %key, remaining = decision.remaining, "AI quota consumed");
        Ok(())
    }

    async fn run_chain(
        &self,
        operation: &OperationConfig,
        request: &GenerationRequest,
    ) -> std::result::Result<ExecutionResult, ChainError> {
        let deadline = Instant::now() + operation.timeout();
        self.chain
            .generate(request, &operation.candidates, deadline)
            .await
    }

    fn generation_request(
        operation: &OperationConfig,
        system_context: String,
        prompt: String,
        format: ResponseFormat,
    ) -> GenerationRequest {
        GenerationRequest::new(prompt)
            .with_system_context(system_context)
            .with_response_format(format)
            .with_temperature(operation.temperature)
            .with_max_output_tokens(operation.max_output_tokens)
    }
}
