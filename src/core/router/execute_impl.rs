//! Execution loop for the provider chain

use std::time::Instant;

use tokio::time::{Instant as Deadline, timeout_at};
use tracing::{debug, error, info, warn};

use crate::config::ProviderCandidate;
use crate::core::types::GenerationRequest;

use super::chain::ProviderChain;
use super::error::ChainError;
use super::execution::{build_execution_result, classify_failure, unknown_provider};
use super::fallback::{ChainAttemptResult, ExecutionResult};

impl ProviderChain {
    /// Try `candidates` in order until one returns text.
    ///
    /// Attempts run one at a time. `deadline` bounds the whole run: once it
    /// passes, the in-flight call is dropped and `ChainError::Timeout` is
    /// returned, so a late success is never delivered.
    pub async fn generate(
        &self,
        request: &GenerationRequest,
        candidates: &[ProviderCandidate],
        deadline: Deadline,
    ) -> Result<ExecutionResult, ChainError> {
        let start = Instant::now();
        let mut attempts: Vec<ChainAttemptResult> = Vec::with_capacity(candidates.len());

        for candidate in candidates {
            if Deadline::now() >= deadline {
                error!(attempts = attempts.len(), "Provider chain deadline passed");
                return Err(ChainError::Timeout {
                    candidate: None,
                    attempts,
                });
            }

            let attempt_start = Instant::now();

            let Some(provider) = self.registry.get(&candidate.provider) else {
                let outcome = unknown_provider(candidate);
                warn!(candidate = %candidate, "Skipping candidate with unknown provider");
                attempts.push(ChainAttemptResult {
                    candidate: candidate.clone(),
                    outcome,
                    latency_ms: 0,
                });
                continue;
            };

            debug!(candidate = %candidate, "Calling provider");

            match timeout_at(deadline, provider.generate(&candidate.model, request)).await {
                Ok(Ok(text)) => {
                    let attempt_latency_ms = attempt_start.elapsed().as_millis() as u64;
                    if !attempts.is_empty() {
                        info!(
                            candidate = %candidate,
                            failed_before = attempts.len(),
                            "Fallback candidate succeeded"
                        );
                    }
                    return Ok(build_execution_result(
                        text,
                        candidate.clone(),
                        attempts,
                        attempt_latency_ms,
                        start.elapsed().as_millis() as u64,
                    ));
                }
                Ok(Err(err)) => {
                    let outcome = classify_failure(&err);
                    warn!(
                        candidate = %candidate,
                        retryable = err.is_retryable(),
                        reason = outcome.reason().unwrap_or_default(),
                        "Provider candidate failed"
                    );
                    attempts.push(ChainAttemptResult {
                        candidate: candidate.clone(),
                        outcome,
                        latency_ms: attempt_start.elapsed().as_millis() as u64,
                    });
                }
                Err(_) => {
                    error!(
                        candidate = %candidate,
                        attempts = attempts.len(),
                        "Provider chain timed out"
                    );
                    return Err(ChainError::Timeout {
                        candidate: Some(candidate.clone()),
                        attempts,
                    });
                }
            }
        }

        let err = ChainError::AllProvidersExhausted { attempts };
        error!(summary = %err.summary(), "All provider candidates exhausted");
        Err(err)
    }
}
