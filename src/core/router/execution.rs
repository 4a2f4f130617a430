//! Execution helpers for the provider chain

use crate::core::providers::unified_provider::ProviderError;
use crate::utils::logging::Sanitization;

use super::fallback::{AttemptOutcome, ChainAttemptResult, ExecutionResult};
use crate::config::ProviderCandidate;

/// Classify a provider error into an attempt outcome with a log-safe reason
pub fn classify_failure(error: &ProviderError) -> AttemptOutcome {
    let reason = Sanitization::sanitize_log_data(&error.to_string());
    if error.is_retryable() {
        AttemptOutcome::RetryableFailure(reason)
    } else {
        AttemptOutcome::FatalFailure(reason)
    }
}

/// Outcome for a candidate whose provider is not registered
pub fn unknown_provider(candidate: &ProviderCandidate) -> AttemptOutcome {
    AttemptOutcome::FatalFailure(format!(
        "Provider '{}' is not configured",
        candidate.provider
    ))
}

/// Build execution result from the successful attempt
pub fn build_execution_result(
    text: String,
    candidate: ProviderCandidate,
    mut attempts: Vec<ChainAttemptResult>,
    attempt_latency_ms: u64,
    latency_ms: u64,
) -> ExecutionResult {
    let used_fallback = !attempts.is_empty();
    attempts.push(ChainAttemptResult {
        candidate: candidate.clone(),
        outcome: AttemptOutcome::Success(text.clone()),
        latency_ms: attempt_latency_ms,
    });

    ExecutionResult {
        text,
        candidate,
        attempts,
        used_fallback,
        latency_ms,
    }
}
