//! Attempt outcomes and execution result types

use std::fmt;

use crate::config::ProviderCandidate;

/// Outcome of calling one candidate
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttemptOutcome {
    Success(String),
    /// Throttling, overload or transport trouble
    RetryableFailure(String),
    /// Anything else: bad key, unknown model, unknown provider, filtered output
    FatalFailure(String),
}

impl AttemptOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, AttemptOutcome::Success(_))
    }

    /// Sanitized failure reason
    pub fn reason(&self) -> Option<&str> {
        match self {
            AttemptOutcome::Success(_) => None,
            AttemptOutcome::RetryableFailure(reason) | AttemptOutcome::FatalFailure(reason) => {
                Some(reason)
            }
        }
    }
}

/// One candidate attempt within a chain run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainAttemptResult {
    pub candidate: ProviderCandidate,
    pub outcome: AttemptOutcome,
    pub latency_ms: u64,
}

impl fmt::Display for ChainAttemptResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.outcome {
            AttemptOutcome::Success(_) => write!(f, "{}: ok", self.candidate),
            AttemptOutcome::RetryableFailure(reason) => {
                write!(f, "{}: retryable: {}", self.candidate, reason)
            }
            AttemptOutcome::FatalFailure(reason) => {
                write!(f, "{}: fatal: {}", self.candidate, reason)
            }
        }
    }
}

/// Successful chain run
///
/// `attempts` holds every attempt in order, the successful one last.
#[derive(Debug, Clone)]
pub struct ExecutionResult {
    pub text: String,
    /// Candidate that produced `text`
    pub candidate: ProviderCandidate,
    pub attempts: Vec<ChainAttemptResult>,
    /// Whether an earlier candidate failed first
    pub used_fallback: bool,
    /// Whole-chain latency in milliseconds
    pub latency_ms: u64,
}
