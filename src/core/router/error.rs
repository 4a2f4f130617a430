//! Chain error types

use super::fallback::ChainAttemptResult;
use crate::config::ProviderCandidate;

/// Why a chain produced no text
#[derive(Debug, Clone, thiserror::Error)]
pub enum ChainError {
    /// Every candidate was tried and failed
    #[error("All {} provider candidates failed", .attempts.len())]
    AllProvidersExhausted { attempts: Vec<ChainAttemptResult> },

    /// The operation deadline passed. `candidate` is the one in flight, if any.
    #[error("Provider chain timed out after {} attempts", .attempts.len())]
    Timeout {
        candidate: Option<ProviderCandidate>,
        attempts: Vec<ChainAttemptResult>,
    },
}

impl ChainError {
    pub fn attempts(&self) -> &[ChainAttemptResult] {
        match self {
            ChainError::AllProvidersExhausted { attempts } | ChainError::Timeout { attempts, .. } => {
                attempts
            }
        }
    }

    /// One line per failed candidate, for logs
    pub fn summary(&self) -> String {
        let mut parts: Vec<String> = self.attempts().iter().map(ToString::to_string).collect();
        if let ChainError::Timeout {
            candidate: Some(candidate),
            ..
        } = self
        {
            parts.push(format!("{}: deadline exceeded", candidate));
        }

        if parts.is_empty() {
            self.to_string()
        } else {
            format!("{} ({})", self, parts.join("; "))
        }
    }
}
