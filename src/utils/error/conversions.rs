//! Type conversions for GatewayError

use super::types::GatewayError;
use crate::core::diet::DietParseError;
use crate::core::router::ChainError;

impl From<ChainError> for GatewayError {
    fn from(err: ChainError) -> Self {
        match err {
            ChainError::AllProvidersExhausted { .. } => {
                GatewayError::ProvidersExhausted(err.summary())
            }
            ChainError::Timeout { .. } => GatewayError::Timeout(err.summary()),
        }
    }
}

impl From<DietParseError> for GatewayError {
    fn from(err: DietParseError) -> Self {
        GatewayError::MalformedAiResponse(err.to_string())
    }
}
