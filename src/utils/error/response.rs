//! HTTP response handling for errors

use super::types::GatewayError;
use actix_web::http::StatusCode;
use actix_web::http::header::RETRY_AFTER;
use actix_web::{HttpResponse, ResponseError};
use serde::Serialize;

const OVERLOADED_MESSAGE: &str =
    "Our AI systems are currently overloaded. Please try again in a few minutes.";
const TIMEOUT_MESSAGE: &str = "The AI took too long to respond. Please try again.";
const GENERIC_MESSAGE: &str = "An internal error occurred";

/// Standard error body: `{"error": "...", "code": "..."}`
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}

impl GatewayError {
    fn parts(&self) -> (StatusCode, &'static str, String) {
        match self {
            GatewayError::Validation(message) => (
                StatusCode::BAD_REQUEST,
                "VALIDATION_ERROR",
                message.clone(),
            ),
            GatewayError::RateLimited { message, .. } => (
                StatusCode::TOO_MANY_REQUESTS,
                "RATE_LIMIT_EXCEEDED",
                message.clone(),
            ),
            GatewayError::ProvidersExhausted(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "PROVIDERS_EXHAUSTED",
                OVERLOADED_MESSAGE.to_string(),
            ),
            GatewayError::Timeout(_) => (
                StatusCode::REQUEST_TIMEOUT,
                "TIMEOUT",
                TIMEOUT_MESSAGE.to_string(),
            ),
            GatewayError::MalformedAiResponse(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "MALFORMED_AI_RESPONSE",
                "Failed to generate a valid plan. Please try again.".to_string(),
            ),
            GatewayError::Unauthorized(_) | GatewayError::Jwt(_) => (
                StatusCode::UNAUTHORIZED,
                "UNAUTHORIZED",
                "Unauthorized".to_string(),
            ),
            GatewayError::Config(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "CONFIG_ERROR",
                GENERIC_MESSAGE.to_string(),
            ),
            _ => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                GENERIC_MESSAGE.to_string(),
            ),
        }
    }

    /// Body that would be rendered for this error
    pub fn to_response_body(&self) -> ErrorResponse {
        let (_, code, error) = self.parts();
        ErrorResponse {
            error,
            code: code.to_string(),
        }
    }
}

impl ResponseError for GatewayError {
    fn status_code(&self) -> StatusCode {
        self.parts().0
    }

    fn error_response(&self) -> HttpResponse {
        let mut builder = HttpResponse::build(self.status_code());
        if let Some(seconds) = self.retry_after() {
            builder.insert_header((RETRY_AFTER, seconds.to_string()));
        }
        builder.json(self.to_response_body())
    }
}
