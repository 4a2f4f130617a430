//! Field validation helpers shared by request payloads

use crate::utils::error::{GatewayError, Result};
use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_REGEX: Lazy<Option<Regex>> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").ok());

/// Payload field validation
pub struct DataValidator;

impl DataValidator {
    /// Reject empty or whitespace-only text
    pub fn validate_required(field: &str, value: &str) -> Result<()> {
        if value.trim().is_empty() {
            return Err(GatewayError::validation(format!("{} is required", field)));
        }
        Ok(())
    }

    /// Character-count bounds on trimmed text
    pub fn validate_length(field: &str, value: &str, min: usize, max: usize) -> Result<()> {
        let length = value.trim().chars().count();

        if length < min {
            return Err(GatewayError::validation(format!(
                "{} must be at least {} characters",
                field, min
            )));
        }

        if length > max {
            return Err(GatewayError::validation(format!(
                "{} cannot exceed {} characters",
                field, max
            )));
        }

        Ok(())
    }

    /// Inclusive numeric bounds; NaN and infinities are rejected
    pub fn validate_range(field: &str, value: f64, min: f64, max: f64) -> Result<()> {
        if !value.is_finite() || value < min || value > max {
            return Err(GatewayError::validation(format!(
                "{} must be between {} and {}",
                field, min, max
            )));
        }
        Ok(())
    }

    /// Validate a phone number and return its digits.
    ///
    /// Spaces, dashes, dots, parentheses and a leading `+` are accepted as
    /// separators; 10 to 15 digits must remain.
    pub fn validate_phone(phone: &str) -> Result<String> {
        let trimmed = phone.trim();
        let allowed = |c: char| c.is_ascii_digit() || " -.()+".contains(c);

        if trimmed.is_empty() || !trimmed.chars().all(allowed) {
            return Err(GatewayError::validation("Invalid phone number"));
        }

        let digits: String = trimmed.chars().filter(|c| c.is_ascii_digit()).collect();
        if !(10..=15).contains(&digits.len()) {
            return Err(GatewayError::validation(
                "Phone number must contain 10 to 15 digits",
            ));
        }

        Ok(digits)
    }

    /// Validate email format
    pub fn validate_email(email: &str) -> Result<()> {
        let regex = EMAIL_REGEX
            .as_ref()
            .ok_or_else(|| GatewayError::internal("Email pattern failed to compile"))?;

        if email.len() > 254 || !regex.is_match(email.trim()) {
            return Err(GatewayError::validation("Invalid email address"));
        }
        Ok(())
    }
}
