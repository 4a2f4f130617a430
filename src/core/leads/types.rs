use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::utils::error::Result;
use crate::utils::validation::DataValidator;

/// Contact form payload
#[derive(Debug, Clone, Deserialize)]
pub struct LeadSubmission {
    pub name: String,
    pub phone: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub interest: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Stored lead
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Lead {
    pub id: Uuid,
    pub name: String,
    /// Digits only
    pub phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interest: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub created_at: DateTime<Utc>,
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

impl LeadSubmission {
    /// Validate and normalize into a new lead
    pub fn into_lead(self) -> Result<Lead> {
        DataValidator::validate_required("name", &self.name)?;
        DataValidator::validate_length("name", &self.name, 2, 100)?;
        let phone = DataValidator::validate_phone(&self.phone)?;

        let email = non_empty(self.email);
        if let Some(email) = &email {
            DataValidator::validate_email(email)?;
        }

        let interest = non_empty(self.interest);
        if let Some(interest) = &interest {
            DataValidator::validate_length("interest", interest, 1, 100)?;
        }

        let message = non_empty(self.message);
        if let Some(message) = &message {
            DataValidator::validate_length("message", message, 1, 1000)?;
        }

        Ok(Lead {
            id: Uuid::new_v4(),
            name: self.name.trim().to_string(),
            phone,
            email,
            interest,
            message,
            created_at: Utc::now(),
        })
    }
}
