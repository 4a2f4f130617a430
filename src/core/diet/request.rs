//! Diet generation input

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::types::number_from_value;
use crate::core::types::Language;
use crate::utils::validation::DataValidator;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    Sedentary,
    Light,
    Moderate,
    Active,
    #[serde(alias = "veryActive", alias = "very-active")]
    VeryActive,
}

impl ActivityLevel {
    /// Multiplier from BMR to daily energy expenditure
    pub fn factor(&self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::Light => 1.375,
            ActivityLevel::Moderate => 1.55,
            ActivityLevel::Active => 1.725,
            ActivityLevel::VeryActive => 1.9,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DietType {
    Vegetarian,
    #[serde(alias = "nonVegetarian", alias = "non-vegetarian", alias = "nonveg")]
    NonVegetarian,
    Eggetarian,
    Vegan,
    Keto,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Goal {
    #[serde(alias = "weightLoss", alias = "weight-loss", alias = "fat_loss")]
    WeightLoss,
    #[serde(alias = "muscleGain", alias = "muscle-gain")]
    MuscleGain,
    Maintenance,
    Recomposition,
}

impl Goal {
    /// Daily calorie offset from maintenance
    pub fn calorie_adjustment(&self) -> f64 {
        match self {
            Goal::WeightLoss => -500.0,
            Goal::MuscleGain => 300.0,
            Goal::Maintenance => 0.0,
            Goal::Recomposition => -200.0,
        }
    }
}

/// Biometric and preference payload from the diet form.
///
/// Weights are kilograms, height centimetres, budget rupees per month.
/// Form fields often arrive as strings, so numbers accept either.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DietRequest {
    #[serde(deserialize_with = "number_or_string")]
    pub current_weight: f64,
    #[serde(deserialize_with = "number_or_string")]
    pub target_weight: f64,
    #[serde(deserialize_with = "number_or_string")]
    pub height: f64,
    #[serde(deserialize_with = "number_or_string")]
    pub age: f64,
    pub gender: Gender,
    pub activity_level: ActivityLevel,
    pub diet_type: DietType,
    #[serde(deserialize_with = "number_or_string")]
    pub budget: f64,
    pub goal: Goal,
    #[serde(default)]
    pub language: Language,
}

impl DietRequest {
    pub fn validate(&self) -> crate::utils::error::Result<()> {
        DataValidator::validate_range("currentWeight", self.current_weight, 20.0, 300.0)?;
        DataValidator::validate_range("targetWeight", self.target_weight, 20.0, 300.0)?;
        DataValidator::validate_range("height", self.height, 100.0, 250.0)?;
        DataValidator::validate_range("age", self.age, 13.0, 100.0)?;
        DataValidator::validate_range("budget", self.budget, 500.0, 1_000_000.0)?;
        Ok(())
    }
}

fn number_or_string<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    number_from_value(&value)
        .ok_or_else(|| serde::de::Error::custom(format!("expected a number, got {}", value)))
}
