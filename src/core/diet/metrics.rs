//! Body metrics used to anchor the generated plan

use serde::Serialize;

use super::request::{DietRequest, Gender};

/// Minimum daily intake the plan is allowed to target
const CALORIE_FLOOR: f64 = 1200.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BodyMetrics {
    pub bmi: f64,
    /// Basal metabolic rate (Mifflin-St Jeor), kcal/day
    pub bmr: f64,
    /// Total daily energy expenditure, kcal/day
    pub tdee: f64,
    pub target_calories: f64,
}

impl BodyMetrics {
    pub fn calculate(request: &DietRequest) -> Self {
        let bmr = bmr(request.current_weight, request.height, request.age, request.gender);
        let tdee = bmr * request.activity_level.factor();
        let target_calories = (tdee + request.goal.calorie_adjustment()).max(CALORIE_FLOOR);

        Self {
            bmi: bmi(request.current_weight, request.height),
            bmr: bmr.round(),
            tdee: tdee.round(),
            target_calories: target_calories.round(),
        }
    }
}

pub fn bmi(weight_kg: f64, height_cm: f64) -> f64 {
    let height_m = height_cm / 100.0;
    let value = weight_kg / (height_m * height_m);
    (value * 10.0).round() / 10.0
}

pub fn bmr(weight_kg: f64, height_cm: f64, age: f64, gender: Gender) -> f64 {
    let base = 10.0 * weight_kg + 6.25 * height_cm - 5.0 * age;
    match gender {
        Gender::Male => base + 5.0,
        Gender::Female => base - 161.0,
        Gender::Other => base - 78.0,
    }
}
