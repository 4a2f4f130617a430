//! Diet plan prompt

use super::metrics::BodyMetrics;
use super::request::{DietRequest, DietType, Goal};
use crate::core::types::Language;

pub const DIET_SYSTEM_CONTEXT: &str = "You are the head nutrition coach at Brother's Fitness, a gym in India. \
You design practical, affordable Indian meal plans. \
Reply with a single JSON object and nothing else: no markdown, no commentary.";

/// Shape the model must fill in
const RESPONSE_SCHEMA: &str = r#"{
  "tacticalBrief": {"en": string, "hi": string},
  "transformationTimeline": {"duration": string, "weeklyChange": string, "dailyCalories": number},
  "shoppingList": {
    "totalCost": number,
    "items": [{"name": {"en": string, "hi": string}, "category": string, "quantity": string, "price": number}]
  },
  "mealPlan": [
    {"name": {"en": string, "hi": string}, "time": string, "items": [string],
     "calories": number, "protein": number, "carbs": number, "fats": number}
  ]
}"#;

fn goal_label(goal: Goal) -> &'static str {
    match goal {
        Goal::WeightLoss => "weight loss",
        Goal::MuscleGain => "muscle gain",
        Goal::Maintenance => "maintenance",
        Goal::Recomposition => "body recomposition",
    }
}

fn diet_label(diet_type: DietType) -> &'static str {
    match diet_type {
        DietType::Vegetarian => "vegetarian (no meat, fish or eggs)",
        DietType::NonVegetarian => "non-vegetarian",
        DietType::Eggetarian => "vegetarian plus eggs",
        DietType::Vegan => "vegan (no animal products)",
        DietType::Keto => "ketogenic (under 30g net carbs a day)",
    }
}

/// User prompt for one plan
pub fn build_diet_prompt(request: &DietRequest, metrics: &BodyMetrics) -> String {
    let primary = match request.language {
        Language::En => "English",
        Language::Hi => "Hindi",
    };

    format!(
        "Create a one-day meal plan and weekly shopping list.\n\
         \n\
         Client profile:\n\
         - Current weight: {current} kg\n\
         - Target weight: {target} kg\n\
         - Height: {height} cm\n\
         - Age: {age}\n\
         - Gender: {gender:?}\n\
         - Activity level: {activity:?}\n\
         - Diet: {diet}\n\
         - Goal: {goal}\n\
         - Monthly food budget: Rs {budget}\n\
         \n\
         Calculated: BMI {bmi}, BMR {bmr} kcal, TDEE {tdee} kcal. \
         Target about {calories} kcal per day.\n\
         \n\
         Rules:\n\
         - Use foods commonly available in Indian markets and keep the shopping list within budget.\n\
         - Every text field shown as {{\"en\", \"hi\"}} must have both English and Hindi (Devanagari).\n\
         - {primary} is the client's preferred language for the tactical brief.\n\
         - Numbers must be plain JSON numbers without units.\n\
         \n\
         Return JSON exactly in this shape:\n{schema}",
        current = request.current_weight,
        target = request.target_weight,
        height = request.height,
        age = request.age,
        gender = request.gender,
        activity = request.activity_level,
        diet = diet_label(request.diet_type),
        goal = goal_label(request.goal),
        budget = request.budget,
        bmi = metrics.bmi,
        bmr = metrics.bmr,
        tdee = metrics.tdee,
        calories = metrics.target_calories,
        primary = primary,
        schema = RESPONSE_SCHEMA,
    )
}
