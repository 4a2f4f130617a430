//! Test fixtures and data factories

use brofit_gateway::core::diet::DietRequest;
use serde_json::{Value, json};

/// Factory for diet-plan requests
pub struct DietRequestFactory;

impl DietRequestFactory {
    /// Request body as the website sends it
    pub fn json() -> Value {
        json!({
            "currentWeight": 82,
            "targetWeight": 75,
            "height": 175,
            "age": 29,
            "gender": "male",
            "activityLevel": "moderate",
            "dietType": "vegetarian",
            "budget": 6000,
            "goal": "weight_loss",
            "language": "en"
        })
    }

    /// Same request in Hindi, with numbers sent as strings
    pub fn hindi_with_string_numbers() -> Value {
        json!({
            "currentWeight": "68",
            "targetWeight": "72",
            "height": "170",
            "age": "24",
            "gender": "female",
            "activityLevel": "active",
            "dietType": "non_vegetarian",
            "budget": "4500",
            "goal": "muscle_gain",
            "language": "hi"
        })
    }

    pub fn create() -> DietRequest {
        serde_json::from_value(Self::json()).unwrap()
    }
}

/// A plan shaped like what the models return for the diet prompt
pub fn diet_plan_json() -> Value {
    json!({
        "tacticalBrief": "Hold a 500 kcal deficit and keep protein high.",
        "transformationTimeline": {
            "duration": "10 weeks",
            "weeklyChange": "-0.7 kg",
            "dailyCalories": "2,259 kcal"
        },
        "shoppingList": {
            "totalCost": "₹5,800",
            "items": [
                {"name": "Paneer", "category": "Protein", "quantity": "1 kg", "price": "₹450"},
                {"name": "Oats", "category": "Grains", "quantity": "2 kg", "price": 380}
            ]
        },
        "mealPlan": [
            {
                "name": "Breakfast",
                "time": "8:00 AM",
                "items": ["Oats with milk", {"name": "Banana", "quantity": "1"}],
                "calories": 520,
                "protein": "28g",
                "carbs": "70g",
                "fats": "12g"
            }
        ]
    })
}
