//! Diet plan document
//!
//! Model output is only loosely trusted: every field is optional, numbers may
//! arrive as strings with units or currency symbols, and unknown fields are
//! kept as-is so the client sees everything the model produced.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

static NUMBER_RE: Lazy<Option<Regex>> =
    Lazy::new(|| Regex::new(r"-?\d[\d,]*(?:\.\d+)?").ok());

/// Text that is either bilingual or a single plain string
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum LocalizedText {
    Plain(String),
    Bilingual {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        en: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        hi: Option<String>,
    },
}

impl LocalizedText {
    /// English text, falling back to Hindi
    pub fn english(&self) -> Option<&str> {
        match self {
            LocalizedText::Plain(text) => Some(text),
            LocalizedText::Bilingual { en, hi } => en.as_deref().or(hi.as_deref()),
        }
    }
}

impl<'de> Deserialize<'de> for LocalizedText {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Value::deserialize(deserializer)? {
            Value::Object(fields) => Ok(LocalizedText::Bilingual {
                en: fields.get("en").and_then(scalar_text),
                hi: fields.get("hi").and_then(scalar_text),
            }),
            other => scalar_text(&other)
                .map(LocalizedText::Plain)
                .ok_or_else(|| D::Error::custom("expected text or an {en, hi} object")),
        }
    }
}

/// Full generated plan
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DietPlanResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tactical_brief: Option<LocalizedText>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transformation_timeline: Option<TransformationTimeline>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shopping_list: Option<ShoppingList>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meal_plan: Option<Vec<Meal>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransformationTimeline {
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub weekly_change: Option<String>,
    #[serde(default, deserialize_with = "lenient_number", skip_serializing_if = "Option::is_none")]
    pub daily_calories: Option<f64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShoppingList {
    #[serde(default, deserialize_with = "lenient_number", skip_serializing_if = "Option::is_none")]
    pub total_cost: Option<f64>,
    #[serde(default, deserialize_with = "lenient_vec")]
    pub items: Vec<ShoppingItem>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShoppingItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<LocalizedText>,
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub quantity: Option<String>,
    #[serde(default, deserialize_with = "lenient_number", skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meal {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<LocalizedText>,
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    /// Food entries; shape varies between models
    #[serde(default, deserialize_with = "lenient_vec")]
    pub items: Vec<Value>,
    #[serde(default, deserialize_with = "lenient_number", skip_serializing_if = "Option::is_none")]
    pub calories: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number", skip_serializing_if = "Option::is_none")]
    pub protein: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number", skip_serializing_if = "Option::is_none")]
    pub carbs: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number", skip_serializing_if = "Option::is_none")]
    pub fats: Option<f64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// First number in a JSON value: `"₹1,250"` is 1250, `"30g"` is 30
pub fn number_from_value(value: &Value) -> Option<f64> {
    match value {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => NUMBER_RE
            .as_ref()?
            .find(text)
            .and_then(|m| m.as_str().replace(',', "").parse().ok()),
        _ => None,
    }
}

/// Strings as-is, numbers and booleans in their JSON spelling
fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        _ => None,
    }
}

fn lenient_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(number_from_value))
}

fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(scalar_text))
}

/// `null` or a non-array becomes empty; entries of the wrong shape are dropped
fn lenient_vec<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Array(entries)) => entries
            .into_iter()
            .filter_map(|entry| serde_json::from_value(entry).ok())
            .collect(),
        _ => Vec::new(),
    })
}
