//! Diet plan generation: request model, calorie math, prompt and the
//! lenient response document.

pub mod metrics;
pub mod parser;
pub mod prompt;
pub mod request;
pub mod types;

pub use metrics::BodyMetrics;
pub use parser::{DietParseError, parse_diet_plan, strip_code_fences};
pub use request::{ActivityLevel, DietRequest, DietType, Gender, Goal};
pub use types::{DietPlanResponse, LocalizedText, Meal, ShoppingItem, ShoppingList, TransformationTimeline};
