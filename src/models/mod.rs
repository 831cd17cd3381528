//! Data models
//!
//! Rust structs shared by the resolution engine and the tool layer.

mod fact;
mod food_match;
mod meal;
mod summary;
mod totals;

pub use fact::NutritionFact;
pub use food_match::FoodMatch;
pub use meal::{DailySummary, LoggedIntake, MealType, MealTypeTotals};
pub use summary::NutritionSummary;
pub use totals::MacroTotals;
