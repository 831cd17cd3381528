//! Nutrition fact model
//!
//! Per-serving nutrition data for one canonical food.

use serde::{Deserialize, Serialize};

use super::MacroTotals;

/// Per-serving nutrition data for one canonical food
///
/// `fiber` is optional: absent means "no fiber data", which is distinct
/// from zero for display purposes but counts as zero when summing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NutritionFact {
    /// Display name, e.g. "Banana"
    pub canonical_name: String,
    /// kcal per serving
    pub calories: f64,
    pub protein: f64, // grams
    pub carbs: f64,   // grams
    pub fat: f64,     // grams
    pub fiber: Option<f64>, // grams
    /// Free-text serving description, e.g. "1 medium (118g)"
    pub serving_label: String,
}

impl NutritionFact {
    /// Create a fact without fiber data
    pub fn new(
        canonical_name: &str,
        calories: f64,
        protein: f64,
        carbs: f64,
        fat: f64,
        serving_label: &str,
    ) -> Self {
        Self {
            canonical_name: canonical_name.to_string(),
            calories,
            protein,
            carbs,
            fat,
            fiber: None,
            serving_label: serving_label.to_string(),
        }
    }

    /// Attach fiber data to this fact
    pub fn with_fiber(mut self, fiber: f64) -> Self {
        self.fiber = Some(fiber);
        self
    }

    /// Totals contributed by one serving of this food
    pub fn totals(&self) -> MacroTotals {
        MacroTotals {
            calories: self.calories,
            protein: self.protein,
            carbs: self.carbs,
            fat: self.fat,
            fiber: self.fiber.unwrap_or(0.0),
        }
    }
}
