//! Logged intake and daily summaries
//!
//! The verbatim-storable entry shape an external persistence collaborator
//! keeps, plus the result types for pure daily aggregation.

use serde::{Deserialize, Serialize};

use super::NutritionSummary;

/// Meal type tag for a logged entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
    #[default]
    Snack,
}

impl MealType {
    /// All meal types in declaration order
    pub const ALL: [MealType; 4] = [
        MealType::Breakfast,
        MealType::Lunch,
        MealType::Dinner,
        MealType::Snack,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MealType::Breakfast => "breakfast",
            MealType::Lunch => "lunch",
            MealType::Dinner => "dinner",
            MealType::Snack => "snack",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "breakfast" => MealType::Breakfast,
            "lunch" => MealType::Lunch,
            "dinner" => MealType::Dinner,
            _ => MealType::Snack,
        }
    }
}

/// A logged entry: one resolved summary tagged with a meal type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggedIntake {
    pub meal_type: MealType,
    #[serde(flatten)]
    pub summary: NutritionSummary,
}

/// Totals for one meal type within a day
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MealTypeTotals {
    pub meal_type: MealType,
    pub entries: usize,
    pub calories: u32,
    pub protein: u32, // grams
    pub carbs: u32,   // grams
    pub fat: u32,     // grams
}

/// Daily nutrition totals across logged entries
///
/// Entries arrive already rounded, so daily totals are plain integer
/// sums; no re-rounding occurs here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailySummary {
    pub calories: u32,
    pub protein: u32, // grams
    pub carbs: u32,   // grams
    pub fat: u32,     // grams
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fiber: Option<u32>, // grams
    pub entry_count: usize,
    /// Meal types with at least one entry, in declaration order
    pub by_meal_type: Vec<MealTypeTotals>,
}
