//! Nutrition summary model
//!
//! The engine's sole output: rounded, display-ready nutrition totals.

use serde::{Deserialize, Serialize};

/// Normalized nutrition summary for display and logging
///
/// All totals are rounded exactly once, by the summary builder. Fiber is
/// present only when at least one contributing item had fiber data with a
/// positive running sum; "no fiber data" and "zero fiber" look identical
/// to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NutritionSummary {
    /// Canonical names of all matched items joined with " + ", with a
    /// multiplier prefix when greater than one (e.g. "2 Egg + Banana")
    pub display_name: String,
    pub calories: u32,
    pub protein: u32, // grams
    pub carbs: u32,   // grams
    pub fat: u32,     // grams
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fiber: Option<u32>, // grams
    /// The single item's serving label, or "N items" for multiple
    pub serving_description: String,
}
