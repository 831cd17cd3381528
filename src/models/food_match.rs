//! Resolved food match
//!
//! A transient (food, quantity) pair produced by the text resolver or the
//! selection aggregator and consumed by the summary builder.

use super::{MacroTotals, NutritionFact};

/// One recognized food with its resolved serving multiplier
///
/// The fact is borrowed from the reference store, never copied. Zero
/// multipliers are discarded before a match is emitted.
#[derive(Debug, Clone, Copy)]
pub struct FoodMatch<'a> {
    pub fact: &'a NutritionFact,
    /// Number of servings (integer or decimal, never negative)
    pub multiplier: f64,
}

impl FoodMatch<'_> {
    /// Totals contributed by this match
    pub fn totals(&self) -> MacroTotals {
        self.fact.totals() * self.multiplier
    }
}
