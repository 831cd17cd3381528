//! Nutrition summary builder
//!
//! The shared finalization step for both the text resolver and the
//! selection aggregator. This is the only place totals are summed,
//! rounded, and composed into display strings.

use crate::models::{FoodMatch, MacroTotals, NutritionSummary};

/// Round a non-negative total to the nearest whole unit
fn round_total(value: f64) -> u32 {
    value.max(0.0).round() as u32
}

/// Format a multiplier prefix: whole numbers without decimals
fn format_multiplier(multiplier: f64) -> String {
    if (multiplier - multiplier.round()).abs() < f64::EPSILON {
        format!("{}", multiplier.round() as i64)
    } else {
        format!("{multiplier}")
    }
}

/// Build the final summary from resolved matches
///
/// Per-field totals are Σ(fact.field × multiplier) across all matches,
/// rounded exactly once at the end — never per item, to avoid compounding
/// rounding error. Fiber appears only when the running fiber sum is
/// positive. An empty match set produces the defined degenerate summary
/// (all-zero totals, empty display strings) rather than panicking.
pub fn summarize(matches: &[FoodMatch<'_>]) -> NutritionSummary {
    let totals: MacroTotals = matches.iter().map(FoodMatch::totals).sum();

    let display_name = matches
        .iter()
        .map(|m| {
            if m.multiplier > 1.0 {
                format!("{} {}", format_multiplier(m.multiplier), m.fact.canonical_name)
            } else {
                m.fact.canonical_name.clone()
            }
        })
        .collect::<Vec<_>>()
        .join(" + ");

    let serving_description = match matches.len() {
        0 => String::new(),
        1 => matches[0].fact.serving_label.clone(),
        n => format!("{n} items"),
    };

    NutritionSummary {
        display_name,
        calories: round_total(totals.calories),
        protein: round_total(totals.protein),
        carbs: round_total(totals.carbs),
        fat: round_total(totals.fat),
        fiber: (totals.fiber > 0.0).then(|| round_total(totals.fiber)),
        serving_description,
    }
}
