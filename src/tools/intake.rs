//! Intake resolution MCP tools
//!
//! Thin wrappers around the engine entry points with serializable
//! responses. No resolution logic lives here.

use serde::Serialize;

use crate::engine::{self, ReferenceStore, ResolveError};
use crate::models::{DailySummary, LoggedIntake, MealType};

/// Response for resolve_intake_text
#[derive(Debug, Serialize)]
pub struct ResolveTextResponse {
    /// False when no food was recognized; the caller should treat the
    /// message as ordinary conversation
    pub recognized: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entry: Option<LoggedIntake>,
}

/// Response for resolve_intake_selections
#[derive(Debug, Serialize)]
pub struct ResolveSelectionsResponse {
    pub entry: LoggedIntake,
    /// Number of keys the caller selected (before duplicate combination)
    pub items_selected: usize,
}

/// Resolve a free-text food description
pub fn resolve_text(store: &ReferenceStore, text: &str, meal_type: MealType) -> ResolveTextResponse {
    match engine::resolve_from_text(store, text) {
        Some(summary) => ResolveTextResponse {
            recognized: true,
            entry: Some(LoggedIntake { meal_type, summary }),
        },
        None => ResolveTextResponse {
            recognized: false,
            entry: None,
        },
    }
}

/// Resolve an explicit food-picker selection
pub fn resolve_selections(
    store: &ReferenceStore,
    keys: &[String],
    meal_type: MealType,
) -> Result<ResolveSelectionsResponse, ResolveError> {
    let summary = engine::resolve_from_selections(store, keys)?;
    Ok(ResolveSelectionsResponse {
        entry: LoggedIntake { meal_type, summary },
        items_selected: keys.len(),
    })
}

/// Compute daily totals over a day's logged entries
pub fn summarize_day(entries: &[LoggedIntake]) -> DailySummary {
    engine::summarize_day(entries)
}
