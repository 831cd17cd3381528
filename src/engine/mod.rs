//! Resolution engine
//!
//! Pure functions from (reference data, input) to nutrition summaries.
//! No I/O, no shared mutable state beyond the read-only reference store;
//! safe for concurrent use without coordination.

pub mod aggregator;
pub mod daily;
pub mod quantity;
pub mod resolver;
pub mod store;
pub mod summary;
mod table;

use thiserror::Error;

use crate::models::NutritionSummary;

pub use daily::summarize_day;
pub use store::{ReferenceStore, ReferenceStoreBuilder};

/// Errors from structured selection resolution
///
/// Free-text resolution never errors; a structured selection implies
/// caller-guaranteed validity, so violations fail fast here.
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("unknown reference key: {0}")]
    UnknownKey(String),

    #[error("empty selection")]
    EmptySelection,
}

/// Resolve a free-text food description into a nutrition summary
///
/// Returns `None` when no food is recognized; callers treat the text as
/// ordinary conversation in that case.
pub fn resolve_from_text(store: &ReferenceStore, text: &str) -> Option<NutritionSummary> {
    let matches = resolver::resolve(store, text);
    if matches.is_empty() {
        return None;
    }
    Some(summary::summarize(&matches))
}

/// Resolve an explicit picker selection into a nutrition summary
///
/// Every key must exist in the reference store and the selection must be
/// non-empty; both violations are the caller's bug and are rejected
/// rather than silently skipped.
pub fn resolve_from_selections<S: AsRef<str>>(
    store: &ReferenceStore,
    keys: &[S],
) -> Result<NutritionSummary, ResolveError> {
    if keys.is_empty() {
        return Err(ResolveError::EmptySelection);
    }
    let mut facts = Vec::with_capacity(keys.len());
    for key in keys {
        let key = key.as_ref();
        let fact = store
            .lookup(key)
            .ok_or_else(|| ResolveError::UnknownKey(key.to_string()))?;
        facts.push(fact);
    }
    let matches = aggregator::aggregate(&facts);
    Ok(summary::summarize(&matches))
}
