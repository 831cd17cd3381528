//! Service status tool
//!
//! Provides runtime status information about the intake service.

use serde::Serialize;
use std::time::Instant;
use sysinfo::{Pid, ProcessesToUpdate, System};

use crate::build_info::BuildInfo;

/// Food logging instructions for AI assistants
pub const LOGGING_INSTRUCTIONS: &str = r#"
# Intake Logging Instructions

This guide explains how to resolve and log food intake using the intake
resolution tools.

## Two ways to resolve intake

1. **Free text** - `resolve_intake_text`
   - Pass the user's message as-is, e.g. "2 eggs and a banana".
   - Counts written before a food apply to that food only ("3 bananas
     and apple" = 3 bananas, 1 apple).
   - If `recognized` is false, the message mentioned no known food.
     Treat it as ordinary conversation - do NOT log anything.

2. **Explicit selection** - `resolve_intake_selections`
   - Pass reference keywords the user picked, e.g. ["banana", "oatmeal"].
   - Every key must exist in the reference table; use
     `search_reference_foods` or `list_reference_foods` first if unsure.
   - Selecting the same food twice yields one line item at 2 servings.

## Meal types

Both resolve tools accept an optional `meal_type`: breakfast, lunch,
dinner, or snack. Unknown or missing values default to snack.

## Daily totals

`summarize_day` sums a day's logged entries and groups them by meal
type. Pass back the entries previously returned by the resolve tools.

## Notes

- Resolved summaries are display-ready: totals are already rounded.
- A fiber field is present only when some item contributed fiber.
- The reference table is fixed at startup; foods cannot be added at
  runtime.
"#;

/// Runtime status of the intake service
#[derive(Debug, Clone, Serialize)]
pub struct IntakeStatus {
    /// Build information
    pub build_number: u64,
    pub build_timestamp: &'static str,
    pub version: &'static str,

    /// Reference table information
    pub reference_foods: usize,
    pub reference_keywords: usize,

    /// Process information
    pub uptime_seconds: u64,
    pub process_id: u32,
    pub memory_usage_bytes: u64,

    /// Resolution counters since startup
    pub text_resolutions: u64,
    pub text_unrecognized: u64,
    pub selection_resolutions: u64,
}

/// Status tracker for collecting runtime information
pub struct StatusTracker {
    start_time: Instant,
    reference_foods: usize,
    reference_keywords: usize,
    text_resolutions: u64,
    text_unrecognized: u64,
    selection_resolutions: u64,
}

impl StatusTracker {
    /// Create a new status tracker
    pub fn new(reference_foods: usize, reference_keywords: usize) -> Self {
        Self {
            start_time: Instant::now(),
            reference_foods,
            reference_keywords,
            text_resolutions: 0,
            text_unrecognized: 0,
            selection_resolutions: 0,
        }
    }

    /// Record one free-text resolution attempt
    pub fn record_text_resolution(&mut self, recognized: bool) {
        self.text_resolutions += 1;
        if !recognized {
            self.text_unrecognized += 1;
        }
    }

    /// Record one selection resolution
    pub fn record_selection_resolution(&mut self) {
        self.selection_resolutions += 1;
    }

    /// Get the current status
    pub fn get_status(&self) -> IntakeStatus {
        let build_info = BuildInfo::current();

        // Get process info
        let pid = std::process::id();
        let mut sys = System::new();
        sys.refresh_processes(ProcessesToUpdate::Some(&[Pid::from_u32(pid)]));

        let memory_usage_bytes = sys
            .process(Pid::from_u32(pid))
            .map(|p| p.memory())
            .unwrap_or(0);

        IntakeStatus {
            build_number: build_info.build_number,
            build_timestamp: build_info.build_timestamp,
            version: build_info.version,
            reference_foods: self.reference_foods,
            reference_keywords: self.reference_keywords,
            uptime_seconds: self.start_time.elapsed().as_secs(),
            process_id: pid,
            memory_usage_bytes,
            text_resolutions: self.text_resolutions,
            text_unrecognized: self.text_unrecognized,
            selection_resolutions: self.selection_resolutions,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters_accumulate() {
        let mut tracker = StatusTracker::new(20, 45);
        tracker.record_text_resolution(true);
        tracker.record_text_resolution(false);
        tracker.record_selection_resolution();
        let status = tracker.get_status();
        assert_eq!(status.text_resolutions, 2);
        assert_eq!(status.text_unrecognized, 1);
        assert_eq!(status.selection_resolutions, 1);
        assert_eq!(status.reference_foods, 20);
    }
}
