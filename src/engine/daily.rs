//! Daily intake aggregation
//!
//! Pure totals over one day's logged entries, grouped by meal type.
//! Where the entries are stored is the persistence collaborator's
//! concern; this module only sums what it is handed.

use crate::models::{DailySummary, LoggedIntake, MealType, MealTypeTotals};

/// Sum a day's logged entries
///
/// Entries carry already-rounded totals, so the daily summary is a plain
/// integer sum with no re-rounding. Sums saturate rather than overflow;
/// entry values arrive from callers and are not bounded here. Meal-type
/// groups appear in declaration order and only for meal types with at
/// least one entry.
pub fn summarize_day(entries: &[LoggedIntake]) -> DailySummary {
    let mut calories = 0u32;
    let mut protein = 0u32;
    let mut carbs = 0u32;
    let mut fat = 0u32;
    let mut fiber = 0u32;

    for entry in entries {
        calories = calories.saturating_add(entry.summary.calories);
        protein = protein.saturating_add(entry.summary.protein);
        carbs = carbs.saturating_add(entry.summary.carbs);
        fat = fat.saturating_add(entry.summary.fat);
        fiber = fiber.saturating_add(entry.summary.fiber.unwrap_or(0));
    }

    let by_meal_type = MealType::ALL
        .iter()
        .filter_map(|&meal_type| {
            let group: Vec<&LoggedIntake> = entries
                .iter()
                .filter(|e| e.meal_type == meal_type)
                .collect();
            if group.is_empty() {
                return None;
            }
            let total = |field: fn(&LoggedIntake) -> u32| {
                group.iter().fold(0u32, |acc, &e| acc.saturating_add(field(e)))
            };
            Some(MealTypeTotals {
                meal_type,
                entries: group.len(),
                calories: total(|e| e.summary.calories),
                protein: total(|e| e.summary.protein),
                carbs: total(|e| e.summary.carbs),
                fat: total(|e| e.summary.fat),
            })
        })
        .collect();

    DailySummary {
        calories,
        protein,
        carbs,
        fat,
        fiber: (fiber > 0).then_some(fiber),
        entry_count: entries.len(),
        by_meal_type,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NutritionSummary;

    fn entry(meal_type: MealType, calories: u32, protein: u32, fiber: Option<u32>) -> LoggedIntake {
        LoggedIntake {
            meal_type,
            summary: NutritionSummary {
                display_name: "Test".to_string(),
                calories,
                protein,
                carbs: 0,
                fat: 0,
                fiber,
                serving_description: "1 unit".to_string(),
            },
        }
    }

    #[test]
    fn test_empty_day() {
        let summary = summarize_day(&[]);
        assert_eq!(summary.calories, 0);
        assert_eq!(summary.entry_count, 0);
        assert!(summary.by_meal_type.is_empty());
        assert_eq!(summary.fiber, None);
    }

    #[test]
    fn test_totals_and_grouping() {
        let entries = [
            entry(MealType::Breakfast, 245, 13, Some(3)),
            entry(MealType::Lunch, 480, 45, None),
            entry(MealType::Snack, 220, 30, None),
            entry(MealType::Snack, 120, 15, None),
        ];
        let summary = summarize_day(&entries);
        assert_eq!(summary.calories, 1065);
        assert_eq!(summary.protein, 103);
        assert_eq!(summary.fiber, Some(3));
        assert_eq!(summary.entry_count, 4);

        let types: Vec<MealType> = summary.by_meal_type.iter().map(|g| g.meal_type).collect();
        assert_eq!(types, vec![MealType::Breakfast, MealType::Lunch, MealType::Snack]);
        assert_eq!(summary.by_meal_type[2].entries, 2);
        assert_eq!(summary.by_meal_type[2].calories, 340);
    }

    #[test]
    fn test_totals_saturate_on_extreme_entries() {
        // Entry values are caller-supplied; absurd inputs clamp at the
        // ceiling instead of panicking
        let entries = [
            entry(MealType::Lunch, u32::MAX, u32::MAX, Some(u32::MAX)),
            entry(MealType::Lunch, 100, 1, Some(1)),
        ];
        let summary = summarize_day(&entries);
        assert_eq!(summary.calories, u32::MAX);
        assert_eq!(summary.protein, u32::MAX);
        assert_eq!(summary.fiber, Some(u32::MAX));
        assert_eq!(summary.by_meal_type[0].calories, u32::MAX);
    }
}
