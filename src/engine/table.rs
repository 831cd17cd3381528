//! Built-in reference food table
//!
//! The static, in-process data source the engine is loaded with at
//! startup. Values are per-serving; fiber is attached only where the
//! source data provides it.

use crate::models::NutritionFact;

use super::store::ReferenceStore;

/// Build the standard reference table
pub(super) fn standard_table() -> ReferenceStore {
    ReferenceStore::builder()
        .food(
            NutritionFact::new("Banana", 105.0, 1.0, 27.0, 0.0, "1 medium (118g)").with_fiber(3.0),
            &["banana", "bananas"],
        )
        .food(
            NutritionFact::new("Egg", 70.0, 6.0, 0.5, 5.0, "1 large (50g)"),
            &["egg", "eggs"],
        )
        .food(
            NutritionFact::new("Apple", 95.0, 0.5, 25.0, 0.3, "1 medium (182g)").with_fiber(4.4),
            &["apple", "apples"],
        )
        .food(
            NutritionFact::new("Orange", 62.0, 1.2, 15.4, 0.2, "1 medium (131g)").with_fiber(3.1),
            &["orange", "oranges"],
        )
        .food(
            NutritionFact::new("Oatmeal", 154.0, 6.0, 27.0, 3.0, "1 cup cooked (234g)").with_fiber(4.0),
            &["oatmeal", "oats", "porridge"],
        )
        .food(
            NutritionFact::new("Toast", 75.0, 3.0, 13.0, 1.0, "1 slice (32g)").with_fiber(1.1),
            &["toast", "bread"],
        )
        .food(
            NutritionFact::new("Peanut Butter", 190.0, 7.0, 8.0, 16.0, "2 tbsp (32g)").with_fiber(1.9),
            &["peanut butter"],
        )
        .food(
            NutritionFact::new("Greek Yogurt", 100.0, 17.0, 6.0, 0.7, "1 container (170g)"),
            &["greek yogurt", "yogurt", "yoghurt"],
        )
        .food(
            NutritionFact::new("Milk", 122.0, 8.0, 12.0, 4.8, "1 cup (244ml)"),
            &["milk"],
        )
        .food(
            NutritionFact::new("Chicken Breast", 165.0, 31.0, 0.0, 3.6, "100g cooked"),
            &["chicken breast", "chicken"],
        )
        .food(
            NutritionFact::new("Salmon", 208.0, 20.0, 0.0, 13.0, "100g cooked"),
            &["salmon"],
        )
        .food(
            NutritionFact::new("Rice", 206.0, 4.3, 45.0, 0.4, "1 cup cooked (158g)").with_fiber(0.6),
            &["rice"],
        )
        .food(
            NutritionFact::new("Pasta", 221.0, 8.0, 43.0, 1.3, "1 cup cooked (140g)").with_fiber(2.5),
            &["pasta", "spaghetti", "noodles"],
        )
        .food(
            NutritionFact::new("Potato", 161.0, 4.3, 37.0, 0.2, "1 medium baked (173g)").with_fiber(3.8),
            &["potato", "potatoes"],
        )
        .food(
            NutritionFact::new("Broccoli", 55.0, 3.7, 11.2, 0.6, "1 cup cooked (156g)").with_fiber(5.1),
            &["broccoli"],
        )
        .food(
            NutritionFact::new("Avocado", 240.0, 3.0, 12.8, 22.0, "1 medium (150g)").with_fiber(10.0),
            &["avocado", "avocados"],
        )
        .food(
            NutritionFact::new("Almonds", 164.0, 6.0, 6.1, 14.2, "1 oz (28g)").with_fiber(3.5),
            &["almonds", "almond"],
        )
        .food(
            NutritionFact::new("Cheese", 113.0, 7.0, 0.9, 9.3, "1 oz cheddar (28g)"),
            &["cheese", "cheddar"],
        )
        .food(
            NutritionFact::new("Protein Shake", 220.0, 30.0, 15.0, 4.0, "1 shake (350ml)"),
            &["protein shake", "protein smoothie"],
        )
        .food(
            NutritionFact::new("Steak", 271.0, 25.0, 0.0, 19.0, "100g cooked"),
            &["steak", "beef"],
        )
        .build()
}
