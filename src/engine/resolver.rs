//! Free-text resolution
//!
//! Scans text against the reference store, applies quantity rules, and
//! emits a normalized match set.

use tracing::debug;

use crate::models::FoodMatch;

use super::quantity;
use super::store::ReferenceStore;

/// Resolve free text into food matches
///
/// Matching is word-boundary-aware, so "egg" does not fire inside
/// "eggplant" or "eggs". Every canonical food yields at most one match;
/// multipliers are summed across its alias keywords, and an alias
/// occurrence sitting inside a longer alias of the same food is the same
/// mention seen twice, not a second serving ("greek yogurt" also
/// contains "yogurt"). A count attached to one keyword never leaks into
/// another food's multiplier. Matches come back in store registration
/// order, zero multipliers are discarded, and an empty result simply
/// means the text is not a food log.
pub fn resolve<'a>(store: &'a ReferenceStore, text: &str) -> Vec<FoodMatch<'a>> {
    let lowered = text.to_lowercase();

    // Aliases that actually occur, so their attached counts are not
    // reused as the global fallback for other foods.
    let mut present: Vec<&str> = Vec::new();
    for (_, aliases) in store.entries() {
        for alias in aliases {
            if quantity::contains_word(&lowered, alias) {
                present.push(alias);
            }
        }
    }
    if present.is_empty() {
        return Vec::new();
    }

    let global = quantity::unattached_global_multiplier(&lowered, &present);

    let mut matches = Vec::new();
    for (fact, aliases) in store.entries() {
        // Byte spans of every alias occurrence for this food, used to
        // suppress occurrences nested inside a longer alias occurrence.
        let spans: Vec<(usize, usize)> = aliases
            .iter()
            .flat_map(|alias| {
                quantity::word_occurrences(&lowered, alias)
                    .into_iter()
                    .map(move |pos| (pos, pos + alias.len()))
            })
            .collect();

        let mut combined = 0.0;
        let mut matched = false;
        for alias in aliases {
            let standalone = quantity::word_occurrences(&lowered, alias)
                .into_iter()
                .any(|pos| {
                    let end = pos + alias.len();
                    !spans
                        .iter()
                        .any(|&(s, e)| s <= pos && end <= e && e - s > end - pos)
                });
            if !standalone {
                continue;
            }
            matched = true;
            combined += quantity::extract_keyword_multiplier(&lowered, alias).unwrap_or(global);
        }
        if matched && combined > 0.0 {
            debug!(food = %fact.canonical_name, multiplier = combined, "recognized food mention");
            matches.push(FoodMatch {
                fact,
                multiplier: combined,
            });
        }
    }
    matches
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NutritionFact;

    fn test_store() -> ReferenceStore {
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
                NutritionFact::new("Greek Yogurt", 100.0, 17.0, 6.0, 0.7, "1 container (170g)"),
                &["greek yogurt", "yogurt", "yoghurt"],
            )
            .food(
                NutritionFact::new("Chicken Breast", 165.0, 31.0, 0.0, 3.6, "100g cooked"),
                &["chicken breast", "chicken"],
            )
            .food(
                NutritionFact::new("Rice", 206.0, 4.3, 45.0, 0.4, "1 cup cooked (158g)").with_fiber(0.6),
                &["rice"],
            )
            .build()
    }

    #[test]
    fn test_no_food_mentioned() {
        let store = test_store();
        assert!(resolve(&store, "let's talk about motivation").is_empty());
        assert!(resolve(&store, "").is_empty());
    }

    #[test]
    fn test_single_food_single_serving() {
        let store = test_store();
        let matches = resolve(&store, "I had a banana");
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].fact.canonical_name, "Banana");
        assert_eq!(matches[0].multiplier, 1.0);
    }

    #[test]
    fn test_keyword_local_multiplier() {
        let store = test_store();
        let matches = resolve(&store, "2 eggs and a banana");
        assert_eq!(matches.len(), 2);
        // Store registration order, not text order
        assert_eq!(matches[0].fact.canonical_name, "Banana");
        assert_eq!(matches[0].multiplier, 1.0);
        assert_eq!(matches[1].fact.canonical_name, "Egg");
        assert_eq!(matches[1].multiplier, 2.0);
    }

    #[test]
    fn test_multiplier_precedence() {
        // A count attached to one keyword does not leak into another food
        let store = test_store();
        let matches = resolve(&store, "3 bananas and apple");
        assert_eq!(matches.len(), 2);
        assert_eq!(matches[0].fact.canonical_name, "Banana");
        assert_eq!(matches[0].multiplier, 3.0);
        assert_eq!(matches[1].fact.canonical_name, "Apple");
        assert_eq!(matches[1].multiplier, 1.0);
    }

    #[test]
    fn test_global_multiplier_applies_when_unattached() {
        let store = test_store();
        let matches = resolve(&store, "2 scrambled eggs");
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].fact.canonical_name, "Egg");
        assert_eq!(matches[0].multiplier, 2.0);
    }

    #[test]
    fn test_alias_combination_no_double_count() {
        // Both aliases on boundaries -> one match with combined multiplier
        let store = test_store();
        let matches = resolve(&store, "an egg then more eggs");
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].fact.canonical_name, "Egg");
        assert_eq!(matches[0].multiplier, 2.0);
    }

    #[test]
    fn test_word_boundary_prevents_false_positive() {
        let store = test_store();
        // "apple" inside "pineapple"? The boundary check catches prefixes
        // of longer words; "eggplant" must not resolve as egg.
        assert!(resolve(&store, "eggplant parmesan for dinner").is_empty());
    }

    #[test]
    fn test_zero_multiplier_excluded() {
        let store = test_store();
        let matches = resolve(&store, "0 banana and 2 eggs");
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].fact.canonical_name, "Egg");
    }

    #[test]
    fn test_nested_alias_is_one_mention() {
        // "yogurt" sits on word boundaries inside "greek yogurt"; the
        // mention still counts as a single serving
        let store = test_store();
        let matches = resolve(&store, "a greek yogurt");
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].fact.canonical_name, "Greek Yogurt");
        assert_eq!(matches[0].multiplier, 1.0);
    }

    #[test]
    fn test_nested_alias_alongside_other_food() {
        let store = test_store();
        let matches = resolve(&store, "chicken breast and rice");
        assert_eq!(matches.len(), 2);
        assert_eq!(matches[0].fact.canonical_name, "Chicken Breast");
        assert_eq!(matches[0].multiplier, 1.0);
        assert_eq!(matches[1].fact.canonical_name, "Rice");
        assert_eq!(matches[1].multiplier, 1.0);
    }

    #[test]
    fn test_nested_alias_with_local_count() {
        // The count attaches to the whole phrase, not once per alias
        let store = test_store();
        let matches = resolve(&store, "2 greek yogurt");
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].fact.canonical_name, "Greek Yogurt");
        assert_eq!(matches[0].multiplier, 2.0);
    }

    #[test]
    fn test_separate_inner_alias_mention_still_counts() {
        // A standalone "yogurt" outside the longer phrase is a real
        // second mention
        let store = test_store();
        let matches = resolve(&store, "yogurt now, greek yogurt later");
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].fact.canonical_name, "Greek Yogurt");
        assert_eq!(matches[0].multiplier, 2.0);
    }

    #[test]
    fn test_resolution_is_deterministic() {
        let store = test_store();
        let a = resolve(&store, "apple banana eggs");
        let b = resolve(&store, "apple banana eggs");
        let names = |ms: &[FoodMatch<'_>]| {
            ms.iter().map(|m| m.fact.canonical_name.clone()).collect::<Vec<_>>()
        };
        assert_eq!(names(&a), names(&b));
        assert_eq!(names(&a), vec!["Banana", "Egg", "Apple"]);
    }
}
