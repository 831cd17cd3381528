//! Explicit selection aggregation
//!
//! Applies the same combination contract as the text resolver to an
//! already-identified list of reference items; no keyword scanning.

use crate::models::{FoodMatch, NutritionFact};

/// Aggregate explicit selections, one serving each
///
/// Selecting the same canonical food twice accumulates into a single
/// match at the position of the first selection, never two line items.
pub fn aggregate<'a>(selections: &[&'a NutritionFact]) -> Vec<FoodMatch<'a>> {
    let mut matches: Vec<FoodMatch<'a>> = Vec::new();
    for &fact in selections {
        if let Some(existing) = matches
            .iter_mut()
            .find(|m| m.fact.canonical_name == fact.canonical_name)
        {
            existing.multiplier += 1.0;
        } else {
            matches.push(FoodMatch {
                fact,
                multiplier: 1.0,
            });
        }
    }
    matches
}

#[cfg(test)]
mod tests {
    use super::*;

    fn banana() -> NutritionFact {
        NutritionFact::new("Banana", 105.0, 1.0, 27.0, 0.0, "1 medium (118g)").with_fiber(3.0)
    }

    fn egg() -> NutritionFact {
        NutritionFact::new("Egg", 70.0, 6.0, 0.5, 5.0, "1 large (50g)")
    }

    #[test]
    fn test_each_selection_is_one_serving() {
        let b = banana();
        let e = egg();
        let matches = aggregate(&[&b, &e]);
        assert_eq!(matches.len(), 2);
        assert_eq!(matches[0].multiplier, 1.0);
        assert_eq!(matches[1].multiplier, 1.0);
    }

    #[test]
    fn test_duplicate_selection_accumulates() {
        let b = banana();
        let e = egg();
        let matches = aggregate(&[&b, &e, &b]);
        assert_eq!(matches.len(), 2);
        assert_eq!(matches[0].fact.canonical_name, "Banana");
        assert_eq!(matches[0].multiplier, 2.0);
        assert_eq!(matches[1].fact.canonical_name, "Egg");
        assert_eq!(matches[1].multiplier, 1.0);
    }

    #[test]
    fn test_empty_selection() {
        assert!(aggregate(&[]).is_empty());
    }
}
