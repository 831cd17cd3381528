//! Nutrition reference store
//!
//! Immutable keyword -> nutrition fact table, the single source of truth
//! for per-serving macros. Built once at startup and read-only afterward,
//! so concurrent reads need no locking.

use std::collections::HashMap;

use tracing::warn;

use crate::models::NutritionFact;

/// Immutable keyword -> nutrition fact table
///
/// Foods and their alias keywords keep registration order; that order is
/// the deterministic output order of the text resolver. Alias keywords
/// (singular/plural variants) are distinct keys mapping to one canonical
/// food.
#[derive(Debug, Clone)]
pub struct ReferenceStore {
    foods: Vec<NutritionFact>,
    /// Alias keywords per food, parallel to `foods`
    aliases: Vec<Vec<String>>,
    /// Lower-cased keyword -> index into `foods`
    index: HashMap<String, usize>,
}

impl ReferenceStore {
    pub fn builder() -> ReferenceStoreBuilder {
        ReferenceStoreBuilder::default()
    }

    /// The built-in food table
    pub fn standard() -> Self {
        super::table::standard_table()
    }

    /// Look up the fact for a keyword (case-insensitive)
    ///
    /// An absent result is a normal outcome meaning "no nutrition data
    /// known for this term", not an error.
    pub fn lookup(&self, keyword: &str) -> Option<&NutritionFact> {
        self.index
            .get(&keyword.trim().to_lowercase())
            .map(|&i| &self.foods[i])
    }

    /// Canonical foods with their alias keywords, in registration order
    pub fn entries(&self) -> impl Iterator<Item = (&NutritionFact, &[String])> {
        self.foods
            .iter()
            .zip(self.aliases.iter().map(Vec::as_slice))
    }

    pub fn food_count(&self) -> usize {
        self.foods.len()
    }

    pub fn keyword_count(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.foods.is_empty()
    }
}

/// Builder for a [`ReferenceStore`]
#[derive(Debug, Default)]
pub struct ReferenceStoreBuilder {
    foods: Vec<NutritionFact>,
    aliases: Vec<Vec<String>>,
    index: HashMap<String, usize>,
}

impl ReferenceStoreBuilder {
    /// Register a canonical food with its alias keywords
    ///
    /// Keywords are lower-cased. A keyword that is already registered is
    /// skipped with a warning, keeping the invariant that every key maps
    /// to exactly one fact.
    pub fn food(mut self, fact: NutritionFact, keywords: &[&str]) -> Self {
        let idx = self.foods.len();
        let mut kept = Vec::with_capacity(keywords.len());
        for kw in keywords {
            let key = kw.trim().to_lowercase();
            if key.is_empty() {
                continue;
            }
            if self.index.contains_key(&key) {
                warn!(keyword = %key, food = %fact.canonical_name, "duplicate reference keyword ignored");
                continue;
            }
            self.index.insert(key.clone(), idx);
            kept.push(key);
        }
        self.foods.push(fact);
        self.aliases.push(kept);
        self
    }

    pub fn build(self) -> ReferenceStore {
        ReferenceStore {
            foods: self.foods,
            aliases: self.aliases,
            index: self.index,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_store() -> ReferenceStore {
        ReferenceStore::builder()
            .food(
                NutritionFact::new("Banana", 105.0, 1.0, 27.0, 0.0, "1 medium (118g)").with_fiber(3.0),
                &["banana", "bananas"],
            )
            .food(
                NutritionFact::new("Egg", 70.0, 6.0, 0.5, 5.0, "1 large (50g)"),
                &["egg", "eggs"],
            )
            .build()
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let store = sample_store();
        assert_eq!(store.lookup("Banana").unwrap().canonical_name, "Banana");
        assert_eq!(store.lookup("EGGS").unwrap().canonical_name, "Egg");
    }

    #[test]
    fn test_lookup_absent_keyword() {
        let store = sample_store();
        assert!(store.lookup("pizza").is_none());
    }

    #[test]
    fn test_aliases_share_one_fact() {
        let store = sample_store();
        let a = store.lookup("egg").unwrap();
        let b = store.lookup("eggs").unwrap();
        assert_eq!(a.canonical_name, b.canonical_name);
        assert_eq!(store.food_count(), 2);
        assert_eq!(store.keyword_count(), 4);
    }

    #[test]
    fn test_duplicate_keyword_ignored() {
        let store = ReferenceStore::builder()
            .food(NutritionFact::new("Banana", 105.0, 1.0, 27.0, 0.0, "1 medium"), &["banana"])
            .food(NutritionFact::new("Plantain", 180.0, 2.0, 47.0, 0.5, "1 medium"), &["banana", "plantain"])
            .build();
        // First registration wins; the second food keeps its other keyword
        assert_eq!(store.lookup("banana").unwrap().canonical_name, "Banana");
        assert_eq!(store.lookup("plantain").unwrap().canonical_name, "Plantain");
    }

    #[test]
    fn test_entries_keep_registration_order() {
        let store = sample_store();
        let names: Vec<&str> = store
            .entries()
            .map(|(f, _)| f.canonical_name.as_str())
            .collect();
        assert_eq!(names, vec!["Banana", "Egg"]);
    }

    #[test]
    fn test_standard_table_includes_common_foods() {
        let store = ReferenceStore::standard();
        assert!(store.lookup("banana").is_some());
        assert!(store.lookup("eggs").is_some());
        assert!(store.lookup("oatmeal").is_some());
        assert!(store.keyword_count() >= store.food_count());
    }
}
