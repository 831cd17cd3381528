//! Reference store browsing tools
//!
//! Read-only views over the reference table for the structured food
//! picker: list, search, and per-food detail.

use serde::Serialize;

use crate::engine::ReferenceStore;

/// Summary of a reference food for list/search results
#[derive(Debug, Serialize)]
pub struct ReferenceFoodSummary {
    pub name: String,
    pub serving_label: String,
    pub calories: f64,
    /// Keywords that resolve to this food, in registration order
    pub keywords: Vec<String>,
}

/// Response for list_reference_foods and search_reference_foods
#[derive(Debug, Serialize)]
pub struct ListReferenceFoodsResponse {
    pub foods: Vec<ReferenceFoodSummary>,
    pub total: usize,
}

/// Full detail for one reference food
#[derive(Debug, Serialize)]
pub struct ReferenceFoodDetail {
    pub name: String,
    pub serving_label: String,
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fiber: Option<f64>,
    pub keywords: Vec<String>,
}

/// List every food in the reference table
pub fn list_foods(store: &ReferenceStore) -> ListReferenceFoodsResponse {
    let foods: Vec<ReferenceFoodSummary> = store
        .entries()
        .map(|(fact, aliases)| ReferenceFoodSummary {
            name: fact.canonical_name.clone(),
            serving_label: fact.serving_label.clone(),
            calories: fact.calories,
            keywords: aliases.to_vec(),
        })
        .collect();
    let total = foods.len();
    ListReferenceFoodsResponse { foods, total }
}

/// Search foods by name or keyword fragment (case-insensitive)
pub fn search_foods(store: &ReferenceStore, query: &str) -> ListReferenceFoodsResponse {
    let needle = query.trim().to_lowercase();
    let foods: Vec<ReferenceFoodSummary> = store
        .entries()
        .filter(|(fact, aliases)| {
            fact.canonical_name.to_lowercase().contains(&needle)
                || aliases.iter().any(|a| a.contains(&needle))
        })
        .map(|(fact, aliases)| ReferenceFoodSummary {
            name: fact.canonical_name.clone(),
            serving_label: fact.serving_label.clone(),
            calories: fact.calories,
            keywords: aliases.to_vec(),
        })
        .collect();
    let total = foods.len();
    ListReferenceFoodsResponse { foods, total }
}

/// Get full facts for one food by any of its keywords
pub fn get_food(store: &ReferenceStore, keyword: &str) -> Option<ReferenceFoodDetail> {
    let fact = store.lookup(keyword)?;
    let keywords = store
        .entries()
        .find(|(f, _)| f.canonical_name == fact.canonical_name)
        .map(|(_, aliases)| aliases.to_vec())
        .unwrap_or_default();
    Some(ReferenceFoodDetail {
        name: fact.canonical_name.clone(),
        serving_label: fact.serving_label.clone(),
        calories: fact.calories,
        protein: fact.protein,
        carbs: fact.carbs,
        fat: fact.fat,
        fiber: fact.fiber,
        keywords,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_foods_covers_whole_table() {
        let store = ReferenceStore::standard();
        let response = list_foods(&store);
        assert_eq!(response.total, store.food_count());
    }

    #[test]
    fn test_search_matches_aliases() {
        let store = ReferenceStore::standard();
        let response = search_foods(&store, "oats");
        assert_eq!(response.total, 1);
        assert_eq!(response.foods[0].name, "Oatmeal");
    }

    #[test]
    fn test_get_food_by_any_alias() {
        let store = ReferenceStore::standard();
        let detail = get_food(&store, "eggs").unwrap();
        assert_eq!(detail.name, "Egg");
        assert!(detail.keywords.contains(&"egg".to_string()));
        assert!(detail.fiber.is_none());
    }

    #[test]
    fn test_get_food_unknown_keyword() {
        let store = ReferenceStore::standard();
        assert!(get_food(&store, "nonsense").is_none());
    }
}
