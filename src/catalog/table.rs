use std::collections::HashMap;
use std::sync::LazyLock;

use strsim::jaro_winkler;

use crate::error::{Result, WellnessError};
use crate::models::{Food, FoodProfile, food_key};

/// Minimum Jaro-Winkler similarity for a name to count as a suggestion.
pub const FUZZY_MATCH_THRESHOLD: f64 = 0.7;

/// Maximum number of suggestions offered for a misspelled name.
pub const MAX_SUGGESTIONS: usize = 5;

/// Built-in table: name, kcal, protein, carbs, fat (per 100 g; milk per 100 ml).
const BUILTIN_FOODS: [(&str, f64, f64, f64, f64); 10] = [
    ("Rice", 130.0, 2.7, 28.0, 0.3),
    ("Roti", 120.0, 3.0, 20.0, 3.0),
    ("Chicken Breast", 165.0, 31.0, 0.0, 3.6),
    ("Egg", 155.0, 13.0, 1.1, 11.0),
    ("Oats", 389.0, 17.0, 66.0, 7.0),
    ("Paneer", 265.0, 18.0, 6.0, 20.0),
    ("Banana", 89.0, 1.1, 23.0, 0.3),
    ("Milk", 60.0, 3.2, 5.0, 3.5),
    ("Almonds", 579.0, 21.0, 22.0, 50.0),
    ("Broccoli", 34.0, 2.8, 6.6, 0.4),
];

/// Shared read-only copy of the built-in table.
pub static BUILTIN_CATALOG: LazyLock<FoodCatalog> = LazyLock::new(FoodCatalog::builtin);

/// Read-only food table keyed by case-insensitive name.
#[derive(Debug, Clone, Default)]
pub struct FoodCatalog {
    /// Foods in insertion order, for display.
    foods: Vec<Food>,
    /// Lowercase name to position in `foods`.
    index: HashMap<String, usize>,
}

impl FoodCatalog {
    /// Build a catalog from a list of foods.
    ///
    /// Names are deduplicated case-insensitively; the last occurrence wins but
    /// keeps the position of the first.
    pub fn new(foods: Vec<Food>) -> Self {
        let mut catalog = Self::default();
        for food in foods {
            let key = food.key();
            match catalog.index.get(&key) {
                Some(&pos) => catalog.foods[pos] = food,
                None => {
                    catalog.index.insert(key, catalog.foods.len());
                    catalog.foods.push(food);
                }
            }
        }
        catalog
    }

    /// The built-in ten-food table.
    pub fn builtin() -> Self {
        Self::new(
            BUILTIN_FOODS
                .iter()
                .map(|&(name, cal, protein, carbs, fat)| {
                    Food::new(name, FoodProfile::new(cal, protein, carbs, fat))
                })
                .collect(),
        )
    }

    /// Get a food by name (case-insensitive).
    pub fn get(&self, name: &str) -> Option<&Food> {
        self.index.get(&food_key(name)).map(|&pos| &self.foods[pos])
    }

    /// Get a food's profile, or `FoodNotFound`.
    pub fn profile(&self, name: &str) -> Result<&FoodProfile> {
        self.get(name)
            .map(|f| &f.profile)
            .ok_or_else(|| WellnessError::FoodNotFound(name.trim().to_string()))
    }

    /// Foods whose names are similar to `name`, best match first.
    pub fn suggest(&self, name: &str) -> Vec<&Food> {
        let query = food_key(name);
        let mut candidates: Vec<(&Food, f64)> = self
            .foods
            .iter()
            .map(|f| (f, jaro_winkler(&f.key(), &query)))
            .filter(|(_, score)| *score > FUZZY_MATCH_THRESHOLD)
            .collect();

        candidates.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

        candidates
            .into_iter()
            .take(MAX_SUGGESTIONS)
            .map(|(f, _)| f)
            .collect()
    }

    /// Exact lookup; on a miss the error lists close matches.
    pub fn resolve(&self, name: &str) -> Result<&Food> {
        if let Some(food) = self.get(name) {
            return Ok(food);
        }

        let suggestions: Vec<&str> = self
            .suggest(name)
            .into_iter()
            .map(|f| f.name.as_str())
            .collect();
        let message = if suggestions.is_empty() {
            name.trim().to_string()
        } else {
            format!("{} (did you mean: {}?)", name.trim(), suggestions.join(", "))
        };
        Err(WellnessError::FoodNotFound(message))
    }

    /// All foods in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Food> {
        self.foods.iter()
    }

    /// Food names in insertion order.
    pub fn names(&self) -> Vec<&str> {
        self.foods.iter().map(|f| f.name.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.foods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.foods.is_empty()
    }

    /// Owned copy of the foods, for serialization.
    pub fn to_foods(&self) -> Vec<Food> {
        self.foods.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_has_ten_foods() {
        let catalog = FoodCatalog::builtin();
        assert_eq!(catalog.len(), 10);
        assert_eq!(catalog.names()[0], "Rice");
        assert_eq!(catalog.names()[9], "Broccoli");
    }

    #[test]
    fn test_get_case_insensitive() {
        let catalog = FoodCatalog::builtin();
        assert!(catalog.get("rice").is_some());
        assert!(catalog.get("CHICKEN BREAST").is_some());
        assert!(catalog.get("  Oats ").is_some());
        assert!(catalog.get("pizza").is_none());
    }

    #[test]
    fn test_builtin_values() {
        let chicken = BUILTIN_CATALOG.profile("Chicken Breast").unwrap();
        assert_eq!(chicken.calories_per_100g, 165.0);
        assert_eq!(chicken.protein_per_100g, 31.0);
        assert_eq!(chicken.carbs_per_100g, 0.0);
        assert_eq!(chicken.fat_per_100g, 3.6);
    }

    #[test]
    fn test_profile_not_found() {
        let catalog = FoodCatalog::builtin();
        assert!(matches!(
            catalog.profile("pizza"),
            Err(WellnessError::FoodNotFound(_))
        ));
    }

    #[test]
    fn test_dedup_last_wins_keeps_position() {
        let catalog = FoodCatalog::new(vec![
            Food::new("Apple", FoodProfile::new(52.0, 0.3, 14.0, 0.2)),
            Food::new("Pear", FoodProfile::new(57.0, 0.4, 15.0, 0.1)),
            Food::new("APPLE", FoodProfile::new(60.0, 0.3, 14.0, 0.2)),
        ]);
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.names(), vec!["APPLE", "Pear"]);
        assert_eq!(catalog.profile("apple").unwrap().calories_per_100g, 60.0);
    }

    #[test]
    fn test_suggest_and_resolve() {
        let catalog = FoodCatalog::builtin();
        let suggestions = catalog.suggest("brocoli");
        assert_eq!(suggestions[0].name, "Broccoli");

        assert_eq!(catalog.resolve("banana").unwrap().name, "Banana");
        match catalog.resolve("almond") {
            Err(WellnessError::FoodNotFound(msg)) => assert!(msg.contains("Almonds")),
            other => panic!("unexpected result: {:?}", other),
        }
    }
}
