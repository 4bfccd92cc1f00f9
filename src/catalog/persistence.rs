use std::fs;
use std::path::Path;

use tracing::debug;

use crate::catalog::FoodCatalog;
use crate::error::{Result, WellnessError};
use crate::models::Food;

/// Load a food catalog from a JSON array of foods.
///
/// Deduplicates by lowercase name (last occurrence wins). Foods with negative
/// or non-finite values are rejected.
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<FoodCatalog> {
    let content = fs::read_to_string(path.as_ref())?;
    let foods: Vec<Food> = serde_json::from_str(&content)?;

    if let Some(bad) = foods.iter().find(|f| !f.profile.is_valid()) {
        return Err(WellnessError::InvalidInput(format!(
            "Food '{}' has negative or non-numeric nutrient values",
            bad.name
        )));
    }

    let catalog = FoodCatalog::new(foods);
    debug!(path = %path.as_ref().display(), foods = catalog.len(), "loaded catalog");
    Ok(catalog)
}

/// Save a food catalog as pretty-printed JSON.
pub fn save_catalog<P: AsRef<Path>>(path: P, catalog: &FoodCatalog) -> Result<()> {
    let json = serde_json::to_string_pretty(&catalog.to_foods())?;
    fs::write(path, json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_and_save_roundtrip() {
        let json = r#"[
            {"Name": "Apple", "Calories": 52, "Protein": 0.3, "Carbs": 14, "Fat": 0.2}
        ]"#;

        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let catalog = load_catalog(file.path()).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.names(), vec!["Apple"]);

        let out_file = NamedTempFile::new().unwrap();
        save_catalog(out_file.path(), &catalog).unwrap();

        let reloaded = load_catalog(out_file.path()).unwrap();
        assert_eq!(reloaded.len(), 1);
        assert_eq!(reloaded.profile("apple").unwrap().carbs_per_100g, 14.0);
    }

    #[test]
    fn test_deduplication() {
        let json = r#"[
            {"Name": "Apple", "Calories": 52, "Protein": 0.3, "Carbs": 14, "Fat": 0.2},
            {"Name": "apple", "Calories": 60, "Protein": 0.3, "Carbs": 14, "Fat": 0.2}
        ]"#;

        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let catalog = load_catalog(file.path()).unwrap();
        assert_eq!(catalog.len(), 1);
        // Last occurrence wins
        assert_eq!(catalog.profile("Apple").unwrap().calories_per_100g, 60.0);
    }

    #[test]
    fn test_rejects_negative_values() {
        let json = r#"[
            {"Name": "Mystery", "Calories": -5, "Protein": 0, "Carbs": 0, "Fat": 0}
        ]"#;

        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        assert!(matches!(
            load_catalog(file.path()),
            Err(WellnessError::InvalidInput(_))
        ));
    }
}
