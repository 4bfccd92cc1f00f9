use std::path::Path;

use crate::error::Result;
use crate::models::Recommendation;
use crate::session::Session;

/// Write the session's entries plus a totals row to a CSV file.
pub fn write_intake_csv(path: &Path, session: &Session) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record(["food", "grams", "calories", "protein_g", "carbs_g", "fat_g"])?;

    for entry in session.entries() {
        wtr.write_record([
            entry.food.clone(),
            format!("{:.1}", entry.grams),
            format!("{:.1}", entry.nutrients.calories),
            format!("{:.1}", entry.nutrients.protein_g),
            format!("{:.1}", entry.nutrients.carbs_g),
            format!("{:.1}", entry.nutrients.fat_g),
        ])?;
    }

    let totals = session.totals();
    let total_grams: f64 = session.entries().iter().map(|e| e.grams).sum();
    wtr.write_record([
        "TOTAL".to_string(),
        format!("{:.1}", total_grams),
        format!("{:.1}", totals.calories),
        format!("{:.1}", totals.protein_g),
        format!("{:.1}", totals.carbs_g),
        format!("{:.1}", totals.fat_g),
    ])?;

    wtr.flush()?;
    Ok(())
}

/// Write the per-meal split of a recommendation to a CSV file.
pub fn write_plan_csv(path: &Path, recommendation: &Recommendation) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record(["meal", "fraction", "calories", "protein_g", "carbs_g", "fat_g"])?;

    for (slot, share) in recommendation.meals.iter() {
        wtr.write_record([
            slot.label().to_string(),
            format!("{:.2}", slot.fraction()),
            format!("{:.1}", share.calories),
            format!("{:.1}", share.protein_g),
            format!("{:.1}", share.carbs_g),
            format!("{:.1}", share.fat_g),
        ])?;
    }

    let targets = &recommendation.targets;
    wtr.write_record([
        "Daily".to_string(),
        "1.00".to_string(),
        format!("{:.1}", targets.calories),
        format!("{:.1}", targets.protein_g),
        format!("{:.1}", targets.carbs_g),
        format!("{:.1}", targets.fat_g),
    ])?;

    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::FoodCatalog;
    use tempfile::NamedTempFile;

    #[test]
    fn test_intake_csv_has_entries_and_totals() {
        let catalog = FoodCatalog::builtin();
        let mut session = Session::new();
        session.log_food(&catalog, "Oats", 50.0).unwrap();
        session.log_food(&catalog, "Milk", 200.0).unwrap();

        let file = NamedTempFile::new().unwrap();
        write_intake_csv(file.path(), &session).unwrap();

        let mut rdr = csv::Reader::from_path(file.path()).unwrap();
        let rows: Vec<csv::StringRecord> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 3);
        assert_eq!(&rows[0][0], "Oats");
        assert_eq!(&rows[0][2], "194.5");
        assert_eq!(&rows[2][0], "TOTAL");
        assert_eq!(&rows[2][1], "250.0");
        assert_eq!(&rows[2][2], "314.5");
    }
}
