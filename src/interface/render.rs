use crate::catalog::FoodCatalog;
use crate::models::{Food, NutrientAmount, PersonalProfile, Recommendation};
use crate::session::{IntakeEntry, Session};

/// Whole-number display value (truncated toward zero).
pub fn whole(value: f64) -> i64 {
    value.trunc() as i64
}

/// One-line summary of a nutrient amount.
pub fn format_amount(amount: &NutrientAmount) -> String {
    format!(
        "{:.1} kcal, P:{:.1}g, C:{:.1}g, F:{:.1}g",
        amount.calories, amount.protein_g, amount.carbs_g, amount.fat_g
    )
}

/// Display the catalog as an aligned table of per-100g values.
pub fn display_catalog(catalog: &FoodCatalog) {
    if catalog.is_empty() {
        println!("Food catalog: (none)");
        return;
    }

    let max_name_len = catalog.iter().map(|f| f.name.len()).max().unwrap_or(10);

    println!();
    println!("=== Food Catalog ({} items, per 100g) ===", catalog.len());
    println!();

    for food in catalog.iter() {
        let p = &food.profile;
        println!(
            "  {:<width$}  {:>5.0} kcal | P:{:>5.1}g C:{:>5.1}g F:{:>5.1}g",
            food.name,
            p.calories_per_100g,
            p.protein_per_100g,
            p.carbs_per_100g,
            p.fat_per_100g,
            width = max_name_len
        );
    }

    println!();
}

/// Display one food's per-100g values.
pub fn display_food_profile(food: &Food) {
    let p = &food.profile;
    println!();
    println!("--- {} (per 100g) ---", food.name);
    println!("Calories: {} kcal", p.calories_per_100g);
    println!("Protein: {} g", p.protein_per_100g);
    println!("Carbs: {} g", p.carbs_per_100g);
    println!("Fat: {} g", p.fat_per_100g);
    println!();
}

/// Display a logged entry.
pub fn display_entry(entry: &IntakeEntry) {
    println!(
        "- {} • {}g  →  {}",
        entry.food,
        entry.grams,
        format_amount(&entry.nutrients)
    );
}

/// Display today's entries and their totals.
pub fn display_intake(session: &Session) {
    println!();
    println!("=== Today's entries ===");

    if session.is_empty() {
        println!("No foods added yet. Use the Food Gallery to track intake.");
        println!();
        return;
    }

    for entry in session.entries() {
        display_entry(entry);
    }

    let total = session.totals();
    println!();
    println!("Daily totals:");
    println!(
        "Calories: {:.1} kcal | Protein: {:.1} g | Carbs: {:.1} g | Fat: {:.1} g",
        total.calories, total.protein_g, total.carbs_g, total.fat_g
    );
    println!();
}

/// Display a diet recommendation with its meal split.
pub fn display_recommendation(recommendation: &Recommendation, profile: Option<&PersonalProfile>) {
    let name = profile.map(PersonalProfile::display_name).unwrap_or("");
    let targets = &recommendation.targets;

    println!();
    if name.is_empty() {
        println!("=== Your personalized plan ===");
    } else {
        println!("=== Hello {} — here is your personalized plan ===", name);
    }
    println!();
    println!("BMR: {} kcal", whole(recommendation.bmr));
    println!("TDEE: {} kcal", whole(recommendation.tdee));
    println!("Target Calories: {} kcal", whole(targets.calories));
    println!();
    println!(
        "Protein target: {} g  •  Fat target: {} g  •  Carbs target: {} g",
        whole(targets.protein_g),
        whole(targets.fat_g),
        whole(targets.carbs_g)
    );

    if targets.carbs_g == 0.0 {
        println!(
            "Note: protein and fat alone cover {} kcal, so no calories are left for carbs.",
            whole(targets.allocated_calories())
        );
    }

    println!();
    println!("--- Suggested meal split ---");
    println!();

    for (slot, share) in recommendation.meals.iter() {
        println!(
            "{:<9} ({:>2.0}%) — ~{} kcal | P:{}g C:{}g F:{}g",
            slot.label(),
            slot.fraction() * 100.0,
            whole(share.calories),
            whole(share.protein_g),
            whole(share.carbs_g),
            whole(share.fat_g)
        );
        println!("          Suggested: {}", slot.suggestion());
    }

    println!();
    println!("Note: this is a basic generator. For clinical diet plans consult a nutritionist.");
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whole_truncates() {
        assert_eq!(whole(1673.75), 1673);
        assert_eq!(whole(55.99), 55);
        assert_eq!(whole(0.0), 0);
    }

    #[test]
    fn test_format_amount() {
        let amount = NutrientAmount {
            calories: 194.5,
            protein_g: 8.5,
            carbs_g: 33.0,
            fat_g: 3.5,
        };
        assert_eq!(format_amount(&amount), "194.5 kcal, P:8.5g, C:33.0g, F:3.5g");
    }
}
