use crate::models::{FoodProfile, NutrientAmount};
use crate::planner::constants::REFERENCE_GRAMS;

/// Scale a per-100g profile to `grams`.
///
/// No rounding is applied. Zero and negative quantities scale linearly like any
/// other value; rejecting them is left to the input boundary.
pub fn scale(profile: &FoodProfile, grams: f64) -> NutrientAmount {
    let factor = grams / REFERENCE_GRAMS;
    NutrientAmount {
        calories: profile.calories_per_100g * factor,
        protein_g: profile.protein_per_100g * factor,
        carbs_g: profile.carbs_per_100g * factor,
        fat_g: profile.fat_per_100g * factor,
    }
}
