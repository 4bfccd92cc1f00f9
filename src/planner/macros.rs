use serde::{Deserialize, Serialize};

use crate::error::{Result, WellnessError};
use crate::models::MacroTargets;
use crate::planner::constants::{
    DEFAULT_FAT_FRACTION, DEFAULT_PROTEIN_PER_KG, KCAL_PER_G_CARBS, KCAL_PER_G_FAT,
    KCAL_PER_G_PROTEIN,
};

/// Protein and fat policy used to split a calorie target into macros.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AllocationPolicy {
    /// Grams of protein per kg of body weight.
    pub protein_per_kg: f64,
    /// Share of the calorie target assigned to fat (0.0 - 1.0).
    pub fat_fraction: f64,
}

impl Default for AllocationPolicy {
    fn default() -> Self {
        Self {
            protein_per_kg: DEFAULT_PROTEIN_PER_KG,
            fat_fraction: DEFAULT_FAT_FRACTION,
        }
    }
}

impl AllocationPolicy {
    pub fn validate(&self) -> Result<()> {
        if !self.protein_per_kg.is_finite() || self.protein_per_kg < 0.0 {
            return Err(WellnessError::InvalidInput(
                "Protein per kg must be a non-negative number".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&self.fat_fraction) {
            return Err(WellnessError::InvalidInput(
                "Fat fraction must be between 0 and 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Calories provided by the given macro grams.
pub fn calories_from_macros(protein_g: f64, carbs_g: f64, fat_g: f64) -> f64 {
    protein_g * KCAL_PER_G_PROTEIN + carbs_g * KCAL_PER_G_CARBS + fat_g * KCAL_PER_G_FAT
}

/// Split a calorie target into protein, fat and carb grams.
///
/// Protein is fixed per kg of body weight, fat is a fixed share of calories and
/// carbs take the remainder. Carbs are clamped at zero; when protein and fat
/// alone exceed the target, the allocated total overshoots the target and
/// protein and fat are left as computed.
pub fn allocate(target_calories: f64, weight_kg: f64, policy: &AllocationPolicy) -> MacroTargets {
    let protein_g = policy.protein_per_kg * weight_kg;
    let fat_cal = policy.fat_fraction * target_calories;
    let fat_g = fat_cal / KCAL_PER_G_FAT;
    let protein_cal = protein_g * KCAL_PER_G_PROTEIN;
    let carb_cal = target_calories - (protein_cal + fat_cal);
    let carbs_g = (carb_cal / KCAL_PER_G_CARBS).max(0.0);

    MacroTargets {
        calories: target_calories,
        protein_g,
        fat_g,
        carbs_g,
    }
}
