// ─────────────────────────────────────────────────────────────────────────────
// Energy density (Atwater factors)
// ─────────────────────────────────────────────────────────────────────────────

/// kcal per gram of protein.
pub const KCAL_PER_G_PROTEIN: f64 = 4.0;

/// kcal per gram of carbohydrate.
pub const KCAL_PER_G_CARBS: f64 = 4.0;

/// kcal per gram of fat.
pub const KCAL_PER_G_FAT: f64 = 9.0;

/// Catalog values are given per this many grams.
pub const REFERENCE_GRAMS: f64 = 100.0;

// ─────────────────────────────────────────────────────────────────────────────
// Mifflin-St Jeor coefficients
// ─────────────────────────────────────────────────────────────────────────────

pub const MSJ_WEIGHT_COEF: f64 = 10.0;
pub const MSJ_HEIGHT_COEF: f64 = 6.25;
pub const MSJ_AGE_COEF: f64 = -5.0;
pub const MSJ_MALE_CONSTANT: f64 = 5.0;
pub const MSJ_FEMALE_CONSTANT: f64 = -161.0;

// ─────────────────────────────────────────────────────────────────────────────
// Activity and goal multipliers
// ─────────────────────────────────────────────────────────────────────────────

pub const ACTIVITY_SEDENTARY: f64 = 1.2;
pub const ACTIVITY_LIGHT: f64 = 1.375;
pub const ACTIVITY_MODERATE: f64 = 1.55;
pub const ACTIVITY_ACTIVE: f64 = 1.725;
pub const ACTIVITY_VERY_ACTIVE: f64 = 1.9;

/// 15% deficit.
pub const GOAL_LOSE_MULT: f64 = 0.85;

/// 15% surplus.
pub const GOAL_GAIN_MULT: f64 = 1.15;

pub const GOAL_MAINTAIN_MULT: f64 = 1.0;

// ─────────────────────────────────────────────────────────────────────────────
// Macro allocation policy defaults
// ─────────────────────────────────────────────────────────────────────────────

/// Grams of protein per kg of body weight.
pub const DEFAULT_PROTEIN_PER_KG: f64 = 1.6;

/// Share of target calories that come from fat.
pub const DEFAULT_FAT_FRACTION: f64 = 0.25;

// ─────────────────────────────────────────────────────────────────────────────
// Meal split
// ─────────────────────────────────────────────────────────────────────────────

pub const BREAKFAST_FRACTION: f64 = 0.25;
pub const LUNCH_FRACTION: f64 = 0.35;
pub const DINNER_FRACTION: f64 = 0.30;
pub const SNACKS_FRACTION: f64 = 0.10;

// ─────────────────────────────────────────────────────────────────────────────
// Details form bounds
// ─────────────────────────────────────────────────────────────────────────────

pub const MIN_AGE_YEARS: u32 = 10;
pub const MAX_AGE_YEARS: u32 = 100;
pub const MIN_WEIGHT_KG: f64 = 25.0;
pub const MAX_WEIGHT_KG: f64 = 200.0;
pub const MIN_HEIGHT_CM: f64 = 120.0;
pub const MAX_HEIGHT_CM: f64 = 230.0;

/// Smallest quantity accepted when logging a food.
pub const MIN_LOGGED_GRAMS: f64 = 1.0;

/// Largest quantity accepted when logging a food.
pub const MAX_LOGGED_GRAMS: f64 = 10_000.0;
