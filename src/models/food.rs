use std::iter::Sum;
use std::ops::{Add, AddAssign};

use serde::{Deserialize, Serialize};

/// Per-100g calorie and macro profile of a food.
///
/// Liquids in the catalog are expressed per 100 ml with the same fields.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FoodProfile {
    #[serde(rename = "Calories")]
    pub calories_per_100g: f64,

    #[serde(rename = "Protein")]
    pub protein_per_100g: f64,

    #[serde(rename = "Carbs")]
    pub carbs_per_100g: f64,

    #[serde(rename = "Fat")]
    pub fat_per_100g: f64,
}

impl FoodProfile {
    pub const fn new(calories: f64, protein: f64, carbs: f64, fat: f64) -> Self {
        Self {
            calories_per_100g: calories,
            protein_per_100g: protein,
            carbs_per_100g: carbs,
            fat_per_100g: fat,
        }
    }

    /// Nutrients contained in `grams` of this food.
    #[inline]
    pub fn scale(&self, grams: f64) -> NutrientAmount {
        crate::planner::scale(self, grams)
    }

    /// Basic validation: all values non-negative and finite.
    pub fn is_valid(&self) -> bool {
        [
            self.calories_per_100g,
            self.protein_per_100g,
            self.carbs_per_100g,
            self.fat_per_100g,
        ]
        .into_iter()
        .all(|v| v.is_finite() && v >= 0.0)
    }
}

/// A named catalog entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Food {
    #[serde(rename = "Name")]
    pub name: String,

    #[serde(flatten)]
    pub profile: FoodProfile,
}

impl Food {
    pub fn new(name: impl Into<String>, profile: FoodProfile) -> Self {
        Self {
            name: name.into(),
            profile,
        }
    }

    /// Canonical key for lookups (lowercase, trimmed name).
    pub fn key(&self) -> String {
        food_key(&self.name)
    }
}

/// Lookup key used by the catalog for a food name.
pub fn food_key(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Calories and macro grams of a scaled food or an aggregated total.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct NutrientAmount {
    pub calories: f64,
    pub protein_g: f64,
    pub carbs_g: f64,
    pub fat_g: f64,
}

impl NutrientAmount {
    pub const ZERO: Self = Self {
        calories: 0.0,
        protein_g: 0.0,
        carbs_g: 0.0,
        fat_g: 0.0,
    };

    /// Multiply every channel by `factor`.
    pub fn scaled(&self, factor: f64) -> Self {
        Self {
            calories: self.calories * factor,
            protein_g: self.protein_g * factor,
            carbs_g: self.carbs_g * factor,
            fat_g: self.fat_g * factor,
        }
    }
}

impl Add for NutrientAmount {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            calories: self.calories + rhs.calories,
            protein_g: self.protein_g + rhs.protein_g,
            carbs_g: self.carbs_g + rhs.carbs_g,
            fat_g: self.fat_g + rhs.fat_g,
        }
    }
}

impl AddAssign for NutrientAmount {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sum for NutrientAmount {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |acc, amount| acc + amount)
    }
}

impl<'a> Sum<&'a NutrientAmount> for NutrientAmount {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.copied().sum()
    }
}
