use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::models::NutrientAmount;
use crate::planner::constants::{
    BREAKFAST_FRACTION, DINNER_FRACTION, LUNCH_FRACTION, SNACKS_FRACTION,
};

/// Daily calorie and macro targets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MacroTargets {
    pub calories: f64,
    pub protein_g: f64,
    pub fat_g: f64,
    pub carbs_g: f64,
}

impl MacroTargets {
    /// Calories actually covered by the macro grams.
    ///
    /// Exceeds `calories` when carbs were clamped at zero.
    pub fn allocated_calories(&self) -> f64 {
        crate::planner::macros::calories_from_macros(self.protein_g, self.carbs_g, self.fat_g)
    }

    /// The same targets as a `NutrientAmount`.
    pub fn as_amount(&self) -> NutrientAmount {
        NutrientAmount {
            calories: self.calories,
            protein_g: self.protein_g,
            carbs_g: self.carbs_g,
            fat_g: self.fat_g,
        }
    }
}

/// Meal slots of the day, in eating order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum MealSlot {
    Breakfast,
    Lunch,
    Dinner,
    Snacks,
}

impl MealSlot {
    pub const ALL: [MealSlot; 4] = [
        MealSlot::Breakfast,
        MealSlot::Lunch,
        MealSlot::Dinner,
        MealSlot::Snacks,
    ];

    /// Share of the daily targets given to this slot.
    pub fn fraction(&self) -> f64 {
        match self {
            MealSlot::Breakfast => BREAKFAST_FRACTION,
            MealSlot::Lunch => LUNCH_FRACTION,
            MealSlot::Dinner => DINNER_FRACTION,
            MealSlot::Snacks => SNACKS_FRACTION,
        }
    }

    /// Example foods for the slot.
    pub fn suggestion(&self) -> &'static str {
        match self {
            MealSlot::Breakfast => "Oats + Milk + 1-2 Eggs + Banana",
            MealSlot::Lunch => "Rice / Roti + Chicken / Paneer + Salad / Veggies",
            MealSlot::Dinner => "Roti + Dal + Veggies (lighter)",
            MealSlot::Snacks => "Fruit, Nuts, Greek yogurt",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MealSlot::Breakfast => "Breakfast",
            MealSlot::Lunch => "Lunch",
            MealSlot::Dinner => "Dinner",
            MealSlot::Snacks => "Snacks",
        }
    }
}

impl fmt::Display for MealSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Per-meal shares of the daily targets.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MealAllocation {
    meals: BTreeMap<MealSlot, NutrientAmount>,
}

impl MealAllocation {
    pub fn new(meals: BTreeMap<MealSlot, NutrientAmount>) -> Self {
        Self { meals }
    }

    pub fn get(&self, slot: MealSlot) -> Option<&NutrientAmount> {
        self.meals.get(&slot)
    }

    /// Slots in eating order.
    pub fn iter(&self) -> impl Iterator<Item = (MealSlot, &NutrientAmount)> {
        self.meals.iter().map(|(slot, amount)| (*slot, amount))
    }

    /// Sum of all slots; reconstructs the daily targets.
    pub fn total(&self) -> NutrientAmount {
        self.meals.values().sum()
    }

    pub fn len(&self) -> usize {
        self.meals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.meals.is_empty()
    }
}

/// Output of the recommendation pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub bmr: f64,
    pub tdee: f64,
    pub targets: MacroTargets,
    pub meals: MealAllocation,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_fractions_sum_to_one() {
        // 0.9999999999999999 in f64
        let sum: f64 = MealSlot::ALL.iter().map(MealSlot::fraction).sum();
        assert!((sum - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_slots_ordered_by_meal_time() {
        let mut slots = vec![MealSlot::Snacks, MealSlot::Lunch, MealSlot::Breakfast, MealSlot::Dinner];
        slots.sort();
        assert_eq!(slots, MealSlot::ALL.to_vec());
    }

    #[test]
    fn test_allocated_calories() {
        let targets = MacroTargets {
            calories: 2000.0,
            protein_g: 100.0,
            fat_g: 50.0,
            carbs_g: 200.0,
        };
        // 400 + 450 + 800
        assert!((targets.allocated_calories() - 1650.0).abs() < 1e-9);
    }
}
