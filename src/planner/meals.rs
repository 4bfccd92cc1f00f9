use std::collections::BTreeMap;

use crate::models::{MacroTargets, MealAllocation, MealSlot};

/// Split daily targets across meal slots.
///
/// Each slot's fraction is applied to every channel independently, so summing
/// the slots gives back the daily targets.
pub fn split_meals(targets: &MacroTargets) -> MealAllocation {
    let daily = targets.as_amount();
    let meals: BTreeMap<_, _> = MealSlot::ALL
        .into_iter()
        .map(|slot| (slot, daily.scaled(slot.fraction())))
        .collect();

    MealAllocation::new(meals)
}
