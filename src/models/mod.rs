mod food;
mod plan;
mod profile;

pub use food::{Food, FoodProfile, NutrientAmount, food_key};
pub use plan::{MacroTargets, MealAllocation, MealSlot, Recommendation};
pub use profile::{ActivityLevel, Gender, Goal, PersonalProfile};
