pub mod catalog;
pub mod cli;
pub mod error;
pub mod interface;
pub mod logging;
pub mod models;
pub mod planner;
pub mod session;

pub use error::{Result, WellnessError};
pub use models::{FoodProfile, MacroTargets, NutrientAmount, PersonalProfile, Recommendation};
