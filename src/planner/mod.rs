pub mod constants;
pub mod energy;
pub mod macros;
pub mod meals;
pub mod scaling;

use tracing::debug;

use crate::models::{PersonalProfile, Recommendation};

pub use constants::*;
pub use energy::{
    activity_factor, goal_calories, goal_calories_for_label, mifflin_bmr, mifflin_bmr_for_label,
    tdee,
};
pub use macros::{AllocationPolicy, allocate, calories_from_macros};
pub use meals::split_meals;
pub use scaling::scale;

/// Run the full pipeline: BMR, TDEE, goal adjustment, macros and meal split.
pub fn recommend(profile: &PersonalProfile, policy: &AllocationPolicy) -> Recommendation {
    let bmr = mifflin_bmr(
        profile.weight_kg,
        profile.height_cm,
        profile.age_years,
        profile.gender,
    );
    let tdee = tdee(bmr, profile.activity);
    debug!(bmr, tdee, activity = ?profile.activity, "estimated energy expenditure");

    let target = goal_calories(tdee, profile.goal);
    let targets = allocate(target, profile.weight_kg, policy);
    debug!(?targets, "allocated macros");

    Recommendation {
        bmr,
        tdee,
        targets,
        meals: split_meals(&targets),
    }
}
