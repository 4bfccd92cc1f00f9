use tracing::debug;

use crate::models::{ActivityLevel, Gender, Goal};
use crate::planner::constants::{
    MSJ_AGE_COEF, MSJ_FEMALE_CONSTANT, MSJ_HEIGHT_COEF, MSJ_MALE_CONSTANT, MSJ_WEIGHT_COEF,
};

/// Basal metabolic rate (kcal/day) from the Mifflin-St Jeor equation.
///
/// Formula: `10 * weight_kg + 6.25 * height_cm - 5 * age + c`,
/// with `c = +5` for men and `c = -161` for women.
pub fn mifflin_bmr(weight_kg: f64, height_cm: f64, age_years: u32, gender: Gender) -> f64 {
    let gender_constant = match gender {
        Gender::Male => MSJ_MALE_CONSTANT,
        Gender::Female => MSJ_FEMALE_CONSTANT,
    };

    MSJ_WEIGHT_COEF * weight_kg
        + MSJ_HEIGHT_COEF * height_cm
        + MSJ_AGE_COEF * f64::from(age_years)
        + gender_constant
}

/// `mifflin_bmr` with a free-form gender label.
///
/// Labels starting with "m" (any case) use the male constant; everything else,
/// including unrecognized text, uses the female constant.
pub fn mifflin_bmr_for_label(weight_kg: f64, height_cm: f64, age_years: u32, gender: &str) -> f64 {
    mifflin_bmr(weight_kg, height_cm, age_years, Gender::from_label(gender))
}

/// Multiplier for an activity form label, 1.2 (sedentary) when the label is not
/// one of the exact form labels.
pub fn activity_factor(label: &str) -> f64 {
    ActivityLevel::from_label(label).multiplier()
}

/// Total daily energy expenditure.
pub fn tdee(bmr: f64, activity: ActivityLevel) -> f64 {
    bmr * activity.multiplier()
}

/// Calorie target after applying the goal adjustment to TDEE.
pub fn goal_calories(tdee: f64, goal: Goal) -> f64 {
    let target = tdee * goal.multiplier();
    debug!(tdee, ?goal, target, "applied goal multiplier");
    target
}

/// `goal_calories` with a free-form goal label; anything but the exact
/// "Lose weight" or "Gain weight" labels maintains.
pub fn goal_calories_for_label(tdee: f64, goal: &str) -> f64 {
    goal_calories(tdee, Goal::from_label(goal))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bmr_male() {
        assert_eq!(mifflin_bmr(70.0, 175.0, 25, Gender::Male), 1673.75);
    }

    #[test]
    fn test_bmr_female() {
        assert_eq!(mifflin_bmr(70.0, 175.0, 25, Gender::Female), 1507.75);
    }

    #[test]
    fn test_bmr_label_fallback() {
        assert_eq!(mifflin_bmr_for_label(70.0, 175.0, 25, "Male"), 1673.75);
        assert_eq!(mifflin_bmr_for_label(70.0, 175.0, 25, "m"), 1673.75);
        assert_eq!(mifflin_bmr_for_label(70.0, 175.0, 25, "Female"), 1507.75);
        assert_eq!(mifflin_bmr_for_label(70.0, 175.0, 25, "unknown"), 1507.75);
    }

    #[test]
    fn test_activity_factor() {
        assert_eq!(activity_factor("Sedentary"), 1.2);
        assert_eq!(activity_factor("Light (1-3x/wk)"), 1.375);
        assert_eq!(activity_factor("Moderate (3-5x/wk)"), 1.55);
        assert_eq!(activity_factor("Active (6-7x/wk)"), 1.725);
        assert_eq!(activity_factor("Very active / labor"), 1.9);
        assert_eq!(activity_factor("marathon every day"), 1.2);
        assert_eq!(activity_factor("light"), 1.2);
    }

    #[test]
    fn test_tdee() {
        assert!((tdee(1500.0, ActivityLevel::Moderate) - 2325.0).abs() < 1e-9);
    }

    #[test]
    fn test_goal_calories() {
        assert_eq!(goal_calories(1000.0, Goal::Lose), 850.0);
        assert_eq!(goal_calories(1000.0, Goal::Gain), 1150.0);
        assert_eq!(goal_calories(1000.0, Goal::Maintain), 1000.0);
    }

    #[test]
    fn test_goal_calories_for_label() {
        assert_eq!(goal_calories_for_label(1000.0, "Lose weight"), 850.0);
        assert_eq!(goal_calories_for_label(1000.0, "Gain weight"), 1150.0);
        assert_eq!(goal_calories_for_label(1000.0, "Maintain weight"), 1000.0);
        assert_eq!(goal_calories_for_label(1000.0, "whatever"), 1000.0);
        assert_eq!(goal_calories_for_label(1000.0, "lose"), 1000.0);
    }
}
