#[macro_use]
extern crate assert_float_eq;

use smart_wellness_rs::catalog::BUILTIN_CATALOG;
use smart_wellness_rs::models::{
    ActivityLevel, FoodProfile, Gender, Goal, MacroTargets, MealSlot, PersonalProfile,
};
use smart_wellness_rs::planner::{
    AllocationPolicy, activity_factor, allocate, goal_calories, goal_calories_for_label,
    mifflin_bmr, mifflin_bmr_for_label, recommend, scale, split_meals,
};

const EPS: f64 = 1e-9;

fn sample_profile(goal: Goal) -> PersonalProfile {
    PersonalProfile {
        name: Some("Test".to_string()),
        weight_kg: 70.0,
        height_cm: 175.0,
        age_years: 25,
        gender: Gender::Male,
        activity: ActivityLevel::Moderate,
        goal,
    }
}

#[test]
fn test_scale_is_linear_for_every_catalog_food() {
    for food in BUILTIN_CATALOG.iter() {
        let whole = scale(&food.profile, 175.0);
        let parts = scale(&food.profile, 100.0) + scale(&food.profile, 75.0);
        assert_float_absolute_eq!(whole.calories, parts.calories, EPS);
        assert_float_absolute_eq!(whole.protein_g, parts.protein_g, EPS);
        assert_float_absolute_eq!(whole.carbs_g, parts.carbs_g, EPS);
        assert_float_absolute_eq!(whole.fat_g, parts.fat_g, EPS);
    }
}

#[test]
fn test_scale_identity_at_100g() {
    let profile = FoodProfile::new(265.0, 18.0, 6.0, 20.0);
    let amount = scale(&profile, 100.0);
    assert_eq!(amount.calories, profile.calories_per_100g);
    assert_eq!(amount.protein_g, profile.protein_per_100g);
    assert_eq!(amount.carbs_g, profile.carbs_per_100g);
    assert_eq!(amount.fat_g, profile.fat_per_100g);
}

#[test]
fn test_bmr_reference_values() {
    assert_eq!(mifflin_bmr(70.0, 175.0, 25, Gender::Male), 1673.75);
    assert_eq!(mifflin_bmr(70.0, 175.0, 25, Gender::Female), 1507.75);
    assert_eq!(mifflin_bmr_for_label(70.0, 175.0, 25, "Male"), 1673.75);
    assert_eq!(mifflin_bmr_for_label(70.0, 175.0, 25, "Female"), 1507.75);
}

#[test]
fn test_activity_factor_defaults_to_sedentary() {
    assert_eq!(activity_factor("Sedentary"), 1.2);
    assert_eq!(activity_factor("not a level"), 1.2);
}

#[test]
fn test_goal_calories_reference_values() {
    assert_eq!(goal_calories(1000.0, Goal::Lose), 850.0);
    assert_eq!(goal_calories(1000.0, Goal::Gain), 1150.0);
    assert_eq!(goal_calories(1000.0, Goal::Maintain), 1000.0);
    assert_eq!(goal_calories_for_label(1000.0, "Lose weight"), 850.0);
    assert_eq!(goal_calories_for_label(1000.0, "Gain weight"), 1150.0);
    assert_eq!(goal_calories_for_label(1000.0, "Maintain weight"), 1000.0);
}

#[test]
fn test_allocate_reference_values() {
    let targets = allocate(2000.0, 70.0, &AllocationPolicy::default());
    assert_float_absolute_eq!(targets.protein_g, 112.0, EPS);
    assert_float_absolute_eq!(targets.fat_g, 55.5556, 1e-4);
    assert_float_absolute_eq!(targets.carbs_g, 263.0, EPS);
}

#[test]
fn test_allocate_never_negative_carbs() {
    let policy = AllocationPolicy::default();
    for target in [500.0, 800.0, 1200.0, 2000.0] {
        for weight in [40.0, 90.0, 150.0] {
            let targets = allocate(target, weight, &policy);
            assert!(targets.carbs_g >= 0.0, "negative carbs for {target} kcal, {weight} kg");
        }
    }
}

#[test]
fn test_meal_split_reconstructs_targets() {
    let targets = MacroTargets {
        calories: 2345.6,
        protein_g: 130.2,
        fat_g: 65.1,
        carbs_g: 301.7,
    };
    let meals = split_meals(&targets);
    let total = meals.total();
    assert_float_absolute_eq!(total.calories, targets.calories, EPS);
    assert_float_absolute_eq!(total.protein_g, targets.protein_g, EPS);
    assert_float_absolute_eq!(total.fat_g, targets.fat_g, EPS);
    assert_float_absolute_eq!(total.carbs_g, targets.carbs_g, EPS);

    let fractions: f64 = MealSlot::ALL.iter().map(MealSlot::fraction).sum();
    assert_float_absolute_eq!(fractions, 1.0, 1e-12);
}

#[test]
fn test_recommend_goal_ordering() {
    let policy = AllocationPolicy::default();
    let lose = recommend(&sample_profile(Goal::Lose), &policy);
    let maintain = recommend(&sample_profile(Goal::Maintain), &policy);
    let gain = recommend(&sample_profile(Goal::Gain), &policy);

    assert_eq!(lose.tdee, maintain.tdee);
    assert!(lose.targets.calories < maintain.targets.calories);
    assert!(gain.targets.calories > maintain.targets.calories);
    assert_float_absolute_eq!(maintain.targets.calories, 1673.75 * 1.55, EPS);
}

#[test]
fn test_recommendation_json_shape() {
    let rec = recommend(&sample_profile(Goal::Maintain), &AllocationPolicy::default());
    let json = serde_json::to_value(&rec).unwrap();
    assert!(json["bmr"].is_number());
    assert!(json["targets"]["protein_g"].is_number());
    assert!(json["meals"]["Breakfast"]["calories"].is_number());
}
