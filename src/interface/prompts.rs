use std::fmt::Display;
use std::path::PathBuf;
use std::str::FromStr;

use dialoguer::{Confirm, Input, Select};

use crate::catalog::FoodCatalog;
use crate::error::{Result, WellnessError};
use crate::models::{ActivityLevel, Food, Gender, Goal, PersonalProfile};
use crate::planner::constants::{
    MAX_AGE_YEARS, MAX_HEIGHT_CM, MAX_LOGGED_GRAMS, MAX_WEIGHT_KG, MIN_AGE_YEARS, MIN_HEIGHT_CM,
    MIN_LOGGED_GRAMS, MIN_WEIGHT_KG,
};

/// Entries of the interactive session menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Home,
    FoodGallery,
    PersonalDetails,
    DietRecommendation,
    ExportIntake,
    ClearIntake,
    Quit,
}

impl MenuChoice {
    pub const ALL: [MenuChoice; 7] = [
        MenuChoice::Home,
        MenuChoice::FoodGallery,
        MenuChoice::PersonalDetails,
        MenuChoice::DietRecommendation,
        MenuChoice::ExportIntake,
        MenuChoice::ClearIntake,
        MenuChoice::Quit,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            MenuChoice::Home => "Home",
            MenuChoice::FoodGallery => "Food Gallery",
            MenuChoice::PersonalDetails => "Personal Details",
            MenuChoice::DietRecommendation => "Diet Recommendation",
            MenuChoice::ExportIntake => "Export today's entries (CSV)",
            MenuChoice::ClearIntake => "Clear today's entries",
            MenuChoice::Quit => "Quit",
        }
    }
}

/// Parse a number and check it lies within `min..=max`.
///
/// Values that do not compare with the bounds (`NaN`) are rejected.
pub fn parse_in_range<T>(input: &str, min: T, max: T, what: &str) -> Result<T>
where
    T: FromStr + PartialOrd + Display + Copy,
{
    let value: T = input
        .trim()
        .parse()
        .map_err(|_| WellnessError::InvalidInput(format!("Invalid number for {}", what)))?;

    let in_range = value >= min && value <= max;
    if !in_range {
        return Err(WellnessError::InvalidInput(format!(
            "{} must be between {} and {}",
            what, min, max
        )));
    }

    Ok(value)
}

/// Prompt for a number in range, asking again on bad input.
fn prompt_number<T>(prompt: &str, default: T, min: T, max: T) -> Result<T>
where
    T: FromStr + PartialOrd + Display + Copy,
{
    loop {
        let input: String = Input::new()
            .with_prompt(prompt)
            .default(default.to_string())
            .interact_text()?;

        match parse_in_range(&input, min, max, prompt) {
            Ok(value) => return Ok(value),
            Err(e) => println!("{}", e),
        }
    }
}

/// Select from a fixed list, pre-selecting `current`.
fn select_from<T: Copy + PartialEq>(
    prompt: &str,
    options: &[T],
    label: impl Fn(&T) -> &'static str,
    current: Option<T>,
) -> Result<T> {
    let labels: Vec<&str> = options.iter().map(&label).collect();
    let default = current
        .and_then(|c| options.iter().position(|o| *o == c))
        .unwrap_or(0);

    let selection = Select::new()
        .with_prompt(prompt)
        .items(&labels)
        .default(default)
        .interact()?;

    Ok(options[selection])
}

/// Prompt for the next menu entry.
pub fn prompt_menu() -> Result<MenuChoice> {
    select_from("What would you like to do?", &MenuChoice::ALL, MenuChoice::label, None)
}

/// Prompt for a food from the catalog.
pub fn prompt_food(catalog: &FoodCatalog) -> Result<&Food> {
    let names = catalog.names();
    if names.is_empty() {
        return Err(WellnessError::InvalidInput("The food catalog is empty".to_string()));
    }

    let selection = Select::new()
        .with_prompt("Select food (per 100g values)")
        .items(&names)
        .default(0)
        .interact()?;

    catalog.resolve(names[selection])
}

/// Prompt for grams consumed.
pub fn prompt_grams() -> Result<f64> {
    prompt_number("Enter grams consumed", 100.0, MIN_LOGGED_GRAMS, MAX_LOGGED_GRAMS)
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

/// Prompt for an output file path.
pub fn prompt_path(prompt: &str, default: &str) -> Result<PathBuf> {
    let input: String = Input::new()
        .with_prompt(prompt)
        .default(default.to_string())
        .interact_text()?;

    Ok(PathBuf::from(input.trim()))
}

/// Personal details form, pre-filled from `current` when present.
pub fn prompt_personal_details(current: Option<&PersonalProfile>) -> Result<PersonalProfile> {
    let name: String = Input::new()
        .with_prompt("Name (optional)")
        .default(
            current
                .and_then(|p| p.name.clone())
                .unwrap_or_default(),
        )
        .allow_empty(true)
        .interact_text()?;

    let age_years = prompt_number(
        "Age",
        current.map(|p| p.age_years).unwrap_or(20),
        MIN_AGE_YEARS,
        MAX_AGE_YEARS,
    )?;
    let gender = select_from("Gender", &Gender::ALL, Gender::label, current.map(|p| p.gender))?;
    let weight_kg = prompt_number(
        "Weight (kg)",
        current.map(|p| p.weight_kg).unwrap_or(60.0),
        MIN_WEIGHT_KG,
        MAX_WEIGHT_KG,
    )?;
    let height_cm = prompt_number(
        "Height (cm)",
        current.map(|p| p.height_cm).unwrap_or(170.0),
        MIN_HEIGHT_CM,
        MAX_HEIGHT_CM,
    )?;
    let activity = select_from(
        "Activity Level",
        &ActivityLevel::ALL,
        ActivityLevel::label,
        current.map(|p| p.activity),
    )?;
    let goal = select_from("Goal", &Goal::ALL, Goal::label, current.map(|p| p.goal))?;

    let name = name.trim();
    Ok(PersonalProfile {
        name: (!name.is_empty()).then(|| name.to_string()),
        weight_kg,
        height_cm,
        age_years,
        gender,
        activity,
        goal,
    })
}
