use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, WellnessError};
use crate::planner::constants::{
    ACTIVITY_ACTIVE, ACTIVITY_LIGHT, ACTIVITY_MODERATE, ACTIVITY_SEDENTARY, ACTIVITY_VERY_ACTIVE,
    GOAL_GAIN_MULT, GOAL_LOSE_MULT, GOAL_MAINTAIN_MULT,
};

/// Normalize a user-supplied label for matching.
fn normalize(label: &str) -> String {
    label.trim().to_lowercase()
}

/// Gender used to pick the Mifflin-St Jeor constant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub const ALL: [Gender; 2] = [Gender::Male, Gender::Female];

    /// Permissive label mapping: anything starting with "m" (any case) is male,
    /// every other value falls through to female.
    pub fn from_label(label: &str) -> Self {
        if normalize(label).starts_with('m') {
            Gender::Male
        } else {
            Gender::Female
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
        }
    }
}

impl FromStr for Gender {
    type Err = WellnessError;

    fn from_str(s: &str) -> Result<Self> {
        match normalize(s).as_str() {
            "male" | "m" => Ok(Gender::Male),
            "female" | "f" => Ok(Gender::Female),
            _ => Err(WellnessError::InvalidInput(format!(
                "Unknown gender '{}' (expected male or female)",
                s.trim()
            ))),
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Weekly activity level, mapped to a TDEE multiplier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActivityLevel {
    #[default]
    Sedentary,
    Light,
    Moderate,
    Active,
    VeryActive,
}

impl ActivityLevel {
    pub const ALL: [ActivityLevel; 5] = [
        ActivityLevel::Sedentary,
        ActivityLevel::Light,
        ActivityLevel::Moderate,
        ActivityLevel::Active,
        ActivityLevel::VeryActive,
    ];

    /// Multiplier applied to BMR to get TDEE.
    pub fn multiplier(&self) -> f64 {
        match self {
            ActivityLevel::Sedentary => ACTIVITY_SEDENTARY,
            ActivityLevel::Light => ACTIVITY_LIGHT,
            ActivityLevel::Moderate => ACTIVITY_MODERATE,
            ActivityLevel::Active => ACTIVITY_ACTIVE,
            ActivityLevel::VeryActive => ACTIVITY_VERY_ACTIVE,
        }
    }

    /// Human-readable label, as shown in the details form.
    pub fn label(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "Sedentary",
            ActivityLevel::Light => "Light (1-3x/wk)",
            ActivityLevel::Moderate => "Moderate (3-5x/wk)",
            ActivityLevel::Active => "Active (6-7x/wk)",
            ActivityLevel::VeryActive => "Very active / labor",
        }
    }

    /// Permissive label mapping: only the exact form labels are recognized,
    /// everything else counts as sedentary.
    pub fn from_label(label: &str) -> Self {
        ActivityLevel::ALL
            .into_iter()
            .find(|level| level.label() == label)
            .unwrap_or_default()
    }
}

impl FromStr for ActivityLevel {
    type Err = WellnessError;

    fn from_str(s: &str) -> Result<Self> {
        let key = normalize(s);
        ActivityLevel::ALL
            .into_iter()
            .find(|level| normalize(level.label()) == key)
            .or(match key.as_str() {
                "sedentary" => Some(ActivityLevel::Sedentary),
                "light" => Some(ActivityLevel::Light),
                "moderate" => Some(ActivityLevel::Moderate),
                "active" => Some(ActivityLevel::Active),
                "very-active" | "very active" | "very_active" => Some(ActivityLevel::VeryActive),
                _ => None,
            })
            .ok_or_else(|| {
                WellnessError::InvalidInput(format!(
                    "Unknown activity level '{}' (expected sedentary, light, moderate, active or very-active)",
                    s.trim()
                ))
            })
    }
}

impl fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Body-weight goal, mapped to a calorie multiplier on TDEE.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Goal {
    #[default]
    Maintain,
    Lose,
    Gain,
}

impl Goal {
    pub const ALL: [Goal; 3] = [Goal::Maintain, Goal::Lose, Goal::Gain];

    pub fn multiplier(&self) -> f64 {
        match self {
            Goal::Maintain => GOAL_MAINTAIN_MULT,
            Goal::Lose => GOAL_LOSE_MULT,
            Goal::Gain => GOAL_GAIN_MULT,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Goal::Maintain => "Maintain weight",
            Goal::Lose => "Lose weight",
            Goal::Gain => "Gain weight",
        }
    }

    /// Permissive label mapping: anything other than the exact "Lose weight" or
    /// "Gain weight" labels means maintain.
    pub fn from_label(label: &str) -> Self {
        Goal::ALL
            .into_iter()
            .find(|goal| goal.label() == label)
            .unwrap_or_default()
    }
}

impl FromStr for Goal {
    type Err = WellnessError;

    fn from_str(s: &str) -> Result<Self> {
        match normalize(s).as_str() {
            "maintain" | "maintain weight" => Ok(Goal::Maintain),
            "lose" | "lose weight" => Ok(Goal::Lose),
            "gain" | "gain weight" => Ok(Goal::Gain),
            _ => Err(WellnessError::InvalidInput(format!(
                "Unknown goal '{}' (expected maintain, lose or gain)",
                s.trim()
            ))),
        }
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Biometrics and preferences used for a recommendation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonalProfile {
    /// Display name only; never used in calculations.
    #[serde(default)]
    pub name: Option<String>,
    pub weight_kg: f64,
    pub height_cm: f64,
    pub age_years: u32,
    pub gender: Gender,
    pub activity: ActivityLevel,
    pub goal: Goal,
}

impl PersonalProfile {
    /// Reject biometrics the formulas are not meant for.
    pub fn validate(&self) -> Result<()> {
        if !self.weight_kg.is_finite() || self.weight_kg <= 0.0 {
            return Err(WellnessError::InvalidInput(
                "Weight must be a positive number of kg".to_string(),
            ));
        }
        if !self.height_cm.is_finite() || self.height_cm <= 0.0 {
            return Err(WellnessError::InvalidInput(
                "Height must be a positive number of cm".to_string(),
            ));
        }
        if self.age_years == 0 {
            return Err(WellnessError::InvalidInput(
                "Age must be a positive number of years".to_string(),
            ));
        }
        Ok(())
    }

    /// Name for greetings, empty when none was given.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().map(str::trim).unwrap_or("")
    }
}
