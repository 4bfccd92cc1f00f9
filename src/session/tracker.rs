use serde::{Deserialize, Serialize};
use tracing::info;

use crate::catalog::FoodCatalog;
use crate::error::{Result, WellnessError};
use crate::models::{NutrientAmount, PersonalProfile, Recommendation};
use crate::planner::{self, AllocationPolicy};

/// One logged food with its scaled nutrients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntakeEntry {
    pub food: String,
    pub grams: f64,
    pub nutrients: NutrientAmount,
}

/// Reject quantities that cannot be logged: zero, negative, infinite or `NaN`.
pub fn check_grams(grams: f64) -> Result<f64> {
    if !grams.is_finite() || grams <= 0.0 {
        return Err(WellnessError::InvalidInput(format!(
            "Grams must be a number greater than zero, got {}",
            grams
        )));
    }
    Ok(grams)
}

/// Caller-owned state of one tracking session: today's entries and the saved details.
#[derive(Debug, Clone, Default)]
pub struct Session {
    entries: Vec<IntakeEntry>,
    profile: Option<PersonalProfile>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up `name`, scale it to `grams` and append the entry.
    ///
    /// `grams` must be finite and positive; a rejected call leaves the session unchanged.
    pub fn log_food(
        &mut self,
        catalog: &FoodCatalog,
        name: &str,
        grams: f64,
    ) -> Result<&IntakeEntry> {
        check_grams(grams)?;

        let food = catalog.resolve(name)?;
        let entry = IntakeEntry {
            food: food.name.clone(),
            grams,
            nutrients: planner::scale(&food.profile, grams),
        };
        info!(food = %entry.food, grams, kcal = entry.nutrients.calories, "logged food");

        self.entries.push(entry);
        Ok(&self.entries[self.entries.len() - 1])
    }

    /// Entries in the order they were logged.
    pub fn entries(&self) -> &[IntakeEntry] {
        &self.entries
    }

    /// Aggregate of all entries.
    pub fn totals(&self) -> NutrientAmount {
        self.entries.iter().map(|e| e.nutrients).sum()
    }

    pub fn clear_entries(&mut self) {
        info!(count = self.entries.len(), "cleared intake entries");
        self.entries.clear();
    }

    /// Save personal details after validating them.
    pub fn set_profile(&mut self, profile: PersonalProfile) -> Result<()> {
        profile.validate()?;
        info!(
            activity = %profile.activity,
            goal = %profile.goal,
            "saved personal details"
        );
        self.profile = Some(profile);
        Ok(())
    }

    pub fn profile(&self) -> Option<&PersonalProfile> {
        self.profile.as_ref()
    }

    /// Run the recommendation pipeline on the saved details.
    pub fn recommendation(&self, policy: &AllocationPolicy) -> Result<Recommendation> {
        let profile = self.profile.as_ref().ok_or(WellnessError::MissingProfile)?;
        Ok(planner::recommend(profile, policy))
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
