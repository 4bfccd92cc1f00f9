use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::planner::constants::{DEFAULT_FAT_FRACTION, DEFAULT_PROTEIN_PER_KG};

/// Smart Wellness — track foods and get calorie and macro targets split across meals.
#[derive(Parser, Debug)]
#[command(name = "smart_wellness")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to a JSON food catalog replacing the built-in table.
    #[arg(short, long, global = true)]
    pub catalog: Option<PathBuf>,

    /// Enable debug logging (overridden by RUST_LOG).
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug, Default)]
pub enum Command {
    /// Interactive session: log foods, enter details, get a diet plan.
    #[default]
    Session,

    /// List the food catalog with per-100g values.
    Foods,

    /// Show the nutrients in a quantity of one food.
    Scale {
        /// Food name (case-insensitive).
        food: String,

        /// Quantity in grams (ml for liquids).
        grams: f64,
    },

    /// Compute a diet recommendation from personal details.
    Recommend {
        /// Body weight in kg.
        #[arg(long)]
        weight: f64,

        /// Height in cm.
        #[arg(long)]
        height: f64,

        /// Age in years.
        #[arg(long)]
        age: u32,

        /// male or female.
        #[arg(long)]
        gender: String,

        /// sedentary, light, moderate, active or very-active.
        #[arg(long, default_value = "sedentary")]
        activity: String,

        /// maintain, lose or gain.
        #[arg(long, default_value = "maintain")]
        goal: String,

        /// Protein grams per kg of body weight.
        #[arg(long, default_value_t = DEFAULT_PROTEIN_PER_KG)]
        protein_per_kg: f64,

        /// Share of calories from fat (0-1).
        #[arg(long, default_value_t = DEFAULT_FAT_FRACTION)]
        fat_fraction: f64,

        /// Print the recommendation as JSON.
        #[arg(long)]
        json: bool,

        /// Also write the meal split to this CSV file.
        #[arg(long)]
        csv: Option<PathBuf>,
    },
}
