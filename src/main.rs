use std::path::{Path, PathBuf};

use clap::Parser;
use tracing::{debug, warn};

use smart_wellness_rs::catalog::{BUILTIN_CATALOG, FoodCatalog, load_catalog};
use smart_wellness_rs::cli::{Cli, Command};
use smart_wellness_rs::error::{Result, WellnessError};
use smart_wellness_rs::interface::{
    MenuChoice, display_catalog, display_entry, display_food_profile, display_intake,
    display_recommendation, format_amount, prompt_food, prompt_grams, prompt_menu, prompt_path,
    prompt_personal_details, prompt_yes_no,
};
use smart_wellness_rs::logging;
use smart_wellness_rs::models::{ActivityLevel, Gender, Goal, PersonalProfile};
use smart_wellness_rs::planner::{self, AllocationPolicy};
use smart_wellness_rs::session::{Session, check_grams, write_intake_csv, write_plan_csv};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let catalog = match &cli.catalog {
        Some(path) => load_catalog(path)?,
        None => BUILTIN_CATALOG.clone(),
    };
    debug!(foods = catalog.len(), "catalog ready");

    match cli.command.unwrap_or_default() {
        Command::Session => cmd_session(&catalog),
        Command::Foods => {
            display_catalog(&catalog);
            Ok(())
        }
        Command::Scale { food, grams } => cmd_scale(&catalog, &food, grams),
        Command::Recommend {
            weight,
            height,
            age,
            gender,
            activity,
            goal,
            protein_per_kg,
            fat_fraction,
            json,
            csv,
        } => {
            let profile = PersonalProfile {
                name: None,
                weight_kg: weight,
                height_cm: height,
                age_years: age,
                gender: gender.parse::<Gender>()?,
                activity: activity.parse::<ActivityLevel>()?,
                goal: goal.parse::<Goal>()?,
            };
            let policy = AllocationPolicy {
                protein_per_kg,
                fat_fraction,
            };
            cmd_recommend(&profile, &policy, json, csv.as_deref())
        }
    }
}

/// Print the nutrients in a quantity of one food.
fn cmd_scale(catalog: &FoodCatalog, name: &str, grams: f64) -> Result<()> {
    let grams = check_grams(grams)?;
    let food = catalog.resolve(name)?;
    let amount = food.profile.scale(grams);
    println!("{}g of {}: {}", grams, food.name, format_amount(&amount));
    Ok(())
}

/// Compute and print a recommendation from command-line details.
fn cmd_recommend(
    profile: &PersonalProfile,
    policy: &AllocationPolicy,
    json: bool,
    csv_path: Option<&Path>,
) -> Result<()> {
    profile.validate()?;
    policy.validate()?;

    let recommendation = planner::recommend(profile, policy);

    if json {
        println!("{}", serde_json::to_string_pretty(&recommendation)?);
    } else {
        display_recommendation(&recommendation, Some(profile));
    }

    if let Some(path) = csv_path {
        write_plan_csv(path, &recommendation)?;
        eprintln!("Wrote meal split to {}", path.display());
    }

    Ok(())
}

/// Interactive session: the menu loop over food logging, details and the plan.
fn cmd_session(catalog: &FoodCatalog) -> Result<()> {
    let mut session = Session::new();
    let policy = AllocationPolicy::default();

    print_home();

    loop {
        match prompt_menu()? {
            MenuChoice::Home => print_home(),
            MenuChoice::FoodGallery => food_gallery(catalog, &mut session)?,
            MenuChoice::PersonalDetails => {
                let profile = prompt_personal_details(session.profile())?;
                match session.set_profile(profile) {
                    Ok(()) => println!("Details saved!"),
                    Err(e) => println!("{}", e),
                }
            }
            MenuChoice::DietRecommendation => match session.recommendation(&policy) {
                Ok(recommendation) => display_recommendation(&recommendation, session.profile()),
                Err(WellnessError::MissingProfile) => {
                    println!("Please fill your personal details in 'Personal Details' first.");
                }
                Err(e) => return Err(e),
            },
            MenuChoice::ExportIntake => export_intake(&session)?,
            MenuChoice::ClearIntake => {
                if session.is_empty() {
                    println!("Nothing to clear.");
                } else if prompt_yes_no("Clear all of today's entries?", false)? {
                    session.clear_entries();
                    println!("Entries cleared.");
                }
            }
            MenuChoice::Quit => break,
        }
    }

    Ok(())
}

fn print_home() {
    println!();
    println!("=== Smart Wellness Assistant ===");
    println!();
    println!("This tool helps you:");
    println!("  1) calculate calories & macros for foods,");
    println!("  2) track daily intake,");
    println!("  3) get an automatic diet plan based on your details.");
    println!();
    println!("Use 'Food Gallery' to add eaten items, then enter your personal details");
    println!("and open 'Diet Recommendation' to get a plan.");
    println!();
}

/// Pick a food, show its values, optionally log a quantity, then show the day so far.
fn food_gallery(catalog: &FoodCatalog, session: &mut Session) -> Result<()> {
    let food = prompt_food(catalog)?;
    display_food_profile(food);

    if prompt_yes_no("Add to daily intake?", true)? {
        let grams = prompt_grams()?;
        let entry = session.log_food(catalog, &food.name, grams)?;
        println!("Added {}g of {}", grams, entry.food);
        display_entry(entry);
    }

    display_intake(session);
    Ok(())
}

fn export_intake(session: &Session) -> Result<()> {
    if session.is_empty() {
        println!("No foods added yet; nothing to export.");
        return Ok(());
    }

    let path: PathBuf = prompt_path("Export to", "intake.csv")?;
    if path.exists() && !prompt_yes_no(&format!("Overwrite {}?", path.display()), false)? {
        return Ok(());
    }

    match write_intake_csv(&path, session) {
        Ok(()) => println!("Wrote {} entries to {}", session.entries().len(), path.display()),
        Err(e) => {
            warn!(error = %e, "intake export failed");
            println!("Export failed: {}", e);
        }
    }
    Ok(())
}
