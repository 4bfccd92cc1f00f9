pub mod prompts;
pub mod render;

pub use prompts::{
    MenuChoice, parse_in_range, prompt_food, prompt_grams, prompt_menu, prompt_path,
    prompt_personal_details, prompt_yes_no,
};
pub use render::{
    display_catalog, display_entry, display_food_profile, display_intake, display_recommendation,
    format_amount, whole,
};
